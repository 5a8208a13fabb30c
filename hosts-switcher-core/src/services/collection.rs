//! Hosts entry collection model

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::services::selection::Selection;
use crate::types::{HostsEntry, HostsId, HostsState};

/// Result of a content edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentChange {
    /// Content was identical, nothing to persist
    Unchanged,
    /// Content replaced in place, a save should be scheduled
    Updated,
    /// Target id is no longer in the list (stale UI reference)
    Stale,
}

/// In-memory hosts list plus the system hosts pseudo-entry
///
/// The list keeps the agent's order, since it is the order shown in the list UI.
#[derive(Debug, Clone)]
pub struct HostsCollection {
    list: Vec<HostsEntry>,
    sys_hosts: HostsEntry,
    selection: Selection,
    just_added_id: Option<HostsId>,
}

impl HostsCollection {
    /// Create an empty collection with system hosts selected
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            sys_hosts: HostsEntry::system(""),
            selection: Selection::System,
            just_added_id: None,
        }
    }

    // ===== Queries =====

    pub fn list(&self) -> &[HostsEntry] {
        &self.list
    }

    pub fn sys_hosts(&self) -> &HostsEntry {
        &self.sys_hosts
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn just_added_id(&self) -> Option<&HostsId> {
        self.just_added_id.as_ref()
    }

    /// Find an entry of the user list
    pub fn find(&self, id: &HostsId) -> Option<&HostsEntry> {
        self.list.iter().find(|e| &e.id == id)
    }

    /// The current entry
    pub fn current(&self) -> &HostsEntry {
        match &self.selection {
            Selection::System => &self.sys_hosts,
            Selection::Entry(id) => self.find(id).unwrap_or(&self.sys_hosts),
        }
    }

    /// Whether the current entry refuses edits
    pub fn current_is_read_only(&self) -> bool {
        self.current().is_read_only()
    }

    // ===== Wholesale replacement =====

    /// Replace list and system hosts with a fresh agent state.
    ///
    /// The previous selection survives when its id is still present, otherwise
    /// the system hosts become current.
    pub fn load(&mut self, state: HostsState) {
        self.set_sys_hosts(state.sys_hosts);
        self.adopt_list(state.list);
    }

    /// Replace the list only (remote refresh, agent push).
    pub fn adopt_list(&mut self, list: Vec<HostsEntry>) {
        self.list = sanitize(list);

        if let Selection::Entry(id) = &self.selection {
            if self.find(id).is_none() {
                log::debug!("Current entry {id} gone after list replacement, selecting system hosts");
                self.selection = Selection::System;
            }
        }
    }

    /// Store a freshly fetched system hosts entry
    pub fn set_sys_hosts(&mut self, mut entry: HostsEntry) {
        entry.is_sys = true;
        self.sys_hosts = entry;
    }

    // ===== Selection =====

    /// Change the current entry.
    ///
    /// Returns `false` for a stale reference (id not in the list); the
    /// selection is left untouched in that case.
    pub fn select(&mut self, selection: Selection) -> bool {
        if let Selection::Entry(id) = &selection {
            if self.find(id).is_none() {
                log::debug!("Ignoring selection of unknown entry {id}");
                return false;
            }
        }
        self.selection = selection;
        true
    }

    /// Record the entry created last (UI highlight). Replaces the previous mark.
    pub fn mark_just_added(&mut self, id: HostsId) {
        self.just_added_id = Some(id);
    }

    // ===== Edits =====

    /// Replace the content of an entry in place.
    ///
    /// Identical content is a no-op. An unknown id is a stale reference and is
    /// ignored. A read-only entry is never touched.
    pub fn replace_content(&mut self, id: &HostsId, content: &str) -> CoreResult<ContentChange> {
        let Some(idx) = self.list.iter().position(|e| &e.id == id) else {
            log::debug!("Content edit for unknown entry {id} ignored");
            return Ok(ContentChange::Stale);
        };

        let entry = &mut self.list[idx];
        if entry.content == content {
            return Ok(ContentChange::Unchanged);
        }
        if entry.is_read_only() {
            return Err(CoreError::ReadOnlyEntry(id.clone()));
        }

        entry.content = content.to_string();
        Ok(ContentChange::Updated)
    }

    /// Replace the content of the current entry (the content editor's path).
    pub fn set_current_content(&mut self, content: Option<&str>) -> CoreResult<ContentChange> {
        let content = content.unwrap_or_default();
        match self.selection.clone() {
            Selection::Entry(id) => self.replace_content(&id, content),
            Selection::System if self.sys_hosts.content == content => Ok(ContentChange::Unchanged),
            Selection::System => Err(CoreError::ReadOnlyEntry(self.sys_hosts.id.clone())),
        }
    }
}

impl Default for HostsCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the list disjoint from the system hosts and free of duplicate ids.
fn sanitize(list: Vec<HostsEntry>) -> Vec<HostsEntry> {
    let mut seen = HashSet::with_capacity(list.len());
    list.into_iter()
        .filter(|entry| {
            if entry.is_sys {
                log::warn!("Dropping system hosts entry found inside the user list");
                return false;
            }
            if entry.id.is_empty() {
                log::warn!("Dropping hosts entry without id");
                return false;
            }
            if !seen.insert(entry.id.clone()) {
                log::warn!("Dropping duplicate hosts entry {}", entry.id);
                return false;
            }
            true
        })
        .collect()
}
