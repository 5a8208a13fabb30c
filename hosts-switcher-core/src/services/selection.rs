//! Selection and read-only policy

use crate::types::{HostsEntry, HostsId, HostsWhere};

/// Which entry is current
///
/// The current entry is always a member of exactly one set: the system hosts
/// or the user list. Storing the id instead of a copy keeps the selection in
/// step with in-place content edits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// The system hosts pseudo-entry
    #[default]
    System,
    /// An entry of the user list
    Entry(HostsId),
}

impl Selection {
    /// Selection matching an entry value
    #[must_use]
    pub fn of(entry: &HostsEntry) -> Self {
        if entry.is_sys {
            Self::System
        } else {
            Self::Entry(entry.id.clone())
        }
    }

    #[must_use]
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System)
    }
}

/// Whether an entry refuses local edits.
///
/// True for an absent entry, the system hosts, and entries whose content is
/// produced elsewhere (`remote`, `group`). Every edit path must consult this
/// before mutating content.
#[must_use]
pub fn is_read_only(entry: Option<&HostsEntry>) -> bool {
    match entry {
        None => true,
        Some(e) if e.is_sys => true,
        Some(e) => matches!(e.provenance, HostsWhere::Remote | HostsWhere::Group),
    }
}
