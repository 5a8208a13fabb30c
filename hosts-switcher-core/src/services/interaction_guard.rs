//! Drag-in-progress guard

/// Tracks whether the user is dragging list items.
///
/// A pointer release anywhere in the window also clears the flag, so a
/// `drag_end` lost outside the list can never leave refresh blocked.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionGuard {
    dragging: bool,
}

impl InteractionGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_start(&mut self) {
        log::debug!("drag_start");
        self.dragging = true;
    }

    pub fn drag_end(&mut self) {
        log::debug!("drag_end");
        self.dragging = false;
    }

    /// Window-level pointer release
    pub fn pointer_released(&mut self) {
        self.dragging = false;
    }
}
