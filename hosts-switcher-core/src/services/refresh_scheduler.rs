//! Remote-refresh scheduling policy

use std::time::Duration;

use crate::services::InteractionGuard;
use crate::types::HostsEntry;

/// Why a refresh tick did not issue a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshSkip {
    /// User is dragging list items
    Dragging,
    /// Nothing to refresh
    EmptyList,
    /// Previous check has not answered yet
    InFlight,
}

/// Decides, at each tick of the fixed-period timer, whether to ask the agent
/// for a remote refresh. The decision is taken synchronously from the state at
/// tick time, before any request is issued.
#[derive(Debug, Clone)]
pub struct RemoteRefreshScheduler {
    interval: Duration,
    in_flight: bool,
}

impl RemoteRefreshScheduler {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            in_flight: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Evaluate a tick. On `Ok(())` the check is marked in flight and the
    /// caller must issue the request, then call [`Self::finish`].
    pub fn begin(&mut self, guard: &InteractionGuard, list: &[HostsEntry]) -> Result<(), RefreshSkip> {
        if guard.is_dragging() {
            return Err(RefreshSkip::Dragging);
        }
        if list.is_empty() {
            return Err(RefreshSkip::EmptyList);
        }
        if self.in_flight {
            return Err(RefreshSkip::InFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    /// The outstanding check has answered (successfully or not).
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> Vec<HostsEntry> {
        vec![HostsEntry::local(1, "a")]
    }

    #[test]
    fn skipped_while_dragging() {
        let mut s = RemoteRefreshScheduler::new(Duration::from_secs(60));
        let mut guard = InteractionGuard::new();
        guard.drag_start();

        assert_eq!(s.begin(&guard, &list()), Err(RefreshSkip::Dragging));
        assert!(!s.is_in_flight());

        guard.drag_end();
        assert_eq!(s.begin(&guard, &list()), Ok(()));
    }

    #[test]
    fn skipped_for_empty_list() {
        let mut s = RemoteRefreshScheduler::new(Duration::from_secs(60));
        assert_eq!(
            s.begin(&InteractionGuard::new(), &[]),
            Err(RefreshSkip::EmptyList)
        );
    }

    #[test]
    fn one_check_at_a_time() {
        let mut s = RemoteRefreshScheduler::new(Duration::from_secs(60));
        let guard = InteractionGuard::new();
        assert_eq!(s.begin(&guard, &list()), Ok(()));
        assert_eq!(s.begin(&guard, &list()), Err(RefreshSkip::InFlight));
        s.finish();
        assert_eq!(s.begin(&guard, &list()), Ok(()));
    }
}
