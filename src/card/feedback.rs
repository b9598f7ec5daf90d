//! Copy-link feedback notice with a single-shot auto-clear.
//!
//! Every notice gets a new ticket. The page schedules a clear for that
//! ticket; a clear only lands if no newer notice has been shown since, so a
//! timer left over from an earlier click can never wipe a fresh notice.

pub const COPY_FEEDBACK_MS: u32 = 3000;

pub const COPIED_TEXT: &str = "Copied to clipboard! Send it to them!";
pub const COPY_FAILED_TEXT: &str = "Couldn't copy automatically. Copy this link instead:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn parse(s: &str) -> Option<CopyStatus> {
        match s {
            "ok" => Some(CopyStatus::Copied),
            "failed" => Some(CopyStatus::Failed),
            _ => None,
        }
    }

    /// Failure notices carry the link for manual copying, so they stay up.
    pub fn auto_clears(self) -> bool {
        matches!(self, CopyStatus::Copied)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    ticket: u64,
    shown: Option<CopyStatus>,
}

impl CopyFeedback {
    /// Show a notice, returning the ticket its deferred clear must present.
    pub fn show(&mut self, status: CopyStatus) -> u64 {
        self.ticket += 1;
        self.shown = Some(status);
        self.ticket
    }

    /// Clear the notice if `ticket` is still the current one. Returns whether
    /// anything was cleared.
    pub fn clear(&mut self, ticket: u64) -> bool {
        if ticket == self.ticket && self.shown.is_some() {
            self.shown = None;
            true
        } else {
            false
        }
    }

    pub fn shown(&self) -> Option<CopyStatus> {
        self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_with_current_ticket_clears_once() {
        let mut fb = CopyFeedback::default();
        let t = fb.show(CopyStatus::Copied);
        assert!(fb.clear(t));
        assert_eq!(fb.shown(), None);
        assert!(!fb.clear(t));
    }

    #[test]
    fn stale_ticket_leaves_newer_notice() {
        let mut fb = CopyFeedback::default();
        let first = fb.show(CopyStatus::Copied);
        let second = fb.show(CopyStatus::Copied);
        assert!(!fb.clear(first));
        assert_eq!(fb.shown(), Some(CopyStatus::Copied));
        assert!(fb.clear(second));
    }

    #[test]
    fn parse_status() {
        assert_eq!(CopyStatus::parse("ok"), Some(CopyStatus::Copied));
        assert_eq!(CopyStatus::parse("failed"), Some(CopyStatus::Failed));
        assert_eq!(CopyStatus::parse("maybe"), None);
        assert!(!CopyStatus::Failed.auto_clears());
    }
}
