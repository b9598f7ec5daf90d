//! The "No" button: a short run of pleading replies, then it gives up.

pub const DECLINE_LABEL: &str = "No";

/// Replies shown on successive presses, in order.
pub const DECLINE_REPLIES: [&str; 4] = ["Are you sure?", "Pretty please?", "Really?", "Okay :("];

/// Horizontal nudge applied on each counted press, and how long it lasts.
pub const SHAKE_OFFSET_PX: u32 = 10;
pub const SHAKE_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineOutcome {
    /// The label moved on to this reply; the button should shake.
    Advanced(&'static str),
    /// Every reply has been shown. Nothing changes any more.
    Exhausted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclineButton {
    presses: usize,
}

impl DeclineButton {
    pub fn press(&mut self) -> DeclineOutcome {
        match DECLINE_REPLIES.get(self.presses) {
            Some(reply) => {
                self.presses += 1;
                DeclineOutcome::Advanced(reply)
            }
            None => DeclineOutcome::Exhausted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.presses {
            0 => DECLINE_LABEL,
            n => DECLINE_REPLIES[n - 1],
        }
    }
}
