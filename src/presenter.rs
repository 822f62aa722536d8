//! Headless presentation state.
//!
//! Front ends own these values and render from them; nothing here touches
//! a real widget. [`Feedback`] is rebuilt on every input change, while
//! [`PasswordField`] and [`CopyButton`] are small state machines that live
//! as long as the form.

use std::time::{Duration, Instant};

use secrecy::SecretString;
use thiserror::Error;

use crate::types::{RequirementId, RequirementStatus, ScoreResult, StrengthTier};

/// How long the copy button shows its success state.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// Everything a renderer needs after one input change.
#[derive(Debug)]
pub struct Feedback {
    /// Bar width, in percent.
    pub total: u8,
    pub requirements: Vec<RequirementStatus>,
    /// `None` while the field is empty.
    pub tier: Option<StrengthTier>,
    /// Shown only while the password is below the strong threshold.
    pub suggestion: Option<SecretString>,
}

impl Feedback {
    /// Neutral state for an empty field.
    pub fn reset() -> Self {
        let empty = ScoreResult::empty();
        Self {
            total: empty.total,
            requirements: empty.requirements,
            tier: None,
            suggestion: None,
        }
    }

    /// Strength label, blank when there is nothing to rate.
    pub fn label(&self) -> &'static str {
        self.tier.map(StrengthTier::label).unwrap_or("")
    }

    pub fn is_met(&self, id: RequirementId) -> bool {
        self.requirements
            .iter()
            .any(|status| status.id == id && status.met)
    }

    pub fn shows_suggestion(&self) -> bool {
        self.suggestion.is_some()
    }
}

/// Whether the password field renders its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Masked,
    Plain,
}

impl Visibility {
    pub fn toggle(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Plain,
            Visibility::Plain => Visibility::Masked,
        }
    }
}

/// Password input with a show/hide toggle.
#[derive(Debug, Clone, Default)]
pub struct PasswordField {
    visibility: Visibility,
}

impl PasswordField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggle();
        self.visibility
    }

    /// Input type attribute for the current state.
    pub fn input_kind(&self) -> &'static str {
        match self.visibility {
            Visibility::Masked => "password",
            Visibility::Plain => "text",
        }
    }

    /// The open eye is offered while masked, the crossed eye while plain.
    pub fn shows_open_eye(&self) -> bool {
        self.visibility == Visibility::Masked
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard access denied")]
    Denied,
    #[error("Clipboard not supported in this environment")]
    Unsupported,
    #[error("Clipboard write failed: {0}")]
    Backend(String),
}

/// Destination for copied suggestions.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied { at: Instant },
}

/// Copy-to-clipboard button with a timed success acknowledgment.
#[derive(Debug, Clone)]
pub struct CopyButton {
    state: CopyState,
}

impl Default for CopyButton {
    fn default() -> Self {
        Self {
            state: CopyState::Idle,
        }
    }
}

impl CopyButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `text`, best effort.
    ///
    /// On success the button shows its acknowledgment from `now`. A failed
    /// write is logged and leaves the button untouched. Returns whether the
    /// write succeeded.
    pub fn copy<C: Clipboard + ?Sized>(
        &mut self,
        clipboard: &mut C,
        text: &str,
        now: Instant,
    ) -> bool {
        match clipboard.write_text(text) {
            Ok(()) => {
                self.state = CopyState::Copied { at: now };
                true
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to copy text: {}", e);
                #[cfg(not(feature = "tracing"))]
                let _ = e;
                false
            }
        }
    }

    /// State as seen at `now`; the acknowledgment expires after
    /// [`COPY_ACK_DURATION`].
    pub fn state(&mut self, now: Instant) -> CopyState {
        if let CopyState::Copied { at } = self.state {
            if now.saturating_duration_since(at) >= COPY_ACK_DURATION {
                self.state = CopyState::Idle;
            }
        }
        self.state
    }

    pub fn is_acknowledging(&mut self, now: Instant) -> bool {
        matches!(self.state(now), CopyState::Copied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        fail_with: Option<ClipboardError>,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if let Some(err) = self.fail_with.clone() {
                return Err(err);
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_feedback_reset() {
        let feedback = Feedback::reset();
        assert_eq!(feedback.total, 0);
        assert_eq!(feedback.label(), "");
        assert!(!feedback.shows_suggestion());
        assert_eq!(feedback.requirements.len(), 5);
        assert!(!feedback.is_met(RequirementId::Length));
    }

    #[test]
    fn test_visibility_toggle() {
        let mut field = PasswordField::new();
        assert_eq!(field.visibility(), Visibility::Masked);
        assert_eq!(field.input_kind(), "password");
        assert!(field.shows_open_eye());

        assert_eq!(field.toggle_visibility(), Visibility::Plain);
        assert_eq!(field.input_kind(), "text");
        assert!(!field.shows_open_eye());

        assert_eq!(field.toggle_visibility(), Visibility::Masked);
    }

    #[test]
    fn test_copy_success_acknowledges_for_two_seconds() {
        let mut clipboard = MemoryClipboard::default();
        let mut button = CopyButton::new();
        let start = Instant::now();

        assert!(button.copy(&mut clipboard, "P@ssword1237", start));
        assert_eq!(clipboard.contents.as_deref(), Some("P@ssword1237"));

        assert!(button.is_acknowledging(start + Duration::from_millis(1999)));
        assert_eq!(button.state(start + COPY_ACK_DURATION), CopyState::Idle);
        assert!(!button.is_acknowledging(start + Duration::from_secs(3)));
    }

    #[test]
    fn test_copy_again_restarts_acknowledgment() {
        let mut clipboard = MemoryClipboard::default();
        let mut button = CopyButton::new();
        let start = Instant::now();

        button.copy(&mut clipboard, "first", start);
        let later = start + Duration::from_millis(1500);
        button.copy(&mut clipboard, "second", later);

        assert!(button.is_acknowledging(start + Duration::from_millis(2500)));
        assert!(!button.is_acknowledging(later + COPY_ACK_DURATION));
    }

    #[test]
    fn test_copy_failure_leaves_state_unchanged() {
        let mut clipboard = MemoryClipboard {
            fail_with: Some(ClipboardError::Denied),
            ..Default::default()
        };
        let mut button = CopyButton::new();
        let now = Instant::now();

        assert!(!button.copy(&mut clipboard, "secret", now));
        assert_eq!(button.state(now), CopyState::Idle);
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_copy_failure_keeps_running_acknowledgment() {
        let mut clipboard = MemoryClipboard::default();
        let mut button = CopyButton::new();
        let start = Instant::now();
        button.copy(&mut clipboard, "ok", start);

        clipboard.fail_with = Some(ClipboardError::Unsupported);
        let later = start + Duration::from_millis(500);
        assert!(!button.copy(&mut clipboard, "nope", later));
        assert_eq!(button.state(later), CopyState::Copied { at: start });
    }

    #[test]
    fn test_clipboard_error_messages() {
        assert_eq!(
            ClipboardError::Backend("x11 gone".to_string()).to_string(),
            "Clipboard write failed: x11 gone"
        );
    }
}
