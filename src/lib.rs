//! Password strength feedback library
//!
//! Scores a password against five weighted requirements, classifies the
//! score into a strength tier and, for weaker passwords, derives a stronger
//! suggestion from the user's own input.
//!
//! The scoring is rule based and meant for quick form feedback. It does not
//! estimate entropy or check breach lists.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_SUGGEST_DEBOUNCE_MS`: Debounce delay for [`evaluate_tx`]
//!   (default: 300)
//!
//! # Example
//!
//! ```rust
//! use pwd_suggest::{evaluate, RandDigits, StrengthTier};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("password".to_string().into());
//! let feedback = evaluate(&password, &mut RandDigits::default());
//!
//! assert_eq!(feedback.total, 40);
//! assert_eq!(feedback.tier, Some(StrengthTier::Medium));
//!
//! if let Some(suggestion) = &feedback.suggestion {
//!     println!("Try: {}", suggestion.expose_secret());
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod presenter;
mod sections;
mod suggester;
mod types;

// Public API
pub use config::{debounce_from_env, ConfigError, DEBOUNCE_ENV, DEFAULT_DEBOUNCE};
pub use evaluator::{evaluate, score};
pub use presenter::{
    Clipboard, ClipboardError, CopyButton, CopyState, Feedback, PasswordField, Visibility,
    COPY_ACK_DURATION,
};
pub use sections::{Requirement, MIN_LENGTH, REQUIREMENTS};
pub use suggester::{
    suggest, DigitSource, RandDigits, FILLER_SYMBOL, LEET_SUBSTITUTIONS, SUGGESTION_MIN_LENGTH,
};
pub use types::{
    classify, RequirementId, RequirementStatus, ScoreResult, StrengthTier, STRONG_THRESHOLD,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
