//! Password strength evaluator - scoring and the per-input pipeline.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::presenter::Feedback;
use crate::sections::REQUIREMENTS;
use crate::suggester::{suggest, DigitSource};
use crate::types::{classify, RequirementStatus, ScoreResult, STRONG_THRESHOLD};

/// Scores a password against every requirement.
///
/// Each met requirement adds its weight, so the total is a multiple of 20
/// in `0..=100`. Never fails; the empty string scores 0.
pub fn score(password: &SecretString) -> ScoreResult {
    let pwd = password.expose_secret();
    let mut total = 0u8;

    let requirements = REQUIREMENTS
        .iter()
        .map(|req| {
            let met = (req.check)(pwd);
            if met {
                total += req.weight;
            }
            RequirementStatus { id: req.id, met }
        })
        .collect();

    ScoreResult {
        total,
        requirements,
    }
}

/// Runs the full pipeline for one input change.
///
/// Empty input resets every indicator. Otherwise the password is scored
/// and classified, and a suggestion is produced while the score is below
/// [`STRONG_THRESHOLD`].
pub fn evaluate<D: DigitSource + ?Sized>(password: &SecretString, digits: &mut D) -> Feedback {
    if password.expose_secret().is_empty() {
        return Feedback::reset();
    }

    let result = score(password);
    let tier = classify(result.total);

    #[cfg(feature = "tracing")]
    tracing::debug!("password scored {} ({})", result.total, tier);

    let suggestion = if result.total < STRONG_THRESHOLD {
        suggest(password, digits)
    } else {
        None
    };

    Feedback {
        total: result.total,
        requirements: result.requirements,
        tier: Some(tier),
        suggestion,
    }
}

/// Debounced evaluation that sends its result via channel.
///
/// Waits `debounce` first. If `token` is cancelled in the meantime the
/// evaluation was superseded by newer input and nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Feedback>,
    debounce: Duration,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded before it started");
            return;
        }
        _ = tokio::time::sleep(debounce) => {}
    }

    let feedback = evaluate(password, &mut crate::suggester::RandDigits::default());

    if let Err(e) = tx.send(feedback).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password feedback: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
