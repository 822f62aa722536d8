//! Suggester - derives a stronger password from the user's input.
//!
//! The transform is a heuristic, not a generator: it keeps the input
//! recognisable and patches whatever requirement is missing.

use rand::rngs::ThreadRng;
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::sections::{number_section, symbol_section, uppercase_section};

/// Minimum length of a suggested password, in characters.
pub const SUGGESTION_MIN_LENGTH: usize = 12;

/// Appended when the suggestion lacks a symbol.
pub const FILLER_SYMBOL: char = '#';

/// Leetspeak table. Only the first key found in the password is applied.
pub const LEET_SUBSTITUTIONS: [(char, char); 5] =
    [('a', '@'), ('s', '$'), ('o', '0'), ('i', '!'), ('e', '3')];

/// Source of the random digits appended by the suggester.
pub trait DigitSource {
    /// A three-digit integer in `100..=999`.
    fn next_triplet(&mut self) -> u16;

    /// A single digit in `0..=9`.
    fn next_digit(&mut self) -> u8;
}

/// [`DigitSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandDigits<R> {
    rng: R,
}

impl<R: Rng> RandDigits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandDigits<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> DigitSource for RandDigits<R> {
    fn next_triplet(&mut self) -> u16 {
        self.rng.gen_range(100..=999)
    }

    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(0..=9)
    }
}

/// Builds a suggested password from `password`.
///
/// Returns `None` for an empty input. Otherwise the result has at least
/// [`SUGGESTION_MIN_LENGTH`] characters, a symbol and a digit.
///
/// Steps, each applied to the output of the previous one:
/// 1. replace every occurrence of the first leetspeak key present
/// 2. uppercase the first character if there is no `A-Z`
/// 3. append [`FILLER_SYMBOL`] if there is no symbol
/// 4. append a random `100..=999` if there is no digit
/// 5. pad with random digits up to the minimum length
pub fn suggest<D: DigitSource + ?Sized>(
    password: &SecretString,
    digits: &mut D,
) -> Option<SecretString> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return None;
    }

    let mut suggestion = substitute_first(pwd);

    if !uppercase_section(&suggestion) {
        suggestion = capitalize_first(&suggestion);
    }

    if !symbol_section(&suggestion) {
        suggestion.push(FILLER_SYMBOL);
    }

    if !number_section(&suggestion) {
        let triplet = 100 + digits.next_triplet().saturating_sub(100) % 900;
        suggestion.push_str(&triplet.to_string());
    }

    let mut len = suggestion.chars().count();
    while len < SUGGESTION_MIN_LENGTH {
        suggestion.push(char::from(b'0' + digits.next_digit() % 10));
        len += 1;
    }

    Some(SecretString::new(suggestion.into()))
}

fn substitute_first(password: &str) -> String {
    LEET_SUBSTITUTIONS
        .iter()
        .find(|(from, _)| password.contains(*from))
        .map(|&(from, to)| password.replace(from, &to.to_string()))
        .unwrap_or_else(|| password.to_string())
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
