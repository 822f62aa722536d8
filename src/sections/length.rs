//! Length section - checks password minimum length.

/// Minimum number of characters for the length requirement.
pub const MIN_LENGTH: usize = 8;

/// Passes when the password has at least [`MIN_LENGTH`] characters.
///
/// Characters are counted as Unicode scalar values, not bytes.
pub fn length_section(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
