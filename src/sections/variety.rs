//! Character variety sections - lowercase, uppercase, digits, symbols.
//!
//! Letter and digit classes are ASCII only. Anything outside `[A-Za-z0-9]`
//! counts as a symbol, including spaces and non-ASCII letters.

pub fn lowercase_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn uppercase_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn number_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn symbol_section(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}
