//! Field rules shared by server-side and client-side validation.

/// Minimum username length, in characters.
pub const MIN_USERNAME_CHARS: usize = 3;
/// Minimum password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Check the loose `local@domain.tld` shape: no whitespace, exactly one `@`
/// with a non-empty local part, and a domain holding a `.` that is neither its
/// first nor its last character.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let chars = domain.chars().collect::<Vec<_>>();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

/// Whether `value` has fewer than `min` characters.
#[must_use]
pub fn shorter_than(value: &str, min: usize) -> bool {
    value.chars().count() < min
}
