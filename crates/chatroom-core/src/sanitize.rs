//! Input sanitizer
//!
//! Every piece of untrusted text (usernames, emails, chat messages, command
//! arguments) goes through [`sanitize`] before it is parsed or stored.

/// Maximum number of characters kept by [`sanitize`]
pub const MAX_INPUT_LEN: usize = 256;

/// Whether a character survives sanitizing: `[A-Za-z0-9_@.\-:() ]`
#[inline]
#[must_use]
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '.' | '-' | ':' | '(' | ')' | ' ')
}

/// Strip every character outside the allow-list and truncate to [`MAX_INPUT_LEN`].
///
/// Never fails; the result may be empty.
#[must_use]
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| is_allowed(*c))
        .take(MAX_INPUT_LEN)
        .collect()
}
