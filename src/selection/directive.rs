//! Directive translation.
//!
//! A directive is the internal selection value attached to a registry entry:
//! `example_<name>` picks a named canned example, `code<digits>` picks a
//! status-code scenario. Prism reads both from the `Prefer` request header.

const EXAMPLE_PREFIX: &str = "example";
const CODE_PREFIX: &str = "code";

/// Turn a directive into the `Prefer` header value Prism understands.
///
/// Returns an empty string for directives of any other shape; callers treat
/// that as "inject nothing".
pub fn translate(directive: &str) -> String {
    if directive.starts_with(EXAMPLE_PREFIX) {
        format!("example={}", directive)
    } else if let Some(code) = directive.strip_prefix(CODE_PREFIX) {
        format!("code={}", code)
    } else {
        String::new()
    }
}
