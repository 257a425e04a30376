//! Whitespace collapsing for multi-word food labels.
//!
//! Labels typed on phones often carry doubled spaces, tabs or non-breaking
//! spaces between words. [`collapse_whitespace`] splits on any Unicode
//! whitespace run and rejoins the words with single ASCII spaces.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  sweet   potato  "), "sweet potato");
//! ```

/// Collapses repeated whitespace and trims both edges.
///
/// Deterministic and idempotent; letter case is left untouched. Empty or
/// whitespace-only input yields an empty string.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("greek\t\tyogurt"), "greek yogurt");
/// assert_eq!(collapse_whitespace("brown\r\nrice"), "brown rice");
/// assert_eq!(collapse_whitespace("oat\u{00A0}milk"), "oat milk");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
