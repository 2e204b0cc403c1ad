//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and the HTML they
//! render to.
//!
//! ## Types
//!
//! - **`Escape`**: `\` followed by one of a fixed set of literal characters
//! - **`Quote`**: `"..."` rendered as a quote span, quote marks kept
//! - **`CodeSpan`**: `` `...` `` rendered as a code span
//! - **`Emphasis`**: `*...*` (italic) and `**...**` (bold)
//! - **`ErrorMark`**: the inline error span used for soft failures
//!
//! The renderer calls these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod error;
pub mod escape;
pub mod quote;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use error::ErrorMark;
pub use escape::Escape;
pub use quote::Quote;
