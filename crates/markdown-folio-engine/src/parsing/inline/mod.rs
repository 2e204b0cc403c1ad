//! # Inline Rendering
//!
//! Cursor-based rendering of a single line's content.
//!
//! ## Pipeline
//!
//! 1. The active translation table substitutes keys in the raw text
//! 2. A left-to-right character walk renders escapes, quotes, code spans
//!    and emphasis, copying everything else through untouched
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types with owned delimiters and markup
//! - **`cursor`**: `Cursor` plus the delimiter scanners that capture a
//!   section and report where the walk resumes
//! - **`parser`**: `InlineRenderer` and `render_markup()`
//!
//! ## Delimiter Scanning
//!
//! A closing delimiter preceded by a backslash never closes its section; the
//! backslash stays in the captured text. A missing closer captures the rest
//! of the line and the construct is still closed in the output.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::{InlineRenderer, render_markup};
