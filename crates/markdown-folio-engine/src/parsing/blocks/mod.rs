//! # Block Rendering
//!
//! Two-phase block rendering over trimmed source lines.
//!
//! ## Rendering Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineClass` (heading, table row, blockquote line, rule, paragraph, blank)
//!
//! 2. **Block Construction** (`builder`): A `BlockRenderer` keeps the open
//!    heading sections and any table or blockquote being accumulated, and
//!    writes HTML as blocks complete
//!
//! ## Modules
//!
//! - **`kinds`**: Block types with owned delimiters and markup
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`sections`**: `SectionStack` of open `<article>` wrappers
//! - **`builder`**: `BlockRenderer` state machine
//!
//! ## Key Invariants
//!
//! - Heading depth is unbounded; each open heading owns one `<article>`
//! - Every `<article>` opened is closed by the end of the document set
//! - Inline content of every block goes through the inline renderer

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod sections;

pub use builder::BlockRenderer;
pub use classify::{LineClass, LineClassifier};
pub use sections::SectionStack;
