//! # HTML Output
//!
//! The document shell that wraps a rendered fragment, and the stylesheet
//! minifier used to inline a CSS file into it.

pub mod css;
pub mod page;

pub use css::minify_css;
pub use page::Page;
