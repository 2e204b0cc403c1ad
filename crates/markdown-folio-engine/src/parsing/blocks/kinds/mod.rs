pub mod block_quote;
pub mod heading;
pub mod paragraph;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use paragraph::Paragraph;
pub use rule::Rule;
pub use table::Table;
