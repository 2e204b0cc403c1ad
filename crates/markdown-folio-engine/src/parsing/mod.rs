pub mod blocks;
pub mod inline;

use log::debug;

use crate::io::{DocumentSet, IoError};
use crate::translation::Resolver;

use blocks::BlockRenderer;
use inline::InlineRenderer;

/// Byte order mark some editors write at the start of UTF-8 files.
const BOM: char = '\u{feff}';

/// Renders the lines of a single source to an HTML fragment.
pub fn render_lines<'a, I>(lines: I, resolver: Resolver<'_>) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut renderer = BlockRenderer::new(InlineRenderer::new(resolver));
    for line in lines {
        renderer.push(line);
    }
    renderer.finish()
}

/// Renders several sources as one fragment.
///
/// Tables and blockquotes end with their source; heading sections carry
/// over into the next one and are closed at the very end. A leading byte
/// order mark is dropped from each source.
pub fn render_sources<S: AsRef<str>>(sources: &[S], resolver: Resolver<'_>) -> String {
    let mut renderer = BlockRenderer::new(InlineRenderer::new(resolver));
    for source in sources {
        let source = source.as_ref();
        let source = source.strip_prefix(BOM).unwrap_or(source);
        for line in source.lines() {
            renderer.push(line);
        }
        renderer.end_file();
    }
    renderer.finish()
}

/// Reads every file of `set` and renders them, in set order, as one fragment.
pub fn render_document_set(set: &DocumentSet, resolver: Resolver<'_>) -> Result<String, IoError> {
    let sources = set.read()?;
    debug!("Rendering {} source files", sources.len());
    Ok(render_sources(&sources, resolver))
}
