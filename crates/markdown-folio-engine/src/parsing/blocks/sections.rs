/// Stack of open heading sections, one `<article>` per entry.
///
/// Opening a heading closes every open section at the same or a deeper
/// level first, so the emitted articles always nest and balance.
#[derive(Debug, Default)]
pub struct SectionStack {
    open: Vec<usize>,
}

impl SectionStack {
    pub const CLOSE: &'static str = "</article>";

    /// Closes sections at `depth` or deeper, then opens one at `depth`.
    pub fn open(&mut self, depth: usize, out: &mut String) {
        while let Some(&top) = self.open.last()
            && top >= depth
        {
            self.close_top(out);
        }
        self.open.push(depth);
        out.push_str(&format!("<article class=\"a{depth}\">"));
    }

    /// Closes every open section, deepest first.
    pub fn close_all(&mut self, out: &mut String) {
        while !self.is_empty() {
            self.close_top(out);
        }
    }

    /// Depth of the innermost open section, 0 if none.
    pub fn depth(&self) -> usize {
        self.open.last().copied().unwrap_or(0)
    }

    /// Number of open `<article>` wrappers.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    fn close_top(&mut self, out: &mut String) {
        self.open.pop();
        out.push_str(Self::CLOSE);
        out.push('\n');
    }
}
