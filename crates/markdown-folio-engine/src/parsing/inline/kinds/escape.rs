/// Backslash escapes.
pub struct Escape;

impl Escape {
    pub const MARK: char = '\\';

    /// Characters that may follow a backslash and are emitted literally.
    pub const LITERALS: [char; 12] = ['"', '\'', '{', '}', '(', ')', '[', ']', '>', '<', '`', '\\'];

    /// Returns true if `c` may be escaped.
    pub fn is_literal(c: char) -> bool {
        Self::LITERALS.contains(&c)
    }
}
