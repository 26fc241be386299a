/// Position-aware reader over an immutable source string.
///
/// Positions are byte offsets, but `peek`, `next` and `skip` count
/// characters, so every advance lands on a character boundary.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Character `offset` places past the current one, `None` past the end.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos..)?.chars().nth(offset)
    }

    pub fn next(&mut self) -> Option<char> {
        let chr = self.peek(0)?;
        self.pos += chr.len_utf8();
        Some(chr)
    }

    pub fn skip(&mut self, amount: usize) -> &mut Self {
        let width: usize = self
            .input
            .get(self.pos..)
            .unwrap_or("")
            .chars()
            .take(amount)
            .map(char::len_utf8)
            .sum();
        self.advance_bytes(width)
    }

    /// Moves past `width` bytes; the lexer steps by whole regex matches.
    pub(super) fn advance_bytes(&mut self, width: usize) -> &mut Self {
        self.pos += width;
        self
    }

    /// Unread rest of the input after dropping leading spaces.
    ///
    /// Only `' '` separates tokens; tabs and newlines are left in place.
    pub fn top(&mut self) -> &'a str {
        while self.peek(0) == Some(' ') {
            self.skip(1);
        }
        self.input.get(self.pos..).unwrap_or("")
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.input.len() && self.peek(0).is_none()
    }
}

impl std::fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input)
    }
}
