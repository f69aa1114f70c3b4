/// A byte-wise cursor over one line of text.
///
/// Markers are ASCII, so a marker match can only ever start on a character
/// boundary even though the cursor steps through UTF-8 continuation bytes.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Current byte offset into the line.
    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. Callers only skip bytes they have matched.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Scans forward for the next occurrence of `pat`, leaving the cursor on it.
    ///
    /// Returns `false` and leaves the cursor at EOF when there is none.
    pub fn seek(&mut self, pat: &[u8]) -> bool {
        while !self.eof() {
            if self.starts_with(pat) {
                return true;
            }
            self.bump();
        }
        false
    }
}
