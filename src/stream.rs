/// A consumable character sequence addressed by absolute character offset
pub trait CharStream {
    /// Look ahead `offset` characters without consuming (1-based, like the
    /// first lookahead being `la(1)`); `None` past the end of input
    fn la(&self, offset: usize) -> Option<char>;
    /// Absolute offset of the next unconsumed character
    fn index(&self) -> usize;
    /// Advance past the next character
    fn consume(&mut self);
}

/// Character buffer over the original script text
///
/// Offsets are character offsets, not byte offsets, so tokens scanned from
/// this stream can be spliced back against the same character sequence.
pub struct ScriptStream {
    chars: Vec<char>,
    pos: usize,
}

impl ScriptStream {
    pub fn new(script: &str) -> Self {
        ScriptStream {
            chars: script.chars().collect(),
            pos: 0,
        }
    }
}

impl CharStream for ScriptStream {
    fn la(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset - 1).copied()
    }

    fn index(&self) -> usize {
        self.pos
    }

    fn consume(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }
}

/// Presents a case-folded view of lookahead characters to the scanner while
/// leaving the wrapped stream's text untouched
///
/// Only `la` is overridden; every other operation forwards to the wrapped
/// stream, so offsets reported by the scanner still address the original
/// text. ASCII folding is enough here since only keywords are compared.
pub struct CaseFoldingStream<S: CharStream> {
    inner: S,
    upper: bool,
}

impl<S: CharStream> CaseFoldingStream<S> {
    /// Fold lookahead to uppercase
    pub fn upper(inner: S) -> Self {
        CaseFoldingStream { inner, upper: true }
    }

    /// Fold lookahead to lowercase
    pub fn lower(inner: S) -> Self {
        CaseFoldingStream {
            inner,
            upper: false,
        }
    }
}

impl<S: CharStream> CharStream for CaseFoldingStream<S> {
    fn la(&self, offset: usize) -> Option<char> {
        let c = self.inner.la(offset)?;
        Some(if self.upper {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        })
    }

    fn index(&self) -> usize {
        self.inner.index()
    }

    fn consume(&mut self) {
        self.inner.consume()
    }
}
