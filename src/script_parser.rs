use crate::{
    lexer::{Lexer, Token, TokenKind},
    result::Result,
    span::{StatementKind, StatementNode},
    stream::{CaseFoldingStream, ScriptStream},
};

/// Recognizes the script production over a token sequence and reports every
/// explainable statement as a parse event, outer statements before inner ones
///
/// A script is zero or more statements separated by `;`. `BEGIN ... END;`
/// blocks are not explainable themselves but their contained statements are
/// parsed recursively. Statements led by any other word are consumed through
/// their terminator verbatim; explainable statements nested inside them are
/// still reported.
pub struct ScriptParser {
    tokens: Vec<Token>,
    pos: usize,
    events: Vec<StatementNode>,
}

impl ScriptParser {
    /// Tokenize and parse a script, returning its parse events in the order
    /// a depth-first walk encounters them
    pub fn parse(script: &str) -> Result<Vec<StatementNode>> {
        let stream = CaseFoldingStream::upper(ScriptStream::new(script));
        let tokens = Lexer::new(stream).tokenize()?;
        let mut parser = ScriptParser {
            tokens,
            pos: 0,
            events: Vec::new(),
        };
        parser.parse_script();
        Ok(parser.events)
    }

    fn parse_script(&mut self) {
        while self.pos < self.tokens.len() {
            self.parse_statement();
        }
    }

    // Every branch consumes at least one token, so the walk always makes
    // progress.
    fn parse_statement(&mut self) {
        if self.is_word(self.pos, "BEGIN") {
            self.parse_block();
        } else if let Some(kind) = self.leading_kind() {
            self.parse_explainable(kind);
        } else {
            self.skip_statement();
        }
    }

    /// BEGIN ... END; with a missing END tolerated, the block then runs to
    /// the end of the script
    fn parse_block(&mut self) {
        self.pos += 1;
        while self.pos < self.tokens.len() && !self.is_word(self.pos, "END") {
            self.parse_statement();
        }
        if self.is_word(self.pos, "END") {
            self.pos += 1;
            if self.is_semi(self.pos) {
                self.pos += 1;
            }
        }
    }

    /// One of the four explainable statements; its span runs from the leading
    /// keyword through the terminating `;` when present
    fn parse_explainable(&mut self, kind: StatementKind) {
        let lead = self.tokens[self.pos].clone();
        let slot = self.events.len();
        self.events.push(StatementNode {
            kind,
            start: lead.start,
            stop: lead.stop,
        });
        self.pos += 1;
        let stmt_stop = self.scan_statement_tail(lead.stop);
        self.events[slot].stop = stmt_stop;
    }

    fn skip_statement(&mut self) {
        let lead = self.tokens[self.pos].clone();
        self.pos += 1;
        if lead.kind != TokenKind::Semi {
            self.scan_statement_tail(lead.stop);
        }
    }

    /// Consume tokens through the statement terminator, reporting explainable
    /// keywords encountered along the way. Returns the inclusive stop offset
    /// of the statement's last token, terminator included when present.
    ///
    /// A keyword found inside parentheses opens a nested statement that ends
    /// at the last token before its closing parenthesis; one found at depth
    /// zero ends at the last token before the enclosing terminator.
    fn scan_statement_tail(&mut self, lead_stop: usize) -> usize {
        let mut depth = 0usize;
        // nested events awaiting their stop offset, tagged with the paren
        // depth they were opened at
        let mut open: Vec<(usize, usize)> = Vec::new();
        let mut prev_stop = lead_stop;
        let stmt_stop;
        loop {
            let Some(tok) = self.tokens.get(self.pos).cloned() else {
                stmt_stop = prev_stop;
                break;
            };
            match tok.kind {
                TokenKind::Semi if depth == 0 => {
                    self.pos += 1;
                    stmt_stop = tok.stop;
                    break;
                }
                TokenKind::Word(ref w) if depth == 0 && w == "END" => {
                    stmt_stop = prev_stop;
                    break;
                }
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    while let Some(&(slot, opened_at)) = open.last() {
                        if opened_at != depth {
                            break;
                        }
                        self.events[slot].stop = prev_stop;
                        open.pop();
                    }
                    depth = depth.saturating_sub(1);
                }
                TokenKind::Word(ref w) => {
                    if let Some(kind) = StatementKind::from_keyword(w) {
                        open.push((self.events.len(), depth));
                        self.events.push(StatementNode {
                            kind,
                            start: tok.start,
                            stop: tok.stop,
                        });
                    }
                }
                _ => {}
            }
            prev_stop = tok.stop;
            self.pos += 1;
        }
        for (slot, _) in open {
            self.events[slot].stop = prev_stop;
        }
        stmt_stop
    }

    fn leading_kind(&self) -> Option<StatementKind> {
        match self.tokens.get(self.pos) {
            Some(Token {
                kind: TokenKind::Word(w),
                ..
            }) => StatementKind::from_keyword(w),
            _ => None,
        }
    }

    fn is_word(&self, pos: usize, word: &str) -> bool {
        matches!(
            self.tokens.get(pos),
            Some(Token { kind: TokenKind::Word(w), .. }) if w == word
        )
    }

    fn is_semi(&self, pos: usize) -> bool {
        matches!(
            self.tokens.get(pos),
            Some(Token {
                kind: TokenKind::Semi,
                ..
            })
        )
    }
}
