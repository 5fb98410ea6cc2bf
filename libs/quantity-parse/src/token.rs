//! Token types for the quantity-expression tokenizer.

/// Token kinds produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literal in any of the supported sub-grammars (decimal,
    /// scientific, rational, mixed, complex). The literal text is interpreted
    /// later, by the parser.
    Number,
    /// Unit name, abbreviation, or symbolic unit (`'`, `"`, `$`, `%`, `°C`).
    Unit,
    /// Single-character operator: `*`, `/`, `^`, and unfolded `+` / `-`.
    Operator,
    LParen,
    RParen,
    /// End of input. Exactly one per tokenize call, always last.
    Eof,
}

/// A token in a quantity expression.
///
/// Tokens live in the tokenizer's pool and are overwritten by the next
/// `tokenize` call; copy out anything that must outlive it.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Character offset of the token's first character in the source text.
    pub offset: usize,
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }
}
