//! Token types for lexical analysis
//!
//! Defines all token types recognized by the Cinder scanner.

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Token produced by the scanner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text of this token
    pub lexeme: String,
    /// Source location
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Grammar-matching equality: compares the kind only, never the lexeme
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Identifier => {
                write!(f, "{} `{}`", self.kind, self.lexeme)
            }
            _ => write!(f, "`{}`", self.kind),
        }
    }
}

/// Classification of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Literals
    /// Number literal (42, 3.14, 3.)
    Number,
    /// Identifier
    Identifier,

    // Keywords
    /// `rd` keyword (read statement)
    Rd,
    /// `wr` keyword (write statement)
    Wr,
    /// `if` keyword
    If,
    /// `then` keyword
    Then,
    /// `else` keyword
    Else,
    /// `while` keyword
    While,
    /// `do` keyword
    Do,
    /// `begin` keyword
    Begin,
    /// `end` keyword
    End,

    // Operators
    /// `=` (assignment)
    Equal,
    /// `+`
    Plus,
    /// `-` (subtraction or negation)
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `<>` (inequality)
    LessGreater,
    /// `==` (equality)
    EqualEqual,

    // Punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `;`
    Semicolon,

    // Special
    /// End of input
    Eof,
}

impl TokenKind {
    /// Check if a string is a keyword and return its token kind
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "rd" => Some(TokenKind::Rd),
            "wr" => Some(TokenKind::Wr),
            "if" => Some(TokenKind::If),
            "then" => Some(TokenKind::Then),
            "else" => Some(TokenKind::Else),
            "while" => Some(TokenKind::While),
            "do" => Some(TokenKind::Do),
            "begin" => Some(TokenKind::Begin),
            "end" => Some(TokenKind::End),
            _ => None,
        }
    }

    /// Two-character operators, tried before the one-character ones
    pub fn double_operator(first: char, second: char) -> Option<TokenKind> {
        match (first, second) {
            ('<', '=') => Some(TokenKind::LessEqual),
            ('>', '=') => Some(TokenKind::GreaterEqual),
            ('<', '>') => Some(TokenKind::LessGreater),
            ('=', '=') => Some(TokenKind::EqualEqual),
            _ => None,
        }
    }

    /// One-character operators and punctuation
    pub fn single_operator(c: char) -> Option<TokenKind> {
        match c {
            '=' => Some(TokenKind::Equal),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            ';' => Some(TokenKind::Semicolon),
            '<' => Some(TokenKind::Less),
            '>' => Some(TokenKind::Greater),
            _ => None,
        }
    }

    /// Grammatical spelling of this token kind (`num`, `id`, `+`, `EOF`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "num",
            TokenKind::Identifier => "id",
            TokenKind::Rd => "rd",
            TokenKind::Wr => "wr",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::Equal => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LessGreater => "<>",
            TokenKind::EqualEqual => "==",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Eof => "EOF",
        }
    }

    /// Relational operators accepted in a boolean expression
    pub fn is_relop(&self) -> bool {
        matches!(
            self,
            TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual
                | TokenKind::LessGreater
                | TokenKind::EqualEqual
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::keyword("begin"), Some(TokenKind::Begin));
        assert_eq!(TokenKind::keyword("whilst"), None);
        assert_eq!(TokenKind::keyword("If"), None);
    }

    #[test]
    fn test_match_ignores_lexeme() {
        let foo = Token::new(TokenKind::Identifier, "foo", Span::new(0, 3));
        assert!(foo.is(TokenKind::Identifier));
        assert!(!foo.is(TokenKind::Number));
    }

    #[test]
    fn test_relops_are_the_comparison_kinds() {
        assert!(TokenKind::LessGreater.is_relop());
        assert!(TokenKind::EqualEqual.is_relop());
        assert!(!TokenKind::Equal.is_relop());
        assert!(!TokenKind::Plus.is_relop());
    }

    #[test]
    fn test_serializes_for_the_token_dump() {
        let token = Token::new(TokenKind::LessEqual, "<=", Span::new(2, 4));
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "LessEqual",
                "lexeme": "<=",
                "span": { "start": 2, "end": 4 }
            })
        );
    }

    #[test]
    fn test_display() {
        let num = Token::new(TokenKind::Number, "42", Span::new(0, 2));
        assert_eq!(num.to_string(), "num `42`");
        let semi = Token::new(TokenKind::Semicolon, ";", Span::new(2, 3));
        assert_eq!(semi.to_string(), "`;`");
    }
}
