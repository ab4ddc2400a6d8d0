//! # Lexer for VHDL constant declarations
//!
//! Only the tokens needed to pick `constant NAME : type := value;` out of a
//! package are recognised. Anything else lexes as an error token, which the
//! parser treats as opaque text.

use logos::Logos;

/// Tokens of a VHDL constants package
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"--[^\n]*")] // Skip comments
pub enum Token {
    /// `constant` keyword (VHDL keywords are case-insensitive)
    #[token("constant", ignore(ascii_case))]
    Constant,

    /// Identifier (constant names, type names)
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Integer literal: decimal with optional `_` separators, or based
    /// (`16#FF#`, `2#1010#`)
    #[regex(r"[0-9][0-9_]*", |lex| parse_decimal(lex.slice()))]
    #[regex(r"[0-9]+#[0-9a-fA-F_]+#", |lex| parse_based(lex.slice()))]
    Integer(u64),

    /// String literal
    #[regex(r#""([^"\n]|"")*""#, |lex| lex.slice().to_string())]
    StringLit(String),

    /// Character literal
    #[regex(r"'[^\n]'", |lex| lex.slice().to_string())]
    CharLit(String),

    /// Variable assignment `:=`
    #[token(":=")]
    Assign,

    /// `=`, accepted in place of `:=`
    #[token("=")]
    Equals,

    /// Colon (before the type mark)
    #[token(":")]
    Colon,

    /// Statement terminator
    #[token(";")]
    Semicolon,
}

fn parse_decimal(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    digits.parse().ok()
}

fn parse_based(text: &str) -> Option<u64> {
    let mut parts = text.split('#');
    let base: u32 = parts.next()?.parse().ok()?;
    if !(2..=16).contains(&base) {
        return None;
    }
    let digits: String = parts.next()?.chars().filter(|&c| c != '_').collect();
    u64::from_str_radix(&digits, base).ok()
}

/// Maps byte offsets to 1-based line numbers
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    /// 1-based line containing `offset`
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(next) => next,
        }
    }
}
