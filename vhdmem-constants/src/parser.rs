//! # Declaration table parser
//!
//! Collects every `constant NAME [: type] (:= | =) value ;` statement of a
//! VHDL package into a table keyed by upper-cased name. Values are kept as
//! raw text; a value made of a single integer literal is also decoded.

use std::collections::BTreeMap;
use std::ops::Range;

use logos::Logos;
use tracing::{trace, warn};

use crate::lexer::{LineIndex, Token};

/// One constant declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Name as written in the source
    pub name: String,
    /// 1-based line of the `constant` keyword
    pub line: usize,
    /// Value text between the assignment and the `;`, trimmed
    pub raw_value: String,
    /// Decoded value when `raw_value` is a single integer literal
    pub value: Option<u64>,
}

/// All declarations of a constants package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantTable {
    entries: BTreeMap<String, Declaration>,
}

impl ConstantTable {
    /// Look up a declaration; VHDL names are case-insensitive
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.entries.get(&name.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.values()
    }

    fn insert(&mut self, decl: Declaration) {
        let key = decl.name.to_ascii_uppercase();
        if let Some(previous) = self.entries.get(&key) {
            warn!(
                name = %decl.name,
                first_line = previous.line,
                line = decl.line,
                "constant declared twice, keeping the later value"
            );
        }
        self.entries.insert(key, decl);
    }
}

type Spanned = (Result<Token, ()>, Range<usize>);

/// Parse all constant declarations out of `source`
pub fn parse_constants(source: &str) -> ConstantTable {
    let tokens: Vec<Spanned> = Token::lexer(source).spanned().collect();
    let lines = LineIndex::new(source);
    let mut table = ConstantTable::default();

    let mut pos = 0;
    while pos < tokens.len() {
        if tokens[pos].0 != Ok(Token::Constant) {
            pos += 1;
            continue;
        }

        let keyword_span = tokens[pos].1.clone();
        let (decl, next) = parse_declaration(source, &tokens, pos + 1, lines.line_of(keyword_span.start));
        if let Some(decl) = decl {
            trace!(name = %decl.name, line = decl.line, value = %decl.raw_value, "constant");
            table.insert(decl);
        }
        pos = next;
    }

    table
}

/// Parse the remainder of a declaration starting after the `constant`
/// keyword. Returns the declaration (if well-formed) and the index of the
/// token following it.
fn parse_declaration(
    source: &str,
    tokens: &[Spanned],
    start: usize,
    line: usize,
) -> (Option<Declaration>, usize) {
    let name = match tokens.get(start) {
        Some((Ok(Token::Identifier(name)), _)) => name.clone(),
        _ => return (None, start),
    };

    // Type mark, up to the assignment. A `;` first means a deferred constant.
    let mut pos = start + 1;
    let mut deferred = false;
    while let Some((token, _)) = tokens.get(pos) {
        match token {
            Ok(Token::Assign) | Ok(Token::Equals) => break,
            Ok(Token::Semicolon) => {
                deferred = true;
                break;
            }
            Ok(Token::Constant) => return (None, pos),
            _ => pos += 1,
        }
    }
    if pos >= tokens.len() {
        return (None, pos);
    }
    if deferred {
        let decl = Declaration {
            name,
            line,
            raw_value: String::new(),
            value: None,
        };
        return (Some(decl), pos + 1);
    }

    // Value, up to the terminator
    let value_start = pos + 1;
    let mut end = value_start;
    while let Some((token, _)) = tokens.get(end) {
        if *token == Ok(Token::Semicolon) {
            break;
        }
        end += 1;
    }

    let value_tokens = &tokens[value_start..end];
    let raw_value = match (value_tokens.first(), value_tokens.last()) {
        (Some((_, first)), Some((_, last))) => source[first.start..last.end].trim().to_string(),
        _ => String::new(),
    };
    let value = match value_tokens {
        [(Ok(Token::Integer(n)), _)] => Some(*n),
        _ => None,
    };

    let decl = Declaration {
        name,
        line,
        raw_value,
        value,
    };
    (Some(decl), (end + 1).min(tokens.len()))
}
