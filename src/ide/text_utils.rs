//! Text utilities over source tokens.

use crate::base::Position;
use crate::syntax::{Token, TokenKind};

/// Remove one pair of surrounding double quotes.
///
/// # Example
/// ```
/// use escript::ide::text_utils::strip_quotes;
///
/// assert_eq!(strip_quotes("\"util/math\""), "util/math");
/// assert_eq!(strip_quotes("math"), "math");
/// ```
pub fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

/// Comment block directly above the token starting at `start`.
///
/// Consecutive comments separated only by single line breaks are joined;
/// a blank line or any other token ends the block.
pub fn preceding_comment(tokens: &[Token], start: Position) -> Option<String> {
    let index = tokens
        .iter()
        .position(|t| t.range.start.line == start.line && t.range.start.column == start.column)?;

    let mut before = tokens[..index].iter().rev().peekable();
    // Declaration keywords in front of the name, as in `exported function f`.
    while before.next_if(|t| is_declaration_prefix(t)).is_some() {}

    let mut comments = Vec::new();
    for token in before {
        match token.kind {
            TokenKind::Whitespace if token.text.matches('\n').count() <= 1 => continue,
            TokenKind::LineComment | TokenKind::BlockComment => comments.push(token),
            _ => break,
        }
    }

    let text = comments
        .iter()
        .rev()
        .map(|t| clean_comment(&t.text))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    (!text.is_empty()).then_some(text)
}

fn is_declaration_prefix(token: &Token) -> bool {
    match token.kind {
        TokenKind::Whitespace => !token.text.contains('\n'),
        TokenKind::ConstKw
        | TokenKind::VarKw
        | TokenKind::FunctionKw
        | TokenKind::ExportedKw
        | TokenKind::ClassKw
        | TokenKind::ProgramKw => true,
        _ => false,
    }
}

/// Strip comment markers and the leading `*` of block comment lines.
pub fn clean_comment(text: &str) -> String {
    if let Some(line) = text.strip_prefix("//") {
        return line.trim_start_matches('/').trim().to_string();
    }
    let body = text
        .strip_prefix("/*")
        .and_then(|t| t.strip_suffix("*/"))
        .unwrap_or(text);
    body.lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
