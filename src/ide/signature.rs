//! Signature help implementation.
//!
//! Works on tokens rather than the tree so it keeps working while the call
//! being typed does not parse yet.

use tracing::debug;

use crate::base::Position;
use crate::hir::{CompilerWorkspace, FunctionParameter, ScopeName, ScopeQuery};
use crate::syntax::{Token, TokenKind};

use super::docs::{FunctionDoc, ModuleDocs};

/// One parameter of a signature label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterInformation {
    /// `[start, end)` of the parameter name in the label, in characters.
    pub label: (u32, u32),
    pub documentation: Option<String>,
}

/// Result of a signature help request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureHelp {
    /// `name( a, b := 1 )`
    pub label: String,
    pub parameters: Vec<ParameterInformation>,
    pub documentation: Option<String>,
    /// Index of the argument under the cursor.
    pub active_parameter: u32,
}

/// Get signature help for the call around a cursor (1-based).
///
/// The cursor sits between characters; the token holding the character
/// just before it is where the backward scan starts.
pub fn signature_help(
    workspace: &CompilerWorkspace,
    position: Position,
    docs: &dyn ModuleDocs,
) -> Option<SignatureHelp> {
    let tokens = workspace.tree.tokens();
    let start = tokens
        .iter()
        .rposition(|t| (t.range.start.line, t.range.start.column) < (position.line, position.column))?;

    let (open_paren, active_parameter) = find_open_call(tokens, start)?;
    let name_index = previous_significant(tokens, open_paren)?;
    let name = &tokens[name_index];
    if name.kind != TokenKind::Ident {
        return None;
    }

    let prefix_scope = match previous_significant(tokens, name_index) {
        Some(i) if tokens[i].kind == TokenKind::ColonColon => {
            match previous_significant(tokens, i).map(|j| &tokens[j]) {
                Some(scope) if scope.kind == TokenKind::Ident => ScopeName::Named(scope.text.clone()),
                _ => ScopeName::Global,
            }
        }
        _ => ScopeName::None,
    };
    let calling_scope = enclosing_class(tokens, start).unwrap_or_default();
    let query = ScopeQuery::new(calling_scope, "", prefix_scope, name.text.clone());

    let scope_tree = &workspace.scope_tree;
    let help = if let Some(function) = scope_tree.find_module_function(&query) {
        let doc = docs.function_doc(&function.module, &function.name);
        make_signature_help(&function.name, &function.parameters, active_parameter, doc, false)
    } else {
        let function = scope_tree.find_user_function(&query)?;
        make_signature_help(
            &function.name,
            &function.parameters,
            active_parameter,
            None,
            function.has_implicit_this(),
        )
    };

    debug!(
        "signature help {}:{} -> {} (parameter {})",
        position.line, position.column, help.label, help.active_parameter
    );
    Some(help)
}

/// Scan backwards for the `(` of the innermost unclosed call.
///
/// Returns its token index and the number of top-level commas passed.
fn find_open_call(tokens: &[Token], start: usize) -> Option<(usize, u32)> {
    // Argument counts of the enclosing calls skipped over so far.
    let mut outer = Vec::new();
    let mut current = 0u32;

    for index in (0..=start).rev() {
        match tokens[index].kind {
            TokenKind::Comma => current += 1,
            TokenKind::RParen => {
                outer.push(current);
                current = 0;
            }
            TokenKind::LParen => match outer.pop() {
                Some(count) => current = count,
                None => return Some((index, current)),
            },
            _ => {}
        }
    }
    None
}

fn previous_significant(tokens: &[Token], index: usize) -> Option<usize> {
    (0..index).rev().find(|&i| !tokens[i].kind.is_trivia())
}

/// Name of the class whose body holds token `index`.
fn enclosing_class(tokens: &[Token], index: usize) -> Option<String> {
    let closes_class = tokens[index + 1..]
        .iter()
        .find(|t| matches!(t.kind, TokenKind::ClassKw | TokenKind::EndClassKw))
        .is_some_and(|t| t.kind == TokenKind::EndClassKw);
    if !closes_class {
        return None;
    }
    let class_kw = (0..=index)
        .rev()
        .find(|&i| tokens[i].kind == TokenKind::ClassKw)?;
    tokens[class_kw + 1..]
        .iter()
        .find(|t| !t.kind.is_trivia())
        .filter(|t| t.kind == TokenKind::Ident)
        .map(|t| t.text.to_string())
}

fn make_signature_help(
    name: &str,
    params: &[FunctionParameter],
    active_parameter: u32,
    doc: Option<&FunctionDoc>,
    skip_first_param: bool,
) -> SignatureHelp {
    let shown = if skip_first_param && !params.is_empty() {
        &params[1..]
    } else {
        params
    };

    let mut label = format!("{name}(");
    let mut parameters = Vec::with_capacity(shown.len());
    for (i, param) in shown.iter().enumerate() {
        label.push_str(if i == 0 { " " } else { ", " });
        let start = label.chars().count() as u32;
        label.push_str(&param.name);
        let end = label.chars().count() as u32;
        if let Some(default) = &param.default_value {
            label.push_str(" := ");
            label.push_str(&default.describe());
        }
        parameters.push(ParameterInformation {
            label: (start, end),
            documentation: doc.and_then(|d| d.parameter(&param.name)).map(str::to_string),
        });
    }
    if !shown.is_empty() {
        label.push(' ');
    }
    label.push(')');

    SignatureHelp {
        label,
        parameters,
        documentation: doc
            .filter(|d| !d.explain.is_empty())
            .map(|d| d.explain.join("\n")),
        active_parameter,
    }
}
