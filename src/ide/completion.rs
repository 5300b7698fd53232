//! Completion suggestions implementation.

use std::sync::Arc;

use tracing::debug;

use crate::base::Position;
use crate::hir::{CompilerWorkspace, ScopeName, ScopeQuery, UserFunctionKind};
use crate::syntax::{Token, TokenKind};

use super::narrow::{innermost_scope, narrow};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Constant,
    Variable,
    Function,
    Constructor,
    Method,
    Class,
    Module,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Method => 2,
            CompletionKind::Function => 3,
            CompletionKind::Constructor => 4,
            CompletionKind::Variable => 6,
            CompletionKind::Class => 7,
            CompletionKind::Module => 9,
            CompletionKind::Constant => 21,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// What the cursor is completing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CompletionTarget {
    /// A name, possibly after `Scope::` or `::`.
    Name { prefix_scope: ScopeName, prefix: String },
    /// A method after `receiver.`
    Member { receiver: Token, prefix: String },
}

/// Get completion suggestions at a position (1-based).
///
/// Lists, in order: constants, variables, user functions, module
/// functions, classes, modules. After `receiver.` only the methods of the
/// receiver's class are listed.
pub fn completions(workspace: &CompilerWorkspace, position: Position) -> Vec<CompletionItem> {
    let tokens = workspace.tree.tokens();
    let Some(target) = completion_target(tokens, position) else {
        return Vec::new();
    };

    let scope = innermost_scope(&narrow(&workspace.tree, position));
    let scope_tree = &workspace.scope_tree;

    let items: Vec<CompletionItem> = match target {
        CompletionTarget::Member { receiver, prefix } => {
            let class_name = if receiver.kind == TokenKind::ThisKw {
                Some(scope.calling_scope.clone())
            } else {
                scope_tree
                    .find_variable(&receiver.text, position)
                    .and_then(|v| v.class_name.clone())
            };
            match class_name.filter(|name| !name.is_empty()) {
                Some(class_name) => scope_tree
                    .list_methods(&class_name, &prefix)
                    .into_iter()
                    .map(|f| {
                        CompletionItem::new(f.name.as_str(), CompletionKind::Method)
                            .with_detail(f.signature())
                    })
                    .collect(),
                None => Vec::new(),
            }
        }
        CompletionTarget::Name {
            prefix_scope,
            prefix,
        } => {
            let query = ScopeQuery::new(
                scope.calling_scope.clone(),
                scope.current_user_function.clone(),
                prefix_scope,
                prefix,
            );
            let mut items = Vec::new();
            items.extend(
                scope_tree
                    .list_constants(&query)
                    .into_iter()
                    .map(|c| CompletionItem::new(c.identifier.as_str(), CompletionKind::Constant)),
            );
            items.extend(
                scope_tree
                    .list_variables(&query, position)
                    .into_iter()
                    .map(|v| CompletionItem::new(v.unqualified_name(), CompletionKind::Variable)),
            );
            items.extend(
                scope_tree
                    .list_user_functions(&query, position)
                    .into_iter()
                    .map(|f| {
                        let kind = if f.kind == UserFunctionKind::Constructor {
                            CompletionKind::Constructor
                        } else {
                            CompletionKind::Function
                        };
                        CompletionItem::new(f.name.as_str(), kind).with_detail(f.signature())
                    }),
            );
            items.extend(
                scope_tree
                    .list_module_functions(&query)
                    .into_iter()
                    .map(|f| {
                        CompletionItem::new(f.name.as_str(), CompletionKind::Function)
                            .with_detail(f.signature())
                    }),
            );
            items.extend(
                scope_tree
                    .list_scopes(&query)
                    .into_iter()
                    .map(|name| CompletionItem::new(name.as_str(), CompletionKind::Class)),
            );
            items.extend(
                scope_tree
                    .list_modules(&query)
                    .into_iter()
                    .map(|name| CompletionItem::new(name.as_str(), CompletionKind::Module)),
            );
            items
        }
    };

    debug!(
        "completion {}:{} -> {} items",
        position.line,
        position.column,
        items.len()
    );
    items
}

/// Classify the token under the cursor, end inclusive.
fn completion_target(tokens: &[Token], position: Position) -> Option<CompletionTarget> {
    let index = tokens
        .iter()
        .position(|t| t.range.contains_inclusive(position))?;
    let token = &tokens[index];
    let before = |n: usize| index.checked_sub(n).map(|i| &tokens[i]);
    let is = |t: Option<&Token>, kind: TokenKind| t.is_some_and(|t| t.kind == kind);

    match token.kind {
        TokenKind::Ident => {
            let typed = (position.column - token.range.start.column) as usize;
            let prefix: String = token.text.chars().take(typed).collect();
            if is(before(1), TokenKind::Dot) {
                return receiver(before(2)).map(|receiver| CompletionTarget::Member { receiver, prefix });
            }
            let prefix_scope = if is(before(1), TokenKind::ColonColon) {
                scope_qualifier(before(2))
            } else {
                ScopeName::None
            };
            Some(CompletionTarget::Name {
                prefix_scope,
                prefix,
            })
        }
        TokenKind::ColonColon => Some(CompletionTarget::Name {
            prefix_scope: scope_qualifier(before(1)),
            prefix: String::new(),
        }),
        TokenKind::Dot => receiver(before(1)).map(|receiver| CompletionTarget::Member {
            receiver,
            prefix: String::new(),
        }),
        _ => None,
    }
}

fn scope_qualifier(token: Option<&Token>) -> ScopeName {
    match token {
        Some(t) if t.kind == TokenKind::Ident => ScopeName::Named(t.text.clone()),
        _ => ScopeName::Global,
    }
}

fn receiver(token: Option<&Token>) -> Option<Token> {
    token
        .filter(|t| matches!(t.kind, TokenKind::Ident | TokenKind::ThisKw))
        .cloned()
}
