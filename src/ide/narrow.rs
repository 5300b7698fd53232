//! Tree narrowing with scope tracking.
//!
//! Collects every node whose range contains the query position, outermost
//! first, and records for each one the class and function it sits in.

use smol_str::SmolStr;
use tracing::trace;

use crate::base::Position;
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

/// Class and user function enclosing a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeState {
    pub calling_scope: SmolStr,
    pub current_user_function: SmolStr,
}

/// A node containing the query position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub node: NodeId,
    /// Scope in effect for this node, including the node itself when it is
    /// a class or function declaration.
    pub scope: ScopeState,
}

/// Candidates from the root down to the innermost node containing `position`.
///
/// Only children containing the position are entered, so the walk is linear
/// in tree depth.
pub fn narrow(tree: &SyntaxTree, position: Position) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    if let Some(root) = tree.root() {
        visit(tree, root, position, ScopeState::default(), &mut candidates);
    }
    trace!(
        "[NARROW] {}:{} -> {} candidates",
        position.line,
        position.column,
        candidates.len()
    );
    candidates
}

/// Scope of the innermost candidate, or the top-level scope.
pub fn innermost_scope(candidates: &[Candidate]) -> ScopeState {
    candidates
        .last()
        .map(|c| c.scope.clone())
        .unwrap_or_default()
}

fn visit(
    tree: &SyntaxTree,
    node: NodeId,
    position: Position,
    mut scope: ScopeState,
    out: &mut Vec<Candidate>,
) {
    if !tree.range(node).contains(position) {
        return;
    }

    match tree.kind(node) {
        NodeKind::ClassDeclaration => {
            if let Some(name) = tree.identifier(node) {
                scope.calling_scope = name.text.clone();
            }
        }
        NodeKind::FunctionDeclaration => {
            if let Some(name) = tree.identifier(node) {
                scope.current_user_function = name.text.clone();
            }
        }
        _ => {}
    }

    out.push(Candidate {
        node,
        scope: scope.clone(),
    });

    for &child in tree.children(node) {
        visit(tree, child, position, scope.clone(), out);
    }
}
