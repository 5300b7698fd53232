//! Collects reference edges from one analyzed document.
//!
//! The builder only reads the compiler workspace and emits
//! [`ReferenceFact`]s; merging them into the per-document indexes is left to
//! the project workspace, which owns those indexes.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::base::{Range, ReferenceLocation, SourceLocation};
use crate::hir::{AstKind, AstNode, CompilerWorkspace};

/// One usage of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFact {
    /// Document that declares the symbol, and so owns the index entry.
    pub defining_file: PathBuf,
    /// Range of the declaration in `defining_file`.
    pub defined_at: Range,
    pub used_at: ReferenceLocation,
}

impl ReferenceFact {
    fn new(declaration: &SourceLocation, defined_at: Range, used_at: ReferenceLocation) -> Self {
        Self {
            defining_file: declaration.path().to_path_buf(),
            defined_at,
            used_at,
        }
    }
}

/// Walk the resolved AST of `workspace` and collect every reference edge.
pub fn collect_references(workspace: &CompilerWorkspace) -> Vec<ReferenceFact> {
    let mut facts = Vec::new();
    for &root in &workspace.roots {
        for node in workspace.ast.descendants(root) {
            visit(workspace, node, &mut facts);
        }
    }
    debug!(
        "[REFERENCES] {} facts from {}",
        facts.len(),
        workspace.file.path().display()
    );
    facts
}

fn visit(workspace: &CompilerWorkspace, node: &AstNode, facts: &mut Vec<ReferenceFact>) {
    match &node.kind {
        AstKind::Identifier {
            name,
            declaration: Some(declaration),
        } => {
            trace!("[REFERENCES] identifier '{}' at {:?}", name, node.location.range);
            facts.push(ReferenceFact::new(
                declaration,
                declaration.range,
                ReferenceLocation::from(&node.location),
            ));
        }
        AstKind::FunctionCall {
            name,
            link: Some(link),
        } => {
            // Calls span their arguments; both sides are keyed on the name only.
            let len = link.name.chars().count() as u32;
            trace!("[REFERENCES] call '{}' -> {:?}", name, link.kind);
            facts.push(ReferenceFact::new(
                &link.location,
                link.location.range.narrowed(len),
                ReferenceLocation::new(node.location.path(), node.location.range.narrowed(len)),
            ));
        }
        _ => {}
    }

    if let Some(constant) = &node.folded_constant {
        match workspace.scope_tree.find_constant(constant) {
            Some(declaration) => {
                trace!("[REFERENCES] folded constant '{}'", constant);
                facts.push(ReferenceFact::new(
                    &declaration.location,
                    declaration.location.range,
                    ReferenceLocation::from(&node.location),
                ));
            }
            None => trace!("[REFERENCES] folded constant '{}' not found", constant),
        }
    }
}
