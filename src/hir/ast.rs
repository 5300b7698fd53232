//! Resolved AST produced by the compiler.
//!
//! Only the parts the reference index needs are modelled: identifiers that
//! resolved to a variable, calls that resolved to a function, and values
//! folded from a named constant. Everything else is an opaque node that
//! only carries children.

use smol_str::SmolStr;

use crate::base::SourceLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AstId(u32);

impl AstId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionLinkKind {
    User,
    Module,
}

/// Where a call resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLink {
    pub kind: FunctionLinkKind,
    pub name: SmolStr,
    /// Location of the function's declaration.
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AstKind {
    /// A use of a variable. `declaration` is absent when unresolved.
    Identifier {
        name: SmolStr,
        declaration: Option<SourceLocation>,
    },
    FunctionCall {
        name: SmolStr,
        link: Option<FunctionLink>,
    },
    Value,
    Node,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstNode {
    pub kind: AstKind,
    pub location: SourceLocation,
    pub children: Vec<AstId>,
    /// Name of the constant this node was folded from.
    pub folded_constant: Option<SmolStr>,
}

/// Arena of resolved nodes.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    nodes: Vec<AstNode>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: AstKind, location: SourceLocation) -> AstId {
        let id = AstId(self.nodes.len() as u32);
        self.nodes.push(AstNode {
            kind,
            location,
            children: Vec::new(),
            folded_constant: None,
        });
        id
    }

    pub fn add_child(&mut self, parent: AstId, child: AstId) {
        self.nodes[parent.index()].children.push(child);
    }

    pub fn set_folded_constant(&mut self, id: AstId, constant: impl Into<SmolStr>) {
        self.nodes[id.index()].folded_constant = Some(constant.into());
    }

    pub fn node(&self, id: AstId) -> &AstNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order walk of the subtree at `root`.
    pub fn descendants(&self, root: AstId) -> impl Iterator<Item = &AstNode> + '_ {
        let mut stack = vec![root];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let node = self.node(id);
            stack.extend(node.children.iter().rev().copied());
            Some(node)
        })
    }
}
