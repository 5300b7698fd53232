//! Document outline.

use std::sync::Arc;

use crate::base::Range;
use crate::hir::names_equal;
use crate::syntax::{NodeId, NodeKind, SyntaxTree, TokenKind};

/// Outline entry kind, numbered like LSP `SymbolKind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentSymbolKind {
    Class,
    Method,
    Constructor,
    Enum,
    Function,
    Variable,
    Constant,
    EnumMember,
}

impl DocumentSymbolKind {
    pub fn to_lsp(self) -> u32 {
        match self {
            DocumentSymbolKind::Class => 5,
            DocumentSymbolKind::Method => 6,
            DocumentSymbolKind::Constructor => 9,
            DocumentSymbolKind::Enum => 10,
            DocumentSymbolKind::Function => 12,
            DocumentSymbolKind::Variable => 13,
            DocumentSymbolKind::Constant => 14,
            DocumentSymbolKind::EnumMember => 22,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSymbol {
    pub name: Arc<str>,
    pub kind: DocumentSymbolKind,
    /// Whole declaration.
    pub range: Range,
    /// The declaring name.
    pub selection_range: Range,
    pub children: Vec<DocumentSymbol>,
}

const FUNCTION_EXPRESSION_NAME: &str = "<function expression>";

/// Declarations of the document as a tree: class members and enum entries
/// nest under their declaration.
pub fn document_symbols(tree: &SyntaxTree) -> Vec<DocumentSymbol> {
    let mut symbols = Vec::new();
    if let Some(root) = tree.root() {
        let mut outline = Outline {
            tree,
            current_class: None,
        };
        outline.visit_children(root, &mut symbols);
    }
    symbols
}

struct Outline<'a> {
    tree: &'a SyntaxTree,
    current_class: Option<&'a str>,
}

impl<'a> Outline<'a> {
    fn visit_children(&mut self, node: NodeId, out: &mut Vec<DocumentSymbol>) {
        for &child in self.tree.children(node) {
            self.visit(child, out);
        }
    }

    fn visit(&mut self, node: NodeId, out: &mut Vec<DocumentSymbol>) {
        let tree = self.tree;
        let kind = match tree.kind(node) {
            NodeKind::ClassDeclaration => DocumentSymbolKind::Class,
            NodeKind::ConstantDeclaration => DocumentSymbolKind::Constant,
            NodeKind::VariableDeclaration => DocumentSymbolKind::Variable,
            NodeKind::EnumStatement => DocumentSymbolKind::Enum,
            NodeKind::EnumListEntry => DocumentSymbolKind::EnumMember,
            NodeKind::ModuleFunctionDeclaration => DocumentSymbolKind::Function,
            NodeKind::FunctionDeclaration => self.function_kind(node),
            NodeKind::FunctionExpression => {
                match tree.child_token(node, TokenKind::At) {
                    Some(at) => self.append(
                        node,
                        FUNCTION_EXPRESSION_NAME,
                        at.range,
                        DocumentSymbolKind::Function,
                        out,
                    ),
                    None => self.visit_children(node, out),
                }
                return;
            }
            _ => {
                self.visit_children(node, out);
                return;
            }
        };

        let Some(identifier) = tree.identifier(node) else {
            self.visit_children(node, out);
            return;
        };

        if kind == DocumentSymbolKind::Class {
            let outer = self.current_class.replace(identifier.text.as_str());
            self.append(node, &identifier.text, identifier.range, kind, out);
            self.current_class = outer;
        } else {
            self.append(node, &identifier.text, identifier.range, kind, out);
        }
    }

    fn append(
        &mut self,
        node: NodeId,
        name: &str,
        selection_range: Range,
        kind: DocumentSymbolKind,
        out: &mut Vec<DocumentSymbol>,
    ) {
        let mut children = Vec::new();
        self.visit_children(node, &mut children);
        out.push(DocumentSymbol {
            name: Arc::from(name),
            kind,
            range: self.tree.range(node),
            selection_range,
            children,
        });
    }

    /// Functions in a class taking `this` first are methods, or the
    /// constructor when named after the class.
    fn function_kind(&self, function: NodeId) -> DocumentSymbolKind {
        let Some(class) = self.current_class else {
            return DocumentSymbolKind::Function;
        };
        let takes_this = self
            .first_parameter(function)
            .and_then(|param| self.tree.node_tokens(param).next())
            .is_some_and(|token| {
                matches!(token.kind, TokenKind::Ident | TokenKind::ThisKw)
                    && names_equal(&token.text, "this")
            });
        if !takes_this {
            return DocumentSymbolKind::Function;
        }
        match self.tree.identifier(function) {
            Some(name) if names_equal(&name.text, class) => DocumentSymbolKind::Constructor,
            _ => DocumentSymbolKind::Method,
        }
    }

    fn first_parameter(&self, function: NodeId) -> Option<NodeId> {
        let mut stack = vec![self.tree.child_node(function, NodeKind::FunctionParameters)?];
        while let Some(node) = stack.pop() {
            if self.tree.kind(node) == NodeKind::FunctionParameter {
                return Some(node);
            }
            stack.extend(self.tree.children(node).iter().rev().copied());
        }
        None
    }
}
