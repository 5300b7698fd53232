//! Arena-backed parse tree.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. Each node
//! keeps its direct tokens (indices into the file's token stream) so shape
//! accessors like "the node's IDENTIFIER" are plain lookups.
//!
//! Trees are built once by [`TreeBuilder`] and never mutated afterwards.

use crate::base::{Position, Range};

use super::kind::NodeKind;
use super::token::{Token, TokenKind};

/// Index of a node in its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub range: Range,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Direct tokens, in source order.
    pub tokens: Vec<u32>,
}

/// A parsed file: the token stream plus the node arena.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    tokens: Vec<Token>,
}

impl SyntaxTree {
    /// A tree with no nodes, for files only needed for their tokens.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            nodes: Vec::new(),
            tokens,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    pub fn range(&self, id: NodeId) -> Range {
        self.node(id).range
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Strict ancestors, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// The nearest strict ancestor of one of `kinds`.
    pub fn nearest_ancestor(&self, id: NodeId, kinds: &[NodeKind]) -> Option<NodeId> {
        self.ancestors(id).find(|&a| kinds.contains(&self.kind(a)))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, index: u32) -> Option<&Token> {
        self.tokens.get(index as usize)
    }

    /// Direct tokens of a node.
    pub fn node_tokens(&self, id: NodeId) -> impl Iterator<Item = &Token> + '_ {
        self.node(id)
            .tokens
            .iter()
            .filter_map(move |&index| self.token(index))
    }

    /// First direct token of `kind`.
    pub fn child_token(&self, id: NodeId, kind: TokenKind) -> Option<&Token> {
        self.node_tokens(id).find(|t| t.kind == kind)
    }

    /// First direct IDENTIFIER token.
    pub fn identifier(&self, id: NodeId) -> Option<&Token> {
        self.child_token(id, TokenKind::Ident)
    }

    /// Last direct IDENTIFIER token.
    pub fn last_identifier(&self, id: NodeId) -> Option<&Token> {
        self.node_tokens(id).filter(|t| t.kind == TokenKind::Ident).last()
    }

    pub fn identifiers(&self, id: NodeId) -> impl Iterator<Item = &Token> + '_ {
        self.node_tokens(id).filter(|t| t.kind == TokenKind::Ident)
    }

    /// First direct child node of `kind`.
    pub fn child_node(&self, id: NodeId, kind: NodeKind) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| self.kind(c) == kind)
    }

    /// The token claiming `position`, trivia included.
    pub fn token_at(&self, position: Position) -> Option<&Token> {
        self.tokens.iter().find(|t| t.contains(position))
    }

    /// Source text covered by a node, trivia included.
    pub fn text(&self, id: NodeId) -> String {
        let range = self.range(id);
        if range.is_empty() {
            return String::new();
        }
        let (first, last) = (range.start.token_index, range.end.token_index);
        self.tokens[first as usize..=last as usize]
            .iter()
            .map(|t| t.text.as_str())
            .collect()
    }
}

/// Builds a [`SyntaxTree`] over a token stream.
///
/// Mirrors a parser's event stream: `start_node`, `bump` the tokens that
/// belong to the node, `finish_node`. Trivia is skipped by `bump` and never
/// attached to nodes.
///
/// ```ignore
/// let mut builder = TreeBuilder::new(tokenize("const PI := 3;"));
/// builder.start_node(NodeKind::CompilationUnit);
/// builder.start_node(NodeKind::ConstStatement);
/// builder.bump(); // const
/// builder.start_node(NodeKind::ConstantDeclaration);
/// builder.bump_n(3); // PI := 3
/// builder.finish_node();
/// builder.bump(); // ;
/// builder.finish_node();
/// let tree = builder.finish();
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    tokens: Vec<Token>,
    nodes: Vec<SyntaxNode>,
    spans: Vec<Option<(u32, u32)>>,
    stack: Vec<NodeId>,
    cursor: usize,
}

impl TreeBuilder {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            nodes: Vec::new(),
            spans: Vec::new(),
            stack: Vec::new(),
            cursor: 0,
        }
    }

    /// Open a node as a child of the innermost open node.
    pub fn start_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.stack.last().copied();
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        self.nodes.push(SyntaxNode {
            kind,
            range: Range::default(),
            parent,
            children: Vec::new(),
            tokens: Vec::new(),
        });
        self.spans.push(None);
        self.stack.push(id);
        id
    }

    /// Close the innermost open node and compute its range.
    pub fn finish_node(&mut self) {
        let Some(id) = self.stack.pop() else {
            return;
        };
        let span = self.spans[id.index()];
        self.nodes[id.index()].range = match span {
            Some((first, last)) => Range::new(
                self.tokens[first as usize].range.start,
                self.tokens[last as usize].range.end,
            ),
            None => {
                let at = self.next_position();
                Range::new(at, at)
            }
        };
        if let (Some(parent), Some((first, last))) = (self.stack.last().copied(), span) {
            self.extend_span(parent, first, last);
        }
    }

    /// Attach the next non-trivia token to the innermost open node.
    ///
    /// Returns `false` when the stream is exhausted.
    pub fn bump(&mut self) -> bool {
        self.skip_trivia();
        if self.cursor >= self.tokens.len() {
            return false;
        }
        let index = self.cursor as u32;
        self.cursor += 1;
        if let Some(&current) = self.stack.last() {
            self.nodes[current.index()].tokens.push(index);
            self.extend_span(current, index, index);
        }
        true
    }

    pub fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            if !self.bump() {
                break;
            }
        }
    }

    /// Kind of the next non-trivia token.
    pub fn peek(&mut self) -> Option<TokenKind> {
        self.skip_trivia();
        self.tokens.get(self.cursor).map(|t| t.kind)
    }

    /// Close all open nodes and return the tree.
    pub fn finish(mut self) -> SyntaxTree {
        while !self.stack.is_empty() {
            self.finish_node();
        }
        SyntaxTree {
            nodes: self.nodes,
            tokens: self.tokens,
        }
    }

    fn skip_trivia(&mut self) {
        while self
            .tokens
            .get(self.cursor)
            .is_some_and(|t| t.kind.is_trivia())
        {
            self.cursor += 1;
        }
    }

    fn extend_span(&mut self, id: NodeId, first: u32, last: u32) {
        let span = &mut self.spans[id.index()];
        *span = Some(match *span {
            Some((a, b)) => (a.min(first), b.max(last)),
            None => (first, last),
        });
    }

    fn next_position(&self) -> Position {
        match self.tokens.get(self.cursor) {
            Some(token) => token.range.start,
            None => self
                .tokens
                .last()
                .map(|t| t.range.end)
                .unwrap_or_else(|| Position::new(1, 1)),
        }
    }
}
