//! Per-document compilation result.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{SourceFileId, SourceLocation, paths_equal};
use crate::syntax::{SyntaxTree, Token};

use super::ast::{Ast, AstId};
use super::decl::Program;
use super::scope_tree::ScopeTree;

/// Everything the compiler produced for one document.
///
/// Replaced wholesale on every analysis; the query layer never mutates it.
pub struct CompilerWorkspace {
    /// The analyzed document.
    pub file: SourceFileId,
    /// Parse tree and token stream of the analyzed document.
    pub tree: SyntaxTree,
    pub scope_tree: Box<dyn ScopeTree>,
    pub program: Option<Program>,
    /// Every file loaded while compiling, the document itself first.
    referenced_files: Vec<SourceFileId>,
    /// Token streams of other loaded files, for documentation comments.
    file_tokens: Vec<(SourceFileId, Vec<Token>)>,
    class_locations: FxHashMap<SmolStr, SourceLocation>,
    pub ast: Ast,
    /// Top-level statements, the program, and user functions.
    pub roots: Vec<AstId>,
}

impl CompilerWorkspace {
    pub fn new(file: SourceFileId, tree: SyntaxTree, scope_tree: Box<dyn ScopeTree>) -> Self {
        Self {
            referenced_files: vec![file.clone()],
            file,
            tree,
            scope_tree,
            program: None,
            file_tokens: Vec::new(),
            class_locations: FxHashMap::default(),
            ast: Ast::new(),
            roots: Vec::new(),
        }
    }

    pub fn with_program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    pub fn add_referenced_file(&mut self, file: SourceFileId) {
        if !self.referenced_files.contains(&file) {
            self.referenced_files.push(file);
        }
    }

    /// Keep the tokens of a loaded file for comment lookups.
    pub fn add_file_tokens(&mut self, file: SourceFileId, tokens: Vec<Token>) {
        self.add_referenced_file(file.clone());
        self.file_tokens.push((file, tokens));
    }

    pub fn add_class(&mut self, name: &str, location: SourceLocation) {
        self.class_locations
            .insert(SmolStr::new(name.to_ascii_lowercase()), location);
    }

    pub fn referenced_files(&self) -> &[SourceFileId] {
        &self.referenced_files
    }

    pub fn class_location(&self, name: &str) -> Option<&SourceLocation> {
        self.class_locations.get(name.to_ascii_lowercase().as_str())
    }

    /// Whether a loaded file is the module `<name>.em`.
    pub fn references_module(&self, name: &str) -> bool {
        let module_file = format!("{name}.em");
        self.referenced_files.iter().any(|file| {
            file.path()
                .file_name()
                .is_some_and(|file_name| paths_equal(file_name.as_ref(), module_file.as_ref()))
        })
    }

    /// Token stream of any loaded file.
    pub fn tokens_for(&self, file: &SourceFileId) -> Option<&[Token]> {
        if *file == self.file {
            return Some(self.tree.tokens());
        }
        self.file_tokens
            .iter()
            .find(|(id, _)| id == file)
            .map(|(_, tokens)| tokens.as_slice())
    }

    /// Number of lines in the analyzed document.
    pub fn line_count(&self) -> u32 {
        self.tree
            .tokens()
            .last()
            .map(|t| t.range.end.line)
            .unwrap_or(1)
    }

    /// Column just past the last character of `line`, newline excluded.
    pub fn line_end(&self, line: u32) -> u32 {
        let mut end = 1;
        let on_line = self
            .tree
            .tokens()
            .iter()
            .filter(|t| t.range.start.line <= line && line <= t.range.end.line);
        for token in on_line {
            let (mut at_line, mut column) = (token.range.start.line, token.range.start.column);
            for c in token.text.chars() {
                if c == '\n' {
                    if at_line == line {
                        end = end.max(column);
                    }
                    at_line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }
            if at_line == line {
                end = end.max(column);
            }
        }
        end
    }
}

impl std::fmt::Debug for CompilerWorkspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompilerWorkspace")
            .field("file", &self.file)
            .field("referenced_files", &self.referenced_files)
            .field("ast_nodes", &self.ast.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::SymbolTable;
    use crate::syntax::{SyntaxTree, tokenize};

    fn compiled(source: &str) -> CompilerWorkspace {
        CompilerWorkspace::new(
            SourceFileId::new(0, "/test.src"),
            SyntaxTree::from_tokens(tokenize(source)),
            Box::new(SymbolTable::new()),
        )
    }

    #[test]
    fn test_line_bounds() {
        let workspace = compiled("var x;\n\n  Print(x);  \n");
        assert_eq!(workspace.line_count(), 4);
        assert_eq!(workspace.line_end(1), 7);
        assert_eq!(workspace.line_end(2), 1);
        assert_eq!(workspace.line_end(3), 14);
        assert_eq!(workspace.line_end(4), 1);
    }
}
