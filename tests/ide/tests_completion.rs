//! Completion tests for the IDE layer.

use std::path::Path;

use escript::base::{Range, SourceFileId, SourceLocation};
use escript::config::AnalysisConfig;
use escript::error::Result;
use escript::hir::{
    CompilerWorkspace, ConstDeclaration, Expression, FunctionParameter, ModuleFunctionDeclaration,
    SymbolTable, UserFunction, UserFunctionKind, Variable, VariableKind,
};
use escript::ide::{Analysis, CompletionKind, LspPosition};
use escript::project::{DocumentKind, Workspace};
use escript::syntax::{NodeKind, TreeBuilder, tokenize};

use crate::helpers::workspace_fixtures::*;

fn completions_at(line: u32, character: u32) -> Vec<(String, CompletionKind)> {
    let workspace = analyzed_workspace();
    Analysis::new(&workspace)
        .completion(Path::new(MAIN_PATH), LspPosition::new(line, character))
        .expect("position is valid")
        .into_iter()
        .map(|item| (item.label.to_string(), item.kind))
        .collect()
}

#[test]
fn test_completion_lists_constants_before_module_functions() {
    // `P|I` inside `var y := x + PI;`
    assert_eq!(
        completions_at(3, 16),
        vec![
            ("PI".to_string(), CompletionKind::Constant),
            ("Print".to_string(), CompletionKind::Function),
        ]
    );
}

#[test]
fn test_completion_at_end_of_identifier_uses_whole_word() {
    // `x|`
    assert_eq!(
        completions_at(3, 12),
        vec![("x".to_string(), CompletionKind::Variable)]
    );
}

#[test]
fn test_completion_lists_user_functions() {
    // `f|(PI)`
    let items = completions_at(6, 7);
    assert_eq!(items, vec![("f".to_string(), CompletionKind::Function)]);
}

#[test]
fn test_completion_on_punctuation_is_empty() {
    // `;|` at the end of `const PI := 3;`
    assert!(completions_at(1, 14).is_empty());
}

#[test]
fn test_completion_kinds_map_to_lsp() {
    assert_eq!(CompletionKind::Constant.to_lsp(), 21);
    assert_eq!(CompletionKind::Function.to_lsp(), 3);
    assert_eq!(CompletionKind::Module.to_lsp(), 9);
}

// p
// pet.sp
// box.sp
const PETS_PATH: &str = "/scripts/pets.src";
const PETS_SOURCE: &str = "p\npet.sp\nbox.sp";

fn compile_pets(path: &Path) -> CompilerWorkspace {
    let file = SourceFileId::new(0, path);
    let at = |line: u32| SourceLocation::new(file.clone(), Range::from_coords(line, 1, line, 2));
    let function = |name: &str, scope: Option<&str>, kind: UserFunctionKind| UserFunction {
        name: name.into(),
        scope: scope.map(Into::into),
        kind,
        parameters: vec![FunctionParameter::new("this")],
        location: at(10),
    };

    let mut table = SymbolTable::new();
    table.add_constant(ConstDeclaration::new("P_MAX", Expression::Integer(9), at(5)));
    table.add_global(Variable::new("pet", VariableKind::Global, at(6)).with_class("Pet"));
    table.add_global(Variable::new("box", VariableKind::Global, at(7)));
    table.add_user_function(UserFunction {
        parameters: Vec::new(),
        ..function("paint", None, UserFunctionKind::Standalone)
    });
    table.add_user_function(function("Pet", Some("Pet"), UserFunctionKind::Constructor));
    table.add_user_function(function("speak", Some("Pet"), UserFunctionKind::Method));
    table.add_user_function(function("sleep", Some("Pet"), UserFunctionKind::Method));
    table.add_module_function(ModuleFunctionDeclaration {
        module: "polsys".into(),
        name: "Pause".into(),
        parameters: Vec::new(),
        location: at(20),
    });

    let mut b = TreeBuilder::new(tokenize(PETS_SOURCE));
    b.start_node(NodeKind::CompilationUnit);
    b.bump_n(7);
    CompilerWorkspace::new(file, b.finish(), Box::new(table))
}

fn pets_completions_at(line: u32, character: u32) -> Vec<(String, CompletionKind)> {
    let mut workspace = Workspace::new(
        AnalysisConfig::default(),
        |path: &Path, _kind: DocumentKind, _continue: bool| -> Result<CompilerWorkspace> {
            Ok(compile_pets(path))
        },
    );
    workspace
        .analyze(Path::new(PETS_PATH))
        .expect("fixture analysis succeeds");
    Analysis::new(&workspace)
        .completion(Path::new(PETS_PATH), LspPosition::new(line, character))
        .expect("position is valid")
        .into_iter()
        .map(|item| (item.label.to_string(), item.kind))
        .collect()
}

#[test]
fn test_completion_groups_keep_their_order() {
    // `p|`
    assert_eq!(
        pets_completions_at(0, 1),
        vec![
            ("P_MAX".to_string(), CompletionKind::Constant),
            ("pet".to_string(), CompletionKind::Variable),
            ("paint".to_string(), CompletionKind::Function),
            ("Pet".to_string(), CompletionKind::Constructor),
            ("Pause".to_string(), CompletionKind::Function),
            ("Pet".to_string(), CompletionKind::Class),
            ("polsys".to_string(), CompletionKind::Module),
        ]
    );
}

#[test]
fn test_member_completion_lists_methods_of_receiver_class() {
    // `pet.sp|`
    assert_eq!(
        pets_completions_at(1, 6),
        vec![("speak".to_string(), CompletionKind::Method)]
    );
    // `pet.|`
    assert_eq!(
        pets_completions_at(1, 4),
        vec![
            ("speak".to_string(), CompletionKind::Method),
            ("sleep".to_string(), CompletionKind::Method),
        ]
    );
}

#[test]
fn test_member_completion_needs_a_known_class() {
    // `box.sp|`
    assert!(pets_completions_at(2, 6).is_empty());
}
