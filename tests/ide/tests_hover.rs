//! Hover feature tests for the IDE layer.

use std::path::Path;

use crate::helpers::workspace_fixtures::*;
use escript::config::{AnalysisConfig, ConstantDisplay};
use escript::ide::{Analysis, DocIndex, FunctionDoc, LspPosition, SymbolType};

fn hover_at(line: u32, character: u32) -> Option<(SymbolType, String)> {
    let workspace = analyzed_workspace();
    let analysis = Analysis::new(&workspace);
    analysis
        .hover(Path::new(MAIN_PATH), LspPosition::new(line, character))
        .expect("position is valid")
        .map(|h| (h.kind, h.contents))
}

// =============================================================================
// VARIABLES AND CONSTANTS
// =============================================================================

#[test]
fn test_hover_on_constant_usage_shows_value() {
    assert_eq!(
        hover_at(3, 15),
        Some((SymbolType::Constant, "(constant) PI := 3".to_string()))
    );
}

#[test]
fn test_hover_on_constant_declaration_shows_value() {
    assert_eq!(
        hover_at(1, 7),
        Some((SymbolType::Constant, "(constant) PI := 3".to_string()))
    );
}

#[test]
fn test_hover_on_parameter_usage() {
    assert_eq!(
        hover_at(3, 11),
        Some((SymbolType::Parameter, "(parameter) x".to_string()))
    );
}

#[test]
fn test_hover_on_parameter_declaration() {
    assert_eq!(
        hover_at(2, 11),
        Some((SymbolType::Parameter, "(parameter) x".to_string()))
    );
}

#[test]
fn test_hover_on_local_variable_declaration() {
    assert_eq!(
        hover_at(3, 6),
        Some((SymbolType::Variable, "(variable) y".to_string()))
    );
}

#[test]
fn test_hover_on_whitespace_is_none() {
    assert_eq!(hover_at(3, 0), None);
    assert_eq!(hover_at(3, 13), None);
}

#[test]
fn test_hover_just_past_identifier_is_none() {
    // `x` spans character 11 only.
    assert_eq!(hover_at(3, 12), None);
}

// =============================================================================
// FUNCTIONS AND MODULES
// =============================================================================

#[test]
fn test_hover_on_user_function_call() {
    assert_eq!(
        hover_at(6, 6),
        Some((SymbolType::UserFunction, "(user function) f(x)".to_string()))
    );
}

#[test]
fn test_hover_on_module_function_call() {
    assert_eq!(
        hover_at(6, 2),
        Some((
            SymbolType::ModuleFunction,
            "(module function) Print(text, font := 3)".to_string()
        ))
    );
}

#[test]
fn test_hover_on_module_function_appends_documentation() {
    let workspace = analyzed_workspace();
    let mut docs = DocIndex::new();
    docs.insert(
        "UO",
        "print",
        FunctionDoc::default()
            .with_explain("Shows text above the player.")
            .with_parameter("text", "What to show"),
    );
    let analysis = Analysis::new(&workspace).with_docs(&docs);

    let hover = analysis
        .hover(Path::new(MAIN_PATH), LspPosition::new(6, 0))
        .unwrap()
        .unwrap();
    assert!(
        hover
            .contents
            .starts_with("(module function) Print(text, font := 3)\n\nShows text above the player."),
        "got: {}",
        hover.contents
    );
    assert!(hover.contents.contains("`text`: What to show"));
}

#[test]
fn test_hover_on_use_declaration_names_module() {
    assert_eq!(
        hover_at(0, 4),
        Some((SymbolType::Module, "(module) uo".to_string()))
    );
}

#[test]
fn test_constant_display_is_configurable() {
    let mut workspace = workspace_with(
        AnalysisConfig::default().with_constant_display(ConstantDisplay::QualifyShadowed),
    );
    workspace.analyze(Path::new(MAIN_PATH)).unwrap();
    let analysis = Analysis::new(&workspace);

    // PI does not shadow anything, so it stays unqualified.
    let hover = analysis
        .hover(Path::new(MAIN_PATH), LspPosition::new(1, 6))
        .unwrap()
        .unwrap();
    assert_eq!(hover.contents, "(constant) PI := 3");
}
