//! Signature help tests for the IDE layer.

use std::path::Path;

use crate::helpers::workspace_fixtures::*;
use escript::ide::{Analysis, DocIndex, FunctionDoc, LspPosition};

#[test]
fn test_signature_help_tracks_active_parameter() {
    let workspace = analyzed_workspace();
    // `Print(f(PI),| 1);`
    let help = Analysis::new(&workspace)
        .signature_help(Path::new(MAIN_PATH), LspPosition::new(6, 12))
        .unwrap()
        .expect("inside a call");

    assert_eq!(help.label, "Print( text, font := 3 )");
    assert_eq!(help.active_parameter, 1);
    assert_eq!(help.parameters.len(), 2);
    assert_eq!(help.parameters[1].label, (13, 17));
}

#[test]
fn test_signature_help_picks_innermost_call() {
    let workspace = analyzed_workspace();
    // `Print(f(|PI), 1);`
    let help = Analysis::new(&workspace)
        .signature_help(Path::new(MAIN_PATH), LspPosition::new(6, 8))
        .unwrap()
        .expect("inside a call");

    assert_eq!(help.label, "f( x )");
    assert_eq!(help.active_parameter, 0);
}

#[test]
fn test_signature_help_after_closed_call_returns_outer() {
    let workspace = analyzed_workspace();
    // `Print(f(PI)|, 1);`
    let help = Analysis::new(&workspace)
        .signature_help(Path::new(MAIN_PATH), LspPosition::new(6, 11))
        .unwrap()
        .expect("inside a call");

    assert_eq!(help.label, "Print( text, font := 3 )");
    assert_eq!(help.active_parameter, 0);
}

#[test]
fn test_signature_help_outside_call_is_none() {
    let workspace = analyzed_workspace();
    let help = Analysis::new(&workspace)
        .signature_help(Path::new(MAIN_PATH), LspPosition::new(1, 3))
        .unwrap();
    assert!(help.is_none());
}

#[test]
fn test_signature_help_carries_parameter_documentation() {
    let workspace = analyzed_workspace();
    let mut docs = DocIndex::new();
    docs.insert(
        "uo",
        "Print",
        FunctionDoc::default()
            .with_explain("Shows text.")
            .with_parameter("font", "Font number"),
    );
    let help = Analysis::new(&workspace)
        .with_docs(&docs)
        .signature_help(Path::new(MAIN_PATH), LspPosition::new(6, 12))
        .unwrap()
        .unwrap();

    assert_eq!(help.documentation.as_deref(), Some("Shows text."));
    assert_eq!(help.parameters[0].documentation, None);
    assert_eq!(help.parameters[1].documentation.as_deref(), Some("Font number"));
}
