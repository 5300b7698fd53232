//! Document cache and request validation tests.

use std::path::{Path, PathBuf};

use crate::helpers::workspace_fixtures::*;
use escript::config::AnalysisConfig;
use escript::error::AnalysisError;
use escript::ide::{Analysis, LspPosition};
use escript::project::DocumentKind;
use rstest::rstest;

#[test]
fn test_get_or_create_returns_one_handle_per_path() {
    let mut workspace = workspace_with(AnalysisConfig::default());
    workspace.get_or_create(Path::new(MAIN_PATH));
    workspace.get_or_create(Path::new(MAIN_PATH));
    workspace.get_or_create(Path::new(MODULE_PATH));

    assert_eq!(workspace.document_count(), 2);
    assert_eq!(
        workspace.document(Path::new(MODULE_PATH)).map(|d| d.kind()),
        Some(DocumentKind::Module)
    );
}

#[test]
fn test_analysis_replaces_previous_result() {
    let mut workspace = analyzed_workspace();
    workspace.analyze(Path::new(MAIN_PATH)).unwrap();

    assert_eq!(workspace.document_count(), 1);
    assert!(workspace.compiler_workspace(Path::new(MAIN_PATH)).is_ok());
    assert_eq!(
        workspace.dependents(Path::new(MAIN_PATH)),
        vec![PathBuf::from(MODULE_PATH)]
    );
}

#[rstest]
#[case(7, 0)]
#[case(40, 2)]
#[case(u32::MAX, 0)]
#[case(0, u32::MAX)]
#[case(0, 8)]
#[case(0, 500)]
fn test_invalid_positions_are_rejected(#[case] line: u32, #[case] character: u32) {
    let workspace = analyzed_workspace();
    let result = Analysis::new(&workspace).hover(Path::new(MAIN_PATH), LspPosition::new(line, character));

    match result {
        Err(AnalysisError::InvalidPosition { path, .. }) => assert_eq!(path, Path::new(MAIN_PATH)),
        other => panic!("expected InvalidPosition, got {other:?}"),
    }
}

#[test]
fn test_end_of_line_is_a_valid_position() {
    let workspace = analyzed_workspace();
    // Just past `use uo;`
    let result = Analysis::new(&workspace).hover(Path::new(MAIN_PATH), LspPosition::new(0, 7));
    assert!(matches!(result, Ok(None)));
}

#[test]
fn test_requests_on_unknown_documents_fail() {
    let workspace = analyzed_workspace();
    let result = Analysis::new(&workspace).completion(Path::new("/scripts/other.src"), LspPosition::new(0, 0));
    assert!(matches!(result, Err(AnalysisError::UnknownDocument(_))));
}

#[test]
fn test_requests_on_unanalyzed_documents_fail() {
    let mut workspace = analyzed_workspace();
    workspace.get_or_create(Path::new("/scripts/other.src"));
    let result = Analysis::new(&workspace).hover(Path::new("/scripts/other.src"), LspPosition::new(0, 0));
    assert!(matches!(result, Err(AnalysisError::NotAnalyzed(_))));
}

#[test]
fn test_build_references_analyzes_unopened_documents_temporarily() {
    let mut workspace = workspace_with(AnalysisConfig::default());
    let other = Path::new("/scripts/other.src");

    workspace.build_references(other).unwrap();

    assert!(workspace.document(other).unwrap().workspace().is_none());
    // Usages found in other.src are indexed on the defining document.
    let indexed = workspace
        .referenced_by(Path::new(MODULE_PATH), &escript::base::Range::from_coords(3, 1, 3, 6))
        .unwrap();
    assert_eq!(indexed.len(), 1);
    assert_eq!(indexed.first().map(|u| u.path.clone()), Some(PathBuf::from("/scripts/other.src")));
}
