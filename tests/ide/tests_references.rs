//! Find-references tests for the IDE layer.

use std::path::Path;

use crate::helpers::workspace_fixtures::*;
use escript::base::Range;
use escript::ide::{Analysis, LspLocation, LspPosition};

fn starts(locations: &[LspLocation]) -> Vec<(u32, u32)> {
    locations
        .iter()
        .map(|l| (l.range.start.line, l.range.start.character))
        .collect()
}

fn references_at(
    workspace: &escript::project::Workspace,
    line: u32,
    character: u32,
    include_declaration: bool,
) -> Option<Vec<LspLocation>> {
    Analysis::new(workspace)
        .references(
            Path::new(MAIN_PATH),
            LspPosition::new(line, character),
            include_declaration,
        )
        .expect("position is valid")
}

#[test]
fn test_references_are_empty_before_build() {
    let workspace = analyzed_workspace();
    assert_eq!(references_at(&workspace, 1, 6, false), Some(Vec::new()));
}

#[test]
fn test_constant_references_include_folded_uses() {
    let mut workspace = analyzed_workspace();
    workspace.build_references(Path::new(MAIN_PATH)).unwrap();

    let refs = references_at(&workspace, 1, 6, false).unwrap();
    assert_eq!(starts(&refs), vec![(3, 15), (6, 8)]);
    assert!(refs.iter().all(|r| r.path == Path::new(MAIN_PATH)));
}

#[test]
fn test_references_with_declaration_list_it_first() {
    let mut workspace = analyzed_workspace();
    workspace.build_references(Path::new(MAIN_PATH)).unwrap();

    let refs = references_at(&workspace, 3, 16, true).unwrap();
    assert_eq!(starts(&refs), vec![(1, 6), (3, 15), (6, 8)]);
}

#[test]
fn test_parameter_references() {
    let mut workspace = analyzed_workspace();
    workspace.build_references(Path::new(MAIN_PATH)).unwrap();

    let refs = references_at(&workspace, 2, 11, false).unwrap();
    assert_eq!(starts(&refs), vec![(3, 11)]);
}

#[test]
fn test_function_references_cover_the_name_only() {
    let mut workspace = analyzed_workspace();
    workspace.build_references(Path::new(MAIN_PATH)).unwrap();

    let refs = references_at(&workspace, 6, 6, false).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].range.start, LspPosition::new(6, 6));
    assert_eq!(refs[0].range.end, LspPosition::new(6, 7));
}

#[test]
fn test_module_function_references_live_on_the_module() {
    let mut workspace = analyzed_workspace();
    workspace.build_references(Path::new(MAIN_PATH)).unwrap();

    let refs = references_at(&workspace, 6, 1, false).unwrap();
    assert_eq!(starts(&refs), vec![(6, 0)]);
    assert_eq!(refs[0].range.end, LspPosition::new(6, 5));

    let indexed = workspace
        .referenced_by(Path::new(MODULE_PATH), &Range::from_coords(3, 1, 3, 6))
        .expect("module document holds the edge");
    assert_eq!(indexed.len(), 1);
    assert!(workspace.document(Path::new(MODULE_PATH)).is_some());
}

#[test]
fn test_rebuilding_references_is_idempotent() {
    let mut workspace = analyzed_workspace();
    workspace.build_references(Path::new(MAIN_PATH)).unwrap();
    let first = references_at(&workspace, 1, 6, true);

    workspace.build_references(Path::new(MAIN_PATH)).unwrap();
    workspace.analyze(Path::new(MAIN_PATH)).unwrap();
    workspace.build_references(Path::new(MAIN_PATH)).unwrap();

    assert_eq!(references_at(&workspace, 1, 6, true), first);
}

#[test]
fn test_references_on_nothing_is_none() {
    let mut workspace = analyzed_workspace();
    workspace.build_references(Path::new(MAIN_PATH)).unwrap();
    assert_eq!(references_at(&workspace, 4, 3, false), None);
}
