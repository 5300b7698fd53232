//! Go-to-definition tests for the IDE layer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::helpers::workspace_fixtures::*;
use escript::config::AnalysisConfig;
use escript::ide::{Analysis, LspLocation, LspPosition, LspRange};
use tempfile::TempDir;

fn location(path: &str, line: u32, start: u32, end_line: u32, end: u32) -> LspLocation {
    LspLocation {
        path: PathBuf::from(path),
        range: LspRange {
            start: LspPosition::new(line, start),
            end: LspPosition::new(end_line, end),
        },
    }
}

fn definition_at(line: u32, character: u32) -> Option<LspLocation> {
    let workspace = analyzed_workspace();
    Analysis::new(&workspace)
        .definition(Path::new(MAIN_PATH), LspPosition::new(line, character))
        .expect("position is valid")
}

#[test]
fn test_goto_parameter_from_usage() {
    assert_eq!(definition_at(3, 11), Some(location(MAIN_PATH, 2, 11, 2, 12)));
}

#[test]
fn test_goto_constant_from_usage() {
    assert_eq!(definition_at(3, 16), Some(location(MAIN_PATH, 1, 6, 1, 8)));
    assert_eq!(definition_at(6, 9), Some(location(MAIN_PATH, 1, 6, 1, 8)));
}

#[test]
fn test_goto_user_function_from_call() {
    assert_eq!(definition_at(6, 6), Some(location(MAIN_PATH, 2, 9, 5, 11)));
}

#[test]
fn test_goto_module_function_crosses_files() {
    assert_eq!(definition_at(6, 0), Some(location(MODULE_PATH, 2, 0, 2, 29)));
}

#[test]
fn test_goto_nothing_on_keyword() {
    assert_eq!(definition_at(4, 3), None);
}

#[test]
fn test_goto_module_needs_existing_file() {
    assert_eq!(definition_at(0, 4), None);
}

#[test]
fn test_goto_module_resolves_to_file_start() {
    let modules = TempDir::new().unwrap();
    fs::write(modules.path().join("uo.em"), "Print(text, font := 3);\n").unwrap();
    let mut workspace =
        workspace_with(AnalysisConfig::default().with_module_directory(modules.path()));
    workspace.analyze(Path::new(MAIN_PATH)).unwrap();

    let target = Analysis::new(&workspace)
        .definition(Path::new(MAIN_PATH), LspPosition::new(0, 5))
        .unwrap()
        .expect("module resolves");

    assert!(target.path.ends_with("uo.em"), "got {}", target.path.display());
    assert_eq!(target.range, LspRange::default());
}
