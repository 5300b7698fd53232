//! Document symbol tests for the IDE layer.

use std::path::Path;

use crate::helpers::workspace_fixtures::*;
use escript::ide::{Analysis, DocumentSymbolKind};

#[test]
fn test_document_symbols_outline() {
    let workspace = analyzed_workspace();
    let symbols = Analysis::new(&workspace)
        .document_symbols(Path::new(MAIN_PATH))
        .unwrap();

    let top: Vec<_> = symbols.iter().map(|s| (&*s.name, s.kind)).collect();
    assert_eq!(
        top,
        vec![
            ("PI", DocumentSymbolKind::Constant),
            ("f", DocumentSymbolKind::Function)
        ]
    );

    let function = &symbols[1];
    assert_eq!(function.children.len(), 1);
    assert_eq!(&*function.children[0].name, "y");
    assert_eq!(function.children[0].kind, DocumentSymbolKind::Variable);
    assert_eq!(function.range.start.line, 3);
    assert_eq!(function.range.end.line, 6);
    assert_eq!(function.selection_range.start.column, 10);
}
