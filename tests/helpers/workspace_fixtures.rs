//! A small analyzed script, built the way a compiler front end would
//! hand it over.
//!
//! ```text
//! 1  use uo;
//! 2  const PI := 3;
//! 3  function f(x)
//! 4    var y := x + PI;
//! 5    return y;
//! 6  endfunction
//! 7  Print(f(PI), 1);
//! ```

#![allow(dead_code)]

use std::path::Path;

use escript::base::{Range, SourceFileId, SourceLocation};
use escript::config::AnalysisConfig;
use escript::error::Result;
use escript::hir::{
    AstKind, CompilerWorkspace, ConstDeclaration, Expression, FunctionLink, FunctionLinkKind,
    FunctionParameter, ModuleFunctionDeclaration, SymbolTable, UserFunction, UserFunctionKind,
    Variable, VariableKind,
};
use escript::project::{DocumentKind, Workspace};
use escript::syntax::{NodeKind, TreeBuilder, tokenize};

pub const MAIN_PATH: &str = "/scripts/main.src";
pub const MODULE_PATH: &str = "/modules/uo.em";

pub const MAIN_SOURCE: &str = "use uo;\nconst PI := 3;\nfunction f(x)\n  var y := x + PI;\n  return y;\nendfunction\nPrint(f(PI), 1);";

fn range(line: u32, start: u32, end_line: u32, end: u32) -> Range {
    Range::from_coords(line, start, end_line, end)
}

/// Parse tree of [`MAIN_SOURCE`].
fn main_tree() -> escript::syntax::SyntaxTree {
    let mut b = TreeBuilder::new(tokenize(MAIN_SOURCE));
    b.start_node(NodeKind::CompilationUnit);

    // use uo;
    b.start_node(NodeKind::UseDeclaration);
    b.bump();
    b.start_node(NodeKind::StringIdentifier);
    b.bump();
    b.finish_node();
    b.bump();
    b.finish_node();

    // const PI := 3;
    b.start_node(NodeKind::ConstStatement);
    b.bump();
    b.start_node(NodeKind::ConstantDeclaration);
    b.bump_n(3);
    b.finish_node();
    b.bump();
    b.finish_node();

    // function f(x) ... endfunction
    b.start_node(NodeKind::FunctionDeclaration);
    b.bump_n(2);
    b.start_node(NodeKind::FunctionParameters);
    b.bump();
    b.start_node(NodeKind::FunctionParameterList);
    b.start_node(NodeKind::FunctionParameter);
    b.bump();
    b.finish_node();
    b.finish_node();
    b.bump();
    b.finish_node();
    b.start_node(NodeKind::Block);
    {
        // var y := x + PI;
        b.start_node(NodeKind::VarStatement);
        b.bump();
        b.start_node(NodeKind::VariableDeclaration);
        b.bump_n(2);
        b.start_node(NodeKind::Expression);
        b.start_node(NodeKind::Primary);
        b.bump();
        b.finish_node();
        b.bump();
        b.start_node(NodeKind::Primary);
        b.bump();
        b.finish_node();
        b.finish_node();
        b.finish_node();
        b.bump();
        b.finish_node();

        // return y;
        b.start_node(NodeKind::Statement);
        b.bump();
        b.start_node(NodeKind::Primary);
        b.bump();
        b.finish_node();
        b.bump();
        b.finish_node();
    }
    b.finish_node();
    b.bump();
    b.finish_node();

    // Print(f(PI), 1);
    b.start_node(NodeKind::Statement);
    b.start_node(NodeKind::FunctionCall);
    b.bump();
    b.start_node(NodeKind::Arguments);
    b.bump();
    b.start_node(NodeKind::FunctionCall);
    b.bump();
    b.start_node(NodeKind::Arguments);
    b.bump();
    b.start_node(NodeKind::Primary);
    b.bump();
    b.finish_node();
    b.bump();
    b.finish_node();
    b.finish_node();
    b.bump();
    b.start_node(NodeKind::Primary);
    b.bump();
    b.finish_node();
    b.bump();
    b.finish_node();
    b.finish_node();
    b.bump();
    b.finish_node();

    b.finish()
}

/// Compile [`MAIN_SOURCE`] as the file at `path`.
pub fn compile_main(path: &Path) -> CompilerWorkspace {
    let main = SourceFileId::new(0, path);
    let module = SourceFileId::new(1, MODULE_PATH);
    let at = |file: &SourceFileId, r: Range| SourceLocation::new(file.clone(), r);

    let print = ModuleFunctionDeclaration {
        module: "uo".into(),
        name: "Print".into(),
        parameters: vec![
            FunctionParameter::new("text"),
            FunctionParameter::new("font").with_default(Expression::Integer(3)),
        ],
        location: at(&module, range(3, 1, 3, 30)),
    };
    let f = UserFunction {
        name: "f".into(),
        scope: None,
        kind: UserFunctionKind::Standalone,
        parameters: vec![FunctionParameter::new("x").at(at(&main, range(3, 12, 3, 13)))],
        location: at(&main, range(3, 10, 6, 12)),
    };
    let pi = at(&main, range(2, 7, 2, 9));
    let x = at(&main, range(3, 12, 3, 13));
    let y = at(&main, range(4, 7, 4, 8));

    let mut table = SymbolTable::new();
    table.add_constant(ConstDeclaration::new("PI", Expression::Integer(3), pi.clone()));
    table.add_local(
        Variable::new("x", VariableKind::Parameter, x.clone()),
        range(3, 1, 6, 12),
    );
    table.add_local(
        Variable::new("y", VariableKind::Local, y.clone()),
        range(4, 3, 6, 12),
    );
    table.add_user_function(f.clone());
    table.add_module_function(print.clone());

    let mut ws = CompilerWorkspace::new(main.clone(), main_tree(), Box::new(table));
    ws.add_referenced_file(module.clone());

    // Function body: x and y resolve to their declarations, PI was folded.
    let body = ws.ast.alloc(AstKind::Node, f.location.clone());
    let x_use = ws.ast.alloc(
        AstKind::Identifier {
            name: "x".into(),
            declaration: Some(x),
        },
        at(&main, range(4, 12, 4, 13)),
    );
    let pi_use = ws.ast.alloc(AstKind::Value, at(&main, range(4, 16, 4, 18)));
    ws.ast.set_folded_constant(pi_use, "PI");
    let y_use = ws.ast.alloc(
        AstKind::Identifier {
            name: "y".into(),
            declaration: Some(y),
        },
        at(&main, range(5, 10, 5, 11)),
    );
    for child in [x_use, pi_use, y_use] {
        ws.ast.add_child(body, child);
    }

    // Top level: Print(f(PI), 1);
    let print_call = ws.ast.alloc(
        AstKind::FunctionCall {
            name: "Print".into(),
            link: Some(FunctionLink {
                kind: FunctionLinkKind::Module,
                name: "Print".into(),
                location: print.location.clone(),
            }),
        },
        at(&main, range(7, 1, 7, 16)),
    );
    let f_call = ws.ast.alloc(
        AstKind::FunctionCall {
            name: "f".into(),
            link: Some(FunctionLink {
                kind: FunctionLinkKind::User,
                name: "f".into(),
                location: f.location.clone(),
            }),
        },
        at(&main, range(7, 7, 7, 12)),
    );
    let pi_arg = ws.ast.alloc(AstKind::Value, at(&main, range(7, 9, 7, 11)));
    ws.ast.set_folded_constant(pi_arg, "PI");
    let one = ws.ast.alloc(AstKind::Value, at(&main, range(7, 14, 7, 15)));
    ws.ast.add_child(f_call, pi_arg);
    ws.ast.add_child(print_call, f_call);
    ws.ast.add_child(print_call, one);

    ws.roots.push(print_call);
    ws.roots.push(body);
    ws
}

fn analyze_main(path: &Path, _kind: DocumentKind, _continue_on_error: bool) -> Result<CompilerWorkspace> {
    Ok(compile_main(path))
}

/// A workspace whose analyzer compiles every document as [`MAIN_SOURCE`].
pub fn workspace_with(config: AnalysisConfig) -> Workspace {
    Workspace::new(config, analyze_main)
}

/// A workspace with [`MAIN_PATH`] analyzed.
pub fn analyzed_workspace() -> Workspace {
    let mut workspace = workspace_with(AnalysisConfig::default());
    workspace
        .analyze(Path::new(MAIN_PATH))
        .expect("fixture analysis succeeds");
    workspace
}
