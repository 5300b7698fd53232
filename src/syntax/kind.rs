//! Grammar rule kinds of the eScript parse tree.
//!
//! The set is closed: the external parser maps every rule it produces to one
//! of these kinds, and the dispatcher matches on them exhaustively.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // =========================================================================
    // STRUCTURE
    // =========================================================================
    CompilationUnit,
    ModuleUnit,
    Statement,
    Block,
    Expression,
    ExpressionList,
    Arguments,
    StringIdentifier,
    VariableDeclarationList,
    ConstStatement,
    VarStatement,
    EnumStatement,
    SwitchStatement,
    SwitchBlockStatementGroup,
    ClassBody,
    FunctionParameters,
    FunctionParameterList,
    ModuleFunctionParameterList,
    ProgramParameters,
    ProgramParameterList,
    Error,

    // =========================================================================
    // DECLARATIONS
    // =========================================================================
    IncludeDeclaration,
    UseDeclaration,
    ClassDeclaration,
    ClassParameterList,
    FunctionDeclaration,
    FunctionParameter,
    ModuleFunctionDeclaration,
    ModuleFunctionParameter,
    ProgramDeclaration,
    ProgramParameter,
    VariableDeclaration,
    ConstantDeclaration,
    EnumListEntry,

    // =========================================================================
    // STATEMENTS WITH BINDINGS
    // =========================================================================
    ForeachStatement,
    ForeachIterableExpression,
    BasicForStatement,
    SwitchLabel,

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================
    Primary,
    ScopedIdentifier,
    FunctionCall,
    ScopedFunctionCall,
    FunctionReference,
    FunctionExpression,
    NavigationSuffix,
    MethodCallSuffix,
    StructInitializerExpression,
}

impl NodeKind {
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            NodeKind::ClassDeclaration
                | NodeKind::FunctionDeclaration
                | NodeKind::ModuleFunctionDeclaration
                | NodeKind::ProgramDeclaration
                | NodeKind::VariableDeclaration
                | NodeKind::ConstantDeclaration
        )
    }
}
