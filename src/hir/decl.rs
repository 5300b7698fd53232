//! Declaration handles returned by the scope tree.

use smol_str::SmolStr;

use crate::base::{Position, SourceLocation};

/// eScript identifiers compare ignoring ASCII case.
pub fn names_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Case-insensitive prefix test used by completion listings.
pub fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.is_char_boundary(prefix.len())
        && names_equal(&name[..prefix.len()], prefix)
}

/// A describable initializer or default value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer(i64),
    Float(f64),
    String(SmolStr),
    Uninit,
    Identifier(SmolStr),
    /// Anything else, kept as source text.
    Source(String),
}

impl Expression {
    /// Source-like rendering used in hover and signature labels.
    pub fn describe(&self) -> String {
        match self {
            Expression::Integer(value) => value.to_string(),
            Expression::Float(value) => value.to_string(),
            Expression::String(value) => format!("\"{value}\""),
            Expression::Uninit => "uninit".to_string(),
            Expression::Identifier(name) => name.to_string(),
            Expression::Source(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Global,
    Local,
    /// A function parameter seen as a variable inside the function body.
    Parameter,
    /// A class-level variable, named `Class::name`.
    Member,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: SmolStr,
    pub kind: VariableKind,
    pub location: SourceLocation,
    /// Class of the value, when the compiler could infer it.
    pub class_name: Option<SmolStr>,
}

impl Variable {
    pub fn new(name: impl Into<SmolStr>, kind: VariableKind, location: SourceLocation) -> Self {
        Self {
            name: name.into(),
            kind,
            location,
            class_name: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<SmolStr>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// The name without any `Scope::` qualifier.
    pub fn unqualified_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstDeclaration {
    pub identifier: SmolStr,
    pub expression: Expression,
    pub location: SourceLocation,
    /// Declared after, and hiding, a constant of the same name (enum
    /// entries redefining a global constant).
    pub shadows_global: bool,
}

impl ConstDeclaration {
    pub fn new(
        identifier: impl Into<SmolStr>,
        expression: Expression,
        location: SourceLocation,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            expression,
            location,
            shadows_global: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParameter {
    pub name: SmolStr,
    pub default_value: Option<Expression>,
    pub location: Option<SourceLocation>,
}

impl FunctionParameter {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            location: None,
        }
    }

    pub fn with_default(mut self, value: Expression) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// `name` or `name := default`.
    pub fn label(&self) -> String {
        match &self.default_value {
            Some(value) => format!("{} := {}", self.name, value.describe()),
            None => self.name.to_string(),
        }
    }
}

fn find_parameter<'a>(params: &'a [FunctionParameter], name: &str) -> Option<&'a FunctionParameter> {
    params.iter().find(|p| names_equal(&p.name, name))
}

fn parameter_list(params: &[FunctionParameter]) -> String {
    params
        .iter()
        .map(FunctionParameter::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A function exported by an `.em` module.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleFunctionDeclaration {
    pub module: SmolStr,
    pub name: SmolStr,
    pub parameters: Vec<FunctionParameter>,
    pub location: SourceLocation,
}

impl ModuleFunctionDeclaration {
    pub fn parameter(&self, name: &str) -> Option<&FunctionParameter> {
        find_parameter(&self.parameters, name)
    }

    /// `name(a, b := 1)`
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, parameter_list(&self.parameters))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFunctionKind {
    Standalone,
    Method,
    Constructor,
    /// The implicit `super` forwarder of a class.
    Super,
    /// An anonymous `@(..) { }` function expression.
    Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    pub name: SmolStr,
    /// Owning class, if any.
    pub scope: Option<SmolStr>,
    pub kind: UserFunctionKind,
    pub parameters: Vec<FunctionParameter>,
    pub location: SourceLocation,
}

impl UserFunction {
    pub fn parameter(&self, name: &str) -> Option<&FunctionParameter> {
        find_parameter(&self.parameters, name)
    }

    /// `Scope::name` for class functions, `name` otherwise.
    pub fn scoped_name(&self) -> String {
        match &self.scope {
            Some(scope) => format!("{scope}::{}", self.name),
            None => self.name.to_string(),
        }
    }

    pub fn signature(&self) -> String {
        format!("{}({})", self.scoped_name(), parameter_list(&self.parameters))
    }

    /// Name the compiler gives the function expression whose `@` is at `at`.
    pub fn expression_name(at: Position) -> String {
        format!("funcexpr@0:{}:{}", at.line, at.column)
    }

    /// Constructors and `super` take the instance as a hidden first parameter.
    pub fn has_implicit_this(&self) -> bool {
        matches!(
            self.kind,
            UserFunctionKind::Constructor | UserFunctionKind::Super
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramParameter {
    pub name: SmolStr,
    pub default_value: Option<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: SmolStr,
    pub parameters: Vec<ProgramParameter>,
    pub location: SourceLocation,
}

impl Program {
    pub fn parameter(&self, name: &str) -> Option<&ProgramParameter> {
        self.parameters.iter().find(|p| names_equal(&p.name, name))
    }

    pub fn signature(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({params})", self.name)
    }
}
