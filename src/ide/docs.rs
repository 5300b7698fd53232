//! Module function documentation.
//!
//! Documentation of `.em` modules comes from a store the host fills (the
//! module XML files); this crate only reads it through [`ModuleDocs`].

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Documentation of one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDoc {
    pub name: SmolStr,
    pub value: String,
}

/// Documentation of one module function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionDoc {
    pub explain: Vec<String>,
    pub parameters: Vec<ParameterDoc>,
    pub returns: Vec<String>,
    pub errors: Vec<String>,
}

impl FunctionDoc {
    pub fn with_explain(mut self, line: impl Into<String>) -> Self {
        self.explain.push(line.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.parameters.push(ParameterDoc {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_return(mut self, line: impl Into<String>) -> Self {
        self.returns.push(line.into());
        self
    }

    pub fn with_error(mut self, line: impl Into<String>) -> Self {
        self.errors.push(line.into());
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.value.as_str())
    }

    /// Markdown rendering for hover.
    pub fn to_markdown(&self) -> String {
        let mut sections = Vec::new();
        if !self.explain.is_empty() {
            sections.push(self.explain.join("\n"));
        }
        if !self.parameters.is_empty() {
            let lines: Vec<_> = self
                .parameters
                .iter()
                .map(|p| format!("- `{}`: {}", p.name, p.value))
                .collect();
            sections.push(format!("**Parameters**\n{}", lines.join("\n")));
        }
        if !self.returns.is_empty() {
            sections.push(format!("**Returns**\n{}", bullets(&self.returns)));
        }
        if !self.errors.is_empty() {
            sections.push(format!("**Errors**\n{}", bullets(&self.errors)));
        }
        sections.join("\n\n")
    }
}

fn bullets(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Source of module function documentation.
pub trait ModuleDocs {
    /// Documentation of `function` in `module` (without the `.em` suffix).
    fn function_doc(&self, module: &str, function: &str) -> Option<&FunctionDoc>;
}

/// No documentation at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocs;

impl ModuleDocs for NoDocs {
    fn function_doc(&self, _module: &str, _function: &str) -> Option<&FunctionDoc> {
        None
    }
}

/// In-memory documentation store keyed by module and function, ignoring case.
#[derive(Debug, Clone, Default)]
pub struct DocIndex {
    functions: IndexMap<(SmolStr, SmolStr), FunctionDoc>,
}

impl DocIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, module: &str, function: &str, doc: FunctionDoc) {
        self.functions.insert(key(module, function), doc);
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

fn key(module: &str, function: &str) -> (SmolStr, SmolStr) {
    (
        SmolStr::new(module.to_ascii_lowercase()),
        SmolStr::new(function.to_ascii_lowercase()),
    )
}

impl ModuleDocs for DocIndex {
    fn function_doc(&self, module: &str, function: &str) -> Option<&FunctionDoc> {
        self.functions.get(&key(module, function))
    }
}
