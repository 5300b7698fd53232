//! In-memory scope tree.
//!
//! A flat [`ScopeTree`] for hosts that precompute their declarations and
//! for tests. Locals are visible inside a range; everything else is global.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{Position, Range};

use super::decl::{
    ConstDeclaration, ModuleFunctionDeclaration, UserFunction, UserFunctionKind, Variable,
    names_equal, starts_with_ignore_case,
};
use super::scope_tree::{ScopeName, ScopeQuery, ScopeTree};

fn key(name: &str) -> SmolStr {
    SmolStr::new(name.to_ascii_lowercase())
}

#[derive(Debug, Clone)]
struct LocalVariable {
    variable: Variable,
    visible: Range,
}

/// Declarations of one compiled document and everything it pulled in.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    constants: IndexMap<SmolStr, ConstDeclaration>,
    globals: IndexMap<SmolStr, Variable>,
    locals: Vec<LocalVariable>,
    user_functions: Vec<UserFunction>,
    /// Module name (lowercased) to its functions.
    modules: IndexMap<SmolStr, (SmolStr, Vec<ModuleFunctionDeclaration>)>,
    classes: IndexMap<SmolStr, SmolStr>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a constant. A later constant with the same name replaces the
    /// earlier one and is marked as shadowing it.
    pub fn add_constant(&mut self, mut constant: ConstDeclaration) {
        let key = key(&constant.identifier);
        if self.constants.contains_key(&key) {
            constant.shadows_global = true;
        }
        self.constants.insert(key, constant);
    }

    pub fn add_global(&mut self, variable: Variable) {
        self.globals.insert(key(&variable.name), variable);
    }

    /// Insert a variable visible only inside `visible`.
    pub fn add_local(&mut self, variable: Variable, visible: Range) {
        self.locals.push(LocalVariable { variable, visible });
    }

    pub fn add_user_function(&mut self, function: UserFunction) {
        if let Some(scope) = &function.scope {
            self.add_class(scope.clone());
        }
        self.user_functions.push(function);
    }

    pub fn add_module_function(&mut self, function: ModuleFunctionDeclaration) {
        let module = self.add_module(function.module.clone());
        module.push(function);
    }

    /// Register a module, even one without functions.
    pub fn add_module(&mut self, name: impl Into<SmolStr>) -> &mut Vec<ModuleFunctionDeclaration> {
        let name = name.into();
        &mut self
            .modules
            .entry(key(&name))
            .or_insert_with(|| (name, Vec::new()))
            .1
    }

    pub fn add_class(&mut self, name: impl Into<SmolStr>) {
        let name = name.into();
        self.classes.entry(key(&name)).or_insert(name);
    }

    fn module_functions(&self) -> impl Iterator<Item = &ModuleFunctionDeclaration> {
        self.modules.values().flat_map(|(_, functions)| functions.iter())
    }

    fn visible_locals(&self, position: Position) -> impl Iterator<Item = &LocalVariable> {
        self.locals
            .iter()
            .filter(move |local| local.visible.contains_inclusive(position))
    }

    fn find_in_scope(&self, scope: Option<&str>, name: &str) -> Option<&UserFunction> {
        self.user_functions.iter().find(|f| {
            f.kind != UserFunctionKind::Expression
                && names_equal(&f.name, name)
                && match (scope, &f.scope) {
                    (Some(wanted), Some(owner)) => names_equal(wanted, owner),
                    (None, None) => true,
                    _ => false,
                }
        })
    }

    fn find_function_expression(&self, name: &str) -> Option<&UserFunction> {
        self.user_functions
            .iter()
            .find(|f| f.kind == UserFunctionKind::Expression && f.name == name)
    }
}

impl ScopeTree for SymbolTable {
    fn find_variable(&self, name: &str, position: Position) -> Option<&Variable> {
        if let Some(global) = name.strip_prefix("::") {
            return self.globals.get(&key(global));
        }
        self.visible_locals(position)
            .filter(|local| names_equal(&local.variable.name, name))
            .max_by_key(|local| local.visible.start)
            .map(|local| &local.variable)
            .or_else(|| self.globals.get(&key(name)))
    }

    fn find_constant(&self, name: &str) -> Option<&ConstDeclaration> {
        self.constants.get(&key(name))
    }

    fn find_user_function(&self, query: &ScopeQuery) -> Option<&UserFunction> {
        let name = query.prefix.as_str();
        match &query.prefix_scope {
            ScopeName::Named(scope) => self.find_in_scope(Some(scope.as_str()), name),
            ScopeName::Global => self.find_in_scope(None, name),
            ScopeName::None => {
                let in_class = (!query.calling_scope.is_empty())
                    .then(|| self.find_in_scope(Some(query.calling_scope.as_str()), name))
                    .flatten();
                in_class
                    .or_else(|| self.find_in_scope(None, name))
                    // `Class()` calls the constructor `Class::Class`.
                    .or_else(|| self.find_in_scope(Some(name), name))
                    .or_else(|| self.find_function_expression(name))
            }
        }
    }

    fn find_module_function(&self, query: &ScopeQuery) -> Option<&ModuleFunctionDeclaration> {
        let name = query.prefix.as_str();
        match &query.prefix_scope {
            ScopeName::Named(module) => self
                .modules
                .get(&key(module))
                .and_then(|(_, functions)| functions.iter().find(|f| names_equal(&f.name, name))),
            ScopeName::Global | ScopeName::None => {
                self.module_functions().find(|f| names_equal(&f.name, name))
            }
        }
    }

    fn list_constants(&self, query: &ScopeQuery) -> Vec<&ConstDeclaration> {
        if query.prefix_scope.as_named().is_some() {
            return Vec::new();
        }
        self.constants
            .values()
            .filter(|c| starts_with_ignore_case(&c.identifier, &query.prefix))
            .collect()
    }

    fn list_variables(&self, query: &ScopeQuery, position: Position) -> Vec<&Variable> {
        match &query.prefix_scope {
            ScopeName::Named(scope) => {
                let qualified = format!("{scope}::{}", query.prefix);
                self.globals
                    .values()
                    .filter(|v| starts_with_ignore_case(&v.name, &qualified))
                    .collect()
            }
            ScopeName::Global => self
                .globals
                .values()
                .filter(|v| !v.name.contains("::"))
                .filter(|v| starts_with_ignore_case(&v.name, &query.prefix))
                .collect(),
            ScopeName::None => {
                let locals = self
                    .visible_locals(position)
                    .map(|local| &local.variable)
                    .filter(|v| starts_with_ignore_case(&v.name, &query.prefix));
                let globals = self
                    .globals
                    .values()
                    .filter(|v| !v.name.contains("::"))
                    .filter(|v| starts_with_ignore_case(&v.name, &query.prefix));
                locals.chain(globals).collect()
            }
        }
    }

    fn list_user_functions(&self, query: &ScopeQuery, _position: Position) -> Vec<&UserFunction> {
        self.user_functions
            .iter()
            .filter(|f| f.kind != UserFunctionKind::Expression)
            .filter(|f| starts_with_ignore_case(&f.name, &query.prefix))
            .filter(|f| match (&query.prefix_scope, &f.scope) {
                (ScopeName::Named(wanted), Some(owner)) => names_equal(wanted, owner),
                (ScopeName::Named(_), None) => false,
                (ScopeName::Global, owner) => owner.is_none(),
                (ScopeName::None, None) => true,
                (ScopeName::None, Some(owner)) => {
                    names_equal(owner, &query.calling_scope)
                        || (f.kind == UserFunctionKind::Constructor && names_equal(owner, &f.name))
                }
            })
            .collect()
    }

    fn list_module_functions(&self, query: &ScopeQuery) -> Vec<&ModuleFunctionDeclaration> {
        let matches = |f: &&ModuleFunctionDeclaration| starts_with_ignore_case(&f.name, &query.prefix);
        match &query.prefix_scope {
            ScopeName::Named(module) => self
                .modules
                .get(&key(module))
                .map(|(_, functions)| functions.iter().filter(matches).collect())
                .unwrap_or_default(),
            ScopeName::Global | ScopeName::None => self.module_functions().filter(matches).collect(),
        }
    }

    fn list_scopes(&self, query: &ScopeQuery) -> Vec<SmolStr> {
        if query.prefix_scope != ScopeName::None {
            return Vec::new();
        }
        self.classes
            .values()
            .filter(|name| starts_with_ignore_case(name, &query.prefix))
            .cloned()
            .collect()
    }

    fn list_modules(&self, query: &ScopeQuery) -> Vec<SmolStr> {
        if query.prefix_scope != ScopeName::None {
            return Vec::new();
        }
        self.modules
            .values()
            .map(|(name, _)| name)
            .filter(|name| starts_with_ignore_case(name, &query.prefix))
            .cloned()
            .collect()
    }

    fn list_methods(&self, class_name: &str, prefix: &str) -> Vec<&UserFunction> {
        self.user_functions
            .iter()
            .filter(|f| f.kind == UserFunctionKind::Method)
            .filter(|f| f.scope.as_deref().is_some_and(|s| names_equal(s, class_name)))
            .filter(|f| starts_with_ignore_case(&f.name, prefix))
            .collect()
    }
}
