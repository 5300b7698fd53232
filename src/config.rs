//! Analysis options
//!
//! Passed by value into the workspace and from there into every request.

use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// How constants that shadow an earlier constant of the same name are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(rename_all = "camelCase"))]
pub enum ConstantDisplay {
    /// Always the bare identifier.
    #[default]
    Plain,
    /// Prefix shadowing constants with `::`.
    QualifyShadowed,
}

impl ConstantDisplay {
    pub fn display_name(self, identifier: &str, shadows_global: bool) -> String {
        match self {
            ConstantDisplay::QualifyShadowed if shadows_global => format!("::{identifier}"),
            _ => identifier.to_string(),
        }
    }
}

/// A package root, addressed from scripts as `:name:path`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct PackageInfo {
    pub name: String,
    pub dir: PathBuf,
}

impl PackageInfo {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }
}

/// Options for the analysis layer.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct AnalysisConfig {
    /// Append comments found above module function declarations to hover.
    pub show_module_function_comments: bool,
    /// Keep analyzing after the first compile error.
    pub continue_analysis_on_error: bool,
    pub constant_display: ConstantDisplay,
    /// Searched for `include` files after the including file's directory.
    pub include_directory: Option<PathBuf>,
    /// Where `<module>.em` files live.
    pub module_directory: Option<PathBuf>,
    /// Base of `::path` package references.
    pub script_root: Option<PathBuf>,
    pub packages: Vec<PackageInfo>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            show_module_function_comments: false,
            continue_analysis_on_error: true,
            constant_display: ConstantDisplay::Plain,
            include_directory: None,
            module_directory: None,
            script_root: None,
            packages: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    pub fn with_module_function_comments(mut self, show: bool) -> Self {
        self.show_module_function_comments = show;
        self
    }

    pub fn with_constant_display(mut self, display: ConstantDisplay) -> Self {
        self.constant_display = display;
        self
    }

    pub fn with_include_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_directory = Some(dir.into());
        self
    }

    pub fn with_module_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.module_directory = Some(dir.into());
        self
    }

    pub fn with_script_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.script_root = Some(dir.into());
        self
    }

    pub fn with_package(mut self, package: PackageInfo) -> Self {
        self.packages.push(package);
        self
    }

    pub fn package(&self, name: &str) -> Option<&PackageInfo> {
        self.packages
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_display_rule() {
        assert_eq!(ConstantDisplay::Plain.display_name("PI", true), "PI");
        assert_eq!(ConstantDisplay::QualifyShadowed.display_name("PI", true), "::PI");
        assert_eq!(ConstantDisplay::QualifyShadowed.display_name("PI", false), "PI");
    }

    #[test]
    fn test_package_lookup_ignores_case() {
        let config = AnalysisConfig::default().with_package(PackageInfo::new("Spells", "/pkg/spells"));
        assert!(config.package("spells").is_some());
        assert!(config.package("items").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_editor_settings() {
        let config: AnalysisConfig = serde_json::from_str(
            r#"{ "showModuleFunctionComments": true, "constantDisplay": "qualifyShadowed" }"#,
        )
        .unwrap();
        assert!(config.show_module_function_comments);
        assert!(config.continue_analysis_on_error);
        assert_eq!(config.constant_display, ConstantDisplay::QualifyShadowed);
    }
}
