//! Resolution of `include` and `use` targets to files on disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::AnalysisConfig;

/// Resolve `include name;` written in `current_file`.
///
/// `:pkg:path` looks in the package directory, then its `include/`
/// subdirectory; `::path` is relative to the script root. A plain name is
/// looked up next to the including file, then in the include directory.
pub fn resolve_include(name: &str, current_file: &Path, config: &AnalysisConfig) -> Option<PathBuf> {
    let file_name = with_extension(name, "inc");

    let candidates: Vec<PathBuf> = match file_name.strip_prefix(':') {
        Some(reference) => {
            let (package, path) = reference.split_once(':')?;
            if package.is_empty() {
                vec![config.script_root.as_ref()?.join(path)]
            } else {
                let dir = &config.package(package)?.dir;
                vec![dir.join(path), dir.join("include").join(path)]
            }
        }
        None => {
            let mut candidates = Vec::new();
            if let Some(dir) = current_file.parent() {
                candidates.push(dir.join(&file_name));
            }
            if let Some(dir) = &config.include_directory {
                candidates.push(dir.join(&file_name));
            }
            candidates
        }
    };

    let found = first_existing(candidates);
    debug!("include '{}' -> {:?}", name, found);
    found
}

/// Resolve `use name;` to `<module_directory>/<name>.em`.
pub fn resolve_module(name: &str, config: &AnalysisConfig) -> Option<PathBuf> {
    let dir = config.module_directory.as_ref()?;
    let found = first_existing([dir.join(with_extension(name, "em"))]);
    debug!("module '{}' -> {:?}", name, found);
    found
}

fn with_extension(name: &str, extension: &str) -> String {
    let has_extension = Path::new(name)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(extension));
    if has_extension {
        name.to_string()
    } else {
        format!("{name}.{extension}")
    }
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates
        .into_iter()
        .find(|path| path.is_file())
        .map(|path| path.canonicalize().unwrap_or(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackageInfo;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, relative: &str) -> PathBuf {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
        path.canonicalize().unwrap()
    }

    #[test]
    fn test_include_prefers_including_directory() {
        let temp = TempDir::new().unwrap();
        let local = touch(temp.path(), "scripts/util.inc");
        touch(temp.path(), "include/util.inc");
        let config = AnalysisConfig::default().with_include_directory(temp.path().join("include"));

        let found = resolve_include("util", &temp.path().join("scripts/main.src"), &config);
        assert_eq!(found, Some(local));
    }

    #[test]
    fn test_include_falls_back_to_include_directory() {
        let temp = TempDir::new().unwrap();
        let shared = touch(temp.path(), "include/client.inc");
        let config = AnalysisConfig::default().with_include_directory(temp.path().join("include"));

        let found = resolve_include("client", &temp.path().join("scripts/main.src"), &config);
        assert_eq!(found, Some(shared));
    }

    #[test]
    fn test_package_reference_forms() {
        let temp = TempDir::new().unwrap();
        let nested = touch(temp.path(), "pkg/spells/include/cast.inc");
        let rooted = touch(temp.path(), "scripts/include/common.inc");
        let config = AnalysisConfig::default()
            .with_package(PackageInfo::new("spells", temp.path().join("pkg/spells")))
            .with_script_root(temp.path().join("scripts"));
        let current = temp.path().join("scripts/main.src");

        assert_eq!(resolve_include(":spells:cast", &current, &config), Some(nested));
        assert_eq!(resolve_include("::include/common", &current, &config), Some(rooted));
        assert_eq!(resolve_include(":unknown:cast", &current, &config), None);
    }

    #[test]
    fn test_module_resolution() {
        let temp = TempDir::new().unwrap();
        let module = touch(temp.path(), "modules/uo.em");
        let config = AnalysisConfig::default().with_module_directory(temp.path().join("modules"));

        assert_eq!(resolve_module("uo", &config), Some(module));
        assert_eq!(resolve_module("os", &config), None);
        assert_eq!(resolve_module("uo", &AnalysisConfig::default()), None);
    }
}
