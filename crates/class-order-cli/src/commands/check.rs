//! Check command implementation.
//!
//! Resolves configuration, discovers Python files, and runs the
//! ordering engine over each, collecting violations into a
//! [`LintResult`].

use anyhow::{Context, Result};
use class_order_core::{Classifier, Config, LintResult, OrderingValidator, RankTable};
use class_order_py::PythonExtractor;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    strict: bool,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source)?;

    let mut order = config.order.clone();
    if strict {
        order.strict_mode = true;
    }

    let classifier = Classifier::from_config(&order);
    let (table, warnings) = RankTable::build(&order);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let (root, files) = resolve_targets(path, &config, exclude)?;

    tracing::info!("Analyzing {} Python files", files.len());

    let extractor = PythonExtractor::new();
    let validator = OrderingValidator::new(&classifier, &table);
    let mut result = LintResult::new();

    for file_path in &files {
        let source_text = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let rel = file_path
            .strip_prefix(&root)
            .unwrap_or(file_path)
            .to_path_buf();

        let analysis = extractor.analyze(&rel, &source_text);
        result
            .violations
            .extend(validator.validate_unit(&analysis.file_path, &analysis.classes));
        result.files_checked += 1;
    }

    // Sort by file, then line
    result.violations.sort_by(|a, b| {
        a.location
            .file
            .cmp(&b.location.file)
            .then(a.location.line.cmp(&b.location.line))
    });

    super::output::print(&result, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the resolved config, falling back to defaults when none found.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => {
            tracing::debug!("No class-order.toml found, using defaults");
            Ok(Config::default())
        }
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Resolves the analysis root and file list for a target path.
///
/// A file target is linted directly, with its parent directory as the
/// root; a directory target is walked under the configured analyzer
/// root with exclude patterns applied.
fn resolve_targets(
    path: &Path,
    config: &Config,
    mut exclude: Vec<String>,
) -> Result<(PathBuf, Vec<PathBuf>)> {
    if path.is_file() {
        let root = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        return Ok((root, vec![path.to_path_buf()]));
    }

    let root = if config.analyzer.root.is_absolute() {
        config.analyzer.root.clone()
    } else {
        path.join(&config.analyzer.root)
    };

    let mut patterns = config.analyzer.exclude.clone();
    patterns.append(&mut exclude);

    let files = discover_files(&root, &patterns, config.analyzer.respect_gitignore)?;
    Ok((root, files))
}

fn discover_files(
    root: &Path,
    exclude: &[String],
    respect_gitignore: bool,
) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some("py") {
            continue;
        }

        let rel_str = path.strip_prefix(root).unwrap_or(path).to_string_lossy();

        let excluded = exclude.iter().any(|pattern| {
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty() && rel_str.contains(&clean)
        });

        if !excluded {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn discovers_only_python_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("models.py"), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();

        let files = discover_files(tmp.path(), &[], true).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("models.py"));
    }

    #[test]
    fn exclude_patterns_filter_by_substring() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("migrations")).unwrap();
        fs::write(tmp.path().join("migrations").join("0001.py"), "").unwrap();
        fs::write(tmp.path().join("models.py"), "").unwrap();

        let files =
            discover_files(tmp.path(), &["**/migrations/**".to_string()], true).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("models.py"));
    }

    #[test]
    fn file_target_is_linted_directly() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("models.py");
        fs::write(&file, "").unwrap();

        let (root, files) = resolve_targets(&file, &Config::default(), vec![]).unwrap();
        assert_eq!(files, vec![file]);
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn directory_target_walks_the_tree() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("models.py"), "").unwrap();

        let (_, files) = resolve_targets(tmp.path(), &Config::default(), vec![]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("models.py"));
    }

    #[test]
    fn load_config_defaults_when_missing() {
        let config = load_config(&ConfigSource::Default).unwrap();
        assert!(!config.order.strict_mode);
    }

    #[test]
    fn load_config_reads_resolved_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("class-order.toml");
        fs::write(&path, "[order]\nstrict_mode = true\n").unwrap();

        let config = load_config(&ConfigSource::Project(path)).unwrap();
        assert!(config.order.strict_mode);
    }
}
