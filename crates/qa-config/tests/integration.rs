//! End-to-end config loading: discovery, parsing, merging and stopword assembly.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use qa_config::{CONFIG_FILENAME, Config, ConfigError, ConfigWarning};

/// A throwaway directory tree standing in for a project and its parents.
struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes `content` to `rel`, creating parent directories.
    fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_single_config() {
    let sandbox = Sandbox::new();
    let config_path = sandbox.write(
        CONFIG_FILENAME,
        r#"
root = true

[retrieval]
file_matches = 2
sentence_matches = 3

[corpus]
extensions = ["txt", "text"]
"#,
    );

    let config = Config::load(sandbox.path()).unwrap();

    assert_eq!(config.retrieval.file_matches, 2);
    assert_eq!(config.retrieval.sentence_matches, 3);
    assert_eq!(config.corpus.extensions, vec!["txt", "text"]);
    assert_eq!(config.sources, vec![config_path]);
    assert_eq!(config.limits().files.get(), 2);
    assert!(config.validate().is_empty());
}

#[test]
fn test_nested_config_overrides_parent() {
    let sandbox = Sandbox::new();
    sandbox.write(
        CONFIG_FILENAME,
        "root = true\n[retrieval]\nfile_matches = 5\nsentence_matches = 5\n",
    );
    sandbox.write(
        &format!("project/{CONFIG_FILENAME}"),
        "[retrieval]\nsentence_matches = 2\n",
    );
    let cwd = sandbox.mkdir("project/src");

    let config = Config::load(&cwd).unwrap();

    assert_eq!(config.retrieval.file_matches, 5);
    assert_eq!(config.retrieval.sentence_matches, 2);
    assert_eq!(config.sources.len(), 2);
}

#[test]
fn test_root_config_hides_parents() {
    let sandbox = Sandbox::new();
    sandbox.write(CONFIG_FILENAME, "[retrieval]\nfile_matches = 7\n");
    sandbox.write(&format!("project/{CONFIG_FILENAME}"), "root = true\n");
    let cwd = sandbox.mkdir("project");

    let config = Config::load(&cwd).unwrap();

    assert_eq!(config.retrieval.file_matches, 1);
    assert_eq!(config.sources.len(), 1);
}

#[test]
fn test_stopword_file_resolves_relative_to_config() {
    let sandbox = Sandbox::new();
    sandbox.write("lists/stop.txt", "cat\ndog\n");
    sandbox.write(
        CONFIG_FILENAME,
        "root = true\n[stopwords]\nfile = \"lists/stop.txt\"\nextra = [\"fish\"]\n",
    );
    let cwd = sandbox.mkdir("nested/deeper");

    let config = Config::load(&cwd).unwrap();
    let stopwords = config.stopwords().unwrap();

    assert_eq!(stopwords.len(), 3);
    assert!(stopwords.contains("cat"));
    assert!(stopwords.contains("fish"));
    assert!(!stopwords.contains("the"));
}

#[test]
fn test_language_switch() {
    let sandbox = Sandbox::new();
    sandbox.write(
        CONFIG_FILENAME,
        "root = true\n[stopwords]\nlanguage = \"french\"\n",
    );

    let config = Config::load(sandbox.path()).unwrap();
    let stopwords = config.stopwords().unwrap();

    assert!(stopwords.contains("le"));
}

#[test]
fn test_warnings_for_questionable_values() {
    let sandbox = Sandbox::new();
    sandbox.write(
        CONFIG_FILENAME,
        r#"
root = true

[retrieval]
file_matches = 0

[corpus]
extensions = []

[stopwords]
language = "klingon"
"#,
    );

    let config = Config::load(sandbox.path()).unwrap();
    let warnings = config.validate();

    assert_eq!(
        warnings,
        vec![
            ConfigWarning::ZeroCount {
                setting: "retrieval.file_matches"
            },
            ConfigWarning::UnknownLanguage {
                language: "klingon".into()
            },
            ConfigWarning::NoExtensions,
        ]
    );
    assert_eq!(config.limits().files.get(), 1);
}

#[test]
fn test_invalid_toml_is_error() {
    let sandbox = Sandbox::new();
    sandbox.write(CONFIG_FILENAME, "root = true\n[retrieval\n");

    let result = Config::load(sandbox.path());

    assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
}
