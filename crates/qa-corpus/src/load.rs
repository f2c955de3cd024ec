//! Corpus discovery and loading.
//!
//! Walks a directory tree and reads every matching text file into a
//! [`Corpus`] keyed by file name. Hidden entries and symlinks are skipped,
//! and files are visited in sorted order so document order is reproducible.

use std::{ffi::OsStr, fs, path::Path};

use qa_rank::Corpus;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::CorpusError;

/// Extensions loaded when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["txt"];

/// Options controlling which files become documents.
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    /// File extensions to load, without the leading dot. Matched case-insensitively.
    pub extensions: Vec<String>,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl CorpusOptions {
    /// Checks if a path has one of the configured extensions.
    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// Loads every matching file under `dir` into a corpus.
///
/// Documents are named by file name. When two files in different
/// subdirectories share a name, the later one is keyed by its path relative
/// to `dir` instead. Invalid UTF-8 is replaced rather than rejected.
pub fn load_corpus(dir: &Path, options: &CorpusOptions) -> Result<Corpus, CorpusError> {
    if !dir.exists() {
        return Err(CorpusError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(CorpusError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut corpus = Corpus::new();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                warn!(error = %err, "skipping unreadable corpus entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !options.matches(entry.path()) {
            continue;
        }

        let path = entry.path();
        let text = read_text(path)?;
        let name = document_name(dir, path, &corpus);
        debug!(document = %name, bytes = text.len(), "loaded document");
        corpus.insert(name, text);
    }

    debug!(documents = corpus.len(), dir = %dir.display(), "corpus loaded");
    Ok(corpus)
}

/// Reads a file as UTF-8, replacing invalid sequences.
fn read_text(path: &Path) -> Result<String, CorpusError> {
    let bytes = fs::read(path).map_err(|source| CorpusError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(path = %path.display(), "document is not valid UTF-8, replacing invalid bytes");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Picks the document name for `path`: its file name unless already taken.
fn document_name(root: &Path, path: &Path, corpus: &Corpus) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !corpus.contains(&file_name) {
        return file_name;
    }

    let relative = path.strip_prefix(root).unwrap_or(path);
    let name = relative.to_string_lossy().into_owned();
    warn!(
        file = %file_name,
        using = %name,
        "duplicate document name, keying by relative path"
    );
    name
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
