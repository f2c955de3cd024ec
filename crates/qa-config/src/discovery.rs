//! Locating `.qa.toml` files for a working directory.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// Name of qa config files, both per-directory and global.
pub const CONFIG_FILENAME: &str = ".qa.toml";

/// Lists the `.qa.toml` files that apply to `cwd`, highest precedence first.
///
/// Every ancestor of `cwd` is checked, nearest first. A file with `root = true` ends the
/// search and suppresses `~/.qa.toml`; otherwise the global file, when present, comes last.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for candidate in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        found.push(candidate);
        if stop {
            return found;
        }
    }

    let global = global_config_path().filter(|path| path.is_file());
    if let Some(global) = global
        && !found.contains(&global)
    {
        found.push(global);
    }
    found
}

/// Location of the per-user config, `~/.qa.toml`. `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// True when `path` is `~/.qa.toml`.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
