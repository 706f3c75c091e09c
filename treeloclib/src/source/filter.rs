//! Directory pruning and file inclusion rules.
//!
//! Both decisions are ordered chains of named rules. Directory rules only
//! ever prune; file rules either reject the file, accept it outright (the
//! explicit extension allow-list), or pass it on to the next rule. A file
//! that survives every rule is counted.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use super::classify::is_likely_text;

/// Directory names skipped unless the user removes them.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "vendor",
    "dist",
    "build",
    "target",
];

/// Lock and manifest files never counted by the default rules.
/// Compared against the lower-cased file name.
pub const DEFAULT_SKIP_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "bun.lockb",
    "cargo.lock",
    "cargo.toml",
    "go.sum",
    "poetry.lock",
    "pipfile.lock",
    "composer.lock",
    "gemfile.lock",
];

/// Extension of native executables, never counted by the default rules.
pub const EXECUTABLE_EXTENSION: &str = ".exe";

/// Leading character of hidden files and directories.
pub const HIDDEN_MARKER: char = '.';

/// Filter configuration for a single scan.
///
/// `FilterConfig::new()` starts from [`DEFAULT_SKIP_DIRS`]; the builder
/// methods add to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterConfig {
    /// Directory names to prune (exact, case-sensitive)
    pub skip_dirs: BTreeSet<String>,
    /// Normalized extensions (lower-case, leading dot) to count exclusively
    pub count_extensions: BTreeSet<String>,
    /// Whether hidden files and directories are visited
    pub include_hidden: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            count_extensions: BTreeSet::new(),
            include_hidden: false,
        }
    }
}

impl FilterConfig {
    /// Create a filter with the default skip directories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory name to skip. Blank names are ignored.
    pub fn skip_dir(mut self, name: &str) -> Self {
        let name = name.trim();
        if !name.is_empty() {
            self.skip_dirs.insert(name.to_string());
        }
        self
    }

    /// Add several directory names to skip.
    pub fn skip_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self = self.skip_dir(name.as_ref());
        }
        self
    }

    /// Add an extension to the allow-list. Accepts `go`, `.go` or ` GO `.
    pub fn count_extension(mut self, ext: &str) -> Self {
        if let Some(ext) = normalize_extension(ext) {
            self.count_extensions.insert(ext);
        }
        self
    }

    /// Add several extensions to the allow-list.
    pub fn count_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in exts {
            self = self.count_extension(ext.as_ref());
        }
        self
    }

    /// Set whether hidden entries are visited.
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Whether an explicit extension allow-list is in effect.
    pub fn has_extension_allow_list(&self) -> bool {
        !self.count_extensions.is_empty()
    }

    /// Return the first directory rule that prunes `name`, if any.
    ///
    /// The scan root is never pruned.
    pub fn dir_decision(&self, name: &str, is_root: bool) -> Option<DirRule> {
        if is_root {
            return None;
        }
        DIR_RULES
            .iter()
            .copied()
            .find(|rule| rule.prunes(name, self))
    }

    /// Whether the scanner should descend into a directory.
    pub fn should_descend(&self, name: &str, is_root: bool) -> bool {
        self.dir_decision(name, is_root).is_none()
    }

    /// Run the file rule chain against a file.
    pub fn file_decision(&self, path: &Path, is_regular: bool) -> FileDecision {
        let candidate = FileCandidate::new(path, is_regular);
        for rule in FILE_RULES {
            match rule.evaluate(&candidate, self) {
                RuleOutcome::Reject => return FileDecision::Skip(*rule),
                RuleOutcome::Accept => return FileDecision::Count,
                RuleOutcome::Continue => {}
            }
        }
        FileDecision::Count
    }

    /// Whether a file should be counted.
    pub fn accepts_file(&self, path: &Path, is_regular: bool) -> bool {
        self.file_decision(path, is_regular) == FileDecision::Count
    }
}

/// Normalize a user-supplied extension to lower-case with a leading dot.
///
/// Returns `None` for blank input.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim().to_lowercase();
    if ext.is_empty() {
        return None;
    }
    if ext.starts_with('.') {
        Some(ext)
    } else {
        Some(format!(".{}", ext))
    }
}

/// Lower-cased extension of a file name, including the leading dot.
///
/// The extension starts at the last `.` of the name, so `.bashrc` has the
/// extension `.bashrc` and `notes.` has the extension `.`.
pub fn file_extension(name: &str) -> Option<String> {
    name.rfind('.').map(|idx| name[idx..].to_lowercase())
}

/// Extension of the final component of a path.
pub fn path_extension(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| file_extension(&name.to_string_lossy()))
}

fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Rules that prune a directory, in evaluation order.
pub const DIR_RULES: &[DirRule] = &[DirRule::SkipListed, DirRule::Hidden];

/// A named directory pruning rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirRule {
    /// Name is in the skip set
    SkipListed,
    /// Hidden directory while hidden entries are excluded
    Hidden,
}

impl DirRule {
    /// Short rule name for logs
    pub fn name(&self) -> &'static str {
        match self {
            DirRule::SkipListed => "skip-listed",
            DirRule::Hidden => "hidden",
        }
    }

    fn prunes(&self, name: &str, filter: &FilterConfig) -> bool {
        match self {
            DirRule::SkipListed => filter.skip_dirs.contains(name),
            DirRule::Hidden => !filter.include_hidden && is_hidden(name),
        }
    }
}

/// Rules that decide whether a file is counted, in evaluation order.
pub const FILE_RULES: &[FileRule] = &[
    FileRule::NotRegular,
    FileRule::Hidden,
    FileRule::ExtensionAllowList,
    FileRule::DefaultSkipFile,
    FileRule::MissingExtension,
    FileRule::Executable,
    FileRule::Binary,
];

/// A named file inclusion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRule {
    /// Symlinks, devices, sockets and other non-regular files
    NotRegular,
    /// Hidden file while hidden entries are excluded
    Hidden,
    /// Explicit allow-list; decides alone when configured
    ExtensionAllowList,
    /// Lock and manifest files from [`DEFAULT_SKIP_FILES`]
    DefaultSkipFile,
    /// File name without an extension
    MissingExtension,
    /// Native executable
    Executable,
    /// Content sniffed as binary
    Binary,
}

/// Outcome of a single file rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleOutcome {
    Accept,
    Reject,
    Continue,
}

/// Final decision for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDecision {
    /// Count the file
    Count,
    /// Skip the file; carries the rule that rejected it
    Skip(FileRule),
}

struct FileCandidate<'a> {
    path: &'a Path,
    name: String,
    extension: Option<String>,
    is_regular: bool,
}

impl<'a> FileCandidate<'a> {
    fn new(path: &'a Path, is_regular: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = file_extension(&name);
        Self {
            path,
            name,
            extension,
            is_regular,
        }
    }
}

impl FileRule {
    /// Short rule name for logs
    pub fn name(&self) -> &'static str {
        match self {
            FileRule::NotRegular => "not-regular",
            FileRule::Hidden => "hidden",
            FileRule::ExtensionAllowList => "extension-allow-list",
            FileRule::DefaultSkipFile => "default-skip-file",
            FileRule::MissingExtension => "missing-extension",
            FileRule::Executable => "executable",
            FileRule::Binary => "binary",
        }
    }

    fn evaluate(&self, file: &FileCandidate<'_>, filter: &FilterConfig) -> RuleOutcome {
        let reject_if = |cond: bool| {
            if cond {
                RuleOutcome::Reject
            } else {
                RuleOutcome::Continue
            }
        };

        match self {
            FileRule::NotRegular => reject_if(!file.is_regular),
            FileRule::Hidden => reject_if(!filter.include_hidden && is_hidden(&file.name)),
            FileRule::ExtensionAllowList => {
                if !filter.has_extension_allow_list() {
                    return RuleOutcome::Continue;
                }
                match &file.extension {
                    Some(ext) if filter.count_extensions.contains(ext) => RuleOutcome::Accept,
                    _ => RuleOutcome::Reject,
                }
            }
            FileRule::DefaultSkipFile => {
                let lower = file.name.to_lowercase();
                reject_if(DEFAULT_SKIP_FILES.contains(&lower.as_str()))
            }
            FileRule::MissingExtension => reject_if(file.extension.is_none()),
            FileRule::Executable => {
                reject_if(file.extension.as_deref() == Some(EXECUTABLE_EXTENSION))
            }
            FileRule::Binary => reject_if(!is_likely_text(file.path)),
        }
    }
}
