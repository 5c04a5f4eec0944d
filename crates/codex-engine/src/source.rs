use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Dataset location probed when nothing explicit is configured.
pub const DEFAULT_DATASET_PATH: &str = "Heaven-and-Earth-main/data/martial_souls.json";

/// Where the loaded dataset came from, for diagnostic display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum SourceLocation {
    Resolved(PathBuf),
    #[default]
    Unavailable,
}

impl SourceLocation {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SourceLocation::Resolved(path) => Some(path),
            SourceLocation::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SourceLocation::Resolved(_))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Resolved(path) => write!(f, "{}", path.display()),
            SourceLocation::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// Decides which file a default load reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceResolver {
    /// A configured path, used as-is even if missing.
    Explicit(PathBuf),
    /// `relative` under the working directory, then under the executable's
    /// directory.
    Probe {
        relative: PathBuf,
        working_dir: Option<PathBuf>,
        base_dir: Option<PathBuf>,
    },
}

impl Default for SourceResolver {
    fn default() -> Self {
        Self::probe_from_environment()
    }
}

impl SourceResolver {
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        SourceResolver::Explicit(path.into())
    }

    /// Probes the default dataset path from the current directory and the
    /// directory holding the running binary.
    pub fn probe_from_environment() -> Self {
        let base_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        SourceResolver::Probe {
            relative: PathBuf::from(DEFAULT_DATASET_PATH),
            working_dir: std::env::current_dir().ok(),
            base_dir,
        }
    }

    /// Candidate paths in probing order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        match self {
            SourceResolver::Explicit(path) => vec![path.clone()],
            SourceResolver::Probe {
                relative,
                working_dir,
                base_dir,
            } => {
                let mut candidates = vec![match working_dir {
                    Some(dir) => dir.join(relative),
                    None => relative.clone(),
                }];
                if let Some(base) = base_dir {
                    candidates.push(base.join(relative));
                }
                candidates
            }
        }
    }

    /// The path a load should read, or `None` when probing finds nothing.
    pub fn resolve(&self) -> Option<PathBuf> {
        match self {
            SourceResolver::Explicit(path) => Some(path.clone()),
            SourceResolver::Probe { .. } => self
                .candidates()
                .into_iter()
                .find(|candidate| candidate.exists()),
        }
    }

    pub fn describe(&self) -> String {
        self.candidates()
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
