use crate::binding::SignatureBindingMode;
use crate::file_reader;
use crate::file_reader::ReadContentError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ConfigError>;

/// Settings for one binding run, usually read from a `gqlbind.toml`:
///
/// ```toml
/// schema = ["schema"]
/// sources = ["src/models.rs"]
/// strict_signatures = false
///
/// [models]
/// Todo = "crate::models::Todo"
/// DateTime = "chrono::DateTime<chrono::Utc>"
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BindConfig {
    /// Schema type name -> Rust type path.
    pub models: IndexMap<String, String>,

    /// Schema files, or directories walked for them, to load. Entries are
    /// literal paths, not glob patterns.
    pub schema: Vec<PathBuf>,

    /// Rust files whose `impl` blocks supply model method signatures.
    pub sources: Vec<PathBuf>,

    pub strict_signatures: bool,
}
impl BindConfig {
    pub fn binding_mode(&self) -> SignatureBindingMode {
        if self.strict_signatures {
            SignatureBindingMode::Strict
        } else {
            SignatureBindingMode::Lenient
        }
    }

    /// Reads a config file. Relative `schema` and `sources` paths are taken
    /// relative to the directory containing the file.
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| ConfigError::ConfigFileReadError(Box::new(err)))?;
        let config = Self::parse(Some(file_path), content.as_str())?;
        Ok(match file_path.parent() {
            Some(base_dir) => config.relative_to(base_dir),
            None => config,
        })
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Self::parse(None, content)
    }

    fn parse(file_path: Option<&Path>, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| ConfigError::ParseError {
            file: file_path.map(|p| p.to_path_buf()),
            err: err.to_string(),
        })
    }

    fn relative_to(mut self, base_dir: &Path) -> Self {
        let rebase = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        };
        self.schema.iter_mut().for_each(rebase);
        self.sources.iter_mut().for_each(rebase);
        self
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0}")]
    ConfigFileReadError(Box<ReadContentError>),

    #[error("invalid config{}: {err}", file.as_ref().map_or(
        String::new(),
        |path| format!(" in `{}`", path.display()),
    ))]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },
}
