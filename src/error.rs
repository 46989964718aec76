use std::fmt;

/// Comprehensive error types for knock operations
#[derive(Debug)]
pub enum KnockError {
    /// IO error (target file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Both a target file and a positional target were supplied
    ConflictingInput,

    /// Target file contained no usable lines
    NoTargetsFound(String),

    /// HTTP client error (client construction, proxy, etc.)
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),
}

impl fmt::Display for KnockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnockError::Io(err) => write!(f, "IO error: {err}"),
            KnockError::Config(msg) => write!(f, "Configuration error: {msg}"),
            KnockError::ConflictingInput => {
                write!(f, "Configuration error: use either a file or a url, not both")
            }
            KnockError::NoTargetsFound(path) => write!(f, "No targets found in: {path}"),
            KnockError::Http(err) => write!(f, "HTTP error: {err}"),
            KnockError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
        }
    }
}

impl std::error::Error for KnockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KnockError::Io(err) => Some(err),
            KnockError::Http(err) => Some(err),
            KnockError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KnockError {
    fn from(err: std::io::Error) -> Self {
        KnockError::Io(err)
    }
}

impl From<reqwest::Error> for KnockError {
    fn from(err: reqwest::Error) -> Self {
        KnockError::Http(err)
    }
}

impl From<toml::de::Error> for KnockError {
    fn from(err: toml::de::Error) -> Self {
        KnockError::TomlParsing(err)
    }
}

/// Type alias for Results using KnockError
pub type Result<T> = std::result::Result<T, KnockError>;
