use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum YoauthError {
    /// Missing required input (flag, env var or config value).
    Validation(String),
    EmptyToken(String),
    Transport(String),
    Http { status: u16, body: String },
    Serialization(String),
    NotFound(PathBuf),
    Io(String),
    Config(String),
}

impl YoauthError {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for YoauthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::EmptyToken(msg) => write!(f, "token is empty: not writing to file ({msg})"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Http { status, body } => write!(f, "http error ({status}): {body}"),
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
            Self::NotFound(path) => write!(f, "does the file ({}) exist? not found", path.display()),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for YoauthError {}

pub type Result<T> = std::result::Result<T, YoauthError>;
