use thiserror::Error;

#[derive(Debug, Error)]
pub enum RechoError {
    #[error("missing required argument <TEXT>")]
    MissingText,

    #[error("unexpected argument '{0}'")]
    UnknownArgument(String),

    #[error("{0}")]
    InvalidArgs(String),
}

impl RechoError {
    // Usage errors follow the argparse convention: exit status 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            RechoError::MissingText
            | RechoError::UnknownArgument(_)
            | RechoError::InvalidArgs(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, RechoError>;
