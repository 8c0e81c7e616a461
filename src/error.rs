use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfirmError>;

#[derive(Debug, Error)]
pub enum ConfirmError {
    #[error("no program specified")]
    Argument,

    #[error("cannot read confirmation")]
    Input(#[from] io::Error),

    #[error("cannot execute {program}")]
    Execution {
        program: String,
        #[source]
        source: io::Error,
    },
}
