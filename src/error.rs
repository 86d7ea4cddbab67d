use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of input")]
    EndOfInput,

    #[error("cannot parse {token:?} as {ty}")]
    Format { token: String, ty: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
