use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("unknown canonical unit '{0}'")]
    UnknownUnit(String),

    #[error("unknown canonical prefix '{0}'")]
    UnknownPrefix(String),

    #[error("malformed unit atom '{0}': expected '<name>'")]
    MalformedAtom(String),
}
