use crate::user;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid age: {0}")]
    InvalidAge(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("duplicated user: {0}")]
    DuplicatedUser(user::Id),
    #[error("user {0} cannot get any older")]
    AgeOverflow(user::Id),
    #[error("unsupported roster format: {0}")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Collection(#[from] trove::Error),
}
