#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("duplicated identifier at position {position} (first seen at position {first})")]
    DuplicateIdentifier { position: usize, first: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
