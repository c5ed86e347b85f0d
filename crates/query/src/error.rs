use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Indexer error: {0}")]
    Indexer(#[from] bee_indexer::IndexerError),

    #[error("Index load error: {0}")]
    Load(#[from] bee_indexer::LoadError),
}
