use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
  #[error("missing required element: {0}")]
  MissingElement(String),
  #[error("unknown task status: {0:?}")]
  UnknownStatus(String),
  #[error("unknown filter value: {0:?}")]
  UnknownFilter(String),
  #[error("no task card at index {0}")]
  UnknownCard(usize),
  #[error("no navigation item for target {0:?}")]
  UnknownNavTarget(String),
  #[error("invalid config: {0}")]
  Config(#[from] toml::de::Error)
}

pub type Result<T> =
  std::result::Result<T, BoardError>;
