use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Couplet dataset is unavailable at {path:?}: {source}")]
	DataUnavailable { path: PathBuf, source: DatasetError },
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
	#[error(transparent)]
	Io(#[from] std::io::Error),
	#[error(transparent)]
	Parse(#[from] serde_json::Error),
}
