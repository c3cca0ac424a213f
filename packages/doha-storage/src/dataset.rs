use std::{
	path::{Path, PathBuf},
	sync::Arc,
};

use doha_domain::Couplet;

use crate::{DatasetError, Error, Result};

/// Reads the couplet collection from a JSON file.
///
/// Every call re-reads the file; nothing is retained between calls.
#[derive(Clone, Debug)]
pub struct DatasetLoader {
	path: PathBuf,
}
impl DatasetLoader {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub async fn load(&self) -> Result<Vec<Couplet>> {
		let bytes = tokio::fs::read(&self.path).await.map_err(|err| self.unavailable(err))?;
		let couplets: Vec<Couplet> =
			serde_json::from_slice(&bytes).map_err(|err| self.unavailable(err))?;

		tracing::debug!(
			path = %self.path.display(),
			count = couplets.len(),
			"Loaded couplet dataset."
		);

		Ok(couplets)
	}

	fn unavailable(&self, err: impl Into<DatasetError>) -> Error {
		Error::DataUnavailable { path: self.path.clone(), source: err.into() }
	}
}

/// Where a query gets its records from.
#[derive(Clone, Debug)]
pub enum Dataset {
	/// Re-read the file for every query.
	Fresh(DatasetLoader),
	/// Loaded once and shared read-only by every query.
	Cached(Arc<[Couplet]>),
}
impl Dataset {
	pub async fn from_config(cfg: &doha_config::Dataset) -> Result<Self> {
		let loader = DatasetLoader::new(&cfg.path);

		if !cfg.cache {
			return Ok(Self::Fresh(loader));
		}

		let couplets = loader.load().await?;

		tracing::info!(
			path = %loader.path().display(),
			count = couplets.len(),
			"Couplet dataset cached in memory."
		);

		Ok(Self::Cached(couplets.into()))
	}

	pub fn is_cached(&self) -> bool {
		matches!(self, Self::Cached(_))
	}

	pub async fn snapshot(&self) -> Result<Arc<[Couplet]>> {
		match self {
			Self::Fresh(loader) => Ok(loader.load().await?.into()),
			Self::Cached(couplets) => Ok(Arc::clone(couplets)),
		}
	}
}
