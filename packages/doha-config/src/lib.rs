mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Dataset, Security, Service};

use std::{fs, net::SocketAddr, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg, path.parent());

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::Validation {
			message: format!(
				"service.http_bind must be a socket address, got '{}'.",
				cfg.service.http_bind
			),
		});
	}
	if cfg.service.log_level.is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.dataset.path.as_os_str().is_empty() {
		return Err(Error::Validation { message: "dataset.path must be non-empty.".to_string() });
	}

	Ok(())
}

fn normalize(cfg: &mut Config, base_dir: Option<&Path>) {
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
	cfg.service.log_level = cfg.service.log_level.trim().to_string();

	if let Some(base_dir) = base_dir
		&& !cfg.dataset.path.as_os_str().is_empty()
		&& cfg.dataset.path.is_relative()
	{
		cfg.dataset.path = base_dir.join(&cfg.dataset.path);
	}
}
