use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub dataset: Dataset,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
	/// Path to the JSON couplet collection. Relative paths are resolved against the directory
	/// holding the config file.
	pub path: PathBuf,
	/// Load the collection once at startup and share it across requests instead of reading the
	/// file on every query.
	#[serde(default)]
	pub cache: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
	#[serde(default = "default_bind_localhost_only")]
	pub bind_localhost_only: bool,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: default_bind_localhost_only() }
	}
}

fn default_bind_localhost_only() -> bool {
	true
}
