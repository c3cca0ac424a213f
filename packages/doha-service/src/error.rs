pub type ServiceResult<T, E = ServiceError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Conversion error: {message}")]
	Conversion { message: String },
	#[error("{message}")]
	DataUnavailable { message: String },
	#[error("Collation error: {message}")]
	Collation { message: String },
}
impl From<doha_storage::Error> for ServiceError {
	fn from(err: doha_storage::Error) -> Self {
		Self::DataUnavailable { message: err.to_string() }
	}
}
