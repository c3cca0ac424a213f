#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Cannot convert {value} to a boolean.")]
pub struct ConversionError {
	pub value: String,
}
