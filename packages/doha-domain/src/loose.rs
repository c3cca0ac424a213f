//! Loosely typed option values.
//!
//! Query strings deliver every value as text while JSON bodies may carry real booleans and
//! numbers. [`Loose`] accepts all of them, and the helpers here turn a value into the typed form
//! the pipeline works with. Conversion happens once, at the request boundary.

use std::{
	borrow::Cow,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::ConversionError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose {
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(String),
}
impl Loose {
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text(value.into())
	}

	/// The value as plain text, without the quoting [`Display`] adds to strings.
	pub fn as_text(&self) -> Cow<'_, str> {
		match self {
			Self::Text(value) => Cow::Borrowed(value),
			other => Cow::Owned(other.to_string()),
		}
	}
}
impl Display for Loose {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Bool(value) => write!(f, "{value}"),
			Self::Int(value) => write!(f, "{value}"),
			Self::Float(value) => write!(f, "{value}"),
			Self::Text(value) => write!(f, "{value:?}"),
		}
	}
}
impl From<bool> for Loose {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
impl From<i64> for Loose {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}
impl From<&str> for Loose {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

/// Strict boolean normalization.
///
/// Accepts booleans, the numbers `0` and `1`, and the strings `true`, `false`, `1` and `0`
/// (trimmed, case-insensitive). Everything else is a [`ConversionError`].
pub fn to_bool(value: &Loose) -> Result<bool, ConversionError> {
	match value {
		Loose::Bool(value) => Ok(*value),
		Loose::Int(0) => Ok(false),
		Loose::Int(1) => Ok(true),
		Loose::Float(value) if *value == 0.0 => Ok(false),
		Loose::Float(value) if *value == 1.0 => Ok(true),
		Loose::Text(raw) => match raw.trim().to_ascii_lowercase().as_str() {
			"true" | "1" => Ok(true),
			"false" | "0" => Ok(false),
			_ => Err(ConversionError { value: value.to_string() }),
		},
		_ => Err(ConversionError { value: value.to_string() }),
	}
}

/// Strict normalization of an optional value; absence means `false`.
pub fn to_bool_or_false(value: Option<&Loose>) -> Result<bool, ConversionError> {
	value.map(to_bool).transpose().map(Option::unwrap_or_default)
}

/// Permissive boolean normalization.
///
/// Absence yields `default`. Values the strict rule rejects fall back to comparing their text
/// with `true` instead of failing.
pub fn to_bool_lenient(value: Option<&Loose>, default: bool) -> bool {
	let Some(value) = value else {
		return default;
	};

	match to_bool(value) {
		Ok(flag) => flag,
		Err(_) => matches!(value, Loose::Text(raw) if raw == "true"),
	}
}

/// Integer normalization. Returns `None` for anything that is not a number in `i64` range.
///
/// Fractional values truncate toward zero.
pub fn to_int(value: &Loose) -> Option<i64> {
	match value {
		Loose::Int(value) => Some(*value),
		Loose::Float(value) => float_to_int(*value),
		Loose::Text(raw) => {
			let raw = raw.trim();

			raw.parse::<i64>().ok().or_else(|| raw.parse::<f64>().ok().and_then(float_to_int))
		},
		_ => None,
	}
}

fn float_to_int(value: f64) -> Option<i64> {
	let value = value.trunc();

	// `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
	(value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64)
		.then_some(value as i64)
}
