use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Loose, loose};

/// Record identifier. Datasets carry either integers or numeric strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoupletId {
	Number(i64),
	Text(String),
}
impl CoupletId {
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(value) => Some(*value as f64),
			Self::Text(raw) => raw.trim().parse::<f64>().ok().filter(|value| value.is_finite()),
		}
	}
}
impl Display for CoupletId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Number(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}
impl From<i64> for CoupletId {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}
impl From<&str> for CoupletId {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
	pub slug: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub usage_count: u64,
}
impl Tag {
	/// Case-insensitive slug comparison against an already lowercased slug.
	pub fn matches_slug(&self, lowered: &str) -> bool {
		self.slug.trim().to_lowercase() == lowered
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Couplet {
	pub id: CoupletId,
	#[serde(default)]
	pub slug: String,
	#[serde(default)]
	pub unique_slug: String,
	#[serde(default)]
	pub couplet_hindi: String,
	#[serde(default)]
	pub couplet_english: String,
	#[serde(default)]
	pub translation_hindi: String,
	#[serde(default)]
	pub translation_english: String,
	#[serde(default)]
	pub explanation_hindi: String,
	#[serde(default)]
	pub explanation_english: String,
	#[serde(default, deserialize_with = "deserialize_tags")]
	pub tags: Vec<Tag>,
	#[serde(default, deserialize_with = "deserialize_popular")]
	pub popular: bool,
}
impl Couplet {
	/// Looks up a field by its serialized name for generic ordering.
	pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
		let value = match name {
			"id" => match &self.id {
				CoupletId::Number(value) => FieldValue::Number(*value as f64),
				CoupletId::Text(value) => FieldValue::Text(value),
			},
			"slug" => FieldValue::Text(&self.slug),
			"unique_slug" => FieldValue::Text(&self.unique_slug),
			"couplet_hindi" => FieldValue::Text(&self.couplet_hindi),
			"couplet_english" => FieldValue::Text(&self.couplet_english),
			"translation_hindi" => FieldValue::Text(&self.translation_hindi),
			"translation_english" => FieldValue::Text(&self.translation_english),
			"explanation_hindi" => FieldValue::Text(&self.explanation_hindi),
			"explanation_english" => FieldValue::Text(&self.explanation_english),
			"popular" => FieldValue::Bool(self.popular),
			_ => return None,
		};

		Some(value)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
	Text(&'a str),
	Number(f64),
	Bool(bool),
}
impl FieldValue<'_> {
	/// Plain less-than/greater-than ordering. Values of different kinds, and numbers that do not
	/// order, compare equal.
	pub fn compare(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Text(left), Self::Text(right)) => left.cmp(right),
			(Self::Number(left), Self::Number(right)) =>
				left.partial_cmp(right).unwrap_or(Ordering::Equal),
			(Self::Bool(left), Self::Bool(right)) => left.cmp(right),
			_ => Ordering::Equal,
		}
	}
}

fn deserialize_popular<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Loose>::deserialize(deserializer)?;

	loose::to_bool_or_false(value.as_ref()).map_err(serde::de::Error::custom)
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<Vec<Tag>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use super::{Couplet, CoupletId, FieldValue};

	#[test]
	fn deserializes_numeric_and_text_ids() {
		let numeric: CoupletId = serde_json::from_str("7").expect("Failed to parse numeric id.");
		let text: CoupletId = serde_json::from_str("\"12\"").expect("Failed to parse text id.");

		assert_eq!(numeric, CoupletId::Number(7));
		assert_eq!(text.as_number(), Some(12.0));
		assert_eq!(CoupletId::from("abc").as_number(), None);
	}

	#[test]
	fn popular_accepts_loose_representations() {
		for (raw, expected) in
			[("true", true), ("\"1\"", true), ("0", false), ("\" False \"", false), ("null", false)]
		{
			let json = format!(r#"{{"id": 1, "popular": {raw}}}"#);
			let couplet: Couplet = serde_json::from_str(&json).expect("Failed to parse couplet.");

			assert_eq!(couplet.popular, expected, "popular = {raw}");
		}
	}

	#[test]
	fn popular_rejects_unknown_tokens() {
		let result = serde_json::from_str::<Couplet>(r#"{"id": 1, "popular": "often"}"#);

		assert!(result.is_err());
	}

	#[test]
	fn missing_fields_default_to_empty() {
		let couplet: Couplet =
			serde_json::from_str(r#"{"id": "3", "tags": null}"#).expect("Failed to parse couplet.");

		assert!(couplet.tags.is_empty());
		assert!(!couplet.popular);
		assert_eq!(couplet.couplet_hindi, "");
	}

	#[test]
	fn generic_field_comparison_uses_plain_ordering() {
		let left = FieldValue::Text("a");
		let right = FieldValue::Text("b");

		assert_eq!(left.compare(&right), Ordering::Less);
		assert_eq!(FieldValue::Bool(true).compare(&FieldValue::Bool(false)), Ordering::Greater);
		assert_eq!(left.compare(&FieldValue::Number(1.0)), Ordering::Equal);
	}
}
