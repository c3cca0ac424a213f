//! Request options and their normalization.
//!
//! [`QueryRequest`] mirrors the wire parameters one to one and accepts whatever a query string or
//! JSON body delivers. [`QueryOptions::try_from_request`] validates the enumerated options and
//! converts everything else once, so pipeline stages only ever see typed values.

use serde::{Deserialize, Serialize};

use doha_domain::{Couplet, Loose, loose};

use crate::{
	ServiceError, ServiceResult,
	paginate::{self, PageSize},
};

const SORT_FIELDS: [&str; 5] = ["id", "random", "popular", "couplet_english", "couplet_hindi"];
const SEARCH_SCOPES: [&str; 3] = ["couplet", "translation", "explanation"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
	pub s: Option<Loose>,
	pub exact_match: Option<Loose>,
	pub search_within: Option<String>,
	pub tags: Option<TagList>,
	pub popular: Option<Loose>,
	pub order_by: Option<String>,
	pub order: Option<String>,
	pub page: Option<Loose>,
	pub per_page: Option<Loose>,
	pub pagination: Option<Loose>,
}

/// Tag filter as sent by clients: a comma-separated string or a list of slugs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagList {
	Joined(String),
	List(Vec<String>),
}
impl TagList {
	/// Trimmed, lowercased, non-empty slugs.
	pub fn slugs(&self) -> Vec<String> {
		let raw: Vec<&str> = match self {
			Self::Joined(joined) => joined.split(',').collect(),
			Self::List(items) => items.iter().flat_map(|item| item.split(',')).collect(),
		};

		raw.into_iter()
			.map(|slug| slug.trim().to_lowercase())
			.filter(|slug| !slug.is_empty())
			.collect()
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortField {
	Id,
	Random,
	Popular,
	CoupletEnglish,
	CoupletHindi,
	/// Plain ordering on any other record field, by serialized name.
	Field(String),
}
impl SortField {
	/// Parses one of the publicly accepted sort fields. Input is lowercased first.
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.trim().to_lowercase().as_str() {
			"id" => Some(Self::Id),
			"random" => Some(Self::Random),
			"popular" => Some(Self::Popular),
			"couplet_english" => Some(Self::CoupletEnglish),
			"couplet_hindi" => Some(Self::CoupletHindi),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
	#[default]
	Asc,
	Desc,
}
impl SortOrder {
	/// Parses `ASC` or `DESC`. Input is uppercased first.
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.trim().to_uppercase().as_str() {
			"ASC" => Some(Self::Asc),
			"DESC" => Some(Self::Desc),
			_ => None,
		}
	}
}

/// Which text fields a search looks at. Each part covers its Hindi and English field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchScope {
	pub couplet: bool,
	pub translation: bool,
	pub explanation: bool,
}
impl SearchScope {
	pub const ALL: Self = Self { couplet: true, translation: true, explanation: true };
	const NONE: Self = Self { couplet: false, translation: false, explanation: false };

	/// Resolves `all`, an empty value, or a comma-separated combination of `couplet`,
	/// `translation` and `explanation`. Unknown tokens are returned as the error value.
	pub fn parse(raw: &str) -> Result<Self, Vec<String>> {
		let normalized = raw.trim().to_lowercase();

		if normalized.is_empty() || normalized == "all" {
			return Ok(Self::ALL);
		}

		let mut scope = Self::NONE;
		let mut unknown = Vec::new();

		for token in normalized.split(',').map(str::trim).filter(|token| !token.is_empty()) {
			match token {
				"all" => scope = Self::ALL,
				"couplet" => scope.couplet = true,
				"translation" => scope.translation = true,
				"explanation" => scope.explanation = true,
				other => unknown.push(other.to_string()),
			}
		}

		if !unknown.is_empty() {
			return Err(unknown);
		}
		if scope == Self::NONE {
			return Ok(Self::ALL);
		}

		Ok(scope)
	}

	pub fn fields<'a>(&self, couplet: &'a Couplet) -> Vec<&'a str> {
		let mut fields = Vec::with_capacity(6);

		if self.couplet {
			fields.push(couplet.couplet_hindi.as_str());
			fields.push(couplet.couplet_english.as_str());
		}
		if self.translation {
			fields.push(couplet.translation_hindi.as_str());
			fields.push(couplet.translation_english.as_str());
		}
		if self.explanation {
			fields.push(couplet.explanation_hindi.as_str());
			fields.push(couplet.explanation_english.as_str());
		}

		fields
	}
}
impl Default for SearchScope {
	fn default() -> Self {
		Self::ALL
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryOptions {
	pub search: String,
	pub exact_match: bool,
	pub search_within: SearchScope,
	pub tags: Vec<String>,
	pub popular: bool,
	pub order_by: SortField,
	pub order: SortOrder,
	pub page: usize,
	pub per_page: PageSize,
	pub pagination: bool,
}
impl QueryOptions {
	pub fn try_from_request(req: &QueryRequest) -> ServiceResult<Self> {
		let order_by = match non_empty(req.order_by.as_deref()) {
			None => SortField::Id,
			Some(raw) => SortField::parse(raw).ok_or_else(|| ServiceError::InvalidRequest {
				message: format!(
					"orderBy must be one of {}; got '{raw}'.",
					SORT_FIELDS.join(", ")
				),
			})?,
		};
		let order = match non_empty(req.order.as_deref()) {
			None => SortOrder::Asc,
			Some(raw) => SortOrder::parse(raw).ok_or_else(|| ServiceError::InvalidRequest {
				message: format!("order must be one of ASC, DESC; got '{raw}'."),
			})?,
		};
		let search_within = match req.search_within.as_deref() {
			None => SearchScope::ALL,
			Some(raw) => SearchScope::parse(raw).map_err(|unknown| ServiceError::InvalidRequest {
				message: format!(
					"searchWithin accepts all or a combination of {}; got unsupported value(s): {}.",
					SEARCH_SCOPES.join(", "),
					unknown.join(", ")
				),
			})?,
		};

		Ok(Self {
			search: req.s.as_ref().map(|s| s.as_text().trim().to_string()).unwrap_or_default(),
			exact_match: strict_bool("exactMatch", req.exact_match.as_ref())?,
			search_within,
			tags: req.tags.as_ref().map(TagList::slugs).unwrap_or_default(),
			popular: strict_bool("popular", req.popular.as_ref())?,
			order_by,
			order,
			page: paginate::page_number(req.page.as_ref()),
			per_page: paginate::page_size(req.per_page.as_ref()),
			pagination: loose::to_bool_lenient(req.pagination.as_ref(), true),
		})
	}
}
impl Default for QueryOptions {
	fn default() -> Self {
		Self {
			search: String::new(),
			exact_match: false,
			search_within: SearchScope::ALL,
			tags: Vec::new(),
			popular: false,
			order_by: SortField::Id,
			order: SortOrder::Asc,
			page: 1,
			per_page: PageSize::Limit(paginate::DEFAULT_PAGE_SIZE),
			pagination: true,
		}
	}
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
	raw.filter(|value| !value.trim().is_empty())
}

fn strict_bool(name: &str, value: Option<&Loose>) -> ServiceResult<bool> {
	loose::to_bool_or_false(value)
		.map_err(|err| ServiceError::Conversion { message: format!("{name}: {err}") })
}
