//! Ordering of the filtered records.
//!
//! Text comparisons go through ICU collation so Devanagari sorts by its alphabet rather than by
//! code point. All orderings except `random` use a stable sort; equal keys keep their input order.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::{Locale, locale};
use rand::seq::SliceRandom;

use doha_domain::Couplet;

use crate::{
	ServiceError, ServiceResult,
	query::{SortField, SortOrder},
};

/// Hindi and English collators, built once and shared by every query.
pub struct Collators {
	english: Collator,
	hindi: Collator,
}
impl Collators {
	pub fn new() -> ServiceResult<Self> {
		Ok(Self { english: collator(locale!("en"))?, hindi: collator(locale!("hi"))? })
	}
}

pub fn sort(couplets: &mut [&Couplet], field: &SortField, order: SortOrder, collators: &Collators) {
	match field {
		SortField::Random => couplets.shuffle(&mut rand::thread_rng()),
		SortField::Id => sort_by(couplets, order, compare_ids),
		SortField::CoupletEnglish => sort_by(couplets, order, |a, b| {
			collators.english.compare(&a.couplet_english, &b.couplet_english)
		}),
		SortField::CoupletHindi => sort_by(couplets, order, |a, b| {
			collators.hindi.compare(&a.couplet_hindi, &b.couplet_hindi)
		}),
		// Popular records lead in ascending order.
		SortField::Popular => sort_by(couplets, order, |a, b| {
			b.popular
				.cmp(&a.popular)
				.then_with(|| collators.hindi.compare(&a.couplet_hindi, &b.couplet_hindi))
		}),
		SortField::Field(name) => sort_by(couplets, order, |a, b| {
			match (a.field(name), b.field(name)) {
				(Some(left), Some(right)) => left.compare(&right),
				_ => Ordering::Equal,
			}
		}),
	}
}

fn sort_by<F>(couplets: &mut [&Couplet], order: SortOrder, mut compare: F)
where
	F: FnMut(&Couplet, &Couplet) -> Ordering,
{
	match order {
		SortOrder::Asc => couplets.sort_by(|a, b| compare(a, b)),
		SortOrder::Desc => couplets.sort_by(|a, b| compare(a, b).reverse()),
	}
}

/// Numeric identifiers in numeric order, then identifiers that are not numbers.
fn compare_ids(a: &Couplet, b: &Couplet) -> Ordering {
	match (a.id.as_number(), b.id.as_number()) {
		(Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

fn collator(locale: Locale) -> ServiceResult<Collator> {
	Collator::try_new(&locale.into(), CollatorOptions::new()).map_err(|err| {
		ServiceError::Collation { message: format!("Failed to build collator: {err}.") }
	})
}
