//! Free-text search over the selected text fields.
//!
//! Matching is case-insensitive containment. A record matches as a whole when the full search
//! text occurs in one of its fields, and as a partial match when any whitespace-separated term
//! does. Whole matches come first; both groups keep their input order.

use std::collections::HashSet;

use doha_domain::{Couplet, CoupletId, text};

use crate::query::SearchScope;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tier {
	Whole,
	Partial,
}

pub fn filter<'a>(
	couplets: Vec<&'a Couplet>,
	search: &str,
	exact_match: bool,
	scope: SearchScope,
) -> Vec<&'a Couplet> {
	let needle = text::fold(search.trim());

	if needle.is_empty() {
		return couplets;
	}

	let terms: Vec<&str> =
		if exact_match { Vec::new() } else { needle.split_whitespace().collect() };
	let mut whole = Vec::new();
	let mut partial = Vec::new();

	for couplet in couplets {
		match classify(couplet, &needle, &terms, scope) {
			Some(Tier::Whole) => whole.push(couplet),
			Some(Tier::Partial) => partial.push(couplet),
			None => {},
		}
	}

	let mut seen: HashSet<&CoupletId> = HashSet::new();
	let mut matched = Vec::with_capacity(whole.len() + partial.len());

	for couplet in whole.into_iter().chain(partial) {
		if seen.insert(&couplet.id) {
			matched.push(couplet);
		}
	}

	matched
}

fn classify(couplet: &Couplet, needle: &str, terms: &[&str], scope: SearchScope) -> Option<Tier> {
	let fields: Vec<String> = scope.fields(couplet).into_iter().map(text::fold).collect();

	if fields.iter().any(|field| field.contains(needle)) {
		return Some(Tier::Whole);
	}
	if terms.iter().any(|term| fields.iter().any(|field| field.contains(term))) {
		return Some(Tier::Partial);
	}

	None
}
