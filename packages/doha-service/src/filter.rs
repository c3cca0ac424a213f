use doha_domain::Couplet;

/// Keeps records carrying at least one of `tags`. Expects lowercased slugs; an empty list keeps
/// everything.
pub fn by_tags<'a>(couplets: Vec<&'a Couplet>, tags: &[String]) -> Vec<&'a Couplet> {
	if tags.is_empty() {
		return couplets;
	}

	couplets
		.into_iter()
		.filter(|couplet| {
			couplet.tags.iter().any(|tag| tags.iter().any(|wanted| tag.matches_slug(wanted)))
		})
		.collect()
}

/// Keeps only popular records when `popular` is set. Never excludes anything otherwise.
pub fn by_popularity(couplets: Vec<&Couplet>, popular: bool) -> Vec<&Couplet> {
	if !popular {
		return couplets;
	}

	couplets.into_iter().filter(|couplet| couplet.popular).collect()
}

#[cfg(test)]
mod tests {
	use doha_domain::Couplet;
	use doha_testkit::{couplet, sample_couplets};

	use super::{by_popularity, by_tags};

	fn ids(couplets: &[&Couplet]) -> Vec<String> {
		couplets.iter().map(|couplet| couplet.id.to_string()).collect()
	}

	#[test]
	fn empty_tag_list_is_identity() {
		let data = sample_couplets();

		assert_eq!(by_tags(data.iter().collect(), &[]).len(), data.len());
	}

	#[test]
	fn keeps_records_with_any_requested_tag_in_order() {
		let data = sample_couplets();
		let tags = vec!["speech".to_string(), "guru".to_string()];

		assert_eq!(ids(&by_tags(data.iter().collect(), &tags)), vec!["1", "3", "4"]);
	}

	#[test]
	fn tag_slugs_compare_case_insensitively() {
		let data = vec![couplet(1).tags(&["Devotion"]).build(), couplet(2).tags(&[]).build()];

		assert_eq!(ids(&by_tags(data.iter().collect(), &["devotion".to_string()])), vec!["1"]);
	}

	#[test]
	fn popularity_filter_is_opt_in() {
		let data = sample_couplets();

		assert_eq!(by_popularity(data.iter().collect(), false).len(), data.len());
		assert_eq!(ids(&by_popularity(data.iter().collect(), true)), vec!["1", "3"]);
	}
}
