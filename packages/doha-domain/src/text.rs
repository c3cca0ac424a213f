use unicode_normalization::UnicodeNormalization;

/// Canonical form used for case-insensitive containment checks.
///
/// Devanagari text reaches the dataset in both precomposed and decomposed nukta forms, so both
/// sides of a comparison go through NFC before lowercasing.
pub fn fold(input: &str) -> String {
	input.nfc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::fold;

	#[test]
	fn lowercases_latin() {
		assert_eq!(fold("Kabir SAYS"), "kabir says");
	}

	#[test]
	fn composes_nukta_forms() {
		// QA is a composition exclusion; NFC keeps it as KA + NUKTA.
		assert_eq!(fold("\u{0915}\u{093C}"), fold("\u{0958}"));
	}
}
