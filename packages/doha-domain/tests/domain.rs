use doha_domain::{
	Couplet, CoupletId, Loose, Tag,
	loose::{self, to_bool_lenient},
	text,
};

fn sample_json() -> &'static str {
	r#"{
		"id": 101,
		"slug": "guru-govind",
		"unique_slug": "guru-govind-101",
		"couplet_hindi": "गुरु गोविंद दोऊ खड़े, काके लागूं पांय।",
		"couplet_english": "Guru Govind dou khade, kake lagun paye.",
		"translation_hindi": "गुरु और गोविंद दोनों सामने खड़े हैं।",
		"translation_english": "Both the Guru and God stand before me.",
		"explanation_hindi": "गुरु ने ही गोविंद का मार्ग दिखाया।",
		"explanation_english": "The Guru is the one who showed the way to God.",
		"tags": [{ "slug": "Guru", "name": "Guru", "usage_count": 12 }],
		"popular": "TRUE"
	}"#
}

#[test]
fn deserializes_full_record() {
	let couplet: Couplet = serde_json::from_str(sample_json()).expect("Failed to parse couplet.");

	assert_eq!(couplet.id, CoupletId::Number(101));
	assert!(couplet.popular);
	assert_eq!(
		couplet.tags,
		vec![Tag { slug: "Guru".to_string(), name: "Guru".to_string(), usage_count: 12 }]
	);
	assert!(couplet.tags[0].matches_slug("guru"));
}

#[test]
fn serialized_record_keeps_field_names() {
	let couplet: Couplet = serde_json::from_str(sample_json()).expect("Failed to parse couplet.");
	let value = serde_json::to_value(&couplet).expect("Failed to serialize couplet.");

	assert_eq!(value["id"], 101);
	assert_eq!(value["popular"], true);
	assert_eq!(value["unique_slug"], "guru-govind-101");
	assert_eq!(value["tags"][0]["usage_count"], 12);
}

#[test]
fn loose_values_deserialize_from_json() {
	let values: Vec<Loose> =
		serde_json::from_str(r#"[true, 2, 2.5, "x"]"#).expect("Failed to parse loose values.");

	assert_eq!(
		values,
		vec![Loose::Bool(true), Loose::Int(2), Loose::Float(2.5), Loose::text("x")]
	);
}

#[test]
fn conversion_error_names_the_value() {
	let err = loose::to_bool(&Loose::text("sometimes")).expect_err("Expected conversion error.");

	assert!(err.to_string().contains("\"sometimes\""), "Unexpected error: {err}");
}

#[test]
fn lenient_normalization_defaults_when_absent() {
	assert!(to_bool_lenient(None, true));
	assert!(!to_bool_lenient(Some(&Loose::Int(7)), true));
}

#[test]
fn fold_is_case_insensitive() {
	assert_eq!(text::fold("Guru GOVIND"), text::fold("guru govind"));
	assert!(text::fold("Both the Guru").contains(&text::fold("GURU")));
}
