mod error;

pub use error::{Error, Result};

use std::{
	fs,
	path::{Path, PathBuf},
};

use tempfile::TempDir;

use doha_domain::{Couplet, CoupletId, Tag};

const DATASET_FILE: &str = "couplets.json";

/// A couplet collection written to a private temporary directory.
///
/// The directory is removed when the value is dropped.
pub struct TestDataset {
	dir: TempDir,
	path: PathBuf,
}
impl TestDataset {
	pub fn new(couplets: &[Couplet]) -> Result<Self> {
		Self::from_raw(&serde_json::to_string_pretty(couplets)?)
	}

	pub fn from_raw(raw: &str) -> Result<Self> {
		let dir = tempfile::Builder::new().prefix("doha_test_").tempdir()?;
		let path = dir.path().join(DATASET_FILE);

		fs::write(&path, raw)?;

		Ok(Self { dir, path })
	}

	/// A path inside the temporary directory that was never written.
	pub fn missing_path(&self) -> PathBuf {
		self.dir.path().join("missing.json")
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn rewrite(&self, couplets: &[Couplet]) -> Result<()> {
		fs::write(&self.path, serde_json::to_string_pretty(couplets)?)?;

		Ok(())
	}
}

pub fn tag(slug: &str) -> Tag {
	Tag { slug: slug.to_string(), name: slug.to_string(), usage_count: 1 }
}

pub fn couplet(id: i64) -> CoupletBuilder {
	CoupletBuilder::new(CoupletId::Number(id))
}

pub fn couplet_with_id(id: CoupletId) -> CoupletBuilder {
	CoupletBuilder::new(id)
}

pub struct CoupletBuilder {
	couplet: Couplet,
}
impl CoupletBuilder {
	fn new(id: CoupletId) -> Self {
		let slug = format!("couplet-{id}");

		Self {
			couplet: Couplet {
				unique_slug: format!("{slug}-{id}"),
				slug,
				id,
				couplet_hindi: String::new(),
				couplet_english: String::new(),
				translation_hindi: String::new(),
				translation_english: String::new(),
				explanation_hindi: String::new(),
				explanation_english: String::new(),
				tags: Vec::new(),
				popular: false,
			},
		}
	}

	pub fn couplet(mut self, hindi: &str, english: &str) -> Self {
		self.couplet.couplet_hindi = hindi.to_string();
		self.couplet.couplet_english = english.to_string();

		self
	}

	pub fn translation(mut self, hindi: &str, english: &str) -> Self {
		self.couplet.translation_hindi = hindi.to_string();
		self.couplet.translation_english = english.to_string();

		self
	}

	pub fn explanation(mut self, hindi: &str, english: &str) -> Self {
		self.couplet.explanation_hindi = hindi.to_string();
		self.couplet.explanation_english = english.to_string();

		self
	}

	pub fn tags(mut self, slugs: &[&str]) -> Self {
		self.couplet.tags = slugs.iter().map(|slug| tag(slug)).collect();

		self
	}

	pub fn popular(mut self, popular: bool) -> Self {
		self.couplet.popular = popular;

		self
	}

	pub fn build(self) -> Couplet {
		self.couplet
	}
}

/// Five records with distinct text in every searchable field.
///
/// | id | popular | tags            | searchable words                          |
/// |----|---------|-----------------|-------------------------------------------|
/// | 1  | yes     | guru, devotion  | "guru", "govind", "feet"                  |
/// | 2  | no      | time            | "tomorrow", "today", "moment"             |
/// | 3  | yes     | speech          | "sweet speech", "cool"                    |
/// | 4  | no      | guru            | "guru" only in the explanation            |
/// | 5  | no      | (none)          | "patience", "gardener", "season"          |
pub fn sample_couplets() -> Vec<Couplet> {
	vec![
		couplet(1)
			.couplet(
				"गुरु गोविंद दोऊ खड़े, काके लागूं पांय।",
				"Guru and Govind both stand, whose feet shall I touch first?",
			)
			.translation(
				"गुरु और गोविंद दोनों सामने खड़े हैं।",
				"Both the teacher and God stand before me.",
			)
			.explanation(
				"गुरु ने ही ईश्वर तक पहुंचने का मार्ग दिखाया।",
				"The teacher showed the path that leads to God.",
			)
			.tags(&["guru", "devotion"])
			.popular(true)
			.build(),
		couplet(2)
			.couplet(
				"काल करे सो आज कर, आज करे सो अब।",
				"Do tomorrow's work today, and today's work now.",
			)
			.translation("कल का काम आज करो, आज का काम अभी।", "Finish tomorrow's task today.")
			.explanation("समय का मूल्य समझो।", "Every moment is precious.")
			.tags(&["time"])
			.build(),
		couplet(3)
			.couplet(
				"ऐसी वाणी बोलिए, मन का आपा खोय।",
				"Speak such words that shed the ego of the mind.",
			)
			.translation("ऐसी मीठी वाणी बोलो।", "Use sweet speech that soothes the listener.")
			.explanation("मीठे वचन दूसरों को शीतल करते हैं।", "Kind words keep others cool.")
			.tags(&["speech"])
			.popular(true)
			.build(),
		couplet(4)
			.couplet("बड़ा हुआ तो क्या हुआ, जैसे पेड़ खजूर।", "What use is being big, like a date palm?")
			.translation("बड़ा होना व्यर्थ है।", "Greatness without use is empty.")
			.explanation("गुरु कहते हैं कि विनम्रता जरूरी है।", "The guru teaches that humility matters.")
			.tags(&["guru"])
			.build(),
		couplet(5)
			.couplet("धीरे धीरे रे मना, धीरे सब कुछ होय।", "Slowly, O mind, everything happens slowly.")
			.translation("धैर्य रखो।", "Keep patience.")
			.explanation(
				"माली सौ घड़े सींचे, फल ऋतु आने पर ही आता है।",
				"The gardener waters a hundred pots, yet fruit comes only in its season.",
			)
			.build(),
	]
}
