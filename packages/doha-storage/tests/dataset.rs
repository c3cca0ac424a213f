use std::sync::Arc;

use doha_config::Dataset as DatasetConfig;
use doha_domain::CoupletId;
use doha_storage::{Dataset, DatasetError, DatasetLoader, Error};
use doha_testkit::{TestDataset, couplet, sample_couplets};

#[tokio::test]
async fn loads_records_in_file_order() {
	let dataset = TestDataset::new(&sample_couplets()).expect("Failed to write dataset.");
	let couplets =
		DatasetLoader::new(dataset.path()).load().await.expect("Failed to load dataset.");
	let ids: Vec<_> = couplets.iter().map(|couplet| couplet.id.clone()).collect();

	assert_eq!(ids, (1..=5).map(CoupletId::Number).collect::<Vec<_>>());
	assert!(couplets[0].popular);
	assert_eq!(couplets[0].tags.len(), 2);
}

#[tokio::test]
async fn missing_file_is_data_unavailable() {
	let dataset = TestDataset::new(&[]).expect("Failed to write dataset.");
	let missing = dataset.missing_path();
	let err = DatasetLoader::new(&missing).load().await.expect_err("Expected missing dataset.");
	let Error::DataUnavailable { path, source } = &err;

	assert_eq!(path, &missing);
	assert!(matches!(source, DatasetError::Io(_)));
	assert!(err.to_string().contains("missing.json"), "Unexpected error: {err}");
}

#[tokio::test]
async fn malformed_json_is_data_unavailable() {
	let dataset = TestDataset::from_raw("[{\"id\": 1,").expect("Failed to write dataset.");
	let err =
		DatasetLoader::new(dataset.path()).load().await.expect_err("Expected malformed dataset.");
	let Error::DataUnavailable { source, .. } = err;

	assert!(matches!(source, DatasetError::Parse(_)));
}

#[tokio::test]
async fn record_without_id_is_rejected() {
	let dataset =
		TestDataset::from_raw(r#"[{"slug": "nameless"}]"#).expect("Failed to write dataset.");
	let result = DatasetLoader::new(dataset.path()).load().await;

	assert!(matches!(result, Err(Error::DataUnavailable { .. })));
}

#[tokio::test]
async fn fresh_dataset_observes_file_changes() {
	let dataset = TestDataset::new(&[couplet(1).build()]).expect("Failed to write dataset.");
	let source = Dataset::Fresh(DatasetLoader::new(dataset.path()));

	assert_eq!(source.snapshot().await.expect("Failed to read snapshot.").len(), 1);

	dataset
		.rewrite(&[couplet(1).build(), couplet(2).build()])
		.expect("Failed to rewrite dataset.");

	assert_eq!(source.snapshot().await.expect("Failed to read snapshot.").len(), 2);
}

#[tokio::test]
async fn cached_dataset_is_loaded_once_and_shared() {
	let dataset = TestDataset::new(&sample_couplets()).expect("Failed to write dataset.");
	let cfg = DatasetConfig { path: dataset.path().to_path_buf(), cache: true };
	let source = Dataset::from_config(&cfg).await.expect("Failed to build dataset.");

	assert!(source.is_cached());

	dataset.rewrite(&[]).expect("Failed to rewrite dataset.");

	let first = source.snapshot().await.expect("Failed to read snapshot.");
	let second = source.snapshot().await.expect("Failed to read snapshot.");

	assert_eq!(first.len(), 5);
	assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn uncached_config_defers_loading() {
	let dataset = TestDataset::new(&[]).expect("Failed to write dataset.");
	let cfg = DatasetConfig { path: dataset.missing_path(), cache: false };
	let source = Dataset::from_config(&cfg).await.expect("Uncached dataset must not read eagerly.");

	assert!(!source.is_cached());
	assert!(source.snapshot().await.is_err());
}
