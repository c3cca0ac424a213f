//! Couplet query pipeline.
//!
//! A query runs search, tag filter, popularity filter, sort and pagination in that order over a
//! snapshot of the dataset. Stages work on borrowed views; only the returned page is cloned.

pub mod filter;
pub mod paginate;
pub mod query;
pub mod search;
pub mod sort;

mod error;

pub use error::{ServiceError, ServiceResult};
pub use paginate::{PageSize, ResultPage};
pub use query::{QueryOptions, QueryRequest, SearchScope, SortField, SortOrder, TagList};
pub use sort::Collators;

use doha_config::Config;
use doha_domain::Couplet;
use doha_storage::Dataset;

pub struct DohaService {
	dataset: Dataset,
	collators: Collators,
}
impl DohaService {
	pub fn new(dataset: Dataset) -> ServiceResult<Self> {
		Ok(Self { dataset, collators: Collators::new()? })
	}

	pub async fn from_config(cfg: &Config) -> ServiceResult<Self> {
		Self::new(Dataset::from_config(&cfg.dataset).await?)
	}

	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	pub async fn query(&self, req: QueryRequest) -> ServiceResult<ResultPage> {
		let options = QueryOptions::try_from_request(&req)?;
		let couplets = self.dataset.snapshot().await?;

		Ok(run(&couplets, &options, &self.collators))
	}
}

/// Runs the pipeline over `couplets` without touching them.
pub fn run(couplets: &[Couplet], options: &QueryOptions, collators: &Collators) -> ResultPage {
	tracing::debug!(?options, dataset = couplets.len(), "Running couplet query.");

	let view = couplets.iter().collect();
	let view = search::filter(view, &options.search, options.exact_match, options.search_within);
	let view = filter::by_tags(view, &options.tags);
	let mut view = filter::by_popularity(view, options.popular);

	sort::sort(&mut view, &options.order_by, options.order, collators);

	let page = paginate::paginate(view, options.page, options.per_page, options.pagination);

	tracing::debug!(
		total = page.total,
		total_pages = page.total_pages,
		returned = page.couplets.len(),
		"Couplet query finished."
	);

	page
}
