use std::sync::Arc;

use doha_service::DohaService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<DohaService>,
}
impl AppState {
	pub async fn new(config: &doha_config::Config) -> color_eyre::Result<Self> {
		let service = DohaService::from_config(config).await?;

		Ok(Self::with_service(service))
	}

	pub fn with_service(service: DohaService) -> Self {
		Self { service: Arc::new(service) }
	}
}
