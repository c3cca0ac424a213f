use axum::{
	Json, Router,
	extract::{
		Query, State,
		rejection::{JsonRejection, QueryRejection},
	},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use doha_service::{QueryRequest, ResultPage, ServiceError};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/couplets", get(query_couplets).post(search_couplets))
		.fallback(not_found)
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn query_couplets(
	State(state): State<AppState>,
	query: Result<Query<QueryRequest>, QueryRejection>,
) -> Result<Json<Envelope<ResultPage>>, ApiError> {
	let Query(payload) =
		query.map_err(|err| ApiError::new(StatusCode::BAD_REQUEST, err.body_text()))?;
	let response = state.service.query(payload).await?;
	Ok(Json(Envelope::ok(response)))
}

async fn search_couplets(
	State(state): State<AppState>,
	payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<Envelope<ResultPage>>, ApiError> {
	let Json(payload) =
		payload.map_err(|err| ApiError::new(StatusCode::BAD_REQUEST, err.body_text()))?;
	let response = state.service.query(payload).await?;
	Ok(Json(Envelope::ok(response)))
}

async fn not_found() -> ApiError {
	ApiError::new(StatusCode::NOT_FOUND, "Route not found.")
}

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
	success: bool,
	data: T,
}
impl<T> Envelope<T> {
	fn ok(data: T) -> Self {
		Self { success: true, data }
	}
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	success: bool,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self { status, message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let status = match err {
			ServiceError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
			ServiceError::Conversion { .. }
			| ServiceError::DataUnavailable { .. }
			| ServiceError::Collation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		};

		Self::new(status, err.to_string())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		if self.status.is_server_error() {
			tracing::error!(status = %self.status, message = %self.message, "Request failed.");
		} else {
			tracing::warn!(status = %self.status, message = %self.message, "Request rejected.");
		}

		let body = ErrorBody { success: false, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
