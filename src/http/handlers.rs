//! Boundary endpoint handlers.
//!
//! # Responsibilities
//! - Parse incoming request bodies and verify required fields are present
//! - Return 400 with an explanatory message on missing fields
//! - Delegate to the gateway client and return its result
//! - Translate every error into a structured JSON response, never a panic

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::gateway::types::{BuildRequest, GatewayError, SubmitRequest, TransactionOutput};
use crate::http::server::AppState;
use crate::observability::metrics;

/// Incoming build request. Fields are optional at the serde layer so that
/// absence is detected locally and answered with 400 instead of a decode
/// rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildEndpointBody {
    change_address: Option<String>,
    utxos: Option<Vec<String>>,
    outputs: Option<Vec<TransactionOutput>>,
}

/// Incoming submit request.
#[derive(Debug, Deserialize)]
pub struct SubmitEndpointBody {
    transaction: Option<String>,
    signatures: Option<Vec<String>>,
}

/// Submit success body: confirmation hash plus a human-readable message.
#[derive(Debug, Serialize)]
pub struct SubmitEndpointResponse {
    pub hash: String,
    pub message: &'static str,
}

/// Uniform error body for both endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Service status body.
#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub network: String,
}

/// `GET /api/status` — liveness and build info.
pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        network: state.network.to_string(),
    })
}

/// `POST /api/transaction/build` — build an unsigned transaction.
pub async fn build_transaction(
    State(state): State<AppState>,
    Json(body): Json<BuildEndpointBody>,
) -> Response {
    let start = Instant::now();

    let (Some(change_address), Some(utxos), Some(outputs)) =
        (body.change_address, body.utxos, body.outputs)
    else {
        tracing::debug!("Build request rejected: missing required parameters");
        metrics::record_request("build", 400, start);
        return error_response(StatusCode::BAD_REQUEST, "Missing required parameters".into());
    };

    let request = BuildRequest {
        change_address,
        utxos,
        outputs,
    };

    match state.gateway.build(&request).await {
        Ok(built) => {
            tracing::debug!(hash = %built.hash, "Transaction built");
            metrics::record_request("build", 200, start);
            (StatusCode::OK, Json(built)).into_response()
        }
        Err(e) => {
            let (status, message) = translate_gateway_error("build", e);
            metrics::record_request("build", status.as_u16(), start);
            error_response(status, message)
        }
    }
}

/// `POST /api/transaction/submit` — broadcast a signed transaction.
pub async fn submit_transaction(
    State(state): State<AppState>,
    Json(body): Json<SubmitEndpointBody>,
) -> Response {
    let start = Instant::now();

    let Some(transaction) = body.transaction else {
        tracing::debug!("Submit request rejected: missing transaction");
        metrics::record_request("submit", 400, start);
        return error_response(StatusCode::BAD_REQUEST, "Missing transaction".into());
    };

    let request = SubmitRequest {
        transaction,
        signatures: body.signatures,
    };

    match state.gateway.submit(&request).await {
        Ok(submitted) => {
            tracing::info!(
                tx_hash = %submitted.tx_hash,
                explorer = %state.network.explorer_tx_url(&submitted.tx_hash),
                "Transaction submitted"
            );
            metrics::record_request("submit", 200, start);
            (
                StatusCode::OK,
                Json(SubmitEndpointResponse {
                    hash: submitted.tx_hash,
                    message: "Transaction submitted successfully",
                }),
            )
                .into_response()
        }
        Err(e) => {
            let (status, message) = translate_gateway_error("submit", e);
            metrics::record_request("submit", status.as_u16(), start);
            error_response(status, message)
        }
    }
}

/// Map a gateway failure to a local response.
///
/// Remote errors propagate the upstream message verbatim so callers see the
/// gateway's own explanation (e.g. "insufficient funds"); the status code and
/// taxonomy stay in the logs.
fn translate_gateway_error(endpoint: &str, err: GatewayError) -> (StatusCode, String) {
    match err {
        GatewayError::Validation(message) => {
            tracing::debug!(endpoint = endpoint, error = %message, "Request failed validation");
            (StatusCode::BAD_REQUEST, message)
        }
        GatewayError::Remote { status, message } => {
            tracing::error!(
                endpoint = endpoint,
                upstream_status = status,
                error = %message,
                "Gateway rejected request"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, message)
        }
        other => {
            tracing::error!(endpoint = endpoint, error = %other, "Gateway call failed");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}
