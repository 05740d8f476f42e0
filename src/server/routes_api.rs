use crate::calculator::Calculation;
use crate::server::AppContext;
use crate::state::DisplayView;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use playtime_common::Error;
use serde::{Deserialize, Serialize};

pub fn api_routes() -> Router<AppContext> {
    Router::new()
        .route("/health", get(health))
        .route("/calculate", post(calculate))
        .route("/result", get(result))
}

async fn health(State(ctx): State<AppContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "api_key_configured": ctx.calculator.source().is_available(),
    }))
}

#[derive(Deserialize)]
struct CalculateRequest {
    url: String,
}

#[derive(Serialize)]
struct CalculateResponse {
    /// Request token assigned to this calculation
    token: u64,
    #[serde(flatten)]
    calculation: Calculation,
}

#[derive(Serialize)]
struct ErrorResponse {
    token: u64,
    error: &'static str,
}

async fn calculate(
    State(ctx): State<AppContext>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let token = ctx.display.begin();

    let outcome = match payload {
        Ok(Json(request)) => {
            let calculator = ctx.calculator.clone();
            let display = ctx.display.clone();

            // Detached so a dropped connection does not cancel the calculation.
            let task = tokio::spawn(async move {
                let outcome = calculator.calculate(&request.url).await;
                display.complete(token, &outcome);
                outcome
            });

            task.await
                .unwrap_or_else(|e| Err(Error::upstream(format!("calculation task failed: {e}"))))
        }
        Err(rejection) => {
            let outcome = Err(Error::invalid_reference(rejection.body_text()));
            ctx.display.complete(token, &outcome);
            outcome
        }
    };

    match outcome {
        Ok(calculation) => Ok(Json(CalculateResponse { token, calculation })),
        Err(err) => {
            let status = match err {
                Error::InvalidReference(_) => {
                    tracing::info!(token, "Rejected calculation: {}", err);
                    StatusCode::BAD_REQUEST
                }
                Error::Upstream(_) => {
                    tracing::error!(token, "Calculation failed: {}", err);
                    StatusCode::BAD_GATEWAY
                }
            };
            Err((
                status,
                Json(ErrorResponse {
                    token,
                    error: err.user_message(),
                }),
            ))
        }
    }
}

async fn result(State(ctx): State<AppContext>) -> Json<DisplayView> {
    Json(ctx.display.current())
}
