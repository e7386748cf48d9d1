//! Order placement endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use domain::{Clock, OrderSubmission, ProcessedOrder, process_order};
use metrics::counter;
use notify::{Notifier, render_order_email};
use serde::Serialize;

use crate::error::ApiError;

/// Upper bound on a single notification delivery attempt. Enforced here at
/// the boundary; the order core knows nothing about email.
const EMAIL_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub notifier: Arc<dyn Notifier>,
    pub owner_email: String,
}

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub success: bool,
    pub message: &'static str,
    pub order_id: String,
    pub order_total: i64,
}

#[derive(Serialize)]
pub struct HintResponse {
    pub success: bool,
    pub message: &'static str,
}

// -- Handlers --

/// GET /api/place-order — browser-friendly hint; orders go over POST.
pub async fn place_order_hint() -> Json<HintResponse> {
    Json(HintResponse {
        success: true,
        message: "Use POST to place an order.",
    })
}

/// POST /api/place-order — validate, price, and acknowledge an order.
///
/// The notification email is best-effort: failure or timeout is logged and
/// counted but never turns an accepted order into an error response.
#[tracing::instrument(skip(state, submission))]
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    submission: Result<Json<OrderSubmission>, JsonRejection>,
) -> Result<Json<PlaceOrderResponse>, ApiError> {
    let Json(submission) =
        submission.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let order = match process_order(&submission, state.clock.as_ref()) {
        Ok(order) => order,
        Err(err) => {
            counter!("orders_rejected_total").increment(1);
            tracing::info!(reason = %err, "order rejected");
            return Err(err.into());
        }
    };

    counter!("orders_placed_total").increment(1);
    tracing::info!(
        order_id = %order.order_id,
        total = order.pricing.total,
        "order placed"
    );

    notify_owner(&state, &order).await;

    Ok(Json(PlaceOrderResponse {
        success: true,
        message: "Order placed successfully!",
        order_id: order.order_id.to_string(),
        order_total: order.pricing.total,
    }))
}

/// Sends the owner notification, swallowing delivery failures.
async fn notify_owner(state: &AppState, order: &ProcessedOrder) {
    let email = render_order_email(order, &state.owner_email);

    match tokio::time::timeout(EMAIL_TIMEOUT, state.notifier.send(&email)).await {
        Ok(Ok(())) => {
            tracing::info!(order_id = %order.order_id, to = %email.to, "order notification sent");
        }
        Ok(Err(err)) => {
            counter!("order_emails_failed_total").increment(1);
            tracing::warn!(order_id = %order.order_id, error = %err, "order notification failed");
        }
        Err(_) => {
            counter!("order_emails_failed_total").increment(1);
            tracing::warn!(order_id = %order.order_id, "order notification timed out");
        }
    }
}
