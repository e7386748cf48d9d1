//! The order processing operation.

use crate::clock::Clock;
use crate::error::OrderError;

use super::pricing::PriceBreakdown;
use super::processed::{
    CustomerDetails, NOT_AVAILABLE, NOT_SPECIFIED, OrderId, OrderLine, ProcessedOrder,
    format_order_date,
};
use super::submission::{CustomerInfo, OrderSubmission};

/// Payment method recorded when the submission names none.
pub const DEFAULT_PAYMENT_METHOD: &str = "Cash on Delivery";

/// Validates a submission and transforms it into a [`ProcessedOrder`].
///
/// Validation is checked in order, first failure wins: the customer block
/// must carry a non-empty first name and phone, then the item list must be
/// non-empty. Once validation passes the computation cannot fail. The input
/// is never mutated; the result is a pure function of the submission and the
/// injected clock.
pub fn process_order(
    submission: &OrderSubmission,
    clock: &dyn Clock,
) -> Result<ProcessedOrder, OrderError> {
    let customer = validate_customer(submission.customer.as_ref())?;

    if submission.items.is_empty() {
        return Err(OrderError::EmptyItems);
    }

    let now = clock.now();
    let order_id = OrderId::generate(now);
    let pricing = PriceBreakdown::compute(&submission.items);

    let items = submission
        .items
        .iter()
        .map(|item| {
            let price = item.price.unwrap_or(0.0);
            let quantity = item.quantity.unwrap_or(1.0);
            OrderLine {
                name: item.name.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                price,
                quantity,
                line_total: (price * quantity).round() as i64,
            }
        })
        .collect();

    let payment_method = submission
        .payment_method
        .clone()
        .filter(|method| !method.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string());

    tracing::debug!(order_id = %order_id, total = pricing.total, "order processed");

    Ok(ProcessedOrder {
        order_id,
        customer,
        items,
        payment_method,
        pricing,
        order_date: format_order_date(now),
    })
}

fn validate_customer(customer: Option<&CustomerInfo>) -> Result<CustomerDetails, OrderError> {
    let customer = customer.ok_or(OrderError::MissingCustomerInfo)?;

    let first_name = required(customer.first_name.as_deref())?;
    let phone = required(customer.phone.as_deref())?;

    let last_name = customer.last_name.as_deref().unwrap_or("").trim();
    let name = format!("{first_name} {last_name}").trim().to_string();

    Ok(CustomerDetails {
        name,
        phone: phone.to_string(),
        county: placeholder(customer.county.as_deref(), NOT_SPECIFIED),
        town: placeholder(customer.town.as_deref(), NOT_SPECIFIED),
        landmark: placeholder(customer.landmark.as_deref(), NOT_AVAILABLE),
    })
}

fn required(field: Option<&str>) -> Result<&str, OrderError> {
    match field.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(OrderError::MissingCustomerInfo),
    }
}

fn placeholder(field: Option<&str>, fallback: &str) -> String {
    match field.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}
