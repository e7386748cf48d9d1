//! Domain error types.

use thiserror::Error;

/// Errors that can occur while validating an order submission.
///
/// Both variants are recoverable client errors; the boundary layer maps
/// them to 400 responses using the display message as the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The submission lacks a customer block, first name, or phone number.
    #[error("Missing required customer info (first name and phone)")]
    MissingCustomerInfo,

    /// The submission contains no items.
    #[error("Order must contain at least one item")]
    EmptyItems,
}
