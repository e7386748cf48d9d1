//! Order processing core for the Mirror-It backend.
//!
//! This crate holds the one piece of real business logic in the system:
//! validating an incoming order submission, normalizing customer fields,
//! and computing the discounted order total. It is pure and synchronous —
//! email dispatch and HTTP response shaping live in the boundary layer.

pub mod clock;
pub mod error;
pub mod order;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::OrderError;
pub use order::{
    CustomerDetails, CustomerInfo, ItemSubmission, OrderId, OrderLine, OrderSubmission,
    PriceBreakdown, ProcessedOrder, process_order,
};
