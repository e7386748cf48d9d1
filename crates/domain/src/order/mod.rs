//! The order domain: submission types, pricing, and the processing operation.

pub mod pricing;
pub mod processed;
pub mod service;
pub mod submission;

pub use pricing::{PriceBreakdown, SHIPPING_FEE};
pub use processed::{CustomerDetails, OrderId, OrderLine, ProcessedOrder};
pub use service::{DEFAULT_PAYMENT_METHOD, process_order};
pub use submission::{CustomerInfo, ItemSubmission, OrderSubmission};
