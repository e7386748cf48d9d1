//! The server-trusted, fully computed representation of an order.

use chrono::{DateTime, Utc};
use chrono_tz::Africa::Nairobi;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pricing::PriceBreakdown;

/// Placeholder for optional address fields the customer left blank.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Placeholder for a missing delivery landmark.
pub const NOT_AVAILABLE: &str = "N/A";

/// Unique order identifier, `MIRROR-<millis>-<8 hex chars>`.
///
/// The original backend used the bare millisecond timestamp, which collides
/// under two orders in the same millisecond; the random suffix closes that
/// hole while keeping the `MIRROR-` prefix the storefront displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generates an order ID from the order instant plus a random suffix.
    pub fn generate(now: DateTime<Utc>) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("MIRROR-{}-{}", now.timestamp_millis(), &suffix[..8]))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display-ready customer details with placeholders applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// First and last name joined, trimmed.
    pub name: String,
    pub phone: String,
    pub county: String,
    pub town: String,
    pub landmark: String,
}

/// A normalized order line with the leniency defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    /// `price * quantity`, rounded to whole currency units.
    pub line_total: i64,
}

/// A fully computed order, immutable once built. Pricing is always derived
/// here — never taken from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedOrder {
    pub order_id: OrderId,
    pub customer: CustomerDetails,
    pub items: Vec<OrderLine>,
    pub payment_method: String,
    pub pricing: PriceBreakdown,
    /// Human-readable order timestamp in the store's timezone.
    pub order_date: String,
}

/// Renders an instant as the store-local (Africa/Nairobi) order date string.
pub fn format_order_date(now: DateTime<Utc>) -> String {
    now.with_timezone(&Nairobi)
        .format("%d %b %Y, %H:%M %Z")
        .to_string()
}
