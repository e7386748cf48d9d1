//! Order pricing: subtotal, discount, shipping, total.

use serde::{Deserialize, Serialize};

use super::submission::ItemSubmission;

/// Flat shipping fee in currency units.
pub const SHIPPING_FEE: i64 = 500;

/// Storewide discount applied to every order.
pub const DISCOUNT_RATE: f64 = 0.20;

/// Derived pricing for a processed order. All amounts are whole currency
/// units; rounding happens here so callers only ever see integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: i64,
    pub discount: i64,
    pub shipping: i64,
    pub total: i64,
}

impl PriceBreakdown {
    /// Computes pricing from submitted items.
    ///
    /// Leniency policy: an item with no price contributes 0, an item with no
    /// quantity counts once. The subtotal is rounded first, and the discount
    /// is taken from the rounded subtotal, so the breakdown always adds up
    /// in integer arithmetic (`total = subtotal - discount + shipping`).
    pub fn compute(items: &[ItemSubmission]) -> Self {
        let raw_subtotal: f64 = items
            .iter()
            .map(|item| item.price.unwrap_or(0.0) * item.quantity.unwrap_or(1.0))
            .sum();

        let subtotal = raw_subtotal.round() as i64;
        let discount = (subtotal as f64 * DISCOUNT_RATE).round() as i64;
        let total = subtotal - discount + SHIPPING_FEE;

        Self {
            subtotal,
            discount,
            shipping: SHIPPING_FEE,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: f64) -> ItemSubmission {
        ItemSubmission {
            name: Some("Mirror".to_string()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    #[test]
    fn computes_reference_breakdown() {
        let pricing = PriceBreakdown::compute(&[item(100.0, 2.0), item(50.0, 1.0)]);
        assert_eq!(pricing.subtotal, 250);
        assert_eq!(pricing.discount, 50);
        assert_eq!(pricing.shipping, 500);
        assert_eq!(pricing.total, 700);
    }

    #[test]
    fn rounds_fractional_prices_to_integers() {
        let pricing = PriceBreakdown::compute(&[item(33.33, 3.0)]);
        assert_eq!(pricing.subtotal, 100);
        assert_eq!(pricing.discount, 20);
        assert_eq!(pricing.total, 580);
    }

    #[test]
    fn missing_price_contributes_zero() {
        let pricing = PriceBreakdown::compute(&[ItemSubmission {
            name: Some("Mystery".to_string()),
            price: None,
            quantity: Some(4.0),
        }]);
        assert_eq!(pricing.subtotal, 0);
        assert_eq!(pricing.discount, 0);
        assert_eq!(pricing.total, SHIPPING_FEE);
    }

    #[test]
    fn missing_quantity_counts_once() {
        let pricing = PriceBreakdown::compute(&[ItemSubmission {
            name: Some("Mirror".to_string()),
            price: Some(1000.0),
            quantity: None,
        }]);
        assert_eq!(pricing.subtotal, 1000);
        assert_eq!(pricing.discount, 200);
        assert_eq!(pricing.total, 1300);
    }

    #[test]
    fn empty_items_cost_only_shipping() {
        let pricing = PriceBreakdown::compute(&[]);
        assert_eq!(pricing.subtotal, 0);
        assert_eq!(pricing.total, SHIPPING_FEE);
    }
}
