//! Price derivations shared by the store and the filter engine.

use super::Product;

/// Sale price that actually applies: a zero sale price means no sale.
pub(super) fn active_sale_price(sale_price: Option<f64>) -> Option<f64> {
    sale_price.filter(|sale| *sale > 0.0)
}

/// Whole-percent discount implied by a sale price.
///
/// Returns `round((price - sale_price) / price * 100)` when a non-zero sale
/// price is present and `price` is positive, otherwise `0`. A sale price above
/// the original price yields `0` rather than a negative discount.
///
/// # Examples
/// ```
/// use storefront::discount_percent;
///
/// assert_eq!(discount_percent(1499.0, Some(999.0)), 33);
/// assert_eq!(discount_percent(1499.0, None), 0);
/// assert_eq!(discount_percent(0.0, Some(10.0)), 0);
/// assert_eq!(discount_percent(1000.0, Some(0.0)), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "discount is a rounded ratio of two non-negative prices, clamped to 0..=100"
)]
pub fn discount_percent(price: f64, sale_price: Option<f64>) -> u32 {
    let Some(sale) = active_sale_price(sale_price) else {
        return 0;
    };
    if price <= 0.0 {
        return 0;
    }
    let percent = ((price - sale) / price * 100.0).round();
    percent.clamp(0.0, 100.0) as u32
}

/// Non-zero sale price when present, else the original price.
///
/// Used for price-range filtering, price sorting, and order messages.
#[must_use]
pub fn effective_price(product: &Product) -> f64 {
    product.effective_price()
}
