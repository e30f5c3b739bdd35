//! Orderings offered on the product listing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Product;

/// Listing order selected by the shopper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Most recently created first.
    #[default]
    Newest,
    /// Cheapest effective price first.
    PriceLow,
    /// Most expensive effective price first.
    PriceHigh,
    /// Highest rating first.
    Rating,
}

/// Sort `products` in place. The sort is stable, so ties keep their
/// catalogue order.
///
/// # Examples
/// ```
/// use storefront::{Product, SortOption, sort_products};
///
/// let mut products: Vec<&Product> = Vec::new();
/// sort_products(&mut products, SortOption::PriceLow);
/// assert!(products.is_empty());
/// ```
pub fn sort_products(products: &mut [&Product], option: SortOption) {
    match option {
        SortOption::Newest => products.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        SortOption::PriceLow => {
            products.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()));
        }
        SortOption::PriceHigh => {
            products.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()));
        }
        SortOption::Rating => products.sort_by(|a, b| descending(a.rating(), b.rating())),
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
