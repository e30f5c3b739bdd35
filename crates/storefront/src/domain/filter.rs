//! Catalogue filter engine.
//!
//! Derives the visible subset of the catalogue from the full product list and
//! a [`FilterSpec`]. Derivation is pure and cheap enough to rerun on every
//! input change; nothing is indexed or cached here.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::Product;

/// Upper price bound used until the shopper narrows the range.
pub const DEFAULT_MAX_PRICE: f64 = 100_000.0;

/// Products shown in the landing page's featured strip.
pub const FEATURED_STRIP_LEN: usize = 4;

/// Shopper-controlled constraints narrowing the catalogue.
///
/// Empty strings and `false` gates impose no constraint. The price range is
/// inclusive and always applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Exact, case-sensitive category; empty matches every category.
    pub category: String,
    /// Inclusive lower bound on the effective price.
    pub min_price: f64,
    /// Inclusive upper bound on the effective price.
    pub max_price: f64,
    /// Keep only products with stock on hand.
    pub in_stock: bool,
    /// Keep only featured products.
    pub featured: bool,
    /// Case-insensitive substring matched against name and description.
    pub search: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            category: String::new(),
            min_price: 0.0,
            max_price: DEFAULT_MAX_PRICE,
            in_stock: false,
            featured: false,
            search: String::new(),
        }
    }
}

impl FilterSpec {
    /// Build the initial specification from a navigation query string.
    ///
    /// `category` is taken verbatim and `featured` is enabled only by the
    /// literal value `true`. Every other field keeps its default.
    ///
    /// # Examples
    /// ```
    /// use storefront::FilterSpec;
    ///
    /// let spec = FilterSpec::from_query("?category=Home%20Decor&featured=true");
    /// assert_eq!(spec.category, "Home Decor");
    /// assert!(spec.featured);
    /// assert!(!FilterSpec::from_query("featured=yes").featured);
    /// ```
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut spec = Self::default();
        spec.apply_navigation(query);
        spec
    }

    /// Refresh the navigation-driven fields after the query string changes.
    ///
    /// Only `category` and `featured` follow navigation; search text, stock
    /// gate, and price range stay as the shopper left them.
    pub fn apply_navigation(&mut self, query: &str) {
        let pairs = query.strip_prefix('?').unwrap_or(query);
        let mut category = None;
        let mut featured = None;
        for (key, value) in form_urlencoded::parse(pairs.as_bytes()) {
            match key.as_ref() {
                "category" if category.is_none() => category = Some(value.into_owned()),
                "featured" if featured.is_none() => featured = Some(value == "true"),
                _ => {}
            }
        }
        self.category = category.unwrap_or_default();
        self.featured = featured.unwrap_or(false);
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category.is_empty() || product.category() == self.category
    }

    fn matches_price(&self, product: &Product) -> bool {
        let price = product.effective_price();
        price >= self.min_price && price <= self.max_price
    }
}

/// Narrow `products` to the subset visible under `spec`.
///
/// Predicates run in a fixed order: inactive products are always dropped,
/// then category, search text, featured gate, stock gate, and finally the
/// effective-price range. Input order is preserved.
///
/// # Examples
/// ```
/// use storefront::{FilterSpec, Product, filter_products};
///
/// let products: Vec<Product> = Vec::new();
/// assert!(filter_products(&products, &FilterSpec::default()).is_empty());
/// ```
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], spec: &FilterSpec) -> Vec<&'a Product> {
    let query = spec.search.to_lowercase();
    products
        .iter()
        .filter(|product| product.active())
        .filter(|product| spec.matches_category(product))
        .filter(|product| query.is_empty() || matches_search(product, &query))
        .filter(|product| !spec.featured || product.featured())
        .filter(|product| !spec.in_stock || product.in_stock())
        .filter(|product| spec.matches_price(product))
        .collect()
}

/// Active, featured products in stored order, at most `limit` of them.
#[must_use]
pub fn featured_products(products: &[Product], limit: usize) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.featured() && product.active())
        .take(limit)
        .collect()
}

fn matches_search(product: &Product, lowered_query: &str) -> bool {
    product.name().to_lowercase().contains(lowered_query)
        || product
            .description()
            .is_some_and(|description| description.to_lowercase().contains(lowered_query))
}
