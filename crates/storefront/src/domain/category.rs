//! Known product categories offered by the storefront navigation.

/// Categories the storefront offers in its pickers and navigation.
///
/// Product categories are free text; this list is advisory and nothing
/// rejects a product outside it.
pub const CATEGORIES: [&str; 6] = [
    "Electronics",
    "Fashion",
    "Home Decor",
    "Accessories",
    "Beauty",
    "Sports",
];

/// Returns `true` when `category` exactly matches a known category.
///
/// # Examples
/// ```
/// use storefront::is_known_category;
///
/// assert!(is_known_category("Home Decor"));
/// assert!(!is_known_category("home decor"));
/// ```
#[must_use]
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}
