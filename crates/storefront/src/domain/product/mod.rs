//! Product entity, submission draft, and identifier.
//!
//! A [`Product`] is the only persisted entity. Owner writes arrive as a
//! [`ProductDraft`] whose fields mirror the edit form, so any of them may be
//! missing; [`Product::new`] validates the draft and derives the discount.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pricing::{active_sale_price, discount_percent};

mod validation;

#[cfg(test)]
mod tests;

use validation::{ensure_price, validate_name};

/// Validation errors returned when a draft cannot become a [`Product`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProductValidationError {
    /// Identifier was empty or blank.
    EmptyId,
    /// Name was absent or blank once trimmed.
    MissingName,
    /// Price was absent.
    MissingPrice,
    /// A price field was negative or not a finite number.
    InvalidPrice {
        /// Wire name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "product id must not be empty"),
            Self::MissingName => write!(f, "product name is required"),
            Self::MissingPrice => write!(f, "product price is required"),
            Self::InvalidPrice { field, value } => {
                write!(f, "{field} must be a non-negative number (got {value})")
            }
        }
    }
}

impl std::error::Error for ProductValidationError {}

/// Opaque product identifier.
///
/// Seeded products use short numeric strings; products created through the
/// store receive a UUID v4 rendered as text. Any non-blank string is accepted.
///
/// # Examples
/// ```
/// use storefront::ProductId;
///
/// let id = ProductId::new("42").unwrap();
/// assert_eq!(id.as_ref(), "42");
/// assert!(ProductId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Validate and construct a [`ProductId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ProductValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a fresh globally unique identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, ProductValidationError> {
        if id.trim().is_empty() {
            return Err(ProductValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = ProductValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Owner-submitted product record.
///
/// Every field the edit form may leave blank is optional. Saving a draft is a
/// full replace: anything left out here is absent from the stored record.
/// `discount_percent` is accepted for wire compatibility but always
/// recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    /// Identifier; blank or absent means "create".
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Long-form description.
    pub description: Option<String>,
    /// Original price.
    pub price: Option<f64>,
    /// Discounted price, if on sale.
    pub sale_price: Option<f64>,
    /// Caller-supplied discount; ignored on save.
    pub discount_percent: Option<u32>,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Additional gallery image URLs.
    pub images: Option<Vec<String>>,
    /// Category label.
    pub category: String,
    /// Units available.
    pub stock: u32,
    /// Storefront visibility; absent coerces to `false`.
    pub active: Option<bool>,
    /// Promotional placement; absent coerces to `false`.
    pub featured: Option<bool>,
    /// Display rating.
    pub rating: f64,
    /// Display review count.
    pub review_count: u32,
    /// Free-form tags.
    pub tags: Option<Vec<String>>,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: Option<i64>,
}

impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id.into()),
            name: Some(product.name),
            description: product.description,
            price: Some(product.price),
            sale_price: product.sale_price,
            discount_percent: Some(product.discount_percent),
            image_url: product.image_url,
            images: product.images,
            category: product.category,
            stock: product.stock,
            active: Some(product.active),
            featured: Some(product.featured),
            rating: product.rating,
            review_count: product.review_count,
            tags: product.tags,
            created_at: Some(product.created_at),
        }
    }
}

/// A catalogue product as persisted by the store.
///
/// ## Invariants
/// - `name` is non-blank and `price` is a finite, non-negative number.
/// - `discount_percent` agrees with `price` and `sale_price`.
/// - `created_at` never changes once the product is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sale_price: Option<f64>,
    #[serde(default)]
    discount_percent: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    images: Option<Vec<String>>,
    category: String,
    #[serde(default)]
    stock: u32,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    created_at: i64,
}

impl Product {
    /// Validate a draft and build the record stored under `id`.
    ///
    /// The draft's own `id` and `created_at` are ignored in favour of the
    /// arguments; the discount is derived and the visibility flags coerced.
    ///
    /// # Examples
    /// ```
    /// use storefront::{Product, ProductDraft, ProductId};
    ///
    /// let draft = ProductDraft {
    ///     name: Some("Premium Leather Wallet".to_owned()),
    ///     price: Some(1499.0),
    ///     sale_price: Some(999.0),
    ///     category: "Accessories".to_owned(),
    ///     ..ProductDraft::default()
    /// };
    /// let product = Product::new(ProductId::new("1").unwrap(), 0, draft).unwrap();
    /// assert_eq!(product.discount_percent(), 33);
    /// assert!(!product.active());
    /// ```
    pub fn new(
        id: ProductId,
        created_at: i64,
        draft: ProductDraft,
    ) -> Result<Self, ProductValidationError> {
        let name = validate_name(draft.name)?;
        let price = draft.price.ok_or(ProductValidationError::MissingPrice)?;
        ensure_price(price, "price")?;
        if let Some(sale) = draft.sale_price {
            ensure_price(sale, "salePrice")?;
        }
        let sale_price = active_sale_price(draft.sale_price);

        Ok(Self {
            id,
            name,
            description: draft.description,
            price,
            sale_price,
            discount_percent: discount_percent(price, sale_price),
            image_url: draft.image_url,
            images: draft.images,
            category: draft.category,
            stock: draft.stock,
            active: draft.active.unwrap_or(false),
            featured: draft.featured.unwrap_or(false),
            rating: draft.rating,
            review_count: draft.review_count,
            tags: draft.tags,
            created_at,
        })
    }

    /// Stable identifier.
    pub fn id(&self) -> &ProductId {
        &self.id
    }
    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    /// Long-form description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    /// Original price.
    pub fn price(&self) -> f64 {
        self.price
    }
    /// Discounted price, if on sale.
    pub fn sale_price(&self) -> Option<f64> {
        self.sale_price
    }
    /// Derived discount in whole percent.
    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }
    /// Primary image URL, if any.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
    /// Additional gallery image URLs.
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }
    /// Category label.
    pub fn category(&self) -> &str {
        self.category.as_str()
    }
    /// Units available.
    pub fn stock(&self) -> u32 {
        self.stock
    }
    /// Whether the product is visible in the storefront.
    pub fn active(&self) -> bool {
        self.active
    }
    /// Whether the product is promoted.
    pub fn featured(&self) -> bool {
        self.featured
    }
    /// Display rating.
    pub fn rating(&self) -> f64 {
        self.rating
    }
    /// Display review count.
    pub fn review_count(&self) -> u32 {
        self.review_count
    }
    /// Free-form tags.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
    /// Creation timestamp in epoch milliseconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Price a shopper pays: the sale price when present and non-zero, else
    /// the price.
    pub fn effective_price(&self) -> f64 {
        active_sale_price(self.sale_price).unwrap_or(self.price)
    }

    /// Whether the product can currently be ordered.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
