//! Product records and their display projections.
//!
//! A [`RawProduct`] is what a dataset loader hands over; it is validated into
//! an immutable [`Product`] when the catalog is built.

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// Unvalidated product record as read from the dataset.
///
/// Textual fields are optional so that a record with a missing value can be
/// reported with its row number instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    /// Unique product name
    #[serde(default)]
    pub product_name: Option<String>,
    /// Brand name
    #[serde(default)]
    pub brand_name: Option<String>,
    /// Price in US dollars
    #[serde(default)]
    pub price_usd: f64,
    /// Free-form ingredient list
    #[serde(default)]
    pub ingredients: Option<String>,
    /// Skin-type tags, e.g. "Oily Combination"
    #[serde(default)]
    pub combined_skin_type: Option<String>,
    /// Secondary category, e.g. "Moisturizers"
    #[serde(default)]
    pub secondary_category: Option<String>,
    /// Popularity counter
    #[serde(default)]
    pub loves_count: u64,
    /// Image reference
    #[serde(default)]
    pub image_link: Option<String>,
}

impl RawProduct {
    /// Creates a record with the fields the engine requires (builder pattern).
    #[must_use]
    pub fn new(name: &str, ingredients: &str, skin_type: &str, category: &str) -> Self {
        Self {
            product_name: Some(name.to_string()),
            ingredients: Some(ingredients.to_string()),
            combined_skin_type: Some(skin_type.to_string()),
            secondary_category: Some(category.to_string()),
            ..Self::default()
        }
    }

    /// Sets the brand name (builder pattern).
    #[must_use]
    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brand_name = Some(brand.to_string());
        self
    }

    /// Sets the price (builder pattern).
    #[must_use]
    pub fn with_price(mut self, price_usd: f64) -> Self {
        self.price_usd = price_usd;
        self
    }

    /// Sets the loves count (builder pattern).
    #[must_use]
    pub fn with_loves(mut self, loves_count: u64) -> Self {
        self.loves_count = loves_count;
        self
    }

    /// Sets the image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image_link: &str) -> Self {
        self.image_link = Some(image_link.to_string());
        self
    }
}

/// A validated catalog product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    brand: String,
    price_usd: f64,
    ingredients: String,
    skin_type: String,
    category: String,
    loves_count: u64,
    image_link: String,
}

/// Returns the trimmed-non-empty value of a required field.
fn required(
    value: Option<String>,
    row: usize,
    field: &'static str,
) -> Result<String, BuildError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(BuildError::MissingField { row, field }),
    }
}

impl Product {
    /// Validates a raw record found at position `row` of the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] if the name, ingredients,
    /// skin type or category is absent or blank.
    pub fn from_raw(row: usize, raw: RawProduct) -> Result<Self, BuildError> {
        Ok(Self {
            name: required(raw.product_name, row, "product_name")?,
            ingredients: required(raw.ingredients, row, "ingredients")?,
            skin_type: required(raw.combined_skin_type, row, "combined_skin_type")?,
            category: required(raw.secondary_category, row, "secondary_category")?,
            brand: raw.brand_name.unwrap_or_default(),
            price_usd: raw.price_usd,
            loves_count: raw.loves_count,
            image_link: raw.image_link.unwrap_or_default(),
        })
    }

    /// Text fed to the vectorizer: ingredients, skin type and category.
    #[must_use]
    pub fn document(&self) -> String {
        format!("{} {} {}", self.ingredients, self.skin_type, self.category)
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the brand name.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the price in US dollars.
    #[must_use]
    pub fn price_usd(&self) -> f64 {
        self.price_usd
    }

    /// Returns the ingredient list.
    #[must_use]
    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    /// Returns the combined skin-type tags.
    #[must_use]
    pub fn skin_type(&self) -> &str {
        &self.skin_type
    }

    /// Returns the secondary category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the popularity counter.
    #[must_use]
    pub fn loves_count(&self) -> u64 {
        self.loves_count
    }

    /// Returns the image reference.
    #[must_use]
    pub fn image_link(&self) -> &str {
        &self.image_link
    }

    /// Projects this product to the recommendation display fields.
    #[must_use]
    pub fn to_recommendation(&self, score: f32) -> Recommendation {
        Recommendation {
            product_name: self.name.clone(),
            ingredients: self.ingredients.clone(),
            combined_skin_type: self.skin_type.clone(),
            brand_name: self.brand.clone(),
            price_usd: self.price_usd,
            score,
        }
    }

    /// Projects this product to the landing-page fields.
    #[must_use]
    pub fn to_top_loved(&self) -> TopLovedEntry {
        TopLovedEntry {
            product_name: self.name.clone(),
            image_link: self.image_link.clone(),
            brand_name: self.brand.clone(),
            price_usd: self.price_usd,
            loves_count: self.loves_count,
        }
    }
}

/// A recommended product, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Product name
    pub product_name: String,
    /// Ingredient list
    pub ingredients: String,
    /// Skin-type tags
    pub combined_skin_type: String,
    /// Brand name
    pub brand_name: String,
    /// Price in US dollars
    pub price_usd: f64,
    /// Cosine similarity that ranked this product
    pub score: f32,
}

/// A product in the popularity listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLovedEntry {
    /// Product name
    pub product_name: String,
    /// Image reference
    pub image_link: String,
    /// Brand name
    pub brand_name: String,
    /// Price in US dollars
    pub price_usd: f64,
    /// Popularity counter
    pub loves_count: u64,
}
