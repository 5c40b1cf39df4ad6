//! Shared catalog fixtures for unit tests.

use crate::product::RawProduct;

/// Six products over three skin-type/category combinations.
pub(crate) fn skincare_records() -> Vec<RawProduct> {
    vec![
        RawProduct::new(
            "Oil Control Gel",
            "Water, Niacinamide, Zinc PCA, Salicylic Acid",
            "Oily Combination",
            "Moisturizers",
        )
        .with_brand("ClearLab")
        .with_price(28.0)
        .with_loves(5400),
        RawProduct::new(
            "Mattifying Lotion",
            "Water, Niacinamide, Zinc PCA, Silica",
            "Oily",
            "Moisturizers",
        )
        .with_brand("ClearLab")
        .with_price(31.0)
        .with_loves(12000),
        RawProduct::new(
            "Barrier Cream",
            "Ceramides, Shea Butter, Squalane, Glycerin",
            "Dry Normal",
            "Moisturizers",
        )
        .with_brand("Dermaveil")
        .with_price(45.0)
        .with_loves(12000),
        RawProduct::new(
            "Rich Night Balm",
            "Shea Butter, Squalane, Ceramides, Peptides",
            "Dry",
            "Night Creams",
        )
        .with_brand("Dermaveil")
        .with_price(62.0)
        .with_loves(800),
        RawProduct::new(
            "Gentle Foam",
            "Water, Glycerin, Coco Glucoside",
            "Sensitive Normal",
            "Cleansers",
        )
        .with_brand("Puremist")
        .with_price(18.0)
        .with_loves(3000),
        RawProduct::new(
            "Clarifying Wash",
            "Water, Salicylic Acid, Coco Glucoside",
            "Oily",
            "Cleansers",
        )
        .with_brand("ClearLab")
        .with_price(22.0)
        .with_loves(0),
    ]
}
