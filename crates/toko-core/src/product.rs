use serde::{Deserialize, Serialize};

/// A product denormalized from its raw CMS document into a render-ready
/// shape, shared by the storefront pages and the related-products engine.
///
/// View models are built on demand per request and never persisted; two
/// view models describe the same product iff their [`id`](Self::id) fields
/// are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductViewModel {
    /// CMS document id, stored as a string exactly as the content API
    /// returns it.
    pub id: String,
    pub name: String,
    /// URL slug, e.g. `"zenith-runner-low"`. Generated from the name when
    /// the CMS document has none.
    pub slug: String,
    /// Primary category name; `"Uncategorized"` when no category
    /// reference resolved to a title.
    pub category: String,
    /// Every resolved category name, primary first, deduplicated.
    pub categories: Vec<String>,
    /// Price in whole rupiah; `0.0` when the CMS document has no price.
    pub price: f64,
    /// Display price, e.g. `"Rp 1.000.000"`.
    pub price_display: String,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<f64>,
    pub original_price_display: Option<String>,
    /// Primary image path. Never empty; the placeholder asset stands in
    /// when no image resolves anywhere on the document.
    pub image: String,
    /// Image gallery of the default (first) variant.
    pub images: Vec<String>,
    /// Normalized color variants. Always at least one: documents without
    /// variants get a synthetic one built from their legacy fields.
    pub variants: Vec<ColorVariant>,
    /// One swatch per distinct hex across variants, in variant order.
    pub colors: Vec<ColorOption>,
    /// Union of purchasable sizes across variants, deduplicated, in
    /// first-occurrence order.
    pub sizes: Vec<String>,
    /// Merchandising tag, e.g. `"SALE"`. Empty tags are normalized away.
    pub tag: Option<String>,
    /// `true` iff at least one variant is in stock.
    pub in_stock: bool,
    pub featured: bool,
    /// Plain-text description flattened from the CMS rich-text document.
    pub description: String,
    pub features: Vec<String>,
}

impl ProductViewModel {
    /// Returns the number of color variants for this product.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` if at least one variant is currently purchasable.
    ///
    /// Equal to [`in_stock`](Self::in_stock) by construction; recomputed
    /// here so callers holding hand-built view models get the same answer.
    #[must_use]
    pub fn has_available_variants(&self) -> bool {
        self.variants.iter().any(|v| v.in_stock)
    }

    /// Returns the default variant (the first one), if present.
    #[must_use]
    pub fn default_variant(&self) -> Option<&ColorVariant> {
        self.variants.first()
    }

    /// Discount percentage rounded to the nearest whole percent, when the
    /// product is on sale (original price strictly above current price).
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if !original.is_finite() || !self.price.is_finite() {
            return None;
        }
        if original <= self.price || original <= 0.0 || self.price < 0.0 {
            return None;
        }
        // Ratio is in (0, 1], so the rounded percentage fits in [0, 100].
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = ((1.0 - self.price / original) * 100.0).round() as u32;
        Some(percent)
    }
}

/// One purchasable visual variant of a product: a color, its swatch, its
/// image gallery, and the sizes currently offered for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorVariant {
    /// Color display name, e.g. `"Midnight Navy"`. Empty on the synthetic
    /// variant built from legacy document fields.
    pub name: String,
    /// Hex swatch, e.g. `"#1A2B3C"`, compared verbatim by the similarity
    /// scorer.
    pub hex: String,
    pub images: Vec<String>,
    /// Purchasable size labels. Inventory-backed variants list only sizes
    /// with positive stock; flat-size variants list every size.
    pub sizes: Vec<String>,
    pub in_stock: bool,
}

/// A swatch entry in a product's aggregated color list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    pub hex: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_variant(hex: &str, in_stock: bool) -> ColorVariant {
        ColorVariant {
            name: "Midnight Navy".to_string(),
            hex: hex.to_string(),
            images: vec!["/media/navy-front.jpg".to_string()],
            sizes: vec!["M".to_string(), "L".to_string()],
            in_stock,
        }
    }

    fn make_product(variants: Vec<ColorVariant>) -> ProductViewModel {
        ProductViewModel {
            id: "prod-001".to_string(),
            name: "Zenith Runner Low".to_string(),
            slug: "zenith-runner-low".to_string(),
            category: "Shoes".to_string(),
            categories: vec!["Shoes".to_string()],
            price: 1_000_000.0,
            price_display: "Rp 1.000.000".to_string(),
            original_price: None,
            original_price_display: None,
            image: "/media/navy-front.jpg".to_string(),
            images: vec!["/media/navy-front.jpg".to_string()],
            variants,
            colors: vec![ColorOption {
                name: "Midnight Navy".to_string(),
                hex: "#1A2B3C".to_string(),
            }],
            sizes: vec!["M".to_string(), "L".to_string()],
            tag: Some("SALE".to_string()),
            in_stock: true,
            featured: false,
            description: "A light everyday runner.".to_string(),
            features: vec!["Knit upper".to_string()],
        }
    }

    #[test]
    fn variant_count_matches_variants_len() {
        let product = make_product(vec![
            make_variant("#1A2B3C", true),
            make_variant("#EEEEEE", false),
        ]);
        assert_eq!(product.variant_count(), 2);
    }

    #[test]
    fn has_available_variants_false_when_all_out_of_stock() {
        let product = make_product(vec![
            make_variant("#1A2B3C", false),
            make_variant("#EEEEEE", false),
        ]);
        assert!(!product.has_available_variants());
    }

    #[test]
    fn has_available_variants_true_when_any_in_stock() {
        let product = make_product(vec![
            make_variant("#1A2B3C", false),
            make_variant("#EEEEEE", true),
        ]);
        assert!(product.has_available_variants());
    }

    #[test]
    fn default_variant_is_the_first() {
        let product = make_product(vec![
            make_variant("#1A2B3C", true),
            make_variant("#EEEEEE", true),
        ]);
        let default = product.default_variant().expect("expected a variant");
        assert_eq!(default.hex, "#1A2B3C");
    }

    #[test]
    fn default_variant_none_when_empty() {
        let product = make_product(vec![]);
        assert!(product.default_variant().is_none());
    }

    #[test]
    fn discount_percent_none_without_original_price() {
        let product = make_product(vec![make_variant("#1A2B3C", true)]);
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn discount_percent_none_when_original_not_higher() {
        let mut product = make_product(vec![make_variant("#1A2B3C", true)]);
        product.original_price = Some(1_000_000.0);
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn discount_percent_rounds_to_nearest_whole() {
        let mut product = make_product(vec![make_variant("#1A2B3C", true)]);
        // 1.0M of 1.2M is a 16.67% cut.
        product.original_price = Some(1_200_000.0);
        assert_eq!(product.discount_percent(), Some(17));
    }

    #[test]
    fn discount_percent_none_for_non_finite_original() {
        let mut product = make_product(vec![make_variant("#1A2B3C", true)]);
        product.original_price = Some(f64::NAN);
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn serde_roundtrip_product() {
        let product = make_product(vec![make_variant("#1A2B3C", true)]);
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: ProductViewModel =
            serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.id, product.id);
        assert_eq!(decoded.category, product.category);
        assert_eq!(decoded.variants.len(), 1);
        assert_eq!(decoded.variants[0].hex, product.variants[0].hex);
    }
}
