//! Raw product document shapes from the CMS content API.
//!
//! ## Observed shape from the live content API
//!
//! ### `category`
//! Depends entirely on the relationship depth the caller fetched with:
//! a bare document id string at depth 0, an expanded `{id, title}` object
//! at depth >= 1, or an array of either for multi-category products.
//! Absent and `null` also occur on old documents. [`CategoryField`] and
//! [`CategoryRef`] model the union once; resolution to display names
//! happens in [`crate::normalize`], with no shape sniffing anywhere else.
//!
//! ### `colorVariants`
//! Newer documents carry one entry per colorway with a per-size
//! `inventory` array. Documents from before inventory tracking have a
//! flat `sizes` list and an explicit `inStock` flag instead, and the
//! oldest ones have no `colorVariants` at all, only the legacy top-level
//! `images`/`sizes`/`inStock` fields, which normalization folds into a
//! single synthetic variant.
//!
//! ### Images
//! Media relationships arrive as expanded objects (`{"url": ..., "alt":
//! ...}`) at depth >= 1 and as bare id strings below that. Legacy
//! documents also store direct asset paths as plain strings, so a bare
//! string is passed through as a path; only expanded media objects
//! without a `url` are treated as unresolvable.
//!
//! ### `description`
//! A structured rich-text document (`{"content": [...]}`). Text is
//! carried on the nodes themselves; nested block structure exists but is
//! not modelled here because normalization flattens to plain text (see
//! [`crate::richtext`]).
//!
//! ### `price` / `originalPrice`
//! Whole rupiah amounts as JSON numbers. `originalPrice` is present only
//! while a sale runs.

use serde::Deserialize;

/// A single product document, as returned by the content API listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductRecord {
    /// CMS document id. Defaults to empty on malformed documents rather
    /// than failing the whole listing.
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// URL slug. May be absent on drafts; normalization generates one
    /// from the name.
    #[serde(default)]
    pub slug: String,

    /// Category relationship in any of its observed shapes.
    #[serde(default)]
    pub category: Option<CategoryField>,

    /// Price in whole rupiah. Absent on unpriced drafts; normalized to 0.
    #[serde(default)]
    pub price: Option<f64>,

    /// Pre-sale price, set only while the product is discounted.
    #[serde(default)]
    pub original_price: Option<f64>,

    #[serde(default)]
    pub color_variants: Vec<RawColorVariant>,

    /// Legacy top-level gallery, kept for documents without variants.
    #[serde(default)]
    pub images: Vec<RawImage>,

    /// Legacy top-level size list, kept for documents without variants.
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Legacy top-level stock flag, kept for documents without variants.
    #[serde(default)]
    pub in_stock: Option<bool>,

    /// Merchandising tag, e.g. `"SALE"` or `"NEW"`. May be an empty
    /// string; normalized to absent.
    #[serde(default)]
    pub tag: Option<String>,

    #[serde(default)]
    pub featured: bool,

    /// Structured rich-text description.
    #[serde(default)]
    pub description: Option<RichText>,

    /// Bullet-point feature list.
    #[serde(default)]
    pub features: Vec<String>,
}

/// The `category` relationship in every shape the content API emits.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    One(CategoryRef),
    Many(Vec<CategoryRef>),
}

impl CategoryField {
    /// Uniform slice view over the single/array split.
    #[must_use]
    pub fn refs(&self) -> &[CategoryRef] {
        match self {
            CategoryField::One(one) => std::slice::from_ref(one),
            CategoryField::Many(many) => many,
        }
    }
}

/// One category relationship entry: the expanded document, or just its id
/// when the caller fetched below the depth that expands relationships.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Resolved(RawCategory),
    Unresolved(String),
}

impl CategoryRef {
    /// Display title, when this entry was expanded and carries a
    /// non-empty one. An unresolved id has no display name.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            CategoryRef::Resolved(doc) => doc.title.as_deref().filter(|t| !t.is_empty()),
            CategoryRef::Unresolved(_) => None,
        }
    }
}

/// An expanded category document.
#[derive(Debug, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// One colorway of a product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawColorVariant {
    /// Color display name, e.g. `"Midnight Navy"`.
    #[serde(default)]
    pub color: String,

    /// Hex swatch, e.g. `"#1A2B3C"`.
    #[serde(default)]
    pub hex: String,

    /// Ordered image gallery for this colorway.
    #[serde(default)]
    pub images: Vec<RawImage>,

    /// Per-size stock counts. `None` on documents from before inventory
    /// tracking; [`sizes`](Self::sizes) and [`in_stock`](Self::in_stock)
    /// are the fallback then.
    #[serde(default)]
    pub inventory: Option<Vec<RawInventoryEntry>>,

    /// Flat size list for documents without an inventory array.
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Explicit stock flag for documents without an inventory array.
    #[serde(default)]
    pub in_stock: Option<bool>,
}

/// Stock count for one size of one colorway.
#[derive(Debug, Deserialize)]
pub struct RawInventoryEntry {
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub stock: i64,
}

/// A product image: an expanded media document, or a plain string that is
/// either a direct asset path (legacy documents) or an unexpanded media
/// id (shallow fetches). Plain strings are passed through as paths; the
/// two cases are not distinguishable at this layer.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawImage {
    Media(RawMedia),
    Path(String),
}

impl RawImage {
    /// Usable image path, if this entry resolves to one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            RawImage::Media(media) => media.url.as_deref().filter(|u| !u.is_empty()),
            RawImage::Path(path) => {
                if path.is_empty() {
                    None
                } else {
                    Some(path)
                }
            }
        }
    }
}

/// An expanded media document.
#[derive(Debug, Deserialize)]
pub struct RawMedia {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A structured rich-text description document.
#[derive(Debug, Default, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub content: Vec<RichTextNode>,
}

/// One top-level node of a rich-text document. Only the directly carried
/// text matters to this core; nested structure is dropped at flattening.
#[derive(Debug, Deserialize)]
pub struct RichTextNode {
    #[serde(default)]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_deserializes_from_bare_id() {
        let record: RawProductRecord =
            serde_json::from_str(r#"{"id": "p1", "category": "66f1ab0c"}"#).unwrap();
        let field = record.category.expect("category should parse");
        assert!(matches!(
            field.refs(),
            [CategoryRef::Unresolved(id)] if id == "66f1ab0c"
        ));
    }

    #[test]
    fn category_deserializes_from_expanded_object() {
        let record: RawProductRecord = serde_json::from_str(
            r#"{"id": "p1", "category": {"id": "c1", "title": "Shoes"}}"#,
        )
        .unwrap();
        let field = record.category.expect("category should parse");
        assert_eq!(field.refs()[0].title(), Some("Shoes"));
    }

    #[test]
    fn category_deserializes_from_mixed_array() {
        let record: RawProductRecord = serde_json::from_str(
            r#"{"id": "p1", "category": [{"title": "Shoes"}, "66f1ab0c"]}"#,
        )
        .unwrap();
        let field = record.category.expect("category should parse");
        assert_eq!(field.refs().len(), 2);
        assert_eq!(field.refs()[0].title(), Some("Shoes"));
        assert_eq!(field.refs()[1].title(), None);
    }

    #[test]
    fn category_null_is_absent() {
        let record: RawProductRecord =
            serde_json::from_str(r#"{"id": "p1", "category": null}"#).unwrap();
        assert!(record.category.is_none());
    }

    #[test]
    fn expanded_category_without_title_has_no_name() {
        let record: RawProductRecord =
            serde_json::from_str(r#"{"id": "p1", "category": {"id": "c1"}}"#).unwrap();
        let field = record.category.expect("category should parse");
        assert_eq!(field.refs()[0].title(), None);
    }

    #[test]
    fn image_deserializes_from_plain_path() {
        let record: RawProductRecord =
            serde_json::from_str(r#"{"id": "p1", "images": ["a.jpg"]}"#).unwrap();
        assert_eq!(record.images[0].url(), Some("a.jpg"));
    }

    #[test]
    fn image_deserializes_from_media_object() {
        let record: RawProductRecord = serde_json::from_str(
            r#"{"id": "p1", "images": [{"url": "/media/a.jpg", "alt": "front"}]}"#,
        )
        .unwrap();
        assert_eq!(record.images[0].url(), Some("/media/a.jpg"));
    }

    #[test]
    fn media_without_url_does_not_resolve() {
        let record: RawProductRecord =
            serde_json::from_str(r#"{"id": "p1", "images": [{"alt": "front"}]}"#).unwrap();
        assert_eq!(record.images[0].url(), None);
    }

    #[test]
    fn sparse_document_deserializes_with_defaults() {
        let record: RawProductRecord = serde_json::from_str(r"{}").unwrap();
        assert!(record.id.is_empty());
        assert!(record.category.is_none());
        assert!(record.price.is_none());
        assert!(record.color_variants.is_empty());
        assert!(!record.featured);
    }

    #[test]
    fn variant_inventory_deserializes() {
        let record: RawProductRecord = serde_json::from_str(
            r##"{
                "id": "p1",
                "colorVariants": [{
                    "color": "Midnight Navy",
                    "hex": "#1A2B3C",
                    "inventory": [{"size": "M", "stock": 3}, {"size": "L", "stock": 0}]
                }]
            }"##,
        )
        .unwrap();
        let inventory = record.color_variants[0]
            .inventory
            .as_ref()
            .expect("inventory should parse");
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[0].size, "M");
        assert_eq!(inventory[0].stock, 3);
        assert_eq!(inventory[1].stock, 0);
    }
}
