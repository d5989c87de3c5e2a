//! Normalization from raw CMS documents to [`ProductViewModel`].
//!
//! Price and description formatting are delegated to [`crate::price`] and
//! [`crate::richtext`]; this module owns structural conversion: category
//! resolution, variant resolution, and cross-variant aggregation. The
//! conversion is total: every missing or malformed field falls back to a
//! documented default so the result is always renderable.

use std::collections::HashSet;

use toko_core::{ColorOption, ColorVariant, ProductViewModel};

use crate::price::format_price;
use crate::richtext;
use crate::types::{CategoryField, RawColorVariant, RawImage, RawProductRecord};

/// Category label used when no category reference resolves to a title.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Image path served when a product has no resolvable image anywhere.
pub const PLACEHOLDER_IMAGE: &str = "/images/product-placeholder.jpg";

/// Normalizes one raw CMS document into a render-ready view model.
///
/// Field defaults: missing category → [`UNCATEGORIZED`], missing price →
/// `0` (formatted accordingly), no resolvable image → [`PLACEHOLDER_IMAGE`],
/// no color variants → one synthetic variant built from the legacy
/// top-level fields.
#[must_use]
pub fn normalize_product(record: RawProductRecord) -> ProductViewModel {
    let categories = resolve_categories(record.category.as_ref(), &record.id);
    let category = categories[0].clone();

    // A document without color variants still yields exactly one variant,
    // synthesized from the legacy top-level fields, so aggregation and
    // rendering never special-case the empty list.
    let variants: Vec<ColorVariant> = if record.color_variants.is_empty() {
        tracing::debug!(
            product = %record.id,
            "document has no color variants, synthesizing one from legacy fields"
        );
        vec![synthetic_variant(&record)]
    } else {
        record.color_variants.iter().map(resolve_variant).collect()
    };

    let colors = aggregate_colors(&variants);
    let sizes = aggregate_sizes(&variants, &record.sizes);
    let in_stock = variants.iter().any(|v| v.in_stock);

    // The first variant is the storefront default; its gallery is the
    // product-level gallery.
    let images = variants
        .first()
        .map(|v| v.images.clone())
        .unwrap_or_default();
    let image = images.first().cloned().unwrap_or_else(|| {
        tracing::debug!(product = %record.id, "no resolvable image, using placeholder");
        PLACEHOLDER_IMAGE.to_string()
    });

    let price = record.price.unwrap_or(0.0);
    let price_display = format_price(price);
    let original_price = record.original_price;
    let original_price_display = original_price.map(format_price);

    let slug = if record.slug.is_empty() {
        slugify(&record.name)
    } else {
        record.slug
    };

    let description = record
        .description
        .as_ref()
        .map(richtext::flatten)
        .unwrap_or_default();

    ProductViewModel {
        id: record.id,
        name: record.name,
        slug,
        category,
        categories,
        price,
        price_display,
        original_price,
        original_price_display,
        image,
        images,
        variants,
        colors,
        sizes,
        tag: record.tag.filter(|t| !t.is_empty()),
        in_stock,
        featured: record.featured,
        description,
        features: record.features,
    }
}

/// Normalizes a full listing in one pass.
#[must_use]
pub fn normalize_products(records: Vec<RawProductRecord>) -> Vec<ProductViewModel> {
    let count = records.len();
    let models: Vec<ProductViewModel> = records.into_iter().map(normalize_product).collect();
    tracing::debug!(products = count, "normalized product listing");
    models
}

/// Resolves the category relationship to a non-empty list of display
/// names.
///
/// Entries that carry no title (bare ids from shallow fetches, expanded
/// documents without one) fall back to [`UNCATEGORIZED`] individually,
/// and the list is deduplicated in order, so an empty or all-unresolved
/// relationship collapses to the single default label.
fn resolve_categories(field: Option<&CategoryField>, product_id: &str) -> Vec<String> {
    let refs = field.map(CategoryField::refs).unwrap_or_default();

    let mut seen = HashSet::new();
    let mut names: Vec<String> = Vec::new();
    for category_ref in refs {
        let name = category_ref.title().unwrap_or(UNCATEGORIZED);
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        names.push(UNCATEGORIZED.to_string());
    }
    if names[0] == UNCATEGORIZED {
        // An unexpanded reference and a genuinely uncategorized product
        // are indistinguishable here; both land on the default label.
        tracing::debug!(product = %product_id, "category did not resolve, defaulting");
    }

    names
}

/// Resolves one colorway: which sizes are purchasable and whether the
/// variant is in stock.
fn resolve_variant(raw: &RawColorVariant) -> ColorVariant {
    let (sizes, in_stock) = match raw.inventory.as_ref() {
        // Inventory-tracked variant: a size is purchasable iff its stock
        // count is strictly positive, and the variant is in stock iff any
        // size is. The explicit flag is ignored when inventory exists.
        Some(entries) => {
            let sizes: Vec<String> = entries
                .iter()
                .filter(|entry| entry.stock > 0)
                .map(|entry| entry.size.clone())
                .collect();
            let in_stock = !sizes.is_empty();
            (sizes, in_stock)
        }
        // No inventory array at all: every listed size is treated as
        // available and the explicit flag decides stock, defaulting to
        // available.
        None => (raw.sizes.clone(), raw.in_stock.unwrap_or(true)),
    };

    ColorVariant {
        name: raw.color.clone(),
        hex: raw.hex.clone(),
        images: resolve_images(&raw.images),
        sizes,
        in_stock,
    }
}

/// Builds the single implicit variant for documents that predate color
/// variants, from the legacy top-level image/size/stock fields. It
/// carries no color name or swatch.
fn synthetic_variant(record: &RawProductRecord) -> ColorVariant {
    ColorVariant {
        name: String::new(),
        hex: String::new(),
        images: resolve_images(&record.images),
        sizes: record.sizes.clone(),
        in_stock: record.in_stock.unwrap_or(true),
    }
}

fn resolve_images(images: &[RawImage]) -> Vec<String> {
    images
        .iter()
        .filter_map(RawImage::url)
        .map(ToString::to_string)
        .collect()
}

/// One swatch per distinct hex across variants, in variant order. The
/// synthetic legacy variant carries no swatch and contributes nothing.
fn aggregate_colors(variants: &[ColorVariant]) -> Vec<ColorOption> {
    let mut seen = HashSet::new();
    let mut colors = Vec::new();
    for variant in variants {
        if variant.name.is_empty() && variant.hex.is_empty() {
            continue;
        }
        if seen.insert(variant.hex.clone()) {
            colors.push(ColorOption {
                name: variant.name.clone(),
                hex: variant.hex.clone(),
            });
        }
    }
    colors
}

/// Ordered, deduplicated union of purchasable sizes across variants.
///
/// An empty union (everything sold out, or no per-variant size data)
/// falls back to the legacy top-level list.
fn aggregate_sizes(variants: &[ColorVariant], legacy: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sizes: Vec<String> = Vec::new();
    for variant in variants {
        for size in &variant.sizes {
            if seen.insert(size.clone()) {
                sizes.push(size.clone());
            }
        }
    }

    if sizes.is_empty() {
        for size in legacy {
            if seen.insert(size.clone()) {
                sizes.push(size.clone());
            }
        }
    }

    sizes
}

/// Generates a URL-safe slug from the product name, for documents whose
/// slug field is empty.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else if c == ' ' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
