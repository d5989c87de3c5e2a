//! Deterministic product-similarity scoring.
//!
//! Terms are additive and computed independently of each other; the
//! weights below are merchandising-tuned and intentionally coarse. The
//! score is symmetric: `similarity_score(a, b) == similarity_score(b, a)`
//! for all inputs.

use std::collections::HashSet;

use toko_core::ProductViewModel;

/// Points when both primary category names match.
pub const PRIMARY_CATEGORY_POINTS: u32 = 50;

/// Points per category name shared across the full lists, beyond the one
/// already counted as a primary match.
pub const SHARED_CATEGORY_POINTS: u32 = 15;

/// Price-proximity tiers as `(max percentage difference, points)`. Only
/// the single best-matching tier is awarded, tightest first.
pub const PRICE_TIERS: [(f64, u32); 3] = [(10.0, 20), (20.0, 15), (30.0, 10)];

/// Points when both products carry the same tag.
pub const SAME_TAG_POINTS: u32 = 10;

/// Points per color shared by exact hex code.
pub const SHARED_COLOR_POINTS: u32 = 5;

/// Points per size shared by exact label.
pub const SHARED_SIZE_POINTS: u32 = 3;

/// Points when both products have the same featured flag.
pub const FEATURED_PARITY_POINTS: u32 = 5;

/// Scores how related two products are.
///
/// Pure and deterministic; see the term constants above for the exact
/// weights. A malformed numeric field (non-finite price) zeroes the
/// affected term only, so one bad document cannot poison a whole
/// recommendation pass.
#[must_use]
pub fn similarity_score(a: &ProductViewModel, b: &ProductViewModel) -> u32 {
    let mut score = 0;

    if a.category == b.category {
        score += PRIMARY_CATEGORY_POINTS;
    }
    score += shared_category_count(a, b) * SHARED_CATEGORY_POINTS;
    score += price_proximity_points(a.price, b.price);

    if let (Some(a_tag), Some(b_tag)) = (a.tag.as_deref(), b.tag.as_deref()) {
        if a_tag == b_tag {
            score += SAME_TAG_POINTS;
        }
    }

    score += shared_count(
        a.colors.iter().map(|c| c.hex.as_str()),
        b.colors.iter().map(|c| c.hex.as_str()),
    ) * SHARED_COLOR_POINTS;
    score += shared_count(
        a.sizes.iter().map(String::as_str),
        b.sizes.iter().map(String::as_str),
    ) * SHARED_SIZE_POINTS;

    if a.featured == b.featured {
        score += FEATURED_PARITY_POINTS;
    }

    score
}

/// Category names shared across the full lists, minus the name already
/// counted as a primary match. Computed over sets, symmetrically.
fn shared_category_count(a: &ProductViewModel, b: &ProductViewModel) -> u32 {
    let a_names: HashSet<&str> = a.categories.iter().map(String::as_str).collect();
    let b_names: HashSet<&str> = b.categories.iter().map(String::as_str).collect();
    let mut shared = a_names.intersection(&b_names).count();

    if a.category == b.category
        && a_names.contains(a.category.as_str())
        && b_names.contains(a.category.as_str())
    {
        shared -= 1;
    }

    u32::try_from(shared).unwrap_or(u32::MAX)
}

/// Values present on both sides, counted over sets so duplicates cannot
/// double-count.
fn shared_count<'a>(
    left: impl Iterator<Item = &'a str>,
    right: impl Iterator<Item = &'a str>,
) -> u32 {
    let left: HashSet<&str> = left.collect();
    let right: HashSet<&str> = right.collect();
    u32::try_from(left.intersection(&right).count()).unwrap_or(u32::MAX)
}

/// Price-proximity bonus: percentage difference relative to the mean of
/// the two prices, awarded from the single best-matching tier only.
fn price_proximity_points(a: f64, b: f64) -> u32 {
    if !a.is_finite() || !b.is_finite() {
        return 0;
    }

    let mean = (a + b) / 2.0;
    let diff_pct = ((a - b).abs() / mean) * 100.0;
    if !diff_pct.is_finite() {
        // Two zero prices divide zero by zero; no meaningful proximity.
        return 0;
    }

    for (max_pct, points) in PRICE_TIERS {
        if diff_pct <= max_pct {
            return points;
        }
    }
    0
}
