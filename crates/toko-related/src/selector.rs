//! Related-products selection: deterministic ranking with tiered fill.

use std::collections::HashSet;

use toko_core::ProductViewModel;

use crate::scorer::similarity_score;

/// Selects up to `limit` products related to `anchor` from `pool`.
///
/// Every candidate (the pool minus the anchor, matched by id) is scored
/// with [`similarity_score`] and ranked descending; candidates with equal
/// scores keep their pool order (the sort is stable, and the determinism
/// contract depends on that). Score-positive candidates fill the list
/// first; remaining slots are filled from candidates sharing the anchor's
/// primary category, then from any leftover candidates, both in pool
/// order.
///
/// Guarantees, for any input: the anchor never appears in the output, ids
/// are unique, the length is `min(limit, pool minus anchor)`, and
/// identical inputs produce identical ordered output.
///
/// Scoring is `O(P)` and ranking `O(P log P)` in the pool size; the pool
/// must be fully materialized by the caller. Sized for catalogs in the
/// hundreds to low thousands; there is no indexing or pre-filtering
/// layer in front of it.
#[must_use]
pub fn select_related(
    anchor: &ProductViewModel,
    pool: &[ProductViewModel],
    limit: usize,
) -> Vec<ProductViewModel> {
    let candidates: Vec<&ProductViewModel> =
        pool.iter().filter(|p| p.id != anchor.id).collect();

    let mut ranked: Vec<(&ProductViewModel, u32)> = candidates
        .iter()
        .map(|&p| (p, similarity_score(anchor, p)))
        .collect();
    // Stable: equal scores keep pool order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut selected: Vec<&ProductViewModel> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for &(product, score) in &ranked {
        if selected.len() == limit || score == 0 {
            break;
        }
        if seen.insert(product.id.as_str()) {
            selected.push(product);
        }
    }

    let scored_in = selected.len();

    // Fill tier 1: same primary category as the anchor, pool order.
    fill(&mut selected, &mut seen, &candidates, limit, |p| {
        p.category == anchor.category
    });
    // Fill tier 2: anything still unselected, pool order.
    fill(&mut selected, &mut seen, &candidates, limit, |_| true);

    if selected.len() > scored_in {
        tracing::debug!(
            anchor = %anchor.id,
            filled = selected.len() - scored_in,
            "scoring left open slots, filled from fallback tiers"
        );
    }

    selected.into_iter().cloned().collect()
}

fn fill<'a, F>(
    selected: &mut Vec<&'a ProductViewModel>,
    seen: &mut HashSet<&'a str>,
    candidates: &[&'a ProductViewModel],
    limit: usize,
    keep: F,
) where
    F: Fn(&ProductViewModel) -> bool,
{
    for &product in candidates {
        if selected.len() == limit {
            return;
        }
        if keep(product) && seen.insert(product.id.as_str()) {
            selected.push(product);
        }
    }
}
