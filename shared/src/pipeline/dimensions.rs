//! Dimension completion: every product exists at every store

use std::collections::HashSet;
use std::hash::Hash;

use crate::models::{DimensionTuple, TransactionFact, UniverseRow};

/// Deduplicate while keeping first-appearance order
fn distinct_in_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Distinct dimension tuples observed anywhere in the ledger
pub fn distinct_dimensions(facts: &[TransactionFact]) -> Vec<DimensionTuple> {
    distinct_in_order(facts.iter().map(|f| f.dimension.clone()))
}

/// Distinct stores observed anywhere in the ledger
pub fn distinct_stores(facts: &[TransactionFact]) -> Vec<String> {
    distinct_in_order(facts.iter().map(|f| f.store.clone()))
}

/// Cartesian product of distinct dimension tuples and distinct stores
///
/// The result has exactly `|dimensions| x |stores|` rows. An empty ledger
/// yields an empty universe.
pub fn complete_universe(facts: &[TransactionFact]) -> Vec<UniverseRow> {
    let dimensions = distinct_dimensions(facts);
    let stores = distinct_stores(facts);

    dimensions
        .iter()
        .flat_map(|dimension| {
            stores.iter().map(move |store| UniverseRow {
                dimension: dimension.clone(),
                store: store.clone(),
            })
        })
        .collect()
}

/// Distinct values in first-appearance order, for dropdown lists
pub(crate) fn distinct_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    distinct_in_order(values).into_iter().map(String::from).collect()
}
