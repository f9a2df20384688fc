//! Right join of ledger facts onto the completed universe

use std::collections::HashMap;

use crate::models::{JoinedRecord, TransactionFact, UniverseRow};

/// Join facts onto every universe row, matching on all seven key attributes
///
/// Every universe row appears at least once. Rows with several matching facts
/// appear once per fact; rows with none appear once with no measures. Output
/// follows universe order, then fact order within a row.
pub fn join_facts(facts: &[TransactionFact], universe: &[UniverseRow]) -> Vec<JoinedRecord> {
    let mut by_key: HashMap<UniverseRow, Vec<&TransactionFact>> = HashMap::new();
    for fact in facts {
        let key = UniverseRow {
            dimension: fact.dimension.clone(),
            store: fact.store.clone(),
        };
        by_key.entry(key).or_default().push(fact);
    }

    let mut joined = Vec::with_capacity(universe.len().max(facts.len()));
    for row in universe {
        match by_key.get(row) {
            Some(matches) => joined.extend(
                matches
                    .iter()
                    .map(|fact| JoinedRecord::matched(row.clone(), fact)),
            ),
            None => joined.push(JoinedRecord::empty(row.clone())),
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DimensionTuple;
    use crate::pipeline::complete_universe;
    use crate::types::NormalizedDate;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn fact(product: &str, store: &str, quantity: i64, day: u32) -> TransactionFact {
        TransactionFact {
            dimension: DimensionTuple {
                product_id: product.to_string(),
                product_line_code: "PL".to_string(),
                name: "name".to_string(),
                code: "code".to_string(),
                color: "Red".to_string(),
                category: "Bags".to_string(),
            },
            store: store.to_string(),
            date: NormalizedDate::Known(NaiveDate::from_ymd_opt(2024, 5, day).unwrap()),
            total_quantity: Some(Decimal::from(quantity)),
            total_inventory: Some(Decimal::from(10)),
        }
    }

    #[test]
    fn test_join_keeps_every_match() {
        let facts = vec![fact("P1", "North", 2, 1), fact("P1", "North", 3, 2)];
        let universe = complete_universe(&facts);
        let joined = join_facts(&facts, &universe);

        assert_eq!(universe.len(), 1);
        assert_eq!(joined.len(), 2);
        let total: Decimal = joined.iter().map(JoinedRecord::quantity_or_zero).sum();
        assert_eq!(total, Decimal::from(5));
    }

    #[test]
    fn test_join_fills_missing_combinations() {
        let facts = vec![fact("P1", "North", 2, 1), fact("P2", "South", 4, 1)];
        let universe = complete_universe(&facts);
        let joined = join_facts(&facts, &universe);

        assert_eq!(joined.len(), 4);
        let empty: Vec<_> = joined.iter().filter(|r| !r.has_measures()).collect();
        assert_eq!(empty.len(), 2);
        assert!(empty.iter().all(|r| r.date.is_unknown()));
        assert!(empty
            .iter()
            .any(|r| r.product_id() == "P1" && r.store() == "South"));
    }
}
