//! Demand aggregation and reorder thresholds
//!
//! Average daily demand is kept as the exact ratio `quantity / days` and only
//! divided once per derived figure, so a threshold that lands on a whole
//! number is never rounded up past it.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{AggregateRow, DaysToStockout, JoinedRecord, ReorderHorizon};
use crate::types::DateSpan;

/// Demand expressed as a quantity over a number of days
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandRate {
    quantity: Decimal,
    days: Decimal,
}

impl DemandRate {
    pub fn new(quantity: Decimal, span: DateSpan) -> Self {
        Self {
            quantity,
            days: Decimal::from(span.days()),
        }
    }

    /// Rate from an already averaged daily demand
    pub fn daily(average: Decimal) -> Self {
        Self {
            quantity: average,
            days: Decimal::ONE,
        }
    }

    pub fn per_day(&self) -> Decimal {
        (self.quantity / self.days).normalize()
    }

    /// `ceil(avg x lead + avg x safety)` for the horizon
    pub fn reorder_quantity(&self, horizon: ReorderHorizon) -> Decimal {
        (self.quantity * horizon.cover_days() / self.days).ceil()
    }

    /// `ceil(inventory / avg)`, or not applicable when stock is not drawn down
    pub fn days_to_stockout(&self, inventory: Decimal) -> DaysToStockout {
        if self.quantity <= Decimal::ZERO {
            return DaysToStockout::NotApplicable;
        }
        DaysToStockout::Days((inventory * self.days / self.quantity).ceil())
    }
}

/// Grouping key for aggregation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct GroupKey<'a> {
    product_id: &'a str,
    product_line_code: &'a str,
    store: &'a str,
    color: &'a str,
}

#[derive(Debug, Default)]
struct GroupTotals {
    quantity: Decimal,
    max_inventory: Option<Decimal>,
}

/// Aggregate filtered records into one row per (product, product line, store, color)
///
/// Missing quantity and inventory count as zero. Rows come back sorted by key.
pub fn aggregate<'a, I>(records: I, span: DateSpan) -> Vec<AggregateRow>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    let mut groups: BTreeMap<GroupKey<'a>, GroupTotals> = BTreeMap::new();
    for record in records {
        let dimension = &record.universe.dimension;
        let key = GroupKey {
            product_id: &dimension.product_id,
            product_line_code: &dimension.product_line_code,
            store: &record.universe.store,
            color: &dimension.color,
        };
        let totals = groups.entry(key).or_default();
        totals.quantity += record.quantity_or_zero();
        let inventory = record.inventory_or_zero();
        totals.max_inventory = Some(totals.max_inventory.map_or(inventory, |m| m.max(inventory)));
    }

    groups
        .into_iter()
        .map(|(key, totals)| {
            let max_inventory = totals.max_inventory.unwrap_or(Decimal::ZERO);
            let demand = DemandRate::new(totals.quantity, span);
            AggregateRow {
                product_id: key.product_id.to_string(),
                product_line_code: key.product_line_code.to_string(),
                store: key.store.to_string(),
                color: key.color.to_string(),
                total_quantity: totals.quantity,
                max_inventory,
                average_daily_demand: demand.per_day(),
                days_to_stockout: demand.days_to_stockout(max_inventory),
                short_term_reorder: demand.reorder_quantity(ReorderHorizon::ShortTerm),
                medium_term_reorder: demand.reorder_quantity(ReorderHorizon::MediumTerm),
                long_term_reorder: demand.reorder_quantity(ReorderHorizon::LongTerm),
            }
        })
        .collect()
}

/// Sum of quantity over records, missing values as zero
pub fn total_quantity<'a, I>(records: I) -> Decimal
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    records.into_iter().map(JoinedRecord::quantity_or_zero).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DimensionTuple, UniverseRow};
    use crate::types::NormalizedDate;

    fn record(product: &str, store: &str, quantity: Option<i64>, inventory: Option<i64>) -> JoinedRecord {
        JoinedRecord {
            universe: UniverseRow {
                dimension: DimensionTuple {
                    product_id: product.to_string(),
                    product_line_code: "PL".to_string(),
                    name: "name".to_string(),
                    code: "code".to_string(),
                    color: "Red".to_string(),
                    category: "Bags".to_string(),
                },
                store: store.to_string(),
            },
            date: NormalizedDate::Unknown,
            total_quantity: quantity.map(Decimal::from),
            total_inventory: inventory.map(Decimal::from),
        }
    }

    #[test]
    fn test_reorder_worked_example() {
        let demand = DemandRate::daily(Decimal::from(4));
        assert_eq!(demand.reorder_quantity(ReorderHorizon::ShortTerm), Decimal::from(22));
        assert_eq!(demand.reorder_quantity(ReorderHorizon::MediumTerm), Decimal::from(78));
        assert_eq!(demand.reorder_quantity(ReorderHorizon::LongTerm), Decimal::from(144));
    }

    #[test]
    fn test_days_to_stockout_worked_example() {
        let demand = DemandRate::daily(Decimal::from(4));
        assert_eq!(
            demand.days_to_stockout(Decimal::from(50)),
            DaysToStockout::Days(Decimal::from(13))
        );
    }

    #[test]
    fn test_zero_demand_is_not_applicable() {
        let demand = DemandRate::daily(Decimal::ZERO);
        assert_eq!(
            demand.days_to_stockout(Decimal::from(50)),
            DaysToStockout::NotApplicable
        );
        assert_eq!(demand.reorder_quantity(ReorderHorizon::LongTerm), Decimal::ZERO);
    }

    #[test]
    fn test_negative_demand_is_not_applicable() {
        // Net returns do not draw stock down
        let demand = DemandRate::daily(Decimal::from(-8));
        assert_eq!(
            demand.days_to_stockout(Decimal::from(50)),
            DaysToStockout::NotApplicable
        );
        assert_eq!(demand.reorder_quantity(ReorderHorizon::ShortTerm), Decimal::from(-44));
    }

    #[test]
    fn test_exact_ratio_does_not_overshoot() {
        // 2 units over 3 days: medium horizon covers 19.5 days -> exactly 13
        let span = DateSpan::new(3).unwrap();
        let demand = DemandRate::new(Decimal::from(2), span);
        assert_eq!(demand.reorder_quantity(ReorderHorizon::MediumTerm), Decimal::from(13));
    }

    #[test]
    fn test_aggregate_groups_and_sums() {
        let records = vec![
            record("P1", "North", Some(10), Some(30)),
            record("P1", "North", Some(2), Some(50)),
            record("P1", "North", None, None),
            record("P2", "North", None, None),
        ];
        let rows = aggregate(&records, DateSpan::new(3).unwrap());

        assert_eq!(rows.len(), 2);
        let p1 = &rows[0];
        assert_eq!(p1.product_id, "P1");
        assert_eq!(p1.total_quantity, Decimal::from(12));
        assert_eq!(p1.max_inventory, Decimal::from(50));
        assert_eq!(p1.average_daily_demand, Decimal::from(4));
        assert_eq!(p1.days_to_stockout, DaysToStockout::Days(Decimal::from(13)));
        assert_eq!(p1.short_term_reorder, Decimal::from(22));

        let p2 = &rows[1];
        assert_eq!(p2.total_quantity, Decimal::ZERO);
        assert_eq!(p2.max_inventory, Decimal::ZERO);
        assert_eq!(p2.days_to_stockout, DaysToStockout::NotApplicable);
    }

    #[test]
    fn test_aggregate_empty_input() {
        let rows = aggregate(std::iter::empty(), DateSpan::new(1).unwrap());
        assert!(rows.is_empty());
    }
}
