//! Selection filtering and dropdown options

use crate::models::{FieldFilter, JoinedRecord, SelectableField, Selection, SelectionOptions};
use crate::pipeline::dimensions::distinct_values;

/// Value of a selectable field on a joined record
pub fn field_value(record: &JoinedRecord, field: SelectableField) -> &str {
    match field {
        SelectableField::Category => record.category(),
        SelectableField::Product => record.product_id(),
        SelectableField::Store => record.store(),
        SelectableField::Color => record.color(),
    }
}

/// Apply one equality filter; `All` passes everything through
pub fn apply_filter<'a>(
    records: Vec<&'a JoinedRecord>,
    field: SelectableField,
    filter: &FieldFilter,
) -> Vec<&'a JoinedRecord> {
    if filter.is_all() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| filter.matches(field_value(r, field)))
        .collect()
}

/// Apply category, product, store and color filters in sequence
pub fn apply_selection<'a, I>(records: I, selection: &Selection) -> Vec<&'a JoinedRecord>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    SelectableField::ORDER
        .iter()
        .fold(records.into_iter().collect(), |kept, field| {
            apply_filter(kept, *field, selection.filter(*field))
        })
}

/// Dropdown values for the current selection
///
/// Categories come from every record. Products are narrowed by category;
/// stores and colors by category and product.
pub fn selection_options(records: &[JoinedRecord], selection: &Selection) -> SelectionOptions {
    let by_category = apply_filter(
        records.iter().collect(),
        SelectableField::Category,
        &selection.category,
    );
    let by_product = apply_filter(
        by_category.clone(),
        SelectableField::Product,
        &selection.product,
    );

    SelectionOptions {
        categories: distinct_values(records.iter().map(|r| r.category())),
        products: distinct_values(by_category.iter().map(|r| r.product_id())),
        stores: distinct_values(by_product.iter().map(|r| r.store())),
        colors: distinct_values(by_product.iter().map(|r| r.color())),
    }
}
