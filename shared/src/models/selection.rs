//! Dashboard filter selections

use serde::{Deserialize, Serialize};

/// Fields the dashboard lets a user filter on, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectableField {
    Category,
    Product,
    Store,
    Color,
}

impl SelectableField {
    pub const ORDER: [SelectableField; 4] = [
        SelectableField::Category,
        SelectableField::Product,
        SelectableField::Store,
        SelectableField::Color,
    ];

    /// Canonical "select everything" label shown in the field's dropdown
    pub fn all_label(&self) -> &'static str {
        match self {
            SelectableField::Category => "All categories",
            SelectableField::Product => "All products",
            SelectableField::Store => "All stores",
            SelectableField::Color => "All colors",
        }
    }
}

/// Filter on a single selectable field
///
/// Serializes as the selected value, or `null` for [`FieldFilter::All`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum FieldFilter {
    #[default]
    All,
    Only(String),
}

impl FieldFilter {
    /// Parse a dropdown label, mapping the field's "all" label to [`FieldFilter::All`]
    pub fn from_label(field: SelectableField, label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label == field.all_label() {
            FieldFilter::All
        } else {
            FieldFilter::Only(label.to_string())
        }
    }

    pub fn only(value: impl Into<String>) -> Self {
        FieldFilter::Only(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FieldFilter::All)
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Only(selected) => selected == value,
        }
    }

    /// Dropdown label for this filter
    pub fn label(&self, field: SelectableField) -> &str {
        match self {
            FieldFilter::All => field.all_label(),
            FieldFilter::Only(value) => value,
        }
    }
}

impl From<Option<String>> for FieldFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldFilter::All, FieldFilter::Only)
    }
}

impl From<FieldFilter> for Option<String> {
    fn from(filter: FieldFilter) -> Self {
        match filter {
            FieldFilter::All => None,
            FieldFilter::Only(value) => Some(value),
        }
    }
}

/// The active dashboard selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub category: FieldFilter,
    #[serde(default)]
    pub product: FieldFilter,
    #[serde(default)]
    pub store: FieldFilter,
    #[serde(default)]
    pub color: FieldFilter,
}

impl Selection {
    /// Build a selection from the four dropdown labels
    pub fn from_labels(category: &str, product: &str, store: &str, color: &str) -> Self {
        Self {
            category: FieldFilter::from_label(SelectableField::Category, category),
            product: FieldFilter::from_label(SelectableField::Product, product),
            store: FieldFilter::from_label(SelectableField::Store, store),
            color: FieldFilter::from_label(SelectableField::Color, color),
        }
    }

    pub fn filter(&self, field: SelectableField) -> &FieldFilter {
        match field {
            SelectableField::Category => &self.category,
            SelectableField::Product => &self.product,
            SelectableField::Store => &self.store,
            SelectableField::Color => &self.color,
        }
    }

    pub fn set(&mut self, field: SelectableField, filter: FieldFilter) {
        match field {
            SelectableField::Category => self.category = filter,
            SelectableField::Product => self.product = filter,
            SelectableField::Store => self.store = filter,
            SelectableField::Color => self.color = filter,
        }
    }

    pub fn with(mut self, field: SelectableField, filter: FieldFilter) -> Self {
        self.set(field, filter);
        self
    }

    /// Category and product only; the scope of the window totals
    pub fn catalog_scope(&self) -> Self {
        Self {
            category: self.category.clone(),
            product: self.product.clone(),
            store: FieldFilter::All,
            color: FieldFilter::All,
        }
    }
}

/// Values offered in each dropdown, in first-appearance order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionOptions {
    pub categories: Vec<String>,
    pub products: Vec<String>,
    pub stores: Vec<String>,
    pub colors: Vec<String>,
}

impl SelectionOptions {
    pub fn values(&self, field: SelectableField) -> &[String] {
        match field {
            SelectableField::Category => &self.categories,
            SelectableField::Product => &self.products,
            SelectableField::Store => &self.stores,
            SelectableField::Color => &self.colors,
        }
    }

    /// Dropdown entries with the field's "all" label first
    pub fn labels(&self, field: SelectableField) -> Vec<String> {
        std::iter::once(field.all_label().to_string())
            .chain(self.values(field).iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_labels_are_distinct_per_field() {
        assert_eq!(SelectableField::Store.all_label(), "All stores");
        assert_eq!(SelectableField::Color.all_label(), "All colors");
        assert_eq!(
            FieldFilter::from_label(SelectableField::Store, "All stores"),
            FieldFilter::All
        );
        // Another field's label is a concrete value, not a wildcard
        assert_eq!(
            FieldFilter::from_label(SelectableField::Store, "All colors"),
            FieldFilter::only("All colors")
        );
    }

    #[test]
    fn test_from_labels() {
        let selection = Selection::from_labels("Bags", "All products", "North", "All colors");
        assert_eq!(selection.category, FieldFilter::only("Bags"));
        assert!(selection.product.is_all());
        assert_eq!(selection.store, FieldFilter::only("North"));
        assert!(selection.color.is_all());
    }

    #[test]
    fn test_catalog_scope_drops_store_and_color() {
        let selection = Selection::from_labels("Bags", "P-1", "North", "Red");
        let scope = selection.catalog_scope();
        assert_eq!(scope.category, FieldFilter::only("Bags"));
        assert_eq!(scope.product, FieldFilter::only("P-1"));
        assert!(scope.store.is_all());
        assert!(scope.color.is_all());
    }

    #[test]
    fn test_filter_matches() {
        assert!(FieldFilter::All.matches("anything"));
        assert!(FieldFilter::only("Red").matches("Red"));
        assert!(!FieldFilter::only("Red").matches("Blue"));
    }

    #[test]
    fn test_selection_serde() {
        let selection = Selection::default().with(SelectableField::Color, FieldFilter::only("Red"));
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["color"], "Red");
        assert!(json["store"].is_null());

        let parsed: Selection = serde_json::from_str(r#"{"category": "Bags"}"#).unwrap();
        assert_eq!(parsed.category, FieldFilter::only("Bags"));
        assert!(parsed.product.is_all());
    }

    #[test]
    fn test_option_labels() {
        let options = SelectionOptions {
            stores: vec!["North".to_string(), "South".to_string()],
            ..Default::default()
        };
        assert_eq!(
            options.labels(SelectableField::Store),
            vec!["All stores", "North", "South"]
        );
    }
}
