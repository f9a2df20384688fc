//! Query results handed to the dashboard

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AggregateRow, Selection};
use crate::types::Window;

/// Quantity moved in each fixed window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowTotals {
    pub last_day: Decimal,
    pub last_week: Decimal,
    pub last_month: Decimal,
}

impl WindowTotals {
    pub fn get(&self, window: Window) -> Decimal {
        match window {
            Window::LastDay => self.last_day,
            Window::LastWeek => self.last_week,
            Window::LastMonth => self.last_month,
        }
    }

    pub fn set(&mut self, window: Window, total: Decimal) {
        match window {
            Window::LastDay => self.last_day = total,
            Window::LastWeek => self.last_week = total,
            Window::LastMonth => self.last_month = total,
        }
    }
}

/// Everything the dashboard renders for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub selection: Selection,
    pub window: Window,
    pub reference_date: NaiveDate,
    /// Totals under the category and product selection only
    pub totals: WindowTotals,
    pub rows: Vec<AggregateRow>,
}

impl DashboardView {
    /// True when the selection matched nothing; the dashboard shows "no data"
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
