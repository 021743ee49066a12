//! Investment projection and the calculator widget.

use serde::Serialize;

use crate::numeric::parse_amount;

/// Projected total and profit, formatted to 2 decimals. Both empty when not computable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Projection {
    /// Principal grown by the expected percentage.
    pub total: String,
    /// `total - principal`.
    pub profit: String,
}

impl Projection {
    /// True when the inputs did not parse and nothing was computed.
    pub fn is_empty(&self) -> bool {
        self.total.is_empty() && self.profit.is_empty()
    }
}

/// Project `principal_text` grown by `growth_text` percent.
///
/// Either input failing to parse yields an empty projection; the two outputs are never
/// computed partially.
pub fn project(principal_text: &str, growth_text: &str) -> Projection {
    let (Some(principal), Some(growth)) = (parse_amount(principal_text), parse_amount(growth_text))
    else {
        return Projection::default();
    };
    let total = principal * (1.0 + growth / 100.0);
    Projection {
        total: format!("{:.2}", total),
        profit: format!("{:.2}", total - principal),
    }
}

/// Calculator widget state.
///
/// Principal and growth setters recompute the projection at once. The label plays no
/// part in the arithmetic and changing it leaves the projection alone.
#[derive(Debug, Clone, Default)]
pub struct InvestmentCalculator {
    label: String,
    principal: String,
    growth: String,
    projection: Projection,
}

impl InvestmentCalculator {
    /// Empty calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the free-text label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replace the principal text.
    pub fn set_principal(&mut self, principal: impl Into<String>) {
        self.principal = principal.into();
        self.recompute();
    }

    /// Replace the expected growth percentage text.
    pub fn set_growth(&mut self, growth: impl Into<String>) {
        self.growth = growth.into();
        self.recompute();
    }

    /// Label echoed back verbatim, if one was entered.
    pub fn label(&self) -> Option<&str> {
        Some(self.label.as_str()).filter(|label| !label.is_empty())
    }

    /// Latest projection.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    fn recompute(&mut self) {
        self.projection = project(&self.principal, &self.growth);
    }
}
