use serde::Deserialize;

/// One month of the spending chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlySpending {
    pub month: String,
    pub spending: f64,
    pub savings: f64,
}

/// One slice of the spending-by-category pie, `value` in percent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpendingShare {
    pub name: String,
    pub value: u32,
    pub color: String,
}

/// Static data behind the savings dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsReport {
    pub monthly_spending: Vec<MonthlySpending>,
    pub missed_offers: u32,
    pub spending_categories: Vec<SpendingShare>,
}

impl SavingsReport {
    pub fn total_savings(&self) -> f64 {
        self.monthly_spending.iter().map(|m| m.savings).sum()
    }

    pub fn total_spending(&self) -> f64 {
        self.monthly_spending.iter().map(|m| m.spending).sum()
    }

    pub fn average_monthly_savings(&self) -> f64 {
        if self.monthly_spending.is_empty() {
            return 0.0;
        }
        self.total_savings() / self.monthly_spending.len() as f64
    }

    pub fn validate(&self) -> Result<(), String> {
        let shares: u32 = self.spending_categories.iter().map(|s| s.value).sum();
        if !self.spending_categories.is_empty() && shares != 100 {
            return Err(format!("spending shares sum to {shares}, expected 100"));
        }
        Ok(())
    }
}
