//! Single report entries.

use super::{CallOutcome, ReportKind};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

/// One report produced by one call.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Report kind.
    #[serde(rename = "analysis_type")]
    pub kind: ReportKind,

    /// When the reply was received.
    pub timestamp: DateTime<Local>,

    /// Location covered, for single-location reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Locations covered, for comparisons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,

    /// Investment budget, for recommendations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Investor preferences, for recommendations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Value>,

    /// Reply or failure.
    #[serde(flatten)]
    pub outcome: CallOutcome,
}

impl ReportEntry {
    /// Creates an entry stamped with the current local time.
    #[must_use]
    pub fn new(kind: ReportKind, outcome: CallOutcome) -> Self {
        Self {
            kind,
            timestamp: Local::now(),
            location: None,
            locations: None,
            budget: None,
            preferences: None,
            outcome,
        }
    }

    /// Sets the covered location.
    #[must_use]
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Sets the compared locations.
    #[must_use]
    pub fn with_locations(mut self, locations: &[String]) -> Self {
        self.locations = Some(locations.to_vec());
        self
    }

    /// Sets the budget and preferences of a recommendation.
    #[must_use]
    pub fn with_budget(mut self, budget: f64, preferences: Value) -> Self {
        self.budget = Some(budget);
        self.preferences = Some(preferences);
        self
    }

    /// Describes what the entry covers, e.g. `Location: Ella`.
    #[must_use]
    pub fn subject(&self) -> Option<String> {
        if let Some(location) = &self.location {
            return Some(format!("Location: {location}"));
        }
        if let Some(locations) = &self.locations {
            return Some(format!("Locations Compared: {}", locations.join(", ")));
        }
        self.budget
            .map(|budget| format!("Budget Considered: ${}", format_amount(budget)))
    }
}

/// Formats an amount with thousands separators and two decimals.
///
/// `50000.0` becomes `50,000.00`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}
