//! Aggregated results of a research run.

use super::{ReportEntry, ReportKind};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Report slots filled by a comprehensive plan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Reports {
    /// Budget tourism trends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_trends: Option<ReportEntry>,

    /// Comprehensive market report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_report: Option<ReportEntry>,

    /// Per-location analyses, in plan order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location_analysis: Vec<ReportEntry>,

    /// Comparison of the analysed locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_comparison: Option<ReportEntry>,

    /// Competition in the top location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_analysis: Option<ReportEntry>,

    /// Investment recommendation, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_recommendation: Option<ReportEntry>,
}

impl Reports {
    /// Iterates over every filled entry in plan order.
    pub fn entries(&self) -> impl Iterator<Item = &ReportEntry> {
        self.market_trends
            .iter()
            .chain(&self.market_report)
            .chain(&self.location_analysis)
            .chain(&self.location_comparison)
            .chain(&self.competition_analysis)
            .chain(&self.investment_recommendation)
    }

    /// Returns the kinds present, in plan order and without repeats.
    #[must_use]
    pub fn kinds(&self) -> Vec<ReportKind> {
        ReportKind::ALL
            .into_iter()
            .filter(|kind| self.entries().any(|entry| entry.kind == *kind))
            .collect()
    }

    /// Returns the entries of one kind.
    pub fn of_kind(&self, kind: ReportKind) -> impl Iterator<Item = &ReportEntry> {
        self.entries().filter(move |entry| entry.kind == kind)
    }

    /// Stores an entry in the slot matching its kind.
    pub fn insert(&mut self, entry: ReportEntry) {
        match entry.kind {
            ReportKind::MarketTrends => self.market_trends = Some(entry),
            ReportKind::MarketReport => self.market_report = Some(entry),
            ReportKind::LocationPotential => self.location_analysis.push(entry),
            ReportKind::LocationComparison => self.location_comparison = Some(entry),
            ReportKind::CompetitionAnalysis => self.competition_analysis = Some(entry),
            ReportKind::InvestmentRecommendation => self.investment_recommendation = Some(entry),
        }
    }
}

/// Results of a research run, consumed by the exporters.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResults {
    /// When the run started.
    pub analysis_timestamp: DateTime<Local>,

    /// Country researched.
    pub country: String,

    /// Locations in scope for the run.
    pub locations_analyzed: Vec<String>,

    /// Filled report slots.
    pub reports: Reports,

    /// Why the run stopped early, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResults {
    /// Creates empty results stamped with the current local time.
    #[must_use]
    pub fn new(country: &str, locations: &[String]) -> Self {
        Self {
            analysis_timestamp: Local::now(),
            country: country.to_string(),
            locations_analyzed: locations.to_vec(),
            reports: Reports::default(),
            error: None,
        }
    }

    /// Returns the number of filled report entries.
    #[must_use]
    pub fn report_count(&self) -> usize {
        self.reports.entries().count()
    }

    /// Returns the number of entries whose call failed.
    #[must_use]
    pub fn failed_calls(&self) -> usize {
        self.reports
            .entries()
            .filter(|entry| entry.outcome.is_failed())
            .count()
    }

    /// Returns true if the run stopped early or any call failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.error.is_some() || self.failed_calls() > 0
    }
}
