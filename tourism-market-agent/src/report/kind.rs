//! Report kinds.

use serde::Serialize;
use std::fmt;

/// Kind of report produced by a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Budget tourism trends for the country.
    MarketTrends,

    /// Comprehensive market report.
    MarketReport,

    /// Investment potential of one location.
    LocationPotential,

    /// Side-by-side comparison of several locations.
    LocationComparison,

    /// Competitive landscape in one location.
    CompetitionAnalysis,

    /// Personalised investment recommendation.
    InvestmentRecommendation,
}

impl ReportKind {
    /// Every kind, in plan order.
    pub const ALL: [Self; 6] = [
        Self::MarketTrends,
        Self::MarketReport,
        Self::LocationPotential,
        Self::LocationComparison,
        Self::CompetitionAnalysis,
        Self::InvestmentRecommendation,
    ];

    /// Returns the snake_case identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MarketTrends => "market_trends",
            Self::MarketReport => "market_report",
            Self::LocationPotential => "location_potential",
            Self::LocationComparison => "location_comparison",
            Self::CompetitionAnalysis => "competition_analysis",
            Self::InvestmentRecommendation => "investment_recommendation",
        }
    }

    /// Returns the human-readable section title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::MarketTrends => "Market Trends",
            Self::MarketReport => "Market Report",
            Self::LocationPotential => "Location Analysis",
            Self::LocationComparison => "Location Comparison",
            Self::CompetitionAnalysis => "Competition Analysis",
            Self::InvestmentRecommendation => "Investment Recommendation",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
