//! Prompt renderer.

use super::{templates, PromptError};
use crate::report::{format_amount, ReportKind};
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Creates a configured Handlebars registry with every prompt registered.
///
/// The registry is configured with:
/// - No HTML escaping (prompts are plain text)
/// - Strict mode (catches missing variables)
///
/// # Errors
///
/// Returns an error if a prompt template fails to parse.
pub fn create_handlebars_registry() -> Result<Handlebars<'static>, PromptError> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);

    for kind in ReportKind::ALL {
        hbs.register_template_string(kind.as_str(), template_source(kind))?;
    }

    Ok(hbs)
}

fn template_source(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::MarketTrends => templates::MARKET_TRENDS,
        ReportKind::MarketReport => templates::MARKET_REPORT,
        ReportKind::LocationPotential => templates::LOCATION_POTENTIAL,
        ReportKind::LocationComparison => templates::LOCATION_COMPARISON,
        ReportKind::CompetitionAnalysis => templates::COMPETITION_ANALYSIS,
        ReportKind::InvestmentRecommendation => templates::INVESTMENT_RECOMMENDATION,
    }
}

/// Renders the prompt for each report kind.
pub struct PromptRenderer {
    handlebars: Handlebars<'static>,
    country: String,
}

impl PromptRenderer {
    /// Creates a renderer for prompts about `country`.
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt template fails to parse.
    pub fn new(country: &str) -> Result<Self, PromptError> {
        Ok(Self {
            handlebars: create_handlebars_registry()?,
            country: country.to_string(),
        })
    }

    /// Renders the budget tourism trends prompt.
    pub fn market_trends(&self) -> Result<String, PromptError> {
        self.render(ReportKind::MarketTrends, json!({ "country": self.country }))
    }

    /// Renders the comprehensive market report prompt.
    pub fn market_report(&self) -> Result<String, PromptError> {
        self.render(ReportKind::MarketReport, json!({ "country": self.country }))
    }

    /// Renders the investment potential prompt for one location.
    pub fn location_potential(&self, location: &str) -> Result<String, PromptError> {
        self.render(
            ReportKind::LocationPotential,
            json!({ "country": self.country, "location": location }),
        )
    }

    /// Renders the comparison prompt for several locations.
    pub fn location_comparison(&self, locations: &[String]) -> Result<String, PromptError> {
        self.render(
            ReportKind::LocationComparison,
            json!({ "country": self.country, "locations": locations.join(", ") }),
        )
    }

    /// Renders the competition prompt for one location.
    pub fn competition_analysis(&self, location: &str) -> Result<String, PromptError> {
        self.render(
            ReportKind::CompetitionAnalysis,
            json!({ "country": self.country, "location": location }),
        )
    }

    /// Renders the personalised recommendation prompt.
    ///
    /// `preferences` is embedded as pretty-printed JSON.
    pub fn investment_recommendation(
        &self,
        budget: f64,
        preferences: &Value,
    ) -> Result<String, PromptError> {
        self.render(
            ReportKind::InvestmentRecommendation,
            json!({
                "country": self.country,
                "budget": format_amount(budget),
                "preferences": serde_json::to_string_pretty(preferences)?,
            }),
        )
    }

    fn render(&self, kind: ReportKind, data: Value) -> Result<String, PromptError> {
        Ok(self.handlebars.render(kind.as_str(), &data)?)
    }
}
