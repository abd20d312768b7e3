//! Rate-governed research operations.
//!
//! [`ResearchAgent`] renders a prompt, sends it through the governed
//! [`ChatClient`] and records the reply (or failure) as a [`ReportEntry`].
//! Only quota exhaustion stops an operation; every other failure is stored
//! in the entry so a multi-call plan can carry on.

mod error;
mod plan;

pub use error::ResearchError;
pub use plan::{ComprehensivePlan, DEFAULT_LOCATION_COUNT};

use crate::client::{ChatClient, ClientError};
use crate::config::{resolve_api_key, AgentConfig, ResearchSettings};
use crate::governor::{QuotaSnapshot, RateGovernor};
use crate::prompts::PromptRenderer;
use crate::report::{AnalysisResults, CallOutcome, ReportEntry, ReportKind, Reports};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};

/// Issues research calls for one country.
pub struct ResearchAgent {
    client: ChatClient,
    prompts: PromptRenderer,
    settings: ResearchSettings,
}

impl ResearchAgent {
    /// Creates an agent around a governed client.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Prompt`] if the prompt templates fail to parse.
    pub fn new(client: ChatClient, settings: ResearchSettings) -> Result<Self, ResearchError> {
        let prompts = PromptRenderer::new(&settings.country)?;
        Ok(Self {
            client,
            prompts,
            settings,
        })
    }

    /// Builds a governor, client and agent from a loaded configuration.
    ///
    /// `api_key` takes precedence over the configured and environment keys.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Config`] if no API key is available and
    /// [`ResearchError::Client`] if the client cannot be built.
    pub fn from_config(config: &AgentConfig, api_key: Option<&str>) -> Result<Self, ResearchError> {
        let api_key = resolve_api_key(api_key, &config.api)?;
        let governor = Arc::new(config.quota.governor());
        let client =
            ChatClient::new(&config.api, api_key, governor).map_err(ResearchError::Client)?;

        info!(
            model = %config.api.model,
            requests_per_minute = config.quota.requests_per_minute.get(),
            requests_per_day = config.quota.requests_per_day.get(),
            "Research agent ready"
        );
        Self::new(client, config.research.clone())
    }

    /// Returns the research scope.
    pub fn settings(&self) -> &ResearchSettings {
        &self.settings
    }

    /// Returns the governor gating every call.
    pub fn governor(&self) -> &RateGovernor {
        self.client.governor()
    }

    /// Returns current quota usage.
    pub fn quota_snapshot(&self) -> QuotaSnapshot {
        self.client.governor().quota_snapshot()
    }

    /// Researches budget tourism trends.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::QuotaExhausted`] if the daily quota is used up.
    pub async fn research_trends(&self) -> Result<ReportEntry, ResearchError> {
        info!("Researching budget tourism trends");
        let prompt = self.prompts.market_trends()?;
        let outcome = self.query(ReportKind::MarketTrends, &prompt).await?;
        Ok(ReportEntry::new(ReportKind::MarketTrends, outcome))
    }

    /// Generates the comprehensive market report.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::QuotaExhausted`] if the daily quota is used up.
    pub async fn market_report(&self) -> Result<ReportEntry, ResearchError> {
        info!("Generating market report");
        let prompt = self.prompts.market_report()?;
        let outcome = self.query(ReportKind::MarketReport, &prompt).await?;
        Ok(ReportEntry::new(ReportKind::MarketReport, outcome))
    }

    /// Analyses one location's investment potential.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::QuotaExhausted`] if the daily quota is used up.
    pub async fn analyze_location(&self, location: &str) -> Result<ReportEntry, ResearchError> {
        info!(location, "Analyzing location");
        let prompt = self.prompts.location_potential(location)?;
        let outcome = self.query(ReportKind::LocationPotential, &prompt).await?;
        Ok(ReportEntry::new(ReportKind::LocationPotential, outcome).with_location(location))
    }

    /// Compares several locations.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::QuotaExhausted`] if the daily quota is used up
    /// and [`ResearchError::NoLocations`] if `locations` is empty.
    pub async fn compare_locations(
        &self,
        locations: &[String],
    ) -> Result<ReportEntry, ResearchError> {
        if locations.is_empty() {
            return Err(ResearchError::NoLocations);
        }
        info!(locations = %locations.join(", "), "Comparing locations");
        let prompt = self.prompts.location_comparison(locations)?;
        let outcome = self.query(ReportKind::LocationComparison, &prompt).await?;
        Ok(ReportEntry::new(ReportKind::LocationComparison, outcome).with_locations(locations))
    }

    /// Researches competition in one location.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::QuotaExhausted`] if the daily quota is used up.
    pub async fn research_competition(&self, location: &str) -> Result<ReportEntry, ResearchError> {
        info!(location, "Researching competition");
        let prompt = self.prompts.competition_analysis(location)?;
        let outcome = self.query(ReportKind::CompetitionAnalysis, &prompt).await?;
        Ok(ReportEntry::new(ReportKind::CompetitionAnalysis, outcome).with_location(location))
    }

    /// Generates a recommendation for a budget and set of preferences.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::QuotaExhausted`] if the daily quota is used up.
    pub async fn investment_recommendation(
        &self,
        budget: f64,
        preferences: Value,
    ) -> Result<ReportEntry, ResearchError> {
        info!(budget, "Generating investment recommendation");
        let prompt = self.prompts.investment_recommendation(budget, &preferences)?;
        let outcome = self
            .query(ReportKind::InvestmentRecommendation, &prompt)
            .await?;
        Ok(
            ReportEntry::new(ReportKind::InvestmentRecommendation, outcome)
                .with_budget(budget, preferences),
        )
    }

    /// Runs trends, market report, per-location analyses, comparison and
    /// competition as one plan.
    ///
    /// Refuses to start when the remaining daily quota cannot cover the
    /// plan. Failed calls are recorded and the plan continues; if the daily
    /// quota runs out mid-plan the partial results are returned with
    /// [`AnalysisResults::error`] set.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::InsufficientQuota`] before issuing any call
    /// and [`ResearchError::NoLocations`] if no location is available.
    pub async fn run_comprehensive_analysis(
        &self,
        locations: Option<&[String]>,
    ) -> Result<AnalysisResults, ResearchError> {
        let plan = ComprehensivePlan::new(locations, &self.settings)?;
        let required = plan.estimated_calls();
        let remaining = self.quota_snapshot().daily_remaining;

        if (remaining as usize) < required {
            warn!(required, remaining, "Daily quota cannot cover the plan");
            return Err(ResearchError::InsufficientQuota {
                required,
                remaining,
            });
        }

        info!(
            country = %self.settings.country,
            locations = %plan.locations.join(", "),
            calls = required,
            "Starting comprehensive analysis"
        );

        let mut results = AnalysisResults::new(&self.settings.country, &plan.locations);
        let span = info_span!("comprehensive_analysis", country = %self.settings.country);
        if let Err(e) = self
            .execute_plan(&plan, &mut results.reports)
            .instrument(span)
            .await
        {
            error!(error = %e, "Comprehensive analysis stopped early");
            results.error = Some(e.to_string());
        }

        info!(
            reports = results.report_count(),
            failed = results.failed_calls(),
            "Comprehensive analysis finished"
        );
        Ok(results)
    }

    async fn execute_plan(
        &self,
        plan: &ComprehensivePlan,
        reports: &mut Reports,
    ) -> Result<(), ResearchError> {
        reports.insert(self.research_trends().await?);
        reports.insert(self.market_report().await?);
        for location in &plan.analysed {
            reports.insert(self.analyze_location(location).await?);
        }
        reports.insert(self.compare_locations(&plan.analysed).await?);
        reports.insert(self.research_competition(&plan.competition_target).await?);
        Ok(())
    }

    async fn query(&self, kind: ReportKind, prompt: &str) -> Result<CallOutcome, ResearchError> {
        match self.client.complete(prompt).await {
            Ok(content) => Ok(CallOutcome::Completed { content }),
            Err(ClientError::QuotaExhausted(e)) => Err(ResearchError::QuotaExhausted(e)),
            Err(e) => {
                error!(kind = %kind, error = %e, "API call failed");
                Ok(CallOutcome::Failed {
                    error: e.to_string(),
                })
            }
        }
    }
}
