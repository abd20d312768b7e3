//! Comprehensive plan layout.

use super::ResearchError;
use crate::config::ResearchSettings;

/// Hotspots taken from the configuration when no locations are given.
pub const DEFAULT_LOCATION_COUNT: usize = 6;

/// Calls that do not depend on the number of analysed locations:
/// trends, market report, comparison and competition.
const FIXED_CALLS: usize = 4;

/// Locations covered by a comprehensive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComprehensivePlan {
    /// Every location in scope.
    pub locations: Vec<String>,

    /// Locations analysed individually and compared.
    pub analysed: Vec<String>,

    /// Location whose competition is researched.
    pub competition_target: String,
}

impl ComprehensivePlan {
    /// Lays out a plan for `requested`, falling back to the configured
    /// hotspots when it is absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::NoLocations`] if no usable location remains.
    pub fn new(
        requested: Option<&[String]>,
        settings: &ResearchSettings,
    ) -> Result<Self, ResearchError> {
        let requested: Vec<String> = requested
            .unwrap_or_default()
            .iter()
            .map(|location| location.trim().to_string())
            .filter(|location| !location.is_empty())
            .collect();

        let locations = if requested.is_empty() {
            settings
                .hotspots
                .iter()
                .map(|location| location.trim().to_string())
                .filter(|location| !location.is_empty())
                .take(DEFAULT_LOCATION_COUNT)
                .collect()
        } else {
            requested
        };

        let competition_target = locations.first().cloned().ok_or(ResearchError::NoLocations)?;
        let analysed = locations
            .iter()
            .take(settings.max_location_analyses.max(1))
            .cloned()
            .collect();

        Ok(Self {
            locations,
            analysed,
            competition_target,
        })
    }

    /// Number of calls the plan issues.
    #[must_use]
    pub fn estimated_calls(&self) -> usize {
        FIXED_CALLS + self.analysed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn defaults_to_first_six_hotspots() {
        let settings = ResearchSettings::default();
        let plan = ComprehensivePlan::new(None, &settings).unwrap();

        assert_eq!(
            plan.locations,
            names(&["Ella", "Kandy", "Sigiriya", "Arugam Bay", "Negombo", "Galle"])
        );
        assert_eq!(plan.analysed, names(&["Ella", "Kandy", "Sigiriya"]));
        assert_eq!(plan.competition_target, "Ella");
        assert_eq!(plan.estimated_calls(), 7);
    }

    #[test]
    fn empty_request_falls_back_to_hotspots() {
        let settings = ResearchSettings::default();
        let plan = ComprehensivePlan::new(Some(&[]), &settings).unwrap();
        assert_eq!(plan.competition_target, "Ella");
    }

    #[test]
    fn requested_locations_are_trimmed_and_capped() {
        let settings = ResearchSettings {
            max_location_analyses: 2,
            ..ResearchSettings::default()
        };
        let requested = names(&[" Galle ", "", "Mirissa", "Unawatuna"]);

        let plan = ComprehensivePlan::new(Some(&requested), &settings).unwrap();

        assert_eq!(plan.locations, names(&["Galle", "Mirissa", "Unawatuna"]));
        assert_eq!(plan.analysed, names(&["Galle", "Mirissa"]));
        assert_eq!(plan.estimated_calls(), 6);
    }

    #[test]
    fn single_location_plan_needs_five_calls() {
        let settings = ResearchSettings::default();
        let plan = ComprehensivePlan::new(Some(&names(&["Ella"])), &settings).unwrap();
        assert_eq!(plan.estimated_calls(), 5);
    }

    #[test]
    fn no_locations_is_an_error() {
        let settings = ResearchSettings {
            hotspots: Vec::new(),
            ..ResearchSettings::default()
        };
        let result = ComprehensivePlan::new(None, &settings);
        assert!(matches!(result, Err(ResearchError::NoLocations)));
    }
}
