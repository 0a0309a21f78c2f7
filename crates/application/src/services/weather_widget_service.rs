//! Weather widget service
//!
//! Refreshes the weather cards for a fixed list of site locations. A cycle
//! walks the locations in order and awaits each lookup before starting the
//! next; a failed lookup only affects its own card.

use std::{fmt, sync::Arc, time::Duration};

use domain::SiteLocation;
use tracing::{debug, info, instrument, warn};

use crate::ports::{WeatherCardView, WeatherPort};

/// Default time between two refresh cycles
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// What happened to one location during a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationOutcome {
    /// The card shows fresh data
    Updated,
    /// The lookup failed; the card keeps its previous content
    FetchFailed(String),
    /// The lookup succeeded but the page has no card for the location
    CardMissing,
}

/// Outcomes of one refresh cycle, in location order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub outcomes: Vec<(String, LocationOutcome)>,
}

impl RefreshReport {
    /// Number of cards that received fresh data
    #[must_use]
    pub fn updated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == LocationOutcome::Updated)
            .count()
    }

    /// Names of locations whose lookup failed
    #[must_use]
    pub fn failed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, LocationOutcome::FetchFailed(_)))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Fetches and renders weather for the configured locations
pub struct WeatherWidgetService {
    weather: Arc<dyn WeatherPort>,
    locations: Vec<SiteLocation>,
}

impl fmt::Debug for WeatherWidgetService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherWidgetService")
            .field("locations", &self.locations.len())
            .finish_non_exhaustive()
    }
}

impl WeatherWidgetService {
    /// Create a widget service for the given locations
    pub fn new(weather: Arc<dyn WeatherPort>, locations: Vec<SiteLocation>) -> Self {
        Self { weather, locations }
    }

    #[must_use]
    pub fn locations(&self) -> &[SiteLocation] {
        &self.locations
    }

    /// Run one refresh cycle over every location
    #[instrument(skip(self, view), fields(locations = self.locations.len()))]
    pub async fn refresh_all<V: WeatherCardView + ?Sized>(&self, view: &V) -> RefreshReport {
        let mut report = RefreshReport::default();

        for location in &self.locations {
            let outcome = self.refresh_location(view, location).await;
            report.outcomes.push((location.name().to_string(), outcome));
        }

        info!(
            updated = report.updated_count(),
            failed = report.failed().len(),
            "Weather refresh cycle finished"
        );
        report
    }

    /// Fetch and render a single location
    #[instrument(skip(self, view, location), fields(location = location.name()))]
    pub async fn refresh_location<V: WeatherCardView + ?Sized>(
        &self,
        view: &V,
        location: &SiteLocation,
    ) -> LocationOutcome {
        let snapshot = match self.weather.current_conditions(location.coordinates()).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Failed to fetch weather, keeping previous card");
                return LocationOutcome::FetchFailed(e.to_string());
            },
        };

        let content = snapshot.card_content();
        if view.render(location.card_id(), &content) {
            debug!(
                card = location.card_id(),
                temperature = %content.temperature,
                "Weather card updated"
            );
            LocationOutcome::Updated
        } else {
            warn!(card = location.card_id(), "Weather card not found on page");
            LocationOutcome::CardMissing
        }
    }
}
