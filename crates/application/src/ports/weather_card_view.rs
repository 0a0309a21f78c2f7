//! Weather card view port

use domain::WeatherCardContent;

/// Display cards of the weather widget
pub trait WeatherCardView {
    /// Write the content into the card with the given id
    ///
    /// Returns `false` when the page has no such card; the page is left as
    /// it was in that case.
    fn render(&self, card_id: &str, content: &WeatherCardContent) -> bool;
}
