//! Accordion menu transition
//!
//! The open/closed flags live on the page, so the domain only describes how a
//! click changes them.

/// Compute the container states after a click on container `clicked`
///
/// The clicked container flips; every other container ends up closed. An
/// out-of-range index leaves the states untouched.
#[must_use]
pub fn accordion_toggle(states: &[bool], clicked: usize) -> Vec<bool> {
    if clicked >= states.len() {
        return states.to_vec();
    }

    states
        .iter()
        .enumerate()
        .map(|(index, &open)| index == clicked && !open)
        .collect()
}

/// Number of open containers
#[must_use]
pub fn open_count(states: &[bool]) -> usize {
    states.iter().filter(|&&open| open).count()
}
