//! Accordion menu controller
//!
//! Menu items are bound once when the page loads. Items inserted later are
//! not bound and do not take part in the accordion.

use domain::accordion_toggle;
use tracing::{debug, warn};

use crate::ports::MenuView;

/// Result of a click on a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The clicked container is now the only open one
    Opened(usize),
    /// The clicked container was closed
    Closed(usize),
    /// The item had no container, nothing changed
    Ignored,
}

/// Keeps at most one menu container open
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuController;

impl MenuController {
    pub const fn new() -> Self {
        Self
    }

    /// Handle a click on a menu item
    ///
    /// `container` is the index of the item's enclosing container, or `None`
    /// when the item sits outside any container.
    pub fn on_item_click<V: MenuView + ?Sized>(
        &self,
        view: &V,
        container: Option<usize>,
    ) -> MenuOutcome {
        let count = view.container_count();
        let Some(clicked) = container.filter(|&index| index < count) else {
            warn!(?container, count, "Menu item has no container, ignoring click");
            return MenuOutcome::Ignored;
        };

        let current: Vec<bool> = (0..count).map(|index| view.is_open(index)).collect();
        let next = accordion_toggle(&current, clicked);

        for (index, (&was_open, &open)) in current.iter().zip(&next).enumerate() {
            if was_open != open {
                view.set_open(index, open);
            }
        }

        if next[clicked] {
            debug!(container = clicked, "Menu container opened");
            MenuOutcome::Opened(clicked)
        } else {
            debug!(container = clicked, "Menu container closed");
            MenuOutcome::Closed(clicked)
        }
    }
}
