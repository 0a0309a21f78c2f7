//! Menu view port
//!
//! The accordion's open flags are page state; the controller reads and
//! writes them through this view.

/// Navigation containers of the accordion menu, indexed in page order
pub trait MenuView {
    /// Number of menu containers found on the page
    fn container_count(&self) -> usize;

    /// Whether the container is currently open
    fn is_open(&self, container: usize) -> bool;

    /// Open or close a container
    fn set_open(&self, container: usize, open: bool);
}
