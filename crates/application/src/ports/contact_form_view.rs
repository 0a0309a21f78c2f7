//! Contact form view port

use domain::ContactField;

/// The contact form and its two status indicators
pub trait ContactFormView {
    /// Current value of an input field
    fn field_value(&self, field: ContactField) -> String;

    /// Reset every input field
    fn clear_fields(&self);

    /// Current label of the submit control
    fn submit_label(&self) -> String;

    fn set_submit_label(&self, label: &str);

    fn set_submit_enabled(&self, enabled: bool);

    /// Show or hide the success indicator
    fn set_success_visible(&self, visible: bool);

    /// Show the error indicator with the given text
    fn show_error(&self, text: &str);

    fn hide_error(&self);
}
