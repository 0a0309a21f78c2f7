//! DOM implementations of the application view ports

use application::{ContactFormView, MenuView, WeatherCardView};
use domain::{ContactField, DomainError, WeatherCardContent};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlImageElement,
};

use crate::dom;

/// Class marking an open menu container
const ACTIVE_CLASS: &str = "active";

// ==============================
// Menu
// ==============================

/// The `.menu-item-container` elements present at load time
#[derive(Debug)]
pub struct DomMenu {
    containers: Vec<Element>,
}

impl DomMenu {
    pub fn bind(document: &Document) -> Self {
        let containers = dom::query_all(document, ".menu-item-container");
        debug!(containers = containers.len(), "Menu bound");
        Self { containers }
    }

    /// Index of the container enclosing `item`
    pub fn container_of(&self, item: &Element) -> Option<usize> {
        let container = item.closest(".menu-item-container").ok().flatten()?;
        self.containers.iter().position(|known| *known == container)
    }
}

impl MenuView for DomMenu {
    fn container_count(&self) -> usize {
        self.containers.len()
    }

    fn is_open(&self, container: usize) -> bool {
        self.containers
            .get(container)
            .is_some_and(|element| element.class_list().contains(ACTIVE_CLASS))
    }

    fn set_open(&self, container: usize, open: bool) {
        let Some(element) = self.containers.get(container) else {
            return;
        };
        let classes = element.class_list();
        let result = if open {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if let Err(e) = result {
            warn!(container, error = ?e, "Failed to update menu container class");
        }
    }
}

// ==============================
// Contact form
// ==============================

/// `#contactForm` with its submit button and status indicators
#[derive(Debug)]
pub struct DomContactForm {
    form: HtmlFormElement,
    submit: HtmlButtonElement,
    success: Option<HtmlElement>,
    error: Option<HtmlElement>,
}

impl DomContactForm {
    pub fn bind(document: &Document) -> Result<Self, DomainError> {
        let form: HtmlFormElement = dom::by_id(document, "contactForm")?;
        let submit = dom::find_in(&form, "button[type=\"submit\"]")
            .ok_or_else(|| DomainError::not_found("Element", "#contactForm button[type=submit]"))?;

        let success = dom::by_id(document, "success-message").ok();
        let error = dom::by_id(document, "error-message").ok();
        if success.is_none() || error.is_none() {
            warn!("Contact form status indicators missing, outcomes will not be shown");
        }

        Ok(Self {
            form,
            submit,
            success,
            error,
        })
    }

    pub const fn form(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl ContactFormView for DomContactForm {
    fn field_value(&self, field: ContactField) -> String {
        dom::find_in::<Element>(&self.form, &format!("#{}", field.as_str()))
            .map(|element| dom::control_value(&element))
            .unwrap_or_default()
    }

    fn clear_fields(&self) {
        self.form.reset();
    }

    fn submit_label(&self) -> String {
        self.submit.inner_html()
    }

    fn set_submit_label(&self, label: &str) {
        self.submit.set_inner_html(label);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit.set_disabled(!enabled);
    }

    fn set_success_visible(&self, visible: bool) {
        if let Some(success) = &self.success {
            dom::set_displayed(success, visible);
        }
    }

    fn show_error(&self, text: &str) {
        if let Some(error) = &self.error {
            error.set_text_content(Some(text));
            dom::set_displayed(error, true);
        }
    }

    fn hide_error(&self) {
        if let Some(error) = &self.error {
            dom::set_displayed(error, false);
        }
    }
}

// ==============================
// Weather cards
// ==============================

/// Weather cards looked up by id on every render
#[derive(Debug)]
pub struct DomWeatherCards {
    document: Document,
}

impl DomWeatherCards {
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_icon(&self, card: &Element, content: &WeatherCardContent) {
        let Some(slot) = dom::find_in::<Element>(card, ".weather-icon") else {
            return;
        };
        let image = match self
            .document
            .create_element("img")
            .map(|element| element.unchecked_into::<HtmlImageElement>())
        {
            Ok(image) => image,
            Err(e) => {
                warn!(error = ?e, "Failed to create weather icon");
                return;
            },
        };
        image.set_src(&content.icon_url);
        image.set_alt(&content.icon_alt);

        slot.set_inner_html("");
        if let Err(e) = slot.append_child(&image) {
            warn!(error = ?e, "Failed to insert weather icon");
        }
    }
}

fn set_text(card: &Element, selector: &str, text: &str) {
    match dom::find_in::<Element>(card, selector) {
        Some(element) => element.set_text_content(Some(text)),
        None => debug!(selector, "Weather card has no such part"),
    }
}

impl WeatherCardView for DomWeatherCards {
    fn render(&self, card_id: &str, content: &WeatherCardContent) -> bool {
        let Some(card) = self.document.get_element_by_id(card_id) else {
            return false;
        };

        self.set_icon(&card, content);
        set_text(&card, ".temperature", &content.temperature);
        set_text(&card, ".description", &content.description);
        set_text(&card, ".humidity", &content.humidity);
        set_text(&card, ".wind", &content.wind);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use application::{
        ContactFormService, ContactFormSettings, MenuController, MenuOutcome, SubmitOutcome,
        ports::{DeliveryFailure, DeliveryReceipt, MessageDeliveryPort},
    };
    use domain::{TemplateParams, WeatherSnapshot};
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::HtmlInputElement;

    use super::*;
    use crate::dom::fixture::Fixture;

    const MENU: &str = r#"
        <div class="menu-item-container"><a class="menu-item" id="item-0">Mols</a></div>
        <div class="menu-item-container"><a class="menu-item" id="item-1">Rold</a></div>
        <div class="menu-item-container"><a class="menu-item" id="item-2">Thy</a></div>
        <a class="menu-item" id="item-loose">Om os</a>
    "#;

    const FORM: &str = r#"
        <form id="contactForm">
            <input id="name" value="Ida">
            <input id="email" value="ida@example.dk">
            <input id="subject" value="Overnatning">
            <textarea id="message">Er der plads i juli?</textarea>
            <button type="submit">Send besked</button>
        </form>
        <div id="success-message" style="display: none">Tak!</div>
        <div id="error-message" style="display: none"></div>
    "#;

    const CARD: &str = r#"
        <div id="mols-weather">
            <div class="weather-icon"><span>old</span></div>
            <p class="temperature"></p>
            <p class="description"></p>
            <p class="humidity"></p>
            <p class="wind"></p>
        </div>
    "#;

    fn open_containers(document: &Document) -> usize {
        dom::query_all(document, ".menu-item-container.active").len()
    }

    fn display_of(document: &Document, id: &str) -> String {
        dom::by_id::<HtmlElement>(document, id)
            .unwrap()
            .style()
            .get_property_value("display")
            .unwrap()
    }

    fn text_of(card: &Element, selector: &str) -> String {
        dom::find_in::<Element>(card, selector)
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    #[derive(Debug)]
    struct FixedDelivery(Result<DeliveryReceipt, DeliveryFailure>);

    #[async_trait::async_trait(?Send)]
    impl MessageDeliveryPort for FixedDelivery {
        async fn send(
            &self,
            _service_id: &str,
            _template_id: &str,
            _params: &TemplateParams,
        ) -> Result<DeliveryReceipt, DeliveryFailure> {
            self.0.clone()
        }
    }

    fn form_service(result: Result<DeliveryReceipt, DeliveryFailure>) -> ContactFormService {
        ContactFormService::new(
            Arc::new(FixedDelivery(result)),
            ContactFormSettings::new("service_5fvsv6q", "template_fyb7xpa"),
        )
    }

    #[wasm_bindgen_test]
    fn menu_keeps_one_container_open() {
        let page = Fixture::mount(MENU);
        let document = page.document();
        let menu = DomMenu::bind(&document);
        let item = |id: &str| document.get_element_by_id(id).unwrap();

        assert_eq!(menu.container_count(), 3);
        assert_eq!(menu.container_of(&item("item-1")), Some(1));
        assert_eq!(menu.container_of(&item("item-loose")), None);

        let controller = MenuController::new();
        assert_eq!(controller.on_item_click(&menu, Some(0)), MenuOutcome::Opened(0));
        assert_eq!(controller.on_item_click(&menu, Some(2)), MenuOutcome::Opened(2));
        assert_eq!(open_containers(&document), 1);
        assert!(menu.is_open(2));
        assert!(!menu.is_open(0));

        assert_eq!(controller.on_item_click(&menu, Some(2)), MenuOutcome::Closed(2));
        assert_eq!(open_containers(&document), 0);
    }

    #[wasm_bindgen_test]
    fn contact_form_reads_fields() {
        let page = Fixture::mount(FORM);
        let form = DomContactForm::bind(&page.document()).unwrap();

        assert_eq!(form.field_value(ContactField::Name), "Ida");
        assert_eq!(form.field_value(ContactField::Message), "Er der plads i juli?");
        assert_eq!(form.submit_label(), "Send besked");
    }

    #[wasm_bindgen_test]
    async fn successful_submit_resets_form() {
        let page = Fixture::mount(FORM);
        let document = page.document();
        let form = DomContactForm::bind(&document).unwrap();
        let name: HtmlInputElement = dom::by_id(&document, "name").unwrap();
        name.set_value("Karen");

        let outcome = form_service(Ok(DeliveryReceipt {
            status: 200,
            text: "OK".to_string(),
        }))
        .submit(&form)
        .await;

        assert!(matches!(outcome, SubmitOutcome::Sent(_)));
        assert_eq!(display_of(&document, "success-message"), "block");
        assert_eq!(display_of(&document, "error-message"), "none");
        // reset restores the markup defaults
        assert_eq!(name.value(), "Ida");
        assert_eq!(form.submit_label(), "Send besked");
        assert!(!form.submit.disabled());
    }

    #[wasm_bindgen_test]
    async fn failed_submit_shows_error() {
        let page = Fixture::mount(FORM);
        let document = page.document();
        let form = DomContactForm::bind(&document).unwrap();

        form_service(Err(DeliveryFailure::with_text(Some(400), "Invalid template")))
            .submit(&form)
            .await;

        let error: HtmlElement = dom::by_id(&document, "error-message").unwrap();
        assert_eq!(display_of(&document, "error-message"), "block");
        assert_eq!(
            error.text_content().as_deref(),
            Some("Der opstod en fejl: Invalid template")
        );
        assert_eq!(display_of(&document, "success-message"), "none");
        assert_eq!(form.submit_label(), "Send besked");
        assert!(!form.submit.disabled());
    }

    #[wasm_bindgen_test]
    fn weather_card_is_rendered() {
        let page = Fixture::mount(CARD);
        let document = page.document();
        let cards = DomWeatherCards::new(document.clone());
        let content = WeatherSnapshot {
            icon_code: "01d".to_string(),
            temperature_celsius: 15.6,
            description: "klart".to_string(),
            humidity: 80.0,
            wind_speed: 3.4,
        }
        .card_content();

        assert!(cards.render("mols-weather", &content));

        let card = document.get_element_by_id("mols-weather").unwrap();
        assert_eq!(text_of(&card, ".temperature"), "16°C");
        assert_eq!(text_of(&card, ".description"), "klart");
        assert_eq!(text_of(&card, ".humidity"), "Luftfugtighed: 80%");
        assert_eq!(text_of(&card, ".wind"), "Vind: 3 m/s");

        let icon: HtmlImageElement = dom::find_in(&card, ".weather-icon img").unwrap();
        assert_eq!(icon.src(), "https://openweathermap.org/img/wn/01d@2x.png");
        assert_eq!(icon.alt(), "Vejr ikon");
        assert!(dom::find_in::<Element>(&card, ".weather-icon span").is_none());
    }

    #[wasm_bindgen_test]
    fn missing_card_is_left_alone() {
        let page = Fixture::mount(CARD);
        let document = page.document();
        let cards = DomWeatherCards::new(document.clone());
        let content = WeatherSnapshot {
            icon_code: "10d".to_string(),
            temperature_celsius: -2.5,
            description: "let regn".to_string(),
            humidity: 91.0,
            wind_speed: 6.0,
        }
        .card_content();

        assert!(!cards.render("thy-weather", &content));

        let card = document.get_element_by_id("mols-weather").unwrap();
        assert_eq!(text_of(&card, ".temperature"), "");
        assert!(dom::find_in::<Element>(&card, ".weather-icon span").is_some());
    }
}
