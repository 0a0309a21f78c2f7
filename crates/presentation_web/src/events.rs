//! Binds the page features to their DOM events

use std::{rc::Rc, sync::Arc};

use anyhow::{Context, anyhow};
use application::{ContactFormService, MenuController, WeatherWidgetService};
use gloo_events::{EventListener, EventListenerOptions};
use infrastructure::{
    ContactAppConfig, EmailJsAdapter, SiteConfig, WeatherAdapter, WeatherAppConfig,
};
use tracing::{debug, error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Window};

use crate::{
    dom,
    gate::CycleGate,
    interval::IntervalHandle,
    views::{DomContactForm, DomMenu, DomWeatherCards},
};

/// Everything the page keeps alive while the client runs
#[derive(Debug)]
pub struct Site {
    _menu_listeners: Vec<EventListener>,
    _form_listener: Option<EventListener>,
    _weather_interval: Option<IntervalHandle>,
}

impl Site {
    /// Bind the menu and contact form and start the weather refresh
    ///
    /// Each feature starts on its own. One that fails is logged and left
    /// out while the others keep running.
    pub fn mount(config: &SiteConfig) -> anyhow::Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;

        let menu_listeners = bind_menu(&document);

        let form_listener = match DomContactForm::bind(&document) {
            Ok(form) => started("contact form", bind_contact_form(form, &config.contact)),
            Err(e) => {
                info!("No contact form on page: {e}");
                None
            },
        };

        let weather_interval = started(
            "weather refresh",
            start_weather(&window, &document, &config.weather),
        );

        Ok(Self {
            _menu_listeners: menu_listeners,
            _form_listener: form_listener,
            _weather_interval: weather_interval,
        })
    }
}

/// Keep a started feature, log one that failed to start
fn started<T>(feature: &str, result: anyhow::Result<T>) -> Option<T> {
    result
        .inspect_err(|e| error!(feature, "Feature not started: {e:#}"))
        .ok()
}

fn bind_menu(document: &Document) -> Vec<EventListener> {
    let view = Rc::new(DomMenu::bind(document));
    let items = dom::query_all(document, ".menu-item");
    debug!(items = items.len(), "Binding menu items");

    items
        .into_iter()
        .map(|item| {
            let view = Rc::clone(&view);
            let target = item.clone();
            EventListener::new(&item, "click", move |_| {
                let container = view.container_of(&target);
                MenuController::new().on_item_click(view.as_ref(), container);
            })
        })
        .collect()
}

fn bind_contact_form(
    form: DomContactForm,
    config: &ContactAppConfig,
) -> anyhow::Result<EventListener> {
    let adapter =
        EmailJsAdapter::new(config.to_emailjs_config()).context("Failed to create EmailJS client")?;
    let service = Rc::new(ContactFormService::new(
        Arc::new(adapter),
        config.form_settings(),
    ));
    let view = Rc::new(form);
    let target = view.form().clone();

    Ok(EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let service = Rc::clone(&service);
            let view = Rc::clone(&view);
            spawn_local(async move {
                service.submit(view.as_ref()).await;
            });
        },
    ))
}

fn start_weather(
    window: &Window,
    document: &Document,
    config: &WeatherAppConfig,
) -> anyhow::Result<IntervalHandle> {
    let adapter = WeatherAdapter::new(config.to_weather_config())?;
    let service = Rc::new(WeatherWidgetService::new(
        Arc::new(adapter),
        config.locations.clone(),
    ));
    let cards = Rc::new(DomWeatherCards::new(document.clone()));
    let gate = CycleGate::new();

    let refresh = move || {
        let Some(guard) = gate.try_enter() else {
            debug!("Previous weather refresh still running, skipping tick");
            return;
        };
        let service = Rc::clone(&service);
        let cards = Rc::clone(&cards);
        spawn_local(async move {
            let _guard = guard;
            service.refresh_all(cards.as_ref()).await;
        });
    };

    refresh();
    IntervalHandle::start(window, config.refresh_interval(), refresh)
        .map_err(|e| anyhow!("setInterval failed: {e:?}"))
}
