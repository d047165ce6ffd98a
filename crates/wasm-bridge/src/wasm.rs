//! JavaScript surface of the timeline grid

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use chrono::Utc;
use timeline_config::{ConfigFormat, ConfigParser, ConfigValidator, TimelineConfig};
use timeline_data::{EventSource, StaticEventSource};
use timeline_shared::events::{GridInput, PhysicalPosition};
use timeline_shared::store_state::UiState;
use timeline_shared::{ErrorResponse, Event, ScrollPosition, TimelineError, View, ViewportSize};
use wasm_bindgen::prelude::*;

use crate::controller::{anchor_from_millis, TimelineController};

static INIT: Once = Once::new();

fn init_logging(config: &TimelineConfig) {
    INIT.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        let level = config
            .logging
            .level_filter()
            .ok()
            .and_then(|filter| filter.to_level());
        if let Some(level) = level {
            // Try to initialize logger, but don't panic if it fails (already initialized)
            let _ = console_log::init_with_level(level);
        }
    });
}

fn to_js_error(error: TimelineError, operation: &str) -> JsValue {
    JsValue::from_str(&ErrorResponse::new(error).with_context("Timeline", operation).to_json())
}

/// Callback invocations collected while the controller is borrowed
enum Notification {
    Selected(Event),
    DialogVisibility(bool),
}

#[derive(Default)]
struct Callbacks {
    on_event_selected: Option<js_sys::Function>,
    on_dialog_visibility_change: Option<js_sys::Function>,
}

#[wasm_bindgen]
pub struct Timeline {
    controller: Rc<RefCell<TimelineController>>,
    source: Rc<StaticEventSource>,
    pending: Rc<RefCell<Vec<Notification>>>,
    callbacks: Callbacks,
}

#[wasm_bindgen]
impl Timeline {
    /// `config_json` may be omitted for the defaults; `anchor_ms` defaults to now
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f64,
        height: f64,
        config_json: Option<String>,
        anchor_ms: Option<f64>,
    ) -> Result<Timeline, JsValue> {
        let config = match config_json {
            Some(json) => ConfigParser::parse_string(&json, ConfigFormat::Json)
                .and_then(|config| ConfigValidator::validate(&config).map(|()| config))
                .map_err(|e| to_js_error(e.into(), "new"))?,
            None => TimelineConfig::default(),
        };
        init_logging(&config);

        let anchor = match anchor_ms {
            Some(ms) => anchor_from_millis(ms).map_err(|e| to_js_error(e, "new"))?,
            None => Utc::now(),
        };

        let source = StaticEventSource::from_fixture().map_err(|e| to_js_error(e, "new"))?;
        let mut controller =
            TimelineController::new(&config, ViewportSize::new(width, height), anchor);

        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending);
        controller.on_event_selected(move |event| {
            sink.borrow_mut().push(Notification::Selected(event.clone()));
        });
        let sink = Rc::clone(&pending);
        controller.on_dialog_visibility_change(move |open| {
            sink.borrow_mut().push(Notification::DialogVisibility(open));
        });

        Ok(Timeline {
            controller: Rc::new(RefCell::new(controller)),
            source: Rc::new(source),
            pending,
            callbacks: Callbacks::default(),
        })
    }

    #[wasm_bindgen]
    pub fn set_on_event_selected(&mut self, callback: js_sys::Function) {
        self.callbacks.on_event_selected = Some(callback);
    }

    #[wasm_bindgen]
    pub fn set_on_dialog_visibility_change(&mut self, callback: js_sys::Function) {
        self.callbacks.on_dialog_visibility_change = Some(callback);
    }

    /// Replace the event list with a JSON array of events
    #[wasm_bindgen]
    pub fn set_events(&self, events_json: &str) -> Result<(), JsValue> {
        let events: Vec<Event> = serde_json::from_str(events_json)
            .map_err(|e| to_js_error(e.into(), "set_events"))?;
        self.controller.borrow_mut().set_events(events);
        Ok(())
    }

    /// Update the sidebar filters and refetch from the bundled listings
    ///
    /// The current events stay on screen until the fetch resolves; a fetch
    /// overtaken by a newer one is discarded.
    #[wasm_bindgen]
    pub fn set_filters(&self, category: String, filter: String) {
        let (ticket, query) = {
            let mut controller = self.controller.borrow_mut();
            let next = UiState {
                category,
                filter,
                ..controller.ui_state().clone()
            };
            if !controller.apply_ui_state(next).requires_data_fetch {
                return;
            }
            controller.begin_fetch()
        };

        let controller = Rc::clone(&self.controller);
        let source = Rc::clone(&self.source);
        wasm_bindgen_futures::spawn_local(async move {
            let result = source.fetch(&query).await;
            controller.borrow_mut().finish_fetch(ticket, result);
        });
    }

    #[wasm_bindgen]
    pub fn on_scroll(&self, scroll_left: f64, scroll_top: f64) {
        self.dispatch(GridInput::Scroll {
            position: ScrollPosition::new(scroll_left, scroll_top),
        });
    }

    #[wasm_bindgen]
    pub fn resize(&self, width: f64, height: f64) {
        self.dispatch(GridInput::Resize {
            size: ViewportSize::new(width, height),
        });
    }

    #[wasm_bindgen]
    pub fn set_view(&self, view: &str) -> Result<(), JsValue> {
        let view = View::parse(view).ok_or_else(|| {
            to_js_error(
                TimelineError::InvalidConfig {
                    message: format!("Unknown view: {view}"),
                    field: Some("view".to_string()),
                },
                "set_view",
            )
        })?;
        self.dispatch(GridInput::SetView { view });
        Ok(())
    }

    /// Pointer activation in viewport coordinates
    #[wasm_bindgen]
    pub fn click(&self, x: f64, y: f64) {
        self.dispatch(GridInput::Click {
            position: PhysicalPosition::new(x, y),
        });
    }

    #[wasm_bindgen]
    pub fn dismiss_dialog(&self) {
        self.dispatch(GridInput::DismissDialog);
    }

    #[wasm_bindgen]
    pub fn is_loading(&self) -> bool {
        self.controller.borrow().is_loading()
    }

    /// Current grid frame as JSON
    #[wasm_bindgen]
    pub fn frame(&self) -> Result<String, JsValue> {
        self.controller
            .borrow()
            .frame()
            .to_json()
            .map_err(|e| to_js_error(e.into(), "frame"))
    }

    /// Dialog text for the selected event, as JSON, or undefined
    #[wasm_bindgen]
    pub fn selected_details(&self) -> Result<Option<String>, JsValue> {
        self.controller
            .borrow()
            .selected_details()
            .map(|details| serde_json::to_string(&details))
            .transpose()
            .map_err(|e| to_js_error(e.into(), "selected_details"))
    }

    fn dispatch(&self, input: GridInput) {
        self.controller.borrow_mut().handle_input(input);
        self.flush_notifications();
    }

    /// Call into JS only once the controller borrow is released
    fn flush_notifications(&self) {
        let notifications: Vec<Notification> = self.pending.borrow_mut().drain(..).collect();
        for notification in notifications {
            let outcome = match notification {
                Notification::Selected(event) => match &self.callbacks.on_event_selected {
                    Some(callback) => match serde_json::to_string(&event) {
                        Ok(json) => callback.call1(&JsValue::NULL, &JsValue::from_str(&json)),
                        Err(e) => {
                            log::error!("Failed to serialize selected event: {e}");
                            continue;
                        }
                    },
                    None => continue,
                },
                Notification::DialogVisibility(open) => {
                    match &self.callbacks.on_dialog_visibility_change {
                        Some(callback) => callback.call1(&JsValue::NULL, &JsValue::from_bool(open)),
                        None => continue,
                    }
                }
            };
            if let Err(e) = outcome {
                log::error!("Timeline callback threw: {e:?}");
            }
        }
    }
}
