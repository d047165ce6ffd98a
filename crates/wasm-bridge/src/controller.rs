//! In-process grid controller
//!
//! Owns everything the grid renderer is a pure function of: the time axis,
//! the layout, the scroll offset and the current event list. Every input
//! just updates that state; [`TimelineController::frame`] recomputes the
//! visible grid from scratch on each call.

use chrono::{DateTime, TimeZone, Utc};
use timeline_axis::TimeAxis;
use timeline_config::{GridSettings, TimelineConfig};
use timeline_data::{EventFeed, EventQuery, FetchTicket};
use timeline_renderer::{
    render_frame, CategoryStyles, EventDetails, FrameInput, GridFrame, GridLayout, VenueIndex,
};
use timeline_shared::events::{GridInput, PhysicalPosition};
use timeline_shared::store_state::{StateChangeDetection, UiState};
use timeline_shared::{Event, ScrollPosition, TimelineError, TimelineResult, View, ViewportSize};

pub type EventSelectedCallback = Box<dyn FnMut(&Event)>;
pub type DialogVisibilityCallback = Box<dyn FnMut(bool)>;

/// Anchor instant from a JS millisecond timestamp
///
/// `NaN`, infinities and instants chrono cannot represent are rejected
/// rather than cast to the epoch or clamped.
pub fn anchor_from_millis(ms: f64) -> TimelineResult<DateTime<Utc>> {
    let invalid = || TimelineError::InvalidConfig {
        message: format!("Anchor {ms} is not a valid timestamp"),
        field: Some("anchor_ms".to_string()),
    };
    if !ms.is_finite() {
        return Err(invalid());
    }
    Utc.timestamp_millis_opt(ms as i64).single().ok_or_else(invalid)
}

pub struct TimelineController {
    axis: TimeAxis,
    settings: GridSettings,
    layout: GridLayout,
    styles: CategoryStyles,
    scroll: ScrollPosition,
    feed: EventFeed,
    /// Derived from the feed's events whenever they change hands
    venues: VenueIndex,
    ui: UiState,
    on_event_selected: Option<EventSelectedCallback>,
    on_dialog_visibility_change: Option<DialogVisibilityCallback>,
}

impl TimelineController {
    /// New grid anchored at `anchor`, scrolled so the anchor is centred
    pub fn new(config: &TimelineConfig, viewport: ViewportSize, anchor: DateTime<Utc>) -> Self {
        let view = config.default_view;
        let axis = TimeAxis::new(view, anchor);
        let layout = config.grid.layout_for(viewport);
        let scroll = ScrollPosition::new(layout.initial_scroll_left(&axis), 0.0);

        log::info!(
            "Timeline created: {} view anchored at {}, viewport {}x{}",
            view,
            anchor,
            viewport.width,
            viewport.height
        );

        Self {
            axis,
            settings: config.grid.clone(),
            layout,
            styles: config.styles.clone(),
            scroll,
            feed: EventFeed::new(),
            venues: VenueIndex::default(),
            ui: UiState {
                view,
                ..UiState::default()
            },
            on_event_selected: None,
            on_dialog_visibility_change: None,
        }
    }

    pub fn on_event_selected(&mut self, callback: impl FnMut(&Event) + 'static) {
        self.on_event_selected = Some(Box::new(callback));
    }

    pub fn on_dialog_visibility_change(&mut self, callback: impl FnMut(bool) + 'static) {
        self.on_dialog_visibility_change = Some(Box::new(callback));
    }

    pub fn view(&self) -> View {
        self.axis.view()
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.axis.anchor()
    }

    pub fn scroll(&self) -> ScrollPosition {
        self.scroll
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn events(&self) -> &[Event] {
        self.feed.events()
    }

    pub fn venues(&self) -> &VenueIndex {
        &self.venues
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    pub fn is_loading(&self) -> bool {
        self.feed.is_loading()
    }

    /// Query matching the current sidebar state
    pub fn query(&self) -> EventQuery {
        EventQuery::new(self.ui.category.clone(), self.ui.filter.clone())
    }

    /// Replace the event list outright
    pub fn set_events(&mut self, events: Vec<Event>) {
        let ticket = self.feed.begin(self.query());
        self.finish_fetch(ticket, Ok(events));
    }

    /// Start a fetch for the current query; the old list stays visible
    pub fn begin_fetch(&mut self) -> (FetchTicket, EventQuery) {
        let query = self.query();
        (self.feed.begin(query.clone()), query)
    }

    /// Apply a fetch result. Returns whether the visible list changed.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: TimelineResult<Vec<Event>>,
    ) -> bool {
        if !self.feed.resolve(ticket, result) {
            return false;
        }
        self.venues = VenueIndex::from_events(self.feed.events());
        log::debug!(
            "Event list replaced: {} events across {} venues",
            self.feed.events().len(),
            self.venues.len()
        );
        true
    }

    /// Adopt new sidebar state from the shell
    ///
    /// A view change is applied immediately; when the result asks for a data
    /// fetch the caller follows up with [`Self::begin_fetch`].
    pub fn apply_ui_state(&mut self, next: UiState) -> StateChangeDetection {
        let changes = next.detect_changes_from(&self.ui);
        for summary in &changes.change_summary {
            log::debug!("{summary}");
        }

        let view = next.view;
        self.ui = next;
        if changes.requires_relayout {
            self.set_view(view);
        }
        changes
    }

    pub fn handle_input(&mut self, input: GridInput) {
        match input {
            GridInput::Scroll { position } => {
                self.scroll = position.clamped();
            }
            GridInput::Resize { size } => {
                self.layout = self.settings.layout_for(size);
                log::debug!(
                    "Resized to {}x{}, index column {}px",
                    size.width,
                    size.height,
                    self.layout.index_width
                );
            }
            GridInput::Click { position } => self.handle_click(position),
            GridInput::SetView { view } => self.set_view(view),
            GridInput::DismissDialog => {
                self.ui.close_dialog();
                if let Some(callback) = self.on_dialog_visibility_change.as_mut() {
                    callback(false);
                }
            }
        }
    }

    /// Switch granularity, keeping the anchor and re-centring on it
    fn set_view(&mut self, view: View) {
        self.axis = self.axis.with_view(view);
        self.ui.view = view;
        self.scroll.left = self.layout.initial_scroll_left(&self.axis);
        log::info!("View switched to {view}");
    }

    fn handle_click(&mut self, position: PhysicalPosition) {
        // Sticky header row and index column never hold bars
        if position.x < self.layout.index_width || position.y < self.layout.row_height {
            return;
        }

        let x = self.scroll.left + position.x;
        let y = self.scroll.top + position.y;
        let Some(event) = self
            .frame()
            .hit_test(x, y)
            .and_then(|bar| self.feed.events().get(bar.event_index))
            .cloned()
        else {
            return;
        };

        log::debug!("Selected {:?} at {}", event.title, event.venue);
        if let Some(callback) = self.on_event_selected.as_mut() {
            callback(&event);
        }
        self.ui.select(event);
        if let Some(callback) = self.on_dialog_visibility_change.as_mut() {
            callback(true);
        }
    }

    /// Dialog text for the selected event
    pub fn selected_details(&self) -> Option<EventDetails> {
        self.ui.selected.as_ref().map(EventDetails::from_event)
    }

    pub fn frame(&self) -> GridFrame {
        render_frame(&FrameInput {
            axis: &self.axis,
            layout: &self.layout,
            scroll: self.scroll,
            events: self.feed.events(),
            venues: &self.venues,
            styles: &self.styles,
        })
    }
}
