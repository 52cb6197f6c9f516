// File: crates/chart-core/src/session.rs
// Summary: Session state machine (Loading -> Error | Ready(selection)) owning the dataset,
// the current frame and the reusable tooltip overlay.

use std::path::Path;

use tracing::{debug, error, info};

use crate::chart::{redraw, selector_options, Frame, SelectOption, Selection};
use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::geometry::Point;
use crate::loader::load_dataset;
use crate::scene::TooltipContent;

/// Opacity of a shown tooltip.
pub const TOOLTIP_OPACITY: f64 = 0.9;
/// Tooltip offset from the cursor on hover-enter.
pub const TOOLTIP_OFFSET: Point = Point::new(10.0, -28.0);
/// Extra hit radius around markers, in logical units.
pub const HOVER_SLOP: f64 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub enum AppState {
    Loading,
    /// Terminal: the dataset could not be loaded. `message` is what the chart area shows,
    /// `cause` the underlying load error.
    Error { message: String, cause: String },
    Ready { dataset: Dataset, selection: Selection },
}

impl AppState {
    pub fn name(&self) -> &'static str {
        match self {
            AppState::Loading => "loading",
            AppState::Error { .. } => "error",
            AppState::Ready { .. } => "ready",
        }
    }
}

/// The single tooltip overlay, reused across hovers. Hidden means opacity 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub opacity: f64,
    pub pos: Point,
    pub content: Option<TooltipContent>,
    /// Index into the frame's markers currently hovered.
    hovered: Option<usize>,
}

impl Tooltip {
    pub fn is_visible(&self) -> bool { self.opacity > 0.0 }

    fn show(&mut self, index: usize, cursor: Point, content: TooltipContent) {
        self.hovered = Some(index);
        self.opacity = TOOLTIP_OPACITY;
        self.pos = Point::new(cursor.x + TOOLTIP_OFFSET.x, cursor.y + TOOLTIP_OFFSET.y);
        self.content = Some(content);
    }

    fn hide(&mut self) {
        self.hovered = None;
        self.opacity = 0.0;
    }
}

pub struct Session {
    config: ChartConfig,
    state: AppState,
    options: Vec<SelectOption>,
    frame: Option<Frame>,
    tooltip: Tooltip,
}

impl Session {
    pub fn new(config: ChartConfig) -> Self {
        Self { config, state: AppState::Loading, options: Vec::new(), frame: None, tooltip: Tooltip::default() }
    }

    /// Load the dataset at `path` and apply the matching transition.
    pub fn load(config: ChartConfig, path: impl AsRef<Path>) -> Self {
        let mut session = Self::new(config);
        match load_dataset(path) {
            Ok(dataset) => session.load_succeeded(dataset),
            Err(e) => session.load_failed(&e),
        }
        session
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    pub fn state(&self) -> &AppState { &self.state }

    pub fn options(&self) -> &[SelectOption] { &self.options }

    pub fn frame(&self) -> Option<&Frame> { self.frame.as_ref() }

    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.state {
            AppState::Ready { dataset, .. } => Some(dataset),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            AppState::Ready { selection, .. } => Some(selection),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            AppState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Underlying load failure, for diagnostics.
    pub fn error_cause(&self) -> Option<&str> {
        match &self.state {
            AppState::Error { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// Loading -> Ready. Populates options, resets the tooltip and draws the default selection.
    pub fn load_succeeded(&mut self, dataset: Dataset) {
        if !matches!(self.state, AppState::Loading) {
            debug!(state = self.state.name(), "ignoring load result outside loading state");
            return;
        }
        self.options = selector_options(&dataset);
        self.tooltip = Tooltip::default();
        info!(events = self.options.len(), "session initialized");
        let selection = Selection::default();
        self.frame = Some(redraw(&dataset, &selection, &self.config));
        self.state = AppState::Ready { dataset, selection };
    }

    /// Loading -> Error. The chart is replaced by the configured static message.
    pub fn load_failed(&mut self, err: &LoadError) {
        if !matches!(self.state, AppState::Loading) {
            return;
        }
        error!(error = %err, "dataset load failed");
        self.frame = None;
        self.state = AppState::Error { message: self.config.load_error_message.clone(), cause: err.to_string() };
    }

    /// Ready(_) -> Ready(value). Redraws from scratch; ignored in other states.
    pub fn select(&mut self, value: &str) -> Option<&Frame> {
        let state = self.state.name();
        let AppState::Ready { dataset, selection } = &mut self.state else {
            debug!(value, state, "selection ignored");
            return None;
        };
        *selection = Selection::parse(value);
        info!(selection = value, "selection changed");
        self.tooltip.hide();
        self.frame = Some(redraw(dataset, selection, &self.config));
        self.frame.as_ref()
    }

    /// Hover hit-testing against the current frame's markers. Returns true when the
    /// tooltip changed (hover-enter on a new marker, or hover-exit).
    pub fn pointer_move(&mut self, cursor: Point) -> bool {
        let Some(frame) = &self.frame else { return false };
        // Later markers paint on top, so they win ties.
        let hit = frame
            .markers()
            .enumerate()
            .filter(|(_, (center, radius, _))| center.distance(cursor) <= radius + HOVER_SLOP)
            .last()
            .map(|(i, (_, _, content))| (i, content.clone()));
        match hit {
            Some((i, _)) if self.tooltip.hovered == Some(i) => false,
            Some((i, content)) => {
                self.tooltip.show(i, cursor, content);
                true
            }
            None if self.tooltip.hovered.is_some() => {
                self.tooltip.hide();
                true
            }
            None => false,
        }
    }

    /// Cursor left the drawing surface.
    pub fn pointer_leave(&mut self) {
        self.tooltip.hide();
    }
}
