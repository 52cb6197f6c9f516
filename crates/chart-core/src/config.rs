// File: crates/chart-core/src/config.rs
// Summary: Chart configuration (surface, margins, styling, rank bands) with TOML + env loading.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::geometry::Rect;
use crate::scale::DEFAULT_TICKS;
use crate::theme::{self, RankBand, RankPalette, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};

/// Message shown in place of the chart when the dataset cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str =
    "Error loading event data. Run the preprocessing step to generate the dataset file, then reload.";
/// Placeholder shown inside the plot when a selection resolves to nothing.
pub const NO_DATA_MESSAGE: &str = "No data available";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    /// Tick count hint for nicing and tick generation on both axes.
    pub ticks: usize,
    pub marker_radius: f64,
    pub line_width: f64,
    /// Theme preset name (`light`, `dark`).
    pub theme: String,
    /// Canonical rank bands, best-ranked first.
    pub bands: Vec<RankBand>,
    pub load_error_message: String,
    pub no_data_message: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            ticks: DEFAULT_TICKS,
            marker_radius: 4.0,
            line_width: 2.0,
            theme: "light".to_string(),
            bands: theme::default_bands(),
            load_error_message: LOAD_ERROR_MESSAGE.to_string(),
            no_data_message: NO_DATA_MESSAGE.to_string(),
        }
    }
}

impl ChartConfig {
    pub fn plot_area(&self) -> Rect {
        Rect::plot_area(self.width, self.height, &self.insets)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    pub fn palette(&self) -> RankPalette {
        RankPalette::new(self.bands.clone())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= self.insets.hsum() || self.height <= self.insets.vsum() {
            return Err(ConfigError::Invalid(format!(
                "surface {}x{} leaves no plot area inside insets {:?}",
                self.width, self.height, self.insets
            )));
        }
        if self.ticks == 0 {
            return Err(ConfigError::Invalid("ticks must be at least 1".into()));
        }
        if self.bands.is_empty() {
            return Err(ConfigError::Invalid("at least one rank band is required".into()));
        }
        Ok(())
    }
}

/// Load configuration from an optional TOML file plus `EVENT_CHART__*` environment overrides.
/// Fields absent from every source keep their defaults.
pub fn load_config(path: Option<&Path>) -> Result<ChartConfig, ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }
    let settings = builder
        .add_source(
            config::Environment::with_prefix("EVENT_CHART")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    let cfg: ChartConfig = settings.try_deserialize()?;
    cfg.validate()?;
    debug!(width = cfg.width, height = cfg.height, theme = %cfg.theme, "configuration loaded");
    Ok(cfg)
}
