// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the dataset model, redraw pipeline, session state machine and output backends.

pub mod axis;
pub mod chart;
pub mod config;
pub mod curve;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod loader;
pub mod scale;
pub mod scene;
pub mod session;
pub mod svg;
pub mod theme;
pub mod types;
#[cfg(feature = "png")]
pub mod raster;

pub use axis::{Axis, TickFormat};
pub use chart::{redraw, resolve, selector_options, Frame, LegendEntry, SelectOption, Selection, ALL_EVENTS};
pub use config::{load_config, ChartConfig};
pub use dataset::{DataPoint, Dataset, Event, Series};
pub use error::{ConfigError, LoadError, RenderError};
pub use loader::{load_dataset, parse_dataset};
pub use scale::LinearScale;
pub use scene::{Primitive, Role, Scene, TooltipContent};
pub use session::{AppState, Session, Tooltip};
pub use theme::{Color, RankPalette, Theme};
#[cfg(feature = "png")]
pub use raster::RasterOptions;
