//! Unified configuration loading for walkbox.
//!
//! Scene-independent navigation settings load from a single YAML file
//! into [`NavConfig`]. Every field has a default, so a missing file or
//! an empty document yields a fully usable configuration.

mod defaults;
mod error;
mod nav;

pub use error::ConfigLoadError;
pub use nav::{ClearanceSection, GridSection, MovementSection, NavConfig, SearchSection};
