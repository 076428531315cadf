//! `trailcam` - Trail camera menu simulator
//!
//! Simulates the settings menu of a trail camera driven by a small button panel.
//! A single-threaded `MenuController` consumes button and tick events, applies the
//! menu transition table, writes every settings change through a `ConfigStore`,
//! and publishes `Snapshot`s that the `view` module turns into screen contents.
//!
//! # Screens
//!
//! - MAIN: status summary and power-on countdown
//! - SETTINGS_MENU: cyclic list of 24 entries
//! - OPTION_DETAIL: value editor of the selected entry

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::{CameraConfig, ConfigManager, ConfigStore, MemoryConfigStore, MenuOption};
pub use controller::{ButtonKind, ControllerEvent, MenuController, Screen, Snapshot};
pub use error::{Result, TrailCamError};
pub use view::{MainView, OptionView, ScreenView};
