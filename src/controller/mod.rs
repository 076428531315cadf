//! Menu logic controller module
//!
//! This module turns panel button presses into screen changes and settings
//! changes, implementing the core camera menu logic.
//!
//! # Overview
//!
//! The menu controller is the single owner of the camera state:
//! - **Receives button events** from the console or any other input source
//! - **Applies the transition table** for the current screen
//! - **Adjusts settings** through the option handler registry
//! - **Writes settings through** to the store after every change
//! - **Publishes snapshots** to the renderer
//!
//! # Architecture
//!
//! - `MenuController`: State machine owning the settings and session state
//! - `OptionHandlers`: Registry mapping a menu entry to its UP/DOWN/RIGHT behavior
//! - `Countdown`: Power-on arm timer driven by ticks
//! - `Snapshot`: State copy sent to the renderer
//!
//! # Event Flow
//!
//! ```text
//! Input → ControllerEvent → MenuController → ConfigStore
//!                                  ↓
//!                              Snapshot → Renderer
//! ```
//!
//! # Screens
//!
//! 1. **MAIN**: status screen. MODE opens the menu, ENTER starts the countdown.
//! 2. **SETTINGS_MENU**: UP/DOWN move a cyclic cursor over the 24 entries.
//!    ENTER opens the entry's detail screen or runs its action.
//! 3. **OPTION_DETAIL**: UP/DOWN change the value. MODE or ENTER go back.
//!
//! POWER_ON and POWER_OFF act on every screen.

pub mod countdown;
pub mod events;
pub mod handlers;
pub mod menu_controller;

pub use countdown::{COUNTDOWN_START, Countdown};
pub use events::{ButtonKind, ControllerEvent};
pub use handlers::{Adjust, OptionHandler, OptionHandlers};
pub use menu_controller::{DELETE_ALL_NOTICE, MenuController, RESET_NOTICE, Screen, Snapshot};
