//! Option handler registry
//!
//! Maps a settings-menu entry to the functions that adjust its value while its
//! detail screen is open. An entry without a handler has no detail screen and
//! ignores UP/DOWN/RIGHT. Adding a setting means registering one more handler.

use crate::config::{CameraConfig, Choice, MenuOption};
use chrono::TimeDelta;
use std::collections::HashMap;

/// In-place adjustment of one setting
pub type Adjust = fn(&mut CameraConfig);

/// Behavior of one menu entry on its detail screen
#[derive(Debug, Clone, Copy)]
pub struct OptionHandler {
    /// Applied on UP
    pub up: Adjust,
    /// Applied on DOWN
    pub down: Adjust,
    /// Applied on RIGHT, if the entry reacts to it
    pub right: Option<Adjust>,
}

impl OptionHandler {
    /// Handler whose UP/DOWN move through an enumerated domain
    pub const fn cycle(up: Adjust, down: Adjust) -> Self {
        Self {
            up,
            down,
            right: None,
        }
    }

    /// Handler for an on/off setting; UP and DOWN both flip it
    pub const fn toggle(flip: Adjust) -> Self {
        Self {
            up: flip,
            down: flip,
            right: None,
        }
    }
}

/// Registry of option handlers keyed by menu entry
#[derive(Debug, Clone, Default)]
pub struct OptionHandlers {
    handlers: HashMap<MenuOption, OptionHandler>,
}

impl OptionHandlers {
    /// Registry with no handlers
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with the entries that have a detail screen on the camera
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(MenuOption::SetupDateTime, date_time_handler());
        registry.register(
            MenuOption::OperationMode,
            OptionHandler::cycle(
                |c| c.mode = c.mode.prev(),
                |c| c.mode = c.mode.next(),
            ),
        );
        registry.register(
            MenuOption::PhotoQuality,
            OptionHandler::cycle(
                |c| c.photo_resolution = c.photo_resolution.prev(),
                |c| c.photo_resolution = c.photo_resolution.next(),
            ),
        );
        registry.register(
            MenuOption::VideoLength,
            OptionHandler::cycle(
                |c| c.video_length = c.video_length.prev(),
                |c| c.video_length = c.video_length.next(),
            ),
        );
        registry.register(
            MenuOption::SdManagement,
            OptionHandler::toggle(|c| c.sd_management = !c.sd_management),
        );
        registry.register(
            MenuOption::MotionTest,
            OptionHandler::toggle(|c| c.motion_test = !c.motion_test),
        );
        registry
    }

    /// Add or replace the handler for `option`
    pub fn register(&mut self, option: MenuOption, handler: OptionHandler) -> &mut Self {
        self.handlers.insert(option, handler);
        self
    }

    /// Handler bound to `option`, if any
    pub fn get(&self, option: MenuOption) -> Option<&OptionHandler> {
        self.handlers.get(&option)
    }

    /// Whether `option` opens a detail screen
    pub fn has_detail(&self, option: MenuOption) -> bool {
        self.handlers.contains_key(&option)
    }
}

/// UP/DOWN move the clock by a day, RIGHT by an hour
fn date_time_handler() -> OptionHandler {
    OptionHandler {
        up: day_forward,
        down: day_back,
        right: Some(hour_forward as Adjust),
    }
}

fn day_forward(config: &mut CameraConfig) {
    shift_clock(config, TimeDelta::days(1));
}

fn day_back(config: &mut CameraConfig) {
    shift_clock(config, TimeDelta::days(-1));
}

fn hour_forward(config: &mut CameraConfig) {
    shift_clock(config, TimeDelta::hours(1));
}

fn shift_clock(config: &mut CameraConfig, delta: TimeDelta) {
    if let Some(shifted) = config.current_date.checked_add_signed(delta) {
        config.current_date = shifted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OperationMode, PhotoResolution, VideoLength};
    use chrono::NaiveDate;

    fn config() -> CameraConfig {
        let clock = NaiveDate::from_ymd_opt(2024, 2, 28)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        CameraConfig::defaults_at(clock)
    }

    #[test]
    fn test_standard_registry_entries() {
        let registry = OptionHandlers::standard();
        for option in [
            MenuOption::SetupDateTime,
            MenuOption::PhotoQuality,
            MenuOption::OperationMode,
            MenuOption::VideoLength,
            MenuOption::SdManagement,
            MenuOption::MotionTest,
        ] {
            assert!(registry.has_detail(option), "{option} should have a detail screen");
        }
        assert!(!registry.has_detail(MenuOption::CameraName));
        assert!(!registry.has_detail(MenuOption::DefaultSettings));
        assert!(!registry.has_detail(MenuOption::FirmwareUpgrade));
    }

    #[test]
    fn test_cycle_handlers() {
        let registry = OptionHandlers::standard();
        let mut c = config();

        let photo = registry.get(MenuOption::PhotoQuality).unwrap();
        (photo.down)(&mut c);
        assert_eq!(c.photo_resolution, PhotoResolution::Mp24);
        (photo.down)(&mut c);
        assert_eq!(c.photo_resolution, PhotoResolution::Mp4);
        (photo.up)(&mut c);
        assert_eq!(c.photo_resolution, PhotoResolution::Mp24);

        let mode = registry.get(MenuOption::OperationMode).unwrap();
        (mode.up)(&mut c);
        assert_eq!(c.mode, OperationMode::Video);

        let length = registry.get(MenuOption::VideoLength).unwrap();
        (length.down)(&mut c);
        assert_eq!(c.video_length, VideoLength::Min1);
    }

    #[test]
    fn test_toggle_handlers() {
        let registry = OptionHandlers::standard();
        let mut c = config();

        let sd = registry.get(MenuOption::SdManagement).unwrap();
        (sd.up)(&mut c);
        assert!(c.sd_management);
        (sd.down)(&mut c);
        assert!(!c.sd_management);

        let motion = registry.get(MenuOption::MotionTest).unwrap();
        (motion.down)(&mut c);
        assert!(c.motion_test);
    }

    #[test]
    fn test_date_time_handler() {
        let registry = OptionHandlers::standard();
        let mut c = config();
        let handler = registry.get(MenuOption::SetupDateTime).unwrap();

        // Crosses into the leap day, then the next month
        (handler.up)(&mut c);
        assert_eq!(c.current_date.to_string(), "2024-02-29 23:30:00");
        (handler.right.unwrap())(&mut c);
        assert_eq!(c.current_date.to_string(), "2024-03-01 00:30:00");
        (handler.down)(&mut c);
        assert_eq!(c.current_date.to_string(), "2024-02-29 00:30:00");
    }

    #[test]
    fn test_register_new_handler() {
        let mut registry = OptionHandlers::standard();
        registry.register(MenuOption::Hdr, OptionHandler::toggle(|c| c.hdr = !c.hdr));

        let mut c = config();
        (registry.get(MenuOption::Hdr).unwrap().up)(&mut c);
        assert!(c.hdr);
        // Existing handlers are untouched
        assert!(registry.has_detail(MenuOption::PhotoQuality));
    }
}
