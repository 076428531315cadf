//! Display model
//!
//! Pure functions from a controller [`Snapshot`] to what the camera screen
//! shows. Nothing here paints; renderers consume these values.

use crate::config::{CameraConfig, Choice, MENU_LEN, MenuOption, MultiShotMode, OperationMode};
use crate::controller::{Screen, Snapshot};
use chrono::NaiveDateTime;

/// Battery gauge; the simulator has no battery to read
pub const BATTERY_LEVEL: &str = "100%";

/// Images stored over card capacity; the simulator has no card to read
pub const SD_CARD_USAGE: &str = "0123/1550";

/// Value editor shown for one menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionView {
    /// One value out of an ordered list
    Choice {
        /// Menu label
        title: &'static str,
        /// Labels of the domain, in cycling order
        choices: Vec<&'static str>,
        /// Position of the current value in `choices`
        selected: usize,
    },
    /// On/off switch
    Toggle {
        /// Menu label
        title: &'static str,
        /// Current state
        on: bool,
    },
    /// Device clock editor
    DateTime {
        /// Menu label
        title: &'static str,
        /// Current clock
        value: NaiveDateTime,
    },
    /// Free-text field
    FreeText {
        /// Menu label
        title: &'static str,
        /// Current text
        value: String,
    },
}

impl OptionView {
    /// Editor for an enumerated setting
    pub fn choice<T: Choice>(option: MenuOption, value: T) -> Self {
        Self::Choice {
            title: option.label(),
            choices: T::labels(),
            selected: value.position(),
        }
    }

    /// Editor for an on/off setting
    pub fn toggle(option: MenuOption, on: bool) -> Self {
        Self::Toggle {
            title: option.label(),
            on,
        }
    }

    /// Heading of the editor
    pub fn title(&self) -> &'static str {
        match self {
            Self::Choice { title, .. }
            | Self::Toggle { title, .. }
            | Self::DateTime { title, .. }
            | Self::FreeText { title, .. } => title,
        }
    }

    /// Editor for `option` showing the values in `config`
    ///
    /// Returns `None` for action entries and for entries that group several
    /// settings under one screen.
    pub fn for_option(option: MenuOption, config: &CameraConfig) -> Option<Self> {
        let view = match option {
            MenuOption::SetupDateTime => Self::DateTime {
                title: option.label(),
                value: config.current_date,
            },
            MenuOption::OperationMode => Self::choice(option, config.mode),
            MenuOption::PhotoQuality => Self::choice(option, config.photo_resolution),
            MenuOption::VideoLength => Self::choice(option, config.video_length),
            MenuOption::VideoQuality => Self::choice(option, config.video_resolution),
            MenuOption::PhotoDelay => Self::choice(option, config.photo_delay),
            MenuOption::MultiShotMode => Self::choice(option, config.multi_shot_mode),
            MenuOption::TempUnits => Self::choice(option, config.temp_units),
            MenuOption::CameraName => Self::FreeText {
                title: option.label(),
                value: config.camera_name.clone(),
            },
            MenuOption::ImageDataStrip => Self::toggle(option, config.image_data_strip),
            MenuOption::MotionTest => Self::toggle(option, config.motion_test),
            MenuOption::MotionDetection => Self::choice(option, config.motion_detection),
            MenuOption::TriggerSpeed => Self::choice(option, config.trigger_speed),
            MenuOption::BatteryType => Self::choice(option, config.battery_type),
            MenuOption::IrFlashRange => Self::choice(option, config.ir_flash_range),
            MenuOption::SmartIrVideo => Self::toggle(option, config.smart_ir_video),
            MenuOption::SdManagement => Self::toggle(option, config.sd_management),
            MenuOption::Language => Self::choice(option, config.language),
            MenuOption::Hdr => Self::toggle(option, config.hdr),
            MenuOption::TimelapseSettings
            | MenuOption::CaptureTimer
            | MenuOption::DefaultSettings
            | MenuOption::DeleteAll
            | MenuOption::FirmwareUpgrade => return None,
        };
        Some(view)
    }
}

/// Status screen contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainView {
    /// Operation mode label
    pub mode: &'static str,
    /// Countdown as `00:SS`
    pub timer: String,
    /// Two mode-dependent summary lines
    pub summary: [String; 2],
    /// Battery gauge
    pub battery: &'static str,
    /// Card usage
    pub sd_usage: &'static str,
    /// Shown while motion test mode is on
    pub motion_indicator: bool,
    /// Device clock
    pub clock: NaiveDateTime,
    /// Camera name
    pub camera_name: String,
}

impl MainView {
    /// Build the status screen for `config` and the countdown value
    pub fn new(config: &CameraConfig, countdown: Option<u8>) -> Self {
        Self {
            mode: config.mode.label(),
            timer: format!("00:{:02}", countdown.unwrap_or(0)),
            summary: summary_lines(config),
            battery: BATTERY_LEVEL,
            sd_usage: SD_CARD_USAGE,
            motion_indicator: config.motion_test,
            clock: config.current_date,
            camera_name: config.camera_name.clone(),
        }
    }
}

fn summary_lines(config: &CameraConfig) -> [String; 2] {
    match config.mode {
        OperationMode::Video => [
            format!("Video Resolution {}", config.video_resolution),
            format!("Video Length {}", config.video_length),
        ],
        OperationMode::TimelapsePlus => [
            "Timelapse Plus".to_string(),
            format!("Resolution {}", config.photo_resolution),
        ],
        OperationMode::TrailCam => {
            let shots = match config.multi_shot_mode {
                MultiShotMode::Single => "1",
                other => other.label(),
            };
            [
                format!("Resolution {}", config.photo_resolution),
                format!("Shot {shots}"),
            ]
        }
    }
}

/// What the screen shows for one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    /// Status screen
    Main(MainView),
    /// Settings list with the cursor on `highlighted`
    Menu {
        /// Every menu label, in traversal order
        labels: Vec<&'static str>,
        /// Cursor position
        highlighted: usize,
    },
    /// Value editor of the selected entry
    Detail(OptionView),
}

impl ScreenView {
    /// Derive the view from a controller snapshot
    ///
    /// A detail screen for an entry without an editor shows the menu instead.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        match snapshot.screen {
            Screen::Main => Self::Main(MainView::new(&snapshot.config, snapshot.countdown)),
            Screen::OptionDetail => snapshot
                .selected_menu_option
                .and_then(|option| OptionView::for_option(option, &snapshot.config))
                .map_or_else(|| Self::menu(snapshot), Self::Detail),
            Screen::SettingsMenu => Self::menu(snapshot),
        }
    }

    fn menu(snapshot: &Snapshot) -> Self {
        Self::Menu {
            labels: MenuOption::labels(),
            highlighted: snapshot.selected_menu_index % MENU_LEN,
        }
    }
}
