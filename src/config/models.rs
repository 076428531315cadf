//! Camera settings data model
//!
//! This module defines the record persisted by the settings store. Keys are
//! camelCase and enumerated values are stored as their display labels, so the
//! file reads the same as the camera's own menus.

use crate::config::domains::{
    BatteryType, IrFlashRange, Language, MenuOption, MotionDetection, MultiShotMode, OperationMode, PhotoDelay,
    PhotoResolution, TempUnits, TimeLapseFreq, TimeLapsePeriod, TriggerSpeed, VideoLength,
    VideoResolution,
};
use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Name given to a camera that has never been renamed
pub const DEFAULT_CAMERA_NAME: &str = "BROWNING CAM";

/// Daily capture window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureTimer {
    /// Whether captures are restricted to the window
    pub enabled: bool,
    /// Start of the window
    #[serde(with = "hour_minute")]
    pub start_time: NaiveTime,
    /// End of the window
    #[serde(with = "hour_minute")]
    pub stop_time: NaiveTime,
}

impl Default for CaptureTimer {
    fn default() -> Self {
        Self {
            enabled: false,
            start_time: NaiveTime::MIN,
            stop_time: NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// Complete camera configuration
///
/// Missing keys in a stored record are filled from the defaults, so files
/// written before a setting existed still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraConfig {
    /// Operation mode
    pub mode: OperationMode,
    /// Still image resolution
    pub photo_resolution: PhotoResolution,
    /// Video resolution
    pub video_resolution: VideoResolution,
    /// Video clip length
    pub video_length: VideoLength,
    /// Delay between triggers
    pub photo_delay: PhotoDelay,
    /// Shots per trigger
    pub multi_shot_mode: MultiShotMode,
    /// Temperature units
    pub temp_units: TempUnits,
    /// Free-text camera name stamped on images
    pub camera_name: String,
    /// Whether the data strip is printed on images
    pub image_data_strip: bool,
    /// Whether motion test mode is active
    pub motion_test: bool,
    /// Motion sensor range
    pub motion_detection: MotionDetection,
    /// Trigger speed
    pub trigger_speed: TriggerSpeed,
    /// Battery chemistry
    pub battery_type: BatteryType,
    /// Whether timelapse capture is enabled
    pub time_lapse_enabled: bool,
    /// Timelapse interval
    pub time_lapse_freq: TimeLapseFreq,
    /// Timelapse daily period
    pub time_lapse_period: TimeLapsePeriod,
    /// Infrared flash reach
    pub ir_flash_range: IrFlashRange,
    /// Smart IR video
    #[serde(rename = "smartIRVideo")]
    pub smart_ir_video: bool,
    /// Whether the oldest images are overwritten when the card fills
    pub sd_management: bool,
    /// Display language
    pub language: Language,
    /// Daily capture window
    pub capture_timer: CaptureTimer,
    /// HDR imaging
    pub hdr: bool,
    /// Device clock, kept at whole-minute precision
    #[serde(with = "minute_timestamp")]
    pub current_date: NaiveDateTime,
    /// Menu cursor; not a camera setting, stored alongside for convenience
    pub selected_menu_option: Option<MenuOption>,
}

impl CameraConfig {
    /// Factory defaults with the device clock set to `clock`
    pub fn defaults_at(clock: NaiveDateTime) -> Self {
        Self {
            mode: OperationMode::default(),
            photo_resolution: PhotoResolution::default(),
            video_resolution: VideoResolution::default(),
            video_length: VideoLength::default(),
            photo_delay: PhotoDelay::default(),
            multi_shot_mode: MultiShotMode::default(),
            temp_units: TempUnits::default(),
            camera_name: DEFAULT_CAMERA_NAME.to_string(),
            image_data_strip: true,
            motion_test: false,
            motion_detection: MotionDetection::default(),
            trigger_speed: TriggerSpeed::default(),
            battery_type: BatteryType::default(),
            time_lapse_enabled: false,
            time_lapse_freq: TimeLapseFreq::default(),
            time_lapse_period: TimeLapsePeriod::default(),
            ir_flash_range: IrFlashRange::default(),
            smart_ir_video: false,
            sd_management: false,
            language: Language::default(),
            capture_timer: CaptureTimer::default(),
            hdr: false,
            current_date: truncate_to_minute(clock),
            selected_menu_option: None,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::defaults_at(device_now())
    }
}

/// Local wall-clock time at whole-minute precision
pub fn device_now() -> NaiveDateTime {
    truncate_to_minute(Local::now().naive_local())
}

/// Drop seconds and sub-second precision
pub fn truncate_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    value
        .with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(value)
}

/// `YYYY-MM-DDTHH:MM` timestamps; RFC 3339 and second-precision input is
/// accepted and truncated to the minute.
mod minute_timestamp {
    use super::truncate_to_minute;
    use chrono::{DateTime, Local, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%dT%H:%M";
    const FORMAT_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, FORMAT_WITH_SECONDS))
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.with_timezone(&Local).naive_local())
            })
            .map(truncate_to_minute)
    }
}

/// `HH:MM` wall-clock times
mod hour_minute {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid time {raw}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 34, 56)
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = CameraConfig::defaults_at(clock());
        assert_eq!(config.mode, OperationMode::TrailCam);
        assert_eq!(config.photo_resolution, PhotoResolution::Mp12);
        assert_eq!(config.video_length, VideoLength::Secs30);
        assert_eq!(config.camera_name, "BROWNING CAM");
        assert!(config.image_data_strip);
        assert!(!config.sd_management);
        assert_eq!(config.selected_menu_option, None);
        assert_eq!(config.capture_timer.stop_time.to_string(), "23:59:00");
        // Seconds are dropped from the clock
        assert_eq!(config.current_date.second(), 0);
        assert_eq!(config.current_date.minute(), 34);
    }

    #[test]
    fn test_serialized_keys_and_labels() {
        let config = CameraConfig::defaults_at(clock());
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["mode"], "TRAIL CAM");
        assert_eq!(value["photoResolution"], "12MP");
        assert_eq!(value["smartIRVideo"], false);
        assert_eq!(value["irFlashRange"], "Economy");
        assert_eq!(value["currentDate"], "2024-05-01T12:34");
        assert_eq!(value["captureTimer"]["startTime"], "00:00");
        assert_eq!(value["captureTimer"]["stopTime"], "23:59");
        assert!(value["selectedMenuOption"].is_null());
    }

    #[test]
    fn test_serialization_preserves_every_field() {
        let mut config = CameraConfig::defaults_at(clock());
        config.mode = OperationMode::Video;
        config.photo_resolution = PhotoResolution::Mp24;
        config.video_resolution = VideoResolution::FullHd60;
        config.video_length = VideoLength::Min2;
        config.photo_delay = PhotoDelay::Min30;
        config.multi_shot_mode = MultiShotMode::MultiShot;
        config.temp_units = TempUnits::Celsius;
        config.camera_name = "RIDGE NORTH".to_string();
        config.image_data_strip = false;
        config.motion_test = true;
        config.motion_detection = MotionDetection::LongRange;
        config.trigger_speed = TriggerSpeed::Fast;
        config.battery_type = BatteryType::Lithium;
        config.time_lapse_enabled = true;
        config.time_lapse_freq = TimeLapseFreq::Min10;
        config.time_lapse_period = TimeLapsePeriod::Hour3;
        config.ir_flash_range = IrFlashRange::FastMotion;
        config.smart_ir_video = true;
        config.sd_management = true;
        config.capture_timer = CaptureTimer {
            enabled: true,
            start_time: NaiveTime::from_hms_opt(6, 15, 0).unwrap(),
            stop_time: NaiveTime::from_hms_opt(19, 45, 0).unwrap(),
        };
        config.hdr = true;
        config.selected_menu_option = Some(MenuOption::Hdr);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CameraConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: CameraConfig =
            serde_json::from_str(r#"{"photoResolution": "4MP", "currentDate": "2023-01-02T03:04"}"#)
                .unwrap();
        assert_eq!(config.photo_resolution, PhotoResolution::Mp4);
        assert_eq!(config.mode, OperationMode::TrailCam);
        assert_eq!(config.camera_name, DEFAULT_CAMERA_NAME);
        assert_eq!(config.current_date.to_string(), "2023-01-02 03:04:00");
    }

    #[test]
    fn test_rfc3339_timestamp_accepted() {
        let parsed = minute_timestamp::parse("2024-05-01T12:34:56.789Z").unwrap();
        assert_eq!(parsed.second(), 0);
        assert_eq!(parsed.nanosecond(), 0);

        let parsed = minute_timestamp::parse("2024-05-01T12:34:56").unwrap();
        assert_eq!(parsed, truncate_to_minute(clock()));
    }

    #[test]
    fn test_out_of_domain_value_rejected() {
        let result: Result<CameraConfig, _> = serde_json::from_str(r#"{"photoResolution": "48MP"}"#);
        assert!(result.is_err());

        let result: Result<CameraConfig, _> = serde_json::from_str(r#"{"currentDate": "yesterday"}"#);
        assert!(result.is_err());
    }
}
