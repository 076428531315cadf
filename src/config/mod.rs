//! Configuration management module
//!
//! This module handles the camera settings record: its value domains, the
//! serialized model and the store that loads it once at startup and rewrites
//! it after every change. Writes replace the whole file atomically.

pub mod domains;
pub mod manager;
pub mod models;

pub use domains::{
    BatteryType, Choice, IrFlashRange, Language, MENU_LEN, MenuOption, MotionDetection, MultiShotMode,
    OperationMode, PhotoDelay, PhotoResolution, TempUnits, TimeLapseFreq, TimeLapsePeriod,
    TriggerSpeed, VideoLength, VideoResolution,
};
pub use manager::{ConfigManager, ConfigStore, MemoryConfigStore};
pub use models::{CameraConfig, CaptureTimer};
