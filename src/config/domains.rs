//! Value domains of the camera settings
//!
//! Every enumerated setting is a closed Rust enum whose variants are listed in
//! menu order. The [`Choice`] trait exposes that order so cycling can only ever
//! land on a member of the domain.

/// A setting whose legal values form a fixed, ordered list.
pub trait Choice: Copy + PartialEq + 'static {
    /// Every legal value, in display order
    const ALL: &'static [Self];

    /// Label shown on the camera display and stored in the settings file
    fn label(self) -> &'static str;

    /// Position of this value in [`Choice::ALL`]
    fn position(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// Next value, wrapping from the last back to the first
    fn next(self) -> Self {
        let all = Self::ALL;
        all[(self.position() + 1) % all.len()]
    }

    /// Previous value, wrapping from the first to the last
    fn prev(self) -> Self {
        let all = Self::ALL;
        all[(self.position() + all.len() - 1) % all.len()]
    }

    /// Labels of every legal value, in display order
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.label()).collect()
    }
}

/// Declares an enumerated setting: variants map to their display label, which
/// doubles as the serialized form.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                #[doc = concat!("`", $label, "`")]
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::config::domains::Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::config::domains::Choice::label(*self))
            }
        }
    };
}

choice_enum! {
    /// Capture mode of the camera
    pub enum OperationMode {
        #[default]
        TrailCam => "TRAIL CAM",
        TimelapsePlus => "TIMELAPSE PLUS",
        Video => "VIDEO",
    }
}

choice_enum! {
    /// Still image resolution
    pub enum PhotoResolution {
        Mp4 => "4MP",
        Mp8 => "8MP",
        #[default]
        Mp12 => "12MP",
        Mp24 => "24MP",
    }
}

choice_enum! {
    /// Video resolution and frame rate
    pub enum VideoResolution {
        #[default]
        FullHd30 => "1920x1080 30fps",
        FullHd60 => "1920x1080 60fps",
    }
}

choice_enum! {
    /// Length of a triggered video clip
    pub enum VideoLength {
        Secs5 => "5s",
        Secs10 => "10s",
        Secs20 => "20s",
        #[default]
        Secs30 => "30s",
        Min1 => "1min",
        Min2 => "2min",
    }
}

choice_enum! {
    /// Minimum time between two triggers
    pub enum PhotoDelay {
        #[default]
        Secs1 => "1s",
        Secs5 => "5s",
        Secs10 => "10s",
        Secs20 => "20s",
        Secs30 => "30s",
        Min1 => "1min",
        Min5 => "5min",
        Min10 => "10min",
        Min30 => "30min",
        Min60 => "60min",
    }
}

choice_enum! {
    /// Number of pictures taken per trigger
    pub enum MultiShotMode {
        #[default]
        Single => "SINGLE",
        MultiShot => "MULTI SHOT",
        RapidFire => "RAPID FIRE",
    }
}

choice_enum! {
    /// Temperature units printed on the image data strip
    pub enum TempUnits {
        #[default]
        Fahrenheit => "Fahrenheit",
        Celsius => "Celsius",
    }
}

choice_enum! {
    /// PIR sensor sensitivity
    pub enum MotionDetection {
        #[default]
        NormalRange => "NORMAL RANGE",
        LongRange => "LONG RANGE",
    }
}

choice_enum! {
    /// Reach of the infrared flash at night
    pub enum IrFlashRange {
        #[default]
        Economy => "Economy",
        LongRange => "Long Range",
        FastMotion => "Fast Motion",
    }
}

choice_enum! {
    /// Trigger speed of the sensor
    pub enum TriggerSpeed {
        #[default]
        Normal => "NORMAL",
        Fast => "FAST",
    }
}

choice_enum! {
    /// Installed battery chemistry
    pub enum BatteryType {
        #[default]
        Alkaline => "Alkaline",
        Lithium => "Lithium",
        Rechargeable => "Rechargeable",
    }
}

choice_enum! {
    /// Interval between timelapse frames
    pub enum TimeLapseFreq {
        #[default]
        Secs5 => "5s",
        Secs10 => "10s",
        Secs20 => "20s",
        Secs30 => "30s",
        Min1 => "1min",
        Min2 => "2min",
        Min5 => "5min",
        Min10 => "10min",
        Min30 => "30min",
        Min60 => "60min",
    }
}

choice_enum! {
    /// Daily window in which timelapse frames are taken
    pub enum TimeLapsePeriod {
        #[default]
        AllDay => "ALL DAY",
        Hour1 => "1 HOUR",
        Hour2 => "2 HOUR",
        Hour3 => "3 HOUR",
        Hour4 => "4 HOUR",
    }
}

choice_enum! {
    /// Display language
    pub enum Language {
        #[default]
        English => "English",
    }
}

choice_enum! {
    /// Entries of the settings menu, in traversal order
    pub enum MenuOption {
        #[default]
        SetupDateTime => "SETUP DATE/TIME",
        OperationMode => "OPERATION MODE",
        PhotoQuality => "PHOTO QUALITY",
        VideoLength => "VIDEO LENGTH",
        VideoQuality => "VIDEO QUALITY",
        PhotoDelay => "PHOTO DELAY",
        MultiShotMode => "MULTI SHOT MODE",
        TempUnits => "TEMP UNITS",
        CameraName => "CAMERA NAME",
        ImageDataStrip => "IMAGE DATA STRIP",
        MotionTest => "MOTION TEST",
        MotionDetection => "MOTION DETECTION",
        TriggerSpeed => "TRIGGER SPEED",
        BatteryType => "BATTERY TYPE",
        TimelapseSettings => "TIMELAPSE SETTINGS",
        IrFlashRange => "IR FLASH RANGE",
        SmartIrVideo => "SMART IR VIDEO",
        SdManagement => "SD MANAGEMENT",
        Language => "LANGUAGE",
        CaptureTimer => "CAPTURE TIMER",
        Hdr => "HDR",
        DefaultSettings => "DEFAULT SETTINGS",
        DeleteAll => "DELETE ALL",
        FirmwareUpgrade => "FIRMWARE UPGRADE",
    }
}

/// Number of entries in the settings menu
pub const MENU_LEN: usize = MenuOption::ALL.len();

impl MenuOption {
    /// Menu entry at `index`, wrapping modulo the menu length
    pub fn at(index: usize) -> Self {
        Self::ALL[index % MENU_LEN]
    }
}
