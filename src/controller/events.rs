//! Input events consumed by the menu controller

use crate::error::TrailCamError;
use std::fmt;
use std::str::FromStr;

/// Buttons on the camera's control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Toggle between the main screen and the settings menu, or leave a detail screen
    Mode,
    /// Previous menu entry or previous value
    Up,
    /// Next menu entry or next value
    Down,
    /// Confirm
    Enter,
    /// Advance a field on date/time entry
    Right,
    /// Switch on; starts the arm countdown
    PowerOn,
    /// Switch off; returns to the main screen
    PowerOff,
}

impl ButtonKind {
    /// Every button, in panel order
    pub const ALL: [Self; 7] = [
        Self::Mode,
        Self::Up,
        Self::Down,
        Self::Enter,
        Self::Right,
        Self::PowerOn,
        Self::PowerOff,
    ];

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Self::Mode => "MODE",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Enter => "ENTER",
            Self::Right => "RIGHT",
            Self::PowerOn => "POWER_ON",
            Self::PowerOff => "POWER_OFF",
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; spaces and dashes are accepted in place of underscores
/// (`power on`, `Power-Off`).
impl FromStr for ButtonKind {
    type Err = TrailCamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        Self::ALL
            .into_iter()
            .find(|button| button.name() == normalized)
            .ok_or_else(|| TrailCamError::UnknownButton(s.trim().to_string()))
    }
}

/// Events serialized into the controller's event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// A button was pressed
    Button(ButtonKind),
    /// One second elapsed on an external clock
    Tick,
    /// Leave the event loop
    Shutdown,
}

impl From<ButtonKind> for ControllerEvent {
    fn from(button: ButtonKind) -> Self {
        Self::Button(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for button in ButtonKind::ALL {
            assert_eq!(button.name().parse::<ButtonKind>().unwrap(), button);
        }
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!("up".parse::<ButtonKind>().unwrap(), ButtonKind::Up);
        assert_eq!(" power on ".parse::<ButtonKind>().unwrap(), ButtonKind::PowerOn);
        assert_eq!("Power-Off".parse::<ButtonKind>().unwrap(), ButtonKind::PowerOff);
    }

    #[test]
    fn test_parse_unknown_button() {
        let err = "LEFT".parse::<ButtonKind>().unwrap_err();
        assert!(matches!(err, TrailCamError::UnknownButton(ref name) if name == "LEFT"));
        assert!("".parse::<ButtonKind>().is_err());
    }
}
