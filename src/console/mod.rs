//! Console front end
//!
//! Text rendering of controller snapshots for the terminal, and the stdin
//! reader that turns typed button names into controller events.

use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::io::BufRead;
use std::sync::mpsc::Sender;
use trailcam::error::get_user_friendly_error;
use trailcam::view::{MainView, OptionView, ScreenView};
use trailcam::{ButtonKind, ControllerEvent, Snapshot};
use tracing::{debug, info};

/// Words that end the session besides end of input
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Date as shown on the camera display
pub fn format_date(value: NaiveDateTime) -> String {
    value.format("%m/%d/%y").to_string()
}

/// 12-hour time as shown on the camera display
pub fn format_time(value: NaiveDateTime) -> String {
    value.format("%-I:%M %p").to_string()
}

/// Render one snapshot as a block of text
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = format!("--- {} ---\n", snapshot.screen);

    match ScreenView::from_snapshot(snapshot) {
        ScreenView::Main(view) => render_main(&mut out, &view),
        ScreenView::Menu {
            labels,
            highlighted,
        } => {
            for (i, label) in labels.iter().enumerate() {
                let marker = if i == highlighted { '>' } else { ' ' };
                let _ = writeln!(out, "{marker} {label}");
            }
        }
        ScreenView::Detail(view) => render_detail(&mut out, &view),
    }

    if let Some(notice) = snapshot.notice {
        let _ = writeln!(out, "* {notice}");
    }
    out
}

fn render_main(out: &mut String, view: &MainView) {
    let _ = writeln!(out, "[{}]  {}", view.mode, view.timer);
    for line in &view.summary {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out, "{}  {}", format_date(view.clock), format_time(view.clock));
    let _ = write!(out, "{}  BAT {}  SD {}", view.camera_name, view.battery, view.sd_usage);
    if view.motion_indicator {
        out.push_str("  (MOTION)");
    }
    out.push('\n');
}

fn render_detail(out: &mut String, view: &OptionView) {
    let _ = writeln!(out, "{}", view.title());
    match view {
        OptionView::Choice {
            choices, selected, ..
        } => {
            for (i, choice) in choices.iter().enumerate() {
                let mark = if i == *selected { 'x' } else { ' ' };
                let _ = writeln!(out, "[{mark}] {choice}");
            }
        }
        OptionView::Toggle { on, .. } => {
            let _ = writeln!(out, "{}", if *on { "ON" } else { "OFF" });
        }
        OptionView::DateTime { value, .. } => {
            let _ = writeln!(out, "{}  {}", format_date(*value), format_time(*value));
        }
        OptionView::FreeText { value, .. } => {
            let _ = writeln!(out, "{value}");
        }
    }
}

/// Forward button names read from `input` to the controller
///
/// Blank lines are skipped and unknown names are reported on stderr. End of
/// input or a quit word sends `Shutdown`.
pub fn read_buttons(input: impl BufRead, events: &Sender<ControllerEvent>) {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if QUIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w)) {
            info!("Quit requested from console");
            break;
        }

        match line.parse::<ButtonKind>() {
            Ok(button) => {
                debug!("Console input: {}", button);
                if events.send(button.into()).is_err() {
                    return;
                }
            }
            Err(e) => eprintln!("{}", get_user_friendly_error(&e)),
        }
    }

    let _ = events.send(ControllerEvent::Shutdown);
}
