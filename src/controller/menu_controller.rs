//! Menu controller implementation
//!
//! This module implements the state machine that turns button presses into
//! screen changes and settings changes, and owns the power-on countdown.

use crate::config::models::device_now;
use crate::config::{CameraConfig, ConfigStore, MENU_LEN, MenuOption};
use crate::controller::countdown::Countdown;
use crate::controller::events::{ButtonKind, ControllerEvent};
use crate::controller::handlers::OptionHandlers;
use std::fmt;
use std::sync::mpsc::{self, RecvTimeoutError, TrySendError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Notice shown after DEFAULT SETTINGS is confirmed
pub const RESET_NOTICE: &str = "Settings have been reset to default.";

/// Notice shown after DELETE ALL is confirmed
pub const DELETE_ALL_NOTICE: &str = "All images deleted and SD card reformatted.";

/// Top-level UI mode of the camera
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Status screen
    #[default]
    Main,
    /// List of settings
    SettingsMenu,
    /// Value editor of the selected setting
    OptionDetail,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Main => "MAIN",
            Self::SettingsMenu => "SETTINGS_MENU",
            Self::OptionDetail => "OPTION_DETAIL",
        })
    }
}

/// Read-only copy of the controller state, published after every event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current screen
    pub screen: Screen,
    /// Highlighted menu entry
    pub selected_menu_option: Option<MenuOption>,
    /// Cursor position in the settings menu
    pub selected_menu_index: usize,
    /// Current settings
    pub config: CameraConfig,
    /// Seconds left on the power-on countdown
    pub countdown: Option<u8>,
    /// Message raised by the last event, if any
    pub notice: Option<&'static str>,
}

/// Menu state machine
///
/// Owns the settings record and the session state. Every change to the
/// settings is written through to the store before the new state is published.
pub struct MenuController<S: ConfigStore> {
    store: S,
    config: CameraConfig,
    factory_defaults: CameraConfig,
    handlers: OptionHandlers,
    screen: Screen,
    selected_menu_index: usize,
    countdown: Countdown,
    notice: Option<&'static str>,
    state_sender: Option<mpsc::SyncSender<Snapshot>>,
}

impl<S: ConfigStore> MenuController<S> {
    /// Create a controller from the record held by `store`
    ///
    /// Factory defaults take the device clock as it reads now.
    pub fn new(store: S) -> Self {
        let config = store.load();
        info!(
            "Menu controller ready: mode={}, camera name={}",
            config.mode, config.camera_name
        );

        Self {
            store,
            config,
            factory_defaults: CameraConfig::defaults_at(device_now()),
            handlers: OptionHandlers::standard(),
            screen: Screen::Main,
            selected_menu_index: 0,
            countdown: Countdown::default(),
            notice: None,
            state_sender: None,
        }
    }

    /// Replace the option handler registry
    #[must_use]
    pub fn with_handlers(mut self, handlers: OptionHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Replace the record DEFAULT SETTINGS restores
    #[must_use]
    pub fn with_factory_defaults(mut self, defaults: CameraConfig) -> Self {
        self.factory_defaults = defaults;
        self
    }

    /// Publish a snapshot to `sender` after every event
    ///
    /// Uses `try_send`; a renderer that falls behind misses intermediate frames
    /// instead of stalling the controller.
    #[must_use]
    pub fn with_state_sender(mut self, sender: mpsc::SyncSender<Snapshot>) -> Self {
        self.state_sender = Some(sender);
        self
    }

    /// Current screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Cursor position in the settings menu
    pub fn selected_menu_index(&self) -> usize {
        self.selected_menu_index
    }

    /// Highlighted menu entry
    pub fn selected_menu_option(&self) -> Option<MenuOption> {
        self.config.selected_menu_option
    }

    /// Current settings
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Record DEFAULT SETTINGS restores
    pub fn factory_defaults(&self) -> &CameraConfig {
        &self.factory_defaults
    }

    /// Seconds left on the power-on countdown
    pub fn countdown(&self) -> Option<u8> {
        self.countdown.remaining()
    }

    /// The settings store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Copy of the current state for display
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen,
            selected_menu_option: self.config.selected_menu_option,
            selected_menu_index: self.selected_menu_index,
            config: self.config.clone(),
            countdown: self.countdown.remaining(),
            notice: self.notice,
        }
    }

    /// Apply one button press
    ///
    /// Pairs of screen and button with no defined transition leave the state
    /// unchanged.
    pub fn handle_button(&mut self, button: ButtonKind) {
        let before = self.config.clone();
        self.notice = None;

        match (self.screen, button) {
            (Screen::Main, ButtonKind::Mode) => {
                self.selected_menu_index = 0;
                self.config.selected_menu_option = Some(MenuOption::at(0));
                self.enter_screen(Screen::SettingsMenu);
            }
            (Screen::SettingsMenu, ButtonKind::Mode) => {
                self.config.selected_menu_option = None;
                self.enter_screen(Screen::Main);
            }
            (Screen::OptionDetail, ButtonKind::Mode | ButtonKind::Enter) => {
                self.enter_screen(Screen::SettingsMenu);
            }
            (Screen::SettingsMenu, ButtonKind::Up) => self.move_cursor(MENU_LEN - 1),
            (Screen::SettingsMenu, ButtonKind::Down) => self.move_cursor(1),
            (Screen::SettingsMenu, ButtonKind::Enter) => self.confirm_selection(),
            (Screen::OptionDetail, ButtonKind::Up | ButtonKind::Down | ButtonKind::Right) => {
                self.adjust_selected(button);
            }
            (Screen::Main, ButtonKind::Enter) | (_, ButtonKind::PowerOn) => self.start_countdown(),
            (_, ButtonKind::PowerOff) => self.power_off(),
            (screen, button) => {
                debug!("{} ignored on {}", button, screen);
            }
        }

        if self.config != before {
            self.persist();
        }
        self.publish();
    }

    /// Apply raw button text from an input source; unknown names are ignored
    pub fn handle_input(&mut self, raw: &str) {
        match raw.parse::<ButtonKind>() {
            Ok(button) => self.handle_button(button),
            Err(e) => debug!("Ignoring input: {}", e),
        }
    }

    /// Advance the countdown by one second
    pub fn handle_tick(&mut self) {
        if !self.countdown.is_active() {
            debug!("Tick ignored, countdown inactive");
            return;
        }

        self.notice = None;
        self.countdown.tick();
        match self.countdown.remaining() {
            Some(remaining) => debug!("Countdown: {}s", remaining),
            None => info!("Countdown finished"),
        }
        self.publish();
    }

    /// Run the event loop until `Shutdown` arrives or every sender is dropped
    ///
    /// With `tick_interval` set, the loop ticks the countdown itself on that
    /// interval while it is active. A tick is only ever pending while the
    /// countdown runs, so cancelling it also cancels the pending tick.
    pub fn run(&mut self, events: &mpsc::Receiver<ControllerEvent>, tick_interval: Option<Duration>) {
        info!("Entering menu event loop");
        self.publish();

        let mut next_tick: Option<Instant> = None;
        loop {
            next_tick = match (tick_interval, self.countdown.is_active()) {
                (Some(interval), true) => Some(next_tick.unwrap_or_else(|| Instant::now() + interval)),
                _ => None,
            };

            let received = match next_tick {
                Some(deadline) => {
                    events.recv_timeout(deadline.saturating_duration_since(Instant::now()))
                }
                None => events.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(ControllerEvent::Button(button)) => self.handle_button(button),
                Ok(ControllerEvent::Tick) => self.handle_tick(),
                Ok(ControllerEvent::Shutdown) => {
                    info!("Shutdown requested");
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {
                    self.handle_tick();
                    next_tick = next_tick.zip(tick_interval).map(|(t, interval)| t + interval);
                }
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("Event channel disconnected. Exiting event loop.");
                    break;
                }
            }
        }

        info!("Menu event loop exited");
    }

    fn enter_screen(&mut self, screen: Screen) {
        info!("Screen: {} -> {}", self.screen, screen);
        self.screen = screen;
    }

    fn move_cursor(&mut self, step: usize) {
        self.selected_menu_index = (self.selected_menu_index + step) % MENU_LEN;
        let option = MenuOption::at(self.selected_menu_index);
        self.config.selected_menu_option = Some(option);
        debug!("Menu cursor at {} ({})", self.selected_menu_index, option);
    }

    fn confirm_selection(&mut self) {
        let Some(option) = self.config.selected_menu_option else {
            debug!("ENTER with no menu entry selected");
            return;
        };

        match option {
            MenuOption::DefaultSettings => {
                info!("{}", RESET_NOTICE);
                self.config = self.factory_defaults.clone();
                self.notice = Some(RESET_NOTICE);
                self.enter_screen(Screen::Main);
            }
            MenuOption::DeleteAll => {
                info!("{}", DELETE_ALL_NOTICE);
                self.notice = Some(DELETE_ALL_NOTICE);
                self.enter_screen(Screen::Main);
            }
            option if self.handlers.has_detail(option) => {
                self.enter_screen(Screen::OptionDetail);
            }
            option => debug!("{} confirmed in menu", option),
        }
    }

    fn adjust_selected(&mut self, button: ButtonKind) {
        let Some(option) = self.config.selected_menu_option else {
            return;
        };
        let Some(handler) = self.handlers.get(option) else {
            debug!("No handler for {}, {} ignored", option, button);
            return;
        };

        let adjust = match button {
            ButtonKind::Up => Some(handler.up),
            ButtonKind::Down => Some(handler.down),
            ButtonKind::Right => handler.right,
            _ => None,
        };
        if let Some(adjust) = adjust {
            adjust(&mut self.config);
            debug!("{} adjusted with {}", option, button);
        }
    }

    fn start_countdown(&mut self) {
        if self.countdown.start() {
            info!("Countdown started");
        } else {
            debug!("Countdown already running, start ignored");
        }
    }

    fn power_off(&mut self) {
        info!("Power off");
        self.countdown.cancel();
        self.selected_menu_index = 0;
        if self.screen != Screen::Main {
            self.enter_screen(Screen::Main);
        }
    }

    /// Write the settings through to the store; failures keep the in-memory state
    fn persist(&self) {
        if let Err(e) = self.store.persist(&self.config) {
            warn!(
                "Failed to save settings: {}. Continuing with in-memory settings; \
                 the next change will retry.",
                e
            );
        }
    }

    fn publish(&self) {
        let Some(sender) = &self.state_sender else {
            return;
        };

        match sender.try_send(self.snapshot()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => debug!("Renderer is behind, snapshot dropped"),
            Err(TrySendError::Disconnected(_)) => debug!("Renderer disconnected"),
        }
    }
}

impl<S: ConfigStore + Send + 'static> MenuController<S> {
    /// Spawn the event loop on its own thread
    ///
    /// The controller is handed back when the loop exits.
    pub fn spawn(
        mut self,
        events: mpsc::Receiver<ControllerEvent>,
        tick_interval: Option<Duration>,
    ) -> JoinHandle<Self> {
        thread::spawn(move || {
            self.run(&events, tick_interval);
            self
        })
    }
}
