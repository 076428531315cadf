#![no_main]

use libfuzzer_sys::fuzz_target;
use trailcam::config::CameraConfig;
use trailcam::{ButtonKind, ConfigStore, MemoryConfigStore, MenuController};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic, whatever the record holds
    let _result: Result<CameraConfig, _> = serde_json::from_str(s);

    // Whatever loads must survive being driven and written back
    let mut controller = MenuController::new(MemoryConfigStore::with_record(s));
    for byte in data.iter().take(64) {
        let button = ButtonKind::ALL[usize::from(*byte) % ButtonKind::ALL.len()];
        controller.handle_button(button);
    }
    if controller.store().write_count() > 0 {
        assert_eq!(&controller.store().load(), controller.config());
    }
});
