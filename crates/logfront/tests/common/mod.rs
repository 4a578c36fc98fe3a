//! Shared fixtures for the integration tests.
//!
//! Each test file is its own binary, so each links its own set of registered
//! providers.

#![allow(dead_code)]

use std::sync::Mutex;

use logfront::{Level, Logger, Record};
use logfront_console::testing::TestStatus;

static RECORDED: Mutex<Vec<String>> = Mutex::new(Vec::new());

/// Logger recording `LEVEL message` lines, enabled at INFO and above.
#[derive(Debug)]
pub struct RecordingLogger {
    level: Level,
}

pub static RECORDING: [RecordingLogger; 6] = [
    RecordingLogger { level: Level::Trace },
    RecordingLogger { level: Level::Debug },
    RecordingLogger { level: Level::Info },
    RecordingLogger { level: Level::Warn },
    RecordingLogger { level: Level::Error },
    RecordingLogger { level: Level::Off },
];

impl Logger for RecordingLogger {
    fn at_level(&self, level: Level) -> &dyn Logger {
        if level == self.level {
            self
        } else {
            &RECORDING[level.index()]
        }
    }

    fn level(&self) -> Level {
        self.level
    }

    fn is_enabled(&self) -> bool {
        self.level != Level::Off && self.level >= Level::Info
    }

    fn log(&self, record: &Record<'_>) {
        RECORDED
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }
}

pub fn recorded() -> Vec<String> {
    RECORDED.lock().unwrap().clone()
}

pub fn status() -> TestStatus {
    TestStatus::new()
}
