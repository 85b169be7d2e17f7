/*
 * This file is part of Octomon.
 *
 * Copyright (C) 2026 Octomon contributors
 *
 * Octomon is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Octomon is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Octomon. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use lazy_static::lazy_static;
use serde_json::{json, Value};

const DEFAULT_LOG_PATH: &str = "/etc/octomon/events.json";
const FALLBACK_LOG_PATH: &str = "/tmp/octomon_events.json";

lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn open_append(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Open the default event log for appending, falling back to /tmp when /etc
/// is not writable.
pub fn init_logging() {
    if init_logging_at(Path::new(DEFAULT_LOG_PATH)) {
        return;
    }
    init_logging_at(Path::new(FALLBACK_LOG_PATH));
}

/// Point the event log at a specific file. Returns false if the file could
/// not be opened.
pub fn init_logging_at(path: &Path) -> bool {
    match open_append(path) {
        Some(f) => {
            if let Ok(mut guard) = LOG_FILE.lock() {
                *guard = Some(f);
            }
            true
        }
        None => false,
    }
}

/// Append one JSON event line to the log. Never fails: if the logger was not
/// initialized, the line goes to the /tmp fallback silently.
pub fn log_event(event: &str, data: Value) {
    let line = json!({
        "ts_ms": now_millis(),
        "event": event,
        "data": data,
    })
    .to_string();

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(f) = guard.as_mut() {
            let _ = writeln!(f, "{}", line);
            return;
        }
    }
    if let Some(mut f) = open_append(Path::new(FALLBACK_LOG_PATH)) {
        let _ = writeln!(f, "{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_events_append_as_json_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        assert!(init_logging_at(&path));

        log_event("unit_test", json!({ "n": 1 }));
        log_event("unit_test", json!({ "n": 2 }));

        let contents = fs::read_to_string(&path).unwrap();
        let events: Vec<Value> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .filter(|value: &Value| value["event"] == "unit_test")
            .collect();
        assert_eq!(events.len(), 2);
        for value in events {
            assert!(value["ts_ms"].is_number());
        }

        // Release the global handle so later tests fall back cleanly
        if let Ok(mut guard) = LOG_FILE.lock() {
            *guard = None;
        }
    }

    #[test]
    #[serial]
    fn test_init_logging_at_unopenable_path() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        assert!(!init_logging_at(dir.path()));
    }
}
