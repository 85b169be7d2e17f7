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

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_STALE_AFTER_MS: u64 = 2000;

const MIN_STALE_AFTER_MS: u64 = 100;
const MAX_STALE_AFTER_MS: u64 = 60_000;

fn default_stale_after_ms() -> u64 {
    DEFAULT_STALE_AFTER_MS
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How long a published snapshot stays trustworthy, in milliseconds.
    #[serde(default = "default_stale_after_ms")]
    pub stale_after_ms: u64,
    /// Whether the embedding host should initialize the JSON event logger.
    #[serde(default)]
    pub log_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stale_after_ms: DEFAULT_STALE_AFTER_MS,
            log_events: false,
        }
    }
}

pub fn config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("octomon").join("config.json");
    }
    if let Ok(home) = env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("octomon")
            .join("config.json");
    }
    PathBuf::from("/etc/octomon/config.json")
}

/// Load the config from the default path; `None` if absent, unreadable,
/// unparsable, or invalid.
pub fn load_config() -> Option<Config> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Option<Config> {
    let data = fs::read_to_string(path).ok()?;
    let config: Config = serde_json::from_str(&data).ok()?;
    validate_config(&config).ok()?;
    Some(config)
}

pub fn validate_config(config: &Config) -> Result<(), String> {
    if !(MIN_STALE_AFTER_MS..=MAX_STALE_AFTER_MS).contains(&config.stale_after_ms) {
        return Err(format!(
            "stale_after_ms {} outside {}..={}",
            config.stale_after_ms, MIN_STALE_AFTER_MS, MAX_STALE_AFTER_MS
        ));
    }
    Ok(())
}
