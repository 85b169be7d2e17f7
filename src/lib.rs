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

//! Octomon - telemetry core for the Aquacomputer Octo fan controller
//!
//! The Octo pushes a fixed-layout binary status report (HID report ID 0x01)
//! roughly once per second. This library decodes those reports into a
//! channel-indexed snapshot (temperatures, fan speeds, power, voltage and
//! current, plus identity metadata) and serves concurrent queries against
//! the most recent snapshot, flagging data that has gone stale.

pub mod config;
pub mod device;
pub mod error;
pub mod inspect;
pub mod logger;
pub mod registry;
pub mod report;
pub mod snapshot;

#[cfg(test)]
pub mod test_utils;
