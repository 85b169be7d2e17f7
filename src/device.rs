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

use std::time::Duration;

use serde_json::json;

use crate::config::Config;
use crate::error::{Result, TelemetryError};
use crate::logger;
use crate::registry::{self, SensorKind};
use crate::report::{self, STATUS_REPORT_ID};
use crate::snapshot::{Identity, Snapshot, SnapshotStore};

/// What happened to a delivered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// A status report was decoded and its snapshot published.
    Published,
    /// The report carried some other report ID; nothing changed.
    Ignored,
}

/// What one channel offers to a host registration layer. Every Octo channel
/// is readable and labeled; none are writable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelCapability {
    pub kind: SensorKind,
    pub index: usize,
    pub label: &'static str,
    pub has_value: bool,
    pub has_label: bool,
}

/// One attached Octo. Owns the snapshot store for this device instance; the
/// channel registry is process-wide and shared by all instances. Create one
/// per attached device and drop it on detach.
#[derive(Debug)]
pub struct Octo {
    store: SnapshotStore,
}

impl Octo {
    pub fn new() -> Self {
        Self {
            store: SnapshotStore::new(),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            store: SnapshotStore::with_stale_after(Duration::from_millis(config.stale_after_ms)),
        }
    }

    /// Transport delivery callback. Invoke with every report the device
    /// pushes; only status reports are decoded and published.
    ///
    /// A report with a different ID is ignored without touching the current
    /// snapshot or its freshness. A status report shorter than the fixed
    /// layout fails with `Malformed`, also leaving prior state intact.
    pub fn on_report(&self, report_id: u8, data: &[u8]) -> Result<ReportOutcome> {
        if report_id != STATUS_REPORT_ID {
            return Ok(ReportOutcome::Ignored);
        }
        match report::decode_status_report(data) {
            Ok((snapshot, identity)) => {
                self.store.publish(snapshot, identity);
                Ok(ReportOutcome::Published)
            }
            Err(err) => {
                logger::log_event(
                    "report_malformed",
                    json!({ "len": data.len(), "error": err.to_string() }),
                );
                Err(err)
            }
        }
    }

    /// Current value of one channel in fixed-point units. Fails with
    /// `InvalidChannel` for an out-of-range index and `Stale` when the last
    /// report is too old to trust.
    pub fn read_value(&self, kind: SensorKind, index: usize) -> Result<i64> {
        if registry::channel(kind, index).is_none() {
            return Err(TelemetryError::InvalidChannel { kind, index });
        }
        self.store.value(kind, index)
    }

    /// Channel label. Registry data, available regardless of freshness.
    pub fn read_label(&self, kind: SensorKind, index: usize) -> Result<&'static str> {
        registry::label(kind, index).ok_or(TelemetryError::InvalidChannel { kind, index })
    }

    /// Last-known identity metadata; zeroed before the first report.
    pub fn read_identity(&self) -> Identity {
        self.store.identity()
    }

    /// All channels of the current decode cycle in one consistent read.
    pub fn read_all(&self) -> Result<Snapshot> {
        self.store.snapshot()
    }
}

impl Default for Octo {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability table for a host registration layer, one entry per channel in
/// category order.
pub fn capability_table() -> Vec<ChannelCapability> {
    SensorKind::ALL
        .iter()
        .flat_map(|&kind| {
            registry::channels(kind).iter().map(move |spec| ChannelCapability {
                kind,
                index: spec.index,
                label: spec.label,
                has_value: true,
                has_label: true,
            })
        })
        .collect()
}
