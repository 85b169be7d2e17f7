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

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use crate::error::{Result, TelemetryError};
use crate::registry::{
    SensorKind, CURRENT_COUNT, FAN_COUNT, POWER_COUNT, TEMP_COUNT, VOLTAGE_COUNT,
};

/// The device pushes a status report every second; allow one missed report
/// before declaring the data stale.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(2);

/// One full decode cycle's worth of channel values, in fixed-point units
/// (temperatures in millidegrees, power in microwatts, voltages in
/// millivolts, fan speeds in RPM, currents in milliamps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub temps: [i64; TEMP_COUNT],
    pub speeds: [i64; FAN_COUNT],
    pub powers: [i64; POWER_COUNT],
    pub voltages: [i64; VOLTAGE_COUNT],
    pub currents: [i64; CURRENT_COUNT],
}

impl Snapshot {
    pub fn value(&self, kind: SensorKind, index: usize) -> Option<i64> {
        self.slots(kind).get(index).copied()
    }

    pub(crate) fn set(&mut self, kind: SensorKind, index: usize, value: i64) {
        if let Some(slot) = self.slots_mut(kind).get_mut(index) {
            *slot = value;
        }
    }

    fn slots(&self, kind: SensorKind) -> &[i64] {
        match kind {
            SensorKind::Temp => &self.temps,
            SensorKind::Fan => &self.speeds,
            SensorKind::Power => &self.powers,
            SensorKind::Voltage => &self.voltages,
            SensorKind::Current => &self.currents,
        }
    }

    fn slots_mut(&mut self, kind: SensorKind) -> &mut [i64] {
        match kind {
            SensorKind::Temp => &mut self.temps,
            SensorKind::Fan => &mut self.speeds,
            SensorKind::Power => &mut self.powers,
            SensorKind::Voltage => &mut self.voltages,
            SensorKind::Current => &mut self.currents,
        }
    }
}

/// Identity metadata the device repeats in every status report. Zeroed until
/// the first report is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Identity {
    pub serial: [u16; 2],
    pub firmware_version: u16,
    pub power_cycles: u32,
}

impl Identity {
    /// Serial number in the form printed on the device, e.g. "12345-06789".
    pub fn serial_string(&self) -> String {
        format!("{:05}-{:05}", self.serial[0], self.serial[1])
    }
}

#[derive(Debug, Default)]
struct Published {
    snapshot: Snapshot,
    identity: Identity,
    updated: Option<Instant>,
}

/// Holds the most recently decoded snapshot for one device instance. The
/// decoder is the only writer; any number of query threads read concurrently.
/// A publish replaces the whole state under the write lock, so readers never
/// observe values from two different decode cycles.
#[derive(Debug)]
pub struct SnapshotStore {
    stale_after: Duration,
    inner: RwLock<Published>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::with_stale_after(DEFAULT_STALE_AFTER)
    }

    pub fn with_stale_after(stale_after: Duration) -> Self {
        Self {
            stale_after,
            inner: RwLock::new(Published::default()),
        }
    }

    /// Replace the current snapshot and identity and stamp the publish time.
    pub fn publish(&self, snapshot: Snapshot, identity: Identity) {
        self.publish_at(snapshot, identity, Instant::now());
    }

    pub(crate) fn publish_at(&self, snapshot: Snapshot, identity: Identity, now: Instant) {
        let mut guard = write_lock(&self.inner);
        *guard = Published {
            snapshot,
            identity,
            updated: Some(now),
        };
    }

    /// Current value of one channel, or `Stale` if no report has arrived
    /// within the staleness window.
    pub fn value(&self, kind: SensorKind, index: usize) -> Result<i64> {
        self.value_at(kind, index, Instant::now())
    }

    pub(crate) fn value_at(&self, kind: SensorKind, index: usize, now: Instant) -> Result<i64> {
        let guard = read_lock(&self.inner);
        if !is_fresh(guard.updated, self.stale_after, now) {
            return Err(TelemetryError::Stale);
        }
        guard
            .snapshot
            .value(kind, index)
            .ok_or(TelemetryError::InvalidChannel { kind, index })
    }

    /// Whole-snapshot read under a single lock acquisition, subject to the
    /// same freshness rule as per-channel reads.
    pub fn snapshot(&self) -> Result<Snapshot> {
        self.snapshot_at(Instant::now())
    }

    pub(crate) fn snapshot_at(&self, now: Instant) -> Result<Snapshot> {
        let guard = read_lock(&self.inner);
        if !is_fresh(guard.updated, self.stale_after, now) {
            return Err(TelemetryError::Stale);
        }
        Ok(guard.snapshot)
    }

    /// Last-known identity metadata. Not subject to freshness: identity
    /// rarely changes, and stale telemetry does not invalidate it.
    pub fn identity(&self) -> Identity {
        read_lock(&self.inner).identity
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

fn is_fresh(updated: Option<Instant>, stale_after: Duration, now: Instant) -> bool {
    match updated {
        Some(at) => now.saturating_duration_since(at) < stale_after,
        None => false,
    }
}

fn read_lock(lock: &RwLock<Published>) -> RwLockReadGuard<'_, Published> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write_lock(lock: &RwLock<Published>) -> RwLockWriteGuard<'_, Published> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
