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

//! Static description of every sensor channel the Octo reports: byte offset
//! into the status report, field width, unit scaling, and display label.
//! All decode offsets live here and nowhere else.

use std::fmt;

/// Sensor categories reported by the device. Each category has its own
/// channel index space starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Temp,
    Fan,
    Power,
    Voltage,
    Current,
}

impl SensorKind {
    pub const ALL: [SensorKind; 5] = [
        SensorKind::Temp,
        SensorKind::Fan,
        SensorKind::Power,
        SensorKind::Voltage,
        SensorKind::Current,
    ];
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensorKind::Temp => "temp",
            SensorKind::Fan => "fan",
            SensorKind::Power => "power",
            SensorKind::Voltage => "voltage",
            SensorKind::Current => "current",
        };
        f.write_str(name)
    }
}

/// Unit scaling applied to a channel's raw field to reach the snapshot's
/// fixed-point units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Raw value used as-is.
    Raw,
    /// Raw value multiplied by the factor.
    Mul(i64),
    /// Raw value divided by the factor, truncating.
    Div(i64),
}

impl Scale {
    pub fn apply(self, raw: i64) -> i64 {
        match self {
            Scale::Raw => raw,
            Scale::Mul(factor) => raw * factor,
            Scale::Div(factor) => raw / factor,
        }
    }
}

/// Where and how one channel is decoded from a status report.
#[derive(Debug, Clone, Copy)]
pub struct ChannelSpec {
    pub kind: SensorKind,
    pub index: usize,
    pub offset: usize,
    pub width: usize,
    pub scale: Scale,
    pub label: &'static str,
}

const fn spec(
    kind: SensorKind,
    index: usize,
    offset: usize,
    scale: Scale,
    label: &'static str,
) -> ChannelSpec {
    ChannelSpec {
        kind,
        index,
        offset,
        width: 2,
        scale,
        label,
    }
}

pub const TEMP_COUNT: usize = 4;
pub const FAN_COUNT: usize = 9;
pub const POWER_COUNT: usize = 8;
pub const VOLTAGE_COUNT: usize = 9;
pub const CURRENT_COUNT: usize = 8;

/// Minimum status report length. The last channel field ends at 226
/// (fan 8 speed at offset 224, two bytes wide).
pub const MIN_REPORT_LEN: usize = 226;

/// Temperatures in hundredths of a degree on the wire, scaled to
/// millidegrees.
const TEMP_CHANNELS: [ChannelSpec; TEMP_COUNT] = [
    spec(SensorKind::Temp, 0, 61, Scale::Mul(10), "Temp1"),
    spec(SensorKind::Temp, 1, 63, Scale::Mul(10), "Temp2"),
    spec(SensorKind::Temp, 2, 65, Scale::Mul(10), "Temp3"),
    spec(SensorKind::Temp, 3, 67, Scale::Mul(10), "Temp4"),
];

/// Channel 0 is the flow sensor, reported at 10x the resolution of the fan
/// tachometers; fans 1..8 are plain RPM.
const FAN_CHANNELS: [ChannelSpec; FAN_COUNT] = [
    spec(SensorKind::Fan, 0, 123, Scale::Div(10), "Flow speed [l/h]"),
    spec(SensorKind::Fan, 1, 133, Scale::Raw, "Fan1 speed"),
    spec(SensorKind::Fan, 2, 146, Scale::Raw, "Fan2 speed"),
    spec(SensorKind::Fan, 3, 159, Scale::Raw, "Fan3 speed"),
    spec(SensorKind::Fan, 4, 172, Scale::Raw, "Fan4 speed"),
    spec(SensorKind::Fan, 5, 185, Scale::Raw, "Fan5 speed"),
    spec(SensorKind::Fan, 6, 198, Scale::Raw, "Fan6 speed"),
    spec(SensorKind::Fan, 7, 211, Scale::Raw, "Fan7 speed"),
    spec(SensorKind::Fan, 8, 224, Scale::Raw, "Fan8 speed"),
];

/// Per-fan power draw in hundredths of a watt, scaled to microwatts.
const POWER_CHANNELS: [ChannelSpec; POWER_COUNT] = [
    spec(SensorKind::Power, 0, 131, Scale::Mul(10000), "Fan1 power"),
    spec(SensorKind::Power, 1, 144, Scale::Mul(10000), "Fan2 power"),
    spec(SensorKind::Power, 2, 157, Scale::Mul(10000), "Fan3 power"),
    spec(SensorKind::Power, 3, 170, Scale::Mul(10000), "Fan4 power"),
    spec(SensorKind::Power, 4, 183, Scale::Mul(10000), "Fan5 power"),
    spec(SensorKind::Power, 5, 196, Scale::Mul(10000), "Fan6 power"),
    spec(SensorKind::Power, 6, 209, Scale::Mul(10000), "Fan7 power"),
    spec(SensorKind::Power, 7, 222, Scale::Mul(10000), "Fan8 power"),
];

/// Channel 0 is the supply rail, then one channel per fan header.
const VOLTAGE_CHANNELS: [ChannelSpec; VOLTAGE_COUNT] = [
    spec(SensorKind::Voltage, 0, 117, Scale::Mul(10), "VCC"),
    spec(SensorKind::Voltage, 1, 127, Scale::Mul(10), "Fan1 voltage"),
    spec(SensorKind::Voltage, 2, 140, Scale::Mul(10), "Fan2 voltage"),
    spec(SensorKind::Voltage, 3, 153, Scale::Mul(10), "Fan3 voltage"),
    spec(SensorKind::Voltage, 4, 166, Scale::Mul(10), "Fan4 voltage"),
    spec(SensorKind::Voltage, 5, 179, Scale::Mul(10), "Fan5 voltage"),
    spec(SensorKind::Voltage, 6, 192, Scale::Mul(10), "Fan6 voltage"),
    spec(SensorKind::Voltage, 7, 205, Scale::Mul(10), "Fan7 voltage"),
    spec(SensorKind::Voltage, 8, 218, Scale::Mul(10), "Fan8 voltage"),
];

const CURRENT_CHANNELS: [ChannelSpec; CURRENT_COUNT] = [
    spec(SensorKind::Current, 0, 129, Scale::Raw, "Fan1 current"),
    spec(SensorKind::Current, 1, 142, Scale::Raw, "Fan2 current"),
    spec(SensorKind::Current, 2, 155, Scale::Raw, "Fan3 current"),
    spec(SensorKind::Current, 3, 168, Scale::Raw, "Fan4 current"),
    spec(SensorKind::Current, 4, 181, Scale::Raw, "Fan5 current"),
    spec(SensorKind::Current, 5, 194, Scale::Raw, "Fan6 current"),
    spec(SensorKind::Current, 6, 207, Scale::Raw, "Fan7 current"),
    spec(SensorKind::Current, 7, 220, Scale::Raw, "Fan8 current"),
];

/// All channels of one category, ordered by channel index.
pub fn channels(kind: SensorKind) -> &'static [ChannelSpec] {
    match kind {
        SensorKind::Temp => &TEMP_CHANNELS,
        SensorKind::Fan => &FAN_CHANNELS,
        SensorKind::Power => &POWER_CHANNELS,
        SensorKind::Voltage => &VOLTAGE_CHANNELS,
        SensorKind::Current => &CURRENT_CHANNELS,
    }
}

pub fn channel(kind: SensorKind, index: usize) -> Option<&'static ChannelSpec> {
    channels(kind).get(index)
}

pub fn channel_count(kind: SensorKind) -> usize {
    channels(kind).len()
}

pub fn label(kind: SensorKind, index: usize) -> Option<&'static str> {
    channel(kind, index).map(|spec| spec.label)
}
