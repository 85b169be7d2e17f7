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

//! Decoder for the status report the Octo pushes once per second. The device
//! answers Get_Report requests with a dummy value, so everything here works
//! off the pushed reports alone.

use crate::error::{Result, TelemetryError};
use crate::registry::{self, SensorKind, MIN_REPORT_LEN};
use crate::snapshot::{Identity, Snapshot};

/// Report ID of the periodic status report.
pub const STATUS_REPORT_ID: u8 = 0x01;

/* Identity fields ride along in every status report at fixed offsets.
 * Channel offsets live in the registry; only these four are decoder-owned. */

pub(crate) const SERIAL_FIRST_PART: usize = 3;
pub(crate) const SERIAL_SECOND_PART: usize = 5;
pub(crate) const FIRMWARE_VERSION: usize = 13;
pub(crate) const POWER_CYCLES: usize = 24;

/// Big-endian field extraction, shared by every channel and identity field.
fn read_be(data: &[u8], offset: usize, width: usize) -> u64 {
    data[offset..offset + width]
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Decode one status report into a complete snapshot plus identity metadata.
///
/// Fails with `Malformed` if the buffer is shorter than the fixed layout;
/// the caller's previous snapshot stays authoritative in that case. Decoding
/// is deterministic: identical bytes always produce identical results.
pub fn decode_status_report(data: &[u8]) -> Result<(Snapshot, Identity)> {
    if data.len() < MIN_REPORT_LEN {
        return Err(TelemetryError::Malformed {
            len: data.len(),
            min: MIN_REPORT_LEN,
        });
    }

    let identity = Identity {
        serial: [
            read_be(data, SERIAL_FIRST_PART, 2) as u16,
            read_be(data, SERIAL_SECOND_PART, 2) as u16,
        ],
        firmware_version: read_be(data, FIRMWARE_VERSION, 2) as u16,
        power_cycles: read_be(data, POWER_CYCLES, 4) as u32,
    };

    let mut snapshot = Snapshot::default();
    for kind in SensorKind::ALL {
        for spec in registry::channels(kind) {
            let raw = read_be(data, spec.offset, spec.width) as i64;
            snapshot.set(spec.kind, spec.index, spec.scale.apply(raw));
        }
    }

    Ok((snapshot, identity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::ReportBuilder;

    #[test]
    fn test_short_report_is_malformed() {
        let err = decode_status_report(&[0u8; 64]).unwrap_err();
        assert_eq!(
            err,
            TelemetryError::Malformed {
                len: 64,
                min: MIN_REPORT_LEN
            }
        );

        let err = decode_status_report(&[]).unwrap_err();
        assert_eq!(
            err,
            TelemetryError::Malformed {
                len: 0,
                min: MIN_REPORT_LEN
            }
        );
    }

    #[test]
    fn test_one_byte_short_is_malformed() {
        let report = ReportBuilder::new().build();
        let truncated = &report[..MIN_REPORT_LEN - 1];
        assert!(decode_status_report(truncated).is_err());
        assert!(decode_status_report(&report).is_ok());
    }

    #[test]
    fn test_identity_fields() {
        let report = ReportBuilder::new()
            .serial(12345, 6789)
            .firmware(1029)
            .power_cycles(70_000)
            .build();
        let (_, identity) = decode_status_report(&report).unwrap();

        assert_eq!(identity.serial, [12345, 6789]);
        assert_eq!(identity.firmware_version, 1029);
        assert_eq!(identity.power_cycles, 70_000);
    }

    #[test]
    fn test_channel_scaling() {
        // The worked examples: 200 raw -> 2000 millidegrees, 50 raw -> 5 l/h,
        // 1 raw -> 10000 microwatts, 5 raw -> 50 millivolts.
        let report = ReportBuilder::new()
            .raw_channel(SensorKind::Temp, 0, 0x00C8)
            .raw_channel(SensorKind::Fan, 0, 0x0032)
            .raw_channel(SensorKind::Fan, 3, 1460)
            .raw_channel(SensorKind::Power, 0, 0x0001)
            .raw_channel(SensorKind::Voltage, 0, 0x0005)
            .raw_channel(SensorKind::Current, 5, 250)
            .build();
        let (snapshot, _) = decode_status_report(&report).unwrap();

        assert_eq!(snapshot.temps[0], 2000);
        assert_eq!(snapshot.speeds[0], 5);
        assert_eq!(snapshot.speeds[3], 1460);
        assert_eq!(snapshot.powers[0], 10000);
        assert_eq!(snapshot.voltages[0], 50);
        assert_eq!(snapshot.currents[5], 250);
    }

    #[test]
    fn test_flow_division_truncates() {
        let report = ReportBuilder::new()
            .raw_channel(SensorKind::Fan, 0, 59)
            .build();
        let (snapshot, _) = decode_status_report(&report).unwrap();
        assert_eq!(snapshot.speeds[0], 5);
    }

    #[test]
    fn test_round_trip_all_channels() {
        let mut builder = ReportBuilder::new().serial(11, 22).firmware(33).power_cycles(44);
        for kind in SensorKind::ALL {
            for index in 0..registry::channel_count(kind) {
                builder = builder.raw_channel(kind, index, 100 + index as u16);
            }
        }
        let report = builder.build();
        let (snapshot, identity) = decode_status_report(&report).unwrap();

        for kind in SensorKind::ALL {
            for (index, spec) in registry::channels(kind).iter().enumerate() {
                let expected = spec.scale.apply(100 + index as i64);
                assert_eq!(
                    snapshot.value(kind, index),
                    Some(expected),
                    "{} channel {}",
                    kind,
                    index
                );
            }
        }
        assert_eq!(identity.serial, [11, 22]);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let report = ReportBuilder::new()
            .serial(1, 2)
            .fill_raw(215)
            .raw_channel(SensorKind::Fan, 7, 900)
            .build();
        assert_eq!(
            decode_status_report(&report).unwrap(),
            decode_status_report(&report).unwrap()
        );
    }

    #[test]
    fn test_big_endian_byte_order() {
        let mut report = ReportBuilder::new().build();
        let spec = registry::channel(SensorKind::Fan, 1).unwrap();
        report[spec.offset] = 0x12;
        report[spec.offset + 1] = 0x34;
        let (snapshot, _) = decode_status_report(&report).unwrap();
        assert_eq!(snapshot.speeds[1], 0x1234);
    }
}
