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

//! Read-only identity entries for an inspection surface (debugfs-style):
//! one (name, rendered contents) pair per entry, independent of telemetry
//! freshness.

use crate::snapshot::Identity;

pub const SERIAL_NUMBER: &str = "serial_number";
pub const FIRMWARE_VERSION: &str = "firmware_version";
pub const POWER_CYCLES: &str = "power_cycles";

pub fn entries(identity: &Identity) -> [(&'static str, String); 3] {
    [
        (SERIAL_NUMBER, identity.serial_string()),
        (FIRMWARE_VERSION, identity.firmware_version.to_string()),
        (POWER_CYCLES, identity.power_cycles.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_render_identity() {
        let identity = Identity {
            serial: [12345, 678],
            firmware_version: 1029,
            power_cycles: 42,
        };
        let entries = entries(&identity);

        assert_eq!(entries[0], (SERIAL_NUMBER, "12345-00678".to_string()));
        assert_eq!(entries[1], (FIRMWARE_VERSION, "1029".to_string()));
        assert_eq!(entries[2], (POWER_CYCLES, "42".to_string()));
    }

    #[test]
    fn test_entries_before_first_report() {
        let entries = entries(&Identity::default());
        assert_eq!(entries[0].1, "00000-00000");
        assert_eq!(entries[1].1, "0");
        assert_eq!(entries[2].1, "0");
    }
}
