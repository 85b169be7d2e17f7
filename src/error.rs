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

use thiserror::Error;

use crate::registry::SensorKind;

/// Result type alias using TelemetryError
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Errors surfaced by decoding and querying. None of these are fatal: a
/// malformed report leaves the previous snapshot in place, and a stale read
/// resolves itself as soon as the next status report arrives.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("status report is {len} bytes, layout needs at least {min}")]
    Malformed { len: usize, min: usize },
    #[error("no status report received within the staleness window")]
    Stale,
    #[error("no {kind} channel at index {index}")]
    InvalidChannel { kind: SensorKind, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TelemetryError::Malformed { len: 12, min: 226 };
        assert_eq!(
            format!("{}", err),
            "status report is 12 bytes, layout needs at least 226"
        );

        let err = TelemetryError::Stale;
        assert!(format!("{}", err).contains("staleness window"));

        let err = TelemetryError::InvalidChannel {
            kind: SensorKind::Fan,
            index: 9,
        };
        assert_eq!(format!("{}", err), "no fan channel at index 9");
    }
}
