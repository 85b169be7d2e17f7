/*
 * Test utilities for Octomon
 *
 * Builders for synthetic status reports, shared by the unit tests across
 * modules.
 */

#[cfg(test)]
pub mod test_utils {
    use crate::registry::{self, SensorKind, MIN_REPORT_LEN};
    use crate::report;

    /// Builds a well-formed status report buffer with raw fields written
    /// big-endian at their documented offsets. Everything defaults to zero.
    pub struct ReportBuilder {
        data: Vec<u8>,
    }

    impl ReportBuilder {
        pub fn new() -> Self {
            Self {
                data: vec![0u8; MIN_REPORT_LEN],
            }
        }

        pub fn serial(mut self, first: u16, second: u16) -> Self {
            put_be16(&mut self.data, report::SERIAL_FIRST_PART, first);
            put_be16(&mut self.data, report::SERIAL_SECOND_PART, second);
            self
        }

        pub fn firmware(mut self, version: u16) -> Self {
            put_be16(&mut self.data, report::FIRMWARE_VERSION, version);
            self
        }

        pub fn power_cycles(mut self, cycles: u32) -> Self {
            put_be32(&mut self.data, report::POWER_CYCLES, cycles);
            self
        }

        /// Write one channel's raw (pre-scaling) field.
        pub fn raw_channel(mut self, kind: SensorKind, index: usize, raw: u16) -> Self {
            let spec = registry::channel(kind, index)
                .unwrap_or_else(|| panic!("no {} channel {}", kind, index));
            put_be16(&mut self.data, spec.offset, raw);
            self
        }

        /// Write the same raw field into every channel of every category.
        pub fn fill_raw(mut self, raw: u16) -> Self {
            for kind in SensorKind::ALL {
                for spec in registry::channels(kind) {
                    put_be16(&mut self.data, spec.offset, raw);
                }
            }
            self
        }

        pub fn build(self) -> Vec<u8> {
            self.data
        }
    }

    impl Default for ReportBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    fn put_be16(data: &mut [u8], offset: usize, value: u16) {
        data[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
    }

    fn put_be32(data: &mut [u8], offset: usize, value: u32) {
        data[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
    }
}
