//! Sensirion CRC-8 as used on every 16-bit word the SCD40 sends.
//!
//! Each word is followed by one checksum byte computed over its two data
//! bytes: polynomial `0x31`, initial value `0xFF`, no reflection, no final
//! XOR.

use crc::{Algorithm, Crc};

/// CRC-8 parameters from the SCD4x datasheet, section 3.11.
pub const CRC_8_SENSIRION: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xff,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xf7,
    residue: 0x00,
};

const SENSIRION: Crc<u8> = Crc::<u8>::new(&CRC_8_SENSIRION);

/// Computes the Sensirion CRC-8 of `data`.
pub fn crc8(data: &[u8]) -> u8 {
    SENSIRION.checksum(data)
}

/// Verifies every `[msb, lsb, crc]` triple in `frame`.
///
/// Returns the index of the first word whose checksum does not match.
/// A trailing partial triple is ignored.
pub fn verify_frame(frame: &[u8]) -> Result<(), usize> {
    for (word, chunk) in frame.chunks_exact(3).enumerate() {
        if crc8(&chunk[..2]) != chunk[2] {
            return Err(word);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc8_datasheet_example() {
        // SCD4x datasheet: CRC of 0xBEEF is 0x92
        assert_eq!(crc8(&[0xBE, 0xEF]), 0x92);
    }

    #[test]
    fn test_crc8_zero_word() {
        assert_eq!(crc8(&[0x00, 0x00]), 0x81);
    }

    #[test]
    fn test_verify_frame_valid() {
        let frame = [
            0x01, 0x00, 0x75, // CO2
            0x6E, 0x15, 0x0F, // temperature
            0x80, 0x00, 0xA2, // humidity
            0x00, 0x00, 0x81, // status
        ];
        assert_eq!(verify_frame(&frame), Ok(()));
    }

    #[test]
    fn test_verify_frame_reports_first_bad_word() {
        let frame = [
            0x01, 0x00, 0x75, //
            0x6E, 0x15, 0x0F, //
            0x80, 0x00, 0x00, // wrong, should be 0xA2
            0x00, 0x00, 0x00, // wrong, should be 0x81
        ];
        assert_eq!(verify_frame(&frame), Err(2));
    }
}
