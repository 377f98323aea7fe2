// SPDX-License-Identifier: AGPL-3.0

//! Conversions to host integers, byte buffers and radix strings

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use zwrap_exceptions::{ValueError, ValueResult};
use zwrap_utils::{parse_radix_digits, strip_prefix_ci};

use crate::bitvec::check_size;
use crate::BitVec;

/// Byte order for [`BitVec::to_bytes`] and [`BitVec::from_bytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    #[default]
    LittleEndian,
    BigEndian,
}

fn byte_len(size: u32) -> usize {
    (size as usize + 7) / 8
}

fn hex_len(size: u32) -> usize {
    (size as usize + 3) / 4
}

impl BitVec {
    fn overflow(&self, target: &str, signed: bool) -> ValueError {
        let reading = if signed {
            self.to_signed_bigint()
        } else {
            self.to_unsigned_bigint()
        };
        ValueError::overflow(format!(
            "{}-bit value {} does not fit in {}",
            self.size(),
            reading,
            target
        ))
    }

    pub fn to_i32(&self) -> ValueResult<i32> {
        self.value().to_i32().ok_or_else(|| self.overflow("i32", false))
    }

    pub fn to_u32(&self) -> ValueResult<u32> {
        self.value().to_u32().ok_or_else(|| self.overflow("u32", false))
    }

    pub fn to_i64(&self) -> ValueResult<i64> {
        self.value().to_i64().ok_or_else(|| self.overflow("i64", false))
    }

    pub fn to_u64(&self) -> ValueResult<u64> {
        self.value().to_u64().ok_or_else(|| self.overflow("u64", false))
    }

    /// Two's-complement reading as `i32`
    pub fn to_signed_i32(&self) -> ValueResult<i32> {
        self.to_signed_bigint()
            .to_i32()
            .ok_or_else(|| self.overflow("i32", true))
    }

    /// Two's-complement reading as `i64`
    pub fn to_signed_i64(&self) -> ValueResult<i64> {
        self.to_signed_bigint()
            .to_i64()
            .ok_or_else(|| self.overflow("i64", true))
    }

    pub fn to_biguint(&self) -> BigUint {
        self.value().clone()
    }

    /// Exactly `ceil(size / 8)` bytes
    pub fn to_bytes(&self, endianness: Endianness) -> Vec<u8> {
        let mut bytes = self.value().to_bytes_le();
        bytes.resize(byte_len(self.size()), 0);
        if endianness == Endianness::BigEndian {
            bytes.reverse();
        }
        bytes
    }

    /// Build from at most `ceil(size / 8)` bytes
    pub fn from_bytes(bytes: &[u8], size: u32, endianness: Endianness) -> ValueResult<BitVec> {
        check_size(size)?;
        let max_len = byte_len(size);
        if bytes.len() > max_len {
            return Err(ValueError::argument(format!(
                "Byte array length {} exceeds maximum {} bytes for {}-bit vector",
                bytes.len(),
                max_len,
                size
            )));
        }

        let value = match endianness {
            Endianness::LittleEndian => BigUint::from_bytes_le(bytes),
            Endianness::BigEndian => BigUint::from_bytes_be(bytes),
        };
        Ok(BitVec::from_masked(value, size))
    }

    /// Parse hexadecimal digits, optionally prefixed with `0x`
    pub fn from_hex(text: &str, size: u32) -> ValueResult<BitVec> {
        check_size(size)?;
        let digits = strip_prefix_ci(text.trim(), "0x");
        let max_len = hex_len(size);
        if digits.len() > max_len {
            return Err(ValueError::argument(format!(
                "Hex string length {} exceeds maximum {} digits for {}-bit vector",
                digits.len(),
                max_len,
                size
            )));
        }

        let value = parse_radix_digits(digits, 16)
            .ok_or_else(|| ValueError::argument(format!("Invalid hexadecimal string: {}", text)))?;
        Ok(BitVec::from_masked(value, size))
    }

    /// Parse binary digits, optionally prefixed with `0b`
    pub fn from_binary(text: &str, size: u32) -> ValueResult<BitVec> {
        check_size(size)?;
        let digits = strip_prefix_ci(text.trim(), "0b");
        if digits.len() > size as usize {
            return Err(ValueError::argument(format!(
                "Binary string length {} exceeds maximum {} bits for {}-bit vector",
                digits.len(),
                size,
                size
            )));
        }

        let value = parse_radix_digits(digits, 2)
            .ok_or_else(|| ValueError::argument(format!("Invalid binary string: {}", text)))?;
        Ok(BitVec::from_masked(value, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bv(value: i64, size: u32) -> BitVec {
        BitVec::from_i64(value, size).unwrap()
    }

    #[test]
    fn test_unsigned_host_conversions() {
        assert_eq!(bv(42, 8).to_i32().unwrap(), 42);
        assert_eq!(bv(-1, 32).to_u32().unwrap(), u32::MAX);
        assert_eq!(bv(-1, 64).to_u64().unwrap(), u64::MAX);
        assert_eq!(bv(-1, 8).to_i64().unwrap(), 255);
    }

    #[test]
    fn test_unsigned_conversion_overflow() {
        let err = bv(-1, 32).to_i32().unwrap_err();
        assert!(matches!(err, ValueError::Overflow(_)));
        assert!(bv(-1, 64).to_i64().is_err());
        assert!(bv(1, 65).shl(64).unwrap().to_u64().is_err());
    }

    #[test]
    fn test_signed_host_conversions() {
        assert_eq!(bv(-1, 32).to_signed_i32().unwrap(), -1);
        assert_eq!(bv(-128, 8).to_signed_i32().unwrap(), -128);
        assert_eq!(bv(i64::MIN, 64).to_signed_i64().unwrap(), i64::MIN);
        assert!(bv(-1, 33).shl(32).unwrap().to_signed_i32().is_err());
        assert!(bv(1, 40).shl(35).unwrap().to_signed_i32().is_err());
    }

    #[test]
    fn test_to_bytes() {
        let value = bv(0x1234, 16);
        assert_eq!(value.to_bytes(Endianness::LittleEndian), vec![0x34, 0x12]);
        assert_eq!(value.to_bytes(Endianness::BigEndian), vec![0x12, 0x34]);
        assert_eq!(bv(1, 12).to_bytes(Endianness::BigEndian), vec![0x00, 0x01]);
        assert_eq!(bv(0, 8).to_bytes(Endianness::default()), vec![0x00]);
    }

    #[test]
    fn test_from_bytes() {
        let le = BitVec::from_bytes(&[0x34, 0x12], 16, Endianness::LittleEndian).unwrap();
        assert_eq!(le, bv(0x1234, 16));
        let be = BitVec::from_bytes(&[0x12, 0x34], 16, Endianness::BigEndian).unwrap();
        assert_eq!(be, bv(0x1234, 16));
        let short = BitVec::from_bytes(&[0xff], 32, Endianness::LittleEndian).unwrap();
        assert_eq!(short, bv(0xff, 32));
        assert_eq!(BitVec::from_bytes(&[], 8, Endianness::BigEndian).unwrap(), bv(0, 8));
    }

    #[test]
    fn test_from_bytes_rejects_long_input() {
        let err = BitVec::from_bytes(&[1, 2, 3], 16, Endianness::LittleEndian).unwrap_err();
        assert!(matches!(err, ValueError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(BitVec::from_hex("0x2A", 8).unwrap(), bv(42, 8));
        assert_eq!(BitVec::from_hex("ff", 8).unwrap(), bv(255, 8));
        assert_eq!(BitVec::from_hex("0XfF", 12).unwrap(), bv(255, 12));
        assert_eq!(BitVec::from_hex("7ff", 10).unwrap(), bv(0x3ff, 10));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(BitVec::from_hex("0x123", 8).is_err());
        assert!(BitVec::from_hex("xyz", 16).is_err());
        assert!(BitVec::from_hex("", 16).is_err());
        assert!(BitVec::from_hex("0x", 16).is_err());
    }

    #[test]
    fn test_from_binary() {
        assert_eq!(BitVec::from_binary("0b00101010", 8).unwrap(), bv(42, 8));
        assert_eq!(BitVec::from_binary("101", 8).unwrap(), bv(5, 8));
        assert!(BitVec::from_binary("0b123", 8).is_err());
        assert!(BitVec::from_binary("111111111", 8).is_err());
        assert!(BitVec::from_binary("", 8).is_err());
    }
}
