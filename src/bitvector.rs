use std::fmt;

use crate::error::{validate_bits, CodingError};

/// An owned sequence of bits, one byte per bit (each byte strictly 0 or 1).
///
/// Grounded on `tetra_core::bitbuffer::BitBuffer`, trimmed to the part of its
/// API this crate actually needs. `BitBuffer` carries a windowed read/write
/// cursor (`start`/`pos`/`end`) for incrementally assembling PDU fields;
/// PolyCRC/ConvEncoder/Viterbi never need that — they always consume and
/// produce a complete, already-assembled bit sequence — so `BitVector` is
/// just a validated `Vec<u8>`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct BitVector(Vec<u8>);

impl BitVector {
    /// Wraps `bits`, rejecting any byte that isn't 0 or 1.
    pub fn new(bits: Vec<u8>) -> Result<Self, CodingError> {
        validate_bits(&bits)?;
        Ok(Self(bits))
    }

    /// Wraps `bits` without validation. Only use this for values already
    /// known to be bit-exact (e.g. internal construction from another
    /// `BitVector`, or encoder/decoder output).
    pub fn from_validated(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self(bits)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Builds a `BitVector` from a string of '0'/'1' characters.
    ///
    /// Mirrors `BitBuffer::from_bitstr`, which panics on any other
    /// character; reserved for test vectors where the input is a compile
    /// time constant, not caller-supplied data.
    pub fn from_bitstr(bitstr: &str) -> Self {
        let bits: Vec<u8> = bitstr
            .chars()
            .map(|c| match c {
                '0' => 0,
                '1' => 1,
                other => panic!("BitVector::from_bitstr: invalid character `{other}`; only '0' or '1' allowed"),
            })
            .collect();
        Self(bits)
    }

    /// Renders as a string of '0'/'1' characters, mirroring `BitBuffer::to_bitstr`.
    pub fn to_bitstr(&self) -> String {
        self.0.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect()
    }

    /// Appends `other`'s bits after this vector's, consuming both.
    pub fn concat(mut self, other: BitVector) -> Self {
        self.0.extend_from_slice(&other.0);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.0.iter()
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector({})", self.to_bitstr())
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bitstr())
    }
}

impl From<Vec<u8>> for BitVector {
    /// Infallible conversion for already-validated producers (encoder/decoder
    /// output). Caller-facing construction should go through `BitVector::new`.
    fn from(bits: Vec<u8>) -> Self {
        Self::from_validated(bits)
    }
}

impl AsRef<[u8]> for BitVector {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitstr_roundtrip() {
        let s = "1011010011";
        let bv = BitVector::from_bitstr(s);
        assert_eq!(bv.len(), s.len());
        assert_eq!(bv.to_bitstr(), s);
    }

    #[test]
    fn rejects_non_bit_values() {
        let err = BitVector::new(vec![0, 1, 2, 1]).unwrap_err();
        assert_eq!(err, CodingError::InvalidBitValue { index: 2, value: 2 });
    }

    #[test]
    fn concat_preserves_order() {
        let a = BitVector::from_bitstr("101");
        let b = BitVector::from_bitstr("00");
        assert_eq!(a.concat(b).to_bitstr(), "10100");
    }
}
