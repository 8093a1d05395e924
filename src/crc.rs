//! Generic polynomial CRC engine (§4.1).
//!
//! Grounded on `tetra_entities::lmac::components::crc16`, which implements a
//! single fixed CRC-16/ITU-T as a left-shifting LFSR over a bit-per-byte
//! slice. This module generalizes that LFSR to an arbitrary width and
//! generator polynomial, closed over the four specs TS 36.212 §5.1.1 names.

use crate::bitvector::BitVector;
use crate::error::CodingError;

/// Width and generator polynomial for one CRC variant.
///
/// The generator is given as the width-bit integer of nonzero coefficients
/// below `x^width` (the `x^width` term itself is implicit, exactly as in
/// §6's coefficient tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcSpec {
    pub width: u32,
    pub generator: u32,
}

impl CrcSpec {
    const fn from_bits(width: u32, bits: &[u32]) -> Self {
        let mut generator = 0u32;
        let mut i = 0;
        while i < bits.len() {
            generator |= 1 << bits[i];
            i += 1;
        }
        Self { width, generator }
    }

    /// CRC-24A, TS 36.212 §5.1.1 — used by the transmit pipeline.
    pub const CRC_24A: CrcSpec =
        CrcSpec::from_bits(24, &[23, 18, 17, 14, 11, 10, 7, 6, 5, 4, 3, 1, 0]);

    /// CRC-24B, TS 36.212 §5.1.1.
    pub const CRC_24B: CrcSpec = CrcSpec::from_bits(24, &[23, 6, 5, 1, 0]);

    /// CRC-16, TS 36.212 §5.1.1.
    pub const CRC_16: CrcSpec = CrcSpec::from_bits(16, &[12, 5, 0]);

    /// CRC-8, TS 36.212 §5.1.1.
    pub const CRC_8: CrcSpec = CrcSpec::from_bits(8, &[7, 6, 4, 3, 2, 1, 0]);

    /// Looks up one of the closed set of supported specs by name.
    ///
    /// Unlike `check`/`attach`, an unrecognized name is a configuration
    /// error (§7, "unknown CRC name"), not a data outcome.
    pub fn by_name(name: &str) -> Result<CrcSpec, CodingError> {
        match name {
            "CRC-24A" => Ok(CrcSpec::CRC_24A),
            "CRC-24B" => Ok(CrcSpec::CRC_24B),
            "CRC-16" => Ok(CrcSpec::CRC_16),
            "CRC-8" => Ok(CrcSpec::CRC_8),
            _ => Err(CodingError::UnknownCrcSpec),
        }
    }

    fn mask(&self) -> u32 {
        (1u32 << self.width) - 1
    }

    /// Feeds `bits` through the LFSR recurrence, starting from `reg`.
    fn feed(&self, mut reg: u32, bits: &[u8]) -> u32 {
        let mask = self.mask();
        let msb_shift = self.width - 1;
        for &b in bits {
            let msb = (reg >> msb_shift) & 1;
            reg = (reg << 1) & mask;
            if (msb ^ b as u32) & 1 == 1 {
                reg ^= self.generator;
            }
        }
        reg
    }
}

/// Appends `spec.width` parity bits (MSB first) to `payload` (§4.1, operation 1).
///
/// The register after clocking in exactly `payload`'s bits already holds
/// `M(x)·x^width mod g(x)` — the left-shift-then-conditional-XOR recurrence
/// accounts for the implicit `x^width` multiplication on its own, the same
/// way the well-known bit-serial CRC-16/CCITT routine needs no explicit
/// zero-padding step to reproduce the textbook remainder. No extra zero
/// bits are clocked in here; see DESIGN.md for how this was verified
/// against the round-trip property in §8.
pub fn crc_attach(payload: BitVector, spec: CrcSpec) -> Result<BitVector, CodingError> {
    tracing::trace!(len = payload.len(), width = spec.width, "crc_attach");

    let reg = spec.feed(0, payload.as_slice());

    let mut parity = Vec::with_capacity(spec.width as usize);
    for i in 0..spec.width {
        parity.push(((reg >> (spec.width - 1 - i)) & 1) as u8);
    }

    Ok(payload.concat(BitVector::from_validated(parity)))
}

/// Recomputes the remainder over `bits_with_crc` and splits off the payload
/// (§4.1, operation 2). `ok` reflects whether the final register is zero;
/// a mismatch is a data outcome, never an `Err` (§7).
pub fn crc_check(bits_with_crc: BitVector, spec: CrcSpec) -> Result<(BitVector, bool), CodingError> {
    tracing::trace!(len = bits_with_crc.len(), width = spec.width, "crc_check");

    let width = spec.width as usize;
    let total = bits_with_crc.len();
    let split = total.saturating_sub(width);

    let reg = spec.feed(0, bits_with_crc.as_slice());
    let ok = reg == 0;
    if !ok {
        tracing::debug!(len = total, "crc_check mismatch");
    }

    let payload = BitVector::from_validated(bits_with_crc.as_slice()[..split].to_vec());
    Ok((payload, ok))
}
