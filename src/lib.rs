//! LTE (3GPP TS 36.212) channel-coding core: CRC attach/check, rate-1/3 K=7
//! convolutional encoding, and hard-decision Viterbi decoding.
//!
//! Grounded throughout on `tetra_entities::lmac::components::{crc16,
//! convenc, viterbi, errorcontrol}` — see DESIGN.md for the full ledger.

pub mod bitvector;
pub mod conv;
pub mod crc;
pub mod error;

#[cfg(test)]
pub mod logging;

pub use bitvector::BitVector;
pub use conv::{conv_decode_terminated, conv_encode, ConvCodeSpec, Trellis};
pub use crc::{crc_attach, crc_check, CrcSpec};
pub use error::CodingError;
