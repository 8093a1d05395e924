/// Fatal input-validation failures for the channel-coding core.
///
/// A CRC mismatch is not represented here: `crc_check` reports that as a
/// data outcome (`ok: bool`) alongside the recovered payload, never as an
/// `Err`. Only malformed *call-site* input reaches this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodingError {
    /// A bit vector contained a value other than 0 or 1.
    InvalidBitValue { index: usize, value: u8 },
    /// `CrcSpec::by_name` was asked for a spec outside the closed set in §6.
    UnknownCrcSpec,
}

impl std::fmt::Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodingError::InvalidBitValue { index, value } => write!(
                f,
                "bit at index {index} has value {value}, expected 0 or 1"
            ),
            CodingError::UnknownCrcSpec => write!(f, "unknown CRC spec name"),
        }
    }
}

impl std::error::Error for CodingError {}

/// Checks that every byte in `bits` is 0 or 1.
///
/// Grounded on the teacher's `expect_value!`/`expect_failed!` macros in
/// `tetra_core::pdu_parse_error`: validation failures are reported eagerly,
/// with the offending index, rather than discovered deep in the arithmetic.
pub fn validate_bits(bits: &[u8]) -> Result<(), CodingError> {
    for (index, &value) in bits.iter().enumerate() {
        if value > 1 {
            tracing::error!(index, value, "invalid bit value");
            return Err(CodingError::InvalidBitValue { index, value });
        }
    }
    Ok(())
}
