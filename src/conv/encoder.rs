//! Rate-1/3, K=7 convolutional encoder (§4.2).
//!
//! Grounded on `tetra_entities::lmac::components::convenc::ConvEncState`,
//! which drives a shift-register state across an input slice and writes a
//! fixed number of output bits per input bit. That encoder is rate-1/2 with
//! a 4-tap state; this one generalizes the same shift-and-tap shape to
//! rate-1/3, K=7, and adds the zero-tail termination §4.2 requires (the
//! teacher's TETRA code is tail-biting elsewhere in the stack, never
//! zero-terminated, so termination has no teacher counterpart to reuse —
//! it is built fresh here against the trellis's own step function).

use crate::bitvector::BitVector;
use crate::conv::spec::ConvCodeSpec;

/// Number of zero bits appended to drive the encoder back to state 0 when
/// `terminate` is requested. Equal to `MEMORY` (§4.2).
pub const TAIL_BITS: usize = super::spec::MEMORY;

/// Encodes `bits` into the rate-1/3 coded stream.
///
/// With `terminate = true`, six zero bits are logically appended before
/// encoding and the output carries `3 * (bits.len() + 6)` bits. With
/// `terminate = false`, no tail is appended and the output carries
/// `3 * bits.len()` bits. Initial state is always 0 in both cases (§4.2 —
/// tail-biting initialization is out of scope).
pub fn conv_encode(bits: &BitVector, spec: &ConvCodeSpec, terminate: bool) -> BitVector {
    tracing::trace!(len = bits.len(), terminate, "conv_encode");

    let trellis = spec.trellis();
    let tail_len = if terminate { TAIL_BITS } else { 0 };
    let mut out = Vec::with_capacity(3 * (bits.len() + tail_len));

    let mut state = 0u8;
    let steps = bits.as_slice().iter().copied().chain(std::iter::repeat(0).take(tail_len));
    for u in steps {
        let step_out = trellis.out_bits(state, u);
        out.extend_from_slice(&step_out);
        state = trellis.next_state(state, u);
    }

    BitVector::from_validated(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::viterbi::conv_decode_terminated;

    fn standard() -> ConvCodeSpec {
        ConvCodeSpec::standard()
    }

    #[test]
    fn encode_length_law() {
        let spec = standard();
        let bits = BitVector::from_bitstr("101101001011");

        let untermed = conv_encode(&bits, &spec, false);
        assert_eq!(untermed.len(), 3 * bits.len());

        let termed = conv_encode(&bits, &spec, true);
        assert_eq!(termed.len(), 3 * (bits.len() + 6));
    }

    /// §8 concrete scenario 3: impulse response.
    #[test]
    fn impulse_response_first_symbol_is_all_ones() {
        let spec = standard();
        let bits = BitVector::from_bitstr("1");
        let coded = conv_encode(&bits, &spec, true);
        assert_eq!(coded.len(), 21);
        assert_eq!(&coded.to_bitstr()[..3], "111");
    }

    /// §8 concrete scenario 4: all-zero input encodes to all zeros.
    #[test]
    fn all_zero_input_encodes_to_all_zero_output() {
        let spec = standard();
        let bits = BitVector::from_bitstr(&"0".repeat(10));
        let coded = conv_encode(&bits, &spec, true);
        assert_eq!(coded.to_bitstr(), "0".repeat(48));
    }

    /// §8 invariant 4: noise-free encode/decode round trip.
    #[test]
    fn encode_decode_roundtrip_noise_free() {
        let spec = standard();
        let bits = BitVector::from_bitstr("10110010");
        let coded = conv_encode(&bits, &spec, true);
        let decoded = conv_decode_terminated(&coded, &spec, true);
        assert_eq!(decoded, bits);
    }
}
