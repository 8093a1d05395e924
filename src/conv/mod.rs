//! Convolutional coding: trellis construction, encoding, and Viterbi
//! decoding (§4.2-§4.4).

pub mod encoder;
pub mod spec;
pub mod trellis;
pub mod viterbi;

pub use encoder::conv_encode;
pub use spec::ConvCodeSpec;
pub use trellis::Trellis;
pub use viterbi::conv_decode_terminated;
