use super::trellis::{Trellis, STANDARD_GENERATORS};

/// Constraint length K=7, three generator polynomials, and their derived
/// trellis (§3, §4.3).
///
/// Grounded on `errorcontrol_params::ErrorControlParams`/`get_params`: a
/// small immutable struct bound once per code and shared by `'static`
/// reference, rather than rebuilt per call.
#[derive(Debug, Clone)]
pub struct ConvCodeSpec {
    generators: [u8; 3],
    trellis: Trellis,
}

/// Constraint length K (number of input bits, including the current one,
/// that influence an output bit).
pub const CONSTRAINT_LENGTH: usize = 7;
/// Memory m = K - 1: number of stored past input bits.
pub const MEMORY: usize = CONSTRAINT_LENGTH - 1;

impl ConvCodeSpec {
    /// The TS 36.212 rate-1/3 mother code: G0=133₈, G1=171₈, G2=165₈.
    pub fn standard() -> Self {
        Self::from_generators(STANDARD_GENERATORS)
    }

    /// Binds an arbitrary set of three K=7 generator polynomials and builds
    /// their trellis immediately — cheap (128 per-state computations, §9)
    /// and done once rather than per encode/decode call.
    pub fn from_generators(generators: [u8; 3]) -> Self {
        Self {
            generators,
            trellis: Trellis::build(generators),
        }
    }

    pub fn generators(&self) -> [u8; 3] {
        self.generators
    }

    pub fn trellis(&self) -> &Trellis {
        &self.trellis
    }
}

impl Default for ConvCodeSpec {
    fn default() -> Self {
        Self::standard()
    }
}
