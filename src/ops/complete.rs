//! Completion: gives every state an outgoing transition on every symbol in
//! `symbols`, adding a sink state if needed.
//!
//! Exposed as a standalone operation rather than only a step inside
//! [`crate::complement::complement`], grounded on
//! `original_source/include/mata/nfa-plumbing.hh`'s `make_complete` and
//! `other_examples/manifests/MasWag-hyppau`'s `src/dfa.rs`, which exposes
//! the same thing as `pub fn make_complete`.

use crate::nfa::Nfa;
use crate::word::Symbol;

/// `a`, completed with respect to `symbols`: if some state is missing a
/// transition on some symbol in `symbols`, a fresh sink state is added and
/// used as the target of every such missing transition (including the
/// sink's own).  A no-op (beyond cloning) if `a` is already complete.
pub fn make_complete(a: &Nfa, symbols: &[Symbol]) -> Nfa {
    let mut result = a.clone();
    let num_states = result.num_states() as u32;
    let is_missing_some_transition =
        (0..num_states).any(|state| symbols.iter().any(|&symbol| result.delta().post(state, symbol).is_none()));
    if !is_missing_some_transition {
        return result;
    }

    let sink = result.add_state();
    for state in 0..sink {
        for &symbol in symbols {
            if result.delta().post(state, symbol).is_none() {
                result.add_transition(state, symbol, sink);
            }
        }
    }
    for &symbol in symbols {
        result.add_transition(sink, symbol, sink);
    }
    result
}
