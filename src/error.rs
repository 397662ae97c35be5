//! Error types shared by every fallible operation in this crate.

use crate::word::{State, Symbol};
use thiserror::Error;

/// Everything that can go wrong while building, combining, or deciding
/// properties of an automaton.
///
/// Inclusion, universality, and equivalence checks never produce a
/// `MataError` to report a semantic "not included" / "not universal" /
/// "not equivalent" answer — those are ordinary `Ok(false)` results,
/// optionally carrying a witness. A `MataError` always means the *question
/// itself* could not be answered: malformed input, an algorithm applied to
/// an automaton it does not support, or a resource limit the caller asked to
/// be enforced.
#[derive(Debug, Error)]
pub enum MataError {
    /// The input does not describe a well-formed automaton: wrong automaton
    /// kind for the requested operation, a transition with the wrong arity,
    /// a formula referencing an undefined name, or two alphabet symbols
    /// mapped to conflicting names.
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// A human-readable description of what was wrong.
        reason: String,
    },

    /// A state index referenced a state that does not exist in the
    /// automaton (or sparse set) it was used against.
    #[error("state {state} is out of bounds (capacity {capacity})")]
    StateOutOfBounds {
        /// The offending state identifier.
        state: State,
        /// The capacity of the structure it was checked against.
        capacity: usize,
    },

    /// An operation that requires a deterministic automaton (no two
    /// transitions on the same state-symbol pair, no ε-transitions) was
    /// given one that is not.
    #[error("operation requires a deterministic automaton")]
    NotDeterministic,

    /// A caller-supplied algorithm-selector key or value was not recognised.
    #[error("unknown algorithm selector: {key} = {value}")]
    UnknownAlgorithm {
        /// The selector key (e.g. `"inclusion"`).
        key: String,
        /// The unrecognised value supplied for that key.
        value: String,
    },

    /// Mintermization produced more minterms than the caller-imposed limit.
    #[error("mintermization produced {minterms} minterms, exceeding the limit of {limit}")]
    MintermExplosion {
        /// The number of minterms computed before the limit was hit.
        minterms: usize,
        /// The caller-imposed limit.
        limit: usize,
    },

    /// A symbol used in an operation is not a member of the alphabet it was
    /// checked against.
    #[error("symbol {symbol} is not a member of the alphabet")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: Symbol,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MataError>;
