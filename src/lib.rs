//! A library for constructing, combining, and deciding properties of finite
//! automata over integer symbols.
//!
//! The central value type is [`nfa::Nfa`]: a nondeterministic finite automaton
//! with ε-transitions, represented as a sparse, sorted [`delta::Delta`]
//! together with [`sparse_set::SparseSet`] initial/final state sets. Around it
//! sit the algebraic operations in [`ops`], the state-space reductions in
//! [`determinize`], [`complement`], [`minimize`], the decision procedures in
//! [`decide`], the string-constraint helper in [`segment`], and the symbolic
//! alphabet translator in [`mintermize`].
//!
//! The [`ir`] module is a boundary type: it is what an external `.mata` text
//! parser or a regex front end would build before handing the result to
//! [`nfa::Nfa::try_from_ir`]. Neither of those front ends lives in this
//! crate.

pub mod afa;
pub mod alphabet;
pub mod complement;
pub mod decide;
pub mod delta;
pub mod determinize;
pub mod error;
pub mod ir;
pub mod minimize;
pub mod mintermize;
pub mod nfa;
pub mod ops;
pub mod segment;
pub mod simulation;
pub mod sparse_set;
pub mod sync_iter;
pub mod word;

pub use alphabet::Alphabet;
pub use delta::Delta;
pub use error::MataError;
pub use mintermize::Mintermization;
pub use nfa::Nfa;
pub use sparse_set::SparseSet;
pub use word::{Symbol, Word, EPSILON};
