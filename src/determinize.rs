//! Subset construction: turns an [`Nfa`] with ε-transitions into an
//! equivalent deterministic one.
//!
//! Grounded on `src/automata_ref/dfa.rs`'s `impl From<&NFA> for DFA`, which
//! this module generalizes from a dense transition matrix to `Delta`'s
//! sparse, sorted representation, using the same worklist-over-macro-states
//! shape (`dfa_eps_ixs`/`dfa_eps_map` there, `worklist`/`macro_states` here).

use crate::nfa::Nfa;
use crate::sync_iter::SynchronizedExistentialIterator;
use crate::word::{State, EPSILON};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// A set of original states collapsed into one determinized state.
pub type MacroState = BTreeSet<State>;

/// Determinizes `a`: the result has no ε-transitions, exactly one initial
/// state, and at most one transition per state-symbol pair.
pub fn determinize(a: &Nfa) -> Nfa {
    let (result, _macro_states) = determinize_with_map(a);
    result
}

/// Like [`determinize`], but also returns the mapping from each
/// determinized state back to the set of original states it collapses.
/// [`crate::complement::complement`] and [`crate::minimize`] both need this
/// to decide which determinized states are accepting or to recover which
/// original states a macro-state merges.
pub fn determinize_with_map(a: &Nfa) -> (Nfa, IndexMap<State, MacroState>) {
    let mut result = Nfa::new();
    let mut macro_to_state: IndexMap<MacroState, State> = IndexMap::new();
    let mut state_to_macro: IndexMap<State, MacroState> = IndexMap::new();
    let mut worklist: Vec<MacroState> = Vec::new();

    let start = a.epsilon_closure_set(a.initial_states().iter().collect());
    let start_state = result.add_state();
    result.set_initial(start_state);
    macro_to_state.insert(start.clone(), start_state);
    state_to_macro.insert(start_state, start.clone());
    worklist.push(start);

    while let Some(macro_state) = worklist.pop() {
        let source = *macro_to_state.get(&macro_state).unwrap();
        if macro_state.iter().any(|&s| a.final_states().contains(s)) {
            result.set_final(source);
        }

        let posts: Vec<_> = macro_state
            .iter()
            .filter_map(|&s| a.delta().state_post(s))
            .collect();
        for (symbol, hits) in SynchronizedExistentialIterator::new(posts) {
            if symbol == EPSILON {
                continue;
            }
            let next_raw: Vec<State> = hits.iter().flat_map(|post| post.targets().iter().copied()).collect();
            let next = a.epsilon_closure_set(next_raw);
            let target = *macro_to_state.entry(next.clone()).or_insert_with(|| {
                let state = result.add_state();
                state_to_macro.insert(state, next.clone());
                worklist.push(next.clone());
                state
            });
            result.add_transition(source, symbol, target);
        }
    }

    (result, state_to_macro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{is_in_lang, Word};

    #[test]
    fn determinize_collapses_epsilon_branches() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        let s2 = a.add_state();
        let s3 = a.add_state();
        a.set_initial(s0);
        a.set_final(s3);
        a.add_epsilon_transition(s0, s1);
        a.add_epsilon_transition(s0, s2);
        a.add_transition(s1, 1, s3);
        a.add_transition(s2, 1, s3);

        let d = determinize(&a);
        assert!(!d.has_epsilon_transitions());
        assert_eq!(d.initial_states().len(), 1);
        assert!(is_in_lang(&d, &Word::from(vec![1])));
    }

    #[test]
    fn determinize_is_functional() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        let s2 = a.add_state();
        a.set_initial(s0);
        a.set_final(s1);
        a.set_final(s2);
        a.add_transition(s0, 1, s1);
        a.add_transition(s0, 1, s2);

        let d = determinize(&a);
        for (_, post) in d.delta().iter() {
            for symbol_post in post.iter() {
                assert_eq!(symbol_post.targets().len(), 1);
            }
        }
    }
}
