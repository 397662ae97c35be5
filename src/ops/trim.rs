//! Trim: removes every state that is not on some initial→final path,
//! renumbering the states that remain contiguously from `0`.
//!
//! Grounded on `original_source/include/mata/nfa-plumbing.hh`'s `trim`
//! plumbing operation, called after every segment is cut out in
//! `original_source/src/strings/nfa-segmentation.cc` and `noodlify.cc`.

use crate::nfa::Nfa;
use crate::word::State;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

fn reachable_forward(a: &Nfa) -> BTreeSet<State> {
    let mut visited: BTreeSet<State> = a.initial_states().iter().collect();
    let mut queue: VecDeque<State> = visited.iter().copied().collect();
    while let Some(state) = queue.pop_front() {
        let Some(post) = a.delta().state_post(state) else { continue };
        for symbol_post in post.iter() {
            for &target in symbol_post.targets() {
                if visited.insert(target) {
                    queue.push_back(target);
                }
            }
        }
    }
    visited
}

fn reachable_backward(a: &Nfa) -> BTreeSet<State> {
    let mut predecessors: BTreeMap<State, Vec<State>> = BTreeMap::new();
    for (source, post) in a.delta().iter() {
        for symbol_post in post.iter() {
            for &target in symbol_post.targets() {
                predecessors.entry(target).or_default().push(source);
            }
        }
    }
    let mut visited: BTreeSet<State> = a.final_states().iter().collect();
    let mut queue: VecDeque<State> = visited.iter().copied().collect();
    while let Some(state) = queue.pop_front() {
        for &pred in predecessors.get(&state).into_iter().flatten() {
            if visited.insert(pred) {
                queue.push_back(pred);
            }
        }
    }
    visited
}

/// `a` with every state dropped that cannot reach a final state from some
/// initial state, the survivors renumbered `0, 1, 2, ...` in their original
/// relative order. Idempotent: `trim(&trim(a)) == trim(a)`.
pub fn trim(a: &Nfa) -> Nfa {
    let live: BTreeSet<State> = reachable_forward(a).intersection(&reachable_backward(a)).copied().collect();

    let mut reindex: BTreeMap<State, State> = BTreeMap::new();
    let mut result = Nfa::new();
    for &state in &live {
        reindex.insert(state, result.add_state());
    }

    for state in a.initial_states().iter() {
        if let Some(&new_state) = reindex.get(&state) {
            result.set_initial(new_state);
        }
    }
    for state in a.final_states().iter() {
        if let Some(&new_state) = reindex.get(&state) {
            result.set_final(new_state);
        }
    }
    for (source, post) in a.delta().iter() {
        let Some(&new_source) = reindex.get(&source) else { continue };
        for symbol_post in post.iter() {
            for &target in symbol_post.targets() {
                if let Some(&new_target) = reindex.get(&target) {
                    result.add_transition(new_source, symbol_post.symbol(), new_target);
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{is_in_lang, Word};

    #[test]
    fn trim_drops_dead_and_unreachable_states() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        let dead_end = a.add_state();
        let unreachable = a.add_state();
        a.set_initial(s0);
        a.set_final(s1);
        a.add_transition(s0, 1, s1);
        a.add_transition(s0, 2, dead_end);
        a.add_transition(unreachable, 3, s1);

        let trimmed = trim(&a);
        assert_eq!(trimmed.num_states(), 2);
        assert!(is_in_lang(&trimmed, &Word::from(vec![1])));
    }

    #[test]
    fn trim_is_idempotent() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        let unreachable = a.add_state();
        a.set_initial(s0);
        a.set_final(s1);
        a.add_transition(s0, 1, s1);
        a.add_transition(unreachable, 2, s1);

        let once = trim(&a);
        let twice = trim(&once);
        assert_eq!(once.num_states(), twice.num_states());
        assert!(is_in_lang(&twice, &Word::from(vec![1])));
    }

    #[test]
    fn trim_preserves_language_of_a_clean_automaton() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        a.set_initial(s0);
        a.set_final(s1);
        a.add_transition(s0, 9, s1);

        let trimmed = trim(&a);
        assert_eq!(trimmed.num_states(), a.num_states());
        assert!(is_in_lang(&trimmed, &Word::from(vec![9])));
    }
}
