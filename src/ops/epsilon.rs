//! ε-removal: rebuilds the transition relation so that every path through
//! ε-transitions is absorbed into ordinary transitions, then drops the
//! ε-transitions themselves.
//!
//! For each state `s`, the new post on symbol `a` is the ε-closure of the
//! union, over every `s'` in the ε-closure of `s`, of `delta(s', a)`. A
//! state becomes accepting if its ε-closure contains an original accepting
//! state. Grounded on `dennisss-dacha/pkg/automata/src/fsm.rs`'s
//! `without_epsilons`.

use crate::nfa::Nfa;
use crate::word::EPSILON;

/// Returns an automaton equivalent to `a` with no ε-transitions.
pub fn remove_epsilon(a: &Nfa) -> Nfa {
    let mut result = Nfa::with_capacity(a.num_states());

    for state in a.initial_states().iter() {
        result.set_initial(state);
    }

    for state in 0..a.num_states() as u32 {
        let closure = a.epsilon_closure(state);
        if closure.iter().any(|&s| a.final_states().contains(s)) {
            result.set_final(state);
        }
        for &s_prime in &closure {
            if let Some(post) = a.delta().state_post(s_prime) {
                for symbol_post in post.iter() {
                    if symbol_post.symbol() == EPSILON {
                        continue;
                    }
                    for &target in symbol_post.targets() {
                        for closed_target in a.epsilon_closure(target) {
                            result.add_transition(state, symbol_post.symbol(), closed_target);
                        }
                    }
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
    fn epsilon_chain_collapses_to_direct_transition() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        let s2 = a.add_state();
        a.set_initial(s0);
        a.set_final(s2);
        a.add_epsilon_transition(s0, s1);
        a.add_transition(s1, 5, s2);

        let without_eps = remove_epsilon(&a);
        assert!(!without_eps.has_epsilon_transitions());
        assert!(is_in_lang(&without_eps, &Word::from(vec![5])));
    }

    #[test]
    fn final_state_reachable_only_by_epsilon_is_preserved() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        a.set_initial(s0);
        a.set_final(s1);
        a.add_epsilon_transition(s0, s1);

        let without_eps = remove_epsilon(&a);
        assert!(without_eps.final_states().contains(s0));
        assert!(is_in_lang(&without_eps, &Word::epsilon()));
    }
}
