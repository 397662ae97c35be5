//! Concatenation: disjoint copy of both automata, with an ε-bridge from
//! every final state of `a` to every initial state of `b`. Grounded on
//! `dennisss-dacha/pkg/automata/src/fsm.rs`'s `then`, and on
//! `original_source/include/mata/nfa-algorithms.hh`'s `concatenate_eps`
//! (which offers the same ε-bridge shape as an alternative to collapsing the
//! bridge states together).

use crate::nfa::Nfa;
use crate::word::State;

/// The concatenation of `a` then `b`: accepts `uv` for every `u` accepted by
/// `a` and `v` accepted by `b`.
pub fn concat(a: &Nfa, b: &Nfa) -> Nfa {
    let mut result = a.clone();
    for state in a.final_states().iter() {
        result.unset_final(state);
    }
    let offset = result.num_states() as State;
    for _ in 0..b.num_states() {
        result.add_state();
    }
    for state in b.final_states().iter() {
        result.set_final(state + offset);
    }
    for (source, post) in b.delta().iter() {
        for symbol_post in post.iter() {
            for &target in symbol_post.targets() {
                result.add_transition(source + offset, symbol_post.symbol(), target + offset);
            }
        }
    }
    for a_final in a.final_states().iter() {
        for b_initial in b.initial_states().iter() {
            result.add_epsilon_transition(a_final, b_initial + offset);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{is_in_lang, Word};

    fn single_symbol_nfa(symbol: u32) -> Nfa {
        let mut nfa = Nfa::new();
        let s0 = nfa.add_state();
        let s1 = nfa.add_state();
        nfa.set_initial(s0);
        nfa.set_final(s1);
        nfa.add_transition(s0, symbol, s1);
        nfa
    }

    #[test]
    fn concat_accepts_sequential_words() {
        let a = single_symbol_nfa(1);
        let b = single_symbol_nfa(2);
        let ab = concat(&a, &b);
        assert!(is_in_lang(&ab, &Word::from(vec![1, 2])));
        assert!(!is_in_lang(&ab, &Word::from(vec![1])));
        assert!(!is_in_lang(&ab, &Word::from(vec![2, 1])));
    }
}
