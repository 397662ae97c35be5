//! Reversal: swap initial and accepting states, flip every transition
//! (including ε-transitions). Grounded on
//! `dennisss-dacha/pkg/automata/src/fsm.rs`'s `reverse`, and used directly by
//! `crate::minimize::brzozowski`.
//!
//! Per `SPEC_FULL.md` §9, this crate implements exactly one reverse
//! algorithm (the direct rebuild below); no alternative polymorphic
//! implementation is provided.

use crate::nfa::Nfa;

/// The reversal of `a`: accepts the reverse of every word `a` accepts.
pub fn reverse(a: &Nfa) -> Nfa {
    let mut result = Nfa::with_capacity(a.num_states());
    for state in a.final_states().iter() {
        result.set_initial(state);
    }
    for state in a.initial_states().iter() {
        result.set_final(state);
    }
    for (source, post) in a.delta().iter() {
        for symbol_post in post.iter() {
            for &target in symbol_post.targets() {
                result.add_transition(target, symbol_post.symbol(), source);
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
    fn reverse_flips_transition_direction() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        let s2 = a.add_state();
        a.set_initial(s0);
        a.set_final(s2);
        a.add_transition(s0, 1, s1);
        a.add_transition(s1, 2, s2);

        let r = reverse(&a);
        assert!(r.initial_states().contains(s2));
        assert!(r.final_states().contains(s0));
        assert!(is_in_lang(&r, &Word::from(vec![2, 1])));
        assert!(!is_in_lang(&r, &Word::from(vec![1, 2])));
    }

    #[test]
    fn reverse_is_involution_on_language() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        a.set_initial(s0);
        a.set_final(s1);
        a.add_transition(s0, 7, s1);

        let rr = reverse(&reverse(&a));
        assert!(is_in_lang(&rr, &Word::from(vec![7])));
    }
}
