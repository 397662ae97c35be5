//! Minimization and size-reducing transforms on [`Nfa`] that do not change
//! its language.

use crate::determinize::determinize;
use crate::nfa::Nfa;
use crate::ops::reverse;

/// Brzozowski minimization: `reverse . determinize . reverse . determinize`.
/// Grounded on `dennisss-dacha/pkg/automata/src/fsm.rs`'s `minimal`, which
/// implements exactly this four-step pipeline (there: `self.reverse()
/// .compute_dfa().reverse().compute_dfa()`), and on
/// `original_source/include/mata/nfa-algorithms.hh`'s
/// `minimize_brzozowski`.
///
/// The result is minimal *and* deterministic: Brzozowski's algorithm only
/// guarantees minimality for the final determinization step, which is why
/// this function (unlike [`crate::ops::reverse::reverse`]) always ends on a
/// `determinize` call.
pub fn minimize_brzozowski(a: &Nfa) -> Nfa {
    let step1 = determinize(&reverse(a));
    determinize(&reverse(&step1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{is_in_lang, Word};

    #[test]
    fn brzozowski_preserves_language() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        let s2 = a.add_state();
        a.set_initial(s0);
        a.set_final(s2);
        a.add_epsilon_transition(s0, s1);
        a.add_transition(s1, 1, s2);
        a.add_transition(s0, 1, s2);

        let min = minimize_brzozowski(&a);
        assert!(is_in_lang(&min, &Word::from(vec![1])));
        assert!(!is_in_lang(&min, &Word::from(vec![1, 1])));
        assert!(!min.has_epsilon_transitions());
    }

    #[test]
    fn brzozowski_result_is_deterministic() {
        let mut a = Nfa::new();
        let s0 = a.add_state();
        let s1 = a.add_state();
        let s2 = a.add_state();
        a.set_initial(s0);
        a.set_final(s1);
        a.set_final(s2);
        a.add_transition(s0, 5, s1);
        a.add_transition(s0, 5, s2);

        let min = minimize_brzozowski(&a);
        assert_eq!(min.initial_states().len(), 1);
        for (_, post) in min.delta().iter() {
            for symbol_post in post.iter() {
                assert_eq!(symbol_post.targets().len(), 1);
            }
        }
    }
}
