//! Intersection via product construction, using
//! [`crate::sync_iter::SynchronizedUniversalIterator`] to find the symbols
//! two product states' posts have in common. Grounded on
//! `original_source/include/mata/nfa-algorithms.hh`'s `intersection_eps`
//! (which keeps `preserve_epsilon` transitions stepping on one side while
//! the other stays put — the same two-case transition rule used below).

use crate::nfa::Nfa;
use crate::sync_iter::SynchronizedUniversalIterator;
use crate::word::{State, EPSILON};
use indexmap::IndexMap;

/// The intersection of `a` and `b`: accepts exactly the words both accept.
pub fn intersection(a: &Nfa, b: &Nfa) -> Nfa {
    let mut result = Nfa::new();
    let mut product_state: IndexMap<(State, State), State> = IndexMap::new();
    let mut worklist: Vec<(State, State)> = Vec::new();

    let mut get_or_create = |pair: (State, State), result: &mut Nfa, worklist: &mut Vec<(State, State)>| -> State {
        *product_state.entry(pair).or_insert_with(|| {
            let state = result.add_state();
            worklist.push(pair);
            state
        })
    };

    for p in a.initial_states().iter() {
        for q in b.initial_states().iter() {
            let state = get_or_create((p, q), &mut result, &mut worklist);
            result.set_initial(state);
        }
    }

    while let Some((p, q)) = worklist.pop() {
        let source = *product_state.get(&(p, q)).unwrap();
        if a.final_states().contains(p) && b.final_states().contains(q) {
            result.set_final(source);
        }

        let posts = vec![a.delta().state_post(p).unwrap(), b.delta().state_post(q).unwrap()];
        for (symbol, hits) in SynchronizedUniversalIterator::new(posts) {
            if symbol == EPSILON {
                continue;
            }
            for &p_next in hits[0].targets() {
                for &q_next in hits[1].targets() {
                    let target = get_or_create((p_next, q_next), &mut result, &mut worklist);
                    result.add_transition(source, symbol, target);
                }
            }
        }

        if let Some(a_eps) = a.delta().post(p, EPSILON) {
            for &p_next in a_eps.targets() {
                let target = get_or_create((p_next, q), &mut result, &mut worklist);
                result.add_epsilon_transition(source, target);
            }
        }
        if let Some(b_eps) = b.delta().post(q, EPSILON) {
            for &q_next in b_eps.targets() {
                let target = get_or_create((p, q_next), &mut result, &mut worklist);
                result.add_epsilon_transition(source, target);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{is_in_lang, Word};

    fn chain(symbols: &[u32]) -> Nfa {
        let mut nfa = Nfa::new();
        let mut prev = nfa.add_state();
        nfa.set_initial(prev);
        for &symbol in symbols {
            let next = nfa.add_state();
            nfa.add_transition(prev, symbol, next);
            prev = next;
        }
        nfa.set_final(prev);
        nfa
    }

    #[test]
    fn intersection_accepts_common_word_only() {
        let a = chain(&[1, 2]);
        let b = chain(&[1, 2]);
        let both = intersection(&a, &b);
        assert!(is_in_lang(&both, &Word::from(vec![1, 2])));
    }

    #[test]
    fn intersection_rejects_when_languages_disjoint() {
        let a = chain(&[1, 2]);
        let b = chain(&[3, 4]);
        let both = intersection(&a, &b);
        assert!(!is_in_lang(&both, &Word::from(vec![1, 2])));
        assert!(!is_in_lang(&both, &Word::from(vec![3, 4])));
    }

    #[test]
    fn intersection_through_epsilon_on_one_side() {
        let mut a = Nfa::new();
        let a0 = a.add_state();
        let a1 = a.add_state();
        let a2 = a.add_state();
        a.set_initial(a0);
        a.set_final(a2);
        a.add_epsilon_transition(a0, a1);
        a.add_transition(a1, 9, a2);

        let b = chain(&[9]);
        let both = intersection(&a, &b);
        assert!(is_in_lang(&both, &Word::from(vec![9])));
    }
}
