//! Decision procedures: emptiness, universality, inclusion, and equivalence,
//! each with a naive fallback and an antichain-based algorithm. Grounded on
//! `original_source/include/mata/nfa-algorithms.hh`'s
//! `is_included_naive`/`is_included_antichains`/`is_universal_naive`/
//! `is_universal_antichains`.

use crate::complement::{complement, ComplementParams};
use crate::ops::intersection;
use crate::word::{State, Symbol, Word, EPSILON};
use crate::Nfa;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Which algorithm [`is_included`] or [`is_universal`] should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InclusionAlgorithm {
    /// Complement `bigger`, intersect with `smaller`, test emptiness.
    Naive,
    /// The antichain worklist algorithm, which never builds `bigger`'s
    /// complement explicitly.
    Antichains,
}

/// See [`InclusionAlgorithm`]; universality is checked as inclusion in the
/// automaton that accepts every word over the given alphabet.
pub type UniversalityAlgorithm = InclusionAlgorithm;

/// A single state automaton that accepts every word over `symbols`.
fn universal_automaton(symbols: &[Symbol]) -> Nfa {
    let mut nfa = Nfa::new();
    let s0 = nfa.add_state();
    nfa.set_initial(s0);
    nfa.set_final(s0);
    for &symbol in symbols {
        nfa.add_transition(s0, symbol, s0);
    }
    nfa
}

fn step(a: &Nfa, frontier: &BTreeSet<State>, symbol: Symbol) -> Vec<State> {
    frontier
        .iter()
        .filter_map(|&s| a.delta().post(s, symbol))
        .flat_map(|post| post.targets().iter().copied())
        .collect()
}

/// The lexicographically minimal word `a` accepts, or `None` if `a` is
/// empty. BFS over the subsets of states reachable so far, exploring
/// symbols in ascending order, guarantees the first accepting word found is
/// minimal both in length and, among words of that length, lexicographically.
pub fn shortest_word(a: &Nfa) -> Option<Word> {
    let symbols = a.delta().used_symbols();
    let start = a.epsilon_closure_set(a.initial_states().iter().collect());
    if start.iter().any(|&s| a.final_states().contains(s)) {
        return Some(Word::epsilon());
    }
    let mut visited: std::collections::HashSet<BTreeSet<State>> = [start.clone()].into_iter().collect();
    let mut queue: VecDeque<(BTreeSet<State>, Word)> = [(start, Word::epsilon())].into_iter().collect();
    while let Some((frontier, word)) = queue.pop_front() {
        for &symbol in &symbols {
            let next = a.epsilon_closure_set(step(a, &frontier, symbol));
            if next.is_empty() || visited.contains(&next) {
                continue;
            }
            let mut next_word = word.clone();
            next_word.push(symbol);
            if next.iter().any(|&s| a.final_states().contains(s)) {
                return Some(next_word);
            }
            visited.insert(next.clone());
            queue.push_back((next, next_word));
        }
    }
    None
}

/// Whether `a` accepts no word at all.
pub fn is_empty(a: &Nfa) -> bool {
    shortest_word(a).is_none()
}

/// `smaller ⊆ bigger`? via complementation: `L(smaller) ⊆ L(bigger)` iff
/// `L(smaller) ∩ complement(bigger)` is empty. On failure, the witness is a
/// word accepted by `smaller` but not `bigger`.
pub fn is_included_naive(smaller: &Nfa, bigger: &Nfa, symbols: &[Symbol]) -> (bool, Option<Word>) {
    let not_bigger = complement(bigger, symbols, ComplementParams::default());
    let counterexamples = intersection(smaller, &not_bigger);
    match shortest_word(&counterexamples) {
        None => (true, None),
        Some(word) => (false, Some(word)),
    }
}

/// `a` accepts every word over `symbols`? Equivalently, `complement(a)` is
/// empty: `Σ* ⊆ L(a)` iff no word survives in `L(a)`'s complement.
pub fn is_universal_naive(a: &Nfa, symbols: &[Symbol]) -> (bool, Option<Word>) {
    let not_a = complement(a, symbols, ComplementParams::default());
    match shortest_word(&not_a) {
        None => (true, None),
        Some(word) => (false, Some(word)),
    }
}

type Pair = (State, BTreeSet<State>);

fn dominated(candidate: &BTreeSet<State>, seen: &[BTreeSet<State>]) -> bool {
    seen.iter().any(|s| s.is_subset(candidate))
}

/// The antichain worklist algorithm for inclusion: processes pairs `(q, S)`
/// where `q` is a state of `smaller` and `S` is the set of `bigger` states
/// reachable by the same word, pruning any pair whose `S` is dominated by an
/// already-seen, subset `S'` for the same `q` (a smaller reachable set is
/// always at least as constraining, so anything `S` could witness, `S'`
/// already would too). A pair is a counterexample exactly when `q` is
/// accepting in `smaller` and `S` contains no accepting state of `bigger`.
pub fn is_included_antichains(smaller: &Nfa, bigger: &Nfa, symbols: &[Symbol]) -> (bool, Option<Word>) {
    let bigger_start = bigger.epsilon_closure_set(bigger.initial_states().iter().collect());

    let mut seen: HashMap<State, Vec<BTreeSet<State>>> = HashMap::new();
    let mut came_from: HashMap<Pair, (Pair, Symbol)> = HashMap::new();
    let mut queue: VecDeque<Pair> = VecDeque::new();

    for q0 in smaller.initial_states().iter() {
        let q0_closure = smaller.epsilon_closure(q0);
        for &q in &q0_closure {
            let pair = (q, bigger_start.clone());
            let entry = seen.entry(q).or_default();
            if !dominated(&bigger_start, entry.as_slice()) {
                entry.push(bigger_start.clone());
                queue.push_back(pair);
            }
        }
    }

    while let Some((q, s)) = queue.pop_front() {
        if smaller.final_states().contains(q) && !s.iter().any(|&t| bigger.final_states().contains(t)) {
            let mut word = Word::epsilon();
            let mut current = (q, s);
            while let Some((parent, symbol)) = came_from.get(&current) {
                word.0.insert(0, *symbol);
                current = parent.clone();
            }
            return (false, Some(word));
        }

        let symbols_here: BTreeSet<Symbol> = smaller
            .delta()
            .state_post(q)
            .map(|post| post.symbols().filter(|&sym| sym != EPSILON).collect())
            .unwrap_or_default();

        for &symbol in &symbols_here {
            let Some(post) = smaller.delta().post(q, symbol) else { continue };
            let next_s = bigger.epsilon_closure_set(step(bigger, &s, symbol));
            for &q_next_raw in post.targets() {
                for q_next in smaller.epsilon_closure(q_next_raw) {
                    let entry = seen.entry(q_next).or_default();
                    if !dominated(&next_s, entry.as_slice()) {
                        entry.retain(|existing| !next_s.is_subset(existing) || existing == &next_s);
                        entry.push(next_s.clone());
                        let next_pair = (q_next, next_s.clone());
                        came_from.entry(next_pair.clone()).or_insert(((q, s.clone()), symbol));
                        queue.push_back(next_pair);
                    }
                }
            }
        }
    }

    (true, None)
}

/// `a` accepts every word over `symbols`?, via the antichain inclusion
/// algorithm: `Σ* ⊆ L(a)`, i.e. the universal automaton over `symbols` is
/// included in `a`, not the other way around.
pub fn is_universal_antichains(a: &Nfa, symbols: &[Symbol]) -> (bool, Option<Word>) {
    is_included_antichains(&universal_automaton(symbols), a, symbols)
}

/// Dispatches to the requested inclusion algorithm.
pub fn is_included(smaller: &Nfa, bigger: &Nfa, symbols: &[Symbol], algorithm: InclusionAlgorithm) -> (bool, Option<Word>) {
    match algorithm {
        InclusionAlgorithm::Naive => is_included_naive(smaller, bigger, symbols),
        InclusionAlgorithm::Antichains => is_included_antichains(smaller, bigger, symbols),
    }
}

/// Dispatches to the requested universality algorithm.
pub fn is_universal(a: &Nfa, symbols: &[Symbol], algorithm: UniversalityAlgorithm) -> (bool, Option<Word>) {
    match algorithm {
        InclusionAlgorithm::Naive => is_universal_naive(a, symbols),
        InclusionAlgorithm::Antichains => is_universal_antichains(a, symbols),
    }
}

/// `a` and `b` accept the same language, checked via inclusion in both
/// directions.
pub fn are_equivalent(a: &Nfa, b: &Nfa, symbols: &[Symbol], algorithm: InclusionAlgorithm) -> bool {
    is_included(a, b, symbols, algorithm).0 && is_included(b, a, symbols, algorithm).0
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn empty_automaton_is_empty() {
        let nfa = Nfa::new();
        assert!(is_empty(&nfa));
    }

    #[test]
    fn nonempty_automaton_has_witness() {
        let a = chain(&[1, 2]);
        assert!(!is_empty(&a));
        assert_eq!(shortest_word(&a), Some(Word::from(vec![1, 2])));
    }

    #[test]
    fn naive_and_antichain_inclusion_agree_on_positive_case() {
        let a = chain(&[1]);
        let b = crate::ops::union(&chain(&[1]), &chain(&[2]));
        let symbols = [1, 2];
        assert_eq!(is_included_naive(&a, &b, &symbols).0, true);
        assert_eq!(is_included_antichains(&a, &b, &symbols).0, true);
    }

    #[test]
    fn naive_and_antichain_inclusion_agree_on_negative_case() {
        let a = chain(&[3]);
        let b = chain(&[1]);
        let symbols = [1, 3];
        let (naive_ok, naive_witness) = is_included_naive(&a, &b, &symbols);
        let (anti_ok, anti_witness) = is_included_antichains(&a, &b, &symbols);
        assert!(!naive_ok);
        assert!(!anti_ok);
        assert_eq!(naive_witness, Some(Word::from(vec![3])));
        assert_eq!(anti_witness, Some(Word::from(vec![3])));
    }

    #[test]
    fn universal_automaton_is_universal() {
        let universal = universal_automaton(&[1, 2]);
        assert!(is_universal_naive(&universal, &[1, 2]).0);
        assert!(is_universal_antichains(&universal, &[1, 2]).0);
    }

    #[test]
    fn non_universal_automaton_has_minimal_witness() {
        let a = chain(&[1]);
        let (ok, witness) = is_universal_antichains(&a, &[1, 2]);
        assert!(!ok);
        assert_eq!(witness, Some(Word::epsilon()));
    }

    #[test]
    fn equivalence_holds_for_equal_languages() {
        let a = chain(&[1, 2]);
        let b = chain(&[1, 2]);
        assert!(are_equivalent(&a, &b, &[1, 2], InclusionAlgorithm::Antichains));
    }
}
