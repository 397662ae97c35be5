//! Segmentation and noodlification: splits an automaton built by chaining
//! several sub-automata together with ε-transitions (a "segment automaton",
//! the shape [`crate::ops::concat`] produces) back into its segments, then
//! enumerates every way of picking one ε-crossing per adjacent pair of
//! segments, each such choice ("noodle") being the sequence of per-segment
//! sub-automata it induces.
//!
//! Grounded on `original_source/include/mata/noodlify.hh`'s
//! `noodlify`/`noodlify_for_equation`; used by string-constraint solvers that
//! need to reason about each piece of a concatenation independently.

use crate::nfa::Nfa;
use crate::ops::trim;
use crate::simulation::reduce;
use crate::word::{State, EPSILON};
use std::collections::{BTreeMap, VecDeque};

/// One sub-automaton making up a noodle: the states of a single segment,
/// re-indexed from `0`, with initial/final states set to this noodle's
/// entry/exit points into the segment.
pub type Noodle = Vec<Nfa>;

/// Every noodle of a segment automaton.
pub type NoodleSequence = Vec<Noodle>;

/// How (if at all) each segment should be reduced before noodles are built
/// from it. Grounded on `noodlify_for_equation`'s `{"reduce", ...}` param,
/// which accepts `"false"`, `"forward"`, `"backward"`, or `"bidirectional"`;
/// this crate only implements forward simulation reduction (see
/// `SPEC_FULL.md` §9), so `Backward`/`Bidirectional` reduce the same way
/// `Forward` does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReduceAlgorithm {
    #[default]
    None,
    Forward,
    Backward,
    Bidirectional,
}

fn depths(aut: &Nfa) -> BTreeMap<State, u32> {
    let mut depth: BTreeMap<State, u32> = BTreeMap::new();
    let mut queue: VecDeque<State> = VecDeque::new();
    for s in aut.initial_states().iter() {
        depth.insert(s, 0);
        queue.push_back(s);
    }
    while let Some(state) = queue.pop_front() {
        let d = depth[&state];
        let Some(post) = aut.delta().state_post(state) else { continue };
        for symbol_post in post.iter() {
            let next_depth = if symbol_post.symbol() == EPSILON { d + 1 } else { d };
            for &target in symbol_post.targets() {
                if !depth.contains_key(&target) || depth[&target] > next_depth {
                    depth.insert(target, next_depth);
                    queue.push_back(target);
                }
            }
        }
    }
    depth
}

/// Extracts the sub-automaton of `aut` induced by `states` (non-ε
/// transitions only), with `entries` as its initial states and `exits` as
/// its final states.
fn induced_segment(aut: &Nfa, states: &[State], entries: &[State], exits: &[State]) -> Nfa {
    let mut reindex: BTreeMap<State, State> = BTreeMap::new();
    let mut segment = Nfa::new();
    for &state in states {
        reindex.insert(state, segment.add_state());
    }
    for &state in states {
        let Some(post) = aut.delta().state_post(state) else { continue };
        for symbol_post in post.iter() {
            if symbol_post.symbol() == EPSILON {
                continue;
            }
            for &target in symbol_post.targets() {
                if let Some(&new_target) = reindex.get(&target) {
                    segment.add_transition(reindex[&state], symbol_post.symbol(), new_target);
                }
            }
        }
    }
    for &entry in entries {
        segment.set_initial(reindex[&entry]);
    }
    for &exit in exits {
        segment.set_final(reindex[&exit]);
    }
    segment
}

/// Splits `aut` into noodles: every combination of one ε-crossing per
/// adjacent pair of depth segments, each combination yielding the ordered
/// list of segment sub-automata it passes through.
///
/// When `include_empty` is `false`, noodles whose first segment has no
/// reachable accepting exit (i.e. a segment that could only ever contribute
/// the empty word) are dropped, matching `noodlify`'s `include_empty` flag.
pub fn noodlify(aut: &Nfa, include_empty: bool, reduce_algorithm: ReduceAlgorithm) -> NoodleSequence {
    let depth = depths(aut);
    let Some(&max_depth) = depth.values().max() else { return Vec::new() };

    let mut states_at_depth: BTreeMap<u32, Vec<State>> = BTreeMap::new();
    for (&state, &d) in &depth {
        states_at_depth.entry(d).or_default().push(state);
    }

    // Crossing edges between depth i and depth i+1: (source in i, target in i+1).
    let mut crossings: Vec<Vec<(State, State)>> = Vec::new();
    for d in 0..max_depth {
        let mut edges = Vec::new();
        for &source in states_at_depth.get(&d).into_iter().flatten() {
            if let Some(post) = aut.delta().post(source, EPSILON) {
                for &target in post.targets() {
                    if depth.get(&target) == Some(&(d + 1)) {
                        edges.push((source, target));
                    }
                }
            }
        }
        crossings.push(edges);
    }

    if crossings.iter().any(|edges| edges.is_empty()) {
        // A depth boundary with no crossing edge means the automaton is not
        // a connected chain of segments; there is nothing to noodlify.
        return Vec::new();
    }

    let global_initial: Vec<State> = aut.initial_states().iter().collect();
    let global_final: Vec<State> = aut.final_states().iter().collect();

    let mut noodles = Vec::new();
    let mut combo: Vec<usize> = vec![0; crossings.len()];
    loop {
        let mut noodle = Vec::new();
        let mut ok = true;
        for depth_ix in 0..=max_depth {
            let states = states_at_depth.get(&depth_ix).cloned().unwrap_or_default();
            let entries: Vec<State> = if depth_ix == 0 {
                global_initial.clone()
            } else {
                vec![crossings[(depth_ix - 1) as usize][combo[(depth_ix - 1) as usize]].1]
            };
            let exits: Vec<State> = if depth_ix == max_depth {
                global_final.clone()
            } else {
                vec![crossings[depth_ix as usize][combo[depth_ix as usize]].0]
            };
            if entries.is_empty() {
                ok = false;
                break;
            }
            let mut segment = trim(&induced_segment(aut, &states, &entries, &exits));
            if reduce_algorithm != ReduceAlgorithm::None {
                segment = reduce(&segment);
            }
            if !include_empty && segment.is_trivially_empty() {
                ok = false;
                break;
            }
            noodle.push(segment);
        }
        if ok {
            noodles.push(noodle);
        }

        // advance combo like an odometer
        let mut i = crossings.len();
        loop {
            if i == 0 {
                return noodles;
            }
            i -= 1;
            combo[i] += 1;
            if combo[i] < crossings[i].len() {
                break;
            }
            combo[i] = 0;
            if i == 0 {
                return noodles;
            }
        }
    }
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
    fn single_epsilon_chain_yields_one_noodle() {
        let chained = crate::ops::concat(&single_symbol_nfa(1), &single_symbol_nfa(2));
        let noodles = noodlify(&chained, true, ReduceAlgorithm::None);
        assert_eq!(noodles.len(), 1);
        assert_eq!(noodles[0].len(), 2);
        assert!(is_in_lang(&noodles[0][0], &Word::from(vec![1])));
        assert!(is_in_lang(&noodles[0][1], &Word::from(vec![2])));
    }

    #[test]
    fn automaton_with_no_segment_boundary_is_its_own_single_noodle() {
        let single = single_symbol_nfa(1);
        let noodles = noodlify(&single, true, ReduceAlgorithm::None);
        assert_eq!(noodles.len(), 1);
        assert_eq!(noodles[0].len(), 1);
        assert!(is_in_lang(&noodles[0][0], &Word::from(vec![1])));
    }

    #[test]
    fn branching_epsilon_boundary_yields_one_noodle_per_crossing() {
        let mut aut = Nfa::new();
        let s0 = aut.add_state();
        let mid_a = aut.add_state();
        let mid_b = aut.add_state();
        let s1 = aut.add_state();
        aut.set_initial(s0);
        aut.set_final(s1);
        aut.add_epsilon_transition(s0, mid_a);
        aut.add_epsilon_transition(s0, mid_b);
        aut.add_transition(mid_a, 1, s1);
        aut.add_transition(mid_b, 2, s1);
        let noodles = noodlify(&aut, true, ReduceAlgorithm::None);
        assert_eq!(noodles.len(), 2);
    }
}
