//! Union via disjoint copy: the two automata's state spaces never overlap,
//! so the result simply carries both sets of initial and accepting states.
//! Grounded on `dennisss-dacha/pkg/automata/src/fsm.rs`'s `join`, which
//! offsets the second machine's state ids by the first machine's state
//! count rather than building a fresh combinator start state.

use crate::nfa::Nfa;
use crate::word::State;

/// The union of `a` and `b`: accepts exactly the words either accepts.
pub fn union(a: &Nfa, b: &Nfa) -> Nfa {
    let mut result = a.clone();
    let offset = result.num_states() as State;
    for _ in 0..b.num_states() {
        result.add_state();
    }
    for state in b.initial_states().iter() {
        result.set_initial(state + offset);
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
    result
}
