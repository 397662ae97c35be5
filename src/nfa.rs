//! The core automaton value type: states, initial/final sets, and a
//! transition relation with ε-moves.

use crate::delta::Delta;
use crate::error::{MataError, Result};
use crate::sparse_set::SparseSet;
use crate::word::{State, Symbol, EPSILON};
use std::collections::BTreeSet;

/// A nondeterministic finite automaton with ε-transitions.
///
/// States are dense `u32`s allocated by [`Nfa::add_state`]; the automaton
/// itself does not track an alphabet (that is a concern of
/// [`crate::alphabet::Alphabet`], owned by whoever is building the
/// automaton from symbolic names) beyond the bare `Symbol` values used as
/// transition labels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Nfa {
    num_states: usize,
    initial: SparseSet,
    final_: SparseSet,
    delta: Delta,
}

impl Nfa {
    /// An automaton with no states.
    pub fn new() -> Self {
        Self::default()
    }

    /// An automaton pre-sized to hold `num_states` states, none of them
    /// initial or final and none connected.
    pub fn with_capacity(num_states: usize) -> Self {
        let mut nfa = Self::new();
        for _ in 0..num_states {
            nfa.add_state();
        }
        nfa
    }

    /// Allocates a fresh state and returns its identifier.
    pub fn add_state(&mut self) -> State {
        let state = self.num_states as State;
        self.num_states += 1;
        self.initial.reserve(self.num_states);
        self.final_.reserve(self.num_states);
        self.delta.ensure_state(state);
        state
    }

    /// The number of states in the automaton.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Marks `state` as an initial state.
    pub fn set_initial(&mut self, state: State) {
        self.initial.insert(state);
    }

    /// Marks `state` as an accepting state.
    pub fn set_final(&mut self, state: State) {
        self.final_.insert(state);
    }

    /// Unmarks `state` as initial.
    pub fn unset_initial(&mut self, state: State) {
        self.initial.remove(state);
    }

    /// Unmarks `state` as accepting.
    pub fn unset_final(&mut self, state: State) {
        self.final_.remove(state);
    }

    /// The initial states.
    pub fn initial_states(&self) -> &SparseSet {
        &self.initial
    }

    /// The accepting states.
    pub fn final_states(&self) -> &SparseSet {
        &self.final_
    }

    /// The transition relation.
    pub fn delta(&self) -> &Delta {
        &self.delta
    }

    /// A mutable handle to the transition relation, for operations that
    /// build up an automaton incrementally (e.g. [`crate::ops`]).
    pub fn delta_mut(&mut self) -> &mut Delta {
        &mut self.delta
    }

    /// Adds a transition from `source` to `target` on `symbol`. Grows the
    /// automaton with fresh states if `source` or `target` is not yet
    /// allocated is a programmer error in this crate: callers must
    /// `add_state` first, since unlike `Delta` an `Nfa` also has to keep its
    /// sparse sets' capacities and `num_states` in sync.
    pub fn add_transition(&mut self, source: State, symbol: Symbol, target: State) {
        debug_assert!((source as usize) < self.num_states, "source state not allocated");
        debug_assert!((target as usize) < self.num_states, "target state not allocated");
        self.delta.add_transition(source, symbol, target);
    }

    /// Adds an ε-transition from `source` to `target`.
    pub fn add_epsilon_transition(&mut self, source: State, target: State) {
        self.add_transition(source, EPSILON, target);
    }

    /// The set of states reachable from `states` using only ε-transitions,
    /// including `states` themselves.
    pub fn epsilon_closure_set(&self, states: Vec<State>) -> BTreeSet<State> {
        let mut closure: BTreeSet<State> = states.into_iter().collect();
        let mut worklist: Vec<State> = closure.iter().copied().collect();
        while let Some(state) = worklist.pop() {
            if let Some(post) = self.delta.post(state, EPSILON) {
                for &target in post.targets() {
                    if closure.insert(target) {
                        worklist.push(target);
                    }
                }
            }
        }
        closure
    }

    /// The ε-closure of a single state.
    pub fn epsilon_closure(&self, state: State) -> BTreeSet<State> {
        self.epsilon_closure_set(vec![state])
    }

    /// Whether the automaton has at least one ε-transition.
    pub fn has_epsilon_transitions(&self) -> bool {
        self.delta.iter().any(|(_, post)| post.get(EPSILON).is_some())
    }

    /// Whether the automaton has no reachable accepting state. Equivalent
    /// to, but cheaper than, `crate::decide::is_empty(self)` when called on
    /// a freshly built automaton; kept here as a structural convenience.
    pub fn is_trivially_empty(&self) -> bool {
        self.initial.is_empty() || self.final_.is_empty()
    }

    /// Builds an [`Nfa`] from a parsed [`crate::ir::IntermediateAut`],
    /// translating symbolic state and symbol names via `alphabet`.
    ///
    /// Errors if `ir` is not tagged as an NFA, or if any transition formula
    /// is not a disjunction of plain symbol/state literals (AFA-shaped
    /// formulas belong to [`crate::afa::Afa::try_from_ir`] instead).
    pub fn try_from_ir(
        ir: &crate::ir::IntermediateAut,
        alphabet: &mut dyn crate::alphabet::Alphabet,
    ) -> Result<Nfa> {
        if ir.kind != crate::ir::AutomatonKind::Nfa {
            return Err(MataError::MalformedInput {
                reason: format!("expected an NFA intermediate automaton, got {:?}", ir.kind),
            });
        }
        let mut nfa = Nfa::new();
        let mut name_to_state = std::collections::HashMap::new();
        let mut state_for = |name: &str, name_to_state: &mut std::collections::HashMap<String, State>, nfa: &mut Nfa| {
            *name_to_state.entry(name.to_owned()).or_insert_with(|| nfa.add_state())
        };
        for name in &ir.initial_states {
            let state = state_for(name, &mut name_to_state, &mut nfa);
            nfa.set_initial(state);
        }
        for name in &ir.final_states {
            let state = state_for(name, &mut name_to_state, &mut nfa);
            nfa.set_final(state);
        }
        for (source_name, graph) in &ir.transitions {
            let source = state_for(source_name, &mut name_to_state, &mut nfa);
            for (symbol_name, target_name) in graph.disjuncts_of_symbol_and_state()? {
                let target = state_for(&target_name, &mut name_to_state, &mut nfa);
                let symbol = alphabet.translate_symbol(&symbol_name);
                nfa.add_transition(source, symbol, target);
            }
        }
        Ok(nfa)
    }
}
