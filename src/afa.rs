//! Alternating finite automata: states whose transitions carry propositional
//! formulas over (possibly negated) successor states, combined with symbol
//! operands the same way an NFA's disjunction of symbol/state pairs is.
//!
//! This crate only builds `Afa` values from a parsed [`crate::ir`] and feeds
//! them to [`crate::mintermize`]; deciding language properties of an `Afa`
//! directly is out of scope (see `SPEC_FULL.md` §4.13).

use crate::error::{MataError, Result};
use crate::ir::{AutomatonKind, FormulaGraph, IntermediateAut};
use crate::word::State;
use std::collections::HashMap;

/// An alternating finite automaton.
///
/// Unlike [`crate::Nfa`], a state's transition is not decomposed into
/// per-symbol target sets: it is kept as the raw [`FormulaGraph`] the
/// automaton was parsed with, since that formula may combine several states
/// with `&`/`|`/`!` in ways a `Delta`-shaped post list cannot represent
/// without first mintermizing the symbolic part away.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Afa {
    num_states: usize,
    name_to_state: HashMap<String, State>,
    initial: Vec<State>,
    final_states: Vec<State>,
    /// One transition formula per source state that has one.
    transitions: Vec<(State, FormulaGraph)>,
}

impl Afa {
    /// An automaton with no states.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of states.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// The initial states.
    pub fn initial_states(&self) -> &[State] {
        &self.initial
    }

    /// The accepting states.
    pub fn final_states(&self) -> &[State] {
        &self.final_states
    }

    /// The transition formulas, one per source state that has outgoing
    /// transitions, in the order they were added.
    pub fn transitions(&self) -> &[(State, FormulaGraph)] {
        &self.transitions
    }

    fn state_for(&mut self, name: &str) -> State {
        if let Some(&state) = self.name_to_state.get(name) {
            return state;
        }
        let state = self.num_states as State;
        self.num_states += 1;
        self.name_to_state.insert(name.to_owned(), state);
        state
    }

    /// Builds an [`Afa`] from a parsed [`IntermediateAut`], resolving state
    /// names but leaving symbol operands inside each transition formula as
    /// names (mintermization resolves those against an alphabet).
    pub fn try_from_ir(ir: &IntermediateAut) -> Result<Afa> {
        if ir.kind != AutomatonKind::Afa {
            return Err(MataError::MalformedInput {
                reason: format!("expected an AFA intermediate automaton, got {:?}", ir.kind),
            });
        }
        let mut afa = Afa::new();
        for name in &ir.initial_states {
            let state = afa.state_for(name);
            afa.initial.push(state);
        }
        for name in &ir.final_states {
            let state = afa.state_for(name);
            afa.final_states.push(state);
        }
        for (source_name, graph) in &ir.transitions {
            let source = afa.state_for(source_name);
            for name in graph.collect_node_names() {
                if graph_is_state_operand(graph, &name) {
                    afa.state_for(&name);
                }
            }
            afa.transitions.push((source, graph.clone()));
        }
        Ok(afa)
    }
}

fn graph_is_state_operand(graph: &FormulaGraph, name: &str) -> bool {
    if graph.node.name() == name && graph.node.is_state() {
        return true;
    }
    graph.children.iter().any(|child| graph_is_state_operand(child, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::FormulaNode;

    #[test]
    fn build_afa_with_negated_state() {
        let graph = FormulaGraph::branch(FormulaNode::and(), vec![
            FormulaGraph::leaf(FormulaNode::symbol("a")),
            FormulaGraph::branch(FormulaNode::neg(), vec![FormulaGraph::leaf(FormulaNode::state("q1"))]),
        ]);
        let mut ir = IntermediateAut::new(AutomatonKind::Afa);
        ir.initial_states.push("q0".to_owned());
        ir.final_states.push("q1".to_owned());
        ir.transitions.push(("q0".to_owned(), graph));

        let afa = Afa::try_from_ir(&ir).unwrap();
        assert_eq!(afa.initial_states(), &[0]);
        assert_eq!(afa.final_states(), &[1]);
        assert_eq!(afa.transitions().len(), 1);
    }

    #[test]
    fn rejects_nfa_kind() {
        let ir = IntermediateAut::new(AutomatonKind::Nfa);
        assert!(Afa::try_from_ir(&ir).is_err());
    }
}
