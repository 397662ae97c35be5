//! Mintermization: turns transitions guarded by Boolean formulas over named
//! symbol atoms (a *symbolic* alphabet, e.g. `a0 & !a1`) into transitions
//! over a small explicit alphabet, by computing the coarsest partition of
//! the atoms' truth-assignment space that respects every guard.
//!
//! Grounded on `original_source/include/mata/mintermization.hh`'s
//! `Mintermization` class: `symbol_to_bddvar` here is `Mintermization::graph_to_bdd`'s
//! variable cache, and `compute_minterms` is a direct port of the
//! incremental minterm-set construction described there. The BDD manager
//! (CUDD in the original) is `biodivine_lib_bdd::BddVariableSet` here (see
//! `SPEC_FULL.md` §9).

use crate::error::{MataError, Result};
use crate::ir::{FormulaGraph, FormulaNode, NodeType};
use crate::word::Symbol;
use biodivine_lib_bdd::{Bdd, BddVariable, BddVariableSet, BddVariableSetBuilder};
use std::collections::HashMap;

/// Translates symbolic transition guards into an explicit alphabet.
///
/// Constructed fresh for each call to [`Mintermization::mintermize`] (see
/// `SPEC_FULL.md` §5): the BDD manager it owns is not shared across calls.
pub struct Mintermization {
    limit: Option<usize>,
}

/// The result of mintermizing a set of symbolic transition guards: the
/// minterms themselves (as BDDs, for introspection) and, for each input
/// guard, which minterms it is satisfied by, i.e. which fresh explicit
/// [`Symbol`]s should replace it.
pub struct MintermizationResult {
    /// One fresh [`Symbol`] per minterm, in the order [`compute_minterms`]
    /// produced them.
    pub minterms: Vec<Bdd>,
    /// `guard_symbols[i]` is the set of fresh symbols that replace the
    /// `i`-th input guard.
    pub guard_symbols: Vec<Vec<Symbol>>,
}

/// The result of mintermizing an AFA's transition formulas. Each formula may
/// combine symbol atoms with several (possibly negated) target states; only
/// the symbol atoms are mintermized, the state part survives literally (see
/// [`Mintermization::mintermize_afa`]).
pub struct AfaMintermizationResult {
    /// One fresh [`Symbol`] per minterm.
    pub minterms: Vec<Bdd>,
    /// `state_symbols[i]` maps each state name occurring in the `i`-th input
    /// formula to the fresh minterm symbols under which that state is
    /// reached, i.e. the minterms for which the formula is satisfied when
    /// that state's leaf is forced `true` and every other state's leaf is
    /// forced `false`.
    pub state_symbols: Vec<HashMap<String, Vec<Symbol>>>,
}

impl Default for Mintermization {
    fn default() -> Self {
        Mintermization { limit: None }
    }
}

impl Mintermization {
    /// A mintermizer with no limit on the number of minterms it will
    /// compute.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mintermizer that errors with [`MataError::MintermExplosion`] rather
    /// than continuing once more than `limit` minterms have been produced.
    pub fn with_limit(limit: usize) -> Self {
        Mintermization { limit: Some(limit) }
    }

    /// Mintermizes `guards`: each is a [`FormulaGraph`] over symbol atoms
    /// combined with `&`/`|`/`!` (no state operands — see
    /// [`Mintermization::mintermize_afa`] for formulas that mix the two).
    pub fn mintermize(&mut self, guards: &[FormulaGraph]) -> Result<MintermizationResult> {
        let atom_names = collect_symbol_atoms(guards);
        let mut builder = BddVariableSetBuilder::new();
        let mut atom_to_var: HashMap<String, BddVariable> = HashMap::new();
        for name in &atom_names {
            atom_to_var.insert(name.clone(), builder.make_variable(name));
        }
        let universe = builder.build();

        let guard_bdds: Vec<Bdd> =
            guards.iter().map(|g| graph_to_bdd(g, &universe, &atom_to_var)).collect::<Result<_>>()?;
        let minterms = compute_minterms(&universe, &guard_bdds, self.limit)?;

        let guard_symbols: Vec<Vec<Symbol>> = guard_bdds
            .iter()
            .map(|guard| {
                minterms
                    .iter()
                    .enumerate()
                    .filter(|(_, minterm)| !minterm.and(guard).is_false())
                    .map(|(ix, _)| ix as Symbol)
                    .collect()
            })
            .collect();

        Ok(MintermizationResult { minterms, guard_symbols })
    }

    /// Mintermizes a batch of AFA transition formulas, each of which may
    /// combine symbol atoms with (possibly negated) target-state operands.
    ///
    /// Grounded on `Mintermization::trans_to_bdd_afa`/`OptionalBdd`: rather
    /// than building one combined BDD over both symbol and state variables,
    /// each state occurring in a formula is evaluated independently by
    /// forcing its own leaf `true` and every other state's leaf `false`,
    /// which yields exactly the guard (a pure symbol formula) under which
    /// that state is reached — the state part is never itself mintermized,
    /// it survives as the key of [`AfaMintermizationResult::state_symbols`].
    pub fn mintermize_afa(&mut self, transitions: &[FormulaGraph]) -> Result<AfaMintermizationResult> {
        let mut owners: Vec<(usize, String)> = Vec::new();
        let mut guards: Vec<FormulaGraph> = Vec::new();
        for (ix, graph) in transitions.iter().enumerate() {
            let mut state_names = Vec::new();
            collect_state_names(graph, &mut state_names);
            state_names.sort();
            state_names.dedup();
            for state_name in state_names {
                guards.push(substitute_states(graph, &state_name));
                owners.push((ix, state_name));
            }
        }

        let result = self.mintermize(&guards)?;

        let mut state_symbols: Vec<HashMap<String, Vec<Symbol>>> = vec![HashMap::new(); transitions.len()];
        for ((ix, state_name), symbols) in owners.into_iter().zip(result.guard_symbols) {
            state_symbols[ix].insert(state_name, symbols);
        }

        Ok(AfaMintermizationResult { minterms: result.minterms, state_symbols })
    }
}

fn collect_symbol_atoms(guards: &[FormulaGraph]) -> Vec<String> {
    let mut names = Vec::new();
    for guard in guards {
        collect_symbol_names(guard, &mut names);
    }
    names.sort();
    names.dedup();
    names
}

fn collect_symbol_names(graph: &FormulaGraph, out: &mut Vec<String>) {
    if graph.node.is_symbol() {
        out.push(graph.node.name().to_owned());
    }
    for child in &graph.children {
        collect_symbol_names(child, out);
    }
}

fn collect_state_names(graph: &FormulaGraph, out: &mut Vec<String>) {
    if graph.node.is_state() {
        out.push(graph.node.name().to_owned());
    }
    for child in &graph.children {
        collect_state_names(child, out);
    }
}

/// Replaces every state-operand leaf of `graph` with the constant `true` if
/// it names `active_state`, or `false` otherwise; symbol operands,
/// connectives, and the `true`/`false` constants are left unchanged. The
/// result is a pure-symbol formula suitable for [`graph_to_bdd`].
fn substitute_states(graph: &FormulaGraph, active_state: &str) -> FormulaGraph {
    if graph.node.is_state() {
        let node = if graph.node.name() == active_state { FormulaNode::tt() } else { FormulaNode::ff() };
        return FormulaGraph::leaf(node);
    }
    if graph.children.is_empty() {
        return graph.clone();
    }
    let children = graph.children.iter().map(|child| substitute_states(child, active_state)).collect();
    FormulaGraph::branch(graph.node.clone(), children)
}

/// Translates a pure-symbol [`FormulaGraph`] (operands are symbol atoms;
/// connectives are `&`, `|`, `!`; or the constants `true`/`false`) into a
/// [`Bdd`] over `universe`. Errors if a non-symbol operand (a state that was
/// not substituted away first) is encountered.
fn graph_to_bdd(graph: &FormulaGraph, universe: &BddVariableSet, atom_to_var: &HashMap<String, BddVariable>) -> Result<Bdd> {
    match graph.node.ty() {
        NodeType::True => Ok(universe.mk_true()),
        NodeType::False => Ok(universe.mk_false()),
        NodeType::Operand if graph.node.is_symbol() => Ok(universe.mk_var(atom_to_var[graph.node.name()])),
        NodeType::Operand => Err(MataError::MalformedInput {
            reason: format!(
                "mintermization received non-symbol operand `{}`; state operands must be substituted away first (see Mintermization::mintermize_afa)",
                graph.node.name()
            ),
        }),
        NodeType::Operator if graph.node.is_neg() => Ok(graph_to_bdd(&graph.children[0], universe, atom_to_var)?.not()),
        NodeType::Operator if graph.node.is_and() => graph
            .children
            .iter()
            .try_fold(universe.mk_true(), |acc, child| Ok(acc.and(&graph_to_bdd(child, universe, atom_to_var)?))),
        NodeType::Operator => graph
            .children
            .iter()
            .try_fold(universe.mk_false(), |acc, child| Ok(acc.or(&graph_to_bdd(child, universe, atom_to_var)?))),
    }
}

/// The coarsest partition of the atoms' assignment space that is compatible
/// with every `Bdd` in `source_bdds`: each minterm is a satisfiable
/// conjunction such that every `source_bdds[i]` is exactly the union of the
/// minterms contained in it.
///
/// Incremental construction, grounded directly on
/// `Mintermization::compute_minterms`: start from the single minterm `true`,
/// and for each new predicate split every existing minterm into its
/// intersection with the predicate and with its negation, dropping whichever
/// half turns out unsatisfiable.
pub fn compute_minterms(universe: &BddVariableSet, source_bdds: &[Bdd], limit: Option<usize>) -> Result<Vec<Bdd>> {
    let mut minterms = vec![universe.mk_true()];
    for bdd in source_bdds {
        let mut next = Vec::new();
        for minterm in &minterms {
            let with_bdd = minterm.and(bdd);
            if !with_bdd.is_false() {
                next.push(with_bdd);
            }
            let without_bdd = minterm.and(&bdd.not());
            if !without_bdd.is_false() {
                next.push(without_bdd);
            }
        }
        minterms = next;
        if let Some(limit) = limit {
            if minterms.len() > limit {
                return Err(MataError::MintermExplosion { minterms: minterms.len(), limit });
            }
        }
    }
    Ok(minterms)
}
