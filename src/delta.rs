//! The transition relation: for each state, a sorted set of
//! symbol/target-set pairs.
//!
//! A [`Delta`] is a `Vec<StatePost>` indexed by source state; a
//! [`StatePost`] is a `Vec<SymbolPost>` kept sorted by symbol, searched with
//! binary search rather than a hash map so that the synchronized iterators
//! in [`crate::sync_iter`] can walk several `StatePost`s in lockstep by
//! symbol order.

use crate::word::{State, Symbol};

/// The set of target states reached from one state on one symbol, kept
/// sorted and deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolPost {
    symbol: Symbol,
    targets: Vec<State>,
}

impl SymbolPost {
    /// A post with a single target.
    pub fn new(symbol: Symbol, target: State) -> Self {
        SymbolPost { symbol, targets: vec![target] }
    }

    /// The symbol this post triggers on.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The (sorted, deduplicated) target states.
    pub fn targets(&self) -> &[State] {
        &self.targets
    }

    /// Inserts `target`, keeping `targets` sorted and deduplicated.
    pub fn insert(&mut self, target: State) {
        if let Err(pos) = self.targets.binary_search(&target) {
            self.targets.insert(pos, target);
        }
    }

    /// Whether `target` is reachable via this post.
    pub fn contains(&self, target: State) -> bool {
        self.targets.binary_search(&target).is_ok()
    }
}

/// All outgoing transitions of one state, one [`SymbolPost`] per distinct
/// symbol used, sorted by symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatePost {
    posts: Vec<SymbolPost>,
}

impl StatePost {
    /// A post list with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// The symbol posts, sorted by symbol.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolPost> {
        self.posts.iter()
    }

    /// The number of distinct symbols with at least one transition.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether this state has no outgoing transitions at all.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The post for `symbol`, if any transition triggers on it.
    pub fn get(&self, symbol: Symbol) -> Option<&SymbolPost> {
        self.posts.binary_search_by_key(&symbol, SymbolPost::symbol).ok().map(|ix| &self.posts[ix])
    }

    /// Adds a transition on `symbol` to `target`, merging into an existing
    /// [`SymbolPost`] for that symbol if one exists.
    pub fn insert(&mut self, symbol: Symbol, target: State) {
        match self.posts.binary_search_by_key(&symbol, SymbolPost::symbol) {
            Ok(ix) => self.posts[ix].insert(target),
            Err(ix) => self.posts.insert(ix, SymbolPost::new(symbol, target)),
        }
    }

    /// The symbols with at least one outgoing transition, in ascending
    /// order (ε sorts last, see [`crate::word::EPSILON`]).
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.posts.iter().map(SymbolPost::symbol)
    }
}

/// The transition relation of an automaton: one [`StatePost`] per state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Delta {
    posts: Vec<StatePost>,
}

impl Delta {
    /// An empty transition relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of states this relation has posts allocated for.
    pub fn num_states(&self) -> usize {
        self.posts.len()
    }

    /// Grows the relation so that `state` has an (initially empty) post,
    /// if it does not already.
    pub fn ensure_state(&mut self, state: State) {
        let needed = state as usize + 1;
        if needed > self.posts.len() {
            self.posts.resize(needed, StatePost::new());
        }
    }

    /// Adds a transition from `source` to `target` on `symbol`, growing the
    /// relation to cover both states if necessary.
    pub fn add_transition(&mut self, source: State, symbol: Symbol, target: State) {
        self.ensure_state(source.max(target));
        self.posts[source as usize].insert(symbol, target);
    }

    /// The outgoing post list of `state`, or `None` if `state` is out of
    /// range.
    pub fn state_post(&self, state: State) -> Option<&StatePost> {
        self.posts.get(state as usize)
    }

    /// The target set reached from `state` on `symbol`, or `None` if there
    /// is none.
    pub fn post(&self, state: State, symbol: Symbol) -> Option<&SymbolPost> {
        self.state_post(state).and_then(|post| post.get(symbol))
    }

    /// Iterates over `(state, StatePost)` pairs for every state with at
    /// least one post allocated (including empty ones).
    pub fn iter(&self) -> impl Iterator<Item = (State, &StatePost)> {
        self.posts.iter().enumerate().map(|(ix, post)| (ix as State, post))
    }

    /// All symbols appearing anywhere in the relation, except ε, sorted and
    /// deduplicated.
    pub fn used_symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self
            .posts
            .iter()
            .flat_map(StatePost::symbols)
            .filter(|&s| s != crate::word::EPSILON)
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::EPSILON;

    #[test]
    fn insert_and_lookup() {
        let mut delta = Delta::new();
        delta.add_transition(0, 1, 1);
        delta.add_transition(0, 1, 2);
        delta.add_transition(0, 2, 2);
        let post = delta.post(0, 1).unwrap();
        assert_eq!(post.targets(), &[1, 2]);
        assert!(post.contains(2));
        assert!(!post.contains(5));
    }

    #[test]
    fn symbols_sorted_with_epsilon_last() {
        let mut delta = Delta::new();
        delta.add_transition(0, 3, 1);
        delta.add_transition(0, EPSILON, 1);
        delta.add_transition(0, 1, 1);
        let symbols: Vec<Symbol> = delta.state_post(0).unwrap().symbols().collect();
        assert_eq!(symbols, vec![1, 3, EPSILON]);
    }

    #[test]
    fn ensure_state_grows_without_adding_transitions() {
        let mut delta = Delta::new();
        delta.ensure_state(5);
        assert_eq!(delta.num_states(), 6);
        assert!(delta.state_post(5).unwrap().is_empty());
    }

    #[test]
    fn used_symbols_excludes_epsilon() {
        let mut delta = Delta::new();
        delta.add_transition(0, 1, 1);
        delta.add_transition(1, EPSILON, 2);
        assert_eq!(delta.used_symbols(), vec![1]);
    }
}
