//! Synchronized walks over several [`StatePost`]s' symbol posts at once,
//! used by the algebraic operations and determinization to avoid building
//! an explicit per-symbol map.
//!
//! Both iterators walk their inputs in ascending symbol order (each
//! [`StatePost`] is already sorted by symbol) using one cursor per input.
//! The *existential* iterator advances whichever cursors are at the current
//! minimum symbol, and yields that symbol if *any* input has it (a union
//! walk). The *universal* iterator only yields a symbol when *every* input
//! has it (an intersection walk), fast-forwarding any cursor that falls
//! behind.

use crate::delta::{StatePost, SymbolPost};
use crate::word::Symbol;

/// Walks several [`StatePost`]s in lockstep, yielding every symbol that
/// appears in at least one of them, together with the subset of inputs that
/// have a post for it.
///
/// This is what union, existential projection (e.g. "is there a transition
/// on this symbol from any of these states"), and determinization's subset
/// construction are built on.
pub struct SynchronizedExistentialIterator<'a> {
    posts: Vec<&'a StatePost>,
    cursors: Vec<usize>,
}

impl<'a> SynchronizedExistentialIterator<'a> {
    /// Creates an iterator over `posts`.
    pub fn new(posts: Vec<&'a StatePost>) -> Self {
        let cursors = vec![0; posts.len()];
        SynchronizedExistentialIterator { posts, cursors }
    }

    fn current_symbols(&self) -> Vec<Option<Symbol>> {
        self.posts
            .iter()
            .zip(&self.cursors)
            .map(|(post, &cursor)| post_symbol_at(post, cursor))
            .collect()
    }
}

fn post_symbol_at(post: &StatePost, cursor: usize) -> Option<Symbol> {
    post.iter().nth(cursor).map(SymbolPost::symbol)
}

fn post_at(post: &StatePost, cursor: usize) -> Option<&SymbolPost> {
    post.iter().nth(cursor)
}

impl<'a> Iterator for SynchronizedExistentialIterator<'a> {
    type Item = (Symbol, Vec<&'a SymbolPost>);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current_symbols();
        let min_symbol = current.iter().filter_map(|s| *s).min()?;
        let mut hits = Vec::new();
        for i in 0..self.posts.len() {
            if current[i] == Some(min_symbol) {
                hits.push(post_at(self.posts[i], self.cursors[i]).unwrap());
                self.cursors[i] += 1;
            }
        }
        Some((min_symbol, hits))
    }
}

/// Walks several [`StatePost`]s in lockstep, yielding only the symbols that
/// appear in *every one* of them, together with each input's post for that
/// symbol.
///
/// This is what the intersection construction (product automaton) and the
/// antichain decision procedures' "does every successor state accept this
/// symbol" checks are built on.
pub struct SynchronizedUniversalIterator<'a> {
    posts: Vec<&'a StatePost>,
    cursors: Vec<usize>,
}

impl<'a> SynchronizedUniversalIterator<'a> {
    /// Creates an iterator over `posts`. An empty `posts` list yields
    /// nothing (there is no symbol common to zero sets by this iterator's
    /// construction, matching the conservative reading used throughout this
    /// crate: an empty product has no transitions).
    pub fn new(posts: Vec<&'a StatePost>) -> Self {
        let cursors = vec![0; posts.len()];
        SynchronizedUniversalIterator { posts, cursors }
    }
}

impl<'a> Iterator for SynchronizedUniversalIterator<'a> {
    type Item = (Symbol, Vec<&'a SymbolPost>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.posts.is_empty() {
            return None;
        }
        loop {
            let current: Vec<Option<Symbol>> = self
                .posts
                .iter()
                .zip(&self.cursors)
                .map(|(post, &cursor)| post_symbol_at(post, cursor))
                .collect();
            if current.iter().any(|s| s.is_none()) {
                return None;
            }
            let max_symbol = current.iter().map(|s| s.unwrap()).max().unwrap();
            if current.iter().all(|&s| s == Some(max_symbol)) {
                let hits: Vec<&SymbolPost> = self
                    .posts
                    .iter()
                    .zip(self.cursors.iter_mut())
                    .map(|(post, cursor)| {
                        let found = post_at(post, *cursor).unwrap();
                        *cursor += 1;
                        found
                    })
                    .collect();
                return Some((max_symbol, hits));
            }
            for i in 0..self.posts.len() {
                while post_symbol_at(self.posts[i], self.cursors[i]).map_or(false, |s| s < max_symbol) {
                    self.cursors[i] += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::Delta;

    fn post(delta: &Delta, state: u32) -> &StatePost {
        delta.state_post(state).unwrap()
    }

    #[test]
    fn existential_yields_union_of_symbols() {
        let mut delta = Delta::new();
        delta.add_transition(0, 1, 10);
        delta.add_transition(1, 2, 20);
        delta.add_transition(1, 1, 21);
        let posts = vec![post(&delta, 0), post(&delta, 1)];
        let out: Vec<(Symbol, Vec<u32>)> = SynchronizedExistentialIterator::new(posts)
            .map(|(sym, hits)| (sym, hits.iter().flat_map(|p| p.targets().to_vec()).collect()))
            .collect();
        assert_eq!(out, vec![(1, vec![10, 21]), (2, vec![20])]);
    }

    #[test]
    fn universal_yields_only_common_symbols() {
        let mut delta = Delta::new();
        delta.add_transition(0, 1, 10);
        delta.add_transition(0, 2, 11);
        delta.add_transition(1, 2, 20);
        delta.add_transition(1, 3, 21);
        let posts = vec![post(&delta, 0), post(&delta, 1)];
        let out: Vec<Symbol> = SynchronizedUniversalIterator::new(posts).map(|(sym, _)| sym).collect();
        assert_eq!(out, vec![2]);
    }

    #[test]
    fn universal_empty_input_yields_nothing() {
        let out: Vec<_> = SynchronizedUniversalIterator::new(vec![]).collect();
        assert!(out.is_empty());
    }
}
