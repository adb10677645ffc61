//! An ordered, append-only container with higher-order traversal.
//!
//! A [`Sequence`] only ever grows at its end. Traversal always follows
//! insertion order, and the transformations [`Sequence::map`] and
//! [`Sequence::filter`] build new sequences instead of touching the receiver.
//! [`Sequence::reduce`] is a strict left fold.

use std::fmt;
use std::slice::Iter;

#[derive(Clone, PartialEq)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
    /// Makes `value` the new last element.
    pub fn append(&mut self, value: T) {
        self.elements.push(value);
    }
    pub fn size(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter()
    }
    /// Invokes `action` once per element, in insertion order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        for element in &self.elements {
            action(element);
        }
    }
    /// Builds a new sequence of the same length holding `transform` applied
    /// to every element, in order.
    pub fn map<R, F>(&self, mut transform: F) -> Sequence<R>
    where
        F: FnMut(&T) -> R,
    {
        let mut mapped = Sequence::with_capacity(self.size());
        self.for_each(|element| mapped.append(transform(element)));
        mapped
    }
    /// Folds left to right, starting from `identity`. An empty sequence
    /// gives back `identity` untouched.
    pub fn reduce<F>(&self, identity: T, mut combine: F) -> T
    where
        F: FnMut(T, &T) -> T,
    {
        let mut accumulated = identity;
        for element in &self.elements {
            accumulated = combine(accumulated, element);
        }
        accumulated
    }
    fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }
}

impl<T: Clone> Sequence<T> {
    /// Keeps, in original order, the elements for which `predicate` holds.
    pub fn filter<P>(&self, mut predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut kept = Sequence::new();
        self.for_each(|element| {
            if predicate(element) {
                kept.append(element.clone());
            }
        });
        kept
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.append(value));
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Sequence::new();
        sequence.extend(iter);
        sequence
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
