//! Insertion-ordered triangle collection keyed by point set.

use std::collections::HashSet;

use crate::geom2::{Triangle, TriangleKey};

#[derive(Clone, Debug, Default)]
pub struct TriangleSet {
    order: Vec<Triangle>,
    keys: HashSet<TriangleKey>,
}

impl TriangleSet {
    /// Adds `t` unless a triangle with the same point set is present.
    /// Returns whether it was added; the first accepted vertex order wins.
    pub fn insert(&mut self, t: Triangle) -> bool {
        if !self.keys.insert(t.key()) {
            return false;
        }
        self.order.push(t);
        true
    }
    #[inline]
    pub fn contains(&self, t: &Triangle) -> bool {
        self.keys.contains(&t.key())
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.order.iter()
    }
    pub fn into_vec(self) -> Vec<Triangle> {
        self.order
    }
}

impl<'a> IntoIterator for &'a TriangleSet {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Triangle> for TriangleSet {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        let mut set = Self::default();
        for t in iter {
            set.insert(t);
        }
        set
    }
}
