//! Iteration over a failure's upstream causes.

use std::iter::FusedIterator;

use super::Cause;

/// Iterator over a causal chain, nearest cause first.
#[derive(Clone)]
pub struct Causes<'a> {
    next: Option<&'a dyn Cause>,
}

impl<'a> Causes<'a> {
    pub(super) const fn new(first: Option<&'a dyn Cause>) -> Self {
        Self { next: first }
    }
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a dyn Cause;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.caused_by();
        Some(current)
    }
}

impl FusedIterator for Causes<'_> {}

impl std::fmt::Debug for Causes<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Causes")
            .field("next", &self.next.map(|cause| cause.reason()))
            .finish()
    }
}
