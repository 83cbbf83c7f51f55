// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::cell::Cell;

use crate::RegexScopeError;

/// Hands out the capture group indices of one build.
///
/// The root scope and all of its nested scopes share a single provider
/// by reference, so the indices are unique across the whole pattern and
/// follow the group-open order.
#[derive(Debug)]
pub struct GroupIndexProvider {
    // `None` once the counter has run past `usize::MAX`
    next: Cell<Option<usize>>,
    step: usize,
}

impl GroupIndexProvider {
    pub fn new(start: usize, step: usize) -> Result<Self, RegexScopeError> {
        if step == 0 {
            return Err(RegexScopeError::InvalidIndexStep);
        }

        Ok(Self {
            next: Cell::new(Some(start)),
            step,
        })
    }

    /// Returns the next index and advances the counter.
    ///
    /// Fails with `GroupIndexOverflow` when the counter is exhausted,
    /// an index is never handed out twice.
    ///
    /// Calling this outside of the scope operations leaves a hole in
    /// the numbering, the returned group refs would no longer match
    /// the groups of the pattern.
    pub fn next_index(&self) -> Result<usize, RegexScopeError> {
        let index = self
            .next
            .get()
            .ok_or(RegexScopeError::GroupIndexOverflow)?;
        self.next.set(index.checked_add(self.step));

        log::trace!("allocate capture group index: {}", index);
        Ok(index)
    }

    /// The index that the next call of `next_index` returns,
    /// `None` if the counter is exhausted.
    pub fn peek_index(&self) -> Option<usize> {
        self.next.get()
    }
}

impl Default for GroupIndexProvider {
    fn default() -> Self {
        Self {
            next: Cell::new(Some(1)),
            step: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::RegexScopeError;

    use super::GroupIndexProvider;

    #[test]
    fn test_default_provider() {
        let provider = GroupIndexProvider::default();
        assert_eq!(provider.next_index().unwrap(), 1);
        assert_eq!(provider.next_index().unwrap(), 2);
        assert_eq!(provider.peek_index(), Some(3));
        assert_eq!(provider.next_index().unwrap(), 3);
    }

    #[test]
    fn test_start_and_step() {
        let provider = GroupIndexProvider::new(10, 5).unwrap();
        assert_eq!(provider.next_index().unwrap(), 10);
        assert_eq!(provider.next_index().unwrap(), 15);
        assert_eq!(provider.next_index().unwrap(), 20);
    }

    #[test]
    fn test_zero_step() {
        assert!(matches!(
            GroupIndexProvider::new(1, 0),
            Err(RegexScopeError::InvalidIndexStep)
        ));
    }

    #[test]
    fn test_counter_exhausted() {
        // the last representable index is still handed out
        let provider = GroupIndexProvider::new(usize::MAX, 1).unwrap();
        assert_eq!(provider.next_index().unwrap(), usize::MAX);
        assert_eq!(provider.peek_index(), None);
        assert!(matches!(
            provider.next_index(),
            Err(RegexScopeError::GroupIndexOverflow)
        ));

        // and it stays exhausted
        assert!(matches!(
            provider.next_index(),
            Err(RegexScopeError::GroupIndexOverflow)
        ));
    }

    #[test]
    fn test_large_step_overflow() {
        let provider = GroupIndexProvider::new(usize::MAX - 3, 2).unwrap();
        assert_eq!(provider.next_index().unwrap(), usize::MAX - 3);
        assert_eq!(provider.next_index().unwrap(), usize::MAX - 1);
        assert!(matches!(
            provider.next_index(),
            Err(RegexScopeError::GroupIndexOverflow)
        ));

        let provider = GroupIndexProvider::new(1, usize::MAX).unwrap();
        assert_eq!(provider.next_index().unwrap(), 1);
        assert!(matches!(
            provider.next_index(),
            Err(RegexScopeError::GroupIndexOverflow)
        ));
    }
}
