//! Memoized guesses keyed by candidate set
//!
//! Many games of a batch run pass through the same candidate sets, so the
//! guess chosen for one set is remembered and reused. The key is the sorted
//! member list of a `CandidateSet`, which makes it independent of the order in
//! which members were inserted.

use super::CandidateSet;
use crate::core::Combination;
use crate::error::Result;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

/// Thread-safe map from candidate set to the guess chosen for it
///
/// Share one cache only between solvers using the same strategy and universe.
/// Two threads missing on the same key both compute and both store; the
/// values are equal, so the second write is harmless.
#[derive(Debug, Default)]
pub struct GuessCache {
    entries: RwLock<FxHashMap<Vec<Combination>, Combination>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl GuessCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached guess for `candidates`, computing and storing it on a miss
    ///
    /// The lock is not held while `compute` runs.
    ///
    /// # Errors
    /// Propagates any error from `compute`; nothing is stored in that case.
    pub fn get_or_compute<F>(&self, candidates: &CandidateSet, compute: F) -> Result<Combination>
    where
        F: FnOnce(&CandidateSet) -> Result<Combination>,
    {
        if let Some(guess) = self.get(candidates) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::debug!("cache hit for {} candidates: {guess}", candidates.size());
            return Ok(guess);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        log::debug!("cache miss for {} candidates", candidates.size());

        let guess = compute(candidates)?;
        self.insert(candidates, guess.clone());
        Ok(guess)
    }

    /// Look up a guess without computing
    #[must_use]
    pub fn get(&self, candidates: &CandidateSet) -> Option<Combination> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(candidates.as_slice())
            .cloned()
    }

    /// Store a guess for a candidate set, replacing any previous entry
    ///
    /// Seeding the full universe with a fixed opening fixes the first guess of
    /// every game that uses this cache.
    pub fn insert(&self, candidates: &CandidateSet, guess: Combination) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(candidates.as_slice().to_vec(), guess);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}
