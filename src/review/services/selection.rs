//! Reviewer candidate selection.

use crate::review::domain::{TeamName, UserId};
use crate::review::ports::{DirectoryResult, UserDirectory};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Uniform sampler over reviewer candidates.
///
/// Injected into [`ReviewerPool`] so production code draws at random while
/// tests substitute a deterministic implementation.
pub trait Sampler: Send + Sync {
    /// Draws up to `take` distinct entries from `candidates`.
    ///
    /// Returns fewer entries when the slice holds fewer than `take`.
    fn draw(&self, candidates: &[UserId], take: usize) -> Vec<UserId>;
}

/// Sampler backed by the thread-local random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSampler;

impl Sampler for ThreadRngSampler {
    fn draw(&self, candidates: &[UserId], take: usize) -> Vec<UserId> {
        let mut rng = rand::thread_rng();
        candidates
            .choose_multiple(&mut rng, take)
            .cloned()
            .collect()
    }
}

/// Sampler that reseeds a deterministic generator on every draw.
///
/// Useful for reproducing a selection sequence across process restarts.
#[derive(Debug, Clone, Copy)]
pub struct SeededSampler {
    seed: u64,
}

impl SeededSampler {
    /// Creates a sampler that reseeds from `seed` on every draw.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Sampler for SeededSampler {
    fn draw(&self, candidates: &[UserId], take: usize) -> Vec<UserId> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        candidates
            .choose_multiple(&mut rng, take)
            .cloned()
            .collect()
    }
}

/// Draws reviewers for a team from the directory through a [`Sampler`].
#[derive(Debug)]
pub struct ReviewerPool<D, R> {
    directory: Arc<D>,
    sampler: Arc<R>,
}

impl<D, R> Clone for ReviewerPool<D, R> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            sampler: Arc::clone(&self.sampler),
        }
    }
}

impl<D, R> ReviewerPool<D, R>
where
    R: Sampler,
{
    /// Creates a pool drawing from `directory` through `sampler`.
    #[must_use]
    pub const fn new(directory: Arc<D>, sampler: Arc<R>) -> Self {
        Self { directory, sampler }
    }

    /// Selects up to `take` reviewers from the team's active members.
    ///
    /// Members in `exclude` never appear in the result. Returns fewer than
    /// `take` entries when the team has fewer eligible members, down to an
    /// empty selection.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`](crate::review::ports::DirectoryError)
    /// when the candidate lookup fails.
    pub fn select_up_to<S>(
        &self,
        session: &mut S,
        team: &TeamName,
        exclude: &BTreeSet<UserId>,
        take: usize,
    ) -> DirectoryResult<Vec<UserId>>
    where
        D: UserDirectory<S>,
    {
        let candidates = self.directory.active_candidates(session, team, exclude)?;
        Ok(self.sampler.draw(&candidates, take))
    }

    /// Selects a single replacement reviewer, if any candidate remains.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`](crate::review::ports::DirectoryError)
    /// when the candidate lookup fails.
    pub fn select_replacement<S>(
        &self,
        session: &mut S,
        team: &TeamName,
        exclude: &BTreeSet<UserId>,
    ) -> DirectoryResult<Option<UserId>>
    where
        D: UserDirectory<S>,
    {
        let mut selected = self.select_up_to(session, team, exclude, 1)?;
        Ok(selected.pop())
    }
}
