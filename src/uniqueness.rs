//! Password uniqueness checks on top of a [`BloomFilter`].
//!
//! "Contains" is read as "already used". A candidate that is not in the
//! filter is reported unique and inserted right away, so a duplicate later in
//! the same batch (or in a later batch against the same filter) is flagged.
use crate::bloom::BloomFilter;
use crate::candidate::{Candidate, PasswordPolicy};
use crate::error::{Result, SketchError};
use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    AlreadyUsed,
    Unique,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::AlreadyUsed => write!(f, "already used"),
            Verdict::Unique => write!(f, "unique"),
        }
    }
}

/// Borrows a filter for the duration of a checking session. The filter keeps
/// everything it learned after the checker is dropped.
pub struct UniquenessChecker<'a> {
    filter: &'a mut BloomFilter,
    policy: PasswordPolicy,
}

impl<'a> UniquenessChecker<'a> {
    pub fn new(filter: &'a mut BloomFilter) -> Self {
        Self {
            filter,
            policy: PasswordPolicy::permissive(),
        }
    }

    pub fn with_policy(
        filter: &'a mut BloomFilter,
        policy: PasswordPolicy,
    ) -> Self {
        Self { filter, policy }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Classifies one password and records it if it was unseen.
    pub fn check(&mut self, password: &str) -> Result<Verdict> {
        self.policy.validate(password)?;

        let verdict = if self.filter.contains(password) {
            Verdict::AlreadyUsed
        } else {
            self.filter.add(password);
            Verdict::Unique
        };
        debug!(%verdict, "Checked password");
        Ok(verdict)
    }

    /// Classifies candidates in order.
    ///
    /// Stops at the first invalid candidate and reports its position;
    /// everything before it has already been checked and recorded.
    pub fn check_batch<I, C>(
        &mut self,
        candidates: I,
    ) -> Result<Vec<(String, Verdict)>>
    where
        I: IntoIterator<Item = C>,
        C: Into<Candidate>,
    {
        let mut results = Vec::new();
        for (index, candidate) in candidates.into_iter().enumerate() {
            let password = match candidate.into() {
                Candidate::Valid(password) => password,
                Candidate::Invalid(reason) => {
                    return Err(SketchError::InvalidCandidate { index, reason });
                }
            };
            let verdict = self.check(&password).map_err(|e| match e {
                SketchError::InvalidInput(reason) => {
                    SketchError::InvalidCandidate { index, reason }
                }
                other => other,
            })?;
            results.push((password, verdict));
        }
        debug!(checked = results.len(), "Finished uniqueness batch");
        Ok(results)
    }
}

/// Checks `candidates` against `filter` without any character policy.
pub fn check_uniqueness<I, C>(
    filter: &mut BloomFilter,
    candidates: I,
) -> Result<Vec<(String, Verdict)>>
where
    I: IntoIterator<Item = C>,
    C: Into<Candidate>,
{
    UniquenessChecker::new(filter).check_batch(candidates)
}
