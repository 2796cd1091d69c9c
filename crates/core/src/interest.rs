//! Expression-of-interest write path.
//!
//! The waitlist form feeds a single table of interest records keyed by email.
//! This module validates submissions, canonicalises the email address, and
//! stores accepted records behind the [`InterestStore`] trait. The in-memory
//! implementation mirrors the hosted table's behaviour: a uniqueness
//! constraint on the canonical email, and a one-submission-per-minute limit
//! per address.
//!
//! This path is entirely separate from the catalog and query engine; nothing
//! here feeds back into discovery.

use crate::error::{InterestError, InterestResult};
use crate::validation::{canonical_email, is_valid_email};
use chrono::{DateTime, Duration, Utc};
use collaboro_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Minimum length of a first name, after trimming.
pub const MIN_FIRST_NAME_CHARS: usize = 2;
/// Minimum length of the motivation text, after trimming.
pub const MIN_MOTIVATION_CHARS: usize = 20;
/// Minimum delay between two submissions from the same email.
pub const RESUBMIT_DELAY_SECS: i64 = 60;

/// The role a person signs up as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestRole {
    Volunteer,
    Nonprofit,
    Business,
}

impl std::fmt::Display for InterestRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterestRole::Volunteer => write!(f, "volunteer"),
            InterestRole::Nonprofit => write!(f, "nonprofit"),
            InterestRole::Business => write!(f, "business"),
        }
    }
}

/// An incoming, not-yet-validated submission.
#[derive(Clone, Debug, Deserialize)]
pub struct InterestSubmission {
    pub first_name: String,
    pub email: String,
    /// Absent when the form's role select was left on its placeholder.
    pub role: Option<InterestRole>,
    pub neighborhood: Option<String>,
    pub motivation: String,
}

/// A stored interest record.
#[derive(Clone, Debug)]
pub struct InterestRecord {
    pub id: Uuid,
    pub first_name: NonEmptyText,
    /// Canonical (trimmed, lowercased) address; the uniqueness key.
    pub email: String,
    pub role: InterestRole,
    pub neighborhood: Option<NonEmptyText>,
    pub motivation: NonEmptyText,
    pub created_at: DateTime<Utc>,
}

impl InterestSubmission {
    /// Validates the submission fields.
    ///
    /// Returns the canonical email on success. Field checks mirror the
    /// waitlist form: first name at least two characters, syntactically
    /// plausible email, a chosen role, motivation of at least twenty
    /// characters. The optional neighborhood is trimmed; a blank value is
    /// treated as absent.
    ///
    /// # Errors
    ///
    /// Returns the field-level [`InterestError`] for the first failing check.
    pub fn validate(&self) -> InterestResult<String> {
        if self.first_name.trim().chars().count() < MIN_FIRST_NAME_CHARS {
            return Err(InterestError::FirstNameTooShort {
                min: MIN_FIRST_NAME_CHARS,
            });
        }

        if !is_valid_email(self.email.trim()) {
            return Err(InterestError::InvalidEmail);
        }

        if self.role.is_none() {
            return Err(InterestError::MissingRole);
        }

        if self.motivation.trim().chars().count() < MIN_MOTIVATION_CHARS {
            return Err(InterestError::MotivationTooShort {
                min: MIN_MOTIVATION_CHARS,
            });
        }

        Ok(canonical_email(&self.email))
    }
}

/// Storage for accepted interest records.
///
/// `submit` never returns the stored row, matching the hosted table where
/// anonymous writers cannot read back.
pub trait InterestStore {
    /// Validates and stores a submission, returning the new record id.
    ///
    /// # Errors
    ///
    /// Field validation errors, [`InterestError::DuplicateEmail`] when the
    /// canonical email is already recorded, or
    /// [`InterestError::RateLimited`] when the same email was submitted less
    /// than [`RESUBMIT_DELAY_SECS`] ago.
    fn submit(&mut self, submission: InterestSubmission) -> InterestResult<Uuid>;

    /// Whether an interest record exists for this email (any capitalisation).
    fn email_exists(&self, email: &str) -> bool;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory interest store.
///
/// Records live for the process lifetime only; durability is an explicit
/// non-goal of the prototype.
#[derive(Debug, Default)]
pub struct InMemoryInterestStore {
    records: HashMap<String, InterestRecord>,
    last_submission: HashMap<String, DateTime<Utc>>,
}

impl InMemoryInterestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submission with an explicit clock, used by `submit` and by tests.
    fn submit_at(
        &mut self,
        submission: InterestSubmission,
        now: DateTime<Utc>,
    ) -> InterestResult<Uuid> {
        let email = submission.validate()?;

        if let Some(previous) = self.last_submission.get(&email) {
            let elapsed = now.signed_duration_since(*previous);
            if elapsed < Duration::seconds(RESUBMIT_DELAY_SECS) {
                let wait = Duration::seconds(RESUBMIT_DELAY_SECS) - elapsed;
                return Err(InterestError::RateLimited {
                    wait_secs: wait.num_seconds().max(1) as u64,
                });
            }
        }

        if self.records.contains_key(&email) {
            return Err(InterestError::DuplicateEmail);
        }

        let role = submission.role.ok_or(InterestError::MissingRole)?;
        let first_name =
            NonEmptyText::new(&submission.first_name).map_err(|_| InterestError::FirstNameTooShort {
                min: MIN_FIRST_NAME_CHARS,
            })?;
        let motivation =
            NonEmptyText::new(&submission.motivation).map_err(|_| InterestError::MotivationTooShort {
                min: MIN_MOTIVATION_CHARS,
            })?;
        let neighborhood = submission
            .neighborhood
            .as_deref()
            .and_then(|n| NonEmptyText::new(n).ok());

        let record = InterestRecord {
            id: Uuid::new_v4(),
            first_name,
            email: email.clone(),
            role,
            neighborhood,
            motivation,
            created_at: now,
        };
        let id = record.id;

        tracing::info!(email = %record.email, role = %record.role, "interest recorded");
        self.records.insert(email.clone(), record);
        self.last_submission.insert(email, now);
        Ok(id)
    }
}

impl InterestStore for InMemoryInterestStore {
    fn submit(&mut self, submission: InterestSubmission) -> InterestResult<Uuid> {
        self.submit_at(submission, Utc::now())
    }

    fn email_exists(&self, email: &str) -> bool {
        self.records.contains_key(&canonical_email(email))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
