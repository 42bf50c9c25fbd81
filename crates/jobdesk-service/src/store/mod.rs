//! Contract for the external User/Job/Application store.
//!
//! The auth core consumes these operations as opaque calls; the real
//! implementation lives behind the relational store, while
//! [`memory::MemoryStore`] backs tests and examples. Password digests
//! cross this boundary as opaque PHC strings and are never logged.

pub mod memory;

use chrono::{DateTime, Utc};
use serde::Serialize;

use jobdesk_core::types::{ApplicationId, JobId, SubjectId};

use crate::error::ServiceResult;

/// Public view of a registered user. Never carries the password digest.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: SubjectId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A job posting and its recorded owner.
#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    pub id: JobId,
    pub owner: SubjectId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// An application by a subject to a job.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub job: JobId,
    pub applicant: SubjectId,
    pub created_at: DateTime<Utc>,
}

/// Credential persistence keyed by username.
pub trait CredentialStore {
    /// Persist a new credential, generating the subject id.
    ///
    /// ## Errors
    /// Returns `DuplicateUsername` if the username is already taken.
    fn create_credential(
        &self,
        username: &str,
        password_hash: &str,
    ) -> impl Future<Output = ServiceResult<UserRecord>> + Send;

    /// Stored digest for a username, if any.
    ///
    /// ## Errors
    /// Returns an error only on store failure; an unknown username is
    /// `Ok(None)`.
    fn password_hash_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = ServiceResult<Option<String>>> + Send;

    /// Public record for a username, if any.
    ///
    /// ## Errors
    /// Returns an error only on store failure.
    fn user_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = ServiceResult<Option<UserRecord>>> + Send;
}

/// Job persistence and ownership lookups.
pub trait JobStore {
    /// ## Errors
    /// Returns an error only on store failure.
    fn create_job(
        &self,
        owner: SubjectId,
        title: &str,
    ) -> impl Future<Output = ServiceResult<JobRecord>> + Send;

    /// Recorded owner of a job, if the job exists.
    ///
    /// ## Errors
    /// Returns an error only on store failure.
    fn owner_of_job(
        &self,
        job: JobId,
    ) -> impl Future<Output = ServiceResult<Option<SubjectId>>> + Send;

    /// A job posting by id, if it exists. Public read.
    ///
    /// ## Errors
    /// Returns an error only on store failure.
    fn job_by_id(
        &self,
        job: JobId,
    ) -> impl Future<Output = ServiceResult<Option<JobRecord>>> + Send;

    /// All job postings. Public read.
    ///
    /// ## Errors
    /// Returns an error only on store failure.
    fn jobs(&self) -> impl Future<Output = ServiceResult<Vec<JobRecord>>> + Send;

    /// Job postings whose title contains `title`, case-insensitive.
    /// Public read.
    ///
    /// ## Errors
    /// Returns an error only on store failure.
    fn jobs_by_title(
        &self,
        title: &str,
    ) -> impl Future<Output = ServiceResult<Vec<JobRecord>>> + Send;

    /// Delete a job; `false` if it did not exist.
    ///
    /// ## Errors
    /// Returns an error only on store failure.
    fn delete_job(&self, job: JobId) -> impl Future<Output = ServiceResult<bool>> + Send;
}

/// Application persistence and lookups.
pub trait ApplicationStore {
    /// ## Errors
    /// Returns an error only on store failure.
    fn create_application(
        &self,
        job: JobId,
        applicant: SubjectId,
    ) -> impl Future<Output = ServiceResult<ApplicationRecord>> + Send;

    /// All applications submitted to a job.
    ///
    /// ## Errors
    /// Returns an error only on store failure.
    fn applications_for_job(
        &self,
        job: JobId,
    ) -> impl Future<Output = ServiceResult<Vec<ApplicationRecord>>> + Send;

    /// All applications submitted by a subject.
    ///
    /// ## Errors
    /// Returns an error only on store failure.
    fn applications_by_user(
        &self,
        applicant: SubjectId,
    ) -> impl Future<Output = ServiceResult<Vec<ApplicationRecord>>> + Send;
}
