use jobdesk_core::types::{JobId, SubjectId};

use crate::auth::policy::{
    can_apply, can_modify, can_view_applications_for_job, require_subject,
};
use crate::error::{ServiceError, ServiceResult};
use crate::store::{ApplicationRecord, ApplicationStore, JobRecord, JobStore};

/// ## Summary
/// Creates a job posting owned by the authenticated subject.
///
/// ## Errors
/// Returns `NotAuthenticated` if no subject is present.
#[tracing::instrument(skip(store))]
pub async fn post_job<S: JobStore>(
    store: &S,
    subject: Option<SubjectId>,
    title: &str,
) -> ServiceResult<JobRecord> {
    let subject = require_subject(subject)?;
    store.create_job(subject, title).await
}

/// ## Summary
/// Lists all job postings. Public: job reads require no credential.
///
/// ## Errors
/// Returns an error only on store failure.
#[tracing::instrument(skip(store))]
pub async fn list_jobs<S: JobStore>(store: &S) -> ServiceResult<Vec<JobRecord>> {
    store.jobs().await
}

/// ## Summary
/// Looks up a single job posting. Public: requires no credential.
///
/// ## Errors
/// Returns `NotFound` if the job does not exist.
#[tracing::instrument(skip(store))]
pub async fn get_job<S: JobStore>(store: &S, job: JobId) -> ServiceResult<JobRecord> {
    store
        .job_by_id(job)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("job {job}")))
}

/// ## Summary
/// Searches job postings by title, case-insensitive. Public: requires
/// no credential.
///
/// ## Errors
/// Returns an error only on store failure.
#[tracing::instrument(skip(store))]
pub async fn search_jobs<S: JobStore>(store: &S, title: &str) -> ServiceResult<Vec<JobRecord>> {
    store.jobs_by_title(title).await
}

/// ## Summary
/// Deletes a job. Only the recorded owner may delete it.
///
/// ## Errors
/// - `NotAuthenticated` if no subject is present.
/// - `NotFound` if the job does not exist.
/// - `Forbidden` if the subject is not the owner.
#[tracing::instrument(skip(store))]
pub async fn delete_job<S: JobStore>(
    store: &S,
    subject: Option<SubjectId>,
    job: JobId,
) -> ServiceResult<()> {
    let subject = require_subject(subject)?;
    let owner = job_owner(store, job).await?;

    can_modify(subject, owner).require("only the owner may delete a job")?;

    store.delete_job(job).await?;
    tracing::debug!(%job, "Deleted job");
    Ok(())
}

/// ## Summary
/// Submits an application to a job. Owners may not apply to their own
/// posting.
///
/// ## Errors
/// - `NotAuthenticated` if no subject is present.
/// - `NotFound` if the job does not exist.
/// - `Forbidden` if the subject owns the job.
#[tracing::instrument(skip(store))]
pub async fn apply_to_job<S: JobStore + ApplicationStore>(
    store: &S,
    subject: Option<SubjectId>,
    job: JobId,
) -> ServiceResult<ApplicationRecord> {
    let subject = require_subject(subject)?;
    let owner = job_owner(store, job).await?;

    can_apply(subject, owner).require("owners may not apply to their own posting")?;

    store.create_application(job, subject).await
}

/// ## Summary
/// Lists applications submitted to a job. Only the job owner may view
/// them.
///
/// ## Errors
/// - `NotAuthenticated` if no subject is present.
/// - `NotFound` if the job does not exist.
/// - `Forbidden` if the subject is not the owner.
#[tracing::instrument(skip(store))]
pub async fn applications_for_job<S: JobStore + ApplicationStore>(
    store: &S,
    subject: Option<SubjectId>,
    job: JobId,
) -> ServiceResult<Vec<ApplicationRecord>> {
    let subject = require_subject(subject)?;
    let owner = job_owner(store, job).await?;

    can_view_applications_for_job(subject, owner)
        .require("only the owner may list applications to a job")?;

    store.applications_for_job(job).await
}

/// ## Summary
/// Lists the authenticated subject's own applications. No ownership
/// comparison: the subject always queries their own rows.
///
/// ## Errors
/// Returns `NotAuthenticated` if no subject is present.
#[tracing::instrument(skip(store))]
pub async fn applications_by_user<S: ApplicationStore>(
    store: &S,
    subject: Option<SubjectId>,
) -> ServiceResult<Vec<ApplicationRecord>> {
    let subject = require_subject(subject)?;
    store.applications_by_user(subject).await
}

async fn job_owner<S: JobStore>(store: &S, job: JobId) -> ServiceResult<SubjectId> {
    store
        .owner_of_job(job)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("job {job}")))
}
