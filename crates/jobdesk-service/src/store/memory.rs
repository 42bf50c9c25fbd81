//! In-memory reference store.
//!
//! Implements the full store contract behind a `tokio::sync::RwLock`,
//! for tests and examples. Real deployments put the same traits in
//! front of the relational store.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use jobdesk_core::types::{ApplicationId, JobId, SubjectId};

use crate::error::{ServiceError, ServiceResult};

use super::{ApplicationRecord, ApplicationStore, CredentialStore, JobRecord, JobStore, UserRecord};

struct StoredCredential {
    user: UserRecord,
    password_hash: String,
}

#[derive(Default)]
struct Inner {
    // Keyed by username; usernames are unique.
    credentials: HashMap<String, StoredCredential>,
    jobs: HashMap<JobId, JobRecord>,
    applications: HashMap<ApplicationId, ApplicationRecord>,
}

/// In-memory implementation of the store contract.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    async fn create_credential(
        &self,
        username: &str,
        password_hash: &str,
    ) -> ServiceResult<UserRecord> {
        let mut inner = self.inner.write().await;

        if inner.credentials.contains_key(username) {
            return Err(ServiceError::DuplicateUsername(username.to_string()));
        }

        let now = Utc::now();
        let user = UserRecord {
            id: SubjectId::new(),
            username: username.to_string(),
            created_at: now,
            updated_at: now,
        };

        inner.credentials.insert(
            username.to_string(),
            StoredCredential {
                user: user.clone(),
                password_hash: password_hash.to_string(),
            },
        );

        Ok(user)
    }

    async fn password_hash_by_username(&self, username: &str) -> ServiceResult<Option<String>> {
        let inner = self.inner.read().await;
        Ok(inner
            .credentials
            .get(username)
            .map(|stored| stored.password_hash.clone()))
    }

    async fn user_by_username(&self, username: &str) -> ServiceResult<Option<UserRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .credentials
            .get(username)
            .map(|stored| stored.user.clone()))
    }
}

impl JobStore for MemoryStore {
    async fn create_job(&self, owner: SubjectId, title: &str) -> ServiceResult<JobRecord> {
        let mut inner = self.inner.write().await;

        let job = JobRecord {
            id: JobId::new(),
            owner,
            title: title.to_string(),
            created_at: Utc::now(),
        };
        inner.jobs.insert(job.id, job.clone());

        Ok(job)
    }

    async fn owner_of_job(&self, job: JobId) -> ServiceResult<Option<SubjectId>> {
        let inner = self.inner.read().await;
        Ok(inner.jobs.get(&job).map(|record| record.owner))
    }

    async fn job_by_id(&self, job: JobId) -> ServiceResult<Option<JobRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.jobs.get(&job).cloned())
    }

    async fn jobs(&self) -> ServiceResult<Vec<JobRecord>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<JobRecord> = inner.jobs.values().cloned().collect();
        rows.sort_by_key(|record| record.created_at);
        Ok(rows)
    }

    async fn jobs_by_title(&self, title: &str) -> ServiceResult<Vec<JobRecord>> {
        let needle = title.to_lowercase();
        let inner = self.inner.read().await;
        let mut rows: Vec<JobRecord> = inner
            .jobs
            .values()
            .filter(|record| record.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        rows.sort_by_key(|record| record.created_at);
        Ok(rows)
    }

    async fn delete_job(&self, job: JobId) -> ServiceResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.jobs.remove(&job).is_some())
    }
}

impl ApplicationStore for MemoryStore {
    async fn create_application(
        &self,
        job: JobId,
        applicant: SubjectId,
    ) -> ServiceResult<ApplicationRecord> {
        let mut inner = self.inner.write().await;

        let application = ApplicationRecord {
            id: ApplicationId::new(),
            job,
            applicant,
            created_at: Utc::now(),
        };
        inner.applications.insert(application.id, application.clone());

        Ok(application)
    }

    async fn applications_for_job(&self, job: JobId) -> ServiceResult<Vec<ApplicationRecord>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<ApplicationRecord> = inner
            .applications
            .values()
            .filter(|application| application.job == job)
            .cloned()
            .collect();
        rows.sort_by_key(|application| application.created_at);
        Ok(rows)
    }

    async fn applications_by_user(
        &self,
        applicant: SubjectId,
    ) -> ServiceResult<Vec<ApplicationRecord>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<ApplicationRecord> = inner
            .applications
            .values()
            .filter(|application| application.applicant == applicant)
            .cloned()
            .collect();
        rows.sort_by_key(|application| application.created_at);
        Ok(rows)
    }
}
