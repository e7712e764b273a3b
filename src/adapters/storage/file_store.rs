//! File-based Store Adapter
//!
//! Stores every record as a JSON file on disk, one directory per record kind:
//!
//! ```text
//! <data_dir>/applications/<id>.json
//! <data_dir>/questions/<id>.json
//! <data_dir>/assessments/<id>.json
//! <data_dir>/reports/<assessment_id>.json
//! ```
//!
//! Each write goes to its own temporary file that is renamed over the record,
//! so a reader sees either the old or the new value and the last rename wins.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::SampleData;
use crate::domain::application::Application;
use crate::domain::assessment::Assessment;
use crate::domain::catalog::Question;
use crate::domain::foundation::{
    ApplicationId, AssessmentId, DomainError, ErrorCode, QuestionId,
};
use crate::domain::scoring::Report;
use crate::ports::{ApplicationRepository, AssessmentRepository, QuestionCatalog, ReportRepository};

const APPLICATIONS: &str = "applications";
const QUESTIONS: &str = "questions";
const ASSESSMENTS: &str = "assessments";
const REPORTS: &str = "reports";

/// File-based storage for all record kinds.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `base_path`, creating the record directories.
    ///
    /// # Errors
    ///
    /// - `StorageUnavailable` if a directory cannot be created
    pub async fn open<P: AsRef<Path>>(base_path: P) -> Result<Self, DomainError> {
        let store = Self {
            base_path: base_path.as_ref().to_path_buf(),
        };
        for kind in [APPLICATIONS, QUESTIONS, ASSESSMENTS, REPORTS] {
            let dir = store.base_path.join(kind);
            fs::create_dir_all(&dir)
                .await
                .map_err(|e| io_error("create directory", &dir, e))?;
        }
        Ok(store)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Writes the sample records when the question catalog is empty.
    ///
    /// Returns whether anything was written.
    pub async fn seed(&self, data: &SampleData) -> Result<bool, DomainError> {
        if !self.list_records::<Question>(QUESTIONS).await?.is_empty() {
            return Ok(false);
        }
        for question in &data.questions {
            self.write_record(QUESTIONS, question.id.as_str(), question)
                .await?;
        }
        for application in &data.applications {
            self.write_record(APPLICATIONS, application.id.as_str(), application)
                .await?;
        }
        tracing::info!(
            questions = data.questions.len(),
            applications = data.applications.len(),
            path = %self.base_path.display(),
            "Seeded sample data"
        );
        Ok(true)
    }

    /// Path of one record. Rejects ids that would leave the record directory.
    fn record_path(&self, kind: &str, id: &str) -> Result<PathBuf, DomainError> {
        if id.is_empty() || id.starts_with('.') || id.contains(['/', '\\']) {
            return Err(DomainError::validation(
                "id",
                format!("'{}' is not a valid record id", id),
            ));
        }
        Ok(self.base_path.join(kind).join(format!("{}.json", id)))
    }

    async fn write_record<T: Serialize>(
        &self,
        kind: &str,
        id: &str,
        value: &T,
    ) -> Result<(), DomainError> {
        let path = self.record_path(kind, id)?;
        let json = serde_json::to_vec_pretty(value).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to encode {} record '{}': {}", kind, id, e),
            )
        })?;

        // One temp file per write; concurrent writers to the same id never share it.
        let tmp = path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4()));
        fs::write(&tmp, json)
            .await
            .map_err(|e| io_error("write", &tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error("rename", &path, e))?;
        Ok(())
    }

    async fn read_record<T: DeserializeOwned>(
        &self,
        kind: &str,
        id: &str,
    ) -> Result<Option<T>, DomainError> {
        let path = self.record_path(kind, id)?;
        read_json(&path).await
    }

    async fn record_exists(&self, kind: &str, id: &str) -> Result<bool, DomainError> {
        let path = self.record_path(kind, id)?;
        match fs::metadata(&path).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error("stat", &path, e)),
        }
    }

    async fn list_records<T: DeserializeOwned>(&self, kind: &str) -> Result<Vec<T>, DomainError> {
        let dir = self.base_path.join(kind);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("list", &dir, e)),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error("list", &dir, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            // Removed between listing and reading: skip.
            if let Some(record) = read_json(&path).await? {
                records.push(record);
            }
        }
        Ok(records)
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, DomainError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error("read", path, e)),
    };
    serde_json::from_slice(&bytes).map(Some).map_err(|e| {
        DomainError::storage(format!("Failed to decode {}: {}", path.display(), e))
            .with_detail("path", path.display().to_string())
    })
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> DomainError {
    tracing::error!(action, path = %path.display(), error = %err, "Storage I/O failed");
    DomainError::storage(format!("Failed to {} {}: {}", action, path.display(), err))
        .with_detail("path", path.display().to_string())
}

#[async_trait]
impl QuestionCatalog for FileStore {
    async fn list_questions(&self) -> Result<Vec<Question>, DomainError> {
        let mut questions: Vec<Question> = self.list_records(QUESTIONS).await?;
        questions.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(questions)
    }

    async fn find_question(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        self.read_record(QUESTIONS, id.as_str()).await
    }
}

#[async_trait]
impl AssessmentRepository for FileStore {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        self.write_record(ASSESSMENTS, &assessment.id().to_string(), assessment)
            .await
    }

    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let id = assessment.id().to_string();
        if !self.record_exists(ASSESSMENTS, &id).await? {
            return Err(DomainError::new(
                ErrorCode::AssessmentNotFound,
                format!("Assessment not found: {}", id),
            )
            .with_detail("assessment_id", id));
        }
        self.write_record(ASSESSMENTS, &id, assessment).await
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        self.read_record(ASSESSMENTS, &id.to_string()).await
    }

    async fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<Assessment>, DomainError> {
        let mut assessments: Vec<Assessment> = self
            .list_records::<Assessment>(ASSESSMENTS)
            .await?
            .into_iter()
            .filter(|a| a.application_id() == application_id)
            .collect();
        assessments.sort_by_key(|a| *a.created_at());
        Ok(assessments)
    }
}

#[async_trait]
impl ReportRepository for FileStore {
    async fn save(&self, report: &Report) -> Result<(), DomainError> {
        self.write_record(REPORTS, &report.assessment_id.to_string(), report)
            .await
    }

    async fn find_by_assessment(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<Option<Report>, DomainError> {
        self.read_record(REPORTS, &assessment_id.to_string()).await
    }
}

#[async_trait]
impl ApplicationRepository for FileStore {
    async fn save(&self, application: &Application) -> Result<(), DomainError> {
        self.write_record(APPLICATIONS, application.id.as_str(), application)
            .await
    }

    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<Application>, DomainError> {
        self.read_record(APPLICATIONS, id.as_str()).await
    }

    async fn list(&self) -> Result<Vec<Application>, DomainError> {
        let mut applications: Vec<Application> = self.list_records(APPLICATIONS).await?;
        applications.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(applications)
    }
}
