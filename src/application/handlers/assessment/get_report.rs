//! GetReportHandler - Query handler for a generated report.

use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::domain::scoring::Report;
use crate::ports::ReportRepository;

/// Query for the report of an assessment.
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub assessment_id: AssessmentId,
}

pub struct GetReportHandler {
    reports: Arc<dyn ReportRepository>,
}

impl GetReportHandler {
    pub fn new(reports: Arc<dyn ReportRepository>) -> Self {
        Self { reports }
    }

    pub async fn handle(&self, query: GetReportQuery) -> Result<Report, AssessmentError> {
        self.reports
            .find_by_assessment(&query.assessment_id)
            .await?
            .ok_or(AssessmentError::ReportNotFound(query.assessment_id))
    }
}
