use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::check_in::errors::CheckInError;
use crate::domain::check_in::model::CheckInSummary;

pub struct GetCheckInSummaryParams {
    /// Only check-ins made on this day are counted; `None` counts everything stored.
    pub date: Option<NaiveDate>,
}

#[async_trait]
pub trait GetCheckInSummaryUseCase: Send + Sync {
    async fn execute(&self, params: GetCheckInSummaryParams)
    -> Result<CheckInSummary, CheckInError>;
}
