use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::check_in::errors::CheckInError;
use crate::domain::check_in::model::CheckInSummary;
use crate::domain::check_in::repository::CheckInRepository;
use crate::domain::check_in::use_cases::get_summary::{
    GetCheckInSummaryParams, GetCheckInSummaryUseCase,
};
use crate::domain::logger::Logger;

pub struct GetCheckInSummaryUseCaseImpl {
    pub repository: Arc<dyn CheckInRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCheckInSummaryUseCase for GetCheckInSummaryUseCaseImpl {
    async fn execute(
        &self,
        params: GetCheckInSummaryParams,
    ) -> Result<CheckInSummary, CheckInError> {
        let check_ins = self.repository.get_all().await?;

        let summary = CheckInSummary::from_check_ins(
            check_ins
                .iter()
                .filter(|c| params.date.is_none_or(|date| c.date == date)),
        );

        self.logger.debug(&format!(
            "Check-in summary: total={} veg={} non_veg={} vegan={}",
            summary.total_check_ins, summary.veg_count, summary.non_veg_count, summary.vegan_count
        ));
        Ok(summary)
    }
}
