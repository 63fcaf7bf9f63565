use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::waste::use_cases::create::{CreateWasteLogParams, CreateWasteLogUseCase};
use business::domain::waste::use_cases::get_all::GetAllWasteLogsUseCase;
use business::domain::waste::use_cases::get_summary::GetWasteSummaryUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::waste::dto::{CreateWasteLogRequest, WasteLogResponse, WasteSummaryResponse};

pub struct WasteLogApi {
    create_use_case: Arc<dyn CreateWasteLogUseCase>,
    get_all_use_case: Arc<dyn GetAllWasteLogsUseCase>,
    get_summary_use_case: Arc<dyn GetWasteSummaryUseCase>,
}

impl WasteLogApi {
    pub fn new(
        create_use_case: Arc<dyn CreateWasteLogUseCase>,
        get_all_use_case: Arc<dyn GetAllWasteLogsUseCase>,
        get_summary_use_case: Arc<dyn GetWasteSummaryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_summary_use_case,
        }
    }
}

/// Kitchen waste logging API
#[OpenApi]
impl WasteLogApi {
    /// Log waste
    ///
    /// Records food (kg) or water (L) waste for today.
    #[oai(path = "/waste-logs", method = "post", tag = "ApiTags::WasteLogs")]
    async fn create(&self, body: Json<CreateWasteLogRequest>) -> CreateWasteLogResponse {
        let params = CreateWasteLogParams {
            category: body.0.category.into(),
            amount: body.0.amount,
        };

        match self.create_use_case.execute(params).await {
            Ok(log) => CreateWasteLogResponse::Created(Json(log.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateWasteLogResponse::BadRequest(json),
                    _ => CreateWasteLogResponse::InternalError(json),
                }
            }
        }
    }

    /// List waste logs
    ///
    /// Returns the most recent waste logs, newest first.
    #[oai(path = "/waste-logs", method = "get", tag = "ApiTags::WasteLogs")]
    async fn get_all(&self) -> GetAllWasteLogsResponse {
        match self.get_all_use_case.execute().await {
            Ok(logs) => {
                GetAllWasteLogsResponse::Ok(Json(logs.into_iter().map(|l| l.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllWasteLogsResponse::InternalError(json)
            }
        }
    }

    /// Waste totals
    #[oai(path = "/waste-logs/summary", method = "get", tag = "ApiTags::WasteLogs")]
    async fn get_summary(&self) -> GetWasteSummaryResponse {
        match self.get_summary_use_case.execute().await {
            Ok(summary) => GetWasteSummaryResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetWasteSummaryResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateWasteLogResponse {
    #[oai(status = 201)]
    Created(Json<WasteLogResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllWasteLogsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WasteLogResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWasteSummaryResponse {
    #[oai(status = 200)]
    Ok(Json<WasteSummaryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
