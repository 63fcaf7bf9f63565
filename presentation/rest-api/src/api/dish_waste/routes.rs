use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::dish_waste::use_cases::create::{
    CreateDishWasteLogParams, CreateDishWasteLogUseCase,
};
use business::domain::dish_waste::use_cases::get_all::GetAllDishWasteLogsUseCase;

use crate::api::dish_waste::dto::{CreateDishWasteLogRequest, DishWasteLogResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DishWasteLogApi {
    create_use_case: Arc<dyn CreateDishWasteLogUseCase>,
    get_all_use_case: Arc<dyn GetAllDishWasteLogsUseCase>,
}

impl DishWasteLogApi {
    pub fn new(
        create_use_case: Arc<dyn CreateDishWasteLogUseCase>,
        get_all_use_case: Arc<dyn GetAllDishWasteLogsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
        }
    }
}

/// Per-dish waste logging API
#[OpenApi]
impl DishWasteLogApi {
    /// Log waste per dish
    ///
    /// Records kilograms wasted for dishes on today's menu. At least one dish
    /// needs a positive amount.
    #[oai(path = "/dish-waste-logs", method = "post", tag = "ApiTags::WasteLogs")]
    async fn create(&self, body: Json<CreateDishWasteLogRequest>) -> CreateDishWasteLogResponse {
        let params = CreateDishWasteLogParams {
            amounts: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(log) => CreateDishWasteLogResponse::Created(Json(log.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateDishWasteLogResponse::BadRequest(json),
                    _ => CreateDishWasteLogResponse::InternalError(json),
                }
            }
        }
    }

    /// List dish waste logs
    ///
    /// Returns the most recent per-dish waste logs, newest first.
    #[oai(path = "/dish-waste-logs", method = "get", tag = "ApiTags::WasteLogs")]
    async fn get_all(&self) -> GetAllDishWasteLogsResponse {
        match self.get_all_use_case.execute().await {
            Ok(logs) => GetAllDishWasteLogsResponse::Ok(Json(
                logs.into_iter().map(|l| l.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllDishWasteLogsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateDishWasteLogResponse {
    #[oai(status = 201)]
    Created(Json<DishWasteLogResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllDishWasteLogsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<DishWasteLogResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
