use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::check_in::use_cases::create::{CreateCheckInParams, CreateCheckInUseCase};
use business::domain::check_in::use_cases::get_all::GetAllCheckInsUseCase;
use business::domain::check_in::use_cases::get_summary::{
    GetCheckInSummaryParams, GetCheckInSummaryUseCase,
};
use business::domain::check_in::use_cases::update_preferences::{
    UpdatePreferencesParams, UpdatePreferencesUseCase,
};
use business::domain::check_in::use_cases::update_today::{
    UpdateTodaysChoiceParams, UpdateTodaysChoiceUseCase,
};

use crate::api::check_in::dto::{
    CheckInResponse, CheckInSummaryResponse, CreateCheckInRequest, UpdatePreferencesRequest,
    UpdateTodaysChoiceRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CheckInApi {
    create_use_case: Arc<dyn CreateCheckInUseCase>,
    get_all_use_case: Arc<dyn GetAllCheckInsUseCase>,
    get_summary_use_case: Arc<dyn GetCheckInSummaryUseCase>,
    update_today_use_case: Arc<dyn UpdateTodaysChoiceUseCase>,
    update_preferences_use_case: Arc<dyn UpdatePreferencesUseCase>,
}

impl CheckInApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCheckInUseCase>,
        get_all_use_case: Arc<dyn GetAllCheckInsUseCase>,
        get_summary_use_case: Arc<dyn GetCheckInSummaryUseCase>,
        update_today_use_case: Arc<dyn UpdateTodaysChoiceUseCase>,
        update_preferences_use_case: Arc<dyn UpdatePreferencesUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_summary_use_case,
            update_today_use_case,
            update_preferences_use_case,
        }
    }
}

/// Employee check-in API
///
/// Employees check in for lunch with their diet and preferred slot; the
/// kitchen reads the resulting head counts.
#[OpenApi]
impl CheckInApi {
    /// Check in for lunch
    #[oai(path = "/check-ins", method = "post", tag = "ApiTags::CheckIns")]
    async fn create(&self, body: Json<CreateCheckInRequest>) -> CreateCheckInResponse {
        let params = CreateCheckInParams {
            name: body.0.name,
            email: body.0.email,
            diet_preference: body.0.diet_preference.into(),
            lunch_timing: body.0.preferred_lunch_timing.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(check_in) => CreateCheckInResponse::Created(Json(check_in.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCheckInResponse::BadRequest(json),
                    _ => CreateCheckInResponse::InternalError(json),
                }
            }
        }
    }

    /// List check-ins
    ///
    /// Returns the most recent check-ins, newest first.
    #[oai(path = "/check-ins", method = "get", tag = "ApiTags::CheckIns")]
    async fn get_all(&self) -> GetAllCheckInsResponse {
        match self.get_all_use_case.execute().await {
            Ok(check_ins) => GetAllCheckInsResponse::Ok(Json(
                check_ins.into_iter().map(|c| c.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCheckInsResponse::InternalError(json)
            }
        }
    }

    /// Head counts for a day
    ///
    /// Counts people eating on the given day (default: today) by the diet
    /// they actually chose. Skipped meals are not counted.
    #[oai(path = "/check-ins/summary", method = "get", tag = "ApiTags::CheckIns")]
    async fn get_summary(
        &self,
        /// Day to count, YYYY-MM-DD (default: today, UTC)
        date: Query<Option<NaiveDate>>,
    ) -> GetCheckInSummaryResponse {
        let date = date.0.unwrap_or_else(|| Utc::now().date_naive());

        match self
            .get_summary_use_case
            .execute(GetCheckInSummaryParams { date: Some(date) })
            .await
        {
            Ok(summary) => GetCheckInSummaryResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCheckInSummaryResponse::InternalError(json)
            }
        }
    }

    /// Change today's choice
    ///
    /// Lets an employee skip today's meal or eat a different diet today.
    #[oai(path = "/check-ins/:id/today", method = "put", tag = "ApiTags::CheckIns")]
    async fn update_today(
        &self,
        id: Path<String>,
        body: Json<UpdateTodaysChoiceRequest>,
    ) -> UpdateCheckInResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateCheckInResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "check_in.invalid_id",
                )));
            }
        };

        let params = UpdateTodaysChoiceParams {
            id: uuid,
            todays_actual_diet: body.0.todays_actual_diet.map(Into::into),
            skip_meal_today: body.0.skip_meal_today,
        };

        match self.update_today_use_case.execute(params).await {
            Ok(check_in) => UpdateCheckInResponse::Ok(Json(check_in.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateCheckInResponse::NotFound(json),
                    _ => UpdateCheckInResponse::InternalError(json),
                }
            }
        }
    }

    /// Change standing preferences
    ///
    /// Updates the default diet and preferred lunch slot. A new default diet
    /// also becomes today's diet unless today's meal is skipped.
    #[oai(
        path = "/check-ins/:id/preferences",
        method = "put",
        tag = "ApiTags::CheckIns"
    )]
    async fn update_preferences(
        &self,
        id: Path<String>,
        body: Json<UpdatePreferencesRequest>,
    ) -> UpdateCheckInResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateCheckInResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "check_in.invalid_id",
                )));
            }
        };

        let params = UpdatePreferencesParams {
            id: uuid,
            diet_preference: body.0.diet_preference.map(Into::into),
            lunch_timing: body.0.preferred_lunch_timing.map(Into::into),
        };

        match self.update_preferences_use_case.execute(params).await {
            Ok(check_in) => UpdateCheckInResponse::Ok(Json(check_in.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateCheckInResponse::NotFound(json),
                    _ => UpdateCheckInResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCheckInResponse {
    #[oai(status = 201)]
    Created(Json<CheckInResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCheckInsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CheckInResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCheckInSummaryResponse {
    #[oai(status = 200)]
    Ok(Json<CheckInSummaryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCheckInResponse {
    #[oai(status = 200)]
    Ok(Json<CheckInResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
