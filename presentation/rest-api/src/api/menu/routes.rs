use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::menu::use_cases::get_today::GetTodaysMenuUseCase;
use business::domain::menu::use_cases::set_today::{SetTodaysMenuParams, SetTodaysMenuUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::menu::dto::{MenuItemResponse, SetTodaysMenuRequest};
use crate::api::tags::ApiTags;

pub struct MenuApi {
    set_today_use_case: Arc<dyn SetTodaysMenuUseCase>,
    get_today_use_case: Arc<dyn GetTodaysMenuUseCase>,
}

impl MenuApi {
    pub fn new(
        set_today_use_case: Arc<dyn SetTodaysMenuUseCase>,
        get_today_use_case: Arc<dyn GetTodaysMenuUseCase>,
    ) -> Self {
        Self {
            set_today_use_case,
            get_today_use_case,
        }
    }
}

/// Today's menu API
#[OpenApi]
impl MenuApi {
    /// Set today's menu
    ///
    /// Replaces today's menu with the given catalog dishes.
    #[oai(path = "/menu/today", method = "put", tag = "ApiTags::Menu")]
    async fn set_today(&self, body: Json<SetTodaysMenuRequest>) -> SetTodaysMenuResponse {
        match self
            .set_today_use_case
            .execute(SetTodaysMenuParams {
                dish_ids: body.0.dish_ids,
            })
            .await
        {
            Ok(items) => {
                SetTodaysMenuResponse::Ok(Json(items.into_iter().map(|i| i.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SetTodaysMenuResponse::BadRequest(json),
                    _ => SetTodaysMenuResponse::InternalError(json),
                }
            }
        }
    }

    /// Get today's menu
    #[oai(path = "/menu/today", method = "get", tag = "ApiTags::Menu")]
    async fn get_today(&self) -> GetTodaysMenuResponse {
        match self.get_today_use_case.execute().await {
            Ok(items) => {
                GetTodaysMenuResponse::Ok(Json(items.into_iter().map(|i| i.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetTodaysMenuResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetTodaysMenuResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MenuItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTodaysMenuResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MenuItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
