use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::results::requests::CreateResultRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_result(
    service: &ResultService,
    data: CreateResultRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 考核来源必须二选一
    if data.exam_id.is_some() == data.assignment_id.is_some() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Exactly one of exam_id and assignment_id must be provided",
        )));
    }

    if !(0..=100).contains(&data.score) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Score must be between 0 and 100",
        )));
    }

    match storage.create_result(data).await {
        Ok(created) => Ok(HttpResponse::Created().json(ApiResponse::success(
            created,
            "Result created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create result: {e}"),
            )),
        ),
    }
}
