use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ListParams;
use crate::models::results::requests::{CreateResultRequest, UpdateResultRequest};
use crate::models::users::entities::UserRole;
use crate::services::ResultService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ResultService 实例
static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

// HTTP处理程序
pub async fn list_results(
    req: HttpRequest,
    params: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.list_results(params.into_inner(), &req).await
}

pub async fn create_result(
    req: HttpRequest,
    data: web::Json<CreateResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.create_result(data.into_inner(), &req).await
}

pub async fn update_result(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.update_result(id.0, data.into_inner(), &req).await
}

pub async fn delete_result(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.delete_result(id.0, &req).await
}

// 配置路由
pub fn configure_results_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/results")
            .wrap(middlewares::RequireJWT)
            .service(
                // 所有角色可查询成绩列表，写操作按角色限制
                web::resource("")
                    .route(web::get().to(list_results))
                    .route(
                        web::post()
                            .to(create_result)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::put()
                            .to(update_result)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_result)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
