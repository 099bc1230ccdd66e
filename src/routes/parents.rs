use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ListParams;
use crate::models::parents::requests::{CreateParentRequest, UpdateParentRequest};
use crate::models::users::entities::UserRole;
use crate::services::ParentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ParentService 实例
static PARENT_SERVICE: Lazy<ParentService> = Lazy::new(ParentService::new_lazy);

// HTTP处理程序
pub async fn list_parents(
    req: HttpRequest,
    params: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.list_parents(params.into_inner(), &req).await
}

pub async fn create_parent(
    req: HttpRequest,
    data: web::Json<CreateParentRequest>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.create_parent(data.into_inner(), &req).await
}

pub async fn update_parent(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateParentRequest>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.update_parent(id.0, data.into_inner(), &req).await
}

pub async fn delete_parent(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.delete_parent(id.0, &req).await
}

// 配置路由
pub fn configure_parents_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/parents")
            .wrap(middlewares::RequireJWT)
            .service(
                // 所有角色可查询家长列表，写操作按角色限制
                web::resource("")
                    .route(web::get().to(list_parents))
                    .route(
                        web::post()
                            .to(create_parent)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::put()
                            .to(update_parent)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_parent)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
