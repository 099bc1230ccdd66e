pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ListParams;
use crate::models::results::requests::{CreateResultRequest, UpdateResultRequest};
use crate::storage::Storage;

pub struct ResultService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResultService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取成绩列表
    pub async fn list_results(
        &self,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_results(self, params, request).await
    }

    // 创建成绩
    pub async fn create_result(
        &self,
        data: CreateResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_result(self, data, request).await
    }

    // 更新成绩
    pub async fn update_result(
        &self,
        id: i64,
        data: UpdateResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_result(self, id, data, request).await
    }

    // 删除成绩
    pub async fn delete_result(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_result(self, id, request).await
    }
}
