pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ListParams;
use crate::models::parents::requests::{CreateParentRequest, UpdateParentRequest};
use crate::storage::Storage;

pub struct ParentService {
    storage: Option<Arc<dyn Storage>>,
}

impl ParentService {
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

    // 获取家长列表
    pub async fn list_parents(
        &self,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_parents(self, params, request).await
    }

    // 创建家长
    pub async fn create_parent(
        &self,
        data: CreateParentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_parent(self, data, request).await
    }

    // 更新家长
    pub async fn update_parent(
        &self,
        id: i64,
        data: UpdateParentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_parent(self, id, data, request).await
    }

    // 删除家长
    pub async fn delete_parent(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_parent(self, id, request).await
    }
}
