pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ListParams;
use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 获取班级列表
    pub async fn list_classes(
        &self,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, params, request).await
    }

    // 获取班级详情
    pub async fn get_class(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_class(self, id, request).await
    }

    // 创建班级
    pub async fn create_class(
        &self,
        data: CreateClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, data, request).await
    }

    // 更新班级
    pub async fn update_class(
        &self,
        id: i64,
        data: UpdateClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, id, data, request).await
    }

    // 删除班级
    pub async fn delete_class(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_class(self, id, request).await
    }
}
