pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ListParams;
use crate::models::announcements::requests::{CreateAnnouncementRequest, UpdateAnnouncementRequest};
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
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

    // 获取公告列表
    pub async fn list_announcements(
        &self,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_announcements(self, params, request).await
    }

    // 创建公告
    pub async fn create_announcement(
        &self,
        data: CreateAnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_announcement(self, data, request).await
    }

    // 更新公告
    pub async fn update_announcement(
        &self,
        id: i64,
        data: UpdateAnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_announcement(self, id, data, request).await
    }

    // 删除公告
    pub async fn delete_announcement(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_announcement(self, id, request).await
    }
}
