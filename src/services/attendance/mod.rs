pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ListParams;
use crate::models::attendance::requests::{CreateAttendanceRequest, UpdateAttendanceRequest};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 获取出勤记录列表
    pub async fn list_attendance(
        &self,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, params, request).await
    }

    // 创建出勤记录
    pub async fn create_attendance(
        &self,
        data: CreateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_attendance(self, data, request).await
    }

    // 更新出勤记录
    pub async fn update_attendance(
        &self,
        id: i64,
        data: UpdateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attendance(self, id, data, request).await
    }

    // 删除出勤记录
    pub async fn delete_attendance(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_attendance(self, id, request).await
    }
}
