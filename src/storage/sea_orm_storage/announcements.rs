//! 公告存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements, Relation};
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query, parse_id};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    announcements::{
        entities::Announcement,
        requests::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
        responses::{AnnouncementListItem, AnnouncementListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

// 识别键表：classId 精确匹配，search 在班级名与公告标题上做 OR 模糊匹配
static ANNOUNCEMENT_FILTERS: FilterSpec = FilterSpec {
    entries: &[
        ("classId", |value| {
            parse_id(value).map(|id| Condition::all().add(Column::ClassId.eq(id)))
        }),
        ("search", |value| {
            Some(
                Condition::any()
                    .add(contains_insensitive(Classes, ClassColumn::Name, value))
                    .add(contains_insensitive(Announcements, Column::Title, value)),
            )
        }),
    ],
};

impl SeaOrmStorage {
    /// 创建公告
    pub async fn create_announcement_impl(
        &self,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            date: Set(req.date.timestamp()),
            class_id: Set(req.class_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 分页列出公告（附带班级名）
    pub async fn list_announcements_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<AnnouncementListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &ANNOUNCEMENT_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, announcements) = {
            // class_id 可空（全校公告），左连接保留无班级的行
            let paginator = Announcements::find()
                .join(JoinType::LeftJoin, Relation::Class.def())
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询公告总数失败: {e}"))
            })?;

            let announcements =
                paginator.fetch_page(window.page_index()).await.map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询公告列表失败: {e}"))
                })?;

            (total, announcements)
        };

        // 批量取班级名
        let class_ids: Vec<i64> = announcements.iter().filter_map(|a| a.class_id).collect();
        let mut class_map: HashMap<i64, String> = HashMap::new();
        if !class_ids.is_empty() {
            for class in Classes::find()
                .filter(ClassColumn::Id.is_in(class_ids))
                .all(&txn)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?
            {
                class_map.insert(class.id, class.name);
            }
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let items = announcements
            .into_iter()
            .map(|model| AnnouncementListItem {
                class_name: model.class_id.and_then(|id| class_map.get(&id).cloned()),
                announcement: model.into_announcement(),
            })
            .collect();

        Ok(AnnouncementListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新公告
    pub async fn update_announcement_impl(
        &self,
        announcement_id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        let existing = Announcements::find_by_id(announcement_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询公告失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(announcement_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if let Some(date) = update.date {
            model.date = Set(date.timestamp());
        }

        if let Some(class_id) = update.class_id {
            model.class_id = Set(Some(class_id));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新公告失败: {e}")))?;

        Ok(Some(result.into_announcement()))
    }

    /// 删除公告
    pub async fn delete_announcement_impl(&self, announcement_id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(announcement_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
