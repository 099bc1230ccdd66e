//! 校园活动存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::events::{ActiveModel, Column, Entity as Events, Relation};
use crate::errors::{Result, SchoolSystemError};
use crate::models::common::list_query::{FilterSpec, ListQuery, build_list_query, parse_id};
use crate::models::{
    ITEMS_PER_PAGE, ListParams, PaginationInfo,
    events::{
        entities::Event,
        requests::{CreateEventRequest, UpdateEventRequest},
        responses::{EventListItem, EventListResponse},
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

// 识别键表：classId 精确匹配，search 在班级名与活动标题上做 OR 模糊匹配
static EVENT_FILTERS: FilterSpec = FilterSpec {
    entries: &[
        ("classId", |value| {
            parse_id(value).map(|id| Condition::all().add(Column::ClassId.eq(id)))
        }),
        ("search", |value| {
            Some(
                Condition::any()
                    .add(contains_insensitive(Classes, ClassColumn::Name, value))
                    .add(contains_insensitive(Events, Column::Title, value)),
            )
        }),
    ],
};

impl SeaOrmStorage {
    /// 创建活动
    pub async fn create_event_impl(&self, req: CreateEventRequest) -> Result<Event> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            class_id: Set(req.class_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建活动失败: {e}")))?;

        Ok(result.into_event())
    }

    /// 分页列出活动（附带班级名）
    pub async fn list_events_with_pagination_impl(
        &self,
        params: ListParams,
    ) -> Result<EventListResponse> {
        let ListQuery { filter, window } =
            build_list_query(&params, &EVENT_FILTERS, ITEMS_PER_PAGE);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let (total, events) = {
            // class_id 可空（全校活动），左连接保留无班级的行
            let paginator = Events::find()
                .join(JoinType::LeftJoin, Relation::Class.def())
                .filter(filter)
                .order_by_asc(Column::Id)
                .paginate(&txn, window.take);

            let total = paginator.num_items().await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询活动总数失败: {e}"))
            })?;

            let events = paginator.fetch_page(window.page_index()).await.map_err(|e| {
                SchoolSystemError::database_operation(format!("查询活动列表失败: {e}"))
            })?;

            (total, events)
        };

        // 批量取班级名
        let class_ids: Vec<i64> = events.iter().filter_map(|e| e.class_id).collect();
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

        let items = events
            .into_iter()
            .map(|model| EventListItem {
                class_name: model.class_id.and_then(|id| class_map.get(&id).cloned()),
                event: model.into_event(),
            })
            .collect();

        Ok(EventListResponse {
            items,
            pagination: PaginationInfo::new(window.current_page, window.take, total),
        })
    }

    /// 更新活动
    pub async fn update_event_impl(
        &self,
        event_id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>> {
        let existing = Events::find_by_id(event_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询活动失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(event_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time.timestamp());
        }

        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time.timestamp());
        }

        if let Some(class_id) = update.class_id {
            model.class_id = Set(Some(class_id));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新活动失败: {e}")))?;

        Ok(Some(result.into_event()))
    }

    /// 删除活动
    pub async fn delete_event_impl(&self, event_id: i64) -> Result<bool> {
        let result = Events::delete_by_id(event_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除活动失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
