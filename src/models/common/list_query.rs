//! 列表查询构造
//!
//! 把 URL 查询参数统一转换为「过滤条件 + 分页窗口」。
//! 每个实体在存储层声明一张静态的「识别键 → 谓词构造函数」表，
//! 未识别的键一律静默忽略，无效的值退化为「不加限制」。

use std::collections::HashMap;

use sea_orm::Condition;
use serde::Deserialize;

/// 每页条数（编译期固定）
pub const ITEMS_PER_PAGE: u64 = 10;

/// 保留的分页参数名
pub const PAGE_PARAM: &str = "page";

/// 原始查询参数映射
///
/// 除保留键 `page` 外，其余键都是实体相关的过滤提示。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ListParams(pub HashMap<String, String>);

impl ListParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 当前请求的搜索词（用于回显）
    pub fn search(&self) -> Option<&str> {
        self.get("search").filter(|s| !s.trim().is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ListParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// 分页窗口
///
/// 不变量：`skip == (current_page - 1) * take`，`current_page >= 1`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: u64,
    pub skip: u64,
    pub take: u64,
}

impl PageWindow {
    /// 从 `page` 参数派生分页窗口
    ///
    /// 缺失、非数字、零或负数都回退到第 1 页。
    pub fn new(params: &ListParams, page_size: u64) -> Self {
        let current_page = params
            .get(PAGE_PARAM)
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);

        Self {
            current_page,
            skip: (current_page - 1) * page_size,
            take: page_size,
        }
    }

    /// 分页器使用的从 0 开始的页索引
    pub fn page_index(&self) -> u64 {
        self.current_page - 1
    }
}

/// 谓词构造函数：参数值 → 条件片段
///
/// 返回 None 表示该值不可用（例如外键参数不是数字），此时该键被忽略。
pub type PredicateBuilder = fn(&str) -> Option<Condition>;

/// 实体的识别键表（声明式过滤分发）
pub struct FilterSpec {
    pub entries: &'static [(&'static str, PredicateBuilder)],
}

impl FilterSpec {
    /// 把原始参数映射编译为一棵 AND 条件树
    ///
    /// 按识别键表的声明顺序查找参数，保证同一组参数总是产生同一棵条件树。
    /// 未识别键（含保留键 `page`）、空值、构造失败的键都不产生条件。
    pub fn build(&self, params: &ListParams) -> Condition {
        let mut filter = Condition::all();

        for (key, build) in self.entries {
            let Some(value) = params.get(key) else {
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }

            if let Some(predicate) = build(value) {
                filter = filter.add(predicate);
            }
        }

        filter
    }
}

/// 列表查询中间值：过滤条件 + 分页窗口
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub filter: Condition,
    pub window: PageWindow,
}

/// 列表查询构造入口（纯函数，不做 I/O）
pub fn build_list_query(params: &ListParams, spec: &FilterSpec, page_size: u64) -> ListQuery {
    ListQuery {
        filter: spec.build(params),
        window: PageWindow::new(params, page_size),
    }
}

/// 解析外键参数值
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::lessons;
    use sea_orm::ColumnTrait;

    static TEST_FILTERS: FilterSpec = FilterSpec {
        entries: &[
            ("classId", |value| {
                parse_id(value).map(|id| Condition::all().add(lessons::Column::ClassId.eq(id)))
            }),
            ("teacherId", |value| {
                parse_id(value).map(|id| Condition::all().add(lessons::Column::TeacherId.eq(id)))
            }),
            ("search", |value| {
                Some(Condition::all().add(lessons::Column::Name.contains(value)))
            }),
        ],
    };

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_window_arithmetic() {
        for (page, size, skip) in [(1u64, 10u64, 0u64), (2, 10, 10), (3, 25, 50), (7, 1, 6)] {
            let window = PageWindow::new(&params(&[("page", &page.to_string())]), size);
            assert_eq!(window.current_page, page);
            assert_eq!(window.skip, skip);
            assert_eq!(window.take, size);
            assert_eq!(window.skip, (window.current_page - 1) * size);
        }
    }

    #[test]
    fn test_window_defaults_to_first_page() {
        for raw in ["abc", "", " ", "0", "-3", "1.5"] {
            let window = PageWindow::new(&params(&[("page", raw)]), ITEMS_PER_PAGE);
            assert_eq!(window.current_page, 1, "page={raw:?}");
            assert_eq!(window.skip, 0);
        }

        let window = PageWindow::new(&params(&[]), ITEMS_PER_PAGE);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.skip, 0);
    }

    #[test]
    fn test_empty_params_build_no_restriction() {
        let query = build_list_query(&params(&[]), &TEST_FILTERS, ITEMS_PER_PAGE);
        assert_eq!(query.filter, Condition::all());
        assert_eq!(query.window.current_page, 1);
        assert_eq!(query.window.skip, 0);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let with_unknown = TEST_FILTERS.build(&params(&[("color", "red"), ("classId", "7")]));
        let without = TEST_FILTERS.build(&params(&[("classId", "7")]));
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn test_page_key_is_reserved() {
        let filter = TEST_FILTERS.build(&params(&[("page", "3")]));
        assert_eq!(filter, Condition::all());
    }

    #[test]
    fn test_unparsable_id_degrades_to_no_restriction() {
        let filter = TEST_FILTERS.build(&params(&[("classId", "7A")]));
        assert_eq!(filter, Condition::all());
    }

    #[test]
    fn test_class_filter_on_second_page() {
        let query = build_list_query(
            &params(&[("page", "2"), ("classId", "7")]),
            &TEST_FILTERS,
            10,
        );
        assert_eq!(query.window.skip, 10);
        assert_eq!(query.window.take, 10);

        let expected = Condition::all()
            .add(Condition::all().add(lessons::Column::ClassId.eq(7i64)));
        assert_eq!(query.filter, expected);
    }

    #[test]
    fn test_structural_and_search_keys_compose() {
        let filter = TEST_FILTERS.build(&params(&[("teacherId", "4"), ("search", "math")]));
        // 两个识别键各产生一个条件片段，按 AND 组合
        assert_ne!(filter, Condition::all());
        assert_ne!(
            filter,
            TEST_FILTERS.build(&params(&[("teacherId", "4")]))
        );
        assert_ne!(filter, TEST_FILTERS.build(&params(&[("search", "math")])));
    }
}
