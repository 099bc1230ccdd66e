//! 分页元数据与分页器
//!
//! `Pager` 是纯派生状态：给定当前页、每页条数和总条数，
//! 计算末页、上一页/下一页可用性、页码按钮行，以及页切换时的查询串重写。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::list_query::{ListParams, PAGE_PARAM};

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    pub fn new(page: u64, page_size: u64, total: u64) -> Self {
        let pager = Pager {
            current_page: page,
            page_size,
            total,
        };

        Self {
            page: page as i64,
            page_size: page_size as i64,
            total: total as i64,
            total_pages: pager.last_page() as i64,
        }
    }
}

/// 分页器（每次请求重新派生，无持久状态）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current_page: u64,
    pub page_size: u64,
    pub total: u64,
}

/// 页码按钮行中的单个控件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageControl {
    /// 普通页码按钮
    Page { number: u64, current: bool },
    /// 跳页控件（固定跳到第 6 页）
    Jump { target: u64 },
}

impl Pager {
    /// 末页页号；total == 0 时为 0
    pub fn last_page(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page()
    }

    /// 页码按钮行
    ///
    /// 显示前 5 页；当前页在第 5 页之后时额外显示当前页按钮；
    /// 第 6 个位置放一个跳到第 6 页的省略控件（除非当前页恰好是第 6 页）。
    pub fn controls(&self) -> Vec<PageControl> {
        let mut controls = Vec::new();

        for index in 0..self.last_page() {
            if index < 5 || index + 1 == self.current_page {
                controls.push(PageControl::Page {
                    number: index + 1,
                    current: index + 1 == self.current_page,
                });
            } else if index == 5 {
                controls.push(PageControl::Jump { target: 6 });
            }
        }

        controls
    }

    /// 生成指向目标页的查询串：重写 page，保留其余过滤键
    ///
    /// 非 page 键按字典序输出，保证同一组参数总是产生同一个串。
    pub fn query_for_page(&self, params: &ListParams, page: u64) -> String {
        let mut pairs: Vec<(&str, &str)> = params
            .iter()
            .filter(|(key, _)| *key != PAGE_PARAM)
            .collect();
        pairs.sort();

        let page_value = page.to_string();
        pairs.push((PAGE_PARAM, page_value.as_str()));

        pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// 下一页的查询串（末页或空结果时为 None）
    pub fn next_query(&self, params: &ListParams) -> Option<String> {
        self.has_next()
            .then(|| self.query_for_page(params, self.current_page + 1))
    }

    /// 上一页的查询串（首页时为 None）
    pub fn prev_query(&self, params: &ListParams) -> Option<String> {
        self.has_prev()
            .then(|| self.query_for_page(params, self.current_page - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        pairs.iter().copied().collect()
    }

    fn pager(current_page: u64, total: u64) -> Pager {
        Pager {
            current_page,
            page_size: 10,
            total,
        }
    }

    #[test]
    fn test_last_page_rounds_up() {
        assert_eq!(pager(1, 0).last_page(), 0);
        assert_eq!(pager(1, 1).last_page(), 1);
        assert_eq!(pager(1, 10).last_page(), 1);
        assert_eq!(pager(1, 11).last_page(), 2);
        assert_eq!(pager(1, 95).last_page(), 10);
    }

    #[test]
    fn test_empty_result_disables_everything() {
        let empty = pager(1, 0);
        assert_eq!(empty.last_page(), 0);
        assert!(!empty.has_prev());
        assert!(!empty.has_next());
        assert!(empty.controls().is_empty());
    }

    #[test]
    fn test_prev_next_enablement() {
        assert!(!pager(1, 50).has_prev());
        assert!(pager(1, 50).has_next());
        assert!(pager(3, 50).has_prev());
        assert!(pager(3, 50).has_next());
        assert!(pager(5, 50).has_prev());
        assert!(!pager(5, 50).has_next());
    }

    #[test]
    fn test_controls_within_first_five_pages() {
        let controls = pager(2, 30).controls();
        assert_eq!(
            controls,
            vec![
                PageControl::Page { number: 1, current: false },
                PageControl::Page { number: 2, current: true },
                PageControl::Page { number: 3, current: false },
            ]
        );
    }

    #[test]
    fn test_controls_show_jump_after_fifth_page() {
        let controls = pager(2, 100).controls();
        assert_eq!(controls.len(), 6);
        assert_eq!(controls[4], PageControl::Page { number: 5, current: false });
        assert_eq!(controls[5], PageControl::Jump { target: 6 });
    }

    #[test]
    fn test_controls_include_distant_current_page() {
        let controls = pager(8, 100).controls();
        assert_eq!(
            controls.last(),
            Some(&PageControl::Page { number: 8, current: true })
        );
        assert!(controls.contains(&PageControl::Jump { target: 6 }));
    }

    #[test]
    fn test_current_page_six_replaces_jump() {
        let controls = pager(6, 100).controls();
        assert!(controls.contains(&PageControl::Page { number: 6, current: true }));
        assert!(!controls.contains(&PageControl::Jump { target: 6 }));
    }

    #[test]
    fn test_next_transition_preserves_filter_keys() {
        let current = pager(2, 100);
        let query = current
            .next_query(&params(&[("classId", "3"), ("page", "2")]))
            .unwrap();
        assert_eq!(query, "classId=3&page=3");
    }

    #[test]
    fn test_prev_transition_rewrites_page_only() {
        let current = pager(3, 100);
        let query = current
            .prev_query(&params(&[("search", "math"), ("teacherId", "9"), ("page", "3")]))
            .unwrap();
        assert_eq!(query, "search=math&teacherId=9&page=2");
    }

    #[test]
    fn test_transitions_at_bounds() {
        assert_eq!(pager(1, 100).prev_query(&params(&[])), None);
        assert_eq!(pager(10, 100).next_query(&params(&[])), None);
        assert_eq!(pager(1, 0).next_query(&params(&[])), None);
    }

    #[test]
    fn test_pagination_info_total_pages() {
        let info = PaginationInfo::new(2, 10, 45);
        assert_eq!(info.page, 2);
        assert_eq!(info.page_size, 10);
        assert_eq!(info.total, 45);
        assert_eq!(info.total_pages, 5);

        assert_eq!(PaginationInfo::new(1, 10, 0).total_pages, 0);
    }
}
