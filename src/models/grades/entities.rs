use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 年级实体（level 0 代表幼儿园）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub level: i32,
}

impl Grade {
    /// 表格展示名：K、1、2……
    pub fn display_name(&self) -> String {
        if self.level == 0 {
            "K".to_string()
        } else {
            self.level.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kindergarten_display_name() {
        assert_eq!(Grade { id: 1, level: 0 }.display_name(), "K");
        assert_eq!(Grade { id: 2, level: 7 }.display_name(), "7");
    }
}
