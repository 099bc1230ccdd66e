//! SQL 辅助函数

use sea_orm::sea_query::{Expr, ExprTrait, Func, IntoIden, SimpleExpr};

/// 转义 LIKE 模式中的通配符
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// 大小写不敏感的子串匹配
///
/// Prisma 的 `mode: "insensitive"` 在 SQL 层的等价形式：
/// `LOWER(col) LIKE '%needle%'`（needle 先转小写并转义通配符）。
pub fn contains_insensitive<T, C>(table: T, column: C, needle: &str) -> SimpleExpr
where
    T: IntoIden,
    C: IntoIden,
{
    let pattern = format!(
        "%{}%",
        escape_like_pattern(needle.trim()).to_lowercase()
    );
    Expr::expr(Func::lower(Expr::col((table, column)))).like(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::subjects;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("math"), "math");
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_contains_insensitive_lowercases_needle() {
        let expr = contains_insensitive(subjects::Entity, subjects::Column::Name, "  MaTh ");
        let rendered = format!("{expr:?}");
        assert!(rendered.contains("%math%"), "{rendered}");
    }
}
