//! 评分解析
//!
//! 评分表以 (奖项, 级别, 等第) 为键给出基础分。未配置的组合按 0 分处理，
//! 属于管理员尚未完善配置的正常情况，不是错误。
//! 集体奖一律按基础分减半（向下取整）计入；客户端声明的分数从不采信。

use std::collections::HashMap;

use crate::models::applications::entities::{AwardGrade, AwardLevel, AwardType};

/// 解析结果：raw_score 为评分表基础分，score 为实际计入分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedScore {
    pub raw_score: i32,
    pub score: i32,
}

/// 内存中的评分表，由 item_scores 行构建
#[derive(Debug, Clone, Default)]
pub struct RubricTable {
    scores: HashMap<(i64, AwardLevel, AwardGrade), i32>,
}

impl RubricTable {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i64, AwardLevel, AwardGrade, i32)>,
    {
        let scores = entries
            .into_iter()
            .map(|(item_id, level, grade, score)| ((item_id, level, grade), score))
            .collect();
        Self { scores }
    }

    /// 查评分表基础分，未配置返回 0
    pub fn base_score(&self, item_id: i64, level: AwardLevel, grade: AwardGrade) -> i32 {
        self.scores
            .get(&(item_id, level, grade))
            .copied()
            .unwrap_or(0)
    }

    /// 解析最终计入分：集体奖减半（向下取整）
    pub fn resolve(
        &self,
        item_id: i64,
        level: AwardLevel,
        grade: AwardGrade,
        award_type: AwardType,
    ) -> ResolvedScore {
        let raw_score = self.base_score(item_id, level, grade);
        let score = match award_type {
            AwardType::Individual => raw_score,
            AwardType::Team => raw_score / 2,
        };
        ResolvedScore { raw_score, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RubricTable {
        RubricTable::from_entries([
            (1, AwardLevel::National, AwardGrade::First, 100),
            (1, AwardLevel::National, AwardGrade::Second, 85),
            (1, AwardLevel::Provincial, AwardGrade::First, 75),
            (2, AwardLevel::University, AwardGrade::None, 15),
        ])
    }

    #[test]
    fn test_individual_uses_base_score() {
        let resolved = table().resolve(
            1,
            AwardLevel::National,
            AwardGrade::First,
            AwardType::Individual,
        );
        assert_eq!(resolved.raw_score, 100);
        assert_eq!(resolved.score, 100);
    }

    #[test]
    fn test_team_award_halved() {
        let resolved = table().resolve(1, AwardLevel::National, AwardGrade::First, AwardType::Team);
        assert_eq!(resolved.raw_score, 100);
        assert_eq!(resolved.score, 50);
    }

    #[test]
    fn test_team_halving_floors() {
        // 75 / 2 = 37.5 → 37
        let resolved = table().resolve(
            1,
            AwardLevel::Provincial,
            AwardGrade::First,
            AwardType::Team,
        );
        assert_eq!(resolved.score, 37);
    }

    #[test]
    fn test_missing_entry_scores_zero() {
        // 未配置的组合与未知奖项都按 0 分，不报错
        let t = table();
        let missing = t.resolve(
            1,
            AwardLevel::Municipal,
            AwardGrade::Third,
            AwardType::Individual,
        );
        assert_eq!(missing, ResolvedScore { raw_score: 0, score: 0 });

        let unknown_item = t.resolve(
            999,
            AwardLevel::National,
            AwardGrade::First,
            AwardType::Team,
        );
        assert_eq!(unknown_item, ResolvedScore { raw_score: 0, score: 0 });
    }
}
