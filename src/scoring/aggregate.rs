//! 类目聚合
//!
//! 把解析后的材料分按类目求和，应用可选的 100 分封顶，再按权重折算
//! 贡献分，总分为各类目贡献之和。
//!
//! 计算全程使用整数厘分（contribution × 100），最后一步才转 f64，
//! 避免浮点累加误差，保证保存与排名两条路径逐分一致。

use crate::models::applications::responses::CategoryScore;

/// 类目原始分封顶值
pub const CATEGORY_SCORE_CAP: i64 = 100;

/// 参与聚合的类目配置（来自 categories 表）
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category_id: i64,
    pub name: String,
    pub score_ratio: i32,
    pub has_score_cap: bool,
}

/// 聚合结果
#[derive(Debug, Clone)]
pub struct ScoreSummary {
    pub categories: Vec<CategoryScore>,
    total_centi: i64,
}

impl ScoreSummary {
    /// 总分（精确到 0.01）
    pub fn total(&self) -> f64 {
        self.total_centi as f64 / 100.0
    }
}

/// 按类目聚合材料分数
///
/// `materials` 为 (category_id, 计入分) 对；没有材料的类目不出现在结果里。
/// 材料引用了未知类目时该类目无法加权，直接忽略（外键保证正常不会发生）。
pub fn aggregate_scores(materials: &[(i64, i32)], rules: &[CategoryRule]) -> ScoreSummary {
    let mut sums: std::collections::HashMap<i64, i64> = std::collections::HashMap::new();
    for (category_id, score) in materials {
        *sums.entry(*category_id).or_insert(0) += i64::from(*score);
    }

    let mut categories = Vec::new();
    let mut total_centi = 0i64;

    for rule in rules {
        let Some(&raw_score) = sums.get(&rule.category_id) else {
            continue;
        };

        let effective_score = if rule.has_score_cap {
            raw_score.min(CATEGORY_SCORE_CAP)
        } else {
            raw_score
        };

        // effective × ratio 即厘分（effective × ratio / 100 的百倍）
        let contribution_centi = effective_score * i64::from(rule.score_ratio);
        total_centi += contribution_centi;

        categories.push(CategoryScore {
            category_id: rule.category_id,
            category_name: rule.name.clone(),
            raw_score,
            effective_score,
            score_ratio: rule.score_ratio,
            has_cap: rule.has_score_cap,
            contribution: contribution_centi as f64 / 100.0,
        });
    }

    ScoreSummary {
        categories,
        total_centi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: i64, name: &str, ratio: i32, cap: bool) -> CategoryRule {
        CategoryRule {
            category_id: id,
            name: name.to_string(),
            score_ratio: ratio,
            has_score_cap: cap,
        }
    }

    #[test]
    fn test_cap_limits_effective_score() {
        // 封顶类目：原始 150 → 有效 100，权重 30 → 贡献 30
        let rules = [rule(1, "竞赛获奖", 30, true)];
        let summary = aggregate_scores(&[(1, 90), (1, 60)], &rules);

        assert_eq!(summary.categories.len(), 1);
        let cat = &summary.categories[0];
        assert_eq!(cat.raw_score, 150);
        assert_eq!(cat.effective_score, 100);
        assert_eq!(cat.contribution, 30.0);
        assert_eq!(summary.total(), 30.0);
    }

    #[test]
    fn test_no_cap_keeps_raw_score() {
        // 同样的 150 分不封顶时贡献 45
        let rules = [rule(1, "竞赛获奖", 30, false)];
        let summary = aggregate_scores(&[(1, 90), (1, 60)], &rules);

        let cat = &summary.categories[0];
        assert_eq!(cat.effective_score, 150);
        assert_eq!(cat.contribution, 45.0);
        assert_eq!(summary.total(), 45.0);
    }

    #[test]
    fn test_multi_category_total() {
        let rules = [
            rule(1, "学业成绩", 60, true),
            rule(2, "科研竞赛", 30, true),
            rule(3, "社会工作", 10, false),
        ];
        let materials = [(1, 88), (2, 40), (2, 25), (3, 12)];
        let summary = aggregate_scores(&materials, &rules);

        // 88*0.6 + 65*0.3 + 12*0.1 = 52.8 + 19.5 + 1.2 = 73.5
        assert_eq!(summary.total(), 73.5);
        assert_eq!(summary.categories.len(), 3);
    }

    #[test]
    fn test_fractional_contribution_is_exact() {
        // 有效 33 × 权重 33 = 10.89，厘分运算不产生浮点漂移
        let rules = [rule(1, "文体活动", 33, false)];
        let summary = aggregate_scores(&[(1, 33)], &rules);
        assert_eq!(summary.categories[0].contribution, 10.89);
        assert_eq!(summary.total(), 10.89);
    }

    #[test]
    fn test_empty_and_unmatched_categories() {
        let rules = [rule(1, "学业成绩", 60, true)];
        // 没有任何材料
        let summary = aggregate_scores(&[], &rules);
        assert!(summary.categories.is_empty());
        assert_eq!(summary.total(), 0.0);

        // 材料引用了规则之外的类目
        let summary = aggregate_scores(&[(99, 50)], &rules);
        assert!(summary.categories.is_empty());
        assert_eq!(summary.total(), 0.0);
    }
}
