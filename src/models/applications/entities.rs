use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 申请状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub enum ApplicationStatus {
    Pending,  // 待审核
    Approved, // 已通过
    Rejected, // 已驳回
}

impl ApplicationStatus {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";

    /// 是否允许学生重新提交
    ///
    /// approved 为终态：既不能重新提交也不能再次审核。
    pub fn allows_resubmission(&self) -> bool {
        !matches!(self, ApplicationStatus::Approved)
    }

    /// 审核动作只接受 approved / rejected
    pub fn is_review_verdict(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Approved | ApplicationStatus::Rejected
        )
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "{}", Self::PENDING),
            ApplicationStatus::Approved => write!(f, "{}", Self::APPROVED),
            ApplicationStatus::Rejected => write!(f, "{}", Self::REJECTED),
        }
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PENDING => Ok(ApplicationStatus::Pending),
            Self::APPROVED => Ok(ApplicationStatus::Approved),
            Self::REJECTED => Ok(ApplicationStatus::Rejected),
            _ => Err(format!(
                "无效的申请状态: '{s}'. 支持的状态: pending, approved, rejected"
            )),
        }
    }
}

// 奖项级别
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub enum AwardLevel {
    National,   // 国家级
    Provincial, // 省级
    Municipal,  // 市级
    University, // 校级
    College,    // 院级
    Ungraded,   // 不分级
}

impl AwardLevel {
    /// 评分表的固定级别集合，顺序即展示顺序
    pub fn all() -> &'static [AwardLevel] {
        &[
            AwardLevel::National,
            AwardLevel::Provincial,
            AwardLevel::Municipal,
            AwardLevel::University,
            AwardLevel::College,
            AwardLevel::Ungraded,
        ]
    }
}

impl<'de> Deserialize<'de> for AwardLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AwardLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AwardLevel::National => "national",
            AwardLevel::Provincial => "provincial",
            AwardLevel::Municipal => "municipal",
            AwardLevel::University => "university",
            AwardLevel::College => "college",
            AwardLevel::Ungraded => "ungraded",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AwardLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "national" => Ok(AwardLevel::National),
            "provincial" => Ok(AwardLevel::Provincial),
            "municipal" => Ok(AwardLevel::Municipal),
            "university" => Ok(AwardLevel::University),
            "college" => Ok(AwardLevel::College),
            "ungraded" => Ok(AwardLevel::Ungraded),
            _ => Err(format!(
                "无效的奖项级别: '{s}'. 支持: national, provincial, municipal, university, college, ungraded"
            )),
        }
    }
}

// 奖项等第
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub enum AwardGrade {
    First,  // 一等
    Second, // 二等
    Third,  // 三等
    None,   // 无等第
}

impl AwardGrade {
    /// 评分表的固定等第集合
    pub fn all() -> &'static [AwardGrade] {
        &[
            AwardGrade::First,
            AwardGrade::Second,
            AwardGrade::Third,
            AwardGrade::None,
        ]
    }
}

impl<'de> Deserialize<'de> for AwardGrade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AwardGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AwardGrade::First => "first",
            AwardGrade::Second => "second",
            AwardGrade::Third => "third",
            AwardGrade::None => "none",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AwardGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(AwardGrade::First),
            "second" => Ok(AwardGrade::Second),
            "third" => Ok(AwardGrade::Third),
            "none" => Ok(AwardGrade::None),
            _ => Err(format!(
                "无效的奖项等第: '{s}'. 支持: first, second, third, none"
            )),
        }
    }
}

// 获奖类型：集体奖计分减半
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub enum AwardType {
    Individual, // 个人奖
    Team,       // 集体奖
}

impl<'de> Deserialize<'de> for AwardType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AwardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AwardType::Individual => write!(f, "individual"),
            AwardType::Team => write!(f, "team"),
        }
    }
}

impl std::str::FromStr for AwardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(AwardType::Individual),
            "team" => Ok(AwardType::Team),
            _ => Err(format!("无效的获奖类型: '{s}'. 支持: individual, team")),
        }
    }
}

// 申请实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct Application {
    pub id: i64,
    pub user_id: i64,
    pub batch_id: i64,
    pub status: ApplicationStatus,
    pub total_score: f64,
    pub review_comment: Option<String>,
    pub reviewer_id: Option<i64>,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 申请材料实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct MaterialEntry {
    pub id: i64,
    pub application_id: i64,
    pub category_id: i64,
    pub item_id: i64,
    pub award_level: AwardLevel,
    pub award_grade: AwardGrade,
    pub award_type: AwardType,
    // 评分表原始分（减半前）
    pub raw_score: i32,
    // 实际计入的分数（集体奖减半后）
    pub score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_state_machine() {
        assert!(ApplicationStatus::Pending.allows_resubmission());
        assert!(ApplicationStatus::Rejected.allows_resubmission());
        // approved 为终态
        assert!(!ApplicationStatus::Approved.allows_resubmission());
    }

    #[test]
    fn test_review_verdicts() {
        assert!(ApplicationStatus::Approved.is_review_verdict());
        assert!(ApplicationStatus::Rejected.is_review_verdict());
        assert!(!ApplicationStatus::Pending.is_review_verdict());
    }

    #[test]
    fn test_enum_round_trip() {
        for level in AwardLevel::all() {
            assert_eq!(level.to_string().parse::<AwardLevel>().unwrap(), *level);
        }
        for grade in AwardGrade::all() {
            assert_eq!(grade.to_string().parse::<AwardGrade>().unwrap(), *grade);
        }
        assert_eq!("team".parse::<AwardType>().unwrap(), AwardType::Team);
        assert!("collective".parse::<AwardType>().is_err());
    }
}
