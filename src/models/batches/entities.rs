use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 批次状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub enum BatchStatus {
    Open,   // 开放申请
    Closed, // 已截止
}

impl<'de> Deserialize<'de> for BatchStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "open" => Ok(BatchStatus::Open),
            "closed" => Ok(BatchStatus::Closed),
            _ => Err(serde::de::Error::custom(format!(
                "无效的批次状态: '{s}'. 支持的状态: open, closed"
            ))),
        }
    }
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchStatus::Open => write!(f, "open"),
            BatchStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for BatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(BatchStatus::Open),
            "closed" => Ok(BatchStatus::Closed),
            _ => Err(format!("Invalid batch status: {s}")),
        }
    }
}

// 申请批次（一个奖学金评定周期）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct Batch {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub status: BatchStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
