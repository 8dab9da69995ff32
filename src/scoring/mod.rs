//! 申请计分引擎
//!
//! 保存申请与排名导出共用的纯函数层，不做任何 I/O：
//! - `rubric`: 评分解析（评分表查找 + 集体奖减半）
//! - `aggregate`: 类目聚合（封顶、加权、总分）
//! - `reconcile`: 材料与附件的增量对账（增/改/删计划）
//!
//! 存储层在一个数据库事务内调用这里的函数并落库，
//! 排名查询用同一套实现重算类目拆解，保证两处口径一致。

pub mod aggregate;
pub mod reconcile;
pub mod rubric;

pub use aggregate::{CategoryRule, ScoreSummary, aggregate_scores};
pub use reconcile::{
    AttachmentPlan, ExistingMaterial, MaterialKey, MaterialPlan, reconcile_attachments,
    reconcile_materials,
};
pub use rubric::{ResolvedScore, RubricTable};
