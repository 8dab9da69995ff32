//! 材料与附件对账
//!
//! 重新提交是一次全量声明：把来稿与库内已有记录按自然键比对，
//! 得到增/改/删计划，而不是删光重插。这样旧材料的附件在更新时
//! 原地保留，不需要重新上传。

use std::collections::{HashMap, HashSet};

use crate::errors::{Result, ScholarshipError};
use crate::models::applications::requests::{AttachmentRef, MaterialSubmission, NewAttachmentRef};

/// 材料自然键：一个申请内同一奖项只能申报一次
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialKey {
    pub category_id: i64,
    pub item_id: i64,
}

impl MaterialKey {
    pub fn of(submission: &MaterialSubmission) -> Self {
        Self {
            category_id: submission.category_id,
            item_id: submission.item_id,
        }
    }
}

/// 库内已有材料的最小视图
#[derive(Debug, Clone, Copy)]
pub struct ExistingMaterial {
    pub id: i64,
    pub key: MaterialKey,
}

/// 材料对账计划
#[derive(Debug)]
pub struct MaterialPlan<'a> {
    /// 新增：来稿中键不存在于库内的声明
    pub inserts: Vec<&'a MaterialSubmission>,
    /// 更新：键命中库内材料，沿用其 id
    pub updates: Vec<(i64, &'a MaterialSubmission)>,
    /// 删除：库内存在但来稿未声明的材料 id
    pub deletes: Vec<i64>,
}

/// 按自然键比对材料声明
///
/// 来稿中出现重复键属于调用方契约违规，返回 `DuplicateMaterial`，
/// 不做静默合并。
pub fn reconcile_materials<'a>(
    existing: &[ExistingMaterial],
    incoming: &'a [MaterialSubmission],
) -> Result<MaterialPlan<'a>> {
    let existing_by_key: HashMap<MaterialKey, i64> =
        existing.iter().map(|m| (m.key, m.id)).collect();

    let mut seen: HashSet<MaterialKey> = HashSet::with_capacity(incoming.len());
    let mut inserts = Vec::new();
    let mut updates = Vec::new();

    for submission in incoming {
        let key = MaterialKey::of(submission);
        if !seen.insert(key) {
            return Err(ScholarshipError::duplicate_material(format!(
                "材料重复申报: category {} item {}",
                key.category_id, key.item_id
            )));
        }
        match existing_by_key.get(&key) {
            Some(&id) => updates.push((id, submission)),
            None => inserts.push(submission),
        }
    }

    let deletes = existing
        .iter()
        .filter(|m| !seen.contains(&m.key))
        .map(|m| m.id)
        .collect();

    Ok(MaterialPlan {
        inserts,
        updates,
        deletes,
    })
}

/// 附件对账计划
#[derive(Debug, Default)]
pub struct AttachmentPlan<'a> {
    /// 保留：来稿引用且确实存在的附件 id
    pub keeps: Vec<i64>,
    /// 新增：携带暂存元数据的新附件
    pub inserts: Vec<&'a NewAttachmentRef>,
    /// 删除：库内存在但来稿未引用的附件 id
    pub deletes: Vec<i64>,
}

/// 比对单个材料的附件引用
///
/// `incoming` 为 `None` 表示请求未携带 files 字段，附件原样保留；
/// `Some(&[])` 表示显式清空。引用了不属于该材料的 id 时按不存在处理。
pub fn reconcile_attachments<'a>(
    existing_ids: &[i64],
    incoming: Option<&'a [AttachmentRef]>,
) -> AttachmentPlan<'a> {
    let Some(refs) = incoming else {
        return AttachmentPlan {
            keeps: existing_ids.to_vec(),
            ..Default::default()
        };
    };

    let existing_set: HashSet<i64> = existing_ids.iter().copied().collect();
    let mut referenced: HashSet<i64> = HashSet::new();
    let mut keeps = Vec::new();
    let mut inserts = Vec::new();

    for attachment in refs {
        match attachment {
            AttachmentRef::Existing(existing) => {
                if existing_set.contains(&existing.id) && referenced.insert(existing.id) {
                    keeps.push(existing.id);
                }
            }
            AttachmentRef::New(new) => inserts.push(new),
        }
    }

    let deletes = existing_ids
        .iter()
        .filter(|id| !referenced.contains(id))
        .copied()
        .collect();

    AttachmentPlan {
        keeps,
        inserts,
        deletes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::applications::entities::{AwardGrade, AwardLevel, AwardType};
    use crate::models::applications::requests::ExistingAttachmentRef;

    fn submission(category_id: i64, item_id: i64) -> MaterialSubmission {
        MaterialSubmission {
            category_id,
            item_id,
            award_level: AwardLevel::National,
            award_grade: AwardGrade::First,
            award_type: AwardType::Individual,
            files: None,
        }
    }

    fn existing(id: i64, category_id: i64, item_id: i64) -> ExistingMaterial {
        ExistingMaterial {
            id,
            key: MaterialKey {
                category_id,
                item_id,
            },
        }
    }

    #[test]
    fn test_first_submission_all_inserts() {
        let incoming = [submission(1, 1), submission(1, 2)];
        let plan = reconcile_materials(&[], &incoming).unwrap();
        assert_eq!(plan.inserts.len(), 2);
        assert!(plan.updates.is_empty());
        assert!(plan.deletes.is_empty());
    }

    #[test]
    fn test_resubmission_is_idempotent() {
        // 键全部命中时只产生更新，且沿用原 id —— 连提两次不会翻倍
        let stored = [existing(10, 1, 1), existing(11, 1, 2)];
        let incoming = [submission(1, 1), submission(1, 2)];
        let plan = reconcile_materials(&stored, &incoming).unwrap();

        assert!(plan.inserts.is_empty());
        assert!(plan.deletes.is_empty());
        let ids: Vec<i64> = plan.updates.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn test_omitted_material_is_pruned() {
        // 库内有 {A, B}，来稿只有 {A} ⇒ 删 B
        let stored = [existing(10, 1, 1), existing(11, 1, 2)];
        let incoming = [submission(1, 1)];
        let plan = reconcile_materials(&stored, &incoming).unwrap();

        assert_eq!(plan.updates.len(), 1);
        assert_eq!(plan.deletes, vec![11]);
    }

    #[test]
    fn test_mixed_plan() {
        let stored = [existing(10, 1, 1), existing(11, 2, 5)];
        let incoming = [submission(1, 1), submission(3, 7)];
        let plan = reconcile_materials(&stored, &incoming).unwrap();

        assert_eq!(plan.updates.len(), 1);
        assert_eq!(plan.updates[0].0, 10);
        assert_eq!(plan.updates[0].1.item_id, 1);
        assert_eq!(plan.inserts.len(), 1);
        assert_eq!(plan.inserts[0].item_id, 7);
        assert_eq!(plan.deletes, vec![11]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let incoming = [submission(1, 1), submission(1, 1)];
        let err = reconcile_materials(&[], &incoming).unwrap_err();
        assert_eq!(err.code(), "E014");
    }

    #[test]
    fn test_same_item_in_different_categories_allowed() {
        // 自然键是 (category, item) 二元组，不是拼接字符串
        let incoming = [submission(1, 1), submission(2, 1)];
        assert!(reconcile_materials(&[], &incoming).is_ok());
    }

    fn exist_ref(id: i64) -> AttachmentRef {
        AttachmentRef::Existing(ExistingAttachmentRef { id })
    }

    fn new_ref(name: &str) -> AttachmentRef {
        AttachmentRef::New(NewAttachmentRef {
            original_name: name.to_string(),
            stored_name: format!("stored-{name}"),
            stored_path: format!("uploads/stored-{name}"),
            file_size: 1024,
            mime_type: "application/pdf".to_string(),
        })
    }

    #[test]
    fn test_attachments_untouched_when_field_absent() {
        let plan = reconcile_attachments(&[1, 2, 3], None);
        assert_eq!(plan.keeps, vec![1, 2, 3]);
        assert!(plan.inserts.is_empty());
        assert!(plan.deletes.is_empty());
    }

    #[test]
    fn test_empty_list_prunes_all() {
        let plan = reconcile_attachments(&[1, 2, 3], Some(&[]));
        assert!(plan.keeps.is_empty());
        assert_eq!(plan.deletes, vec![1, 2, 3]);
    }

    #[test]
    fn test_kept_attachments_not_reinserted() {
        let refs = [exist_ref(2), new_ref("补充证明.pdf")];
        let plan = reconcile_attachments(&[1, 2], Some(&refs));

        assert_eq!(plan.keeps, vec![2]);
        assert_eq!(plan.inserts.len(), 1);
        assert_eq!(plan.deletes, vec![1]);
    }

    #[test]
    fn test_stale_reference_ignored() {
        // 引用了不属于该材料的附件 id：既不保留也不报错
        let refs = [exist_ref(99)];
        let plan = reconcile_attachments(&[1], Some(&refs));
        assert!(plan.keeps.is_empty());
        assert_eq!(plan.deletes, vec![1]);
    }
}
