use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::applications::requests::SaveApplicationRequest;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 16
    if username.len() < 3 || username.len() > 16 {
        return Err("Username length must be between 3 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：字母 + 数字
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("Password must contain at least one letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit");
    }
    Ok(())
}

/// 类目权重为百分比
pub fn validate_score_ratio(ratio: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&ratio) {
        return Err("Score ratio must be between 0 and 100");
    }
    Ok(())
}

/// 保存申请载荷的前置校验
///
/// 在开启数据库事务之前完成：批次有效、材料非空、自然键不重复。
pub fn validate_save_request(request: &SaveApplicationRequest) -> Result<(), String> {
    if request.batch_id <= 0 {
        return Err("批次ID不能为空".to_string());
    }
    if request.materials.is_empty() {
        return Err("申请材料不能为空".to_string());
    }

    let mut seen = HashSet::with_capacity(request.materials.len());
    for material in &request.materials {
        if material.category_id <= 0 || material.item_id <= 0 {
            return Err("材料的类目与奖项不能为空".to_string());
        }
        if !seen.insert((material.category_id, material.item_id)) {
            return Err(format!(
                "材料重复申报: category {} item {}",
                material.category_id, material.item_id
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::applications::entities::{AwardGrade, AwardLevel, AwardType};
    use crate::models::applications::requests::MaterialSubmission;

    fn material(category_id: i64, item_id: i64) -> MaterialSubmission {
        MaterialSubmission {
            category_id,
            item_id,
            award_level: AwardLevel::University,
            award_grade: AwardGrade::First,
            award_type: AwardType::Individual,
            files: None,
        }
    }

    #[test]
    fn test_valid_username() {
        assert!(validate_username("stu_2023").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("名字").is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("passw0rd").is_ok());
        assert!(validate_password("short1").is_err());
        assert!(validate_password("12345678").is_err());
        assert!(validate_password("abcdefgh").is_err());
    }

    #[test]
    fn test_score_ratio_range() {
        assert!(validate_score_ratio(0).is_ok());
        assert!(validate_score_ratio(100).is_ok());
        assert!(validate_score_ratio(101).is_err());
        assert!(validate_score_ratio(-1).is_err());
    }

    #[test]
    fn test_save_request_requires_materials() {
        let request = SaveApplicationRequest {
            batch_id: 1,
            materials: vec![],
        };
        assert!(validate_save_request(&request).is_err());
    }

    #[test]
    fn test_save_request_rejects_duplicate_keys() {
        let request = SaveApplicationRequest {
            batch_id: 1,
            materials: vec![material(1, 2), material(1, 2)],
        };
        assert!(validate_save_request(&request).is_err());
    }

    #[test]
    fn test_save_request_accepts_valid_payload() {
        let request = SaveApplicationRequest {
            batch_id: 1,
            materials: vec![material(1, 2), material(1, 3), material(2, 2)],
        };
        assert!(validate_save_request(&request).is_ok());
    }
}
