//! # 문자열 유틸리티
//!
//! 입력값 정리, 정규화, 검색 패턴 생성에 쓰이는 공통 함수들입니다.

use serde::Deserialize;

use crate::errors::AppError;

/// 필수 문자열을 검증하고 앞뒤 공백을 제거해 반환합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 공백만 있거나 비어 있는 경우
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{}은(는) 필수입니다", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 공백을 제거하고, 비어 있으면 `None`으로 바꿉니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 이메일 정규화 (trim + 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 주 약어(UF) 정규화 (trim + 대문자)
pub fn normalize_uf(uf: &str) -> String {
    uf.trim().to_uppercase()
}

/// 부분 일치 검색용 정규식 패턴
///
/// 사용자 입력의 메타 문자는 모두 이스케이프됩니다.
pub fn contains_pattern(term: &str) -> String {
    regex::escape(term.trim())
}

/// serde 역직렬화 시 빈 문자열을 `None`으로 처리합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Query {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     name: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
        assert_eq!(normalize_uf(" sp"), "SP");
    }

    #[test]
    fn test_contains_pattern_escapes_metacharacters() {
        assert_eq!(contains_pattern(" São Paulo "), "São Paulo");
        assert_eq!(contains_pattern("a.b*(c)"), r"a\.b\*\(c\)");
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  Hello World  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "   "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }
}
