//! 주소 계층 생성 요청과 목록 필터
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::PlaceType;
use crate::utils::string_utils::deserialize_optional_string;

/// 주 약어: 영문 두 글자 (앞뒤 공백 허용, 대소문자 무관)
pub static UF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[A-Za-z]{2}\s*$").expect("Invalid uf regex"));

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStateRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(regex(path = *UF_REGEX, message = "UF는 영문 두 글자여야 합니다"))]
    pub uf: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCityRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, message = "state_id가 필요합니다"))]
    pub state_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNeighborhoodRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, message = "city_id가 필요합니다"))]
    pub city_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "우편번호는 1-20자 사이여야 합니다"))]
    pub postal_code: String,

    #[validate(range(min = -90.0, max = 90.0, message = "위도는 -90에서 90 사이여야 합니다"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "경도는 -180에서 180 사이여야 합니다"))]
    pub longitude: f64,

    #[validate(length(min = 1, message = "neighborhood_id가 필요합니다"))]
    pub neighborhood_id: String,

    /// 생략 시 `INCOMPLETE`
    #[serde(rename = "type", default)]
    pub place_type: PlaceType,
}

/// 목록 조회 필터
///
/// 단계마다 사용하는 필드가 다르며, 해당 단계에 없는 필드는 무시됩니다.
///
/// | 단계 | 필터 |
/// |---|---|
/// | state | `uf` (정확히 일치), `name` (부분 일치) |
/// | city | `state_id`, `name` |
/// | neighborhood | `city_id`, `name` |
/// | place | `neighborhood_id`, `name`, `postal_code` (정확히 일치) |
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressFilterQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub uf: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub city_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub neighborhood_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub postal_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uf_must_be_two_letters() {
        let valid = CreateStateRequest { name: "São Paulo".into(), uf: " sp ".into() };
        assert!(valid.validate().is_ok());

        for uf in ["S", "SPX", "S1", ""] {
            let invalid = CreateStateRequest { name: "São Paulo".into(), uf: uf.into() };
            assert!(invalid.validate().is_err(), "uf={:?}", uf);
        }
    }

    #[test]
    fn test_place_type_defaults_to_incomplete() {
        let request: CreatePlaceRequest = serde_json::from_str(
            r#"{"name":"Praça","postal_code":"01001-000","latitude":-23.55,"longitude":-46.63,"neighborhood_id":"x"}"#,
        )
        .unwrap();
        assert_eq!(request.place_type, PlaceType::Incomplete);

        let request: CreatePlaceRequest = serde_json::from_str(
            r#"{"name":"Praça","postal_code":"01001-000","latitude":-23.55,"longitude":-46.63,"neighborhood_id":"x","type":"COMPLETE"}"#,
        )
        .unwrap();
        assert_eq!(request.place_type, PlaceType::Complete);
    }

    #[test]
    fn test_coordinates_are_range_checked() {
        let request = CreatePlaceRequest {
            name: "Praça".into(),
            postal_code: "01001-000".into(),
            latitude: 91.0,
            longitude: 0.0,
            neighborhood_id: "x".into(),
            place_type: PlaceType::Incomplete,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_filter_query_ignores_paging_params() {
        let query = actix_web::web::Query::<AddressFilterQuery>::from_query(
            "page=1&size=5&sort=name,desc&sort=id&name=+Rio+&uf=",
        )
        .unwrap()
        .into_inner();
        assert_eq!(query.name.as_deref(), Some("Rio"));
        assert_eq!(query.uf, None);
    }
}
