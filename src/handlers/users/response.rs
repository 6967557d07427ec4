//! User response DTOs

use serde::Serialize;

/// User projection with reverse-linked offer ids.
///
/// `offers` is a reverse lookup (offers point at their author); it is
/// output-only and never accepted as input.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub offers: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_field_names() {
        let value = serde_json::to_value(UserResponse {
            id: 1,
            username: "testuser".to_string(),
            offers: vec![3, 5],
        })
        .unwrap();

        let mut names: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        names.sort();
        assert_eq!(names, vec!["id", "offers", "username"]);
        assert_eq!(value["offers"], serde_json::json!([3, 5]));
    }
}
