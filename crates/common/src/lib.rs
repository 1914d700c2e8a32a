pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn api_body_wraps_under_api_key() {
        let body = types::ApiBody::new(vec![1, 2, 3]);
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json, serde_json::json!({"api": [1, 2, 3]}));
    }
}
