pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_payload_is_fixed() {
        let h = types::Health::current();
        assert_eq!(h.status, "healthy");
        assert_eq!(h.app, "Gallinapp");
        assert_eq!(h.version, "1.0");
    }

    #[test]
    fn health_serializes_flat() {
        let v = serde_json::to_value(types::Health::current()).unwrap();
        assert_eq!(v, serde_json::json!({"status": "healthy", "app": "Gallinapp", "version": "1.0"}));
    }
}
