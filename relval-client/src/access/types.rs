use relval_model::Role;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity of the current user as reported by the server.
///
/// Only `role_index` is interpreted; every other field of the response is
/// kept as-is in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Server-assigned rank, higher is more privileged
    pub role_index: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserInfo {
    pub fn new(role_index: i64) -> Self {
        Self {
            role_index,
            extra: Map::new(),
        }
    }

    /// Highest role this identity reaches.
    pub fn role(&self) -> Role {
        Role::from_index(self.role_index)
    }

    /// Whether this identity holds at least `role`.
    pub fn has_role(&self, role: Role) -> bool {
        role.permits(self.role_index)
    }

    /// Uninterpreted field from the identity response.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

/// Body of the identity endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfoEnvelope {
    pub response: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_keeps_extra_fields() {
        let body = r#"{
            "response": {
                "role_index": 1,
                "role": "manager",
                "username": "jdoe",
                "fullname": "Jane Doe"
            }
        }"#;
        let envelope: UserInfoEnvelope = serde_json::from_str(body).unwrap();
        let info = envelope.response;

        assert_eq!(info.role_index, 1);
        assert_eq!(info.role(), Role::Manager);
        assert_eq!(info.field("username"), Some(&Value::from("jdoe")));
        assert!(info.extra.get("role_index").is_none());
    }

    #[test]
    fn test_envelope_requires_role_index() {
        let body = r#"{ "response": { "username": "jdoe" } }"#;
        assert!(serde_json::from_str::<UserInfoEnvelope>(body).is_err());
    }

    #[test]
    fn test_has_role_follows_hierarchy() {
        let info = UserInfo::new(1);
        assert!(info.has_role(Role::User));
        assert!(info.has_role(Role::Manager));
        assert!(!info.has_role(Role::Administrator));
    }
}
