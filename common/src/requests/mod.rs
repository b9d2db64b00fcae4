use serde::{Deserialize, Serialize};

/// Body of `PATCH /api/users/{id}/`.
///
/// `team_id` is always serialized, as `null` when the user has no team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub team_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_missing_team_as_null() {
        let update = UserUpdate {
            name: "A".into(),
            email: "a@b.org".into(),
            team_id: None,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "A", "email": "a@b.org", "team_id": null})
        );
    }
}
