//! API origin resolution.
//!
//! The origin is fixed at build time:
//! - `OCTOFIT_API_BASE`: full origin, e.g. `https://api.example.com`.
//! - `OCTOFIT_CODESPACE_NAME`: a Codespace name, expanded to
//!   `https://{name}-8000.app.github.dev`.
//! - Neither: empty base, so requests go to the serving origin (`/api/...`).

use common::model::resource::ResourceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl ApiConfig {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("OCTOFIT_API_BASE"), option_env!("OCTOFIT_CODESPACE_NAME"))
    }

    fn resolve(api_base: Option<&str>, codespace: Option<&str>) -> Self {
        match (api_base.filter(|b| !b.is_empty()), codespace.filter(|c| !c.is_empty())) {
            (Some(base), _) => Self::new(base),
            (None, Some(name)) => Self::new(format!("https://{}-8000.app.github.dev", name)),
            (None, None) => Self::new(""),
        }
    }

    /// `{base}/api/{collection}/`
    pub fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/api/{}/", self.base, kind.collection_path())
    }

    /// `{base}/api/users/{id}/`
    pub fn user_url(&self, id: &str) -> String {
        format!("{}/api/{}/{}/", self.base, ResourceKind::User.collection_path(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_collection_and_user_urls() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(
            config.collection_url(ResourceKind::LeaderboardEntry),
            "https://api.example.com/api/leaderboard/"
        );
        assert_eq!(config.user_url("7"), "https://api.example.com/api/users/7/");
    }

    #[test]
    fn empty_base_yields_relative_urls() {
        let config = ApiConfig::resolve(None, None);
        assert_eq!(config.collection_url(ResourceKind::Team), "/api/teams/");
    }

    #[test]
    fn explicit_base_wins_over_codespace() {
        assert_eq!(
            ApiConfig::resolve(Some("http://localhost:8000"), Some("cs")),
            ApiConfig::new("http://localhost:8000")
        );
        assert_eq!(
            ApiConfig::resolve(None, Some("fluffy-robot")),
            ApiConfig::new("https://fluffy-robot-8000.app.github.dev")
        );
        assert_eq!(ApiConfig::resolve(Some(""), None), ApiConfig::new(""));
    }
}
