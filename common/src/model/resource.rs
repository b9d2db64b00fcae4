use serde::{Deserialize, Serialize};

/// Identifies which collection a view instance targets.
///
/// Every kind maps to a fixed collection path under `/api/`. Only
/// [`ResourceKind::User`] supports the single-resource partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    User,
    Activity,
    Team,
    LeaderboardEntry,
    Workout,
}

impl ResourceKind {
    /// All kinds, in navigation order.
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::User,
        ResourceKind::Activity,
        ResourceKind::Team,
        ResourceKind::LeaderboardEntry,
        ResourceKind::Workout,
    ];

    /// Path segment of the collection endpoint, e.g. `users` for `/api/users/`.
    pub fn collection_path(self) -> &'static str {
        match self {
            ResourceKind::User => "users",
            ResourceKind::Activity => "activities",
            ResourceKind::Team => "teams",
            ResourceKind::LeaderboardEntry => "leaderboard",
            ResourceKind::Workout => "workouts",
        }
    }

    pub fn from_collection_path(path: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.collection_path() == path.trim_matches('/'))
    }

    /// Human-readable plural title used in headings and counters.
    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::User => "Users",
            ResourceKind::Activity => "Activities",
            ResourceKind::Team => "Teams",
            ResourceKind::LeaderboardEntry => "Leaderboard",
            ResourceKind::Workout => "Workouts",
        }
    }

    /// Whether records of this kind can be edited in place.
    pub fn is_editable(self) -> bool {
        matches!(self, ResourceKind::User)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection_path())
    }
}
