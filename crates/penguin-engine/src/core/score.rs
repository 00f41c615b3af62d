use serde::{Deserialize, Serialize};

/// Player score for one run.
///
/// Owned by the [`GameContext`](crate::api::game::GameContext) and passed
/// explicitly to whoever awards points. The host persists it through
/// [`ScoreBoard::to_json`] / [`ScoreBoard::from_json`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Points collected so far.
    pub total: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award points. Saturates instead of wrapping.
    pub fn add(&mut self, points: u32) {
        self.total = self.total.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.total = 0;
    }

    /// Fixed-width HUD string (10 digits, zero-padded).
    pub fn display(&self) -> String {
        format!("{:010}", self.total)
    }

    /// Serialize for the host to save.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restore a previously saved score.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
