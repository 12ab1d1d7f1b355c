use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted fan-chat message. Created once, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub username: String,
    pub message: String,
    /// Assigned by the store at insert time; the only ordering key.
    pub timestamp: DateTime<Utc>,
    pub is_own: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// -- Matches --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStatus {
    Live,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchType {
    Odi,
    T20,
    Test,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Completed => "COMPLETED",
        }
    }
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Odi => "ODI",
            Self::T20 => "T20",
            Self::Test => "TEST",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamScore {
    pub name: String,
    pub flag: String,
    pub score: String,
    pub overs: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u32,
    pub team1: TeamScore,
    pub team2: TeamScore,
    pub status: MatchStatus,
    pub venue: String,
    pub match_type: MatchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toss_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub current_run_rate: String,
    pub date: DateTime<Utc>,
}

// -- Predictions --

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamOdds {
    pub name: String,
    pub flag: String,
    pub win_probability: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPick {
    pub name: String,
    pub team: String,
    pub flag: String,
    pub probability: u8,
    pub stats: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: u32,
    pub team1: TeamOdds,
    pub team2: TeamOdds,
    pub match_type: MatchType,
    pub venue: String,
    /// Display date, e.g. "Oct 15, 2025".
    pub date: String,
    pub player_of_match: PlayerPick,
    pub key_factors: Vec<String>,
}
