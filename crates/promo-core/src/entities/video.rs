//! Showcase video entity - read-only catalog surface

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Publication state of a showcase video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Published,
    Hidden,
}

impl VideoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Hidden => "hidden",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "published" => Some(Self::Published),
            "hidden" => Some(Self::Hidden),
            _ => None,
        }
    }
}

/// A promotional video shown on the public catalog pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: Snowflake,
    pub title: String,
    pub creator_name: String,
    pub category: Option<String>,
    pub cover_url: Option<String>,
    pub video_url: String,
    pub play_count: i64,
    pub like_count: i64,
    pub featured: bool,
    pub status: VideoStatus,
    pub created_at: DateTime<Utc>,
}

impl Video {
    pub fn is_visible(&self) -> bool {
        self.status == VideoStatus::Published
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility() {
        let video = Video {
            id: Snowflake::new(1),
            title: "Street food tour".to_string(),
            creator_name: "foodie_lu".to_string(),
            category: None,
            cover_url: None,
            video_url: "https://cdn.example.com/v/1.mp4".to_string(),
            play_count: 0,
            like_count: 0,
            featured: false,
            status: VideoStatus::Hidden,
            created_at: Utc::now(),
        };
        assert!(!video.is_visible());
    }
}
