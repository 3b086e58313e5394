//! Design drop - a creative design queued for later

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chaoshub_domain::{DesignDropId, DesignTitle};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDrop {
    pub id: DesignDropId,
    pub title: DesignTitle,
    pub created_at: DateTime<Utc>,
}

impl DesignDrop {
    pub fn new(id: DesignDropId, title: DesignTitle, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reads_legacy_web_drop() {
        let json = r#"{"id":"6f1c7a1e-4b7e-4c2a-9d38-2f6b0f5d9a11","title":"Cryptid tee","createdAt":"2024-05-01T12:00:00.000Z"}"#;
        let drop: DesignDrop = serde_json::from_str(json).unwrap();
        assert_eq!(drop.title.as_str(), "Cryptid tee");
        assert_eq!(
            drop.created_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn blank_title_fails_to_load() {
        let json = r#"{"id":"6f1c7a1e-4b7e-4c2a-9d38-2f6b0f5d9a11","title":"  ","createdAt":"2024-05-01T12:00:00Z"}"#;
        assert!(serde_json::from_str::<DesignDrop>(json).is_err());
    }
}
