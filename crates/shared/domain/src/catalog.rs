//! Platforms and per-platform game builds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::update::nullable;

/// Gaming platform (PC, console family, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: i32,
    pub name: String,
}

/// Hardware requirements document stored in the `minimum` and
/// `recommended` JSON columns.
///
/// Well-known keys are typed; any other key is kept as long as its value is
/// a string. Non-object documents and non-string values are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sea_orm::FromJsonQueryResult))]
pub struct SystemRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directx: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl SystemRequirements {
    /// Validate an untyped JSON document.
    pub fn from_document(document: serde_json::Value) -> DomainResult<Self> {
        Ok(serde_json::from_value(document)?)
    }

    /// True when no key is set
    pub fn is_empty(&self) -> bool {
        self.os.is_none()
            && self.processor.is_none()
            && self.memory.is_none()
            && self.graphics.is_none()
            && self.storage.is_none()
            && self.directx.is_none()
            && self.network.is_none()
            && self.notes.is_none()
            && self.extra.is_empty()
    }
}

/// A downloadable build of a game, optionally tied to a platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCharacteristic {
    pub id: i32,
    pub game_id: i32,
    pub platform_id: Option<i32>,
    pub filename: String,
    pub filetype: Option<String>,
    /// Size in bytes
    pub size: Option<i64>,
    pub minimum: Option<SystemRequirements>,
    pub recommended: Option<SystemRequirements>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewGameCharacteristic {
    pub game_id: i32,
    pub platform_id: Option<i32>,
    pub filename: String,
    pub filetype: Option<String>,
    pub size: Option<i64>,
    pub minimum: Option<SystemRequirements>,
    pub recommended: Option<SystemRequirements>,
}

impl NewGameCharacteristic {
    /// A build with no platform and no metadata
    pub fn new(game_id: i32, filename: impl Into<String>) -> Self {
        Self {
            game_id,
            platform_id: None,
            filename: filename.into(),
            filetype: None,
            size: None,
            minimum: None,
            recommended: None,
        }
    }

    pub fn on_platform(mut self, platform_id: i32) -> Self {
        self.platform_id = Some(platform_id);
        self
    }
}

/// `None` leaves a column unchanged; `Some(None)` sets a nullable column to NULL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGameCharacteristic {
    #[serde(default, deserialize_with = "nullable")]
    pub platform_id: Option<Option<i32>>,
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub filetype: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub size: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub minimum: Option<Option<SystemRequirements>>,
    #[serde(default, deserialize_with = "nullable")]
    pub recommended: Option<Option<SystemRequirements>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requirements_keep_known_and_extra_keys() {
        let doc = json!({
            "os": "Windows 10",
            "memory": "8 GB",
            "vr": "SteamVR headset"
        });

        let reqs = SystemRequirements::from_document(doc.clone()).unwrap();
        assert_eq!(reqs.os.as_deref(), Some("Windows 10"));
        assert_eq!(reqs.memory.as_deref(), Some("8 GB"));
        assert_eq!(reqs.extra.get("vr").map(String::as_str), Some("SteamVR headset"));

        assert_eq!(serde_json::to_value(&reqs).unwrap(), doc);
    }

    #[test]
    fn test_requirements_reject_non_string_values() {
        assert!(SystemRequirements::from_document(json!({ "memory": 8 })).is_err());
        assert!(SystemRequirements::from_document(json!({ "cores": 4 })).is_err());
    }

    #[test]
    fn test_requirements_reject_non_object() {
        assert!(SystemRequirements::from_document(json!(["Windows"])).is_err());
        assert!(SystemRequirements::from_document(json!("Windows")).is_err());
    }

    #[test]
    fn test_new_characteristic_has_no_platform() {
        let build = NewGameCharacteristic::new(1, "f.txt");
        assert_eq!(build.platform_id, None);
        assert_eq!(build.on_platform(3).platform_id, Some(3));
    }

    #[test]
    fn test_update_can_detach_platform() {
        let changes: UpdateGameCharacteristic =
            serde_json::from_value(json!({ "platform_id": null, "size": 1024 })).unwrap();

        assert_eq!(changes.platform_id, Some(None));
        assert_eq!(changes.size, Some(Some(1024)));
        assert!(changes.filetype.is_none());
        assert!(changes.recommended.is_none());
    }

    #[test]
    fn test_empty_requirements() {
        let reqs = SystemRequirements::from_document(json!({})).unwrap();
        assert!(reqs.is_empty());
    }
}
