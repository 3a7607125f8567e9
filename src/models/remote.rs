use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedStringBundle {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl LocalizedStringBundle {
    /// Single `en-US` entry with an empty value.
    pub fn empty_en_us() -> Self {
        Self::en_us(String::new())
    }

    pub fn en_us(value: String) -> Self {
        LocalizedStringBundle {
            translations: vec![Translation {
                locale: String::from(DEFAULT_LOCALE),
                value,
            }],
        }
    }

    pub fn first_value(&self) -> Option<&str> {
        self.translations.first().map(|translation| translation.value.as_str())
    }

    /// Overwrites the first translation, creating one if the bundle is empty.
    pub fn set_first_value(&mut self, value: String) {
        match self.translations.first_mut() {
            Some(translation) => translation.value = value,
            None => *self = Self::en_us(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteDraft {
    #[serde(default)]
    pub name: LocalizedStringBundle,
}

/// An achievement or leaderboard configuration as returned by a list call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteItem {
    pub id: String,
    #[serde(default)]
    pub draft: RemoteDraft,
}

impl RemoteItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        RemoteItem {
            id: id.into(),
            draft: RemoteDraft {
                name: LocalizedStringBundle::en_us(name.into()),
            },
        }
    }

    /// Display name used as the reconciliation identity.
    pub fn name(&self) -> Option<&str> {
        self.draft.name.first_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_item_ignores_unknown_fields() {
        let raw = r#"{
            "kind": "gamesConfiguration#achievementConfiguration",
            "id": "CgkI1",
            "token": "abc",
            "draft": {
                "kind": "gamesConfiguration#achievementConfigurationDetail",
                "name": {"translations": [{"kind": "x", "locale": "en-US", "value": "Prime"}]},
                "pointValue": 50
            }
        }"#;
        let item: RemoteItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, "CgkI1");
        assert_eq!(item.name(), Some("Prime"));
    }

    #[test]
    fn remote_item_without_draft_has_no_name() {
        let item: RemoteItem = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert_eq!(item.name(), None);
    }

    #[test]
    fn set_first_value_fills_empty_bundle() {
        let mut bundle = LocalizedStringBundle::default();
        bundle.set_first_value(String::from("Easy"));
        assert_eq!(bundle.translations.len(), 1);
        assert_eq!(bundle.translations[0].locale, DEFAULT_LOCALE);
        assert_eq!(bundle.first_value(), Some("Easy"));
    }
}
