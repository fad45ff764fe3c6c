use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::collections::HashSet;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemId(String);

crate::impl_string_newtype!(ItemId);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Destination(String);

crate::impl_string_newtype!(Destination);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    #[strum(serialize = "home", serialize = "house")]
    Home,
    #[strum(serialize = "projects", serialize = "folder", serialize = "folder-kanban")]
    Projects,
    #[strum(serialize = "contact", serialize = "mail")]
    Contact,
}

impl Icon {
    pub fn freedesktop_name(&self) -> &'static str {
        match self {
            Self::Home => "go-home",
            Self::Projects => "folder",
            Self::Contact => "mail-message-new",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Projects => "▦",
            Self::Contact => "✉",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: ItemId,
    pub label: Label,
    pub icon: Icon,
    /// Degrees, 0 = up, clockwise.
    pub angle: f64,
    pub destination: Destination,
}

impl NavItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: Icon,
        angle: f64,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            label: Label::new(label),
            icon,
            angle,
            destination: Destination::new(destination),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavConfigError {
    #[error("Navigation needs at least one item")]
    Empty,
    #[error("Item id must not be empty")]
    EmptyId,
    #[error("Item '{0}' has an empty label")]
    EmptyLabel(ItemId),
    #[error("Duplicate item id '{0}'")]
    DuplicateId(ItemId),
    #[error("Duplicate destination '{0}'")]
    DuplicateDestination(Destination),
    #[error("Item '{id}' points to '{destination}', destinations must start with '/'")]
    RelativeDestination { id: ItemId, destination: Destination },
    #[error("Item '{0}' has a non-finite angle")]
    InvalidAngle(ItemId),
    #[error("Home item '{0}' is not in the item list")]
    MissingHome(ItemId),
}

/// The fixed, ordered set of items a widget is built with.
///
/// Order matters: it drives the entrance stagger and breaks ties when two
/// items would match the same location.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItems {
    items: Vec<NavItem>,
    home: usize,
}

impl NavItems {
    pub fn new(items: Vec<NavItem>, home: &ItemId) -> Result<Self, NavConfigError> {
        if items.is_empty() {
            return Err(NavConfigError::Empty);
        }

        let mut ids = HashSet::new();
        let mut destinations = HashSet::new();

        for item in &items {
            if item.id.trim().is_empty() {
                return Err(NavConfigError::EmptyId);
            }
            if item.label.trim().is_empty() {
                return Err(NavConfigError::EmptyLabel(item.id.clone()));
            }
            if !item.destination.starts_with('/') {
                return Err(NavConfigError::RelativeDestination {
                    id: item.id.clone(),
                    destination: item.destination.clone(),
                });
            }
            if !item.angle.is_finite() {
                return Err(NavConfigError::InvalidAngle(item.id.clone()));
            }
            if !ids.insert(&item.id) {
                return Err(NavConfigError::DuplicateId(item.id.clone()));
            }
            if !destinations.insert(&item.destination) {
                return Err(NavConfigError::DuplicateDestination(
                    item.destination.clone(),
                ));
            }
        }

        let home = items
            .iter()
            .position(|item| &item.id == home)
            .ok_or_else(|| NavConfigError::MissingHome(home.clone()))?;

        Ok(Self { items, home })
    }

    pub fn home(&self) -> &NavItem {
        &self.items[self.home]
    }

    pub fn get(&self, id: &ItemId) -> Option<&NavItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn find_by_destination(&self, destination: &str) -> Option<&NavItem> {
        self.items
            .iter()
            .find(|item| item.destination.as_str() == destination)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NavItems {
    fn default() -> Self {
        Self {
            items: vec![
                NavItem::new("home", "Home", Icon::Home, 270.0, "/"),
                NavItem::new("projects", "Projects", Icon::Projects, 30.0, "/projects"),
                NavItem::new("contact", "Contact", Icon::Contact, 150.0, "/contact"),
            ],
            home: 0,
        }
    }
}

impl<'a> IntoIterator for &'a NavItems {
    type Item = &'a NavItem;
    type IntoIter = std::slice::Iter<'a, NavItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn default_home() -> ItemId {
    ItemId::from("home")
}

/// Serialized form of an item set, as found in config files.
/// An empty `items` list stands for the built-in set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavConfig {
    #[serde(default = "default_home")]
    pub home: ItemId,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            items: Vec::new(),
        }
    }
}

impl NavConfig {
    pub fn build(&self) -> Result<NavItems, NavConfigError> {
        let items = if self.items.is_empty() {
            NavItems::default().items
        } else {
            self.items.clone()
        };
        NavItems::new(items, &self.home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<NavItem> {
        NavItems::default().iter().cloned().collect()
    }

    #[test]
    fn test_default_items_are_valid() {
        let defaults = NavItems::default();
        let rebuilt = NavItems::new(items(), &ItemId::from("home")).unwrap();
        assert_eq!(defaults, rebuilt);
        assert_eq!(defaults.home().id.as_str(), "home");
    }

    #[test]
    fn test_default_angles_are_literal() {
        let angles: Vec<f64> = NavItems::default().iter().map(|i| i.angle).collect();
        assert_eq!(angles, vec![270.0, 30.0, 150.0]);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            NavItems::new(Vec::new(), &ItemId::from("home")),
            Err(NavConfigError::Empty)
        );
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut list = items();
        list.push(NavItem::new("home", "Again", Icon::Home, 0.0, "/again"));
        assert_eq!(
            NavItems::new(list, &ItemId::from("home")),
            Err(NavConfigError::DuplicateId(ItemId::from("home")))
        );
    }

    #[test]
    fn test_rejects_duplicate_destination() {
        let mut list = items();
        list.push(NavItem::new("blog", "Blog", Icon::Projects, 0.0, "/projects"));
        assert_eq!(
            NavItems::new(list, &ItemId::from("home")),
            Err(NavConfigError::DuplicateDestination(Destination::from(
                "/projects"
            )))
        );
    }

    #[test]
    fn test_rejects_relative_destination() {
        let list = vec![NavItem::new("home", "Home", Icon::Home, 0.0, "home")];
        assert!(matches!(
            NavItems::new(list, &ItemId::from("home")),
            Err(NavConfigError::RelativeDestination { .. })
        ));
    }

    #[test]
    fn test_rejects_nan_angle() {
        let list = vec![NavItem::new("home", "Home", Icon::Home, f64::NAN, "/")];
        assert_eq!(
            NavItems::new(list, &ItemId::from("home")),
            Err(NavConfigError::InvalidAngle(ItemId::from("home")))
        );
    }

    #[test]
    fn test_rejects_missing_home() {
        assert_eq!(
            NavItems::new(items(), &ItemId::from("blog")),
            Err(NavConfigError::MissingHome(ItemId::from("blog")))
        );
    }

    #[test]
    fn test_lookup() {
        let nav = NavItems::default();
        assert_eq!(
            nav.find_by_destination("/projects").map(|i| i.id.as_str()),
            Some("projects")
        );
        assert!(nav.get(&ItemId::from("blog")).is_none());
    }

    #[test]
    fn test_icon_deserialization() {
        let cases = vec![
            ("\"home\"", Icon::Home),
            ("\"HOME\"", Icon::Home),
            ("\"folder-kanban\"", Icon::Projects),
            ("\"Projects\"", Icon::Projects),
            ("\"mail\"", Icon::Contact),
            ("\"house\"", Icon::Home),
        ];

        for (json, expected) in cases {
            let deserialized: Icon = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_nav_config_deserialization() {
        let json = r#"{
            "home": "start",
            "items": [
                { "id": "start", "label": "Start", "icon": "home", "angle": 0, "destination": "/" },
                { "id": "blog", "label": "Blog", "icon": "folder", "angle": 180, "destination": "/blog" }
            ]
        }"#;
        let config: NavConfig = serde_json::from_str(json).unwrap();
        let nav = config.build().unwrap();
        assert_eq!(nav.len(), 2);
        assert_eq!(nav.home().id.as_str(), "start");
    }

    #[test]
    fn test_empty_nav_config_uses_defaults() {
        let config: NavConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.build().unwrap(), NavItems::default());
    }

    #[test]
    fn test_empty_nav_config_still_checks_home() {
        let config: NavConfig = serde_json::from_str(r#"{ "home": "blog" }"#).unwrap();
        assert_eq!(
            config.build(),
            Err(NavConfigError::MissingHome(ItemId::from("blog")))
        );

        let config: NavConfig = serde_json::from_str(r#"{ "home": "projects" }"#).unwrap();
        assert_eq!(config.build().unwrap().home().id.as_str(), "projects");
    }
}
