//! Navigation tabs and route descriptors
//!
//! Routing itself belongs to the host navigation library; this module only
//! models what the tab bar reads from it — the ordered tab list, per-route
//! options (title, label, accessibility label), and the current index.

use crate::icons::TabIconKey;
use serde::{Deserialize, Serialize};

/// Route pushed by the compose (post) button
pub const POST_ROUTE: &str = "/modal";

/// The four left-group tabs, in bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Timeline (home) tab
    #[default]
    Timeline,
    /// Map tab
    Map,
    /// Notifications tab
    Notifications,
    /// Account tab
    Account,
}

impl NavigationTab {
    /// Route name as registered with the host router
    pub fn route_name(&self) -> &'static str {
        match self {
            NavigationTab::Timeline => "index",
            NavigationTab::Map => "map",
            NavigationTab::Notifications => "notifications",
            NavigationTab::Account => "account",
        }
    }

    /// Title shown under the tab icon
    pub fn title(&self) -> &'static str {
        match self {
            NavigationTab::Timeline => "TL",
            NavigationTab::Map => "Map",
            NavigationTab::Notifications => "Notice",
            NavigationTab::Account => "Account",
        }
    }

    /// Icon for this tab
    pub fn icon(&self) -> TabIconKey {
        match self {
            NavigationTab::Timeline => TabIconKey::Timeline,
            NavigationTab::Map => TabIconKey::Map,
            NavigationTab::Notifications => TabIconKey::Notifications,
            NavigationTab::Account => TabIconKey::Account,
        }
    }

    /// All tabs in bar order
    pub fn all() -> [NavigationTab; 4] {
        [
            NavigationTab::Timeline,
            NavigationTab::Map,
            NavigationTab::Notifications,
            NavigationTab::Account,
        ]
    }

    /// Tab for a host route name, if it is one of the four tab routes
    pub fn from_route_name(name: &str) -> Option<NavigationTab> {
        NavigationTab::all()
            .into_iter()
            .find(|tab| tab.route_name() == name)
    }
}

/// Per-route options supplied by the host router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    /// Opaque route key (unique per mounted route)
    pub key: String,
    /// Route name ("index", "map", ...)
    pub name: String,
    /// Screen title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Explicit tab-bar label, overrides the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_bar_label: Option<String>,
    /// Accessibility label passed through to the button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
}

impl RouteDescriptor {
    /// Label shown under the icon: explicit label, then title, then the
    /// capitalized route name
    pub fn label(&self) -> String {
        if let Some(label) = &self.tab_bar_label {
            return label.clone();
        }
        if let Some(title) = &self.title {
            return title.clone();
        }
        capitalize(&self.name)
    }
}

/// Capitalize the first character of a route name ("map" -> "Map")
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Route list and focus index as reported by the host router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRouteState {
    /// Mounted routes, in registration order
    pub routes: Vec<RouteDescriptor>,
    /// Index of the focused route
    pub index: usize,
}

impl TabRouteState {
    /// The default Rovrov tab registration
    pub fn rovrov_default() -> Self {
        let routes = NavigationTab::all()
            .into_iter()
            .map(|tab| RouteDescriptor {
                key: format!("{}-key", tab.route_name()),
                name: tab.route_name().to_string(),
                title: Some(tab.title().to_string()),
                tab_bar_label: None,
                accessibility_label: Some(format!("{} tab", tab.title())),
            })
            .collect();

        TabRouteState { routes, index: 0 }
    }

    /// The focused route, if the index is in range
    pub fn focused(&self) -> Option<&RouteDescriptor> {
        self.routes.get(self.index)
    }

    /// Whether the route with this key is focused
    pub fn is_focused(&self, key: &str) -> bool {
        self.focused().map(|route| route.key == key).unwrap_or(false)
    }

    /// Find a route by name
    pub fn route_by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }
}
