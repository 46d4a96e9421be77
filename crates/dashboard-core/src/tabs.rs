//! Dashboard Tabs
//!
//! The closed set of patient views and the single active one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Overview,
    History,
    Editor,
    Training,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::History,
        DashboardTab::Editor,
        DashboardTab::Training,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::History => "history",
            DashboardTab::Editor => "editor",
            DashboardTab::Training => "training",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::History => "Visit History",
            DashboardTab::Editor => "Diet Plan",
            DashboardTab::Training => "Training",
        }
    }
}

/// Exactly one active tab; replaced atomically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelection {
    active: DashboardTab,
}

impl TabSelection {
    pub fn new(initial: DashboardTab) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> DashboardTab {
        self.active
    }

    /// Returns whether the active tab changed
    pub fn select(&mut self, tab: DashboardTab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }
}
