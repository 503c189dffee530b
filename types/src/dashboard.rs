//! Static content of the admin dashboard. Nothing here is computed.

use crate::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    pub target: Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    /// CSS modifier for the value colour.
    pub tone: &'static str,
}

pub const TITLE: &str = "Admin Dashboard";
pub const DESCRIPTION: &str = "Manage and oversee the HarvestNet platform";

pub const CARDS: [Card; 4] = [
    Card {
        title: "User Management",
        description: "Manage farmers, buyers, and data ambassadors",
        target: Page::UserManagement,
    },
    Card {
        title: "System Analytics",
        description: "View platform usage and performance metrics",
        target: Page::Analytics,
    },
    Card {
        title: "Data Management",
        description: "Oversee agricultural data and market information",
        target: Page::DataManagement,
    },
    Card {
        title: "Platform Settings",
        description: "Configure system settings and preferences",
        target: Page::Settings,
    },
];

pub const STATS: [Stat; 3] = [
    Stat {
        label: "Total Users",
        value: "1,247",
        change: "+12% from last month",
        tone: "users",
    },
    Stat {
        label: "Active Farmers",
        value: "892",
        change: "+8% from last month",
        tone: "farmers",
    },
    Stat {
        label: "Data Ambassadors",
        value: "45",
        change: "+15% from last month",
        tone: "ambassadors",
    },
];

/// Noun used in the placeholder notice of an unfinished section.
pub fn under_development_noun(page: Page) -> Option<&'static str> {
    match page {
        Page::UserManagement => Some("User management"),
        Page::Analytics => Some("Analytics"),
        Page::DataManagement => Some("Data management"),
        Page::Settings => Some("Settings"),
        Page::Login | Page::Dashboard => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NAVIGATION;

    #[test]
    fn cards_cover_every_section_but_the_dashboard() {
        let targets: Vec<_> = CARDS.iter().map(|card| card.target.path()).collect();
        assert_eq!(
            targets,
            ["/user-management", "/analytics", "/data-management", "/settings"]
        );
        assert_eq!(&NAVIGATION[1..], CARDS.map(|card| card.target).as_slice());
    }

    #[test]
    fn card_targets_are_guarded() {
        assert!(CARDS.iter().all(|card| card.target.requires_auth()));
    }

    #[test]
    fn stubs_have_a_noun() {
        for card in CARDS {
            assert!(under_development_noun(card.target).is_some());
        }
        assert_eq!(under_development_noun(Page::Dashboard), None);
        assert_eq!(
            under_development_noun(Page::DataManagement),
            Some("Data management")
        );
    }
}
