//! Static content of the login screen.

pub const HEADLINE: &str = "Your agricultural companion for better farming decisions";
pub const DESCRIPTION: &str = "Connect with farmers, access real-time weather data, get market prices, and grow your agricultural business with our comprehensive platform.";

/// Which platform capability a hero card advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Weather,
    Market,
    Marketplace,
    Community,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub kind: FeatureKind,
    pub title: &'static str,
    pub description: &'static str,
    /// CSS modifier for the icon badge.
    pub tone: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        kind: FeatureKind::Weather,
        title: "Weather Insights",
        description: "Get accurate weather forecasts and farming recommendations",
        tone: "weather",
    },
    Feature {
        kind: FeatureKind::Market,
        title: "Market Prices",
        description: "Real-time commodity prices from local markets",
        tone: "market",
    },
    Feature {
        kind: FeatureKind::Marketplace,
        title: "Marketplace",
        description: "Buy and sell directly with other farmers",
        tone: "marketplace",
    },
    Feature {
        kind: FeatureKind::Community,
        title: "Community",
        description: "Connect with cooperatives and local farmers",
        tone: "community",
    },
];

/// How the user says they want to sign in. Only changes the toggle styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMethod {
    #[default]
    Email,
    Phone,
}

impl AuthMethod {
    pub fn label(self) -> &'static str {
        match self {
            AuthMethod::Email => "Email",
            AuthMethod::Phone => "Phone Number",
        }
    }
}
