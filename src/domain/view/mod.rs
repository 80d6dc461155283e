//! View domain — the three data views reachable after login.

#[cfg(feature = "http")]
pub mod client;
pub mod state;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::SessionError;
use crate::network::{ORDERBOOK_PATH, PROFILE_PATH, TRADEBOOK_PATH};

/// A dashboard tab backed by one read endpoint.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    OrderBook,
    TradeBook,
    Profile,
}

impl View {
    /// Tab order.
    pub const ALL: [View; 3] = [View::OrderBook, View::TradeBook, View::Profile];

    /// Endpoint name, also the tab value (`"orderbook"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderBook => "orderbook",
            Self::TradeBook => "tradebook",
            Self::Profile => "profile",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::OrderBook => ORDERBOOK_PATH,
            Self::TradeBook => TRADEBOOK_PATH,
            Self::Profile => PROFILE_PATH,
        }
    }

    /// Tab label.
    pub fn title(&self) -> &'static str {
        match self {
            Self::OrderBook => "Order Book",
            Self::TradeBook => "Trade Book",
            Self::Profile => "Profile",
        }
    }

    /// What the view shows before its first successful fetch.
    pub fn empty_payload(&self) -> Value {
        match self {
            Self::OrderBook | Self::TradeBook => Value::Array(Vec::new()),
            Self::Profile => Value::Object(serde_json::Map::new()),
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::OrderBook => 0,
            Self::TradeBook => 1,
            Self::Profile => 2,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for View {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| SessionError::UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_endpoint_names() {
        for view in View::ALL {
            assert_eq!(view.path(), format!("/api/{}", view.as_str()));
        }
    }

    #[test]
    fn test_view_parse() {
        assert_eq!("tradebook".parse::<View>().unwrap(), View::TradeBook);
        assert!(matches!(
            "positions".parse::<View>(),
            Err(SessionError::UnknownView(v)) if v == "positions"
        ));
    }

    #[test]
    fn test_view_serde() {
        let v: View = serde_json::from_str("\"orderbook\"").unwrap();
        assert_eq!(v, View::OrderBook);
        assert_eq!(serde_json::to_string(&View::Profile).unwrap(), "\"profile\"");
    }

    #[test]
    fn test_empty_payloads() {
        assert_eq!(View::OrderBook.empty_payload(), serde_json::json!([]));
        assert_eq!(View::TradeBook.empty_payload(), serde_json::json!([]));
        assert_eq!(View::Profile.empty_payload(), serde_json::json!({}));
    }

    #[test]
    fn test_default_tab_is_orderbook() {
        assert_eq!(View::default(), View::OrderBook);
    }
}
