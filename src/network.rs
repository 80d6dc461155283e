//! Network URL and endpoint constants for the TradeDesk SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// `POST` — authenticate with the four-field credential record.
pub const LOGIN_PATH: &str = "/api/login";

/// `POST` — start server-side trading activity.
pub const START_BACKEND_PATH: &str = "/api/start-backend";

/// `GET` — order book payload.
pub const ORDERBOOK_PATH: &str = "/api/orderbook";

/// `GET` — trade book payload.
pub const TRADEBOOK_PATH: &str = "/api/tradebook";

/// `GET` — profile payload.
pub const PROFILE_PATH: &str = "/api/profile";
