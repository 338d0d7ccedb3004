use ticketboss_core::reservation::DEFAULT_MAX_SEATS_PER_REQUEST;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// External identifier of the single managed event.
    pub event_id: String,
    /// Display name used when bootstrapping the event.
    pub event_name: String,
    /// Fixed seat capacity used when bootstrapping the event.
    pub total_seats: i32,
    /// Per-request seat cap enforced before any store access.
    pub max_seats_per_request: i32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `EVENT_ID`              | `main-event`            |
    /// | `EVENT_NAME`            | `Main Event`            |
    /// | `TOTAL_SEATS`           | `500`                   |
    /// | `MAX_SEATS_PER_REQUEST` | `10`                    |
    ///
    /// `DATABASE_URL` is read separately in `main.rs` and has no default.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let event_id = std::env::var("EVENT_ID").unwrap_or_else(|_| "main-event".into());

        let event_name = std::env::var("EVENT_NAME").unwrap_or_else(|_| "Main Event".into());

        let total_seats: i32 = std::env::var("TOTAL_SEATS")
            .unwrap_or_else(|_| "500".into())
            .parse()
            .expect("TOTAL_SEATS must be a valid i32");

        let max_seats_per_request: i32 = std::env::var("MAX_SEATS_PER_REQUEST")
            .unwrap_or_else(|_| DEFAULT_MAX_SEATS_PER_REQUEST.to_string())
            .parse()
            .expect("MAX_SEATS_PER_REQUEST must be a valid i32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            event_id,
            event_name,
            total_seats,
            max_seats_per_request,
        }
    }
}
