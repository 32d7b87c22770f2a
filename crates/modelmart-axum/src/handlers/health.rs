//! Plain-text liveness endpoints.

/// Liveness check served at `/`.
pub async fn root() -> &'static str {
    "Server is running!"
}

/// Greeting served at `/hello`.
pub async fn hello() -> &'static str {
    "How are you!"
}
