use std::time::Duration;

/// Settings the HTTP server needs, regardless of where they came from.
pub trait ConfigProvider: Send + Sync {
    fn listen_addr(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn max_body_bytes(&self) -> usize;
}
