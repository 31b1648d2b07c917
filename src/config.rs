use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Application-level constants
pub const APP_NAME: &str = "MedNexus";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default port matching the demo dashboard configuration.
const DEFAULT_PORT: u16 = 8080;

/// Tracing filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Socket address the API server binds to.
/// Overridable via `MEDNEXUS_HOST` / `MEDNEXUS_PORT`.
pub fn bind_addr() -> SocketAddr {
    let host: IpAddr = std::env::var("MEDNEXUS_HOST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    let port: u16 = std::env::var("MEDNEXUS_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    SocketAddr::new(host, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_mednexus() {
        assert_eq!(APP_NAME, "MedNexus");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!APP_VERSION.is_empty());
    }

    #[test]
    fn default_filter_includes_crate() {
        let filter = default_log_filter();
        assert!(filter.contains("mednexus"));
        assert!(filter.starts_with("info"));
    }
}
