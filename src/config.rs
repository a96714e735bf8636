//! Host startup configuration.
//!
//! Leptos settings come from `[package.metadata.leptos]` (or the `LEPTOS_*`
//! environment overrides cargo-leptos sets). `PORT` replaces the configured
//! listen address with `0.0.0.0:{PORT}` for container deployments.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use leptos::prelude::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

pub struct HostConfig {
    pub leptos_options: LeptosOptions,
    pub addr: SocketAddr,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration cannot be loaded or
    /// `PORT` is set but not a valid port number.
    pub fn load() -> Result<Self, HostError> {
        let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let addr = listen_addr(leptos_options.site_addr, port);
        Ok(Self { leptos_options, addr })
    }
}

/// Parse an optional `PORT` value; unset or blank means "not overridden".
pub(crate) fn parse_port(raw: Option<&str>) -> Result<Option<u16>, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u16>()
            .map(Some)
            .map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}

pub(crate) fn listen_addr(site_addr: SocketAddr, port: Option<u16>) -> SocketAddr {
    match port {
        Some(port) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
        None => site_addr,
    }
}
