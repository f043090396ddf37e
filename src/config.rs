use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::composer::{Composer, ProxySettings, RequestConfig};

pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// URL the composer starts with
    pub default_url: Option<String>,
    /// Proxy prefix the composer starts with
    pub proxy_url: Option<String>,
    /// Origins allowed to call the API cross-origin. Empty means same-origin only.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            default_url: lookup("PLAYGROUND_DEFAULT_URL").filter(|u| !u.is_empty()),
            proxy_url: lookup("PLAYGROUND_PROXY_URL").filter(|u| !u.is_empty()),
            allowed_origins: lookup("PLAYGROUND_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Composer state a fresh server starts from.
    pub fn initial_composer(&self) -> Composer {
        let mut request = RequestConfig::default();
        if let Some(url) = &self.default_url {
            request.url = url.clone();
        }

        let mut proxy = ProxySettings::default();
        if let Some(url) = &self.proxy_url {
            proxy.url = url.clone();
        }

        Composer::new(request, proxy)
    }
}
