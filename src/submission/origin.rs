use reqwest::Url;

use crate::config::Config;
use crate::error::OriginError;

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Where the form page was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOrigin {
    /// Page loaded over the network from this location.
    Location(Url),
    /// Page opened without a network origin, e.g. straight from disk.
    Local,
}

impl PageOrigin {
    pub fn parse(location: &str) -> Result<Self, OriginError> {
        let url = Url::parse(location).map_err(|e| OriginError::InvalidLocation {
            location: location.to_string(),
            reason: e.to_string(),
        })?;
        Ok(PageOrigin::Location(url))
    }

    /// Resolve the backend base URL for this page.
    ///
    /// Development hosts and pages without a network origin talk to the
    /// local backend; everything else posts back to its own origin.
    pub fn base_url(&self, config: &Config) -> String {
        let url = match self {
            PageOrigin::Local => return config.local_base_url.clone(),
            PageOrigin::Location(url) => url,
        };

        if url.scheme() == "file" {
            return config.local_base_url.clone();
        }

        if url.host_str().is_some_and(|host| LOCAL_HOSTS.contains(&host)) {
            return config.local_base_url.clone();
        }

        let origin = url.origin();
        if !origin.is_tuple() {
            return config.local_base_url.clone();
        }

        origin.ascii_serialization()
    }
}
