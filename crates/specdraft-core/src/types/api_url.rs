//! Backend base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// The base URL of the hosted SpecDraft backend.
pub const DEFAULT_API_URL: &str = "https://harishankar000-specdraft-api.hf.space";

/// A validated backend base URL.
///
/// Must be absolute and use HTTPS, except for loopback hosts where plain
/// HTTP is accepted for local development and tests.
///
/// # Example
///
/// ```
/// use specdraft_core::ApiUrl;
///
/// let api = ApiUrl::new("https://specdraft.example.com/").unwrap();
/// assert_eq!(api.endpoint("/auth/login"), "https://specdraft.example.com/auth/login");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the absolute URL for an endpoint path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        // The URL crate always adds a trailing slash to root paths
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        if url.host_str().is_none() {
            return Err(invalid("must have a host"));
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(invalid("must use HTTPS (HTTP allowed only for localhost)"));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment"));
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str().trim_end_matches('/'))
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://specdraft.example.com").unwrap();
        assert_eq!(api.to_string(), "https://specdraft.example.com");
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://127.0.0.1:7860").unwrap();
        assert_eq!(api.endpoint("/auth/login"), "http://127.0.0.1:7860/auth/login");
    }

    #[test]
    fn endpoint_construction() {
        let api = ApiUrl::new("https://specdraft.example.com").unwrap();
        assert_eq!(
            api.endpoint("/api/generate"),
            "https://specdraft.example.com/api/generate"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let api = ApiUrl::new("https://example.com/specdraft/").unwrap();
        assert_eq!(
            api.endpoint("/auth/signup"),
            "https://example.com/specdraft/auth/signup"
        );
    }

    #[test]
    fn display_drops_trailing_slash() {
        let api = ApiUrl::new("https://specdraft.example.com/").unwrap();
        assert_eq!(api.to_string(), "https://specdraft.example.com");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://specdraft.example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/auth/login").is_err());
    }

    #[test]
    fn invalid_with_query() {
        assert!(ApiUrl::new("https://specdraft.example.com/?x=1").is_err());
    }

    #[test]
    fn hosted_backend_url_is_valid() {
        let api = ApiUrl::new(DEFAULT_API_URL).unwrap();
        assert_eq!(api.to_string(), DEFAULT_API_URL);
    }
}
