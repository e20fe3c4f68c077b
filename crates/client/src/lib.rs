pub mod course;

pub use course::Course;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Where the catalog API lives when no base URL is configured.
pub const DEFAULT_BASE: &str = "http://localhost:8000/";

/// A client for the course catalog API
pub struct Client {
    base: String,
    http: reqwest::blocking::Client,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("http error: {}", .0)]
    HTTPError(#[from] reqwest::Error),

    #[error("unexpected status code: {}", .0)]
    BadStatus(u16),

    #[error("serde error: {}", .0)]
    SerdeError(#[from] serde_json::Error),
}

impl Client {
    /// Create a client against the given base URL.
    pub fn new(base: &str) -> Result<Self> {
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let http = reqwest::blocking::Client::builder().build()?;

        Ok(Client { base, http })
    }

    /// The base URL requests are made against, always `/`-terminated.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub(crate) fn get<T: for<'a> Deserialize<'a>>(&self, url: &str) -> Result<T, Error> {
        let resp = self.http.get(format!("{}{}", self.base, url)).send()?;
        if !resp.status().is_success() {
            return Err(Error::BadStatus(resp.status().as_u16()));
        }

        if log::log_enabled!(log::Level::Debug) {
            let s = resp.text()?;
            debug!("response: {}", s);
            Ok(serde_json::from_str(&s)?)
        } else {
            Ok(resp.json()?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_slash_terminated() {
        let client = Client::new("http://example.org/api").unwrap();
        assert_eq!(client.base(), "http://example.org/api/");

        let client = Client::new("http://example.org/api/").unwrap();
        assert_eq!(client.base(), "http://example.org/api/");
    }
}
