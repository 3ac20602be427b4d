//! Absolute or relative address value.

use std::fmt;
use std::str::FromStr;

use url::{Host, Url};

use super::UriError;

/// Placeholder base used to check that relative text resolves to a valid URL.
const RELATIVE_BASE: &str = "http://relative.invalid/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Absolute,
    Relative,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::Absolute => write!(f, "absolute"),
            AddressKind::Relative => write!(f, "relative"),
        }
    }
}

/// An address as the caller wrote it, plus the parsed URL when it is absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    original: String,
    /// `Some` exactly when the address is absolute.
    url: Option<Url>,
}

impl Address {
    /// Parses `text` as an absolute address, or as a relative one when it has
    /// no scheme.
    ///
    /// Empty or whitespace-only text is rejected with
    /// [`UriError::InvalidArgument`]; any other syntax problem is
    /// [`UriError::MalformedInput`].
    pub fn parse(text: &str) -> Result<Self, UriError> {
        if text.trim().is_empty() {
            return Err(UriError::invalid("address", "address is empty"));
        }

        match Url::parse(text) {
            Ok(url) => Ok(Self {
                original: text.to_string(),
                url: Some(url),
            }),
            Err(url::ParseError::RelativeUrlWithoutBase) => Self::parse_relative(text),
            Err(e) => Err(UriError::malformed(text, e.to_string())),
        }
    }

    /// Parses `text` and requires the result to be of `kind`.
    pub fn parse_as(text: &str, kind: AddressKind) -> Result<Self, UriError> {
        let address = Self::parse(text)?;
        if address.kind() != kind {
            return Err(UriError::malformed(
                text,
                format!("expected a {kind} address, got a {} one", address.kind()),
            ));
        }
        Ok(address)
    }

    fn parse_relative(text: &str) -> Result<Self, UriError> {
        let base = Url::parse(RELATIVE_BASE)
            .map_err(|e| UriError::malformed(RELATIVE_BASE, e.to_string()))?;
        base.join(text)
            .map_err(|e| UriError::malformed(text, e.to_string()))?;
        Ok(Self {
            original: text.to_string(),
            url: None,
        })
    }

    /// The text this address was parsed from.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn kind(&self) -> AddressKind {
        if self.url.is_some() {
            AddressKind::Absolute
        } else {
            AddressKind::Relative
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.url.is_some()
    }

    /// Parsed URL; `None` for relative addresses.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Query component without the leading `?`, if the address has one.
    ///
    /// Read from the original text for both kinds: everything between the
    /// first `?` and the fragment, exactly as written (no percent-encoding
    /// added by the URL parser).
    pub fn query(&self) -> Option<&str> {
        let before_fragment = self
            .original
            .split_once('#')
            .map_or(self.original.as_str(), |(head, _)| head);
        before_fragment.split_once('?').map(|(_, query)| query)
    }

    /// True when `other` is exactly the text this address was parsed from.
    pub fn compare(&self, other: &str) -> bool {
        self.original == other
    }

    /// Last two labels of the host (`www.example.com` gives `example.com`).
    ///
    /// IP hosts are returned as written. Relative addresses and absolute ones
    /// without a host (e.g. `mailto:`) have no domain.
    pub fn domain(&self) -> Result<String, UriError> {
        let url = self
            .url
            .as_ref()
            .ok_or_else(|| UriError::invalid("address", "relative address has no host"))?;

        match url.host() {
            Some(Host::Domain(name)) => {
                let labels: Vec<&str> = name.trim_end_matches('.').split('.').collect();
                let skip = labels.len().saturating_sub(2);
                Ok(labels[skip..].join("."))
            }
            Some(ip) => Ok(ip.to_string()),
            None => Err(UriError::invalid("address", "address has no host")),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl FromStr for Address {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.original
    }
}
