//! Share links
//!
//! A share link points at the validation page and carries the encoded roster
//! plus the era and faction scope in its query string. The same parser turns
//! a pasted link (or a bare query string) back into [`RosterParams`].

use reqwest::Url;
use roster_domain::Roster;
use roster_domain::roster::params::{
    ERA_PARAMETER, GENERAL_PARAMETER, LIST_PARAMETER, RosterParams, SPECIFIC_PARAMETER,
};
use thiserror::Error;

/// Query parameter carrying the roster's display name
pub const NAME_PARAMETER: &str = "name";

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Invalid share URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Era and faction scope attached to a link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareScope {
    pub era: Option<String>,
    pub specific_faction: Option<String>,
    pub general_faction: Option<String>,
}

/// Builds share links against a fixed validation page
#[derive(Debug, Clone)]
pub struct ShareLinkBuilder {
    base: Url,
}

impl ShareLinkBuilder {
    pub fn new(base_url: &str) -> Result<Self, ShareError> {
        let base = Url::parse(base_url).map_err(|e| ShareError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { base })
    }

    /// Link for `roster`; empty scope fields are left out
    pub fn link(&self, roster: &Roster, scope: &ShareScope) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(LIST_PARAMETER, &roster.encoded());
            pairs.append_pair(NAME_PARAMETER, roster.name());
            for (key, value) in [
                (ERA_PARAMETER, &scope.era),
                (SPECIFIC_PARAMETER, &scope.specific_faction),
                (GENERAL_PARAMETER, &scope.general_faction),
            ] {
                if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                    pairs.append_pair(key, value);
                }
            }
        }
        url
    }
}

/// Read validation parameters from a share link or a bare query string
pub fn params_from_url(input: &str) -> Result<RosterParams, ShareError> {
    let input = input.trim();
    let url = if input.contains("://") {
        Url::parse(input)
    } else {
        Url::parse(&format!("http://localhost/?{}", input.trim_start_matches('?')))
    }
    .map_err(|e| ShareError::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    Ok(RosterParams::from_pairs(url.query_pairs()))
}
