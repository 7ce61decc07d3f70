//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its registry metadata.
///
/// The short code is the primary key of the registry: no two records share a
/// code. `is_alias` records whether the caller chose the code. Expired links
/// stay in the store and are only filtered out by the read paths that honour
/// expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub is_alias: bool,
    pub short_url: String,
    pub click_count: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Builds a stored link from a creation request and the identifier the
    /// store assigned to it.
    pub fn from_new(id: i64, new_link: NewLink) -> Self {
        Self {
            id,
            original_url: new_link.original_url,
            short_code: new_link.short_code,
            is_alias: new_link.is_alias,
            short_url: new_link.short_url,
            click_count: 0,
            expires_at: new_link.expires_at,
            created_at: new_link.created_at,
        }
    }

    /// The caller-supplied alias, if this link was created with one.
    pub fn alias(&self) -> Option<&str> {
        self.is_alias.then_some(self.short_code.as_str())
    }

    /// Returns true if the expiration timestamp is set and strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for inserting a new link.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
    pub is_alias: bool,
    pub short_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
