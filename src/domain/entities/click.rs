//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a shortened link is followed.
///
/// Clicks are keyed by short code rather than link id, so the ledger keeps a
/// link's history after the link itself is deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub id: i64,
    pub short_code: String,
    pub ip_address: String,
    pub user_agent: String,
    pub clicked_at: DateTime<Utc>,
}

impl Click {
    pub fn from_new(id: i64, new_click: NewClick) -> Self {
        Self {
            id,
            short_code: new_click.short_code,
            ip_address: new_click.ip_address,
            user_agent: new_click.user_agent,
            clicked_at: new_click.clicked_at,
        }
    }
}

/// Input data for appending a click to the ledger.
///
/// `user_agent` is an empty string when the client sent none.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClick {
    pub short_code: String,
    pub ip_address: String,
    pub user_agent: String,
    pub clicked_at: DateTime<Utc>,
}

impl NewClick {
    pub fn new(
        short_code: impl Into<String>,
        ip_address: impl Into<String>,
        user_agent: impl Into<String>,
        clicked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            short_code: short_code.into(),
            ip_address: ip_address.into(),
            user_agent: user_agent.into(),
            clicked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_from_new() {
        let now = Utc::now();
        let click = Click::from_new(3, NewClick::new("abc", "1.2.3.4", "Mozilla/5.0", now));

        assert_eq!(click.id, 3);
        assert_eq!(click.short_code, "abc");
        assert_eq!(click.ip_address, "1.2.3.4");
        assert_eq!(click.user_agent, "Mozilla/5.0");
        assert_eq!(click.clicked_at, now);
    }

    #[test]
    fn test_empty_user_agent_is_kept() {
        let click = NewClick::new("abc", "10.0.0.1", "", Utc::now());
        assert!(click.user_agent.is_empty());
    }
}
