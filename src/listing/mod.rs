//! Listing data model: the read-only records the browse layer filters and shows.

mod condition;

use serde::{Deserialize, Serialize};

use crate::Record;

pub use condition::Condition;

/// Display-only seller metadata attached to a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub name: String,
    pub rating: f32,
    #[serde(default)]
    pub verified: bool,
}

/// A sellable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "listings")]
pub struct Listing {
    #[record(id)]
    pub id: String,
    pub title: String,
    pub price: f64,
    pub condition: Condition,
    pub category: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub seller: Seller,
}

impl Listing {
    /// Numeric reading of the id, used as a stand-in for recency.
    ///
    /// An optional `+`/`-` sign followed by the leading decimal digits counts
    /// (`"12b"` reads as 12, `"-3"` as -3). Ids without a numeric prefix return
    /// `None`. Too many digits saturate at `i64::MAX` / `i64::MIN`.
    /// Listings carry no creation timestamp, so this is an approximation.
    pub fn recency_key(&self) -> Option<i64> {
        let trimmed = self.id.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits = rest
            .split(|c: char| !c.is_ascii_digit())
            .next()
            .unwrap_or_default();

        if digits.is_empty() {
            return None;
        }
        let key = match digits.parse::<i64>() {
            Ok(value) if negative => -value,
            Ok(value) => value,
            Err(_) if negative => i64::MIN,
            Err(_) => i64::MAX,
        };
        Some(key)
    }

    /// Case-insensitive substring match on the title.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

/// A browsable category. Listings reference it by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "categories")]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
