/// Core data structures for the listings feed
///
/// This module defines the primary data structures used throughout homescout
/// for representing the loaded feed, individual listings, and the control
/// values that parameterize filtering and sorting.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// The top-level feed document: an optional refresh timestamp plus
/// the full ordered catalog of listings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    /// ISO date string recorded by whatever produced the feed
    pub last_updated: Option<String>,

    /// The catalog. Never mutated after load.
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A single listing. Every field the feed may omit is an Option;
/// `property_type` is the one defaulted value, filled at the load boundary.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub square_footage: Option<f64>,
    pub address_line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub listed_date: Option<String>,
    #[serde(default = "default_property_type")]
    pub property_type: String,
    pub agent: Option<Agent>,
    pub office: Option<Office>,
}

fn default_property_type() -> String {
    "Residential".to_string()
}

impl Default for Property {
    fn default() -> Self {
        Property {
            price: None,
            bedrooms: None,
            bathrooms: None,
            square_footage: None,
            address_line1: None,
            city: None,
            state: None,
            zip_code: None,
            listed_date: None,
            property_type: default_property_type(),
            agent: None,
            office: None,
        }
    }
}

impl Property {
    /// Parse `listed_date` into a comparable timestamp
    pub fn listed_timestamp(&self) -> Option<DateTime<Utc>> {
        self.listed_date.as_deref().and_then(parse_listing_date)
    }
}

/// Parse a feed date string into a timestamp.
/// Accepts RFC 3339 datetimes and bare `YYYY-MM-DD` dates.
pub fn parse_listing_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Listing agent contact block
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Agent {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Brokerage office block
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Office {
    pub name: Option<String>,
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    DateAsc,
    #[default]
    DateDesc,
}

impl SortKey {
    /// Parse a sort key, falling back to `DateDesc` for anything unrecognized
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "date-asc" => SortKey::DateAsc,
            _ => SortKey::DateDesc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::DateDesc => "date-desc",
        }
    }
}

/// Current control values: the two filter thresholds plus the sort order.
/// A `None` threshold means the filter is inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controls {
    pub max_price: Option<u64>,
    pub min_beds: Option<u32>,
    pub sort: SortKey,
}

impl Controls {
    /// One-line description of the active controls for the view header
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(max) = self.max_price {
            parts.push(format!("max price ${}", max));
        }
        if let Some(min) = self.min_beds {
            parts.push(format!("{}+ beds", min));
        }
        parts.push(format!("sort {}", self.sort.as_str()));
        parts.join(", ")
    }
}
