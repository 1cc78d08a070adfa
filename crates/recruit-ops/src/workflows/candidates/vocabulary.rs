//! Closed vocabularies shared with the dashboard, the mobile app, and the database.
//!
//! Labels are matched byte-for-byte; collaborators store and send the exact label text.

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Enumerated token set with a stable wire label per member.
pub trait Vocabulary: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|token| token.label() == value)
    }
}

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl Vocabulary for $name {
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse(&raw).ok_or_else(|| {
                    D::Error::custom(format!(
                        "unknown {} '{raw}'",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

vocabulary! {
    /// Markets a candidate is willing to work in.
    City {
        Atlanta => "Atlanta",
        Austin => "Austin",
        Boston => "Boston",
        Charlotte => "Charlotte",
        Chicago => "Chicago",
        Dallas => "Dallas",
        Denver => "Denver",
        Houston => "Houston",
        LosAngeles => "Los Angeles",
        Miami => "Miami",
        NewYork => "New York",
        OrangeCounty => "Orange County",
        Philadelphia => "Philadelphia",
        SanDiego => "San Diego",
        SanFrancisco => "San Francisco",
        Seattle => "Seattle",
        SiliconValley => "Silicon Valley",
        WashingtonDc => "Washington, DC",
    }
}

vocabulary! {
    PracticeArea {
        Antitrust => "Antitrust",
        Bankruptcy => "Bankruptcy & Restructuring",
        CapitalMarkets => "Capital Markets",
        CorporateMa => "Corporate / M&A",
        EmploymentLabor => "Employment & Labor",
        Energy => "Energy",
        Environmental => "Environmental",
        Finance => "Finance",
        GovernmentInvestigations => "Government Investigations",
        Healthcare => "Healthcare",
        IntellectualProperty => "Intellectual Property",
        Litigation => "Litigation",
        PrivateEquity => "Private Equity",
        RealEstate => "Real Estate",
        Regulatory => "Regulatory",
        Tax => "Tax",
        TrustsEstates => "Trusts & Estates",
        WhiteCollar => "White Collar",
    }
}

vocabulary! {
    /// Where a candidate stands with a firm they have been submitted to.
    FirmStatus {
        Submitted => "Submitted",
        Interviewing => "Interviewing",
        Offer => "Offer",
        Placed => "Placed",
        Rejected => "Rejected",
        Withdrawn => "Withdrawn",
    }
}

/// Keeps the valid string members of an untrusted JSON array, first-seen order, no repeats.
///
/// Anything other than an array yields an empty list.
pub fn tokens_from_value<T: Vocabulary>(value: &Value) -> Vec<T> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };

    let mut tokens = Vec::with_capacity(entries.len());
    for token in entries.iter().filter_map(Value::as_str).filter_map(T::parse) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// `deserialize_with` helper for record fields holding vocabulary lists from the backend.
pub(crate) fn lenient_tokens<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Vocabulary,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map(tokens_from_value).unwrap_or_default())
}

/// `deserialize_with` helper for optional text fields; any non-string reads as absent.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Free-form id lists: string members of an array, first-seen order, no repeats.
pub(crate) fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(entries)) = raw else {
        return Ok(Vec::new());
    };

    let mut values: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Value::String(text) = entry {
            if !values.contains(&text) {
                values.push(text);
            }
        }
    }
    Ok(values)
}
