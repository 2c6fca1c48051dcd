//! Front-matter parsing

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::helpers::{format_ymd, parse_date_string};

const DELIMITER: &str = "---";

lazy_static! {
    /// YAML 1.1 date-only timestamp; month and day must be two digits
    static ref YAML_DATE: Regex = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap();
    /// YAML 1.1 timestamp with a time of day and optional offset
    static ref YAML_TIMESTAMP: Regex = Regex::new(
        r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[Tt]|[ \t]+)(\d{1,2}):(\d{2}):(\d{2})(?:\.(\d*))?(?:[ \t]*(Z|([-+])(\d{1,2})(?::?(\d{2}))?))?$"
    )
    .unwrap();
    /// Top-level `date:` key whose value is a quoted scalar
    static ref QUOTED_DATE: Regex = Regex::new(r#"(?m)^date[ \t]*:[ \t]*["']"#).unwrap();
}

/// The `date` field of a post.
///
/// A bare YAML timestamp (`date: 2024-05-01`) is a structured date; anything
/// else (quoted prose, numbers) is kept as text and shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostDate {
    /// A YAML timestamp, normalized to UTC
    Structured(NaiveDateTime),
    /// Any other scalar, as written
    Text(String),
}

impl PostDate {
    /// Classify a scalar read from front-matter
    pub fn from_scalar(s: &str) -> Self {
        match parse_yaml_timestamp(s) {
            Some(dt) => PostDate::Structured(dt),
            None => PostDate::Text(s.to_string()),
        }
    }

    /// Instant used to order posts; `None` when the text is not a date
    pub fn sort_key(&self) -> Option<NaiveDateTime> {
        match self {
            PostDate::Structured(dt) => Some(*dt),
            PostDate::Text(s) => parse_date_string(s),
        }
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostDate::Structured(dt) => f.write_str(&format_ymd(dt)),
            PostDate::Text(s) => f.write_str(s),
        }
    }
}

fn parse_yaml_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Some(caps) = YAML_DATE.captures(s) {
        let date = NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        )?;
        return date.and_hms_opt(0, 0, 0);
    }

    let caps = YAML_TIMESTAMP.captures(s)?;
    let date = NaiveDate::from_ymd_opt(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    )?;
    // Fractions beyond milliseconds are dropped
    let millis = match caps.get(7) {
        Some(m) => {
            let digits: String = m.as_str().chars().take(3).collect();
            format!("{:0<3}", digits).parse().ok()?
        }
        None => 0,
    };
    let time = NaiveTime::from_hms_milli_opt(
        caps[4].parse().ok()?,
        caps[5].parse().ok()?,
        caps[6].parse().ok()?,
        millis,
    )?;
    let mut dt = date.and_time(time);

    if let Some(sign) = caps.get(9) {
        let hours: i64 = caps[10].parse().ok()?;
        let minutes: i64 = match caps.get(11) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        let offset = TimeDelta::minutes(hours * 60 + minutes);
        dt = if sign.as_str() == "+" {
            dt - offset
        } else {
            dt + offset
        };
    }

    Some(dt)
}

/// Custom deserializer that accepts any YAML scalar as a string
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a scalar value")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ScalarString)
        }

        // Collections are not displayable metadata; drop them
        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(None)
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Reads `date` as text; `FrontMatter::parse` classifies it once it knows
/// whether the scalar was quoted
fn post_date<'de, D>(deserializer: D) -> Result<Option<PostDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_string(deserializer)?.map(PostDate::Text))
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "post_date")]
    pub date: Option<PostDate>,

    /// Additional custom fields, in document order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Never fails: a missing or unreadable block yields empty metadata.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some((yaml_content, remaining)) = split_block(content) else {
            return (FrontMatter::default(), content);
        };

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(mut fm) => {
                // Quoted scalars are strings, even when they look like timestamps
                if !QUOTED_DATE.is_match(yaml_content) {
                    fm.date = fm.date.map(|date| match date {
                        PostDate::Text(s) => PostDate::from_scalar(&s),
                        structured => structured,
                    });
                }
                (fm, remaining)
            }
            Err(e) => {
                tracing::warn!("Failed to parse YAML front-matter, ignoring metadata: {}", e);
                (FrontMatter::default(), remaining)
            }
        }
    }
}

/// Split `---` delimited front-matter from the body
fn split_block(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(DELIMITER)?;
    if rest.starts_with('-') {
        return None;
    }

    let end_pos = rest.find("\n---")?;
    let block = &rest[..end_pos];
    // The rest of the opening line may carry a language tag
    let yaml_content = match block.find('\n') {
        Some(i) => &block[i + 1..],
        None => "",
    };

    let remaining = &rest[end_pos + 4..];
    let remaining = remaining.strip_prefix('\r').unwrap_or(remaining);
    let remaining = remaining.strip_prefix('\n').unwrap_or(remaining);

    Some((yaml_content, remaining))
}
