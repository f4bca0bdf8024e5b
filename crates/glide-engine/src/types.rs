//! Core transition types.
//!
//! This module defines the value-level building blocks shared by every other
//! module:
//! - `ElementId` / `RequestId`: identities for elements and submitted requests
//! - `StyleValue`: a `from`/`to` value (string or number)
//! - `TimeValue`: a validated CSS time literal
//! - `PropertyPhase` / `RequestPhase`: the engine's state machine states

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a rendering surface element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Generate a new unique element ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Identity of a submitted transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl RequestId {
    /// Generate a new unique request ID. IDs increase with submission order.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request#{}", self.0)
    }
}

/// A style value used as a transition endpoint.
///
/// Equality is exact: `Number(1.0)` and `Text("1")` are different values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// Render the value the way it is written into a style declaration.
    pub fn to_css(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// A validated CSS time literal: `[sign]digits[.digits](s|ms)`, case-insensitive.
///
/// The original literal is kept verbatim so it can be written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeValue {
    literal: String,
    millis: f64,
}

impl TimeValue {
    /// Parse a time literal, returning `None` if it does not match the grammar.
    pub fn parse(literal: &str) -> Option<Self> {
        let lower = literal.to_ascii_lowercase();
        let (number, scale) = if let Some(n) = lower.strip_suffix("ms") {
            (n, 1.0)
        } else if let Some(n) = lower.strip_suffix('s') {
            (n, 1000.0)
        } else {
            return None;
        };

        let unsigned = number
            .strip_prefix(|c| c == '+' || c == '-')
            .unwrap_or(number);
        let (int, frac) = match unsigned.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (unsigned, None),
        };
        if !is_digits(int) || frac.is_some_and(|f| !is_digits(f)) {
            return None;
        }

        let value: f64 = number.parse().ok()?;
        Some(Self {
            literal: literal.to_string(),
            millis: value * scale,
        })
    }

    /// A time in milliseconds, written as `<n>ms`.
    pub fn millis(value: f64) -> Self {
        Self {
            literal: format!("{value}ms"),
            millis: value,
        }
    }

    /// A time in seconds, written as `<n>s`.
    pub fn seconds(value: f64) -> Self {
        Self {
            literal: format!("{value}s"),
            millis: value * 1000.0,
        }
    }

    /// Whether `literal` matches the time grammar.
    pub fn is_time_literal(literal: &str) -> bool {
        Self::parse(literal).is_some()
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// The duration in milliseconds (may be negative).
    pub fn as_millis(&self) -> f64 {
        self.millis
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl TryFrom<String> for TimeValue {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid time literal: {value:?}"))
    }
}

impl From<TimeValue> for String {
    fn from(value: TimeValue) -> Self {
        value.literal
    }
}

/// State of one property within a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyPhase {
    /// No `from` value resolved yet.
    Pending,
    /// `from` and `to` known, waiting for native registration.
    Queued,
    /// Native transition running.
    Active,
    /// Completed naturally or interrupted.
    Finished,
}

/// State of a whole request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestPhase {
    /// Snapshotting and writing `from` styles.
    Initializing,
    /// Waiting one turn for the tick continuation.
    AwaitingStart,
    /// At least one property handed to the native engine.
    Running,
    /// Every property finished; the request is detached.
    Settled,
}
