//! Property descriptors: one property's animation intent.
//!
//! A descriptor is built through one factory, [`PropertyDescriptor::build`],
//! from either of two shapes:
//! - positional: `(property, from, to, ...extras)` where each extra is
//!   classified by kind (first time literal is the duration, second the delay,
//!   any other string the timing function, a callback the completion handler)
//! - record: named fields, see [`PropertyRecord`]
//!
//! The property name is normalized once at construction and never changes.
//!
//! # Example
//!
//! ```ignore
//! let spec = PropertySpec::positional(["opacity".into(), 0.into(), 1.into(), "300ms".into()]);
//! let descriptor = PropertyDescriptor::build(spec, &CssNormalizer)?;
//! assert_eq!(descriptor.duration().map(|d| d.as_str()), Some("300ms"));
//! ```

use std::fmt;

use serde::Deserialize;

use crate::engine::TransitionEngine;
use crate::error::{Result, TransitionError};
use crate::normalize::PropertyNormalizer;
use crate::types::{ElementId, StyleValue, TimeValue};

/// Completion callback: `(engine, element, finished)`.
///
/// Always invoked on a later scheduler turn, never inside the call that
/// triggered it. The engine is passed so the callback may submit new requests.
pub type CompletionCallback = Box<dyn FnOnce(&mut TransitionEngine, ElementId, bool)>;

/// Style-change lifecycle callback: `(engine, element)`.
pub type StyleChangeCallback = Box<dyn FnOnce(&mut TransitionEngine, ElementId)>;

/// One positional argument.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum PropertyArg {
    Value(StyleValue),
    /// An explicitly absent `from`/`to` (`null` in JSON).
    Absent,
    #[serde(skip_deserializing)]
    Callback(CompletionCallback),
}

impl PropertyArg {
    pub fn callback(f: impl FnOnce(&mut TransitionEngine, ElementId, bool) + 'static) -> Self {
        Self::Callback(Box::new(f))
    }
}

impl fmt::Debug for PropertyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Absent => f.write_str("Absent"),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl From<&str> for PropertyArg {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for PropertyArg {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for PropertyArg {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for PropertyArg {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<StyleValue> for PropertyArg {
    fn from(value: StyleValue) -> Self {
        Self::Value(value)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for PropertyArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, |v| Self::Value(v.into()))
    }
}

/// Named-field form of a property descriptor.
///
/// Time fields that do not match the time grammar are treated as absent.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    pub property: String,
    pub from: Option<StyleValue>,
    pub to: Option<StyleValue>,
    pub duration: Option<String>,
    pub delay: Option<String>,
    pub timing_function: Option<String>,
    pub begin_from_current_value: Option<bool>,
    #[serde(skip)]
    pub on_end: Option<CompletionCallback>,
}

impl PropertyRecord {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ..Self::default()
        }
    }

    pub fn with_from(mut self, from: impl Into<StyleValue>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_to(mut self, to: impl Into<StyleValue>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_delay(mut self, delay: impl Into<String>) -> Self {
        self.delay = Some(delay.into());
        self
    }

    pub fn with_timing_function(mut self, timing_function: impl Into<String>) -> Self {
        self.timing_function = Some(timing_function.into());
        self
    }

    pub fn with_begin_from_current_value(mut self, begin: bool) -> Self {
        self.begin_from_current_value = Some(begin);
        self
    }

    pub fn on_end(
        mut self,
        f: impl FnOnce(&mut TransitionEngine, ElementId, bool) + 'static,
    ) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for PropertyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRecord")
            .field("property", &self.property)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("timing_function", &self.timing_function)
            .field("begin_from_current_value", &self.begin_from_current_value)
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

/// Either construction shape for a descriptor.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PropertySpec {
    Positional(Vec<PropertyArg>),
    Record(PropertyRecord),
}

impl PropertySpec {
    pub fn positional(args: impl IntoIterator<Item = PropertyArg>) -> Self {
        Self::Positional(args.into_iter().collect())
    }

    /// Attach a mapping key as the property name.
    pub(crate) fn named(self, name: String) -> Self {
        match self {
            Self::Positional(mut args) => {
                args.insert(0, PropertyArg::Value(StyleValue::Text(name)));
                Self::Positional(args)
            }
            Self::Record(mut record) => {
                record.property = name;
                Self::Record(record)
            }
        }
    }
}

impl From<PropertyRecord> for PropertySpec {
    fn from(record: PropertyRecord) -> Self {
        Self::Record(record)
    }
}

impl From<Vec<PropertyArg>> for PropertySpec {
    fn from(args: Vec<PropertyArg>) -> Self {
        Self::Positional(args)
    }
}

/// A validated, normalized description of one property's transition.
pub struct PropertyDescriptor {
    property: String,
    css_property: String,
    dom_property: String,
    from: Option<StyleValue>,
    to: Option<StyleValue>,
    duration: Option<TimeValue>,
    delay: Option<TimeValue>,
    timing_function: Option<String>,
    begin_from_current_value: Option<bool>,
    on_end: Option<CompletionCallback>,
}

impl PropertyDescriptor {
    /// Build a descriptor from either construction shape.
    pub fn build(spec: PropertySpec, normalizer: &dyn PropertyNormalizer) -> Result<Self> {
        match spec {
            PropertySpec::Positional(args) => Self::from_positional(args, normalizer),
            PropertySpec::Record(record) => Self::from_record(record, normalizer),
        }
    }

    /// Build from `(property, from, to, ...extras)`.
    pub fn from_positional(
        args: Vec<PropertyArg>,
        normalizer: &dyn PropertyNormalizer,
    ) -> Result<Self> {
        if args.len() < 3 {
            return Err(TransitionError::invalid(format!(
                "expected (property, from, to, ...), got {} argument(s)",
                args.len()
            )));
        }

        let mut args = args.into_iter();
        let property = match args.next() {
            Some(PropertyArg::Value(StyleValue::Text(name))) if !name.trim().is_empty() => name,
            other => {
                return Err(TransitionError::invalid(format!(
                    "property name must be a non-empty string, got {other:?}"
                )));
            }
        };
        let from = endpoint(args.next(), "from")?;
        let to = endpoint(args.next(), "to")?;

        let mut descriptor = Self::resolved(&property, normalizer);
        descriptor.from = from;
        descriptor.to = to;

        for arg in args {
            match arg {
                PropertyArg::Value(StyleValue::Text(text)) => {
                    if let Some(time) = TimeValue::parse(&text) {
                        if descriptor.duration.is_none() {
                            descriptor.duration = Some(time);
                        } else if descriptor.delay.is_none() {
                            descriptor.delay = Some(time);
                        } else {
                            return Err(TransitionError::invalid(format!(
                                "{property}: unexpected third time value {text:?}"
                            )));
                        }
                    } else if descriptor.timing_function.is_none() {
                        descriptor.timing_function = Some(text);
                    } else {
                        return Err(TransitionError::invalid(format!(
                            "{property}: unexpected second timing function {text:?}"
                        )));
                    }
                }
                PropertyArg::Callback(callback) if descriptor.on_end.is_none() => {
                    descriptor.on_end = Some(callback);
                }
                PropertyArg::Callback(_) => {
                    return Err(TransitionError::invalid(format!(
                        "{property}: more than one completion callback"
                    )));
                }
                PropertyArg::Absent => {}
                PropertyArg::Value(value) => {
                    return Err(TransitionError::invalid(format!(
                        "{property}: cannot interpret extra argument {value:?}"
                    )));
                }
            }
        }

        Ok(descriptor)
    }

    /// Build from a named-field record.
    pub fn from_record(
        record: PropertyRecord,
        normalizer: &dyn PropertyNormalizer,
    ) -> Result<Self> {
        if record.property.trim().is_empty() {
            return Err(TransitionError::invalid("property record has no property name"));
        }

        let mut descriptor = Self::resolved(&record.property, normalizer);
        descriptor.from = record.from;
        descriptor.to = record.to;
        descriptor.duration = record.duration.as_deref().and_then(TimeValue::parse);
        descriptor.delay = record.delay.as_deref().and_then(TimeValue::parse);
        descriptor.timing_function = record.timing_function;
        descriptor.begin_from_current_value = record.begin_from_current_value;
        descriptor.on_end = record.on_end;
        Ok(descriptor)
    }

    fn resolved(property: &str, normalizer: &dyn PropertyNormalizer) -> Self {
        let css_property = normalizer.normalize(property);
        let dom_property = normalizer.style_attribute(&css_property);
        Self {
            property: property.to_string(),
            css_property,
            dom_property,
            from: None,
            to: None,
            duration: None,
            delay: None,
            timing_function: None,
            begin_from_current_value: None,
            on_end: None,
        }
    }

    /// Logical name as supplied by the caller.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Native CSS name, used in transition lists and computed reads.
    pub fn css_property(&self) -> &str {
        &self.css_property
    }

    /// Style attribute name, used for writes.
    pub fn dom_property(&self) -> &str {
        &self.dom_property
    }

    pub fn from(&self) -> Option<&StyleValue> {
        self.from.as_ref()
    }

    pub fn to(&self) -> Option<&StyleValue> {
        self.to.as_ref()
    }

    pub fn duration(&self) -> Option<&TimeValue> {
        self.duration.as_ref()
    }

    pub fn delay(&self) -> Option<&TimeValue> {
        self.delay.as_ref()
    }

    pub fn timing_function(&self) -> Option<&str> {
        self.timing_function.as_deref()
    }

    pub fn begin_from_current_value(&self) -> Option<bool> {
        self.begin_from_current_value
    }

    pub fn has_on_end(&self) -> bool {
        self.on_end.is_some()
    }

    pub(crate) fn take_on_end(&mut self) -> Option<CompletionCallback> {
        self.on_end.take()
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("property", &self.property)
            .field("css_property", &self.css_property)
            .field("dom_property", &self.dom_property)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("timing_function", &self.timing_function)
            .field("begin_from_current_value", &self.begin_from_current_value)
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

fn endpoint(arg: Option<PropertyArg>, name: &str) -> Result<Option<StyleValue>> {
    match arg {
        Some(PropertyArg::Value(value)) => Ok(Some(value)),
        Some(PropertyArg::Absent) | None => Ok(None),
        Some(PropertyArg::Callback(_)) => Err(TransitionError::invalid(format!(
            "`{name}` must be a value, got a callback"
        ))),
    }
}
