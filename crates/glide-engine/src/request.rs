//! Transition requests: a batch of property descriptors sharing defaults and
//! lifecycle callbacks.

use std::collections::HashSet;
use std::fmt;

use glide_config::TransitionConfig;
use serde::Deserialize;
use tracing::warn;

use crate::engine::TransitionEngine;
use crate::error::{Result, TransitionError};
use crate::normalize::PropertyNormalizer;
use crate::property::{CompletionCallback, PropertyDescriptor, PropertySpec, StyleChangeCallback};
use crate::types::{ElementId, TimeValue};

const DEFAULT_DURATION_MS: f64 = 400.0;
const DEFAULT_TIMING_FUNCTION: &str = "ease";

/// Values applied to options a request leaves unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDefaults {
    pub duration: TimeValue,
    pub delay: TimeValue,
    pub timing_function: String,
    pub begin_from_current_value: bool,
}

impl Default for TransitionDefaults {
    fn default() -> Self {
        Self {
            duration: TimeValue::millis(DEFAULT_DURATION_MS),
            delay: TimeValue::seconds(0.0),
            timing_function: DEFAULT_TIMING_FUNCTION.to_string(),
            begin_from_current_value: true,
        }
    }
}

impl TransitionDefaults {
    /// Build defaults from configuration, keeping the built-in value for any
    /// time literal that does not parse.
    pub fn from_config(config: &TransitionConfig) -> Self {
        let builtin = Self::default();
        let time = |field: &str, literal: &str, fallback: TimeValue| {
            TimeValue::parse(literal).unwrap_or_else(|| {
                warn!(field, literal, "invalid time literal in config, using built-in default");
                fallback
            })
        };
        let timing_function = if config.timing_function.trim().is_empty() {
            builtin.timing_function
        } else {
            config.timing_function.clone()
        };

        Self {
            duration: time("duration", &config.duration, builtin.duration),
            delay: time("delay", &config.delay, builtin.delay),
            timing_function,
            begin_from_current_value: config.begin_from_current_value,
        }
    }
}

/// Shared options for a request. Unset options fall back to
/// [`TransitionDefaults`]; unknown fields are ignored when deserializing.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct TransitionOptions {
    pub duration: Option<String>,
    pub delay: Option<String>,
    pub timing_function: Option<String>,
    pub begin_from_current_value: Option<bool>,
    #[serde(skip)]
    pub on_before_change_style: Option<StyleChangeCallback>,
    #[serde(skip)]
    pub on_after_change_style: Option<StyleChangeCallback>,
    #[serde(skip)]
    pub on_transition_end: Option<CompletionCallback>,
}

impl TransitionOptions {
    pub fn new() -> Self {
        Self::default()
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

    pub fn on_before_change_style(
        mut self,
        f: impl FnOnce(&mut TransitionEngine, ElementId) + 'static,
    ) -> Self {
        self.on_before_change_style = Some(Box::new(f));
        self
    }

    pub fn on_after_change_style(
        mut self,
        f: impl FnOnce(&mut TransitionEngine, ElementId) + 'static,
    ) -> Self {
        self.on_after_change_style = Some(Box::new(f));
        self
    }

    /// Batch callback: `(engine, element, all_finished)`.
    pub fn on_transition_end(
        mut self,
        f: impl FnOnce(&mut TransitionEngine, ElementId, bool) + 'static,
    ) -> Self {
        self.on_transition_end = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for TransitionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionOptions")
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("timing_function", &self.timing_function)
            .field("begin_from_current_value", &self.begin_from_current_value)
            .finish_non_exhaustive()
    }
}

/// The properties of a submission: an ordered sequence of specs, or an
/// ordered mapping from property name to spec.
#[derive(Debug)]
pub enum RequestSpec {
    Sequence(Vec<PropertySpec>),
    Mapping(Vec<(String, PropertySpec)>),
}

impl RequestSpec {
    /// Build every descriptor, in order.
    pub fn into_descriptors(
        self,
        normalizer: &dyn PropertyNormalizer,
    ) -> Result<Vec<PropertyDescriptor>> {
        match self {
            Self::Sequence(specs) => specs
                .into_iter()
                .map(|spec| PropertyDescriptor::build(spec, normalizer))
                .collect(),
            Self::Mapping(entries) => entries
                .into_iter()
                .map(|(name, spec)| PropertyDescriptor::build(spec.named(name), normalizer))
                .collect(),
        }
    }
}

impl From<Vec<PropertySpec>> for RequestSpec {
    fn from(specs: Vec<PropertySpec>) -> Self {
        Self::Sequence(specs)
    }
}

impl From<PropertySpec> for RequestSpec {
    fn from(spec: PropertySpec) -> Self {
        Self::Sequence(vec![spec])
    }
}

/// A validated batch of property descriptors with resolved shared options.
pub struct TransitionRequest {
    pub(crate) properties: Vec<PropertyDescriptor>,
    pub(crate) duration: TimeValue,
    pub(crate) delay: TimeValue,
    pub(crate) timing_function: String,
    pub(crate) begin_from_current_value: bool,
    pub(crate) on_before_change_style: Option<StyleChangeCallback>,
    pub(crate) on_after_change_style: Option<StyleChangeCallback>,
    pub(crate) on_transition_end: Option<CompletionCallback>,
}

impl TransitionRequest {
    /// Merge `options` over `defaults`. Fails with `MissingProperties` on an
    /// empty batch and `InvalidArguments` if two descriptors name the same
    /// native property.
    pub fn new(
        properties: Vec<PropertyDescriptor>,
        options: TransitionOptions,
        defaults: &TransitionDefaults,
    ) -> Result<Self> {
        if properties.is_empty() {
            return Err(TransitionError::MissingProperties);
        }

        let mut seen = HashSet::new();
        for descriptor in &properties {
            if !seen.insert(descriptor.css_property()) {
                return Err(TransitionError::invalid(format!(
                    "property {:?} appears more than once in one request",
                    descriptor.css_property()
                )));
            }
        }

        let time = |option: Option<&str>, fallback: &TimeValue| {
            option
                .and_then(TimeValue::parse)
                .unwrap_or_else(|| fallback.clone())
        };

        Ok(Self {
            duration: time(options.duration.as_deref(), &defaults.duration),
            delay: time(options.delay.as_deref(), &defaults.delay),
            timing_function: options
                .timing_function
                .unwrap_or_else(|| defaults.timing_function.clone()),
            begin_from_current_value: options
                .begin_from_current_value
                .unwrap_or(defaults.begin_from_current_value),
            on_before_change_style: options.on_before_change_style,
            on_after_change_style: options.on_after_change_style,
            on_transition_end: options.on_transition_end,
            properties,
        })
    }

    /// Build descriptors from `spec`, then the request.
    pub fn from_spec(
        spec: RequestSpec,
        options: TransitionOptions,
        defaults: &TransitionDefaults,
        normalizer: &dyn PropertyNormalizer,
    ) -> Result<Self> {
        Self::new(spec.into_descriptors(normalizer)?, options, defaults)
    }

    /// Descriptors in priority order.
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    pub fn duration(&self) -> &TimeValue {
        &self.duration
    }

    pub fn delay(&self) -> &TimeValue {
        &self.delay
    }

    pub fn timing_function(&self) -> &str {
        &self.timing_function
    }

    pub fn begin_from_current_value(&self) -> bool {
        self.begin_from_current_value
    }
}

impl fmt::Debug for TransitionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRequest")
            .field("properties", &self.properties)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("timing_function", &self.timing_function)
            .field("begin_from_current_value", &self.begin_from_current_value)
            .finish_non_exhaustive()
    }
}
