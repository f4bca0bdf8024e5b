//! Property-name normalization.
//!
//! Logical names (`backgroundColor`, `background-color`) resolve once to a
//! native CSS name (`background-color`) and a style attribute name
//! (`backgroundColor`). Vendor-prefix resolution is left to custom
//! implementations of [`PropertyNormalizer`].

/// Resolves logical property names to native forms.
pub trait PropertyNormalizer {
    /// Logical name to native CSS property name.
    fn normalize(&self, logical: &str) -> String;

    /// Native CSS property name to the style attribute used for writes.
    fn style_attribute(&self, css_property: &str) -> String;
}

/// Default normalizer converting between camelCase and kebab-case.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssNormalizer;

impl PropertyNormalizer for CssNormalizer {
    fn normalize(&self, logical: &str) -> String {
        let logical = logical.trim();
        let mut css = String::with_capacity(logical.len() + 4);
        for c in logical.chars() {
            if c.is_ascii_uppercase() {
                css.push('-');
                css.push(c.to_ascii_lowercase());
            } else {
                css.push(c);
            }
        }
        css
    }

    fn style_attribute(&self, css_property: &str) -> String {
        let mut attribute = String::with_capacity(css_property.len());
        let mut upper_next = false;
        for c in css_property.chars() {
            if c == '-' {
                upper_next = true;
            } else if upper_next {
                attribute.push(c.to_ascii_uppercase());
                upper_next = false;
            } else {
                attribute.push(c);
            }
        }
        attribute
    }
}
