//! Geometric design scales for spacing and typography.
//!
//! Every scale is `base * ratio^step`.  Inputs are taken at face value:
//! a ratio at or below 1, or a non-positive base, produces a flat or
//! non-increasing "scale" rather than an error — the tools let users see
//! what their numbers do.

use serde::{Deserialize, Serialize};

/// Value of one geometric scale step.
pub fn geometric_value(base: f64, ratio: f64, step: i32) -> f64 {
    base * ratio.powi(step)
}

fn round2(v: f64) -> f64 {
    (v * 100.).round() / 100.
}

/// How scale steps are labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingScheme {
    TShirt,
    Numeric,
}

const T_SHIRT_SIZES: [&str; 9] = ["xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl"];
const NUMERIC_SIZES: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl NamingScheme {
    /// Label for a step index; indices past the fixed lists fall back to
    /// `size-{index}`.
    pub fn label(&self, index: usize) -> String {
        let list: &[&str] = match self {
            NamingScheme::TShirt => &T_SHIRT_SIZES,
            NamingScheme::Numeric => &NUMERIC_SIZES,
        };
        match list.get(index) {
            Some(name) => (*name).to_string(),
            None => format!("size-{index}"),
        }
    }
}

/// One step of a spacing scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingStep {
    pub index: usize,
    /// Exact value, rounded to 2 decimals.
    pub value: f64,
    /// Whole-pixel value.
    pub pixels: i64,
    /// Value in rem (value / 16), rounded to 2 decimals.
    pub rem: f64,
    pub name: String,
}

/// Spacing steps for `i` in `0..count`.
pub fn spacing_scale(
    base: f64,
    ratio: f64,
    count: usize,
    scheme: NamingScheme,
) -> Vec<SpacingStep> {
    (0..count)
        .map(|i| {
            let value = geometric_value(base, ratio, i as i32);
            SpacingStep {
                index: i,
                value: round2(value),
                pixels: value.round() as i64,
                rem: round2(value / 16.),
                name: scheme.label(i),
            }
        })
        .collect()
}

/// Custom properties plus `padding`/`margin`/`gap` utility classes for a
/// spacing scale.
pub fn spacing_css(steps: &[SpacingStep], base: f64, ratio: f64) -> String {
    let mut css = format!("/* Spacing Scale - Base: {base}px, Ratio: {ratio} */\n");
    css.push_str(":root {\n");
    for step in steps {
        css.push_str(&format!(
            "  --space-{}: {}px; /* {}rem */\n",
            step.name, step.pixels, step.rem
        ));
    }
    css.push_str("}\n\n");
    for step in steps {
        css.push_str(&format!(".p-{0} {{ padding: var(--space-{0}); }}\n", step.name));
        css.push_str(&format!(".m-{0} {{ margin: var(--space-{0}); }}\n", step.name));
        css.push_str(&format!(".gap-{0} {{ gap: var(--space-{0}); }}\n", step.name));
    }
    css
}

/// Font choices offered by the typography tools, with their full fallback
/// stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStack {
    Inter,
    System,
    Georgia,
    Mono,
}

impl FontStack {
    pub fn name(&self) -> &'static str {
        match self {
            FontStack::Inter => "Inter",
            FontStack::System => "System Font",
            FontStack::Georgia => "Georgia",
            FontStack::Mono => "Monospace",
        }
    }

    /// The full `font-family` fallback stack.
    pub fn family(&self) -> &'static str {
        match self {
            FontStack::Inter => {
                "'Inter', 'SF Pro Display', -apple-system, BlinkMacSystemFont, \
                 'Segoe UI', Roboto, sans-serif"
            }
            FontStack::System => {
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen-Sans, \
                 Ubuntu, Cantarell, 'Helvetica Neue', sans-serif"
            }
            FontStack::Georgia => "Georgia, 'Times New Roman', Times, serif",
            FontStack::Mono => {
                "'SF Mono', 'Roboto Mono', Consolas, 'Liberation Mono', Menlo, monospace"
            }
        }
    }

    /// The short stack used in generated token sheets.
    pub fn token_family(&self) -> &'static str {
        match self {
            FontStack::Inter => "'Inter', sans-serif",
            FontStack::System => "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            FontStack::Georgia => "Georgia, serif",
            FontStack::Mono => "'Roboto Mono', monospace",
        }
    }
}

/// One step of the typography scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeStep {
    pub step: i32,
    /// Font size, rounded to 2 decimals.
    pub size: f64,
    /// `size * 1.2`, rounded to 2 decimals.
    pub line_height: f64,
    pub font_weight: u16,
    pub name: &'static str,
}

const TYPE_STEPS: [i32; 9] = [-2, -1, 0, 1, 2, 3, 4, 5, 6];

fn type_name(step: i32) -> &'static str {
    match step {
        -2 => "Caption / Small",
        -1 => "Body Small",
        0 => "Body / Paragraph",
        1 => "H6 / Lead",
        2 => "H5 / Subtitle",
        3 => "H4",
        4 => "H3",
        5 => "H2",
        _ => "H1 / Display",
    }
}

/// The fixed nine-step typography scale, from captions two steps below the
/// body size up to display headings.
pub fn typography_scale(base: f64, ratio: f64) -> Vec<TypeStep> {
    TYPE_STEPS
        .iter()
        .map(|&step| {
            let size = geometric_value(base, ratio, step);
            TypeStep {
                step,
                size: round2(size),
                line_height: round2(size * 1.2),
                font_weight: if step <= 0 {
                    400
                } else if step >= 4 {
                    700
                } else {
                    500
                },
                name: type_name(step),
            }
        })
        .collect()
}

fn var_suffix(step: i32) -> String {
    if step >= 0 {
        format!("plus-{step}")
    } else {
        format!("minus-{}", step.abs())
    }
}

fn class_name(name: &str) -> String {
    name.to_lowercase()
        .split(" / ")
        .next()
        .unwrap_or_default()
        .replace(' ', "-")
}

/// Custom properties plus one class per step for a typography scale.
pub fn typography_css(steps: &[TypeStep], base: f64, ratio: f64, font: FontStack) -> String {
    let mut css = format!("/* Typography Scale - Base: {base}px, Ratio: {ratio} */\n");
    css.push_str(":root {\n");
    css.push_str(&format!("  --font-family: {};\n", font.family()));
    css.push_str(&format!("  --base-size: {base}px;\n"));
    css.push_str(&format!("  --scale-ratio: {ratio};\n\n"));
    for step in steps {
        let suffix = var_suffix(step.step);
        css.push_str(&format!("  --fs-{}: {}px;\n", suffix, step.size));
        css.push_str(&format!("  --lh-{}: {}px;\n", suffix, step.line_height));
    }
    css.push_str("}\n\n");
    for step in steps {
        css.push_str(&format!(".{} {{\n", class_name(step.name)));
        css.push_str(&format!("  font-size: {}px;\n", step.size));
        css.push_str(&format!("  line-height: {}px;\n", step.line_height));
        css.push_str(&format!("  font-weight: {};\n", step.font_weight));
        css.push_str("  font-family: var(--font-family);\n");
        css.push_str("}\n");
    }
    css
}
