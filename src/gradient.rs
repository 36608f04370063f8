//! CSS gradient strings from ordered stop lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{parse_color, to_hex, ColorParseError};
use crate::shade::shade_steps_of;

/// A color anchored at a percentage position along the gradient axis.
///
/// Positions are taken as given: stops are rendered in list order, without
/// sorting or deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    pub position: f64,
}

impl GradientStop {
    pub fn new(color: impl Into<String>, position: f64) -> GradientStop {
        GradientStop { color: color.into(), position }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub fn name(&self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gradient kind `{0}`")]
pub struct UnknownGradientKind(String);

impl FromStr for GradientKind {
    type Err = UnknownGradientKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(GradientKind::Linear),
            "radial" => Ok(GradientKind::Radial),
            "conic" => Ok(GradientKind::Conic),
            other => Err(UnknownGradientKind(other.to_string())),
        }
    }
}

/// Render a stop list as a CSS gradient value.
///
/// `angle` (degrees) applies to linear and conic gradients; radial ones
/// ignore it.  Validation of the stop list — at least two stops, positions
/// within \[0, 100\] — is the caller's job.
pub fn format_gradient(stops: &[GradientStop], kind: GradientKind, angle: f64) -> String {
    let stop_list = stops
        .iter()
        .map(|s| format!("{} {}%", s.color, s.position))
        .collect::<Vec<_>>()
        .join(", ");
    match kind {
        GradientKind::Linear => format!("linear-gradient({angle}deg, {stop_list})"),
        GradientKind::Radial => format!("radial-gradient(circle, {stop_list})"),
        GradientKind::Conic => format!("conic-gradient(from {angle}deg, {stop_list})"),
    }
}

/// The copyable form of a gradient: a full `background` declaration.
pub fn css_declaration(gradient: &str) -> String {
    format!("background: {gradient};")
}

/// One two-stop gradient per shade of `input`, fading the base color into
/// each of its `count` ramp steps.
pub fn shade_ramp_gradients(input: &str, count: usize) -> Result<Vec<String>, ColorParseError> {
    let base = parse_color(input)?;
    let base_hex = to_hex(base);
    Ok(shade_steps_of(base, count)
        .into_iter()
        .map(|shade| format!("linear-gradient(to right, {}, {})", base_hex, shade.hex))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_gradient_string() {
        let stops =
            [GradientStop::new("#667eea", 0.), GradientStop::new("#764ba2", 100.)];
        assert_eq!(
            format_gradient(&stops, GradientKind::Linear, 90.),
            "linear-gradient(90deg, #667eea 0%, #764ba2 100%)"
        );
    }

    #[test]
    fn radial_ignores_angle_conic_keeps_it() {
        let stops =
            [GradientStop::new("#667eea", 0.), GradientStop::new("#764ba2", 100.)];
        assert_eq!(
            format_gradient(&stops, GradientKind::Radial, 45.),
            "radial-gradient(circle, #667eea 0%, #764ba2 100%)"
        );
        assert_eq!(
            format_gradient(&stops, GradientKind::Conic, 45.),
            "conic-gradient(from 45deg, #667eea 0%, #764ba2 100%)"
        );
    }

    #[test]
    fn stops_keep_their_order() {
        // unsorted positions are rendered as given
        let stops = [
            GradientStop::new("#ffffff", 80.),
            GradientStop::new("#000000", 20.5),
        ];
        assert_eq!(
            format_gradient(&stops, GradientKind::Linear, 0.),
            "linear-gradient(0deg, #ffffff 80%, #000000 20.5%)"
        );
    }

    #[test]
    fn declaration_wraps_background() {
        assert_eq!(
            css_declaration("linear-gradient(90deg, #000000 0%, #ffffff 100%)"),
            "background: linear-gradient(90deg, #000000 0%, #ffffff 100%);"
        );
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [GradientKind::Linear, GradientKind::Radial, GradientKind::Conic] {
            assert_eq!(kind.name().parse::<GradientKind>(), Ok(kind));
        }
        assert!("diagonal".parse::<GradientKind>().is_err());
    }

    #[test]
    fn shade_ramp_gradients_shape() {
        let gradients = shade_ramp_gradients("#3b82f6", 4).unwrap();
        assert_eq!(gradients.len(), 4);
        for g in &gradients {
            assert!(g.starts_with("linear-gradient(to right, #3b82f6, #"), "{g}");
        }
        assert!(shade_ramp_gradients("notacolor", 4).is_err());
    }
}
