//! Design-system token sheets.

use serde::{Deserialize, Serialize};

use crate::scale::FontStack;

/// Parameters of a generated design system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystem {
    pub name: String,
    /// Primary brand color, as entered (hex).
    pub primary_color: String,
    pub font: FontStack,
    /// Base border radius in px.
    pub border_radius: f64,
    /// Base spacing unit in px.
    pub spacing_base: f64,
}

impl Default for DesignSystem {
    fn default() -> Self {
        DesignSystem {
            name: "My Design System".to_string(),
            primary_color: "#3B82F6".to_string(),
            font: FontStack::Inter,
            border_radius: 8.,
            spacing_base: 8.,
        }
    }
}

impl DesignSystem {
    /// The full token sheet artifact: custom properties, a few component
    /// styles, and a JavaScript token object, ready to copy into a project.
    pub fn stylesheet(&self) -> String {
        let primary = &self.primary_color;
        let family = self.font.token_family();
        let s = |f: f64| self.spacing_base * f;
        let r = |f: f64| self.border_radius * f;
        format!(
            r#"/* {name} - Design System Tokens */

:root {{
  /* Colors */
  --color-primary: {primary};
  --color-primary-dark: color-mix(in srgb, {primary} 90%, black);
  --color-primary-light: color-mix(in srgb, {primary} 90%, white);

  /* Typography */
  --font-family: {family};
  --font-size-sm: 0.875rem;
  --font-size-base: 1rem;
  --font-size-lg: 1.125rem;
  --font-size-xl: 1.25rem;
  --font-size-2xl: 1.5rem;

  /* Spacing */
  --space-1: {s1}px;
  --space-2: {s2}px;
  --space-3: {s3}px;
  --space-4: {s4}px;
  --space-5: {s5}px;
  --space-6: {s6}px;

  /* Border Radius */
  --radius-sm: {r_sm}px;
  --radius-base: {r_base}px;
  --radius-lg: {r_lg}px;
  --radius-xl: {r_xl}px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgb(0 0 0 / 0.05);
  --shadow-base: 0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1);
  --shadow-md: 0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1);
}}

/* Component Styles */
.btn {{
  font-family: var(--font-family);
  font-weight: 600;
  border-radius: var(--radius-base);
  padding: var(--space-3) var(--space-5);
  border: none;
  cursor: pointer;
  transition: all 0.2s ease-in-out;
}}

.btn-primary {{
  background: var(--color-primary);
  color: white;
}}

.btn-primary:hover {{
  background: var(--color-primary-dark);
}}

.card {{
  background: white;
  border-radius: var(--radius-lg);
  padding: var(--space-5);
  box-shadow: var(--shadow-base);
}}

/* Export for JavaScript */
export const designTokens = {{
  colors: {{
    primary: '{primary}',
    primaryDark: color-mix(in srgb, {primary} 90%, black),
    primaryLight: color-mix(in srgb, {primary} 90%, white)
  }},
  typography: {{
    fontFamily: '{family}',
    sizes: {{
      sm: '0.875rem',
      base: '1rem',
      lg: '1.125rem',
      xl: '1.25rem',
      '2xl': '1.5rem'
    }}
  }},
  spacing: {{
    1: '{s1}px',
    2: '{s2}px',
    3: '{s3}px',
    4: '{s4}px',
    5: '{s5}px',
    6: '{s6}px'
  }},
  borderRadius: {{
    sm: '{r_sm}px',
    base: '{r_base}px',
    lg: '{r_lg}px',
    xl: '{r_xl}px'
  }}
}};"#,
            name = self.name,
            primary = primary,
            family = family,
            s1 = s(0.25),
            s2 = s(0.5),
            s3 = s(1.),
            s4 = s(1.5),
            s5 = s(2.),
            s6 = s(3.),
            r_sm = r(0.5),
            r_base = r(1.),
            r_lg = r(1.5),
            r_xl = r(2.),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_token_sheet() {
        let css = DesignSystem::default().stylesheet();
        assert!(css.starts_with("/* My Design System - Design System Tokens */\n"));
        assert!(css.contains("  --color-primary: #3B82F6;\n"));
        assert!(css.contains("--color-primary-dark: color-mix(in srgb, #3B82F6 90%, black);"));
        assert!(css.contains("  --space-1: 2px;\n"));
        assert!(css.contains("  --space-3: 8px;\n"));
        assert!(css.contains("  --space-6: 24px;\n"));
        assert!(css.contains("  --radius-sm: 4px;\n"));
        assert!(css.contains("  --radius-xl: 16px;\n"));
        assert!(css.contains(".btn-primary:hover {\n"));
        assert!(css.contains("export const designTokens = {\n"));
        assert!(css.ends_with("};"));
    }

    #[test]
    fn custom_parameters_flow_through() {
        let system = DesignSystem {
            name: "Acme".into(),
            primary_color: "#10B981".into(),
            font: FontStack::Mono,
            border_radius: 6.,
            spacing_base: 4.,
        };
        let css = system.stylesheet();
        assert!(css.starts_with("/* Acme - Design System Tokens */"));
        assert!(css.contains("--font-family: 'Roboto Mono', monospace;"));
        assert!(css.contains("  --space-2: 2px;\n"));
        assert!(css.contains("  --radius-lg: 9px;\n"));
        assert!(css.contains("primary: '#10B981',"));
    }
}
