//! Design-utility generators: color palettes, shade ramps, CSS gradients,
//! typographic/spacing scales and design-token sheets.
//!
//! - [`palette`]: harmony palettes derived from a base color
//! - [`shade`]: perceptual dark-to-light shade ramps
//! - [`gradient`]: CSS gradient strings from ordered stop lists
//! - [`scale`]: geometric spacing and typography scales
//! - [`tokens`]: whole-design-system token sheets
//! - [`store`]: a capped most-recent-N list of saved artifacts
//! - [`export`]: palette payloads as JSON, CSV, XLSX and PDF
//!
//! Every generator is a pure, synchronous function from its parameters to a
//! displayable or copyable artifact; the store is the only part that touches
//! the outside world, and it does so best-effort.

pub mod color;
pub mod export;
pub mod gradient;
mod named;
pub mod palette;
pub mod scale;
pub mod shade;
pub mod store;
pub mod tokens;

pub use color::{
    hex_to_rgb, parse_color, relative_luminance, rgb_to_hex, text_color_for, to_hex,
    ColorParseError, TextColor,
};
pub use export::{palette_csv, palette_json, palette_pdf, palette_xlsx, ExportError, PaletteEntry};
pub use gradient::{
    css_declaration, format_gradient, shade_ramp_gradients, GradientKind, GradientStop,
};
pub use palette::{derive_palette, Harmony, Palette};
pub use scale::{
    geometric_value, spacing_css, spacing_scale, typography_css, typography_scale, FontStack,
    NamingScheme, SpacingStep, TypeStep,
};
pub use shade::{shade_steps, shade_steps_of, Blend, ColorRamp, Ramp, Samples, Shade};
pub use store::{
    DirStorage, MemStorage, RecentList, SavedGradient, SavedPalette, Storage, StoreError,
};
pub use tokens::DesignSystem;
