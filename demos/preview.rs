//! Render every generator into a static `preview.html`, save sample
//! artifacts through the file store and write the palette export files.
//!
//! Run with `cargo run --example preview`, then open `preview.html`.

use std::{
    env,
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
};

use log::info;
use palette_kit::{
    color, css_declaration, export, format_gradient, palette_csv, palette_json, palette_pdf,
    palette_xlsx, shade_steps, spacing_css, spacing_scale, store, typography_css,
    typography_scale, ColorRamp, DesignSystem, DirStorage, FontStack, GradientKind, GradientStop,
    Harmony, MemStorage, NamingScheme, Palette, PaletteEntry, Ramp, RecentList, SavedGradient,
    SavedPalette, Storage,
};
use rgb::RGB8;

type Err = Box<dyn Error>;

const BASE: &str = "#3b82f6";

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn swatch_row(fh: &mut impl Write, colors: &[String], width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 0px\"><tr>")?;
    for hex in colors {
        let text = color::hex_to_rgb(hex)
            .map(|c| color::text_color_for(c).css_value())
            .unwrap_or("#000000");
        writeln!(
            fh,
            "  <td style=\"width: {width}px; height: 30px; background-color: {hex}; \
             color: {text}; font-family: monospace; font-size: 10px; \
             text-align: center\">{hex}</td>"
        )?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr></table><br/>")?;
    Ok(())
}

fn code_block(fh: &mut impl Write, title: &str, code: &str) -> Result<(), Err> {
    writeln!(
        fh,
        "<h4>{title}</h4><pre style=\"background: #f5f5f5; padding: 8px\">{}</pre>",
        escape_html(code)
    )?;
    Ok(())
}

fn main() -> Result<(), Err> {
    env_logger::init();

    let mut fh = BufWriter::new(File::create("preview.html")?);
    writeln!(
        fh,
        "<html>\n<head>\n<title>palette-kit: preview {}</title>\n</head>\n<body>",
        env::args().next().unwrap_or_default()
    )?;

    writeln!(fh, "<h3>Harmony palettes of {BASE}</h3>")?;
    for harmony in Harmony::ALL {
        if let Some(palette) = Palette::generate(BASE, harmony) {
            swatch_row(&mut fh, &palette.colors, 80, harmony.name())?;
        }
    }

    writeln!(fh, "<h3>Shade ramp</h3>")?;
    let shades = shade_steps(BASE, 10)?;
    let hexes: Vec<String> = shades.iter().map(|s| s.hex.clone()).collect();
    swatch_row(&mut fh, &hexes, 60, "10 shades, near-black to near-white")?;
    // a denser strip straight off the ramp iterator
    let base = color::parse_color(BASE)?;
    let ramp = Ramp::through(&[RGB8 { r: 0, g: 0, b: 0 }, base, RGB8 { r: 255, g: 255, b: 255 }]);
    let strip: Vec<String> = ramp.samples(0., 100., 128).map(|(_, c)| color::to_hex(c)).collect();
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 0px\"><tr>")?;
    for hex in &strip {
        writeln!(fh, "  <td style=\"width: 4px; height: 14px; background-color: {hex}\"></td>")?;
    }
    writeln!(fh, "</tr></table><br/>")?;

    writeln!(fh, "<h3>Gradients</h3>")?;
    let stops = vec![GradientStop::new("#667eea", 0.), GradientStop::new("#764ba2", 100.)];
    for (kind, angle) in
        [(GradientKind::Linear, 90.), (GradientKind::Radial, 0.), (GradientKind::Conic, 45.)]
    {
        let css = format_gradient(&stops, kind, angle);
        writeln!(
            fh,
            "<div style=\"width: 320px; height: 40px; background: {css}\"></div>\
             <code>{}</code><br/><br/>",
            escape_html(&css_declaration(&css))
        )?;
    }

    let spacing = spacing_scale(8., 1.5, 8, NamingScheme::TShirt);
    code_block(&mut fh, "Spacing scale CSS", &spacing_css(&spacing, 8., 1.5))?;
    let typography = typography_scale(16., 1.25);
    code_block(
        &mut fh,
        "Typography scale CSS",
        &typography_css(&typography, 16., 1.25, FontStack::Inter),
    )?;
    code_block(&mut fh, "Design-system tokens", &DesignSystem::default().stylesheet())?;

    writeln!(fh, "</body>\n</html>")?;
    fh.flush()?;
    info!("wrote preview.html");

    // Persist a sample of each artifact the way the tools would.
    let mut storage: Box<dyn Storage> = match DirStorage::in_data_dir("palette-kit") {
        Some(dir) => Box::new(dir),
        None => Box::new(MemStorage::default()),
    };
    let css = format_gradient(&stops, GradientKind::Linear, 90.);
    let mut gradients: RecentList<SavedGradient> =
        RecentList::load(store::SAVED_GRADIENTS_KEY, store::SAVED_GRADIENTS_CAP, &*storage);
    gradients.insert(SavedGradient::new(css, GradientKind::Linear, stops.clone()));
    gradients.save(&mut *storage)?;

    let palette =
        Palette::generate(BASE, Harmony::Tetradic).ok_or("base color did not parse")?;
    let mut palettes: RecentList<SavedPalette> =
        RecentList::load(store::SAVED_PALETTES_KEY, store::SAVED_PALETTES_CAP, &*storage);
    palettes
        .insert(SavedPalette::new(palette.colors.clone(), palette.base.clone(), palette.harmony));
    palettes.save(&mut *storage)?;
    info!("saved {} gradients, {} palettes", gradients.len(), palettes.len());

    // Export files, named the way the palette tool downloads them.
    let entries: Vec<PaletteEntry> =
        palette.colors.iter().map(|hex| PaletteEntry::new(hex.clone(), BASE)).collect();
    fs::write(export::JSON_FILENAME, palette_json(&entries)?)?;
    fs::write(export::CSV_FILENAME, palette_csv(&entries))?;
    fs::write(export::XLSX_FILENAME, palette_xlsx(&entries)?)?;
    fs::write(export::PDF_FILENAME, palette_pdf(&entries))?;
    info!("wrote palette export files");

    Ok(())
}
