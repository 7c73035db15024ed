//! Generate a pattern and save it as an SVG preview.
//!
//! ```text
//! cargo run --example pattern_svg -- demos/configs/gosper.ron gosper.svg
//! cargo run --example pattern_svg -- heart heart.svg
//! ```
//!
//! The first argument is either a RON config file or a bare pattern key,
//! which uses that pattern's defaults.

use anyhow::{anyhow, Context, Result};
use plotty_curves::prelude::*;
use std::path::Path as FsPath;
use svg::node::element::path::Data;
use svg::node::element::Path as SvgPath;
use svg::Document;

fn load(arg: &str) -> Result<PatternConfig> {
    if let Some(cfg) = PatternConfig::from_key(arg) {
        return Ok(cfg);
    }
    let text = std::fs::read_to_string(FsPath::new(arg))
        .with_context(|| format!("reading config {}", arg))?;
    Ok(PatternConfig::from_ron(&text)?)
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let source = args
        .next()
        .ok_or_else(|| anyhow!("usage: pattern_svg <config.ron|pattern-key> [out.svg]"))?;
    let out = args.next().unwrap_or_else(|| "pattern.svg".to_string());

    let cfg = load(&source)?;
    let path = cfg.generate()?;
    let (min_x, max_x, min_y, max_y) = bounding_box(&path)?;

    let mut data = Data::new();
    for (i, point) in path.points().enumerate() {
        // SVG's y axis points down; flip so the preview matches plot space.
        let xy = (point.x(), -point.y());
        data = if i == 0 { data.move_to(xy) } else { data.line_to(xy) };
    }
    let svg_path = SvgPath::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 0.5)
        .set("d", data);

    let margin = 5.0;
    let document = Document::new()
        .set(
            "viewBox",
            (
                min_x - margin,
                -max_y - margin,
                (max_x - min_x) + 2.0 * margin,
                (max_y - min_y) + 2.0 * margin,
            ),
        )
        .add(svg_path);

    svg::save(&out, &document).with_context(|| format!("writing {}", out))?;
    println!(
        "{} ({} points, {:.1} units of travel) -> {}",
        cfg.name(),
        path.0.len(),
        path.path_length(),
        out
    );
    Ok(())
}
