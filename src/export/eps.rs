//! Encapsulated PostScript output.
//!
//! There is no PostScript library in our stack, but the subset we need is a
//! handful of path and paint operators, so we write the text directly.

use std::fmt::Write;
use std::path::Path;

use kurbo::PathEl;

use super::{cubic_elements, ExportOptions, Page};
use crate::figure::Figure;
use crate::style::Color;
use crate::Error;

fn rgb(c: Color) -> String {
    format!("{:.4} {:.4} {:.4} setrgbcolor", c.r, c.g, c.b)
}

/// The complete EPS file for `figure`.
pub fn document(figure: &Figure, opts: &ExportOptions) -> Result<String, Error> {
    let page = Page::for_figure(figure, opts)?;
    let mut out = String::new();
    write_document(&mut out, figure, &page)?;
    Ok(out)
}

fn write_document(out: &mut impl Write, figure: &Figure, page: &Page) -> std::fmt::Result {
    writeln!(out, "%!PS-Adobe-3.0 EPSF-3.0")?;
    writeln!(
        out,
        "%%BoundingBox: 0 0 {} {}",
        page.width.ceil() as i64,
        page.height.ceil() as i64
    )?;
    writeln!(
        out,
        "%%HiResBoundingBox: 0 0 {:.4} {:.4}",
        page.width, page.height
    )?;
    writeln!(out, "%%Creator: tangrams")?;
    writeln!(out, "%%Title: {}", figure.name())?;
    writeln!(out, "%%EndComments")?;
    writeln!(out, "gsave")?;
    writeln!(out, "1 setlinejoin")?;

    let transform = page.transform();
    for element in figure.elements() {
        let style = element.style;
        if !style.is_visible() {
            continue;
        }
        writeln!(out, "newpath")?;
        for el in cubic_elements(&element.path, transform) {
            match el {
                PathEl::MoveTo(p) => writeln!(out, "{:.4} {:.4} moveto", p.x, p.y)?,
                PathEl::LineTo(p) => writeln!(out, "{:.4} {:.4} lineto", p.x, p.y)?,
                PathEl::CurveTo(p1, p2, p3) => writeln!(
                    out,
                    "{:.4} {:.4} {:.4} {:.4} {:.4} {:.4} curveto",
                    p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
                )?,
                PathEl::ClosePath => writeln!(out, "closepath")?,
                PathEl::QuadTo(..) => unreachable!("quadratics were raised"),
            }
        }

        let stroke = style.visible_stroke();
        if let Some(fill) = style.fill {
            if stroke.is_some() {
                // `fill` consumes the path, and we still need it for the stroke.
                writeln!(out, "gsave {} fill grestore", rgb(fill))?;
            } else {
                writeln!(out, "{} fill", rgb(fill))?;
            }
        }
        if let Some(stroke) = stroke {
            let dashes: Vec<String> = stroke
                .dash
                .pattern()
                .iter()
                .map(|d| format!("{d:.4}"))
                .collect();
            writeln!(
                out,
                "{} {:.4} setlinewidth [{}] 0 setdash stroke",
                rgb(stroke.color),
                stroke.width,
                dashes.join(" ")
            )?;
        }
    }

    writeln!(out, "grestore")?;
    writeln!(out, "showpage")?;
    writeln!(out, "%%EOF")
}

pub fn save(figure: &Figure, path: &Path, opts: &ExportOptions) -> Result<(), Error> {
    let text = document(figure, opts)?;
    std::fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}
