//! svg output, mostly for previews in a browser.

use std::path::Path;

use svg::node::element::path::Data;
use svg::Document;

use super::{ExportOptions, Page};
use crate::figure::Figure;
use crate::Error;

/// Builds the svg document for `figure`. Coordinates are in points.
pub fn document(figure: &Figure, opts: &ExportOptions) -> Result<Document, Error> {
    let page = Page::for_figure(figure, opts)?;
    let transform = page.flipped();
    let mut document = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("viewBox", (0.0, 0.0, page.width, page.height));

    for element in figure.elements() {
        let style = element.style;
        if !style.is_visible() {
            continue;
        }

        let mut data = Data::new();
        let p = |point: kurbo::Point| {
            let point = transform * point;
            (point.x, point.y)
        };
        for el in element.path.elements() {
            data = match *el {
                kurbo::PathEl::MoveTo(p0) => data.move_to(p(p0)),
                kurbo::PathEl::LineTo(p0) => data.line_to(p(p0)),
                kurbo::PathEl::QuadTo(p0, p1) => data.quadratic_curve_to((p(p0), p(p1))),
                kurbo::PathEl::CurveTo(p0, p1, p2) => data.cubic_curve_to((p(p0), p(p1), p(p2))),
                kurbo::PathEl::ClosePath => data.close(),
            };
        }

        let mut path = svg::node::element::Path::new()
            .set("d", data)
            .set(
                "fill",
                style.fill.map_or_else(|| "none".to_owned(), |c| c.to_hex()),
            );
        match style.visible_stroke() {
            Some(stroke) => {
                path = path
                    .set("stroke", stroke.color.to_hex())
                    .set("stroke-width", stroke.width)
                    .set("stroke-linejoin", "round");
                let dashes = stroke.dash.pattern();
                if !dashes.is_empty() {
                    let dashes: Vec<String> = dashes.iter().map(|d| d.to_string()).collect();
                    path = path.set("stroke-dasharray", dashes.join(" "));
                }
            }
            None => path = path.set("stroke", "none"),
        }
        document = document.add(path);
    }
    Ok(document)
}

pub fn save(figure: &Figure, path: &Path, opts: &ExportOptions) -> Result<(), Error> {
    let document = document(figure, opts)?;
    svg::save(path, &document).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}
