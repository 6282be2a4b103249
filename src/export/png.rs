//! Raster previews, rendered with tiny-skia.

use std::path::Path;

use kurbo::{Affine, PathEl};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, StrokeDash, Transform};

use super::{ExportOptions, Page};
use crate::figure::Figure;
use crate::style::Color;
use crate::Error;

fn paint(c: Color) -> Paint<'static> {
    let [r, g, b] = c.to_rgb8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 0xFF);
    paint.anti_alias = true;
    paint
}

fn skia_path(elts: impl IntoIterator<Item = PathEl>) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for elt in elts {
        match elt {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p0, p1) => {
                pb.quad_to(p0.x as f32, p0.y as f32, p1.x as f32, p1.y as f32)
            }
            PathEl::CurveTo(p0, p1, p2) => pb.cubic_to(
                p0.x as f32,
                p0.y as f32,
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

/// Renders `figure` at `opts.dpi` on a white background.
pub fn render(figure: &Figure, opts: &ExportOptions) -> Result<Pixmap, Error> {
    let page = Page::for_figure(figure, opts)?;
    let scale = opts.dpi / 72.0;
    let width = (page.width * scale).ceil() as u32;
    let height = (page.height * scale).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| Error::Pixmap {
        figure: figure.name().to_owned(),
        width,
        height,
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = Affine::scale(scale) * page.flipped();
    for element in figure.elements() {
        let style = element.style;
        if !style.is_visible() {
            continue;
        }
        let Some(path) = skia_path(element.path.iter().map(|el| transform * el)) else {
            continue;
        };
        if let Some(fill) = style.fill {
            pixmap.fill_path(
                &path,
                &paint(fill),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
        if let Some(stroke) = style.visible_stroke() {
            let dashes: Vec<f32> = stroke
                .dash
                .pattern()
                .iter()
                .map(|d| (d * scale) as f32)
                .collect();
            let skia_stroke = tiny_skia::Stroke {
                width: (stroke.width * scale) as f32,
                line_join: tiny_skia::LineJoin::Round,
                dash: StrokeDash::new(dashes, 0.0),
                ..Default::default()
            };
            pixmap.stroke_path(
                &path,
                &paint(stroke.color),
                &skia_stroke,
                Transform::identity(),
                None,
            );
        }
    }
    Ok(pixmap)
}

pub fn save(figure: &Figure, path: &Path, opts: &ExportOptions) -> Result<(), Error> {
    let pixmap = render(figure, opts)?;
    pixmap.save_png(path).map_err(|e| Error::Png {
        path: path.to_owned(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::style::Style;

    #[test]
    fn size_follows_dpi() {
        let mut fig = Figure::new("sq");
        fig.polygon(
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 2.54),
                Point::new(2.54, 2.54),
                Point::new(2.54, 0.0),
            ],
            Style::fill_only(Color::BLACK),
        );
        let opts = ExportOptions {
            margin: 0.0,
            dpi: 100.0,
        };
        // One inch of figure at 100 dpi, with no margin and no stroke. The
        // size is rounded up, so rounding error in the unit conversion can
        // cost one extra pixel.
        let pixmap = render(&fig, &opts).unwrap();
        assert!((100..=101).contains(&pixmap.width()));
        assert_eq!(pixmap.width(), pixmap.height());

        let center = pixmap.pixel(50, 50).unwrap();
        assert_eq!((center.red(), center.green(), center.blue()), (0, 0, 0));
    }

    #[test]
    fn zero_width_stroke_leaves_no_mark() {
        let mut fig = Figure::new("ghost");
        fig.polygon(
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 0.0),
            ],
            Style::stroked().with_width(0.0),
        );
        let pixmap = render(&fig, &ExportOptions::default()).unwrap();
        assert!(pixmap
            .pixels()
            .iter()
            .all(|p| (p.red(), p.green(), p.blue()) == (255, 255, 255)));
    }

    #[test]
    fn oversized_raster_names_the_figure() {
        let mut fig = Figure::new("huge");
        fig.segment(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Style::stroked());
        let opts = ExportOptions {
            dpi: 1e9,
            ..ExportOptions::default()
        };
        assert_matches::assert_matches!(
            render(&fig, &opts),
            Err(Error::Pixmap { figure, .. }) if figure == "huge"
        );
    }

    #[test]
    fn background_is_white() {
        let mut fig = Figure::new("dot");
        fig.circle(Point::new(0.0, 0.0), 1.0, Style::stroked());
        let pixmap = render(&fig, &ExportOptions::default()).unwrap();
        let center = pixmap.pixel(pixmap.width() / 2, pixmap.height() / 2).unwrap();
        assert_eq!(center.red(), 255);
        assert_eq!(center.alpha(), 255);
    }
}
