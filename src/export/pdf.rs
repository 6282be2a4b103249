//! PDF output: a single page holding one content stream.

use std::path::Path;

use kurbo::PathEl;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::{cubic_elements, ExportOptions, Page};
use crate::figure::Figure;
use crate::style::Color;
use crate::Error;

fn real(v: f64) -> Object {
    Object::Real(v as f32)
}

fn color_operands(c: Color) -> Vec<Object> {
    vec![real(c.r), real(c.g), real(c.b)]
}

/// The content-stream operations that paint `figure` on `page`.
pub fn operations(figure: &Figure, page: &Page) -> Vec<Operation> {
    let mut ops = Vec::new();
    let transform = page.transform();

    for element in figure.elements() {
        let style = element.style;
        if !style.is_visible() {
            continue;
        }
        ops.push(Operation::new("q", vec![]));
        if let Some(fill) = style.fill {
            ops.push(Operation::new("rg", color_operands(fill)));
        }
        let stroke = style.visible_stroke();
        if let Some(stroke) = stroke {
            ops.push(Operation::new("RG", color_operands(stroke.color)));
            ops.push(Operation::new("w", vec![real(stroke.width)]));
            ops.push(Operation::new("j", vec![Object::Integer(1)]));
            let dashes = stroke.dash.pattern().iter().map(|&d| real(d)).collect();
            ops.push(Operation::new(
                "d",
                vec![Object::Array(dashes), Object::Integer(0)],
            ));
        }

        for el in cubic_elements(&element.path, transform) {
            let op = match el {
                PathEl::MoveTo(p) => Operation::new("m", vec![real(p.x), real(p.y)]),
                PathEl::LineTo(p) => Operation::new("l", vec![real(p.x), real(p.y)]),
                PathEl::CurveTo(p1, p2, p3) => Operation::new(
                    "c",
                    vec![
                        real(p1.x),
                        real(p1.y),
                        real(p2.x),
                        real(p2.y),
                        real(p3.x),
                        real(p3.y),
                    ],
                ),
                PathEl::ClosePath => Operation::new("h", vec![]),
                PathEl::QuadTo(..) => unreachable!("quadratics were raised"),
            };
            ops.push(op);
        }

        let paint = match (style.fill.is_some(), stroke.is_some()) {
            (true, true) => "B",
            (true, false) => "f",
            _ => "S",
        };
        ops.push(Operation::new(paint, vec![]));
        ops.push(Operation::new("Q", vec![]));
    }
    ops
}

/// Builds the PDF document for `figure`.
pub fn document(figure: &Figure, opts: &ExportOptions) -> Result<Document, Error> {
    let page = Page::for_figure(figure, opts)?;
    let content = Content {
        operations: operations(figure, &page),
    };

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "MediaBox" => vec![0.into(), 0.into(), real(page.width), real(page.height)],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(figure.name()),
        "Producer" => Object::string_literal("tangrams"),
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();
    Ok(doc)
}

pub fn save(figure: &Figure, path: &Path, opts: &ExportOptions) -> Result<(), Error> {
    let mut doc = document(figure, opts)?;
    doc.save(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::style::{Dash, Style};

    fn triangle() -> Figure {
        let mut fig = Figure::new("tri");
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 1.5),
        ];
        fig.polygon(&pts, Style::filled(Color::YELLOW));
        fig.segment(pts[0], pts[2], Style::dashed());
        fig
    }

    #[test]
    fn one_page_with_the_page_size() {
        let fig = triangle();
        let opts = ExportOptions::default();
        let page = Page::for_figure(&fig, &opts).unwrap();
        let doc = document(&fig, &opts).unwrap();

        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);

        let pages_dict = doc.catalog().unwrap().get(b"Pages").unwrap().as_reference().unwrap();
        let media_box = doc
            .get_dictionary(pages_dict)
            .unwrap()
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap();
        let width = media_box[2].as_float().unwrap() as f64;
        assert!((width - page.width).abs() < 1e-3);
    }

    #[test]
    fn paint_operators() {
        let fig = triangle();
        let page = Page::for_figure(&fig, &ExportOptions::default()).unwrap();
        let ops = operations(&fig, &page);
        let names: Vec<&str> = ops.iter().map(|op| op.operator.as_str()).collect();

        assert_eq!(names.iter().filter(|&&n| n == "q").count(), 2);
        assert_eq!(names.iter().filter(|&&n| n == "Q").count(), 2);
        // The filled and outlined triangle, then the stroked diagonal.
        assert!(names.contains(&"B"));
        assert!(names.contains(&"S"));
        assert!(!names.contains(&"f"));
        assert_eq!(names.iter().filter(|&&n| n == "h").count(), 1);

        let dashes: Vec<_> = ops
            .iter()
            .filter(|op| op.operator == "d")
            .map(|op| op.operands[0].as_array().unwrap().len())
            .collect();
        assert_eq!(dashes, vec![0, Dash::Dashed.pattern().len()]);
    }

    #[test]
    fn zero_width_stroke_is_fill_only() {
        let mut fig = triangle();
        fig.segment(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Style::stroked().with_width(0.0),
        );
        fig.polygon(
            &[Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)],
            Style::filled(Color::RED).with_width(0.0),
        );
        let page = Page::for_figure(&fig, &ExportOptions::default()).unwrap();
        let names: Vec<String> = operations(&fig, &page)
            .into_iter()
            .map(|op| op.operator)
            .collect();

        // The bare zero-width segment is skipped and the last polygon is
        // filled without an outline.
        assert_eq!(names.iter().filter(|n| *n == "q").count(), 3);
        assert_eq!(names.iter().filter(|n| *n == "w").count(), 2);
        assert_eq!(names.iter().rev().nth(1).map(String::as_str), Some("f"));
    }
}
