//! Readers for the files `tangrams` writes, used by its integration tests and
//! benchmarks.

use kurbo::{BezPath, Rect, Shape};

// Every `MoveTo` after a `ClosePath` starts a new path, so a single svg path
// element with several subpaths comes back as several `BezPath`s.
pub fn svg_to_bezpaths(tree: &usvg::Tree) -> Vec<BezPath> {
    let mut ret = Vec::new();

    fn pt(p: usvg::tiny_skia_path::Point) -> kurbo::Point {
        kurbo::Point::new(p.x as f64, p.y as f64)
    }

    fn add_group(group: &usvg::Group, ret: &mut Vec<BezPath>) {
        for child in group.children() {
            match child {
                usvg::Node::Group(group) => add_group(group, ret),
                usvg::Node::Path(path) => {
                    let Some(data) = path.data().clone().transform(path.abs_transform()) else {
                        continue;
                    };
                    let mut bez = BezPath::new();
                    for seg in data.segments() {
                        match seg {
                            usvg::tiny_skia_path::PathSegment::MoveTo(p) => {
                                if !bez.elements().is_empty() {
                                    ret.push(std::mem::take(&mut bez));
                                }
                                bez.move_to(pt(p));
                            }
                            usvg::tiny_skia_path::PathSegment::LineTo(p) => bez.line_to(pt(p)),
                            usvg::tiny_skia_path::PathSegment::QuadTo(p0, p1) => {
                                bez.quad_to(pt(p0), pt(p1))
                            }
                            usvg::tiny_skia_path::PathSegment::CubicTo(p0, p1, p2) => {
                                bez.curve_to(pt(p0), pt(p1), pt(p2))
                            }
                            usvg::tiny_skia_path::PathSegment::Close => bez.close_path(),
                        }
                    }

                    if !bez.elements().is_empty() {
                        ret.push(bez);
                    }
                }
                _ => {}
            }
        }
    }

    add_group(tree.root(), &mut ret);
    ret
}

/// The number of `<path>` elements that survived parsing.
///
/// usvg drops elements that paint nothing, so this is the number of visible
/// drawing elements.
pub fn svg_path_count(tree: &usvg::Tree) -> usize {
    fn count(group: &usvg::Group) -> usize {
        group
            .children()
            .iter()
            .map(|child| match child {
                usvg::Node::Group(group) => count(group),
                usvg::Node::Path(_) => 1,
                _ => 0,
            })
            .sum()
    }
    count(tree.root())
}

pub fn bezier_bounding_box<'a>(paths: impl Iterator<Item = &'a BezPath>) -> Rect {
    let mut rect = Rect::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );

    for p in paths {
        rect = rect.union(p.bounding_box());
    }
    rect
}

/// Reads the `%%HiResBoundingBox` comment of an EPS file, falling back to the
/// integer `%%BoundingBox`.
pub fn eps_bounding_box(eps: &str) -> Option<Rect> {
    let parse = |key: &str| -> Option<Rect> {
        let line = eps.lines().find_map(|l| l.strip_prefix(key))?;
        let nums: Vec<f64> = line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;
        match nums[..] {
            [x0, y0, x1, y1] => Some(Rect::new(x0, y0, x1, y1)),
            _ => None,
        }
    };
    parse("%%HiResBoundingBox:").or_else(|| parse("%%BoundingBox:"))
}
