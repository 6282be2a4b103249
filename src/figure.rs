//! A figure: a named, ordered list of styled paths.

use kurbo::{BezPath, Rect, Shape as _};

use crate::geom::Point;
use crate::style::Style;

/// Accuracy, in figure units, of the Bézier approximation of arcs and circles.
const ARC_TOLERANCE: f64 = 1e-4;

/// One thing to draw.
#[derive(Clone, Debug)]
pub struct Element {
    pub path: BezPath,
    pub style: Style,
}

/// A figure under construction.
///
/// Elements are painted in the order they were added, so later elements
/// cover earlier ones.
#[derive(Clone, Debug)]
pub struct Figure {
    name: String,
    elements: Vec<Element>,
}

impl Figure {
    /// An empty figure. `name` becomes the base name of the output files.
    pub fn new(name: impl Into<String>) -> Self {
        Figure {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add an arbitrary path.
    pub fn push(&mut self, path: BezPath, style: Style) {
        if path.elements().is_empty() {
            return;
        }
        self.elements.push(Element { path, style });
    }

    /// A closed polygon through `points`.
    pub fn polygon(&mut self, points: &[Point], style: Style) {
        if let Some(mut path) = open_path(points) {
            path.close_path();
            self.push(path, style);
        }
    }

    /// An open chain of line segments through `points`.
    pub fn polyline(&mut self, points: &[Point], style: Style) {
        if let Some(path) = open_path(points) {
            self.push(path, style);
        }
    }

    pub fn segment(&mut self, a: Point, b: Point, style: Style) {
        self.polyline(&[a, b], style);
    }

    /// A circular arc, starting at `start_deg` and sweeping `sweep_deg`
    /// counter-clockwise. Angles are in degrees from the positive x axis.
    pub fn arc(&mut self, center: Point, radius: f64, start_deg: f64, sweep_deg: f64, style: Style) {
        self.push(arc_path(center, radius, start_deg, sweep_deg), style);
    }

    pub fn circle(&mut self, center: Point, radius: f64, style: Style) {
        let circle = kurbo::Circle::new(center.to_kurbo(), radius);
        self.push(circle.to_path(ARC_TOLERANCE), style);
    }

    /// The smallest rectangle containing every path, ignoring stroke widths.
    ///
    /// Returns `None` if there is nothing to draw.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.elements
            .iter()
            .map(|e| e.path.bounding_box())
            .reduce(|a, b| a.union(b))
    }

    /// The widest stroke, in points.
    pub fn max_stroke_width(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| e.style.stroke_width())
            .fold(0.0, f64::max)
    }
}

fn open_path(points: &[Point]) -> Option<BezPath> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(first.to_kurbo());
    for p in rest {
        path.line_to(p.to_kurbo());
    }
    Some(path)
}

/// The point at angle `deg` on the circle of the given center and radius.
pub fn on_circle(center: Point, radius: f64, deg: f64) -> Point {
    let (sin, cos) = deg.to_radians().sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// An arc as a path, starting with a move to its first point.
///
/// The result can be extended with `line_to` and further arcs to build
/// regions with curved sides.
pub fn arc_path(center: Point, radius: f64, start_deg: f64, sweep_deg: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(on_circle(center, radius, start_deg).to_kurbo());
    append_arc(&mut path, center, radius, start_deg, sweep_deg);
    path
}

/// Continue `path` along an arc. The path's current point should already be
/// the arc's starting point.
pub fn append_arc(path: &mut BezPath, center: Point, radius: f64, start_deg: f64, sweep_deg: f64) {
    let arc = kurbo::Arc {
        center: center.to_kurbo(),
        radii: kurbo::Vec2::new(radius, radius),
        start_angle: start_deg.to_radians(),
        sweep_angle: sweep_deg.to_radians(),
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(ARC_TOLERANCE));
}

#[cfg(test)]
mod tests {
    use kurbo::{PathEl, Shape};

    use super::*;
    use crate::style::LineWidth;

    #[test]
    fn polygon_is_closed() {
        let mut fig = Figure::new("square");
        fig.polygon(
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 0.0),
            ],
            Style::stroked(),
        );
        let els = fig.elements()[0].path.elements();
        assert_eq!(els.len(), 5);
        assert_eq!(els[0], PathEl::MoveTo(kurbo::Point::new(0.0, 0.0)));
        assert_eq!(els[4], PathEl::ClosePath);
        assert_eq!(fig.bounding_box(), Some(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert!((fig.elements()[0].path.area().abs() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_input_draws_nothing() {
        let mut fig = Figure::new("nothing");
        fig.polygon(&[], Style::stroked());
        fig.polyline(&[Point::new(1.0, 1.0)], Style::stroked());
        assert!(fig.is_empty());
        assert_eq!(fig.bounding_box(), None);
        assert_eq!(fig.max_stroke_width(), 0.0);
    }

    #[test]
    fn arc_endpoints() {
        let c = Point::new(1.0, 1.0);
        let path = arc_path(c, 2.0, 0.0, 90.0);
        let start = path.elements().first().and_then(|el| el.end_point()).unwrap();
        let end = path.elements().last().and_then(|el| el.end_point()).unwrap();
        assert!((start - kurbo::Point::new(3.0, 1.0)).hypot() < 1e-9);
        assert!((end - kurbo::Point::new(1.0, 3.0)).hypot() < 1e-9);
    }

    #[test]
    fn circle_bounds_and_widths() {
        let mut fig = Figure::new("circle");
        fig.circle(Point::new(0.0, 0.0), 1.0, Style::stroked());
        fig.segment(
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Style::stroked().with_width(LineWidth::THICKEST),
        );
        let bbox = fig.bounding_box().unwrap();
        assert!((bbox.x0 + 1.0).abs() < 1e-3);
        assert!((bbox.y0 + 1.0).abs() < 1e-3);
        assert!((bbox.x1 - 3.0).abs() < 1e-12);
        assert!((bbox.y1 - 1.0).abs() < 1e-3);
        assert_eq!(fig.max_stroke_width(), LineWidth::THICKEST);
    }

    #[test]
    fn on_circle_angles() {
        let p = on_circle(Point::new(0.0, 0.0), 2.0, 180.0);
        assert!((p.x + 2.0).abs() < 1e-12 && p.y.abs() < 1e-12);
    }
}
