//! Figures with curved sides: circles and arcs laid over a square or a line.

use crate::figure::{append_arc, arc_path, on_circle, Figure};
use crate::geom::{midpoint, weighted, Point};
use crate::style::{Color, LineWidth, Style};

const SIDE: f64 = 4.0;

fn square() -> [Point; 4] {
    [
        Point::new(0.0, 0.0),
        Point::new(0.0, SIDE),
        Point::new(SIDE, SIDE),
        Point::new(SIDE, 0.0),
    ]
}

pub fn inscribed_circle(fig: &mut Figure) {
    let [a, b, c, d] = square();
    fig.polygon(&[a, b, c, d], Style::stroked().with_width(LineWidth::THICK));
    fig.circle(midpoint(a, c), SIDE / 2.0, Style::filled(Color::gray(0.8)));
}

/// A closed quarter disc with its right angle at `corner`.
fn sector(fig: &mut Figure, corner: Point, radius: f64, start_deg: f64, style: Style) {
    let mut path = kurbo::BezPath::new();
    path.move_to(corner.to_kurbo());
    path.line_to(on_circle(corner, radius, start_deg).to_kurbo());
    append_arc(&mut path, corner, radius, start_deg, 90.0);
    path.close_path();
    fig.push(path, style);
}

pub fn corner_sectors(fig: &mut Figure) {
    let [a, b, c, d] = square();
    fig.polygon(&[a, b, c, d], Style::stroked().with_width(LineWidth::THICK));
    // Each sector opens into the square.
    let sectors = [(a, 0.0), (b, 270.0), (c, 180.0), (d, 90.0)];
    let colors = [Color::RED, Color::BLUE, Color::RED, Color::BLUE];
    for ((corner, start), color) in sectors.into_iter().zip(colors) {
        sector(fig, corner, SIDE / 2.0, start, Style::filled(color));
    }
}

pub fn side_semicircles(fig: &mut Figure) {
    let [a, b, c, d] = square();
    fig.polygon(&[a, b, c, d], Style::filled(Color::YELLOW).with_width(LineWidth::THICK));
    // Semicircles bulging out of each side.
    let sides = [(a, b, 90.0), (b, c, 0.0), (c, d, 270.0), (d, a, 180.0)];
    for (p, q, start) in sides {
        fig.arc(midpoint(p, q), SIDE / 2.0, start, 180.0, Style::dashed());
    }
}

/// Archimedes' shoemaker's knife: the region inside a semicircle and outside
/// the two smaller semicircles on the pieces of its diameter.
pub fn arbelos(fig: &mut Figure) {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(SIDE, 0.0);
    let c = weighted(a, b, 2.0, 1.0);

    let big = (midpoint(a, b), a.distance(&b) / 2.0);
    let left = (midpoint(a, c), a.distance(&c) / 2.0);
    let right = (midpoint(c, b), c.distance(&b) / 2.0);

    // Over the top from A to B, then back along the small semicircles.
    let mut region = arc_path(big.0, big.1, 180.0, -180.0);
    append_arc(&mut region, right.0, right.1, 0.0, 180.0);
    append_arc(&mut region, left.0, left.1, 0.0, 180.0);
    region.close_path();
    fig.push(region, Style::filled(Color::gray(0.75)));

    fig.segment(a, b, Style::stroked());
    let top = Point::new(c.x, (big.1 * big.1 - (c.x - big.0.x).powi(2)).sqrt());
    fig.segment(c, top, Style::dashed());
}
