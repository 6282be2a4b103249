//! Dissections of a square, including the classic seven-piece tangram.

use super::{explode, piece_colors};
use crate::figure::Figure;
use crate::geom::{midpoint, weighted, Point};
use crate::style::{Color, LineWidth, Style};

const SIDE: f64 = 4.0;

/// The corners `a` (bottom left), `b` (top left), `c` (top right) and `d`
/// (bottom right).
fn corners() -> [Point; 4] {
    [
        Point::new(0.0, 0.0),
        Point::new(0.0, SIDE),
        Point::new(SIDE, SIDE),
        Point::new(SIDE, 0.0),
    ]
}

/// The seven tangram pieces: two large triangles, the medium triangle, the
/// square, two small triangles and the parallelogram.
fn tangram_pieces() -> [Vec<Point>; 7] {
    let [a, b, c, d] = corners();
    let o = weighted(a, c, 1.0, 1.0);
    let e = midpoint(a, d);
    let f = midpoint(d, c);
    let g = midpoint(o, c);
    let h = midpoint(o, d);
    let i = midpoint(a, o);

    [
        vec![a, b, o],
        vec![b, c, o],
        vec![e, d, f],
        vec![o, h, f, g],
        vec![g, f, c],
        vec![i, o, h],
        vec![a, i, h, e],
    ]
}

pub fn outline(fig: &mut Figure) {
    fig.polygon(&corners(), Style::stroked().with_width(LineWidth::THICK));
}

pub fn diagonals(fig: &mut Figure) {
    let [a, b, c, d] = corners();
    fig.polygon(&[a, b, c, d], Style::stroked().with_width(LineWidth::THICK));
    fig.segment(a, c, Style::dashed());
    fig.segment(b, d, Style::dashed());
}

pub fn tangram_outline(fig: &mut Figure) {
    for piece in tangram_pieces() {
        fig.polygon(&piece, Style::stroked());
    }
    fig.polygon(&corners(), Style::stroked().with_width(LineWidth::THICK));
}

pub fn tangram_colored(fig: &mut Figure) {
    for (piece, color) in tangram_pieces().iter().zip(piece_colors()) {
        fig.polygon(piece, Style::filled(color));
    }
}

pub fn tangram_large_triangles(fig: &mut Figure) {
    let [big1, big2, rest @ ..] = tangram_pieces();
    for piece in &rest {
        fig.polygon(piece, Style::filled(Color::gray(0.85)));
    }
    fig.polygon(&big1, Style::filled(Color::ORANGE).with_width(LineWidth::THICK));
    fig.polygon(&big2, Style::filled(Color::CYAN).with_width(LineWidth::THICK));
}

pub fn halves(fig: &mut Figure) {
    let [a, b, c, d] = corners();
    fig.polygon(&[a, b, c], Style::fill_only(Color::gray(0.8)));
    fig.polygon(&[a, b, c, d], Style::stroked());
    fig.segment(a, c, Style::stroked().with_width(LineWidth::THICK));
}

pub fn quarters(fig: &mut Figure) {
    let [a, b, c, d] = corners();
    let o = midpoint(a, c);
    let (ab, bc, cd, da) = (midpoint(a, b), midpoint(b, c), midpoint(c, d), midpoint(d, a));

    fig.polygon(&[a, ab, o, da], Style::filled(Color::gray(0.3)));
    fig.polygon(&[ab, b, bc, o], Style::stroked());
    fig.polygon(&[o, bc, c, cd], Style::filled(Color::gray(0.3)));
    fig.polygon(&[da, o, cd, d], Style::stroked());
}

pub fn diagonal_quarters(fig: &mut Figure) {
    let [a, b, c, d] = corners();
    let o = midpoint(a, c);
    let fills = [Color::RED, Color::WHITE, Color::RED, Color::WHITE];
    for ((p, q), fill) in [(a, b), (b, c), (c, d), (d, a)].into_iter().zip(fills) {
        fig.polygon(&[p, q, o], Style::filled(fill));
    }
}

pub fn inscribed_square(fig: &mut Figure) {
    let [a, b, c, d] = corners();
    let inner = [midpoint(a, b), midpoint(b, c), midpoint(c, d), midpoint(d, a)];
    fig.polygon(&[a, b, c, d], Style::stroked().with_width(LineWidth::THICK));
    fig.polygon(&inner, Style::filled(Color::YELLOW));
}

pub fn thirds(fig: &mut Figure) {
    let [a, b, c, d] = corners();
    // Trisection points along the bottom and left sides give the columns and
    // rows of the grid.
    let x = |i: u8| weighted(a, d, 3.0 - f64::from(i), f64::from(i)).x;
    let y = |j: u8| weighted(a, b, 3.0 - f64::from(j), f64::from(j)).y;

    fig.polygon(
        &[
            Point::new(x(1), y(1)),
            Point::new(x(1), y(2)),
            Point::new(x(2), y(2)),
            Point::new(x(2), y(1)),
        ],
        Style::fill_only(Color::BLUE),
    );
    for k in 1..3u8 {
        let k = f64::from(k);
        fig.segment(
            weighted(a, d, 3.0 - k, k),
            weighted(b, c, 3.0 - k, k),
            Style::dashed(),
        );
        fig.segment(
            weighted(a, b, 3.0 - k, k),
            weighted(d, c, 3.0 - k, k),
            Style::dashed(),
        );
    }
    fig.polygon(&[a, b, c, d], Style::stroked().with_width(LineWidth::THICK));
}

pub fn tangram_exploded(fig: &mut Figure) {
    let [a, _, c, _] = corners();
    let pieces = tangram_pieces();
    let pieces: Vec<&[Point]> = pieces.iter().map(Vec::as_slice).collect();
    explode(fig, midpoint(a, c), &pieces, 0.25);
}
