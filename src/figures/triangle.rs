//! Dissections of an equilateral triangle, ending with Dudeney's
//! four-piece triangle-to-square dissection.

use super::{centroid, explode, piece_colors};
use crate::figure::Figure;
use crate::geom::{extend, foot, midpoint, weighted, Point};
use crate::style::{Color, Dash, LineWidth, Style};

const SIDE: f64 = 5.0;

/// Bottom-left, bottom-right and top corners.
fn corners() -> [Point; 3] {
    [
        Point::new(0.0, 0.0),
        Point::new(SIDE, 0.0),
        Point::new(SIDE / 2.0, SIDE * 3.0f64.sqrt() / 2.0),
    ]
}

pub fn outline(fig: &mut Figure) {
    fig.polygon(&corners(), Style::stroked().with_width(LineWidth::THICK));
}

pub fn medial(fig: &mut Figure) {
    let [p, q, r] = corners();
    fig.polygon(&[p, q, r], Style::stroked().with_width(LineWidth::THICK));
    fig.polygon(
        &[midpoint(p, q), midpoint(q, r), midpoint(r, p)],
        Style::filled(Color::gray(0.6)),
    );
}

fn sierpinski_fill(fig: &mut Figure, [p, q, r]: [Point; 3], depth: u32) {
    if depth == 0 {
        fig.polygon(&[p, q, r], Style::fill_only(Color::PURPLE));
        return;
    }
    let (pq, qr, rp) = (midpoint(p, q), midpoint(q, r), midpoint(r, p));
    sierpinski_fill(fig, [p, pq, rp], depth - 1);
    sierpinski_fill(fig, [pq, q, qr], depth - 1);
    sierpinski_fill(fig, [rp, qr, r], depth - 1);
}

pub fn sierpinski(fig: &mut Figure) {
    sierpinski_fill(fig, corners(), 2);
    fig.polygon(&corners(), Style::stroked());
}

/// The point `(i, j)` of the triangular lattice with spacing a third of the
/// side: `i` steps towards the bottom-right corner and `j` towards the top.
fn lattice(i: u8, j: u8) -> Point {
    let [p, q, r] = corners();
    if j == 3 {
        return r;
    }
    let (i, j) = (f64::from(i), f64::from(j));
    let s = 3.0 - j;
    let base = weighted(p, q, s - i, i);
    weighted(base, r, s, j)
}

pub fn ninths(fig: &mut Figure) {
    for j in 0..3u8 {
        for i in 0..3 - j {
            let up = [lattice(i, j), lattice(i + 1, j), lattice(i, j + 1)];
            let fill = if (i + j) % 2 == 0 {
                Color::GREEN
            } else {
                Color::YELLOW
            };
            fig.polygon(&up, Style::filled(fill));
            if i + j < 2 {
                let down = [lattice(i + 1, j), lattice(i + 1, j + 1), lattice(i, j + 1)];
                fig.polygon(&down, Style::filled(Color::WHITE));
            }
        }
    }
}

/// The points of Dudeney's construction, named after his diagram.
#[derive(Debug)]
struct Dudeney {
    a: Point,
    b: Point,
    c: Point,
    d: Point,
    e: Point,
    f: Point,
    g: Point,
    h: Point,
    j: Point,
    k: Point,
    l: Point,
    m: Point,
    /// The side of the square with the triangle's area.
    side: f64,
}

impl Dudeney {
    fn new() -> Self {
        let [b, c, a] = corners();
        let d = midpoint(a, b);
        let e = midpoint(b, c);

        // Continue the altitude AE past E by EB. The semicircle on AF then
        // meets the extension of EB at H, with EH the mean proportional of
        // AE and EF: the side of the square.
        let eb = e.distance(&b);
        let f = extend(a, e, eb / a.distance(&e));
        let g = midpoint(a, f);
        let side = (a.distance(&e) * e.distance(&f)).sqrt();
        let h = extend(e, b, side / eb - 1.0);

        // J is where the circle about E through H crosses CA. Writing
        // J = C + t (A - C) gives a quadratic in t.
        let (vx, vy) = (c.x - e.x, c.y - e.y);
        let (wx, wy) = (a.x - c.x, a.y - c.y);
        let ww = wx * wx + wy * wy;
        let vw = vx * wx + vy * wy;
        let vv = vx * vx + vy * vy;
        let t = (-vw + (vw * vw - ww * (vv - side * side)).sqrt()) / ww;
        let j = weighted(c, a, 1.0 - t, t);

        // K is on CA, half a side further towards C.
        let t_k = t - eb / ww.sqrt();
        let k = weighted(c, a, 1.0 - t_k, t_k);

        let l = foot(d, e, j);
        let m = foot(k, e, j);

        Dudeney {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            j,
            k,
            l,
            m,
            side,
        }
    }

    fn pieces(&self) -> [Vec<Point>; 4] {
        let Dudeney {
            a, b, c, d, e, j, k, l, m, ..
        } = *self;
        [
            vec![b, e, l, d],
            vec![e, c, k, m],
            vec![m, k, j],
            vec![d, l, j, a],
        ]
    }
}

pub fn dudeney_construction(fig: &mut Figure) {
    let dd = Dudeney::new();
    let construction = Style::stroked()
        .with_width(LineWidth::THIN)
        .with_dash(Dash::Dashed);

    fig.polygon(&[dd.a, dd.b, dd.c], Style::stroked().with_width(LineWidth::THICK));

    fig.segment(dd.a, dd.f, construction);
    let radius = dd.a.distance(&dd.f) / 2.0;
    fig.arc(dd.g, radius, 90.0, 180.0, construction);
    fig.segment(dd.e, dd.h, construction);
    let j_angle = (dd.j.y - dd.e.y).atan2(dd.j.x - dd.e.x).to_degrees();
    fig.arc(dd.e, dd.side, 180.0, j_angle - 180.0, construction);

    let cut = Style::stroked()
        .with_width(LineWidth::THICK)
        .with_stroke_color(Color::RED);
    fig.segment(dd.e, dd.j, cut);
    fig.segment(dd.d, dd.l, cut);
    fig.segment(dd.k, dd.m, cut);
}

pub fn dudeney_pieces(fig: &mut Figure) {
    for (piece, color) in Dudeney::new().pieces().iter().zip(piece_colors()) {
        fig.polygon(piece, Style::filled(color));
    }
}

pub fn dudeney_exploded(fig: &mut Figure) {
    let dd = Dudeney::new();
    let pieces = dd.pieces();
    let pieces: Vec<&[Point]> = pieces.iter().map(Vec::as_slice).collect();
    explode(fig, centroid(&[dd.a, dd.b, dd.c]), &pieces, 0.35);
}
