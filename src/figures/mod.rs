//! The figures, in the order they are drawn.
//!
//! Each figure is a plain function that pushes elements onto a [`Figure`].
//! Coordinates are in centimetres with y pointing up; every interior vertex
//! is derived from the corners of the outer shape.

use crate::figure::Figure;
use crate::geom::{extend, Point};
use crate::style::{Color, Style};

mod arcs;
mod square;
mod triangle;

/// A named figure.
#[derive(Clone, Copy)]
pub struct Entry {
    /// Base name of the output files.
    pub name: &'static str,
    pub draw: fn(&mut Figure),
}

impl Entry {
    const fn new(name: &'static str, draw: fn(&mut Figure)) -> Self {
        Entry { name, draw }
    }

    pub fn build(&self) -> Figure {
        let mut figure = Figure::new(self.name);
        (self.draw)(&mut figure);
        figure
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Entry").field(&self.name).finish()
    }
}

static CATALOG: &[Entry] = &[
    Entry::new("figura001", square::outline),
    Entry::new("figura002", square::diagonals),
    Entry::new("figura003", square::tangram_outline),
    Entry::new("figura004", square::tangram_colored),
    Entry::new("figura005", square::tangram_large_triangles),
    Entry::new("figura006", square::halves),
    Entry::new("figura007", square::quarters),
    Entry::new("figura008", square::diagonal_quarters),
    Entry::new("figura009", square::inscribed_square),
    Entry::new("figura010", square::thirds),
    Entry::new("figura011", square::tangram_exploded),
    Entry::new("figura012", triangle::outline),
    Entry::new("figura013", triangle::medial),
    Entry::new("figura014", triangle::sierpinski),
    Entry::new("figura015", triangle::ninths),
    Entry::new("figura016", triangle::dudeney_construction),
    Entry::new("figura017", triangle::dudeney_pieces),
    Entry::new("figura018", triangle::dudeney_exploded),
    Entry::new("figura019", arcs::inscribed_circle),
    Entry::new("figura020", arcs::corner_sectors),
    Entry::new("figura021", arcs::side_semicircles),
    Entry::new("figura022", arcs::arbelos),
];

/// Every figure, in drawing order.
pub fn catalog() -> &'static [Entry] {
    CATALOG
}

/// Colours for the pieces of a dissection, in piece order.
pub fn piece_colors() -> [Color; 7] {
    [
        Color::from_rgb8(0x00, 0x5F, 0x73),
        Color::from_rgb8(0x0A, 0x93, 0x96),
        Color::from_rgb8(0x94, 0xD2, 0xBD),
        Color::from_rgb8(0xE9, 0xD8, 0xA6),
        Color::from_rgb8(0xEE, 0x9B, 0x00),
        Color::from_rgb8(0xCA, 0x67, 0x02),
        Color::from_rgb8(0xAE, 0x20, 0x12),
    ]
}

/// The average of the vertices.
fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let (x, y) = points
        .iter()
        .fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
    Point::new(x / n, y / n)
}

/// Draws each piece filled with its own colour, pushed away from `center`.
///
/// A piece whose vertices average to `m` moves by `k * (m - center)`, so
/// pieces further out move further and nothing overlaps.
fn explode(fig: &mut Figure, center: Point, pieces: &[&[Point]], k: f64) {
    let colors = piece_colors();
    for (i, piece) in pieces.iter().enumerate() {
        let m = centroid(piece);
        let target = extend(center, m, k);
        let (dx, dy) = (target.x - m.x, target.y - m.y);
        let moved: Vec<Point> = piece.iter().map(|p| p.offset(dx, dy)).collect();
        fig.polygon(&moved, Style::filled(colors[i % colors.len()]));
    }
}
