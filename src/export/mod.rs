//! Writing figures to files.
//!
//! All formats share one [`Page`]: the figure's bounding box, padded by the
//! margin and half the widest stroke, mapped to PostScript points.

use std::path::{Path, PathBuf};

use kurbo::{Affine, BezPath, PathEl, Rect};

use crate::figure::Figure;
use crate::Error;

pub mod eps;
pub mod pdf;
pub mod png;
pub mod svg;

/// PostScript points per figure unit (one centimetre).
pub const POINTS_PER_UNIT: f64 = 72.0 / 2.54;

/// An output file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Format {
    Pdf,
    Eps,
    Svg,
    Png,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Pdf, Format::Eps, Format::Svg, Format::Png];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Pdf => "pdf",
            Format::Eps => "eps",
            Format::Svg => "svg",
            Format::Png => "png",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportOptions {
    /// Blank space around the drawing, in points.
    pub margin: f64,
    /// Resolution of raster previews.
    pub dpi: f64,
}

impl ExportOptions {
    /// Rejects a margin that is negative or not finite, and a resolution
    /// that is not positive and finite.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(Error::InvalidOption {
                name: "margin",
                value: self.margin,
            });
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(Error::InvalidOption {
                name: "dpi",
                value: self.dpi,
            });
        }
        Ok(())
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            margin: 2.0,
            dpi: 150.0,
        }
    }
}

/// Where a figure lands on its page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Page {
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    transform: Affine,
}

impl Page {
    pub fn for_figure(figure: &Figure, opts: &ExportOptions) -> Result<Page, Error> {
        opts.validate()?;
        let bbox = figure
            .bounding_box()
            .ok_or_else(|| Error::EmptyFigure(figure.name().to_owned()))?;
        Ok(Page::for_box(bbox, opts.margin + figure.max_stroke_width() / 2.0))
    }

    fn for_box(bbox: Rect, pad: f64) -> Page {
        let transform = Affine::translate((pad, pad))
            * Affine::scale(POINTS_PER_UNIT)
            * Affine::translate(-bbox.origin().to_vec2());
        Page {
            width: bbox.width() * POINTS_PER_UNIT + 2.0 * pad,
            height: bbox.height() * POINTS_PER_UNIT + 2.0 * pad,
            transform,
        }
    }

    /// Figure units to points, with y pointing up and the origin at the
    /// bottom-left corner of the page (PDF and PostScript conventions).
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Figure units to points, with y pointing down and the origin at the
    /// top-left corner of the page (svg and raster conventions).
    pub fn flipped(&self) -> Affine {
        Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, self.height]) * self.transform
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// The elements of `path` mapped through `transform`, with every quadratic
/// raised to a cubic. PDF and PostScript only have cubic operators.
pub(crate) fn cubic_elements(path: &BezPath, transform: Affine) -> Vec<PathEl> {
    let mut start = kurbo::Point::ZERO;
    let mut last = start;
    path.elements()
        .iter()
        .map(|&el| {
            let el = match transform * el {
                PathEl::QuadTo(p1, p2) => {
                    let c = kurbo::QuadBez::new(last, p1, p2).raise();
                    PathEl::CurveTo(c.p1, c.p2, c.p3)
                }
                el => el,
            };
            match el {
                PathEl::MoveTo(p) => {
                    start = p;
                    last = p;
                }
                PathEl::ClosePath => last = start,
                PathEl::LineTo(p) | PathEl::CurveTo(_, _, p) | PathEl::QuadTo(_, p) => last = p,
            }
            el
        })
        .collect()
}

/// The file that `write` produces for this figure and format.
pub fn output_path(dir: &Path, figure: &Figure, format: Format) -> PathBuf {
    dir.join(figure.name()).with_extension(format.extension())
}

/// Writes `figure` into `dir` as `<name>.<ext>` and returns the path written.
pub fn write(
    figure: &Figure,
    dir: &Path,
    format: Format,
    opts: &ExportOptions,
) -> Result<PathBuf, Error> {
    let path = output_path(dir, figure, format);
    match format {
        Format::Pdf => pdf::save(figure, &path, opts)?,
        Format::Eps => eps::save(figure, &path, opts)?,
        Format::Svg => svg::save(figure, &path, opts)?,
        Format::Png => png::save(figure, &path, opts)?,
    }
    tracing::debug!(figure = figure.name(), path = %path.display(), "wrote");
    Ok(path)
}
