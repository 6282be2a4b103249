#![doc = include_str!("../README.md")]

pub mod export;
pub mod figure;
pub mod figures;
pub mod geom;
pub mod run;
pub mod style;

use std::path::PathBuf;

pub use export::{ExportOptions, Format, Page};
pub use figure::{Element, Figure};
pub use geom::{extend, midpoint, try_weighted, weighted, Point};
pub use style::{Color, Dash, LineWidth, Stroke, Style};

/// Something went wrong while building or writing a figure.
#[derive(Debug)]
pub enum Error {
    /// A weighted point was asked for with weights summing to zero.
    ZeroWeight,
    /// The named figure has nothing to draw, so it has no page.
    EmptyFigure(String),
    /// No figure in the catalog has this name.
    UnknownFigure(String),
    /// A page option is out of range: the margin must be finite and
    /// non-negative, the resolution finite and positive.
    InvalidOption { name: &'static str, value: f64 },
    /// Creating a directory or writing a file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// lopdf couldn't encode the page.
    Pdf(lopdf::Error),
    /// Formatting the PostScript text failed.
    Eps(std::fmt::Error),
    /// The raster preview of the named figure is too large to allocate.
    Pixmap {
        figure: String,
        width: u32,
        height: u32,
    },
    /// The raster preview couldn't be encoded.
    Png { path: PathBuf, message: String },
}

impl From<lopdf::Error> for Error {
    fn from(e: lopdf::Error) -> Self {
        Error::Pdf(e)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(e: std::fmt::Error) -> Self {
        Error::Eps(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ZeroWeight => write!(f, "the weights sum to zero"),
            Error::EmptyFigure(name) => write!(f, "figure {name} has nothing to draw"),
            Error::UnknownFigure(name) => write!(f, "there is no figure named {name}"),
            Error::Io { path, .. } => write!(f, "failed to write {}", path.display()),
            Error::InvalidOption { name, value } => write!(f, "invalid {name}: {value}"),
            Error::Pdf(_) => write!(f, "failed to encode pdf"),
            Error::Eps(_) => write!(f, "failed to format eps"),
            Error::Pixmap {
                figure,
                width,
                height,
            } => write!(f, "can't allocate a {width}x{height} image for {figure}"),
            Error::Png { path, message } => {
                write!(f, "failed to render {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Pdf(e) => Some(e),
            Error::Eps(e) => Some(e),
            _ => None,
        }
    }
}
