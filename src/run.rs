//! The batch driver: build every selected figure and write its files.

use std::path::{Path, PathBuf};

use crate::export::{self, ExportOptions, Format};
use crate::figures::{self, Entry};
use crate::Error;

/// What to draw and where to put it.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub out_dir: PathBuf,
    /// Every selected figure is written once per format, in this order.
    pub formats: Vec<Format>,
    /// Figure names to restrict to. Empty means all of them.
    pub only: Vec<String>,
    pub options: ExportOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            out_dir: PathBuf::from("figures"),
            formats: vec![Format::Pdf, Format::Eps],
            only: Vec::new(),
            options: ExportOptions::default(),
        }
    }
}

/// The catalog entries named by `only`, in catalog order, or the whole
/// catalog if `only` is empty.
pub fn select(only: &[String]) -> Result<Vec<Entry>, Error> {
    let catalog = figures::catalog();
    if let Some(unknown) = only
        .iter()
        .find(|name| !catalog.iter().any(|e| e.name == name.as_str()))
    {
        return Err(Error::UnknownFigure(unknown.clone()));
    }
    Ok(catalog
        .iter()
        .filter(|e| only.is_empty() || only.iter().any(|name| name == e.name))
        .copied()
        .collect())
}

fn create_dir(dir: &Path) -> Result<(), Error> {
    std::fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_owned(),
        source,
    })
}

/// Draws the selected figures one after the other, stopping at the first
/// failure. Names and page options are checked before anything is written.
/// Returns the files written, in order.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let entries = select(&config.only)?;
    config.options.validate()?;
    create_dir(&config.out_dir)?;

    let mut written = Vec::with_capacity(entries.len() * config.formats.len());
    for entry in &entries {
        let figure = entry.build();
        for &format in &config.formats {
            written.push(export::write(
                &figure,
                &config.out_dir,
                format,
                &config.options,
            )?);
        }
        tracing::info!(
            figure = entry.name,
            elements = figure.elements().len(),
            "exported"
        );
    }

    tracing::info!(
        figures = entries.len(),
        files = written.len(),
        dir = %config.out_dir.display(),
        "done"
    );
    Ok(written)
}
