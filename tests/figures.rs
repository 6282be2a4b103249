//! Writes every catalog figure in every format and reads the files back.

use std::path::Path;

use libtest_mimic::{Arguments, Failed, Trial};
use tangrams::figures::{catalog, Entry};
use tangrams::{export, ExportOptions, Format, Page};
use tangrams_util::{bezier_bounding_box, eps_bounding_box, svg_path_count, svg_to_bezpaths};

fn main() {
    let args = Arguments::from_args();
    let tests = catalog()
        .iter()
        .map(|&entry| Trial::test(entry.name, move || check_figure(entry)))
        .collect();

    libtest_mimic::run(&args, tests).exit();
}

fn check_figure(entry: Entry) -> Result<(), Failed> {
    let dir = tempfile::tempdir()?;
    let opts = ExportOptions::default();
    let figure = entry.build();
    let page = Page::for_figure(&figure, &opts)?;

    for format in Format::ALL {
        export::write(&figure, dir.path(), format, &opts)?;
    }

    let written: Vec<_> = glob::glob(&format!("{}/{}.*", dir.path().display(), entry.name))?
        .collect::<Result<_, _>>()?;
    if written.len() != Format::ALL.len() {
        return Err(format!("expected {} files, found {written:?}", Format::ALL.len()).into());
    }

    check_svg(&dir.path().join(format!("{}.svg", entry.name)), &page, figure.elements().len())?;
    check_eps(&dir.path().join(format!("{}.eps", entry.name)), &page)?;
    check_pdf(&dir.path().join(format!("{}.pdf", entry.name)), &page)?;
    check_png(&dir.path().join(format!("{}.png", entry.name)), &page, &opts)?;
    Ok(())
}

fn check_svg(path: &Path, page: &Page, elements: usize) -> Result<(), Failed> {
    let input = std::fs::read_to_string(path)?;
    let tree = usvg::Tree::from_str(&input, &usvg::Options::default())?;

    let count = svg_path_count(&tree);
    if count != elements {
        return Err(format!("{count} svg paths for {elements} elements").into());
    }

    let size = tree.size();
    if (f64::from(size.width()) - page.width).abs() > 0.01
        || (f64::from(size.height()) - page.height).abs() > 0.01
    {
        return Err(format!("svg size {size:?} doesn't match the page {page:?}").into());
    }

    // Everything drawn stays on the page.
    let paths = svg_to_bezpaths(&tree);
    let bbox = bezier_bounding_box(paths.iter());
    let page_rect = page.rect().inflate(0.5, 0.5);
    let far_corner = kurbo::Point::new(bbox.x1, bbox.y1);
    if !page_rect.contains(bbox.origin()) || !page_rect.contains(far_corner) {
        return Err(format!("drawing {bbox:?} spills off the page {page_rect:?}").into());
    }
    Ok(())
}

fn check_eps(path: &Path, page: &Page) -> Result<(), Failed> {
    let eps = std::fs::read_to_string(path)?;
    if !eps.starts_with("%!PS-Adobe-3.0 EPSF-3.0") {
        return Err("missing EPSF header".into());
    }
    let bbox = eps_bounding_box(&eps).ok_or("no bounding box comment")?;
    if (bbox.width() - page.width).abs() > 1e-3 || (bbox.height() - page.height).abs() > 1e-3 {
        return Err(format!("eps box {bbox:?} doesn't match the page {page:?}").into());
    }
    if !eps.trim_end().ends_with("%%EOF") {
        return Err("missing %%EOF trailer".into());
    }
    Ok(())
}

fn check_pdf(path: &Path, page: &Page) -> Result<(), Failed> {
    let doc = lopdf::Document::load(path)?;
    let pages = doc.get_pages();
    let Some(&page_id) = pages.values().next() else {
        return Err("no pages".into());
    };
    if pages.len() != 1 {
        return Err(format!("expected one page, found {}", pages.len()).into());
    }

    // The media box lives on the page tree node.
    let parent = doc.get_dictionary(page_id)?.get(b"Parent")?.as_reference()?;
    let media_box = doc.get_dictionary(parent)?.get(b"MediaBox")?.as_array()?;
    let nums = media_box
        .iter()
        .map(|n| n.as_float())
        .collect::<Result<Vec<_>, _>>()?;
    let [x0, y0, x1, y1] = nums[..] else {
        return Err(format!("bad media box {media_box:?}").into());
    };
    if x0 != 0.0
        || y0 != 0.0
        || (f64::from(x1) - page.width).abs() > 1e-3
        || (f64::from(y1) - page.height).abs() > 1e-3
    {
        return Err(format!("media box {nums:?} doesn't match the page {page:?}").into());
    }
    Ok(())
}

fn check_png(path: &Path, page: &Page, opts: &ExportOptions) -> Result<(), Failed> {
    let pixmap = tiny_skia::Pixmap::load_png(path)?;
    let expected = page.width * opts.dpi / 72.0;
    if (f64::from(pixmap.width()) - expected).abs() > 1.0 {
        return Err(format!("png is {} pixels wide, expected about {expected}", pixmap.width()).into());
    }
    Ok(())
}
