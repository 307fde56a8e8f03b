//! Fixed-layout PDF invoice for a single container record.
//!
//! The PDF text operator lays glyphs out left-to-right with no shaping, so
//! Persian text must be prepared first: reshape letters into their joined
//! presentation forms, then reorder the line into visual order. Skipping
//! either step produces disconnected or mirrored output, which is a
//! rendering defect here, not a cosmetic one.

use std::io::Cursor;

use printpdf::{IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};
use unicode_bidi::{BidiInfo, Level};

use crate::models::Container;

const PAGE_W: f64 = 210.0;
const PAGE_H: f64 = 297.0;
const MARGIN: f64 = 18.0;
const LABEL_W: f64 = 70.0;
const VALUE_W: f64 = 104.0;
const ROW_H: f64 = 9.0;
const ROW_GAP: f64 = 1.5;

const TITLE_SIZE: f64 = 18.0;
const SUBTITLE_SIZE: f64 = 14.0;
const CELL_SIZE: f64 = 11.0;

pub const SUBTITLE: &str = "فاکتور ورود/خروج کانتینر";

/// The nine labeled rows of the invoice, in their fixed order. Empty values
/// render as the `-` placeholder.
pub fn rows(record: &Container) -> [(&'static str, String); 9] {
    [
        ("صاحب کالا", cell(&record.owner)),
        ("تاریخ ورود", cell(&record.entry_date)),
        ("راننده ورود", cell(&record.driver_name)),
        ("شماره موبایل ورود", cell(&record.entry_phone)),
        ("تاریخ خروج", cell(&record.exit_date)),
        ("راننده خروج", cell(&record.exit_driver_name)),
        ("شماره موبایل خروج", cell(&record.exit_phone)),
        ("نوع کانتینر", cell(&record.container_type)),
        ("شماره کانتینر", cell(&record.container_no)),
    ]
}

fn cell(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => "-".to_string(),
    }
}

/// Prepare text for the PDF text operator: contextual Arabic presentation
/// forms, then bidi reordering to visual order with an RTL base level.
/// Latin/digit runs (container numbers, dates) pass through unchanged.
pub fn visual(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let shaped = arabic_reshaper::arabic_reshape(text);
    let bidi = BidiInfo::new(&shaped, Some(Level::rtl()));
    let paragraph = &bidi.paragraphs[0];
    bidi.reorder_line(paragraph, paragraph.range.clone())
        .into_owned()
}

/// Render one record as a single-page A4 invoice. Deterministic one-shot
/// transform; the caller streams the bytes and never caches them.
pub fn render(company: &str, record: &Container, font_bytes: &[u8]) -> Result<Vec<u8>, String> {
    let (doc, page, layer) = PdfDocument::new(
        format!("factor-{}", record.id),
        Mm(PAGE_W),
        Mm(PAGE_H),
        "invoice",
    );

    let font = doc
        .add_external_font(Cursor::new(font_bytes))
        .map_err(|e| format!("font embedding failed: {e}"))?;

    let layer = doc.get_page(page).get_layer(layer);

    let title = visual(company);
    layer.use_text(
        title.as_str(),
        TITLE_SIZE,
        Mm(centered_x(&title, TITLE_SIZE)),
        Mm(PAGE_H - 30.0),
        &font,
    );

    let subtitle = visual(SUBTITLE);
    layer.use_text(
        subtitle.as_str(),
        SUBTITLE_SIZE,
        Mm(centered_x(&subtitle, SUBTITLE_SIZE)),
        Mm(PAGE_H - 42.0),
        &font,
    );

    let mut top = PAGE_H - 56.0;
    for (label, value) in rows(record) {
        draw_cell(&layer, &font, MARGIN, top, LABEL_W, &visual(label));
        draw_cell(&layer, &font, MARGIN + LABEL_W, top, VALUE_W, &visual(&value));
        top -= ROW_H + ROW_GAP;
    }

    doc.save_to_bytes()
        .map_err(|e| format!("pdf serialization failed: {e}"))
}

fn draw_cell(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    x: f64,
    top: f64,
    width: f64,
    text: &str,
) {
    let border = Line {
        points: vec![
            (Point::new(Mm(x), Mm(top)), false),
            (Point::new(Mm(x + width), Mm(top)), false),
            (Point::new(Mm(x + width), Mm(top - ROW_H)), false),
            (Point::new(Mm(x), Mm(top - ROW_H)), false),
        ],
        is_closed: true,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    };
    layer.add_shape(border);
    layer.use_text(text, CELL_SIZE, Mm(x + 2.0), Mm(top - ROW_H + 2.5), font);
}

/// Approximate horizontal centering. The font's exact advance widths are not
/// exposed at this layer; half an em per char is close enough for a one-line
/// heading.
fn centered_x(text: &str, font_size: f64) -> f64 {
    let em_mm = font_size * 0.3528;
    let width = text.chars().count() as f64 * em_mm * 0.5;
    ((PAGE_W - width) / 2.0).max(MARGIN)
}
