//! Page geometry for the drama report, computed without touching a PDF
//! backend. All coordinates are PDF points with the origin at the bottom-left
//! of the page.

use crate::store::Record;

// ── Page + style constants ────────────────────────────────────────────────────

pub const PAGE_WIDTH: f32 = 612.0; // US Letter
pub const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 72.0;
const FRAME_PADDING: f32 = 6.0;

pub const TITLE: &str = "Saved K-Dramas";
const TITLE_SIZE: f32 = 24.0;
const TITLE_SPACE_AFTER: f32 = 20.0;
const SPACER: f32 = 18.0; // 0.25 inch

pub const HEADERS: [&str; 2] = ["Drama Name", "Genre"];
pub const COLUMN_WIDTHS: [f32; 2] = [250.0, 250.0];

const HEADER_SIZE: f32 = 14.0;
const HEADER_PAD_TOP: f32 = 3.0;
const HEADER_PAD_BOTTOM: f32 = 12.0;
const BODY_SIZE: f32 = 12.0;
const BODY_PAD: f32 = 10.0;
const LEADING: f32 = 1.2;

pub const GRID_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
pub const DARK_BLUE: Color = Color::rgb(0.0, 0.0, 0.545);
pub const WHITE_SMOKE: Color = Color::rgb(0.961, 0.961, 0.961);
pub const LIGHT_GREY: Color = Color::rgb(0.827, 0.827, 0.827);

/// Body row backgrounds, cycled from the first data row.
pub const ROW_BACKGROUNDS: [Color; 2] = [WHITE_SMOKE, LIGHT_GREY];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

// ── Layout model ──────────────────────────────────────────────────────────────

/// A single line of text placed at a baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
    pub size: f32,
    pub font: Font,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x: f32,
    pub width: f32,
    pub text: TextRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    /// Position of the record in the store.
    Body(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub kind: RowKind,
    /// Bottom edge.
    pub y: f32,
    pub height: f32,
    pub background: Color,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub title: Option<TextRun>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<Page>,
}

impl ReportLayout {
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.pages.iter().flat_map(|p| p.rows.iter())
    }

    pub fn body_row_count(&self) -> usize {
        self.rows()
            .filter(|r| matches!(r.kind, RowKind::Body(_)))
            .count()
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Lay out the title and the record table, flowing rows onto new pages when
/// they would cross the bottom margin. The header is drawn once, on the first
/// page.
pub fn layout(records: &[Record]) -> ReportLayout {
    let top = PAGE_HEIGHT - MARGIN - FRAME_PADDING;
    let bottom = MARGIN + FRAME_PADDING;
    let table_x = (PAGE_WIDTH - COLUMN_WIDTHS.iter().sum::<f32>()) / 2.0;

    let title_baseline = top - TITLE_SIZE;
    let title = TextRun {
        text: TITLE.to_string(),
        x: (PAGE_WIDTH - text_width(TITLE, TITLE_SIZE, Font::Helvetica)) / 2.0,
        baseline: title_baseline,
        size: TITLE_SIZE,
        font: Font::Helvetica,
        color: DARK_BLUE,
    };
    let mut cursor = top - TITLE_SIZE * LEADING - TITLE_SPACE_AFTER - SPACER;

    let mut pages = vec![Page {
        title: Some(title),
        rows: Vec::new(),
    }];

    let header_height = HEADER_SIZE * LEADING + HEADER_PAD_TOP + HEADER_PAD_BOTTOM;
    cursor -= header_height;
    let header = build_row(
        RowKind::Header,
        &HEADERS,
        table_x,
        cursor,
        header_height,
        BLUE,
        RowStyle {
            size: HEADER_SIZE,
            pad_bottom: HEADER_PAD_BOTTOM,
            font: Font::HelveticaBold,
            color: WHITE_SMOKE,
        },
    );
    pages[0].rows.push(header);

    let body_height = BODY_SIZE * LEADING + BODY_PAD * 2.0;
    for (index, record) in records.iter().enumerate() {
        if cursor - body_height < bottom {
            pages.push(Page::default());
            cursor = top;
        }
        cursor -= body_height;
        let row = build_row(
            RowKind::Body(index),
            &[record.name.as_str(), record.genre.as_str()],
            table_x,
            cursor,
            body_height,
            ROW_BACKGROUNDS[index % ROW_BACKGROUNDS.len()],
            RowStyle {
                size: BODY_SIZE,
                pad_bottom: BODY_PAD,
                font: Font::Helvetica,
                color: BLACK,
            },
        );
        if let Some(page) = pages.last_mut() {
            page.rows.push(row);
        }
    }

    ReportLayout { pages }
}

struct RowStyle {
    size: f32,
    pad_bottom: f32,
    font: Font,
    color: Color,
}

fn build_row(
    kind: RowKind,
    texts: &[&str],
    table_x: f32,
    y: f32,
    height: f32,
    background: Color,
    style: RowStyle,
) -> Row {
    let mut x = table_x;
    let cells = texts
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(text, width)| {
            let text_w = text_width(text, style.size, style.font);
            let cell = Cell {
                x,
                width,
                text: TextRun {
                    text: (*text).to_string(),
                    x: x + (width - text_w) / 2.0,
                    baseline: y + style.pad_bottom + style.size * (LEADING - 1.0),
                    size: style.size,
                    font: style.font,
                    color: style.color,
                },
            };
            x += width;
            cell
        })
        .collect();

    Row {
        kind,
        y,
        height,
        background,
        cells,
    }
}

// ── Font metrics ──────────────────────────────────────────────────────────────

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Helvetica-Bold runs about this much wider than the regular face.
const BOLD_FACTOR: f32 = 1.06;

/// Approximate rendered width of `text` in points. Characters outside ASCII
/// use the average lowercase width.
pub fn text_width(text: &str, size: f32, font: Font) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| match c as u32 {
            code @ 32..=126 => u32::from(HELVETICA_WIDTHS[(code - 32) as usize]),
            _ => 556,
        })
        .sum();
    let width = units as f32 * size / 1000.0;
    match font {
        Font::Helvetica => width,
        Font::HelveticaBold => width * BOLD_FACTOR,
    }
}
