use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Pt,
    Rect, Rgb,
};

use crate::report::layout::{self, Color, Font, Page, ReportLayout, TextRun};
use crate::report::ReportError;

const LAYER: &str = "Layer 1";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Helvetica => &self.regular,
            Font::HelveticaBold => &self.bold,
        }
    }
}

/// Draw a computed layout into a PDF and return the serialized bytes.
pub fn render(report: &ReportLayout) -> Result<Vec<u8>, ReportError> {
    let width = mm(layout::PAGE_WIDTH);
    let height = mm(layout::PAGE_HEIGHT);
    let (doc, first_page, first_layer) = PdfDocument::new(layout::TITLE, width, height, LAYER);

    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };

    for (i, page) in report.pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = doc.add_page(width, height, LAYER);
            doc.get_page(page_idx).get_layer(layer_idx)
        };
        draw_page(&layer, page, &fonts);
    }

    save(doc)
}

fn save(doc: PdfDocumentReference) -> Result<Vec<u8>, ReportError> {
    Ok(doc.save_to_bytes()?)
}

fn draw_page(layer: &PdfLayerReference, page: &Page, fonts: &Fonts) {
    if let Some(title) = &page.title {
        draw_text(layer, title, fonts);
    }

    layer.set_outline_color(pdf_color(layout::BLACK));
    layer.set_outline_thickness(layout::GRID_WIDTH);

    for row in &page.rows {
        for cell in &row.cells {
            // Filled background with the grid stroked on top.
            layer.set_fill_color(pdf_color(row.background));
            let rect = Rect::new(
                mm(cell.x),
                mm(row.y),
                mm(cell.x + cell.width),
                mm(row.y + row.height),
            )
            .with_mode(PaintMode::FillStroke);
            layer.add_rect(rect);

            draw_text(layer, &cell.text, fonts);
        }
    }
}

fn draw_text(layer: &PdfLayerReference, run: &TextRun, fonts: &Fonts) {
    layer.set_fill_color(pdf_color(run.color));
    layer.use_text(
        run.text.as_str(),
        run.size,
        mm(run.x),
        mm(run.baseline),
        fonts.get(run.font),
    );
}

fn mm(points: f32) -> Mm {
    Mm::from(Pt(points))
}

fn pdf_color(color: Color) -> printpdf::Color {
    printpdf::Color::Rgb(Rgb::new(color.r, color.g, color.b, None))
}
