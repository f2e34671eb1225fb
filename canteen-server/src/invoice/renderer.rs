//! Invoice PDF layout
//!
//! Renders an [`InvoiceDocument`] onto A4 pages with canteen-pdf: centered
//! title, order info, the itemized table with summary rows, then the footer.

use canteen_pdf::{
    Align, Color, Font, Margins, PageSize, PdfBuilder, PdfResult, RowStyle, Table, TableRow,
};

use super::document::{COLUMN_HEADERS, FOOTER, InvoiceDocument, SummaryRow, TITLE};

const INCH: f32 = 72.0;
const MARGIN: f32 = INCH;
const COLUMN_WIDTHS: [f32; 4] = [3.0 * INCH, 1.0 * INCH, 1.5 * INCH, 1.5 * INCH];

const TITLE_COLOR: Color = Color::from_hex(0x1a535c);
const HEADER_BG: Color = Color::from_hex(0x4ecdc4);
const GRAND_TOTAL_BG: Color = Color::from_hex(0xff6b6b);

const TITLE_SIZE: f32 = 24.0;
const TITLE_SPACE_AFTER: f32 = 30.0;
const BODY_SIZE: f32 = 10.0;
const LEADING: f32 = 12.0;
const HEADER_ROW_HEIGHT: f32 = 30.0;
const BODY_ROW_HEIGHT: f32 = 18.0;

/// Invoice PDF renderer
pub struct InvoiceRenderer {
    page: PageSize,
}

impl Default for InvoiceRenderer {
    fn default() -> Self {
        Self::new(PageSize::A4)
    }
}

impl InvoiceRenderer {
    pub fn new(page: PageSize) -> Self {
        Self { page }
    }

    /// Render a document to PDF bytes
    pub fn render(&self, doc: &InvoiceDocument) -> PdfResult<Vec<u8>> {
        let mut b = PdfBuilder::new(self.page);
        b.title(&format!("Invoice #{}", doc.order_id));

        let y = self.page.height - MARGIN;
        let y = self.render_header(&mut b, doc, y);
        let y = self.render_table(&mut b, doc, y)?;
        self.render_footer(&mut b, y);

        Ok(b.build())
    }

    /// Title and info lines; returns the y below them
    fn render_header(&self, b: &mut PdfBuilder, doc: &InvoiceDocument, top: f32) -> f32 {
        let mut y = top - TITLE_SIZE;
        b.fill_color(TITLE_COLOR);
        b.text_centered(self.page.width / 2.0, y, Font::HelveticaBold, TITLE_SIZE, TITLE);
        // Spacer below the title block
        y -= TITLE_SIZE * 0.2 + TITLE_SPACE_AFTER + 12.0;

        b.fill_color(Color::BLACK);
        for (label, value) in &doc.info {
            y -= BODY_SIZE;
            let value = format!(" {value}");
            b.text_runs(
                MARGIN,
                y,
                BODY_SIZE,
                &[
                    (Font::HelveticaBold, label.as_str()),
                    (Font::Helvetica, value.as_str()),
                ],
            );
            y -= LEADING - BODY_SIZE;
        }

        y - 20.0
    }

    /// Itemized table with summary rows; returns the y below it
    fn render_table(&self, b: &mut PdfBuilder, doc: &InvoiceDocument, top: f32) -> PdfResult<f32> {
        let mut table = Table::new(COLUMN_WIDTHS.to_vec()).align(Align::Center);

        table.header(TableRow::new(
            COLUMN_HEADERS,
            RowStyle {
                font: Font::HelveticaBold,
                font_size: 12.0,
                text_color: Color::WHITESMOKE,
                background: Some(HEADER_BG),
                grid: true,
                height: HEADER_ROW_HEIGHT,
            },
        ));

        for (i, line) in doc.lines.iter().enumerate() {
            let background = if i % 2 == 0 { Color::BEIGE } else { Color::WHITE };
            table.push(TableRow::new(
                line.iter().cloned(),
                RowStyle {
                    background: Some(background),
                    grid: true,
                    height: BODY_ROW_HEIGHT,
                    ..RowStyle::default()
                },
            ));
        }

        for row in &doc.summary {
            table.push(summary_row(row));
        }

        let x = (self.page.width - table.width()) / 2.0;
        table.draw(
            b,
            x,
            top,
            Margins {
                top: MARGIN,
                bottom: MARGIN,
            },
        )
    }

    fn render_footer(&self, b: &mut PdfBuilder, table_bottom: f32) {
        let mut y = table_bottom - 30.0;
        if y - LEADING * (FOOTER.len() as f32) < MARGIN {
            b.new_page();
            y = self.page.height - MARGIN;
        }

        b.fill_color(Color::GREY);
        for line in FOOTER {
            y -= BODY_SIZE;
            b.text_centered(self.page.width / 2.0, y, Font::Helvetica, BODY_SIZE, line);
            y -= LEADING - BODY_SIZE;
        }
    }
}

fn summary_row(row: &SummaryRow) -> TableRow {
    let style = if row.emphasized {
        RowStyle {
            font: Font::HelveticaBold,
            text_color: Color::WHITESMOKE,
            background: Some(GRAND_TOTAL_BG),
            height: BODY_ROW_HEIGHT,
            ..RowStyle::default()
        }
    } else {
        RowStyle {
            font: Font::HelveticaBold,
            height: BODY_ROW_HEIGHT,
            ..RowStyle::default()
        }
    };
    TableRow::new(
        [String::new(), String::new(), row.label.clone(), row.amount.clone()],
        style,
    )
}
