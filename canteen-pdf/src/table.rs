//! Styled tables with pagination
//!
//! A [`Table`] is a list of rows with fixed column widths. Each row carries
//! its own [`RowStyle`] so headers, striped bodies and highlighted totals can
//! share one grid. When a row does not fit above the bottom margin the table
//! continues on a new page and the header row is repeated.

use crate::color::Color;
use crate::document::PdfBuilder;
use crate::error::{PdfError, PdfResult};
use crate::font::Font;

/// Horizontal alignment of cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// Visual style of a single row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStyle {
    pub font: Font,
    pub font_size: f32,
    pub text_color: Color,
    pub background: Option<Color>,
    /// Draw cell borders
    pub grid: bool,
    pub height: f32,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            font: Font::Helvetica,
            font_size: 10.0,
            text_color: Color::BLACK,
            background: None,
            grid: false,
            height: 18.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub style: RowStyle,
}

impl TableRow {
    pub fn new<S: Into<String>>(cells: impl IntoIterator<Item = S>, style: RowStyle) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            style,
        }
    }
}

/// Vertical page margins used when a table breaks across pages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
}

#[derive(Debug, Clone)]
pub struct Table {
    col_widths: Vec<f32>,
    align: Align,
    padding: f32,
    grid_color: Color,
    header: Option<TableRow>,
    rows: Vec<TableRow>,
}

impl Table {
    pub fn new(col_widths: Vec<f32>) -> Self {
        Self {
            col_widths,
            align: Align::default(),
            padding: 4.0,
            grid_color: Color::BLACK,
            header: None,
            rows: Vec::new(),
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the header row, repeated at the top of every page
    pub fn header(&mut self, row: TableRow) -> &mut Self {
        self.header = Some(row);
        self
    }

    pub fn push(&mut self, row: TableRow) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Total width of all columns
    pub fn width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    /// Draw the table with its top-left corner at `(x, top)`
    ///
    /// Returns the y coordinate of the table's bottom edge on the last page.
    pub fn draw(&self, b: &mut PdfBuilder, x: f32, top: f32, margins: Margins) -> PdfResult<f32> {
        self.validate(b, margins)?;

        let page_top = b.page_size().height - margins.top;
        let mut y = top;

        if let Some(header) = &self.header {
            // Keep the header with the first body row
            let first = self.rows.first().map_or(0.0, |r| r.style.height);
            if y - header.style.height - first < margins.bottom {
                b.new_page();
                y = page_top;
            }
            y = self.draw_row(b, x, y, header);
        }

        for row in &self.rows {
            if y - row.style.height < margins.bottom {
                b.new_page();
                y = page_top;
                if let Some(header) = &self.header {
                    y = self.draw_row(b, x, y, header);
                }
            }
            y = self.draw_row(b, x, y, row);
        }

        Ok(y)
    }

    fn validate(&self, b: &PdfBuilder, margins: Margins) -> PdfResult<()> {
        if self.col_widths.is_empty() {
            return Err(PdfError::InvalidTable("table has no columns".into()));
        }
        let cols = self.col_widths.len();
        for (i, row) in self.header.iter().chain(self.rows.iter()).enumerate() {
            if row.cells.len() != cols {
                return Err(PdfError::InvalidTable(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.cells.len(),
                    cols
                )));
            }
        }

        let usable = b.page_size().height - margins.top - margins.bottom;
        let header_height = self.header.as_ref().map_or(0.0, |h| h.style.height);
        if let Some(row) = self
            .rows
            .iter()
            .find(|r| r.style.height + header_height > usable)
        {
            return Err(PdfError::Layout(format!(
                "row of height {} does not fit on a page",
                row.style.height
            )));
        }
        Ok(())
    }

    /// Draw one row below `top`, returning the new top
    fn draw_row(&self, b: &mut PdfBuilder, x: f32, top: f32, row: &TableRow) -> f32 {
        let style = &row.style;
        let y = top - style.height;

        if let Some(bg) = style.background {
            b.fill_color(bg).fill_rect(x, y, self.width(), style.height);
        }

        if style.grid {
            b.stroke_color(self.grid_color).line_width(1.0);
            let mut cx = x;
            for w in &self.col_widths {
                b.stroke_rect(cx, y, *w, style.height);
                cx += w;
            }
        }

        // Cap height of Helvetica is ~0.72 em
        let baseline = y + (style.height - style.font_size * 0.72) / 2.0;
        b.fill_color(style.text_color);

        let mut cx = x;
        for (cell, w) in row.cells.iter().zip(&self.col_widths) {
            if !cell.is_empty() {
                let text = fit_text(cell, style.font, style.font_size, w - 2.0 * self.padding);
                match self.align {
                    Align::Left => b.text(cx + self.padding, baseline, style.font, style.font_size, &text),
                    Align::Center => {
                        b.text_centered(cx + w / 2.0, baseline, style.font, style.font_size, &text)
                    }
                    Align::Right => b.text_right(
                        cx + w - self.padding,
                        baseline,
                        style.font,
                        style.font_size,
                        &text,
                    ),
                };
            }
            cx += w;
        }

        y
    }
}

/// Truncate `s` with a trailing `...` so it fits in `max_width`
pub(crate) fn fit_text(s: &str, font: Font, size: f32, max_width: f32) -> String {
    if font.text_width(s, size) <= max_width {
        return s.to_string();
    }

    const ELLIPSIS: &str = "...";
    let budget = max_width - font.text_width(ELLIPSIS, size);
    let mut out = String::new();
    let mut width = 0.0;
    for c in s.chars() {
        let mut buf = [0u8; 4];
        let cw = font.text_width(c.encode_utf8(&mut buf), size);
        if width + cw > budget {
            break;
        }
        out.push(c);
        width += cw;
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageSize;

    const MARGINS: Margins = Margins {
        top: 72.0,
        bottom: 72.0,
    };

    fn body(cells: &[&str]) -> TableRow {
        TableRow::new(cells.iter().copied(), RowStyle::default())
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_fit_text_keeps_short_text() {
        assert_eq!(fit_text("Tea", Font::Helvetica, 10.0, 100.0), "Tea");
    }

    #[test]
    fn test_fit_text_truncates_long_text() {
        let long = "Extra Large Masala Dosa With Sambar";
        let fitted = fit_text(long, Font::Helvetica, 10.0, 80.0);
        assert!(fitted.ends_with("..."));
        assert!(fitted.len() < long.len());
        assert!(Font::Helvetica.text_width(&fitted, 10.0) <= 80.0);
    }

    #[test]
    fn test_cell_count_mismatch_is_rejected() {
        let mut t = Table::new(vec![100.0, 50.0]);
        t.push(body(&["only one"]));

        let mut b = PdfBuilder::new(PageSize::A4);
        let err = t.draw(&mut b, 50.0, 700.0, MARGINS).unwrap_err();
        assert!(matches!(err, PdfError::InvalidTable(_)));
    }

    #[test]
    fn test_empty_columns_rejected() {
        let t = Table::new(Vec::new());
        let mut b = PdfBuilder::new(PageSize::A4);
        assert!(matches!(
            t.draw(&mut b, 0.0, 700.0, MARGINS),
            Err(PdfError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_oversized_row_is_rejected() {
        let mut t = Table::new(vec![100.0]);
        t.push(TableRow::new(
            ["tall"],
            RowStyle {
                height: 2000.0,
                ..RowStyle::default()
            },
        ));
        let mut b = PdfBuilder::new(PageSize::A4);
        assert!(matches!(
            t.draw(&mut b, 0.0, 700.0, MARGINS),
            Err(PdfError::Layout(_))
        ));
    }

    #[test]
    fn test_draw_returns_bottom_edge() {
        let mut t = Table::new(vec![100.0, 50.0]);
        t.header(body(&["Item", "Qty"]));
        t.push(body(&["Tea", "2"])).push(body(&["Coffee", "1"]));

        let mut b = PdfBuilder::new(PageSize::A4);
        let bottom = t.draw(&mut b, 50.0, 700.0, MARGINS).unwrap();
        assert_eq!(bottom, 700.0 - 3.0 * 18.0);
        assert_eq!(b.page_count(), 1);
    }

    #[test]
    fn test_background_and_grid_are_drawn() {
        let mut t = Table::new(vec![100.0, 50.0]);
        t.push(TableRow::new(
            ["Tea", "2"],
            RowStyle {
                background: Some(Color::BEIGE),
                grid: true,
                ..RowStyle::default()
            },
        ));

        let mut b = PdfBuilder::new(PageSize::A4);
        t.draw(&mut b, 50.0, 700.0, MARGINS).unwrap();
        let text = String::from_utf8_lossy(&b.build()).into_owned();

        assert!(text.contains("50 682 150 18 re f"));
        assert!(text.contains("50 682 100 18 re S"));
        assert!(text.contains("150 682 50 18 re S"));
    }

    #[test]
    fn test_empty_cells_draw_no_text() {
        let mut t = Table::new(vec![100.0, 100.0]);
        t.push(body(&["", "Subtotal:"]));

        let mut b = PdfBuilder::new(PageSize::A4);
        t.draw(&mut b, 0.0, 700.0, MARGINS).unwrap();
        let text = String::from_utf8_lossy(&b.build()).into_owned();
        assert_eq!(count(&text, " Tj ET"), 1);
    }

    #[test]
    fn test_header_is_not_left_alone_at_page_bottom() {
        let mut t = Table::new(vec![100.0, 50.0]);
        t.header(body(&["Item", "Qty"]));
        t.push(body(&["Tea", "2"]));

        // Room for the header (18) above the margin but not for header + row (36)
        let top = MARGINS.bottom + 30.0;
        let mut b = PdfBuilder::new(PageSize::A4);
        let bottom = t.draw(&mut b, 50.0, top, MARGINS).unwrap();

        assert_eq!(b.page_count(), 2);
        let page_top = PageSize::A4.height - MARGINS.top;
        assert_eq!(bottom, page_top - 36.0);

        let text = String::from_utf8_lossy(&b.build()).into_owned();
        assert_eq!(count(&text, "(Item) Tj"), 1);
    }

    #[test]
    fn test_pagination_repeats_header() {
        let mut t = Table::new(vec![200.0, 50.0]);
        t.header(TableRow::new(
            ["Item", "Qty"],
            RowStyle {
                font: Font::HelveticaBold,
                ..RowStyle::default()
            },
        ));
        for i in 0..60 {
            t.push(body(&[format!("Item {}", i).as_str(), "1"]));
        }

        let mut b = PdfBuilder::new(PageSize::A4);
        t.draw(&mut b, 50.0, 770.0, MARGINS).unwrap();
        let pages = b.page_count();
        assert!(pages >= 2);

        let text = String::from_utf8_lossy(&b.build()).into_owned();
        assert_eq!(count(&text, "(Item) Tj"), pages);
        assert!(text.contains("(Item 59) Tj"));
    }
}
