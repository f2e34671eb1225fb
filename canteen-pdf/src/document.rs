//! PDF document builder
//!
//! Accumulates page content streams with a fluent drawing API and serializes
//! them into a complete PDF 1.4 file. Coordinates are in points with the
//! origin at the bottom-left corner of the page.

use crate::color::Color;
use crate::encoding::literal;
use crate::font::Font;

/// Page dimensions in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width: 595.28,
        height: 841.89,
    };
}

// Fixed object numbers. Page objects follow in (page, content) pairs.
const CATALOG_OBJ: usize = 1;
const PAGES_OBJ: usize = 2;
const FIRST_FONT_OBJ: usize = 3;
const INFO_OBJ: usize = FIRST_FONT_OBJ + Font::ALL.len();
const FIRST_PAGE_OBJ: usize = INFO_OBJ + 1;

/// Format a number for a content stream: at most two decimals, no trailing zeros
pub(crate) fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

/// PDF document builder
///
/// Text is painted with the current fill color, so call [`fill_color`]
/// before drawing text in a color other than the last fill.
///
/// [`fill_color`]: PdfBuilder::fill_color
#[derive(Debug)]
pub struct PdfBuilder {
    size: PageSize,
    /// Finished page content streams
    pages: Vec<Vec<u8>>,
    /// Content stream of the page being drawn
    content: Vec<u8>,
    title: Option<String>,
}

impl PdfBuilder {
    /// Create a builder with one empty page
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            pages: Vec::new(),
            content: Vec::with_capacity(4096),
            title: None,
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.size
    }

    /// Number of pages, including the one being drawn
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Set the document title stored in the info dictionary
    pub fn title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    // === Graphics state ===

    pub fn fill_color(&mut self, color: Color) -> &mut Self {
        self.op(format!("{} rg", color.operands()))
    }

    pub fn stroke_color(&mut self, color: Color) -> &mut Self {
        self.op(format!("{} RG", color.operands()))
    }

    pub fn line_width(&mut self, width: f32) -> &mut Self {
        self.op(format!("{} w", num(width)))
    }

    // === Shapes ===

    /// Fill a rectangle whose bottom-left corner is at `(x, y)`
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        self.op(format!("{} {} {} {} re f", num(x), num(y), num(w), num(h)))
    }

    /// Stroke the outline of a rectangle
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        self.op(format!("{} {} {} {} re S", num(x), num(y), num(w), num(h)))
    }

    // === Text ===

    /// Draw text with its baseline starting at `(x, y)`
    pub fn text(&mut self, x: f32, y: f32, font: Font, size: f32, s: &str) -> &mut Self {
        let header = format!(
            "BT /{} {} Tf {} {} Td ",
            font.resource_name(),
            num(size),
            num(x),
            num(y)
        );
        self.content.extend_from_slice(header.as_bytes());
        self.content.extend(literal(s));
        self.content.extend_from_slice(b" Tj ET\n");
        self
    }

    /// Draw text horizontally centered on `center_x`
    pub fn text_centered(
        &mut self,
        center_x: f32,
        y: f32,
        font: Font,
        size: f32,
        s: &str,
    ) -> &mut Self {
        let w = font.text_width(s, size);
        self.text(center_x - w / 2.0, y, font, size, s)
    }

    /// Draw text ending at `right_x`
    pub(crate) fn text_right(&mut self, right_x: f32, y: f32, font: Font, size: f32, s: &str) -> &mut Self {
        let w = font.text_width(s, size);
        self.text(right_x - w, y, font, size, s)
    }

    /// Draw consecutive runs in different fonts on one baseline
    ///
    /// Returns the x coordinate after the last run.
    pub fn text_runs(&mut self, x: f32, y: f32, size: f32, runs: &[(Font, &str)]) -> f32 {
        let mut cursor = x;
        for (font, s) in runs {
            self.text(cursor, y, *font, size, s);
            cursor += font.text_width(s, size);
        }
        cursor
    }

    // === Pages ===

    /// Finish the current page and start a blank one
    pub fn new_page(&mut self) -> &mut Self {
        let done = std::mem::replace(&mut self.content, Vec::with_capacity(4096));
        self.pages.push(done);
        self
    }

    /// Serialize the document
    pub fn build(mut self) -> Vec<u8> {
        let last = std::mem::take(&mut self.content);
        self.pages.push(last);
        let page_count = self.pages.len();

        let mut w = ObjectWriter::new();

        w.object(
            CATALOG_OBJ,
            format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_OBJ).as_bytes(),
        );

        let kids = (0..page_count)
            .map(|i| format!("{} 0 R", FIRST_PAGE_OBJ + 2 * i))
            .collect::<Vec<_>>()
            .join(" ");
        w.object(
            PAGES_OBJ,
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, page_count).as_bytes(),
        );

        let mut font_refs = String::new();
        for (i, font) in Font::ALL.iter().enumerate() {
            let obj = FIRST_FONT_OBJ + i;
            w.object(
                obj,
                format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    font.base_font()
                )
                .as_bytes(),
            );
            font_refs.push_str(&format!("/{} {} 0 R ", font.resource_name(), obj));
        }

        let mut info = b"<< /Producer (canteen-pdf)".to_vec();
        if let Some(title) = &self.title {
            info.extend_from_slice(b" /Title ");
            info.extend(literal(title));
        }
        info.extend_from_slice(b" >>");
        w.object(INFO_OBJ, &info);

        for (i, content) in self.pages.iter().enumerate() {
            let page_obj = FIRST_PAGE_OBJ + 2 * i;
            let content_obj = page_obj + 1;
            w.object(
                page_obj,
                format!(
                    "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] \
                     /Resources << /Font << {}>> >> /Contents {} 0 R >>",
                    PAGES_OBJ,
                    num(self.size.width),
                    num(self.size.height),
                    font_refs,
                    content_obj
                )
                .as_bytes(),
            );

            let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            stream.extend_from_slice(content);
            stream.extend_from_slice(b"\nendstream");
            w.object(content_obj, &stream);
        }

        let bytes = w.finish(CATALOG_OBJ, INFO_OBJ);
        tracing::debug!(pages = page_count, bytes = bytes.len(), "PDF document built");
        bytes
    }

    fn op(&mut self, op: String) -> &mut Self {
        self.content.extend_from_slice(op.as_bytes());
        self.content.push(b'\n');
        self
    }
}

/// Writes numbered objects and records their byte offsets for the xref table
struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    fn new() -> Self {
        let mut buf = Vec::with_capacity(8192);
        // Binary marker comment so transfer tools treat the file as binary
        buf.extend_from_slice(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    /// Objects must be written in ascending order starting at 1
    fn object(&mut self, number: usize, body: &[u8]) {
        debug_assert_eq!(number, self.offsets.len() + 1);
        self.offsets.push(self.buf.len());
        self.buf
            .extend_from_slice(format!("{} 0 obj\n", number).as_bytes());
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    fn finish(mut self, root: usize, info: usize) -> Vec<u8> {
        let xref_offset = self.buf.len();
        let size = self.offsets.len() + 1;

        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", size);
        for offset in &self.offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            size, root, info, xref_offset
        ));
        self.buf.extend_from_slice(xref.as_bytes());
        self.buf
    }
}
