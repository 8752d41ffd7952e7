use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// A4 document that flows top to bottom and breaks pages on its own.
pub struct ReportPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    regular_id: Ref,
    bold_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,

    content: Option<(Ref, Content)>,
    cursor_y: f32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    font_size: f32,
}

impl Default for ReportPdf {
    fn default() -> Self {
        Self::new()
    }
}

/// Helvetica is a WinAnsi Type1 font; anything outside ASCII prints as `?`.
fn pdf_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c as u8 } else { b'?' })
        .collect()
}

fn draw_text(content: &mut Content, font: Name, x: f32, y: f32, size: f32, text: &str) {
    let bytes = pdf_text(text);
    content.begin_text();
    content.set_font(font, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&bytes));
    content.end_text();
}

fn fill_rect(content: &mut Content, x: f32, y: f32, w: f32, h: f32, grey: f32) {
    content.save_state();
    content.set_fill_rgb(grey, grey, grey);
    content.rect(x, y, w, h);
    content.fill_nonzero();
    content.restore_state();
}

fn stroke_rect(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
    content.save_state();
    content.set_stroke_rgb(0.65, 0.65, 0.65);
    content.rect(x, y, w, h);
    content.stroke();
    content.restore_state();
}

/// Cut a cell value so it fits roughly into `width` points.
fn clip(text: &str, width: f32, size: f32) -> String {
    let max_chars = ((width - 8.0) / (size * 0.52)).max(1.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

impl ReportPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let regular_id = Ref::new(3);
        let bold_id = Ref::new(4);

        pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            regular_id,
            bold_id,
            page_refs: Vec::new(),
            next_id: 5,

            content: None,
            cursor_y: 0.0,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
            font_size: 11.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn content_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    fn start_page(&mut self) {
        self.finish_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources()
                .fonts()
                .pair(FONT_REGULAR, self.regular_id)
                .pair(FONT_BOLD, self.bold_id);
        }

        let mut content = Content::new();
        let footer = format!("Page {}", self.page_refs.len());
        draw_text(
            &mut content,
            FONT_REGULAR,
            self.page_w - self.margin - 40.0,
            self.margin - 30.0,
            9.0,
            &footer,
        );

        self.content = Some((content_id, content));
        self.cursor_y = self.page_h - self.margin;
    }

    fn finish_page(&mut self) {
        if let Some((id, content)) = self.content.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Start a new page unless `height` still fits above the bottom margin.
    fn ensure_room(&mut self, height: f32) {
        if self.content.is_none() || self.cursor_y - height < self.margin {
            self.start_page();
        }
    }

    fn write_line(&mut self, font: Name, size: f32, text: &str) {
        let h = size + 8.0;
        self.ensure_room(h);
        self.cursor_y -= h;
        let (x, y) = (self.margin, self.cursor_y);
        if let Some((_, content)) = self.content.as_mut() {
            draw_text(content, font, x, y, size, text);
        }
    }

    pub fn title(&mut self, text: &str) {
        self.write_line(FONT_BOLD, 16.0, text);
        self.spacer(6.0);
    }

    pub fn heading(&mut self, text: &str) {
        self.spacer(10.0);
        self.write_line(FONT_BOLD, 14.0, text);
    }

    pub fn line(&mut self, text: &str) {
        let size = self.font_size;
        self.write_line(FONT_REGULAR, size, text);
    }

    pub fn spacer(&mut self, height: f32) {
        self.ensure_room(height);
        self.cursor_y -= height;
    }

    fn table_row(&mut self, widths: &[f32], cells: &[String], font: Name, shade: Option<f32>) {
        self.ensure_room(self.row_h);
        self.cursor_y -= self.row_h;

        let (x0, y, h, size) = (self.margin, self.cursor_y, self.row_h, self.font_size);
        let total: f32 = widths.iter().sum();

        if let Some((_, content)) = self.content.as_mut() {
            if let Some(grey) = shade {
                fill_rect(content, x0, y, total, h, grey);
            }
            let mut x = x0;
            for (i, w) in widths.iter().enumerate() {
                let text = cells.get(i).map(String::as_str).unwrap_or("");
                draw_text(content, font, x + 4.0, y + 6.0, size, &clip(text, *w, size));
                stroke_rect(content, x, y, *w, h);
                x += w;
            }
        }
    }

    /// Bordered table; the header is repeated at the top of every page.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let widths = self.col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        self.ensure_room(2.0 * self.row_h);
        self.table_row(&widths, &header_row, FONT_BOLD, Some(0.85));

        for (i, row) in rows.iter().enumerate() {
            if self.cursor_y - self.row_h < self.margin {
                self.start_page();
                self.table_row(&widths, &header_row, FONT_BOLD, Some(0.85));
            }
            let stripe = (i % 2 == 0).then_some(0.96);
            self.table_row(&widths, row, FONT_REGULAR, stripe);
        }
    }

    /// Two columns, no header.
    pub fn key_values(&mut self, rows: &[(String, String)]) {
        let half = self.content_width() / 2.0;
        let widths = [half, half];
        for (k, v) in rows {
            self.table_row(&widths, &[k.clone(), v.clone()], FONT_REGULAR, None);
        }
    }

    /// Widths proportional to content, scaled down to the printable width.
    fn col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 7.0 + 10.0).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.len() as f32 * 6.0 + 10.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.content_width();
        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    pub fn finish(mut self) -> Vec<u8> {
        if self.page_refs.is_empty() {
            self.start_page();
        }
        self.finish_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        self.pdf.finish()
    }
}
