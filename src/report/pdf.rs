//! Low-level paged PDF writer with a two-column body flow.
//!
//! Pages, fonts and object ids are managed by hand the same way the rest of
//! the document pipeline works: a growing list of page refs, one content
//! stream per page, and a single Helvetica font shared by every page. Text
//! is WinAnsi-encoded so Portuguese diacritics render correctly.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};

pub struct DocWriter {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    info_id: Ref,
    next_id: i32,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    content: Option<Content>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    line_h: f32,
    column_gap: f32,

    body_size: f32,
    heading_size: f32,
    title_size: f32,

    // body flow cursor
    column: usize,
    y: f32,
    region_top: f32,
}

impl Default for DocWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocWriter {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let info_id = Ref::new(4);
        let next_id = 5;

        // Global font, WinAnsi so accented labels survive.
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            info_id,
            next_id,
            page_refs: Vec::new(),
            current_content_id: None,
            content: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 40.0,
            line_h: 14.0,
            column_gap: 20.0,

            body_size: 10.0,
            heading_size: 14.0,
            title_size: 18.0,

            column: 0,
            y: 0.0,
            region_top: 0.0,
        }
    }

    /// Document information dictionary (shows up as the file's Title and
    /// Author in any viewer).
    pub fn set_metadata(&mut self, title: &str, author: &str) {
        self.pdf
            .document_info(self.info_id)
            .title(TextStr(title))
            .author(TextStr(author));
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn column_width(&self) -> f32 {
        (self.page_w - 2.0 * self.margin - self.column_gap) / 2.0
    }

    fn column_x(&self, column: usize) -> f32 {
        self.margin + column as f32 * (self.column_width() + self.column_gap)
    }

    fn new_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        self.current_content_id = Some(content_id);
        self.content = Some(Content::new());
        self.column = 0;
        self.y = self.page_h - self.margin;
        self.region_top = self.y;
    }

    fn finalize_page(&mut self) {
        if let Some(content) = self.content.take()
            && let Some(id) = self.current_content_id.take()
        {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn ensure_page(&mut self) {
        if self.content.is_none() {
            self.new_page();
        }
    }

    /// Full-width centered line (title block). Only meaningful before the
    /// two-column body starts on the page.
    pub fn centered(&mut self, text: &str, size: f32) {
        self.ensure_page();
        let width = text.chars().count() as f32 * size * 0.5;
        let x = (self.page_w - width) / 2.0;
        let baseline = self.y - size;
        self.draw(x, baseline, size, text);
        self.y = baseline - size * 0.6;
        self.region_top = self.y;
    }

    pub fn title(&mut self, text: &str) {
        let size = self.title_size;
        self.centered(text, size);
    }

    /// Full-width section heading. Starts a fresh page when the body flow
    /// is already in the second column or the page is nearly full.
    pub fn heading(&mut self, text: &str) {
        self.ensure_page();
        if self.column > 0 || self.y - (self.heading_size + 2.0 * self.line_h) < self.margin {
            self.new_page();
        }

        self.y -= self.line_h * 0.5;
        let baseline = self.y - self.heading_size;
        self.draw(self.margin, baseline, self.heading_size, text);
        self.y = baseline - 6.0;
        self.column = 0;
        self.region_top = self.y;
    }

    /// One body line in the two-column flow: fills the left column to the
    /// bottom, then the right column, then continues on a new page.
    pub fn line(&mut self, text: &str) {
        self.ensure_page();
        if self.y - self.line_h < self.margin {
            if self.column == 0 {
                self.column = 1;
                self.y = self.region_top;
            } else {
                self.new_page();
            }
        }

        let x = self.column_x(self.column);
        let baseline = self.y - self.body_size;
        let size = self.body_size;
        self.draw(x, baseline, size, text);
        self.y -= self.line_h;
    }

    fn draw(&mut self, x: f32, baseline: f32, size: f32, text: &str) {
        let bytes = encode_win_ansi(text);
        if let Some(content) = self.content.as_mut() {
            content.begin_text();
            content.set_font(Name(b"F1"), size);
            content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, baseline]);
            content.show(Str(&bytes));
            content.end_text();
        }
    }

    /// Finish the document and hand back the bytes.
    pub fn save_to_buffer(mut self) -> Vec<u8> {
        self.ensure_page();
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        self.pdf.finish()
    }
}

/// WinAnsi (CP-1252) encoding; Latin-1 covers the pt-BR alphabet, the few
/// typographic marks we emit are mapped explicitly.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            c if (c as u32) < 0x100 => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
