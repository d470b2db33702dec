use crate::event::DocumentEvent;
use crate::transform::DocumentTransform;

/// Keeps the flip side of every raised graphic blank on interpoint output.
///
/// Interpoint embossers put logical page 2N on the back of page 2N-1. A
/// graphic must not share a sheet with content on the other side: the dots
/// of one would deform the other. Whenever the current page would land on
/// the back of a sheet (even page count) and either it carries a graphic
/// with content on the front side, or the front side carried a graphic and
/// this page has content, a synthetic blank page (`StartPage` immediately
/// followed by `EndPage`) is emitted first, pushing the page onto the next
/// sheet.
///
/// Buffers at most one page of events.
pub struct InterpointGraphicTransform {
    page_buf: Vec<DocumentEvent>,
    in_page: bool,
    page_counter: u32,
    has_graphic: bool,
    has_content: bool,
    prev_has_graphic: bool,
    prev_has_content: bool,
}

impl InterpointGraphicTransform {
    /// A fresh transform, ready for one document pass.
    pub fn new() -> Self {
        Self {
            page_buf: Vec::new(),
            in_page: false,
            page_counter: 0,
            has_graphic: false,
            has_content: false,
            prev_has_graphic: false,
            prev_has_content: false,
        }
    }
}

impl Default for InterpointGraphicTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTransform for InterpointGraphicTransform {
    fn on_event(&mut self, event: DocumentEvent, out: &mut Vec<DocumentEvent>) {
        match event {
            DocumentEvent::StartDocument => {
                self.page_buf.clear();
                self.in_page = false;
                self.page_counter = 0;
                self.has_graphic = false;
                self.has_content = false;
                self.prev_has_graphic = false;
                self.prev_has_content = false;
            }
            DocumentEvent::StartPage => {
                self.page_counter += 1;
                self.page_buf.clear();
                self.in_page = true;
                self.has_graphic = false;
                self.has_content = false;
            }
            _ => {}
        }

        if !self.in_page {
            out.push(event);
            return;
        }

        match event {
            DocumentEvent::StartGraphic => {
                self.has_graphic = true;
                self.has_content = true;
            }
            DocumentEvent::Braille { .. } => {
                self.has_content = true;
            }
            _ => {}
        }
        let is_end_page = matches!(event, DocumentEvent::EndPage);
        self.page_buf.push(event);

        if is_end_page {
            let conflict = (self.prev_has_content && self.has_graphic)
                || (self.prev_has_graphic && self.has_content);
            if conflict && self.page_counter % 2 == 0 {
                out.push(DocumentEvent::StartPage);
                out.push(DocumentEvent::EndPage);
                self.page_counter += 1;
            }
            out.append(&mut self.page_buf);
            self.prev_has_graphic = self.has_graphic;
            self.prev_has_content = self.has_content;
            self.in_page = false;
        }
    }
}
