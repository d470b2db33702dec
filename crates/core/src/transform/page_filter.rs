use crate::event::DocumentEvent;
use crate::ranges::PageRanges;
use crate::transform::DocumentTransform;

/// Drops whole pages that fall outside a [`PageRanges`] selection.
///
/// Container boundaries (document, volume, section) always pass through,
/// even when every page between them is dropped — an empty section is legal
/// output and is not collapsed. Page numbering is implicit: the Nth
/// `StartPage` since `StartDocument` is page N.
pub struct PageFilter {
    pages: PageRanges,
    page: u32,
    pass: bool,
}

impl PageFilter {
    /// A filter that keeps only the pages in `pages`.
    pub fn new(pages: PageRanges) -> Self {
        Self {
            pages,
            page: 0,
            pass: true,
        }
    }
}

impl DocumentTransform for PageFilter {
    fn on_event(&mut self, event: DocumentEvent, out: &mut Vec<DocumentEvent>) {
        match event {
            DocumentEvent::StartDocument => {
                self.page = 1;
                self.pass = true;
            }
            DocumentEvent::StartPage => {
                self.pass = self.pages.contains(self.page);
            }
            _ => {}
        }
        let emit = self.pass;
        // The default state between pages is "pass", so container events
        // after a dropped page are emitted again.
        if matches!(event, DocumentEvent::EndPage) {
            self.pass = true;
            self.page += 1;
        }
        if emit {
            out.push(event);
        }
    }
}
