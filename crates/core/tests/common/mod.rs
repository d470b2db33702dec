//! Shared test helpers for `emboss_toolchain_core` integration tests.

#![allow(unreachable_pub)]

use emboss_toolchain_core::DocumentEvent;

/// Wrap page event sequences in a one-volume, one-section document skeleton.
#[allow(dead_code)]
pub fn document(pages: &[Vec<DocumentEvent>]) -> Vec<DocumentEvent> {
    let mut events = vec![
        DocumentEvent::StartDocument,
        DocumentEvent::StartVolume,
        DocumentEvent::StartSection,
    ];
    for page in pages {
        events.extend(page.iter().cloned());
    }
    events.extend([
        DocumentEvent::EndSection,
        DocumentEvent::EndVolume,
        DocumentEvent::EndDocument,
    ]);
    events
}

/// A page with no content at all.
#[allow(dead_code)]
pub fn blank_page() -> Vec<DocumentEvent> {
    vec![DocumentEvent::StartPage, DocumentEvent::EndPage]
}

/// A page holding one line of braille per entry in `lines`.
#[allow(dead_code)]
pub fn text_page(lines: &[&str]) -> Vec<DocumentEvent> {
    let mut events = vec![DocumentEvent::StartPage];
    for line in lines {
        events.push(DocumentEvent::StartLine);
        events.push(DocumentEvent::braille(*line));
        events.push(DocumentEvent::EndLine);
    }
    events.push(DocumentEvent::EndPage);
    events
}

/// A page carrying a raised graphic and nothing else.
#[allow(dead_code)]
pub fn graphic_page() -> Vec<DocumentEvent> {
    vec![
        DocumentEvent::StartPage,
        DocumentEvent::StartGraphic,
        DocumentEvent::EndGraphic,
        DocumentEvent::EndPage,
    ]
}

/// Split an event sequence into its pages, each inclusive of its
/// `StartPage`/`EndPage` boundaries. Events outside pages are discarded.
#[allow(dead_code)]
pub fn split_pages(events: &[DocumentEvent]) -> Vec<Vec<DocumentEvent>> {
    let mut pages = Vec::new();
    let mut current: Option<Vec<DocumentEvent>> = None;
    for event in events {
        match event {
            DocumentEvent::StartPage => current = Some(vec![event.clone()]),
            DocumentEvent::EndPage => {
                let mut page = current.take().expect("EndPage outside a page");
                page.push(event.clone());
                pages.push(page);
            }
            _ => {
                if let Some(page) = current.as_mut() {
                    page.push(event.clone());
                }
            }
        }
    }
    pages
}

/// Count the pages in an event sequence.
#[allow(dead_code)]
pub fn page_count(events: &[DocumentEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, DocumentEvent::StartPage))
        .count()
}
