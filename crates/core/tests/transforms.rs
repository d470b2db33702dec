//! Tests for the structural stream transforms: page filtering, interpoint
//! graphic handling, and transform chaining.

mod common;

use common::{blank_page, document, graphic_page, page_count, split_pages, text_page};
use emboss_toolchain_core::{
    DocumentEvent, InterpointGraphicTransform, PageFilter, PageRanges, Pipeline, apply_transform,
};

// A1 in braille: dots-1 then dots-2.
const CELLS: &str = "\u{2801}\u{2802}";

// ─── Page filter ─────────────────────────────────────────────────────────────

#[test]
fn filter_with_all_pages_is_identity() {
    let events = document(&[text_page(&[CELLS]), blank_page(), text_page(&[CELLS])]);
    let mut filter = PageFilter::new(PageRanges::all());
    let out = apply_transform(&mut filter, events.clone());
    assert_eq!(out, events);
}

#[test]
fn filter_drops_unselected_pages() {
    let events = document(&[
        text_page(&["\u{2801}"]),
        text_page(&["\u{2803}"]),
        text_page(&["\u{2809}"]),
    ]);
    let mut filter = PageFilter::new(PageRanges::single(2).unwrap());
    let out = apply_transform(&mut filter, events);

    assert_eq!(page_count(&out), 1);
    let pages = split_pages(&out);
    // Only page 2 survives, with its content intact.
    assert_eq!(pages[0], text_page(&["\u{2803}"]));
}

#[test]
fn filter_preserves_container_boundaries() {
    // Drop every page; the document/volume/section skeleton must remain.
    let events = document(&[text_page(&[CELLS]), text_page(&[CELLS])]);
    let mut filter = PageFilter::new(PageRanges::range(10, 20).unwrap());
    let out = apply_transform(&mut filter, events);
    assert_eq!(out, document(&[]));
}

#[test]
fn filter_counts_pages_across_sections() {
    // Two sections with two pages each; select pages 2-3 which straddle the
    // section boundary.
    let mut events = vec![DocumentEvent::StartDocument, DocumentEvent::StartVolume];
    events.push(DocumentEvent::StartSection);
    events.extend(text_page(&["\u{2801}"]));
    events.extend(text_page(&["\u{2803}"]));
    events.push(DocumentEvent::EndSection);
    events.push(DocumentEvent::StartSection);
    events.extend(text_page(&["\u{2809}"]));
    events.extend(text_page(&["\u{2819}"]));
    events.push(DocumentEvent::EndSection);
    events.extend([DocumentEvent::EndVolume, DocumentEvent::EndDocument]);

    let mut filter = PageFilter::new(PageRanges::range(2, 3).unwrap());
    let out = apply_transform(&mut filter, events);

    let pages = split_pages(&out);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0], text_page(&["\u{2803}"]));
    assert_eq!(pages[1], text_page(&["\u{2809}"]));
    // Both section boundaries survive.
    let sections = out
        .iter()
        .filter(|e| matches!(e, DocumentEvent::StartSection))
        .count();
    assert_eq!(sections, 2);
}

#[test]
fn filter_resets_at_start_document() {
    let events = document(&[text_page(&["\u{2801}"]), text_page(&["\u{2803}"])]);
    let mut filter = PageFilter::new(PageRanges::single(1).unwrap());
    // Same instance, two documents: numbering restarts both times.
    let first = apply_transform(&mut filter, events.clone());
    let second = apply_transform(&mut filter, events);
    assert_eq!(first, second);
    assert_eq!(page_count(&first), 1);
}

// ─── Interpoint graphic transform ────────────────────────────────────────────

#[test]
fn no_graphics_round_trips_unchanged() {
    let events = document(&[
        text_page(&[CELLS, CELLS]),
        blank_page(),
        text_page(&[CELLS]),
    ]);
    let mut transform = InterpointGraphicTransform::new();
    let out = apply_transform(&mut transform, events.clone());
    assert_eq!(out, events);
}

#[test]
fn graphic_on_back_of_content_gets_blank_page() {
    // Page 1 has content; page 2 (a back side) has a graphic. The graphic
    // must be pushed to the next sheet by a synthetic blank page.
    let events = document(&[text_page(&[CELLS]), graphic_page()]);
    let mut transform = InterpointGraphicTransform::new();
    let out = apply_transform(&mut transform, events);

    let pages = split_pages(&out);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0], text_page(&[CELLS]));
    assert_eq!(pages[1], blank_page());
    assert_eq!(pages[2], graphic_page());
}

#[test]
fn graphic_on_front_side_needs_no_blank_page() {
    // The graphic lands on page 1, a front side; its back (page 2) is blank
    // already, so nothing is inserted.
    let events = document(&[graphic_page(), blank_page()]);
    let mut transform = InterpointGraphicTransform::new();
    let out = apply_transform(&mut transform, events.clone());
    assert_eq!(out, events);
}

#[test]
fn content_behind_graphic_gets_blank_page() {
    // Graphic on page 1 (front), content on page 2 (its back): the content
    // page moves to the next sheet.
    let events = document(&[graphic_page(), text_page(&[CELLS])]);
    let mut transform = InterpointGraphicTransform::new();
    let out = apply_transform(&mut transform, events);

    let pages = split_pages(&out);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0], graphic_page());
    assert_eq!(pages[1], blank_page());
    assert_eq!(pages[2], text_page(&[CELLS]));
}

#[test]
fn four_page_document_inserts_blanks_where_parity_requires() {
    // Page 1: content. Page 2: graphic (conflicts with page 1, even page →
    // blank inserted, graphic moves to page 3). Page 3 in the input has
    // content; after the first insertion it would land on page 4, the back
    // of the graphic → second blank inserted. Page 4 (content, no graphic)
    // follows a plain content page and needs nothing.
    let events = document(&[
        text_page(&["\u{2801}"]),
        graphic_page(),
        text_page(&["\u{2803}"]),
        text_page(&["\u{2809}"]),
    ]);
    let mut transform = InterpointGraphicTransform::new();
    let out = apply_transform(&mut transform, events);

    let pages = split_pages(&out);
    assert_eq!(pages.len(), 6);
    assert_eq!(pages[0], text_page(&["\u{2801}"]));
    assert_eq!(pages[1], blank_page());
    assert_eq!(pages[2], graphic_page());
    assert_eq!(pages[3], blank_page());
    assert_eq!(pages[4], text_page(&["\u{2803}"]));
    assert_eq!(pages[5], text_page(&["\u{2809}"]));
}

#[test]
fn graphic_against_blank_page_needs_no_insertion() {
    // A blank page before the graphic means the sheet's front is empty; the
    // graphic may keep its position.
    let events = document(&[blank_page(), graphic_page()]);
    let mut transform = InterpointGraphicTransform::new();
    let out = apply_transform(&mut transform, events.clone());
    assert_eq!(out, events);
}

#[test]
fn transform_resets_at_start_document() {
    let with_graphic = document(&[text_page(&[CELLS]), graphic_page()]);
    let plain = document(&[text_page(&[CELLS]), text_page(&[CELLS])]);
    let mut transform = InterpointGraphicTransform::new();
    let first = apply_transform(&mut transform, with_graphic);
    assert_eq!(page_count(&first), 3);
    // A second document through the same instance starts from a clean slate.
    let second = apply_transform(&mut transform, plain.clone());
    assert_eq!(second, plain);
}

// ─── Pipeline ────────────────────────────────────────────────────────────────

#[test]
fn empty_pipeline_is_identity() {
    let events = document(&[text_page(&[CELLS])]);
    let mut pipeline = Pipeline::new();
    let out = apply_transform(&mut pipeline, events.clone());
    assert_eq!(out, events);
}

#[test]
fn pipeline_chains_filter_then_interpoint() {
    // Select pages 2-3 of a four-page document, then fix up graphics for
    // duplex. After filtering, the graphic page is logical page 1 and the
    // content page is logical page 2 → one blank page inserted between.
    let events = document(&[
        text_page(&["\u{2801}"]),
        graphic_page(),
        text_page(&["\u{2803}"]),
        text_page(&["\u{2809}"]),
    ]);
    let mut pipeline = Pipeline::new()
        .with_stage(PageFilter::new(PageRanges::range(2, 3).unwrap()))
        .with_stage(InterpointGraphicTransform::new());
    let out = apply_transform(&mut pipeline, events);

    let pages = split_pages(&out);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0], graphic_page());
    assert_eq!(pages[1], blank_page());
    assert_eq!(pages[2], text_page(&["\u{2803}"]));
}
