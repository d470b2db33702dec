//! Generic text renderer — converts a document event stream into the padded,
//! paginated byte output a text-mode embosser consumes.
//!
//! The renderer is the only byte-producing stage of the pipeline. It applies
//! margins, maps braille cells to device bytes, pads short pages with blank
//! lines, terminates pages with the device's end-of-page marker, and repeats
//! the finished document once per requested copy. Output is batch, not
//! streaming: bytes become available only after `EndDocument`.

use crate::braille;
use crate::error::{Error, Result};
use crate::event::DocumentEvent;
use emboss_toolchain_profile::Geometry;

// ── Renderer state machine ──────────────────────────────────────────────

/// Position of the renderer within the document grammar.
///
/// Each state accepts the events legal at that nesting depth and rejects
/// everything else with [`Error::InvalidState`]. `Graphic` swallows the
/// interior of a raised graphic, which a text-mode device cannot emboss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ready,
    Document,
    Volume,
    Section,
    Page,
    Line,
    Graphic,
}

impl State {
    fn name(self) -> &'static str {
        match self {
            State::Ready => "Ready",
            State::Document => "Document",
            State::Volume => "Volume",
            State::Section => "Section",
            State::Page => "Page",
            State::Line => "Line",
            State::Graphic => "Graphic",
        }
    }
}

// ── Public API ──────────────────────────────────────────────────────────

/// Renders a document event stream to device bytes under a fixed
/// [`Geometry`].
///
/// Drive it with [`on_event`](GenericTextRenderer::on_event) in document
/// order, then collect the result with
/// [`rendered_bytes`](GenericTextRenderer::rendered_bytes). One instance
/// handles one pass; feeding a second `StartDocument` starts over and
/// discards the previous output.
#[derive(Debug)]
pub struct GenericTextRenderer {
    geometry: Geometry,
    header: Vec<u8>,
    footer: Vec<u8>,
    output: Vec<u8>,
    state: State,
    document_complete: bool,
    /// Line slots emitted on the current page, top margin included.
    lines_on_page: u32,
    /// Content cells written on the current line.
    cells_on_line: usize,
    /// Interpoint side tracking: true when the next page lands on the front
    /// (right-hand) side of a sheet.
    front_side: bool,
}

impl GenericTextRenderer {
    /// Create a renderer for the given geometry.
    ///
    /// The geometry is re-validated here so a hand-built struct cannot
    /// smuggle an inconsistent configuration past the device checks.
    pub fn new(geometry: Geometry) -> Result<Self> {
        let geometry = geometry.validated()?;
        Ok(Self {
            geometry,
            header: Vec::new(),
            footer: Vec::new(),
            output: Vec::new(),
            state: State::Ready,
            document_complete: false,
            lines_on_page: 0,
            cells_on_line: 0,
            front_side: true,
        })
    }

    /// Device-specific bytes prepended once, before all copies.
    pub fn with_header(mut self, header: impl Into<Vec<u8>>) -> Self {
        self.header = header.into();
        self
    }

    /// Device-specific bytes appended once, after all copies.
    pub fn with_footer(mut self, footer: impl Into<Vec<u8>>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Consume one document event.
    ///
    /// Fails fast on content wider than the usable line
    /// ([`Error::LineTooLong`]), more lines than the page holds
    /// ([`Error::PageOverflow`]), non-braille content characters
    /// ([`Error::NonBrailleContent`]), and events outside the document
    /// grammar ([`Error::InvalidState`]).
    pub fn on_event(&mut self, event: &DocumentEvent) -> Result<()> {
        match (self.state, event) {
            (State::Ready, DocumentEvent::StartDocument) => self.start_document(),
            (State::Document, DocumentEvent::StartVolume) => self.state = State::Volume,
            (State::Document, DocumentEvent::EndDocument) => {
                self.state = State::Ready;
                self.document_complete = true;
            }
            (State::Volume, DocumentEvent::StartSection) => {
                self.state = State::Section;
                self.ensure_front_side();
            }
            (State::Volume, DocumentEvent::EndVolume) => self.state = State::Document,
            (State::Section, DocumentEvent::StartPage) => self.start_page(),
            (State::Section, DocumentEvent::EndSection) => {
                self.ensure_front_side();
                self.state = State::Volume;
            }
            (State::Page, DocumentEvent::StartLine) => self.start_line()?,
            (State::Page, DocumentEvent::StartGraphic) => self.state = State::Graphic,
            (State::Page, DocumentEvent::EndPage) => self.end_page(),
            (State::Line, DocumentEvent::Braille { cells }) => self.write_braille(cells)?,
            (State::Line, DocumentEvent::EndLine) => self.end_line(),
            (State::Graphic, DocumentEvent::EndGraphic) => self.state = State::Page,
            // Graphic interiors are not embossable as text; drop them.
            (
                State::Graphic,
                DocumentEvent::StartLine | DocumentEvent::EndLine | DocumentEvent::Braille { .. },
            ) => {}
            (state, event) => {
                return Err(Error::InvalidState {
                    event: event.name(),
                    state: state.name(),
                });
            }
        }
        Ok(())
    }

    /// The rendered bytes: header, then the whole document repeated once per
    /// copy (collated), then footer.
    ///
    /// Fails with [`Error::OutputNotReady`] until `EndDocument` has been
    /// consumed.
    pub fn rendered_bytes(&self) -> Result<Vec<u8>> {
        if !self.document_complete {
            return Err(Error::OutputNotReady);
        }
        let copies = self.geometry.copies as usize;
        let mut bytes =
            Vec::with_capacity(self.header.len() + self.output.len() * copies + self.footer.len());
        bytes.extend_from_slice(&self.header);
        for _ in 0..copies {
            bytes.extend_from_slice(&self.output);
        }
        bytes.extend_from_slice(&self.footer);
        Ok(bytes)
    }

    /// Consume the renderer and return the rendered bytes.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        self.rendered_bytes()
    }

    // ── Event actions ───────────────────────────────────────────────────

    fn start_document(&mut self) {
        // Restarting discards any previously rendered document.
        self.output.clear();
        self.document_complete = false;
        self.lines_on_page = 0;
        self.cells_on_line = 0;
        // Documents always start on a front side.
        self.front_side = true;
        self.state = State::Document;
    }

    fn start_page(&mut self) {
        self.lines_on_page = 0;
        for _ in 0..self.geometry.top_margin {
            self.push_blank_line();
        }
        self.state = State::Page;
    }

    fn end_page(&mut self) {
        // Pad with blank lines up to the bottom margin, then close the page.
        while self.lines_on_page < self.geometry.emitted_lines() {
            self.push_blank_line();
        }
        self.output.extend_from_slice(&self.geometry.end_of_page);
        self.front_side = !self.front_side;
        self.state = State::Section;
    }

    fn start_line(&mut self) -> Result<()> {
        if self.lines_on_page >= self.geometry.emitted_lines() {
            return Err(Error::PageOverflow {
                lines: self.lines_on_page,
            });
        }
        for _ in 0..self.geometry.left_margin {
            self.output.push(b' ');
        }
        self.cells_on_line = 0;
        self.state = State::Line;
        Ok(())
    }

    fn end_line(&mut self) {
        self.output.extend_from_slice(&self.geometry.end_of_line);
        self.lines_on_page += 1;
        self.cells_on_line = 0;
        self.state = State::Page;
    }

    fn write_braille(&mut self, cells: &str) -> Result<()> {
        let count = cells.chars().count();
        let available = self.geometry.usable_cells() as usize;
        if self.cells_on_line + count > available {
            return Err(Error::LineTooLong {
                cells: self.cells_on_line + count,
                available,
            });
        }
        // Map the whole event before writing so a bad character does not
        // leave a half-written line behind.
        let mut mapped = Vec::with_capacity(cells.len());
        for cell in cells.chars() {
            let byte = braille::to_device_byte(cell)
                .ok_or(Error::NonBrailleContent { code: cell as u32 })?;
            mapped.push(byte);
        }
        self.output.extend_from_slice(&mapped);
        self.cells_on_line += count;
        Ok(())
    }

    // ── Layout helpers ──────────────────────────────────────────────────

    /// A blank line is just the line terminator.
    fn push_blank_line(&mut self) {
        self.output.extend_from_slice(&self.geometry.end_of_line);
        self.lines_on_page += 1;
    }

    /// In interpoint mode, sections begin and end on a front side. Skipping
    /// the back of a sheet is a page eject with no content.
    fn ensure_front_side(&mut self) {
        if self.geometry.interpoint && !self.front_side {
            self.output.extend_from_slice(&self.geometry.end_of_page);
            self.front_side = true;
        }
    }
}

/// Render a complete event sequence under `geometry` in one call.
///
/// Convenience driver for callers that already hold the full event stream:
/// builds a renderer, feeds every event, and returns the rendered bytes.
pub fn render_document(
    events: impl IntoIterator<Item = DocumentEvent>,
    geometry: Geometry,
) -> Result<Vec<u8>> {
    let mut renderer = GenericTextRenderer::new(geometry)?;
    for event in events {
        renderer.on_event(&event)?;
    }
    renderer.into_bytes()
}
