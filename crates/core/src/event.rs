use serde::{Deserialize, Serialize};

/// A structural event in a braille document stream.
///
/// Producers emit events in strict nesting order:
/// `Document ⊇ Volume* ⊇ Section* ⊇ Page* ⊇ (Line | Graphic)*`, with braille
/// content only inside lines. Every `Start*` has exactly one matching `End*`
/// at the same depth. Page numbering is implicit: the Nth `StartPage` since
/// `StartDocument` is page N, counting from 1.
///
/// Transforms and the renderer assume this grammar; they do not re-validate
/// it defensively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum DocumentEvent {
    /// Beginning of a document. Resets all downstream per-document state.
    StartDocument,
    /// End of a document.
    EndDocument,
    /// Beginning of a volume (a physically separate braille binding).
    StartVolume,
    /// End of a volume.
    EndVolume,
    /// Beginning of a section within a volume.
    StartSection,
    /// End of a section.
    EndSection,
    /// Beginning of a page.
    StartPage,
    /// End of a page.
    EndPage,
    /// Beginning of a line of braille cells.
    StartLine,
    /// End of a line.
    EndLine,
    /// Braille cell content within a line. The string holds Unicode braille
    /// patterns (U+2800–U+28FF) only; one `char` is one cell.
    Braille {
        /// The braille cells for (part of) the current line.
        cells: String,
    },
    /// Beginning of a raised (tactile) graphic within a page.
    StartGraphic,
    /// End of a graphic.
    EndGraphic,
}

impl DocumentEvent {
    /// Short name of the event variant, for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            DocumentEvent::StartDocument => "StartDocument",
            DocumentEvent::EndDocument => "EndDocument",
            DocumentEvent::StartVolume => "StartVolume",
            DocumentEvent::EndVolume => "EndVolume",
            DocumentEvent::StartSection => "StartSection",
            DocumentEvent::EndSection => "EndSection",
            DocumentEvent::StartPage => "StartPage",
            DocumentEvent::EndPage => "EndPage",
            DocumentEvent::StartLine => "StartLine",
            DocumentEvent::EndLine => "EndLine",
            DocumentEvent::Braille { .. } => "Braille",
            DocumentEvent::StartGraphic => "StartGraphic",
            DocumentEvent::EndGraphic => "EndGraphic",
        }
    }

    /// Convenience constructor for a [`DocumentEvent::Braille`] event.
    pub fn braille(cells: impl Into<String>) -> Self {
        DocumentEvent::Braille {
            cells: cells.into(),
        }
    }
}
