//! Structural stream transforms.
//!
//! A transform consumes a finite document event stream one event at a time
//! and produces another, preserving the nesting grammar. Transforms are
//! stateful across a single pass (page counters, buffered pages) and must
//! not be shared between passes or producers; build a fresh instance per
//! document run.

mod interpoint;
mod page_filter;

pub use interpoint::InterpointGraphicTransform;
pub use page_filter::PageFilter;

use crate::event::DocumentEvent;

/// A single-pass, stateful event-to-event rewriting stage.
///
/// For each incoming event the transform appends zero or more events to
/// `out`: it may pass the event through, drop it, buffer it for later, or
/// emit synthetic events around it. Output order is document order; no
/// event is revisited once emitted.
pub trait DocumentTransform {
    /// Process one event, appending any resulting events to `out`.
    fn on_event(&mut self, event: DocumentEvent, out: &mut Vec<DocumentEvent>);
}

/// Drive `transform` over a whole event sequence and collect the output.
pub fn apply_transform<T: DocumentTransform + ?Sized>(
    transform: &mut T,
    events: impl IntoIterator<Item = DocumentEvent>,
) -> Vec<DocumentEvent> {
    let mut out = Vec::new();
    for event in events {
        transform.on_event(event, &mut out);
    }
    out
}

/// A chain of transforms applied in order.
///
/// Events flow through each stage in sequence; a stage sees exactly the
/// output of the stage before it. An empty pipeline is the identity.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn DocumentTransform>>,
}

impl Pipeline {
    /// An empty (identity) pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage to the end of the chain, builder style.
    pub fn with_stage(mut self, stage: impl DocumentTransform + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }
}

impl DocumentTransform for Pipeline {
    fn on_event(&mut self, event: DocumentEvent, out: &mut Vec<DocumentEvent>) {
        let mut current = vec![event];
        let mut next = Vec::new();
        for stage in &mut self.stages {
            for ev in current.drain(..) {
                stage.on_event(ev, &mut next);
            }
            std::mem::swap(&mut current, &mut next);
        }
        out.append(&mut current);
    }
}
