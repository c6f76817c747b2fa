use crate::frame::Frame;

/// What the controller did in response to input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventKind {
    EntryStarted,
    MarkerAdded,
    /// A typed coordinate could not be parsed and was dropped.
    EntryDiscarded,
    RouteCommitted,
    AnnotationAdded,
    SaveRequested,
    QuitRequested,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::EntryStarted => "entry_started",
            EventKind::MarkerAdded => "marker_added",
            EventKind::EntryDiscarded => "entry_discarded",
            EventKind::RouteCommitted => "route_committed",
            EventKind::AnnotationAdded => "annotation_added",
            EventKind::SaveRequested => "save_requested",
            EventKind::QuitRequested => "quit_requested",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub frame_index: u64,
    pub kind: EventKind,
    pub message: String,
}

/// Per-frame record of scene-affecting events, for traceability.
#[derive(Debug, Default)]
pub struct EventBus {
    frame_index: u64,
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp subsequent events with `frame`.
    pub fn begin_frame(&mut self, frame: Frame) {
        self.frame_index = frame.index;
    }

    pub fn emit(&mut self, kind: EventKind, message: impl Into<String>) {
        self.events.push(Event {
            frame_index: self.frame_index,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
