//! Markup event stream consumed by the scene builder.
//!
//! The scene builder never sees angle brackets. It pulls events from a
//! `MarkupSource`, which is either the bundled XML adapter or anything
//! else able to produce start/end/text events.

use std::collections::VecDeque;

use crate::error::Result;

/// A single attribute, as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An element start tag: name plus attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Builder-style attribute append.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Value of the first attribute with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// One event from a markup stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    /// An element opens.
    Start(Element),
    /// The most recently opened element closes.
    End(String),
    /// Character data inside the current element.
    Text(String),
    /// No more events.
    Eof,
}

/// A pull-based source of markup events.
pub trait MarkupSource {
    /// Produce the next event. After `Eof`, keeps returning `Eof`.
    fn next_event(&mut self) -> Result<MarkupEvent>;
}

impl<S: MarkupSource + ?Sized> MarkupSource for &mut S {
    fn next_event(&mut self) -> Result<MarkupEvent> {
        (**self).next_event()
    }
}

/// An in-memory event source.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<MarkupEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: MarkupEvent) {
        self.events.push_back(event);
    }

    /// Push a start tag.
    pub fn start(mut self, element: Element) -> Self {
        self.push(MarkupEvent::Start(element));
        self
    }

    /// Push an end tag.
    pub fn end(mut self, name: &str) -> Self {
        self.push(MarkupEvent::End(name.to_string()));
        self
    }

    /// Push character data.
    pub fn text(mut self, text: &str) -> Self {
        self.push(MarkupEvent::Text(text.to_string()));
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<MarkupEvent>> for EventQueue {
    fn from(events: Vec<MarkupEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl MarkupSource for EventQueue {
    fn next_event(&mut self) -> Result<MarkupEvent> {
        Ok(self.events.pop_front().unwrap_or(MarkupEvent::Eof))
    }
}
