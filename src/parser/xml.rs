//! `MarkupSource` adapter over `quick-xml`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, SceneError};

use super::markup::{Attribute, Element, MarkupEvent, MarkupSource};

/// Reads markup events from an XML string.
///
/// Names are reduced to their local part (`svg:g` → `g`). Self-closing
/// tags yield a start event immediately followed by an end event.
/// Comments, declarations, processing instructions and doctypes are
/// skipped; whitespace-only text is dropped.
pub struct XmlSource<'a> {
    reader: Reader<&'a [u8]>,
    buf: Vec<u8>,
    pending_end: Option<String>,
    finished: bool,
}

impl<'a> XmlSource<'a> {
    pub fn new(xml: &'a str) -> Self {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        Self {
            reader,
            buf: Vec::new(),
            pending_end: None,
            finished: false,
        }
    }
}

fn markup_error(position: usize, message: impl std::fmt::Display) -> SceneError {
    SceneError::Markup {
        message: format!("{} (at byte {})", message, position),
    }
}

fn local_name(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn element_from(start: &BytesStart<'_>) -> std::result::Result<Element, String> {
    let mut element = Element::new(local_name(start.local_name().as_ref()));

    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        element.attributes.push(Attribute::new(
            local_name(attr.key.local_name().as_ref()),
            value.into_owned(),
        ));
    }

    Ok(element)
}

impl<'a> MarkupSource for XmlSource<'a> {
    fn next_event(&mut self) -> Result<MarkupEvent> {
        if let Some(name) = self.pending_end.take() {
            return Ok(MarkupEvent::End(name));
        }

        loop {
            if self.finished {
                return Ok(MarkupEvent::Eof);
            }

            self.buf.clear();
            let position = self.reader.buffer_position();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|e| markup_error(position, e))?;

            let out = match event {
                Event::Start(e) => {
                    MarkupEvent::Start(element_from(&e).map_err(|m| markup_error(position, m))?)
                }
                Event::Empty(e) => {
                    let element = element_from(&e).map_err(|m| markup_error(position, m))?;
                    self.pending_end = Some(element.name.clone());
                    MarkupEvent::Start(element)
                }
                Event::End(e) => MarkupEvent::End(local_name(e.local_name().as_ref())),
                Event::Text(t) => {
                    let text = t.unescape().map_err(|e| markup_error(position, e))?;
                    if text.trim().is_empty() {
                        continue;
                    }
                    MarkupEvent::Text(text.into_owned())
                }
                Event::CData(c) => {
                    MarkupEvent::Text(String::from_utf8_lossy(&c.into_inner()).into_owned())
                }
                Event::Eof => {
                    self.finished = true;
                    MarkupEvent::Eof
                }
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => continue,
            };

            return Ok(out);
        }
    }
}
