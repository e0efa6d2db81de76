//! Service response envelope
//!
//! Every BAS operation answers with the same small XML document:
//!
//! ```xml
//! <WebServiceResponseLink>
//!   <success>true</success>
//!   <downloadLink>https://…/result.TextGrid</downloadLink>
//!   <output>…</output>
//!   <warnings/>
//! </WebServiceResponseLink>
//! ```

use quick_xml::{Reader, events::Event};
use reqwest::Url;

use crate::error::BasError;

/// Parsed response from a BAS service call
///
/// `success == false` is a normal outcome; the service explains itself in
/// `output` and `warnings`.
#[derive(Debug, Clone)]
pub struct BasResponse {
    /// Whether the service reported success
    pub success: bool,
    /// Output message
    pub output: String,
    /// Warning messages (empty if none)
    pub warnings: String,
    /// URL of the result artifact, if the service produced one
    pub download_link: Option<Url>,
    /// Response document as received
    xml: String,
}

/// Envelope fields we extract
#[derive(PartialEq, Eq)]
enum Field {
    Success,
    Output,
    Warnings,
    DownloadLink,
}

impl Field {
    fn for_element(name: &[u8]) -> Option<Self> {
        match name {
            b"success" => Some(Self::Success),
            b"output" => Some(Self::Output),
            b"warnings" => Some(Self::Warnings),
            b"downloadLink" => Some(Self::DownloadLink),
            _ => None,
        }
    }
}

impl BasResponse {
    /// Parse a response envelope
    ///
    /// # Errors
    ///
    /// Returns [`BasError::MalformedResponse`] if the document is not
    /// well-formed XML, the root element is not `WebServiceResponseLink`,
    /// the `success` element is missing, or the download link is not a
    /// valid URL.
    pub fn parse(xml: &str) -> Result<Self, BasError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut root_seen = false;
        let mut success: Option<bool> = None;
        let mut output = String::new();
        let mut warnings = String::new();
        let mut link_text = String::new();

        let mut field: Option<Field> = None;
        let mut field_text = String::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let name = e.name();
                    let name_ref = name.as_ref();
                    if !root_seen {
                        if name_ref == b"WebServiceResponseLink" {
                            root_seen = true;
                        } else {
                            return Err(BasError::MalformedResponse(format!(
                                "unexpected root element {:?}",
                                String::from_utf8_lossy(name_ref)
                            )));
                        }
                    } else if field.is_none() {
                        field = Field::for_element(name_ref);
                        field_text.clear();
                    }
                },
                Ok(Event::Text(e)) => {
                    if field.is_some() {
                        let text = e.unescape().map_err(|e| {
                            BasError::MalformedResponse(format!("bad text content: {e}"))
                        })?;
                        field_text.push_str(&text);
                    }
                },
                Ok(Event::CData(e)) => {
                    if field.is_some() {
                        if let Ok(text) = std::str::from_utf8(e.as_ref()) {
                            field_text.push_str(text);
                        }
                    }
                },
                Ok(Event::End(e)) => {
                    // Nested markup inside a field is ignored; only the
                    // field's own closing tag commits the collected text.
                    let closes_field = matches!(
                        (&field, Field::for_element(e.name().as_ref())),
                        (Some(a), Some(b)) if *a == b
                    );
                    if closes_field {
                        if let Some(current) = field.take() {
                            let text = tidy_text(&field_text);
                            match current {
                                Field::Success => {
                                    success = Some(text.eq_ignore_ascii_case("true"));
                                },
                                Field::Output => output = text,
                                Field::Warnings => warnings = text,
                                Field::DownloadLink => link_text = text,
                            }
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(BasError::MalformedResponse(format!("XML error: {e}")));
                },
                Ok(_) => {},
            }
            buf.clear();
        }

        if !root_seen {
            return Err(BasError::MalformedResponse(
                "missing WebServiceResponseLink root element".to_string(),
            ));
        }
        let success = success.ok_or_else(|| {
            BasError::MalformedResponse("missing <success> element".to_string())
        })?;

        let download_link = if link_text.is_empty() {
            None
        } else {
            Some(Url::parse(&link_text).map_err(|e| {
                BasError::MalformedResponse(format!("invalid download link {link_text:?}: {e}"))
            })?)
        };

        Ok(Self {
            success,
            output,
            warnings,
            download_link,
            xml: xml.to_string(),
        })
    }

    /// Response document exactly as received
    #[must_use]
    pub fn xml(&self) -> &str {
        &self.xml
    }
}

/// Collapse runs of spaces and newlines and trim surrounding whitespace
fn tidy_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ' ' if out.ends_with(' ') => {},
            '\n' if out.ends_with('\n') => {},
            _ => out.push(c),
        }
    }
    out.trim().to_string()
}
