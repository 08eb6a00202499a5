use std::ops::Range;

use roxmltree::{Document, ParsingOptions};

use crate::error::{DataError, DataResult};

/// A fetched XML payload that is known to parse.
///
/// `roxmltree::Document` borrows its input, so the owned text is kept here and
/// re-parsed on demand with [`SourceDocument::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    endpoint: String,
    text: String,
    root: Range<usize>,
}

fn parsing_options() -> ParsingOptions {
    ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    }
}

impl SourceDocument {
    /// Validates a raw payload: non-empty, UTF-8, well-formed XML.
    pub fn from_bytes(endpoint: &str, bytes: Vec<u8>) -> DataResult<Self> {
        if bytes.is_empty() {
            return Err(DataError::Empty {
                endpoint: endpoint.to_string(),
            });
        }
        let text = String::from_utf8(bytes).map_err(|e| DataError::Unparsable {
            endpoint: endpoint.to_string(),
            source: Box::new(e),
        })?;
        let root = {
            let doc = Document::parse_with_options(&text, parsing_options()).map_err(|e| {
                DataError::Unparsable {
                    endpoint: endpoint.to_string(),
                    source: Box::new(e),
                }
            })?;
            doc.root_element().range()
        };
        Ok(Self {
            endpoint: endpoint.to_string(),
            text,
            root,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn parse(&self) -> DataResult<Document<'_>> {
        Document::parse_with_options(&self.text, parsing_options()).map_err(|e| {
            DataError::Unparsable {
                endpoint: self.endpoint.clone(),
                source: Box::new(e),
            }
        })
    }

    /// Source text of the root element, without prolog or trailing misc.
    pub fn root_xml(&self) -> &str {
        &self.text[self.root.clone()]
    }
}
