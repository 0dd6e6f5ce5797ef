use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Read, Seek};

use crate::error::{Error, Result};
use crate::package::{self, Package};

/// Build the comment-id to comment-text map for a document. A document with
/// no comments part is not an error; it simply has nothing annotated.
pub fn comment_map<R: Read + Seek>(package: &mut Package<R>) -> Result<HashMap<String, String>> {
    let rels = package.relationships()?;
    let comments_rel = rels.iter().find(|r| r.target.contains("comments.xml"));
    let Some(rel) = comments_rel else {
        warn!("No comments found in document");
        return Ok(HashMap::new());
    };

    let part_name = package::resolve_target(&rel.target);
    let xml = package.part(&part_name)?;
    let map = parse_comments(&xml)?;
    debug!("loaded {} comments from {part_name}", map.len());
    Ok(map)
}

/// Each comment's text is the concatenation of every character-data node
/// below its `w:comment` element, trimmed.
pub fn parse_comments(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut map = HashMap::new();
    let mut current_id: Option<String> = None;
    let mut text = String::new();
    let mut in_comment = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:comment" => {
                current_id = package::attr_value(&e, "w:id")?;
                text.clear();
                in_comment = true;
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:comment" => {
                if let Some(id) = package::attr_value(&e, "w:id")? {
                    map.insert(id, String::new());
                }
            }
            Ok(Event::Text(e)) if in_comment => {
                let chunk = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                text.push_str(&chunk);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:comment" => {
                if let Some(id) = current_id.take() {
                    map.insert(id, text.trim().to_string());
                }
                in_comment = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "comments part, position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }
    Ok(map)
}
