// Read access to the ZIP package around a .docx file: named parts plus the
// main document's relationships.

use log::warn;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{Error, Result};

pub const DOCUMENT_PART: &str = "word/document.xml";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const STYLES_PART: &str = "word/styles.xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}

pub struct Package<R> {
    archive: ZipArchive<R>,
}

impl Package<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let archive = ZipArchive::new(BufReader::new(file))?;
        Ok(Package { archive })
    }
}

impl<R: Read + Seek> Package<R> {
    pub fn from_reader(reader: R) -> Result<Self> {
        Ok(Package {
            archive: ZipArchive::new(reader)?,
        })
    }

    /// Read a named part as UTF-8 text.
    pub fn part(&mut self, name: &str) -> Result<String> {
        match self.archive.by_name(name) {
            Ok(mut entry) => {
                let mut xml = String::new();
                entry.read_to_string(&mut xml)?;
                Ok(xml)
            }
            Err(ZipError::FileNotFound) => Err(Error::MissingPart(name.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Like `part`, but absence is not an error.
    pub fn part_opt(&mut self, name: &str) -> Result<Option<String>> {
        match self.part(name) {
            Ok(xml) => Ok(Some(xml)),
            Err(Error::MissingPart(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// Relationships of the main document part. A package without a
    /// relationships part yields an empty list rather than an error.
    pub fn relationships(&mut self) -> Result<Vec<Relationship>> {
        match self.part_opt(DOCUMENT_RELS_PART)? {
            Some(xml) => parse_relationships(&xml),
            None => {
                warn!("package has no {DOCUMENT_RELS_PART} part");
                Ok(Vec::new())
            }
        }
    }
}

/// Resolve a relationship target to a package part name. Relative targets are
/// relative to the main document part's directory.
pub fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("word/{target}"),
    }
}

pub fn parse_relationships(xml: &str) -> Result<Vec<Relationship>> {
    let mut reader = Reader::from_str(xml);
    let mut rels = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if e.name().as_ref() == b"Relationship" =>
            {
                rels.push(Relationship {
                    id: attr_value(&e, "Id")?.unwrap_or_default(),
                    rel_type: attr_value(&e, "Type")?.unwrap_or_default(),
                    target: attr_value(&e, "Target")?.unwrap_or_default(),
                });
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "relationships part, position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }
    Ok(rels)
}

pub(crate) fn attr_value(e: &BytesStart, name: &str) -> Result<Option<String>> {
    match e.try_get_attribute(name) {
        Ok(Some(attr)) => {
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(e.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        Ok(None) => Ok(None),
        Err(e) => Err(Error::Xml(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_relationship_entries() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/comments" Target="comments.xml"/>
</Relationships>"#;
        let rels = parse_relationships(xml).unwrap();
        assert_eq!(rels.len(), 2);
        assert_eq!(rels[0].id, "rId1");
        assert_eq!(rels[1].target, "comments.xml");
        assert!(rels[1].rel_type.ends_with("/comments"));
    }

    #[test]
    fn resolves_targets_against_word_dir() {
        assert_eq!(resolve_target("comments.xml"), "word/comments.xml");
        assert_eq!(resolve_target("/word/comments.xml"), "word/comments.xml");
    }
}
