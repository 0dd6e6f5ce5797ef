#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use html_from_docx::package::Package;

pub const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/word/comments.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.comments+xml"/>
</Types>"#;

pub const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

pub const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

pub const DOCUMENT_RELS_WITH_COMMENTS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/comments" Target="comments.xml"/>
</Relationships>"#;

// Internal style names for built-in headings are lowercase, as Word writes
// them.
pub const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Title">
    <w:name w:val="Title"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading2">
    <w:name w:val="heading 2"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:qFormat/>
  </w:style>
</w:styles>"#;

pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    )
}

pub fn paragraph(style: Option<&str>, runs: &str) -> String {
    match style {
        Some(style_id) => {
            format!(r#"<w:p><w:pPr><w:pStyle w:val="{style_id}"/></w:pPr>{runs}</w:p>"#)
        }
        None => format!("<w:p>{runs}</w:p>"),
    }
}

pub fn text_run(text: &str) -> String {
    format!(r#"<w:r><w:t xml:space="preserve">{text}</w:t></w:r>"#)
}

/// A run opening a comment range, with the marker inside the run element.
pub fn commented_run(text: &str, id: &str) -> String {
    format!(
        r#"<w:r><w:commentRangeStart w:id="{id}"/><w:t xml:space="preserve">{text}</w:t></w:r>"#
    )
}

pub fn reference_run(id: &str) -> String {
    format!(r#"<w:r><w:commentReference w:id="{id}"/></w:r>"#)
}

pub fn comments_xml(entries: &[(&str, &str)]) -> String {
    let body: String = entries
        .iter()
        .map(|(id, text)| {
            format!(
                r#"<w:comment w:id="{id}" w:author="Reviewer" w:initials="R"><w:p><w:r><w:t>{text}</w:t></w:r></w:p></w:comment>"#
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:comments xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">{body}</w:comments>"#
    )
}

/// Zip the given parts into DOCX bytes, in order.
pub fn docx_bytes(parts: &[(&str, String)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, content) in parts {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Standard package layout around a document body; `comments` controls
/// whether a comments part (and its relationship) exists at all.
pub fn docx_package(
    body: &str,
    comments: Option<&[(&str, &str)]>,
) -> Package<Cursor<Vec<u8>>> {
    Package::from_reader(Cursor::new(standard_docx_bytes(body, comments))).unwrap()
}

pub fn standard_docx_bytes(body: &str, comments: Option<&[(&str, &str)]>) -> Vec<u8> {
    let mut parts = vec![
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", ROOT_RELS_XML.to_string()),
        ("word/document.xml", document_xml(body)),
        ("word/styles.xml", STYLES_XML.to_string()),
    ];
    match comments {
        Some(entries) => {
            parts.push((
                "word/_rels/document.xml.rels",
                DOCUMENT_RELS_WITH_COMMENTS_XML.to_string(),
            ));
            parts.push(("word/comments.xml", comments_xml(entries)));
        }
        None => parts.push(("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.to_string())),
    }
    docx_bytes(&parts)
}
