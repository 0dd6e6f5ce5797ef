//! Structure report behind the `probe` binary: relationships, annotation
//! element counts, package parts, tracked changes, paragraph samples.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Read, Seek};

use crate::document::{self, StyleMap};
use crate::error::{Error, Result};
use crate::package::{self, Package, DOCUMENT_PART};

pub const ANNOTATION_ELEMENTS: [&str; 9] = [
    "commentRangeStart",
    "commentRangeEnd",
    "commentReference",
    "ins",
    "del",
    "moveFrom",
    "moveTo",
    "annotation",
    "annotationRef",
];

const ANNOTATION_REL_KEYWORDS: [&str; 4] = ["comment", "annotation", "revision", "track"];

struct Sample {
    text: String,
    style: String,
    run_elements: Vec<Vec<&'static str>>,
}

struct Scan {
    counts: [usize; 9],
    tracked: Vec<(String, Option<String>)>,
    paragraphs: Vec<Sample>,
}

/// Produce the full diagnostic report for a document, one line per entry.
pub fn report<R: Read + Seek>(path: &str, package: &mut Package<R>) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("Debugging DOCX file: {path}"));
    lines.push("=".repeat(50));

    let rels = package.relationships()?;
    lines.push("Available relationships:".to_string());
    for rel in &rels {
        lines.push(format!("  {}: {} ({})", rel.id, rel.target, rel.rel_type));
    }
    lines.push(String::new());

    let comment_ids: Vec<&str> = rels
        .iter()
        .filter(|r| r.id.to_lowercase().contains("comment"))
        .map(|r| r.id.as_str())
        .collect();
    lines.push(format!(
        "Comment-related relationships: {}",
        quoted_list(&comment_ids)
    ));
    lines.push(String::new());

    lines.push("Annotation-related relationships:".to_string());
    for rel in &rels {
        let rel_type = rel.rel_type.to_lowercase();
        if ANNOTATION_REL_KEYWORDS.iter().any(|k| rel_type.contains(k)) {
            lines.push(format!("  {}: {} ({})", rel.id, rel.target, rel.rel_type));
        }
    }
    lines.push(String::new());

    lines.push("Checking main document XML for annotation elements...".to_string());
    let styles = document::styles(package)?;
    let xml = package.part(DOCUMENT_PART)?;
    let scan = scan_document(&xml, &styles)?;

    if scan.counts.iter().any(|&c| c > 0) {
        lines.push("Found annotation elements in document:".to_string());
        for (name, &count) in ANNOTATION_ELEMENTS.iter().zip(scan.counts.iter()) {
            if count > 0 {
                lines.push(format!("  w:{name}: {count} occurrences"));
            }
        }
    } else {
        lines.push("No standard annotation elements found in main document.".to_string());
    }
    lines.push(String::new());

    lines.push("All package parts:".to_string());
    for name in package.part_names() {
        lines.push(format!("  {name}"));
    }
    lines.push(String::new());

    lines.push("Checking for tracked changes...".to_string());
    if scan.tracked.is_empty() {
        lines.push("No tracked changes found".to_string());
    } else {
        lines.push(format!("Found {} tracked changes", scan.tracked.len()));
        for (i, (tag, text)) in scan.tracked.iter().take(3).enumerate() {
            let text = text.as_deref().filter(|t| !t.is_empty()).unwrap_or("No text");
            lines.push(format!("  Change {}: {} - {}", i + 1, tag, text));
        }
    }
    lines.push(String::new());

    lines.push("Sample paragraph analysis (first 3 paragraphs):".to_string());
    let mut shown = 0;
    for (position, sample) in scan.paragraphs.iter().enumerate() {
        if sample.text.trim().is_empty() {
            continue;
        }
        if shown == 3 {
            break;
        }
        shown += 1;
        let preview: String = sample.text.chars().take(100).collect();
        lines.push(format!(
            "Paragraph {}: '{}...' (style: {})",
            position + 1,
            preview,
            sample.style
        ));
        for (j, elements) in sample.run_elements.iter().enumerate() {
            if !elements.is_empty() {
                lines.push(format!("  Run {} contains: {}", j + 1, elements.join(", ")));
            }
        }
    }

    Ok(lines.join("\n"))
}

fn quoted_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{s}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn annotation_index(name: &[u8]) -> Option<usize> {
    let rest = name.strip_prefix(b"w:")?;
    ANNOTATION_ELEMENTS
        .iter()
        .position(|n| n.as_bytes() == rest)
}

/// One pass over the main document: global annotation-element counts,
/// tracked changes with their direct text, and per-paragraph samples with
/// the annotation elements each run carries.
fn scan_document(xml: &str, styles: &StyleMap) -> Result<Scan> {
    let mut reader = Reader::from_str(xml);
    let mut scan = Scan {
        counts: [0; 9],
        tracked: Vec::new(),
        paragraphs: Vec::new(),
    };

    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_text = false;
    let mut style_id: Option<String> = None;
    let mut para_text = String::new();
    let mut run_flags = [false; 9];
    let mut run_elements: Vec<Vec<&'static str>> = Vec::new();
    // open w:ins/w:del elements: (index into tracked, child element seen)
    let mut open_changes: Vec<(usize, bool)> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name();
                let name = name.as_ref();
                if let Some((_, child_seen)) = open_changes.last_mut() {
                    *child_seen = true;
                }
                if let Some(idx) = annotation_index(name) {
                    scan.counts[idx] += 1;
                    if in_run {
                        run_flags[idx] = true;
                    }
                }
                match name {
                    b"w:p" => {
                        in_paragraph = true;
                        style_id = None;
                        para_text.clear();
                        run_elements.clear();
                    }
                    b"w:r" if in_paragraph => {
                        in_run = true;
                        run_flags = [false; 9];
                    }
                    b"w:t" if in_run => in_text = true,
                    b"w:pStyle" if in_paragraph && !in_run => {
                        if style_id.is_none() {
                            style_id = package::attr_value(&e, "w:val")?;
                        }
                    }
                    b"w:tab" if in_run => para_text.push('\t'),
                    b"w:br" | b"w:cr" if in_run => para_text.push('\n'),
                    b"w:ins" | b"w:del" => {
                        scan.tracked
                            .push((String::from_utf8_lossy(name).into_owned(), None));
                        open_changes.push((scan.tracked.len() - 1, false));
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(e)) => {
                let name = e.name();
                let name = name.as_ref();
                if let Some((_, child_seen)) = open_changes.last_mut() {
                    *child_seen = true;
                }
                if let Some(idx) = annotation_index(name) {
                    scan.counts[idx] += 1;
                    if in_run {
                        run_flags[idx] = true;
                    }
                }
                match name {
                    b"w:p" => scan.paragraphs.push(Sample {
                        text: String::new(),
                        style: styles.resolve(None),
                        run_elements: Vec::new(),
                    }),
                    b"w:r" if in_paragraph => run_elements.push(Vec::new()),
                    b"w:pStyle" if in_paragraph && !in_run => {
                        if style_id.is_none() {
                            style_id = package::attr_value(&e, "w:val")?;
                        }
                    }
                    b"w:tab" if in_run => para_text.push('\t'),
                    b"w:br" | b"w:cr" if in_run => para_text.push('\n'),
                    b"w:ins" | b"w:del" => {
                        scan.tracked
                            .push((String::from_utf8_lossy(name).into_owned(), None));
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                let chunk = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                if in_text {
                    para_text.push_str(&chunk);
                }
                if let Some(&(idx, child_seen)) = open_changes.last() {
                    if !child_seen {
                        scan.tracked[idx]
                            .1
                            .get_or_insert_with(String::new)
                            .push_str(&chunk);
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    scan.paragraphs.push(Sample {
                        text: std::mem::take(&mut para_text),
                        style: styles.resolve(style_id.as_deref()),
                        run_elements: std::mem::take(&mut run_elements),
                    });
                    in_paragraph = false;
                }
                b"w:r" if in_run => {
                    let found: Vec<&'static str> = ANNOTATION_ELEMENTS
                        .iter()
                        .zip(run_flags.iter())
                        .filter(|(_, &flag)| flag)
                        .map(|(&name, _)| name)
                        .collect();
                    run_elements.push(found);
                    in_run = false;
                }
                b"w:t" => in_text = false,
                b"w:ins" | b"w:del" => {
                    open_changes.pop();
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "document part, position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
  <w:p><w:r><w:commentRangeStart w:id="0"/><w:t>Fortune reigns</w:t></w:r><w:r><w:commentReference w:id="0"/></w:r></w:p>
  <w:p><w:r><w:t xml:space="preserve">   </w:t></w:r></w:p>
  <w:p><w:ins w:id="9" w:author="R"><w:r><w:t>inserted line</w:t></w:r></w:ins></w:p>
</w:body></w:document>"#;

    #[test]
    fn test_scan_counts() {
        let scan = scan_document(DOC, &StyleMap::default()).unwrap();
        assert_eq!(scan.counts[0], 1);
        assert_eq!(scan.counts[2], 1);
        assert_eq!(scan.counts[3], 1);
        assert_eq!(scan.counts[1], 0);
    }

    #[test]
    fn tracked_changes_record_tag_and_text() {
        let scan = scan_document(DOC, &StyleMap::default()).unwrap();
        assert_eq!(scan.tracked.len(), 1);
        assert_eq!(scan.tracked[0].0, "w:ins");
        assert_eq!(scan.tracked[0].1, None);
    }

    #[test]
    fn run_elements_follow_candidate_order() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
  <w:p><w:r><w:commentReference w:id="1"/><w:commentRangeStart w:id="1"/><w:t>x</w:t></w:r></w:p>
</w:body></w:document>"#;
        let scan = scan_document(xml, &StyleMap::default()).unwrap();
        assert_eq!(
            scan.paragraphs[0].run_elements[0],
            vec!["commentRangeStart", "commentReference"]
        );
    }

    #[test]
    fn samples_keep_document_positions() {
        let scan = scan_document(DOC, &StyleMap::default()).unwrap();
        assert_eq!(scan.paragraphs.len(), 3);
        assert_eq!(scan.paragraphs[0].text, "Fortune reigns");
        assert!(scan.paragraphs[1].text.trim().is_empty());
        assert_eq!(scan.paragraphs[2].text, "inserted line");
    }

    #[test]
    fn test_quoted_list() {
        assert_eq!(quoted_list(&[]), "[]");
        assert_eq!(quoted_list(&["rId5"]), "['rId5']");
        assert_eq!(quoted_list(&["rId5", "rId6"]), "['rId5', 'rId6']");
    }
}
