use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Read, Seek};

use crate::error::{Error, Result};
use crate::package::{self, Package, DOCUMENT_PART, STYLES_PART};

/// One `w:r` element: its visible text and any comment markers found inside
/// the run itself.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub range_start: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub style: String,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Paragraph style names from `word/styles.xml`, keyed by style id.
#[derive(Debug, Default)]
pub struct StyleMap {
    names: HashMap<String, String>,
    default: Option<String>,
}

impl StyleMap {
    pub fn parse(xml: &str) -> Result<StyleMap> {
        let mut reader = Reader::from_str(xml);
        let mut map = StyleMap::default();
        // (style id, declared default) of the paragraph style being read
        let mut current: Option<(Option<String>, bool)> = None;
        let mut name: Option<String> = None;
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:style" => {
                    if package::attr_value(&e, "w:type")?.as_deref() == Some("paragraph") {
                        let id = package::attr_value(&e, "w:styleId")?;
                        let is_default = matches!(
                            package::attr_value(&e, "w:default")?.as_deref(),
                            Some("1") | Some("true")
                        );
                        current = Some((id, is_default));
                        name = None;
                    }
                }
                Ok(Event::Start(e)) | Ok(Event::Empty(e))
                    if e.name().as_ref() == b"w:name" && current.is_some() =>
                {
                    if name.is_none() {
                        name = package::attr_value(&e, "w:val")?;
                    }
                }
                Ok(Event::End(e)) if e.name().as_ref() == b"w:style" => {
                    if let (Some((id, is_default)), Some(style_name)) = (current.take(), name.take())
                    {
                        if is_default {
                            map.default = Some(style_name.clone());
                        }
                        if let Some(id) = id {
                            map.names.insert(id, style_name);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml(format!(
                        "styles part, position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
        }
        Ok(map)
    }

    /// Resolve a `w:pStyle` id to the style's display name. Paragraphs
    /// without an explicit style get the default paragraph style; ids the
    /// styles part does not declare resolve to themselves.
    pub fn resolve(&self, style_id: Option<&str>) -> String {
        match style_id {
            Some(id) => match self.names.get(id) {
                Some(name) => internal_to_ui(name),
                None => id.to_string(),
            },
            None => internal_to_ui(self.default.as_deref().unwrap_or("Normal")),
        }
    }
}

// Built-in heading styles are stored under lowercase internal names; the
// display names are capitalized.
fn internal_to_ui(name: &str) -> String {
    match name.strip_prefix("heading ") {
        Some(n) if matches!(n, "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9") => {
            format!("Heading {n}")
        }
        _ => name.to_string(),
    }
}

pub fn styles<R: Read + Seek>(package: &mut Package<R>) -> Result<StyleMap> {
    match package.part_opt(STYLES_PART)? {
        Some(xml) => StyleMap::parse(&xml),
        None => Ok(StyleMap::default()),
    }
}

/// Extract the main document's paragraphs with styles resolved.
pub fn load<R: Read + Seek>(package: &mut Package<R>) -> Result<Vec<Paragraph>> {
    let style_map = styles(package)?;
    let xml = package.part(DOCUMENT_PART)?;
    let paras = paragraphs(&xml, &style_map)?;
    debug!("extracted {} paragraphs", paras.len());
    Ok(paras)
}

/// Stream `word/document.xml` into paragraphs. Tabs and breaks become `\t`
/// and `\n` in run text; comment markers are recorded only when they sit
/// inside the `w:r` element.
pub fn paragraphs(xml: &str, styles: &StyleMap) -> Result<Vec<Paragraph>> {
    let mut reader = Reader::from_str(xml);
    let mut paras = Vec::new();

    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_text = false;
    let mut style_id: Option<String> = None;
    let mut runs: Vec<Run> = Vec::new();
    let mut run = Run::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    style_id = None;
                    runs.clear();
                }
                b"w:r" if in_paragraph => {
                    in_run = true;
                    run = Run::default();
                }
                b"w:t" if in_run => in_text = true,
                b"w:pStyle" if in_paragraph && !in_run => {
                    if style_id.is_none() {
                        style_id = package::attr_value(&e, "w:val")?;
                    }
                }
                b"w:commentRangeStart" if in_run => {
                    if run.range_start.is_none() {
                        run.range_start = package::attr_value(&e, "w:id")?;
                    }
                }
                b"w:commentReference" if in_run => {
                    if run.reference.is_none() {
                        run.reference = package::attr_value(&e, "w:id")?;
                    }
                }
                b"w:tab" if in_run => run.text.push('\t'),
                b"w:br" | b"w:cr" if in_run => run.text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => paras.push(Paragraph {
                    style: styles.resolve(None),
                    runs: Vec::new(),
                }),
                b"w:r" if in_paragraph => runs.push(Run::default()),
                b"w:pStyle" if in_paragraph && !in_run => {
                    if style_id.is_none() {
                        style_id = package::attr_value(&e, "w:val")?;
                    }
                }
                b"w:commentRangeStart" if in_run => {
                    if run.range_start.is_none() {
                        run.range_start = package::attr_value(&e, "w:id")?;
                    }
                }
                b"w:commentReference" if in_run => {
                    if run.reference.is_none() {
                        run.reference = package::attr_value(&e, "w:id")?;
                    }
                }
                b"w:tab" if in_run => run.text.push('\t'),
                b"w:br" | b"w:cr" if in_run => run.text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let text = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                run.text.push_str(&text);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    paras.push(Paragraph {
                        style: styles.resolve(style_id.as_deref()),
                        runs: std::mem::take(&mut runs),
                    });
                    in_paragraph = false;
                }
                b"w:r" if in_run => {
                    runs.push(std::mem::take(&mut run));
                    in_run = false;
                }
                b"w:t" => in_text = false,
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
    Ok(paras)
}
