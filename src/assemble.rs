use std::collections::HashMap;

use crate::document::Paragraph;
use crate::render::{escape_html, runs_to_html};

const HEAD: &str = r#"<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>As You Like It - Annotated</title>
    <link rel="stylesheet" href="style.css" />
    <script src="soundbutton.js"></script>
</head>
<body>
    <div class="document-container">"#;

const TAIL: &str = r#"<script src="bars.js"></script></body></html>"#;

/// Which wrapper div is currently open. Title and Heading 1 paragraphs live
/// in a header section, everything else in a content section; at most one
/// section is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    None,
    Header,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEvent {
    OpenHeader,
    OpenContent,
    CloseHeader,
    CloseContent,
}

impl SectionEvent {
    pub fn markup(self) -> &'static str {
        match self {
            SectionEvent::OpenHeader => "<div class=\"header\">",
            SectionEvent::OpenContent => "<div class=\"content\">",
            SectionEvent::CloseHeader | SectionEvent::CloseContent => "</div>",
        }
    }
}

/// Advance the section machine for a paragraph of the given style. Heading 2
/// always opens a fresh content section; other body styles reuse the one
/// already open.
pub fn transition(section: Section, style: &str) -> (Section, Vec<SectionEvent>) {
    use SectionEvent::*;
    match style {
        "Title" | "Heading 1" => match section {
            Section::Header => (Section::Header, vec![]),
            Section::Content => (Section::Header, vec![CloseContent, OpenHeader]),
            Section::None => (Section::Header, vec![OpenHeader]),
        },
        "Heading 2" => match section {
            Section::Header => (Section::Content, vec![CloseHeader, OpenContent]),
            Section::Content => (Section::Content, vec![CloseContent, OpenContent]),
            Section::None => (Section::Content, vec![OpenContent]),
        },
        _ => match section {
            Section::Header => (Section::Content, vec![CloseHeader, OpenContent]),
            Section::Content => (Section::Content, vec![]),
            Section::None => (Section::Content, vec![OpenContent]),
        },
    }
}

pub fn flush(section: Section) -> Vec<SectionEvent> {
    match section {
        Section::None => vec![],
        Section::Header => vec![SectionEvent::CloseHeader],
        Section::Content => vec![SectionEvent::CloseContent],
    }
}

/// Assemble the whole page: fixed head, section-wrapped body, fixed tail.
/// Parts are joined with newlines. Paragraphs whose text trims to nothing
/// are skipped outright; body paragraphs whose converted fragment trims to
/// nothing still drive the section machine but emit no paragraph div.
pub fn generate_html(paragraphs: &[Paragraph], comments: &HashMap<String, String>) -> String {
    let mut parts: Vec<String> = vec![HEAD.to_string()];
    let mut section = Section::None;

    for paragraph in paragraphs {
        let text = paragraph.text();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let style = paragraph.style.as_str();
        let (next, events) = transition(section, style);
        section = next;
        for event in events {
            parts.push(event.markup().to_string());
        }

        match style {
            "Title" | "Heading 1" => parts.push(format!("<h1>{}</h1>", escape_html(text))),
            "Heading 2" => parts.push(format!("<h2>{}</h2>", escape_html(text))),
            _ => {
                let line = runs_to_html(paragraph, comments);
                if !line.trim().is_empty() {
                    parts.push(format!("<div class=\"paragraph\">{line}</div>"));
                }
            }
        }
    }

    for event in flush(section) {
        parts.push(event.markup().to_string());
    }
    parts.push("</div>".to_string());
    parts.push(TAIL.to_string());
    parts.join("\n")
}

/// Speaker labels for these three characters carry a stray trailing comma in
/// the source document. The replacement is global over the finished page.
pub fn strip_name_commas(html: String) -> String {
    html.replace("ROSALIND,", "ROSALIND")
        .replace("PHOEBE,", "PHOEBE")
        .replace("CELIA,", "CELIA")
}
