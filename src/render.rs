use std::collections::HashMap;

use crate::document::Paragraph;
use crate::effects;

/// Escape text for HTML, matching the conservative five-entity set.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Convert a paragraph's runs to an HTML fragment. A comment range start
/// wraps the run in a commented span; a comment reference becomes a sound
/// button (or a plain span when no keyword matches); anything else is
/// escaped text. Comment text and sound paths pass through unescaped.
pub fn runs_to_html(paragraph: &Paragraph, comments: &HashMap<String, String>) -> String {
    let mut html = String::new();
    for run in &paragraph.runs {
        if let Some(id) = &run.range_start {
            let comment = comment_text(comments, id);
            html.push_str(&format!(
                "<span class=\"commented\">{}<span class=\"comment\">[{}]</span></span>",
                escape_html(&run.text),
                comment
            ));
        } else if let Some(id) = &run.reference {
            let comment = comment_text(comments, id);
            match effects::find(comment) {
                Some(effect) => {
                    if let Some(prelude) = &effect.prelude {
                        html.push_str(&sound_button(prelude.sound, prelude.label));
                    }
                    html.push_str(&sound_button(effect.sound, &format!("[{comment}]")));
                }
                None => {
                    html.push_str(&format!("<span class=\"sound_button\">[{comment}]</span>"));
                }
            }
        } else {
            html.push_str(&escape_html(&run.text));
        }
    }
    html
}

fn comment_text<'a>(comments: &'a HashMap<String, String>, id: &str) -> &'a str {
    comments.get(id).map(String::as_str).unwrap_or("??")
}

fn sound_button(sound: &str, label: &str) -> String {
    format!(
        "<button class=\"sound_button\" data-sound=\"{sound}\" onclick=\"toggleSound(this)\">{label}</button>"
    )
}

pub const PALETTE: [&str; 10] = [
    "#e6194B", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe",
];

/// Assign a character a color from the fixed palette, first seen first
/// served, wrapping around once the palette runs out.
pub fn character_color(name: &str, colors: &mut HashMap<String, String>) -> String {
    if let Some(color) = colors.get(name) {
        return color.clone();
    }
    let color = PALETTE[colors.len() % PALETTE.len()].to_string();
    colors.insert(name.to_string(), color.clone());
    color
}
