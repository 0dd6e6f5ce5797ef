//! Convert an annotated *As You Like It* .docx into a static HTML page,
//! turning reviewer comments into inline notes and clickable sound-effect
//! buttons. The `probe` binary reports a document's package structure
//! instead of converting it.

pub mod assemble;
pub mod comments;
pub mod document;
pub mod effects;
pub mod error;
pub mod inspect;
pub mod package;
pub mod render;

pub use error::{Error, Result};

use std::io::{Read, Seek};

use package::Package;

/// Full conversion over an open package: comment map, paragraph extraction,
/// page assembly, speaker-name cleanup.
pub fn convert<R: Read + Seek>(package: &mut Package<R>) -> Result<String> {
    let comments = comments::comment_map(package)?;
    let paragraphs = document::load(package)?;
    let html = assemble::generate_html(&paragraphs, &comments);
    Ok(assemble::strip_name_commas(html))
}
