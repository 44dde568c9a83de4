//! File I/O, frontmatter parsing, link and field extraction

mod frontmatter;
mod fs;
mod inline_fields;
mod links;

pub use frontmatter::{Frontmatter, ParseError, ParsedNote, parse, split};
pub use fs::{FsError, decode_note, read_note_text, scan_notes_directory};
pub use inline_fields::{InlineField, extract_fields, inline_parent};
pub use links::{LinkKind, RawLink, extract_links, markdown_link_path, wiki_link_path};
