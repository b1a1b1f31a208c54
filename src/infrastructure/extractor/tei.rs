//! TEI metadata extractor
//!
//! Reads the header fields canonsort classifies on. Missing elements degrade
//! to empty values; only unreadable files, malformed XML and non-TEI roots
//! are errors.

use std::fs;
use std::path::{Component, Path};

use roxmltree::{Document, Node, ParsingOptions};

use crate::domain::entities::{CanonRegistry, DocumentMetadata};
use crate::domain::ports::MetadataExtractor;
use crate::domain::value_objects::{NO_PROJECT_DESCRIPTION, NO_PROJECT_DESC_TAG};
use crate::error::ExtractionError;

/// TEI P5 namespace
pub const TEI_NS: &str = "http://www.tei-c.org/ns/1.0";

/// Namespace bound to the reserved `xml:` prefix
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Separator between project description paragraphs
const PARAGRAPH_SEPARATOR: &str = " | ";

/// Extracts `DocumentMetadata` from TEI files on disk
#[derive(Debug, Clone, Copy)]
pub struct TeiExtractor<'a> {
    registry: &'a CanonRegistry,
}

impl<'a> TeiExtractor<'a> {
    pub fn new(registry: &'a CanonRegistry) -> Self {
        Self { registry }
    }
}

impl MetadataExtractor for TeiExtractor<'_> {
    fn extract(&self, root: &Path, relative: &Path) -> Result<DocumentMetadata, ExtractionError> {
        let bytes = fs::read(root.join(relative)).map_err(|e| ExtractionError::Unreadable {
            message: e.to_string(),
        })?;
        let content = String::from_utf8(bytes).map_err(|e| ExtractionError::Malformed {
            message: format!("invalid UTF-8: {}", e.utf8_error()),
        })?;
        extract_from_str(&content, relative, self.registry)
    }
}

/// Extract metadata from TEI markup already in memory
pub fn extract_from_str(
    content: &str,
    relative: &Path,
    registry: &CanonRegistry,
) -> Result<DocumentMetadata, ExtractionError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(content, options).map_err(|e| {
        ExtractionError::Malformed {
            message: e.to_string(),
        }
    })?;

    let tei = doc.root_element();
    if !tei.has_tag_name((TEI_NS, "TEI")) {
        return Err(ExtractionError::NotTei {
            root: tei.tag_name().name().to_string(),
        });
    }

    let id = tei.attribute((XML_NS, "id")).unwrap_or("").to_string();
    let canon_code = canon_from_id(&id).or_else(|| canon_from_path(relative, registry));

    let titles = tei
        .descendants()
        .filter(|n| n.has_tag_name((TEI_NS, "title")))
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect();

    let author = first_element(tei, "author")
        .map(element_text)
        .unwrap_or_default();

    let bibliographic_source = first_element(tei, "sourceDesc")
        .and_then(|source_desc| first_child(source_desc, "bibl"))
        .map(element_text)
        .unwrap_or_default();

    Ok(DocumentMetadata {
        id,
        canon_code,
        titles,
        author,
        bibliographic_source,
        project_description: project_description(tei),
        file_path: display_path(relative),
    })
}

/// Leading run of uppercase ASCII letters, e.g. `T01n0001` -> `T`
pub fn canon_from_id(id: &str) -> Option<String> {
    let code: String = id.chars().take_while(|c| c.is_ascii_uppercase()).collect();
    (!code.is_empty()).then_some(code)
}

/// First path segment that names a registered canon
pub fn canon_from_path(relative: &Path, registry: &CanonRegistry) -> Option<String> {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => segment.to_str(),
            _ => None,
        })
        .find(|segment| registry.contains(segment))
        .map(str::to_string)
}

/// Relative path with `/` separators, independent of platform
pub fn display_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn project_description(tei: Node<'_, '_>) -> String {
    let Some(project_desc) = first_element(tei, "projectDesc") else {
        return NO_PROJECT_DESC_TAG.to_string();
    };

    let paragraphs: Vec<Node<'_, '_>> = project_desc
        .children()
        .filter(|n| n.has_tag_name((TEI_NS, "p")))
        .collect();

    let english: Vec<String> = paragraphs
        .iter()
        .filter(|p| p.attribute((XML_NS, "lang")) == Some("en"))
        .map(|p| element_text(*p))
        .filter(|t| !t.is_empty())
        .collect();
    if !english.is_empty() {
        return english.join(PARAGRAPH_SEPARATOR);
    }

    let all: Vec<String> = paragraphs
        .iter()
        .map(|p| element_text(*p))
        .filter(|t| !t.is_empty())
        .collect();
    if all.is_empty() {
        NO_PROJECT_DESCRIPTION.to_string()
    } else {
        all.join(PARAGRAPH_SEPARATOR)
    }
}

fn first_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants().find(|n| n.has_tag_name((TEI_NS, name)))
}

fn first_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name((TEI_NS, name)))
}

/// Concatenated descendant text, trimmed
fn element_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}
