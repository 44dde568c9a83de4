//! Builder for test notes.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

/// Builder for the markdown content of a vault note.
///
/// A note is identified by its vault-relative path (`dir/Leaf`, with `.md`
/// added on write). Parents can be declared in frontmatter or as an inline
/// `parent::` field; links are appended to the body as wiki links.
#[derive(Debug, Clone)]
pub struct TestNote {
    path: String,
    frontmatter_parent: Option<String>,
    inline_parent: Option<String>,
    links: Vec<String>,
    body: String,
}

impl TestNote {
    /// Creates an empty note at the given vault path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            frontmatter_parent: None,
            inline_parent: None,
            links: Vec::new(),
            body: String::new(),
        }
    }

    /// Declares a parent in frontmatter (`parent: "[[name]]"`).
    pub fn parent(mut self, name: impl Into<String>) -> Self {
        self.frontmatter_parent = Some(name.into());
        self
    }

    /// Declares a parent as an inline field (`parent:: [[name]]`).
    pub fn inline_parent(mut self, name: impl Into<String>) -> Self {
        self.inline_parent = Some(name.into());
        self
    }

    /// Adds a wiki link to another note.
    pub fn link(mut self, target: impl Into<String>) -> Self {
        self.links.push(target.into());
        self
    }

    /// Sets free-form body text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the vault-relative file path, including `.md`.
    pub fn file_path(&self) -> String {
        if self.path.ends_with(".md") {
            self.path.clone()
        } else {
            format!("{}.md", self.path)
        }
    }

    /// Renders the note as markdown.
    pub fn content(&self) -> String {
        let mut content = String::new();
        if let Some(parent) = &self.frontmatter_parent {
            content.push_str(&format!("---\nparent: \"[[{}]]\"\n---\n", parent));
        }
        if let Some(parent) = &self.inline_parent {
            content.push_str(&format!("parent:: [[{}]]\n\n", parent));
        }
        if !self.body.is_empty() {
            content.push_str(&self.body);
            content.push('\n');
        }
        for link in &self.links {
            content.push_str(&format!("- [[{}]]\n", link));
        }
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_file_path_adds_extension() {
        assert_eq!(TestNote::new("dir/Leaf").file_path(), "dir/Leaf.md");
        assert_eq!(TestNote::new("Leaf.md").file_path(), "Leaf.md");
    }

    #[test]
    fn test_note_empty_content() {
        assert_eq!(TestNote::new("Empty").content(), "");
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("Leaf")
            .parent("Mid")
            .body("# Leaf")
            .link("Other");

        assert_eq!(
            note.content(),
            "---\nparent: \"[[Mid]]\"\n---\n# Leaf\n- [[Other]]\n"
        );
    }

    #[test]
    fn test_note_inline_parent() {
        let note = TestNote::new("Leaf").inline_parent("Mid");
        assert_eq!(note.content(), "parent:: [[Mid]]\n\n");
    }
}
