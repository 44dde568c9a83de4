//! Validation issue types for the check command.
//!
//! These types describe problems found while checking a vault's ancestry:
//! unreadable notes, declared parents that match no note, ambiguous
//! ancestry and ancestry cycles.

use serde::Serialize;

use crate::domain::NoteId;

/// A validation issue found during checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// The note where the issue was found.
    pub note: NoteId,
    /// The kind of validation issue.
    pub kind: ValidationKind,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(note: NoteId, kind: ValidationKind) -> Self {
        Self { note, kind }
    }

    /// Creates an unreadable note issue.
    pub fn unreadable(note: NoteId, reason: impl Into<String>) -> Self {
        Self::new(
            note,
            ValidationKind::Unreadable {
                reason: reason.into(),
            },
        )
    }

    /// Creates an unresolved parent issue.
    pub fn unresolved_parent(note: NoteId, declared: impl Into<String>) -> Self {
        Self::new(
            note,
            ValidationKind::UnresolvedParent {
                declared: declared.into(),
            },
        )
    }

    /// Creates an ambiguous ancestry issue.
    pub fn ambiguous(note: NoteId, chosen: NoteId, candidates: usize) -> Self {
        Self::new(note, ValidationKind::AmbiguousAncestry { chosen, candidates })
    }

    /// Creates an ancestry cycle issue.
    pub fn cycle(note: NoteId, via: NoteId) -> Self {
        Self::new(note, ValidationKind::AncestryCycle { via })
    }

    /// Returns true if the note could not be read.
    pub fn is_unreadable(&self) -> bool {
        matches!(self.kind, ValidationKind::Unreadable { .. })
    }

    /// Returns true if the declared parent matches no note.
    pub fn is_unresolved_parent(&self) -> bool {
        matches!(self.kind, ValidationKind::UnresolvedParent { .. })
    }

    /// Returns true if the ancestry had to be picked among several backlinks.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self.kind, ValidationKind::AmbiguousAncestry { .. })
    }

    /// Returns true if the ancestry loops back on itself.
    pub fn is_cycle(&self) -> bool {
        matches!(self.kind, ValidationKind::AncestryCycle { .. })
    }

    /// Returns the severity of this issue.
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.note, self.kind)
    }
}

/// The kind of validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValidationKind {
    /// File could not be read or its frontmatter is malformed.
    Unreadable {
        /// Why reading failed.
        reason: String,
    },

    /// A declared parent does not match any note in the vault.
    UnresolvedParent {
        /// The value as written in the note.
        declared: String,
    },

    /// Several backlinks compete and no parent is declared.
    AmbiguousAncestry {
        /// The backlink picked as parent.
        chosen: NoteId,
        /// Number of competing backlinks.
        candidates: usize,
    },

    /// Following parents from this note leads back into the walk.
    AncestryCycle {
        /// The last ancestor reached before the walk looped.
        via: NoteId,
    },
}

impl ValidationKind {
    /// Returns the severity of this kind of issue.
    pub fn severity(&self) -> Severity {
        match self {
            ValidationKind::Unreadable { .. } => Severity::Error,
            ValidationKind::UnresolvedParent { .. } => Severity::Error,
            ValidationKind::AmbiguousAncestry { .. } => Severity::Warning,
            ValidationKind::AncestryCycle { .. } => Severity::Warning,
        }
    }
}

impl std::fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationKind::Unreadable { reason } => write!(f, "unreadable note: {}", reason),
            ValidationKind::UnresolvedParent { declared } => {
                write!(f, "declared parent '{}' does not match any note", declared)
            }
            ValidationKind::AmbiguousAncestry { chosen, candidates } => write!(
                f,
                "ambiguous ancestry ({} backlinks, using '{}'); add parent:: to choose",
                candidates,
                chosen.name()
            ),
            ValidationKind::AncestryCycle { via } => {
                write!(f, "ancestry cycle through '{}'", via.name())
            }
        }
    }
}

/// Severity level of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Warning,
    /// Problem that should be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Summary of validation results.
#[derive(Debug, Clone, Default)]
pub struct ValidationSummary {
    /// All issues found during validation.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationSummary {
    /// Creates a new empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue to the summary.
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns the total number of issues.
    pub fn total(&self) -> usize {
        self.issues.len()
    }

    /// Returns the number of errors.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count()
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
            .count()
    }

    /// Returns true if there are no issues.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Returns issues grouped by severity, errors first, then by note.
    pub fn issues_by_severity(&self) -> impl Iterator<Item = &ValidationIssue> {
        let mut sorted: Vec<_> = self.issues.iter().collect();
        sorted.sort_by(|a, b| {
            b.severity()
                .cmp(&a.severity())
                .then_with(|| a.note.cmp(&b.note))
        });
        sorted.into_iter()
    }

    /// Returns all ambiguous ancestry warnings.
    pub fn ambiguities(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.is_ambiguous())
    }

    /// Returns all ancestry cycle warnings.
    pub fn cycles(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.is_cycle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(path: &str) -> NoteId {
        path.parse().unwrap()
    }

    // ===========================================
    // ValidationIssue construction
    // ===========================================

    #[test]
    fn creates_unreadable_issue() {
        let issue = ValidationIssue::unreadable(note("bad.md"), "invalid YAML");

        assert!(issue.is_unreadable());
        assert_eq!(issue.severity(), Severity::Error);
    }

    #[test]
    fn creates_unresolved_parent_issue() {
        let issue = ValidationIssue::unresolved_parent(note("a.md"), "[[Gone]]");

        assert!(issue.is_unresolved_parent());
        assert_eq!(issue.severity(), Severity::Error);
        assert_eq!(
            issue.kind,
            ValidationKind::UnresolvedParent {
                declared: "[[Gone]]".to_string()
            }
        );
    }

    #[test]
    fn ambiguity_and_cycles_are_warnings() {
        let ambiguous = ValidationIssue::ambiguous(note("Leaf.md"), note("B1.md"), 2);
        let cycle = ValidationIssue::cycle(note("A.md"), note("B.md"));

        assert!(ambiguous.is_ambiguous());
        assert!(cycle.is_cycle());
        assert_eq!(ambiguous.severity(), Severity::Warning);
        assert_eq!(cycle.severity(), Severity::Warning);
    }

    // ===========================================
    // Display formatting
    // ===========================================

    #[test]
    fn formats_ambiguity_with_hint() {
        let issue = ValidationIssue::ambiguous(note("dir/Leaf.md"), note("dir/B1.md"), 2);

        let display = issue.to_string();
        assert!(display.starts_with("dir/Leaf.md: "));
        assert!(display.contains("2 backlinks"));
        assert!(display.contains("'B1'"));
        assert!(display.contains("parent::"));
    }

    #[test]
    fn formats_unresolved_parent() {
        let issue = ValidationIssue::unresolved_parent(note("a.md"), "Gone");
        assert_eq!(
            issue.to_string(),
            "a.md: declared parent 'Gone' does not match any note"
        );
    }

    #[test]
    fn formats_cycle() {
        let issue = ValidationIssue::cycle(note("A.md"), note("B.md"));
        assert_eq!(issue.to_string(), "A.md: ancestry cycle through 'B'");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    // ===========================================
    // ValidationSummary
    // ===========================================

    #[test]
    fn empty_summary_is_ok() {
        let summary = ValidationSummary::new();

        assert!(summary.is_ok());
        assert!(!summary.has_errors());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn summary_counts_errors_and_warnings() {
        let mut summary = ValidationSummary::new();
        summary.add(ValidationIssue::ambiguous(note("a.md"), note("x.md"), 2));
        summary.add(ValidationIssue::cycle(note("b.md"), note("c.md")));
        summary.add(ValidationIssue::unresolved_parent(note("c.md"), "Gone"));

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.error_count(), 1);
        assert_eq!(summary.warning_count(), 2);
        assert_eq!(summary.ambiguities().count(), 1);
        assert_eq!(summary.cycles().count(), 1);
        assert!(summary.has_errors());
    }

    #[test]
    fn summary_sorts_by_severity_then_note() {
        let mut summary = ValidationSummary::new();
        summary.add(ValidationIssue::cycle(note("b.md"), note("c.md")));
        summary.add(ValidationIssue::ambiguous(note("a.md"), note("x.md"), 3));
        summary.add(ValidationIssue::unreadable(note("z.md"), "bad"));

        let order: Vec<_> = summary
            .issues_by_severity()
            .map(|i| i.note.as_str())
            .collect();
        assert_eq!(order, vec!["z.md", "a.md", "b.md"]);
    }

    #[test]
    fn issue_serializes_with_kind_tag() {
        let issue = ValidationIssue::cycle(note("A.md"), note("B.md"));
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["note"], "A.md");
        assert_eq!(json["kind"]["kind"], "ancestry-cycle");
        assert_eq!(json["kind"]["via"], "B.md");
    }
}
