//! Ancestry resolution: walks parent references from a note up to the home note.
//!
//! Each step prefers an explicitly declared parent and falls back to the
//! note's backlinks. When several backlinks compete, the smallest `NoteId`
//! wins and the note is reported as ambiguous.

use std::collections::{HashSet, VecDeque};

use log::debug;
use serde::Serialize;

use crate::domain::{LinkGraph, NoteId, ParentLookup, Settings};

/// Why an ancestry walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopReason {
    /// The walk arrived at the home note (or started there).
    ReachedHome,
    /// The last note has no usable parent or backlink.
    NoAncestor,
    /// The trail reached `max_depth` entries.
    DepthLimit,
    /// The next ancestor was already part of the walk.
    Cycle,
    /// The start note does not exist in the graph.
    StartNotFound,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            StopReason::ReachedHome => "reached home",
            StopReason::NoAncestor => "no further ancestor",
            StopReason::DepthLimit => "depth limit reached",
            StopReason::Cycle => "cycle detected",
            StopReason::StartNotFound => "note not found",
        };
        f.write_str(text)
    }
}

/// Result of resolving a note's ancestry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ancestry {
    /// Ancestor-most note first, ending with the start note when
    /// `include_self` is set.
    pub trail: Vec<NoteId>,
    /// Notes along the walk whose parent had to be picked among several backlinks.
    pub ambiguities: Vec<NoteId>,
    /// Why the walk ended.
    pub stop: StopReason,
}

impl Ancestry {
    fn not_found() -> Self {
        Self {
            trail: Vec::new(),
            ambiguities: Vec::new(),
            stop: StopReason::StartNotFound,
        }
    }

    /// Returns true if some step had to choose among several backlinks.
    pub fn is_ambiguous(&self) -> bool {
        !self.ambiguities.is_empty()
    }

    /// Returns true if the walk arrived at the home note.
    pub fn reached_home(&self) -> bool {
        self.stop == StopReason::ReachedHome
    }
}

/// How the next ancestor of a note was found.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// Declared parent that exists in the graph.
    Declared(NoteId),
    /// Only remaining backlink.
    Backlink(NoteId),
    /// Smallest of several backlinks.
    AmbiguousBacklink(NoteId),
    /// The note declares itself as its parent.
    SelfParent,
    /// No declared parent and no usable backlink.
    Orphan,
}

/// Resolves breadcrumb trails against a link graph and declared parents.
///
/// The resolver owns no state beyond shared references to its collaborators,
/// so one instance can serve any number of `resolve` calls.
pub struct AncestryResolver<'a, G: ?Sized, P: ?Sized> {
    graph: &'a G,
    parents: &'a P,
    settings: &'a Settings,
}

impl<'a, G, P> AncestryResolver<'a, G, P>
where
    G: LinkGraph + ?Sized,
    P: ParentLookup + ?Sized,
{
    pub fn new(graph: &'a G, parents: &'a P, settings: &'a Settings) -> Self {
        Self {
            graph,
            parents,
            settings,
        }
    }

    /// Walks from `start` towards the home note.
    ///
    /// The loop runs at most `max_depth` times and never revisits a note.
    pub fn resolve(&self, start: &NoteId) -> Ancestry {
        if !self.graph.exists(start) {
            debug!("ancestry: {} does not exist", start);
            return Ancestry::not_found();
        }

        let home = self.settings.home();
        let mut trail = VecDeque::new();
        let mut ambiguities = Vec::new();
        let mut visited = HashSet::from([start.clone()]);

        if self.settings.include_self() {
            trail.push_back(start.clone());
        }

        let mut current = start.clone();
        let stop = loop {
            if &current == home {
                break StopReason::ReachedHome;
            }
            if trail.len() >= self.settings.max_depth() {
                break StopReason::DepthLimit;
            }

            let parent = match self.next_ancestor(&current) {
                Step::Declared(parent) | Step::Backlink(parent) => parent,
                Step::AmbiguousBacklink(parent) => {
                    ambiguities.push(current.clone());
                    parent
                }
                Step::SelfParent | Step::Orphan => break StopReason::NoAncestor,
            };

            if !visited.insert(parent.clone()) {
                debug!("ancestry: {} leads back to {}", current, parent);
                break StopReason::Cycle;
            }

            debug!("ancestry: {} -> {}", current, parent);
            trail.push_front(parent.clone());
            current = parent;
        };

        Ancestry {
            trail: trail.into(),
            ambiguities,
            stop,
        }
    }

    fn next_ancestor(&self, current: &NoteId) -> Step {
        if let Some(declared) = self.parents.parent_of(current) {
            if &declared == current {
                debug!("ancestry: {} declares itself as parent", current);
                return Step::SelfParent;
            }
            if self.graph.exists(&declared) {
                return Step::Declared(declared);
            }
            debug!(
                "ancestry: declared parent {} of {} does not exist, using backlinks",
                declared, current
            );
        }

        let mut candidates: Vec<NoteId> = self
            .graph
            .backlinks_of(current)
            .into_iter()
            .filter(|c| c != current && self.graph.exists(c))
            .collect();
        candidates.sort();
        candidates.dedup();

        let ambiguous = candidates.len() > 1;
        match candidates.into_iter().next() {
            None => Step::Orphan,
            Some(first) if ambiguous => Step::AmbiguousBacklink(first),
            Some(first) => Step::Backlink(first),
        }
    }
}

/// Resolves the breadcrumb trail of `start`.
///
/// Shorthand for `AncestryResolver::new(graph, parents, settings).resolve(start)`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use crumbs::domain::{resolve, LinkGraph, NoParents, NoteId, Settings, StopReason};
///
/// struct Chain(BTreeMap<NoteId, Vec<NoteId>>);
///
/// impl LinkGraph for Chain {
///     fn backlinks_of(&self, id: &NoteId) -> Vec<NoteId> {
///         self.0.get(id).cloned().unwrap_or_default()
///     }
///     fn exists(&self, id: &NoteId) -> bool {
///         self.0.contains_key(id)
///     }
/// }
///
/// let id = |s: &str| -> NoteId { s.parse().unwrap() };
/// let graph = Chain(BTreeMap::from([
///     (id("Home.md"), vec![]),
///     (id("Topic.md"), vec![id("Home.md")]),
///     (id("Leaf.md"), vec![id("Topic.md")]),
/// ]));
///
/// let ancestry = resolve(&id("Leaf.md"), &graph, &NoParents, &Settings::default());
/// assert_eq!(ancestry.trail, vec![id("Home.md"), id("Topic.md")]);
/// assert_eq!(ancestry.stop, StopReason::ReachedHome);
/// ```
pub fn resolve<G, P>(start: &NoteId, graph: &G, parents: &P, settings: &Settings) -> Ancestry
where
    G: LinkGraph + ?Sized,
    P: ParentLookup + ?Sized,
{
    AncestryResolver::new(graph, parents, settings).resolve(start)
}
