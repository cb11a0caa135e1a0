//! Board document model.
//!
//! A [`Board`] is the in-memory design document: an aggregate of
//! [`Footprint`] entities, each identified by a reference designator (e.g.
//! `SW42`) and carrying a selection flag used by the host's visual editor.
//!
//! The model deliberately mirrors what a board-editor scripting layer exposes:
//! footprints are enumerated in stored order, their references are read-only,
//! and selection is a flag that is set rather than toggled. The crate never
//! creates or destroys footprints on behalf of a host; it only reads
//! references and marks selection on footprints that already exist.

pub mod error;
pub mod snapshot;

use serde::{Deserialize, Serialize};

pub use error::{BoardError, BoardResult};

/// A placed component on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footprint {
    /// Reference designator (e.g. "SW42", "R1").
    reference: String,

    /// Whether the footprint is selected in the host editor.
    #[serde(default)]
    selected: bool,
}

impl Footprint {
    /// Creates an unselected footprint with the given reference designator.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            selected: false,
        }
    }

    /// Returns the reference designator.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns whether the footprint is currently selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Marks the footprint as selected.
    ///
    /// Selection is a flag set, not a toggle: calling this on an already
    /// selected footprint leaves it selected.
    pub fn set_selected(&mut self) {
        self.selected = true;
    }
}

/// The board document: an ordered collection of footprints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Board {
    /// Footprints in host enumeration order.
    #[serde(default)]
    footprints: Vec<Footprint>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            footprints: Vec::new(),
        }
    }

    /// Adds a footprint at the end of the enumeration order.
    pub fn add_footprint(&mut self, footprint: Footprint) {
        self.footprints.push(footprint);
    }

    /// Returns the footprints in enumeration order.
    #[must_use]
    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    /// Returns a mutable iterator over the footprints in enumeration order.
    pub fn footprints_mut(&mut self) -> impl Iterator<Item = &mut Footprint> {
        self.footprints.iter_mut()
    }

    /// Returns the number of footprints on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    /// Returns `true` if the board has no footprints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }

    /// Returns the references of all currently selected footprints, in
    /// enumeration order.
    #[must_use]
    pub fn selected_references(&self) -> Vec<&str> {
        self.footprints
            .iter()
            .filter(|f| f.is_selected())
            .map(Footprint::reference)
            .collect()
    }
}

impl FromIterator<Footprint> for Board {
    fn from_iter<I: IntoIterator<Item = Footprint>>(iter: I) -> Self {
        Self {
            footprints: iter.into_iter().collect(),
        }
    }
}
