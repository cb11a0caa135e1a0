//! The selection pass.
//!
//! A single synchronous walk over a board's footprints: matching footprints
//! are marked selected in place, and a completed walk ends with exactly one
//! view-refresh request. There is no retry and no intermediate state; an
//! aborted walk leaves every footprint after the aborting one untouched and
//! never refreshes.

use clap::ValueEnum;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::host::{HostError, ViewRefresher};
use crate::select::criteria::{Criteria, ReferenceMatch};

/// What to do with a reference whose prefix matches but whose suffix is not
/// a decimal number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Stop the pass at the malformed footprint. Footprints after it are
    /// left unprocessed and no refresh is requested.
    #[default]
    Abort,

    /// Record the malformed reference, log a warning, and continue.
    Skip,
}

/// A footprint selected by the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFootprint {
    /// Full reference designator (e.g. "SW42").
    pub reference: String,

    /// The numeric suffix that fell within the range.
    pub number: u32,
}

/// How the pass ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// Every footprint was examined.
    Completed,

    /// The pass stopped at a malformed reference under
    /// [`MalformedPolicy::Abort`].
    Aborted {
        /// The malformed reference designator.
        reference: String,
        /// Zero-based position of the footprint in enumeration order.
        position: usize,
    },
}

/// Result of a selection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionReport {
    /// Footprints marked selected, in enumeration order.
    pub matched: Vec<MatchedFootprint>,

    /// Number of footprints examined (fewer than the board size if the pass
    /// aborted).
    pub examined: usize,

    /// Malformed references that were skipped (only under
    /// [`MalformedPolicy::Skip`]).
    pub skipped_malformed: Vec<String>,

    /// How the pass ended.
    pub outcome: PassOutcome,

    /// Whether a view refresh was requested.
    pub refreshed: bool,
}

impl SelectionReport {
    /// Returns `true` if the pass stopped at a malformed reference.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self.outcome, PassOutcome::Aborted { .. })
    }
}

/// Runs one selection pass over the board.
///
/// Footprints are visited in the board's enumeration order. Each reference
/// is classified against `criteria`; in-range footprints are marked selected.
/// After a completed enumeration the host view is asked to refresh exactly
/// once. Selection only ever sets the flag, so running the pass twice yields
/// the same selected set as running it once.
///
/// # Errors
///
/// Returns an error if the host view fails the refresh request. Malformed
/// references are not an `Err`: under [`MalformedPolicy::Abort`] they end the
/// pass with [`PassOutcome::Aborted`] in the report, with every footprint
/// already processed left as-is.
pub fn run_selection(
    board: &mut Board,
    criteria: &Criteria,
    policy: MalformedPolicy,
    refresher: &mut dyn ViewRefresher,
) -> Result<SelectionReport, HostError> {
    debug!(
        prefix = criteria.prefix(),
        lower = criteria.lower(),
        upper = criteria.upper(),
        ?policy,
        "starting selection pass"
    );

    let mut matched = Vec::new();
    let mut skipped_malformed = Vec::new();
    let mut examined = 0;
    let mut outcome = PassOutcome::Completed;

    for (position, footprint) in board.footprints_mut().enumerate() {
        examined += 1;
        match criteria.classify(footprint.reference()) {
            ReferenceMatch::PrefixMismatch | ReferenceMatch::OutOfRange => {}
            ReferenceMatch::InRange(number) => {
                footprint.set_selected();
                info!(reference = footprint.reference(), number, "selected");
                matched.push(MatchedFootprint {
                    reference: footprint.reference().to_string(),
                    number,
                });
            }
            ReferenceMatch::Malformed => match policy {
                MalformedPolicy::Abort => {
                    warn!(
                        reference = footprint.reference(),
                        position, "malformed reference, aborting pass"
                    );
                    outcome = PassOutcome::Aborted {
                        reference: footprint.reference().to_string(),
                        position,
                    };
                    break;
                }
                MalformedPolicy::Skip => {
                    warn!(
                        reference = footprint.reference(),
                        position, "malformed reference, skipping"
                    );
                    skipped_malformed.push(footprint.reference().to_string());
                }
            },
        }
    }

    let refreshed = outcome == PassOutcome::Completed;
    if refreshed {
        refresher.refresh()?;
    }

    debug!(
        examined,
        matched = matched.len(),
        refreshed,
        aborted = outcome != PassOutcome::Completed,
        "selection pass finished"
    );

    Ok(SelectionReport {
        matched,
        examined,
        skipped_malformed,
        outcome,
        refreshed,
    })
}
