//! Selection criteria and the selection pass.
//!
//! The selector walks a board's footprints once, in enumeration order, and
//! marks as selected every footprint whose reference designator matches the
//! [`Criteria`]: an exact prefix followed by a decimal number within an
//! inclusive range. After a completed pass it asks the host view to refresh.
//!
//! Each reference gets an explicit per-item classification (see
//! [`ReferenceMatch`]) rather than relying on a parse failure to surface
//! malformed suffixes; what happens to a malformed reference is governed by
//! [`MalformedPolicy`].

mod criteria;
mod pass;

pub use criteria::{Criteria, CriteriaError, ReferenceMatch};
pub use pass::{
    run_selection, MalformedPolicy, MatchedFootprint, PassOutcome, SelectionReport,
};
