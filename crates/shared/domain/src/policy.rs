//! What happens to dependent rows when a parent row is deleted.

use serde::{Deserialize, Serialize};

/// Delete policy for parent rows.
///
/// Foreign keys are declared `ON DELETE RESTRICT`, so `Restrict` leaves the
/// decision to the store: a parent with dependants is rejected with a
/// foreign key violation. `Cascade` removes the dependants first, inside the
/// same transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    #[default]
    Restrict,
    Cascade,
}

impl DeletePolicy {
    pub fn cascades(&self) -> bool {
        matches!(self, DeletePolicy::Cascade)
    }
}
