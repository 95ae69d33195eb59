//! Access verifier: resolves an operator-supplied code to a visitor record.

use crate::directory::{VisitorDirectory, VisitorRecord};
use crate::error::GateError;
use society_types::MatchScope;
use tracing::debug;

/// Matches codes against a [`VisitorDirectory`].
///
/// A code matches a record when it equals the record's access code or vehicle
/// number, ignoring case and surrounding whitespace. When several records
/// match, the first in directory order wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccessVerifier {
    scope: MatchScope,
}

impl AccessVerifier {
    pub fn new(scope: MatchScope) -> Self {
        Self { scope }
    }

    /// Look up the visitor for `code`.
    ///
    /// The returned reference points into `directory`; nothing is copied.
    /// Blank input is rejected before any lookup.
    pub fn verify<'d>(
        &self,
        directory: &'d VisitorDirectory,
        code: &str,
    ) -> Result<&'d VisitorRecord, GateError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(GateError::EmptyInput);
        }

        let found = directory
            .iter()
            .filter(|r| match self.scope {
                MatchScope::AllRecords => true,
                MatchScope::UpcomingOnly => r.status.is_pre_authorized(),
            })
            .find(|r| r.matches_code(code));

        match found {
            Some(record) => {
                debug!(visitor = %record.id, "code matched");
                Ok(record)
            }
            None => {
                debug!(code, "code matched no visitor");
                Err(GateError::NotFound(code.to_string()))
            }
        }
    }
}
