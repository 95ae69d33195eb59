use proptest::prelude::*;

use society_types::MatchScope;
use society_verification::{AccessVerifier, GateError, VisitorDirectory, VisitorRecord};

fn code() -> impl Strategy<Value = String> {
    "[A-Za-z0-9-]{1,10}"
}

fn directory_from(entries: &[(Option<String>, Option<String>)]) -> VisitorDirectory {
    // Exited records are exempt from the access-code uniqueness check, so any
    // generated combination loads.
    VisitorDirectory::load(entries.iter().enumerate().map(|(i, (access, vehicle))| {
        let mut r = VisitorRecord::new(format!("v{i}"), format!("Visitor {i}"), "A-1")
            .with_status(society_types::VisitorStatus::Exited);
        r.access_code = access.clone();
        r.vehicle_number = vehicle.clone();
        r
    }))
    .unwrap()
}

proptest! {
    /// verify(c) matches iff some record carries c (ignoring case) as access code or vehicle.
    #[test]
    fn match_iff_case_insensitive_equality(
        entries in prop::collection::vec((prop::option::of(code()), prop::option::of(code())), 0..8),
        candidate in code(),
    ) {
        let dir = directory_from(&entries);
        let expected = entries.iter().position(|(a, v)| {
            [a, v].into_iter().flatten().any(|c| c.to_lowercase() == candidate.to_lowercase())
        });
        match AccessVerifier::new(MatchScope::AllRecords).verify(&dir, &candidate) {
            Ok(record) => prop_assert_eq!(Some(record.id.to_string()), expected.map(|i| format!("v{i}"))),
            Err(GateError::NotFound(_)) => prop_assert!(expected.is_none()),
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    /// Changing the case of a stored code never changes the match.
    #[test]
    fn case_of_entered_code_is_irrelevant(stored in code()) {
        let dir = directory_from(&[(Some(stored.clone()), None)]);
        let verifier = AccessVerifier::new(MatchScope::AllRecords);
        prop_assert!(verifier.verify(&dir, &stored.to_uppercase()).is_ok());
        prop_assert!(verifier.verify(&dir, &stored.to_lowercase()).is_ok());
    }

    /// Under the default scope a record that is no longer Upcoming never matches.
    #[test]
    fn default_scope_never_matches_past_visitors(
        entries in prop::collection::vec((prop::option::of(code()), prop::option::of(code())), 0..8),
        candidate in code(),
    ) {
        let dir = directory_from(&entries);
        prop_assert!(matches!(
            AccessVerifier::default().verify(&dir, &candidate),
            Err(GateError::NotFound(_))
        ));
    }

    /// Whitespace-only input is always EmptyInput, whatever the directory holds.
    #[test]
    fn blank_input_is_always_empty(
        blank in "[ \\t\\n]{0,6}",
        entries in prop::collection::vec((prop::option::of(code()), prop::option::of(code())), 0..4),
    ) {
        let dir = directory_from(&entries);
        prop_assert!(matches!(
            AccessVerifier::default().verify(&dir, &blank),
            Err(GateError::EmptyInput)
        ));
    }
}
