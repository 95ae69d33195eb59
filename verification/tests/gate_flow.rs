//! End-to-end gate flows driven by a nullable clock and camera.

use society_nullables::{NullCamera, NullClock};
use society_types::{DecisionPolicy, GateParams, VisitorId, VisitorStatus};
use society_verification::{
    CodeSource, DecisionOutcome, GateCounter, GateError, GateEvent, GatePhase, GateSession, VisitorDirectory,
    VisitorRecord,
};

fn gate() -> GateSession {
    gate_with(GateParams::default())
}

fn gate_with(params: GateParams) -> GateSession {
    let directory = VisitorDirectory::load([
        VisitorRecord::new("v1", "Amit Patel", "A-210")
            .with_purpose("Family Guest")
            .with_access_code("VP-2024-001"),
        VisitorRecord::new("v2", "Urban Company", "C-502")
            .with_purpose("Service")
            .with_access_code("VP-2024-002")
            .with_vehicle("MH-02-BZ-9999"),
        VisitorRecord::new("v3", "Ravi Sharma", "A-101")
            .with_vehicle("MH-02-AB-1234")
            .with_status(VisitorStatus::Exited),
    ])
    .unwrap();
    GateSession::new(directory, params)
}

#[test]
fn deny_scenario() {
    let clock = NullClock::at(1_000);
    let mut gate = gate();

    let matched = gate
        .submit_code("vp-2024-001", CodeSource::Manual, clock.now())
        .unwrap();
    assert_eq!(matched.id, VisitorId::new("v1"));
    assert_eq!(matched.flat_no, "A-210");

    assert!(matches!(
        gate.submit_code("VP-9999", CodeSource::Manual, clock.now()),
        Err(GateError::NotFound(_))
    ));

    let notification = gate.decide(DecisionOutcome::Denied, clock.now()).unwrap();
    assert_eq!(notification.outcome, DecisionOutcome::Denied);
    assert!(notification.message.contains("Amit Patel"));
    assert_eq!(gate.phase(), GatePhase::Idle);

    assert!(matches!(
        gate.decide(DecisionOutcome::Denied, clock.now()),
        Err(GateError::InvalidState(_))
    ));
}

#[test]
fn approve_yields_exactly_one_notification() {
    let clock = NullClock::at(0);
    let mut gate = gate();
    gate.submit_code("VP-2024-002", CodeSource::Manual, clock.now())
        .unwrap();
    gate.drain_events();

    let n = gate.decide(DecisionOutcome::Approved, clock.now()).unwrap();
    assert_eq!(n.message, "Entry Approved for Urban Company");
    assert!(gate.active_visitor().is_none());

    let decisions: Vec<_> = gate
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GateEvent::DecisionRecorded(_)))
        .collect();
    assert_eq!(decisions.len(), 1);
}

#[test]
fn decide_without_presentation_yields_no_notification() {
    let clock = NullClock::at(0);
    let mut gate = gate();
    assert!(matches!(
        gate.decide(DecisionOutcome::Approved, clock.now()),
        Err(GateError::InvalidState(_))
    ));
    assert!(gate.notification(clock.now()).is_none());
    assert_eq!(gate.stats().get(GateCounter::InvalidState), 1);
}

#[test]
fn notification_disappears_after_interval_and_stays_gone() {
    let clock = NullClock::at(50);
    let mut gate = gate();
    gate.submit_code("VP-2024-001", CodeSource::Manual, clock.now())
        .unwrap();
    gate.decide(DecisionOutcome::Approved, clock.now()).unwrap();

    clock.advance(2);
    gate.tick(clock.now());
    assert!(gate.notification(clock.now()).is_some());

    clock.rewind_to(50);
    clock.outlast_notification(gate.params());
    gate.tick(clock.now());
    assert!(gate.notification(clock.now()).is_none());

    // Even a clock that moves backwards does not bring it back.
    clock.rewind_to(50);
    assert!(gate.notification(clock.now()).is_none());
}

#[test]
fn approval_does_not_change_visitor_status() {
    // Decisions only notify by default; the visitor stays Upcoming.
    let clock = NullClock::at(0);
    let mut gate = gate();
    gate.submit_code("VP-2024-001", CodeSource::Manual, clock.now())
        .unwrap();
    gate.decide(DecisionOutcome::Approved, clock.now()).unwrap();

    let record = gate.directory().get(&VisitorId::new("v1")).unwrap();
    assert_eq!(record.status, VisitorStatus::Upcoming);

    // The same pass verifies again.
    assert!(gate
        .submit_code("VP-2024-001", CodeSource::Manual, clock.now())
        .is_ok());
}

#[test]
fn camera_scan_releases_device_on_every_path() {
    let clock = NullClock::at(0);
    let mut gate = gate();
    let mut camera = NullCamera::new();

    // Nothing decoded.
    assert!(gate.scan(&mut camera, clock.now()).unwrap().is_none());

    // Decoded but unknown.
    camera.enqueue("garbage");
    assert!(gate.scan(&mut camera, clock.now()).is_err());

    // Decoded and matched.
    camera.enqueue("MH-02-BZ-9999");
    let name = gate
        .scan(&mut camera, clock.now())
        .unwrap()
        .map(|r| r.name.clone());
    assert_eq!(name.as_deref(), Some("Urban Company"));

    assert_eq!(camera.acquired(), 3);
    assert_eq!(camera.released(), 3);
    assert!(!camera.is_live());
}

#[test]
fn unavailable_camera_falls_back_to_manual_entry() {
    let clock = NullClock::at(0);
    let mut gate = gate();
    let mut camera = NullCamera::unavailable();

    assert!(matches!(
        gate.scan(&mut camera, clock.now()),
        Err(GateError::DeviceUnavailable(_))
    ));
    clock.advance(600);
    gate.tick(clock.now());
    assert!(gate.alert(clock.now()).is_some_and(|a| a.is_persistent()));

    gate.submit_code("VP-2024-001", CodeSource::Manual, clock.now())
        .unwrap();
    assert!(gate.alert(clock.now()).is_none());
    assert_eq!(gate.phase(), GatePhase::Verified);
    assert_eq!(camera.released(), 0);
}

#[test]
fn lookup_error_alert_is_transient() {
    let clock = NullClock::at(0);
    let mut gate = gate();
    let _ = gate.submit_code("VP-0000", CodeSource::Manual, clock.now());
    assert!(gate.alert(clock.now()).is_some());
    clock.outlast_alert(gate.params());
    gate.tick(clock.now());
    assert!(gate.alert(clock.now()).is_none());
    assert!(gate.drain_events().contains(&GateEvent::AlertExpired));
}

#[test]
fn exited_visitor_is_not_found_by_default() {
    let clock = NullClock::at(0);
    let mut gate = gate_with(GateParams {
        decision_policy: DecisionPolicy::RecordEntry,
        ..GateParams::default()
    });

    assert!(matches!(
        gate.submit_code("mh-02-ab-1234", CodeSource::Manual, clock.now()),
        Err(GateError::NotFound(_))
    ));
    assert_eq!(gate.phase(), GatePhase::Idle);
    assert!(matches!(
        gate.decide(DecisionOutcome::Approved, clock.now()),
        Err(GateError::InvalidState(_))
    ));
    let ravi = gate.directory().get(&VisitorId::new("v3")).unwrap();
    assert_eq!(ravi.status, VisitorStatus::Exited);
}
