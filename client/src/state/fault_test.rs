use super::*;

#[test]
fn fault_state_defaults_untripped() {
    let state = FaultState::default();
    assert!(!state.is_tripped());
    assert!(state.fault().is_none());
}

#[test]
fn first_fault_wins() {
    let mut state = FaultState::default();
    assert!(state.trip(AppFault::new("first")));
    assert!(!state.trip(AppFault::new("second")));
    assert!(state.is_tripped());
    assert_eq!(state.fault().map(|f| f.message.as_str()), Some("first"));
}

#[test]
fn report_appends_stack_when_present() {
    let fault = AppFault::new("boom").with_stack("at render (app.js:1)");
    assert_eq!(fault.report(), "boom\n\nat render (app.js:1)");
    assert_eq!(AppFault::new("boom").report(), "boom");
}

#[test]
fn blank_stack_is_dropped() {
    assert_eq!(AppFault::new("boom").with_stack("  ").stack, None);
}
