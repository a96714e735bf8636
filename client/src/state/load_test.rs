use super::*;

#[test]
fn load_state_defaults_to_loading() {
    let state = LoadState::<u32>::default();
    assert!(state.is_loading());
    assert_eq!(state.loaded(), None);
    assert_eq!(state.error(), None);
}

#[test]
fn from_result_ok_is_loaded() {
    let state = LoadState::from_result(Ok::<_, String>(5_u32), String::clone);
    assert_eq!(state, LoadState::Loaded(5));
    assert_eq!(state.loaded(), Some(&5));
    assert!(!state.is_loading());
}

#[test]
fn from_result_err_uses_describe() {
    let state = LoadState::<u32>::from_result(Err(404_u16), |status| format!("status {status}"));
    assert_eq!(state.error(), Some("status 404"));
    assert_eq!(state.loaded(), None);
}
