use super::*;

fn urls(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("https://a.test/{i}")).collect()
}

fn statuses(tracker: &ProgressTracker) -> Vec<ProgressStatus> {
    tracker.rows().iter().map(|r| r.status).collect()
}

// =============================================================
// start / tick
// =============================================================

#[test]
fn start_marks_every_row_waiting() {
    let tracker = ProgressTracker::start(&urls(3));
    assert_eq!(statuses(&tracker), vec![ProgressStatus::Waiting; 3]);
    assert_eq!(tracker.rows()[2].url, "https://a.test/2");
}

#[test]
fn tick_promotes_one_row_at_a_time_in_order() {
    use ProgressStatus::{Loading, Waiting};

    let mut tracker = ProgressTracker::start(&urls(3));
    assert!(tracker.tick());
    assert_eq!(statuses(&tracker), vec![Loading, Waiting, Waiting]);
    assert!(tracker.tick());
    assert_eq!(statuses(&tracker), vec![Loading, Loading, Waiting]);
    assert!(tracker.tick());
    assert_eq!(statuses(&tracker), vec![Loading, Loading, Loading]);
    assert!(!tracker.tick());
}

#[test]
fn tick_never_moves_more_than_one_row() {
    let mut tracker = ProgressTracker::start(&urls(10));
    for step in 1..=10 {
        tracker.tick();
        let loading = tracker
            .rows()
            .iter()
            .filter(|r| r.status == ProgressStatus::Loading)
            .count();
        assert_eq!(loading, step);
    }
}

#[test]
fn tick_on_empty_tracker_is_noop() {
    let mut tracker = ProgressTracker::default();
    assert!(tracker.is_empty());
    assert!(!tracker.tick());
}

// =============================================================
// finish
// =============================================================

#[test]
fn finish_ok_flips_every_row_to_done() {
    let mut tracker = ProgressTracker::start(&urls(4));
    tracker.tick();
    tracker.finish_ok();
    assert_eq!(statuses(&tracker), vec![ProgressStatus::Done; 4]);
    assert!(!tracker.tick());
}

#[test]
fn finish_err_flips_every_row_to_error() {
    let mut tracker = ProgressTracker::start(&urls(2));
    tracker.tick();
    tracker.finish_err();
    assert_eq!(statuses(&tracker), vec![ProgressStatus::Error; 2]);
}

#[test]
fn labels_match_status() {
    assert_eq!(ProgressStatus::Waiting.label(), "Waiting");
    assert_eq!(ProgressStatus::Loading.label(), "Fetching & cleaning");
    assert_eq!(ProgressStatus::Done.label(), "Done");
    assert_eq!(ProgressStatus::Error.label(), "Failed");
    assert_eq!(ProgressStatus::Error.css_class(), "progress-item error");
}
