use brawl::EventLog;

/// Asserts that all events in the log match the given canonical lines.
#[track_caller]
pub fn assert_events_eq(log: &EventLog, want: &[&str]) {
    let got = log
        .events()
        .map(|event| event.to_string())
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}

/// Asserts that events added since the last read out match the given canonical lines.
#[track_caller]
pub fn assert_new_events_eq(log: &mut EventLog, want: &[&str]) {
    let got = log
        .read_out()
        .map(|event| event.to_string())
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}
