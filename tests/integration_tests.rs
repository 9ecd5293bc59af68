//! End-to-end tests for the schedcal binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Binary pinned to November 14, 2025 and the en_US locale.
fn schedcal() -> Command {
    let mut cmd = Command::cargo_bin("schedcal").unwrap();
    cmd.env("SCHEDCAL_TEST_TIME", "2025-11-14 00:00");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("LC_ALL");
    cmd.env_remove("LC_TIME");
    cmd.env_remove("LANG");
    cmd
}

/// Event fixture around the pinned date: three interviews on November 15
/// (one cancelled), one on November 16, and one already in the past.
fn events_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
  {{
    "id": "ev-1",
    "title": "Phone screen",
    "candidate": "Jane Smith",
    "interviewers": ["Priya"],
    "date": "2025-11-15T10:00:00",
    "status": "scheduled"
  }},
  {{
    "id": "ev-2",
    "title": "Onsite loop",
    "candidate": "Ravi Patel",
    "location": "HQ room 4",
    "date": "2025-11-15T14:00:00",
    "status": "scheduled"
  }},
  {{
    "id": "ev-3",
    "title": "Debrief",
    "candidate": "Mia Wong",
    "date": "2025-11-15T16:30:00",
    "status": "cancelled"
  }},
  {{
    "id": "ev-4",
    "title": "Technical interview",
    "candidate": "Sam Lee",
    "date": "2025-11-16T11:00:00",
    "status": "scheduled"
  }},
  {{
    "id": "ev-5",
    "title": "Recruiter chat",
    "candidate": "Ana Silva",
    "date": "2025-11-10T09:00:00",
    "status": "scheduled"
  }}
]"#
    )
    .unwrap();
    file
}

#[test]
fn current_month_without_events() {
    schedcal()
        .assert()
        .success()
        .stdout(predicate::str::contains("November 2025"))
        .stdout(predicate::str::contains("30"));
}

#[test]
fn explicit_month_handles_leap_february() {
    schedcal()
        .args(["2", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024"))
        .stdout(predicate::str::contains("29"));
}

#[test]
fn three_months_spans_neighbors() {
    schedcal()
        .arg("-3")
        .assert()
        .success()
        .stdout(predicate::str::contains("October"))
        .stdout(predicate::str::contains("November"))
        .stdout(predicate::str::contains("December"));
}

#[test]
fn year_mode_prints_all_months() {
    schedcal()
        .arg("-y")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025"))
        .stdout(predicate::str::contains("January"))
        .stdout(predicate::str::contains("December"));
}

#[test]
fn agenda_lists_days_with_interviews() {
    let file = events_file();
    schedcal()
        .args(["-a", "-e"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("November 15  (3 interviews)"))
        .stdout(predicate::str::contains("Phone screen (Jane Smith)  [scheduled]"))
        .stdout(predicate::str::contains("November 16  (1 interview)"))
        .stdout(predicate::str::contains("November 10  (1 interview)"));
}

#[test]
fn agenda_caps_to_max_per_day() {
    let file = events_file();
    schedcal()
        .args(["-a", "--max-per-day", "1", "-e"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("10:00"))
        .stdout(predicate::str::contains("+2 more"))
        .stdout(predicate::str::contains("Onsite loop").not());
}

#[test]
fn day_positional_scopes_agenda() {
    let file = events_file();
    schedcal()
        .args(["15", "11", "2025", "-e"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("November 15  (3 interviews)"))
        .stdout(predicate::str::contains("Technical interview").not());
}

#[test]
fn day_without_interviews_says_so() {
    let file = events_file();
    schedcal()
        .args(["20", "11", "2025", "-e"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No interviews on 2025-11-20"));
}

#[test]
fn upcoming_panel_filters_and_orders() {
    let file = events_file();
    schedcal()
        .args(["-u", "5", "-e"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Upcoming interviews"))
        // past and cancelled events are excluded
        .stdout(predicate::str::contains("Recruiter chat").not())
        .stdout(predicate::str::contains("Debrief").not())
        // soonest first
        .stdout(predicate::function(|out: &str| {
            match (out.find("Phone screen"), out.find("Technical interview")) {
                (Some(a), Some(b)) => a < b,
                _ => false,
            }
        }));
}

#[test]
fn upcoming_respects_limit() {
    let file = events_file();
    schedcal()
        .args(["-u", "1", "-e"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone screen"))
        .stdout(predicate::str::contains("Technical interview").not());
}

#[test]
fn status_filter_narrows_agenda() {
    let file = events_file();
    schedcal()
        .args(["-a", "--status", "cancelled", "-e"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Debrief"))
        .stdout(predicate::str::contains("Phone screen").not());
}

#[test]
fn invalid_month_is_rejected() {
    schedcal()
        .args(["13", "2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn conflicting_display_modes_are_rejected() {
    schedcal()
        .args(["-y", "-n", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn invalid_week_start_is_rejected() {
    schedcal()
        .args(["--week-start", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid week start"));
}

#[test]
fn missing_events_file_is_reported() {
    schedcal()
        .args(["-e", "/nonexistent/events.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read events file"));
}

#[test]
fn malformed_events_file_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    schedcal()
        .arg("-e")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse events file"));
}
