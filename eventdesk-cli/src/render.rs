//! Plain-text rendering for terminal output.

use chrono::Local;
use eventdesk_lib::model::Attendee;
use eventdesk_lib::model::Event;
use eventdesk_lib::validation::Violations;

pub fn events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events yet.".to_string();
    }

    let rows: Vec<[String; 6]> = events
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                e.name.clone(),
                when(e),
                e.location.clone(),
                format!("{}/{}", e.attendees.len(), e.max_capacity),
                e.remaining_capacity().to_string(),
            ]
        })
        .collect();

    table(&["ID", "NAME", "WHEN", "LOCATION", "BOOKED", "LEFT"], &rows)
}

pub fn attendees(attendees: &[Attendee]) -> String {
    if attendees.is_empty() {
        return "No attendees registered.".to_string();
    }

    let rows: Vec<[String; 3]> = attendees
        .iter()
        .map(|a| [a.id.to_string(), a.name.clone(), a.email.clone()])
        .collect();

    table(&["ID", "NAME", "EMAIL"], &rows)
}

pub fn violations(violations: &Violations) -> String {
    violations
        .iter()
        .map(|v| format!("  {:<14}{}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Start and end in the user's local time.
fn when(event: &Event) -> String {
    match (event.starts_at(), event.ends_at()) {
        (Some(start), Some(end)) => format!(
            "{} to {}",
            start.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            end.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ),
        _ => format!("{} to {}", event.start_time, event.end_time),
    }
}

fn table<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.to_vec())];
    out.extend(rows.iter().map(|row| line(row.iter().map(String::as_str).collect())));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use eventdesk_lib::model::AttendeeSummary;

    use super::*;

    fn event() -> Event {
        Event {
            id: 3,
            name: "Meetup".to_string(),
            start_time: "2030-02-01T18:00:00Z".to_string(),
            end_time: "2030-02-01T21:00:00Z".to_string(),
            location: "Library".to_string(),
            max_capacity: 2,
            attendees: vec![AttendeeSummary {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.org".to_string(),
            }],
        }
    }

    fn local(rfc3339: &str) -> String {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }

    #[test]
    fn test_events_table() {
        let out = events(&[event()]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID  NAME"));
        assert!(lines[1].contains("Meetup"));
        let when = format!(
            "{} to {}",
            local("2030-02-01T18:00:00Z"),
            local("2030-02-01T21:00:00Z")
        );
        assert!(lines[1].contains(&when));
        assert!(lines[1].contains("1/2"));
    }

    #[test]
    fn test_local_input_round_trips_to_same_clock_time() {
        let out = events(&[Event {
            start_time: "2030-05-01T18:00".to_string(),
            end_time: "2030-05-01T20:30".to_string(),
            ..event()
        }]);
        assert!(out.contains("2030-05-01 18:00 to 2030-05-01 20:30"));
    }

    #[test]
    fn test_unparsed_times_are_shown_raw() {
        let out = events(&[Event {
            start_time: "soon".to_string(),
            ..event()
        }]);
        assert!(out.contains("soon to 2030-02-01T21:00:00Z"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(events(&[]), "No events yet.");
        assert_eq!(attendees(&[]), "No attendees registered.");
    }
}
