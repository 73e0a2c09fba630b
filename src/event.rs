use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;
use crate::airport::Airport;
use crate::flight::FlightTimeSpan;
use crate::time::{ResolvedTime, SHORT_FORMAT};

#[derive(Clone, Copy, Debug, Default)]
pub struct ComposeOptions {
    pub show_flags: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct FlightEvent {
    pub uid: Uuid,
    pub created: DateTime<Utc>,
    pub start: ResolvedTime,
    pub end: ResolvedTime,
    pub summary: String,
    pub location: String,
    pub description: String,
}

pub struct FlightDetails<'a> {
    pub carrier_prefix: &'a str,
    pub flight_number: &'a str,
    pub record: &'a str,
}

pub fn compose(
    flight: &FlightDetails<'_>,
    origin: &Airport,
    destination: &Airport,
    span: &FlightTimeSpan,
    options: ComposeOptions,
) -> FlightEvent {
    let description = describe(flight.record, origin, destination, span, options);
    let summary = format!(
        "{} {} {} → {}",
        flight.carrier_prefix, flight.flight_number, origin.iata, destination.iata
    );
    info!(%summary, "{}", description);

    FlightEvent {
        uid: Uuid::new_v4(),
        created: Utc::now(),
        start: span.departure,
        end: span.arrival,
        summary,
        location: origin.name.to_string(),
        description,
    }
}

fn describe(
    record: &str,
    origin: &Airport,
    destination: &Airport,
    span: &FlightTimeSpan,
    options: ComposeOptions,
) -> String {
    let mut lines = vec![
        leg_line("🛫", origin, &span.departure, options),
        leg_line("🛬", destination, &span.arrival, options),
        format!("⏱️ {}", span.duration),
    ];
    if !record.is_empty() {
        lines.push(format!("🎫 {}", record));
    }
    lines.join("\n")
}

fn leg_line(marker: &str, airport: &Airport, at: &ResolvedTime, options: ComposeOptions) -> String {
    let flag = airport.flag().filter(|_| options.show_flags);
    format!(
        "{} {}{} {} {} (local time)",
        marker,
        flag.map(|f| f + " ").unwrap_or_default(),
        airport.city,
        airport.iata,
        at.format(SHORT_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::resolve_times;
    use crate::flight::tests::utils::{airport, auckland, haneda, heathrow, honolulu, init_tracing};
    use crate::time::parse_time_on;
    use chrono::Timelike;
    use chrono_tz::Tz;

    fn details<'a>(record: &'a str) -> FlightDetails<'a> {
        FlightDetails {
            carrier_prefix: "NH",
            flight_number: "211",
            record,
        }
    }

    fn haneda_heathrow() -> FlightTimeSpan {
        resolve_times(&Tz::Asia__Tokyo, "2024-06-01T22:00", &Tz::Europe__London, "05:00").unwrap()
    }

    #[test]
    fn test_description_lines() {
        init_tracing();
        let event = compose(&details("ABC123"), &haneda(), &heathrow(), &haneda_heathrow(), ComposeOptions::default());

        assert_eq!(
            event.description,
            "🛫 Tokyo HND Sat 22:00 (local time)\n\
             🛬 London LHR Sun 05:00 (local time)\n\
             ⏱️ 15h00m\n\
             🎫 ABC123"
        );
    }

    #[test]
    fn test_record_line_omitted_when_empty() {
        let event = compose(&details(""), &haneda(), &heathrow(), &haneda_heathrow(), ComposeOptions::default());

        assert_eq!(event.description.lines().count(), 3);
        assert!(event.description.ends_with("⏱️ 15h00m"));
        assert!(!event.description.contains("🎫"));
    }

    #[test]
    fn test_calendar_fields() {
        let span = haneda_heathrow();
        let event = compose(&details(""), &haneda(), &heathrow(), &span, ComposeOptions::default());

        assert_eq!(event.summary, "NH 211 HND → LHR");
        assert_eq!(event.location, "Tokyo International Airport");
        assert_eq!(event.start, span.departure);
        assert_eq!(event.end, span.arrival);
        assert_eq!(event.uid.get_version_num(), 4);
        assert!(event.created <= Utc::now());

        let other = compose(&details(""), &haneda(), &heathrow(), &span, ComposeOptions::default());
        assert_ne!(event.uid, other.uid);
    }

    #[test]
    fn test_flags_shown_when_asked() {
        let span = resolve_times(&Tz::Pacific__Honolulu, "2024-06-01T23:00", &Tz::Pacific__Auckland, "06:00").unwrap();
        let options = ComposeOptions { show_flags: true };
        let event = compose(&details(""), &honolulu(), &auckland(), &span, options);

        let lines: Vec<_> = event.description.lines().collect();
        assert_eq!(lines[0], "🛫 \u{1F1FA}\u{1F1F8} Honolulu HNL Sat 23:00 (local time)");
        assert_eq!(lines[1], "🛬 \u{1F1F3}\u{1F1FF} Auckland AKL Mon 06:00 (local time)");
        assert_eq!(lines[2], "⏱️ 9h00m");
    }

    #[test]
    fn test_flag_skipped_without_country() {
        let span = haneda_heathrow();
        let nowhere = airport("XXXX", "XXX", "Nowhere", "", 51.4706, -0.461941);
        let event = compose(&details(""), &haneda(), &nowhere, &span, ComposeOptions { show_flags: true });

        assert!(event.description.contains("\n🛬 Nowhere XXX Sun 05:00 (local time)\n"));
    }

    #[test]
    fn test_local_times_round_trip() {
        let span = haneda_heathrow();
        let event = compose(&details(""), &haneda(), &heathrow(), &span, ComposeOptions::default());

        for (line, at) in event.description.lines().zip([span.departure, span.arrival]) {
            let clock = line
                .split_whitespace()
                .find(|token| token.contains(':'))
                .unwrap();
            let again = parse_time_on(clock, at.date_naive(), &at.timezone()).unwrap();
            assert_eq!((again.hour(), again.minute()), (at.hour(), at.minute()));
            assert_eq!(again, at);
        }
    }

    #[test]
    fn test_event_serializes() {
        let event = compose(&details("ABC123"), &haneda(), &heathrow(), &haneda_heathrow(), ComposeOptions::default());
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["summary"], "NH 211 HND → LHR");
        assert_eq!(json["start"], "2024-06-01T22:00:00+09:00");
        assert_eq!(json["end"], "2024-06-02T05:00:00+01:00");
    }
}
