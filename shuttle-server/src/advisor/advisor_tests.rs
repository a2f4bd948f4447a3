//! Scenario tests for trip recommendations against a fixed timetable.

use chrono::NaiveDateTime;
use proptest::prelude::*;

use super::texts::MONETIZATION_MESSAGE;
use super::*;
use crate::domain::{DepartureTime, Direction};
use crate::schedule::Schedule;

const FIXTURE: &str = r#"WorkDayRouteToOffice:
  - "07:30"
  - "08:00"
  - "20:00"
  - "20:30"
HolidayRouteToOffice:
  - "10:30"
WorkDayRouteFromOffice:
  - "08:20"
  - "08:50"
  - "20:20"
  - "20:50"
HolidayRouteFromOffice:
  - "18:00""#;

fn schedule() -> Schedule {
    Schedule::from_yaml(FIXTURE.as_bytes()).unwrap()
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%d.%m.%Y %H:%M").unwrap()
}

fn t(s: &str) -> DepartureTime {
    DepartureTime::parse_hhmm(s).unwrap()
}

const TAXI: &str = "В ближайшие несколько часов уехать домой на трансфере не получится :( \
                    Придется остаться в офисе или ехать на такси. ";

const SLEEP: &str = "В ближайшие несколько часов уехать на работу на трансфере не получится. \
                     Лучше лечь поспать и поехать с утра. ";

// From office

#[test]
fn two_best_trips_from_office() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.best_trip_from_office_text(at("12.08.2016 07:00")),
        "Ближайший дежурный рейс от офиса будет в 08:20. Следующий - в 08:50."
    );
}

#[test]
fn last_trip_from_office() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.best_trip_from_office_text(at("12.08.2016 20:25")),
        format!(
            "Ближайший дежурный рейс от офиса будет в 20:50. \
             Это последний на сегодня рейс, дальше - только на такси. {MONETIZATION_MESSAGE}"
        )
    );
}

#[test]
fn taxi_when_no_trips_from_office_left() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.best_trip_from_office_text(at("12.08.2016 23:00")),
        format!("{TAXI}{MONETIZATION_MESSAGE}")
    );
}

#[test]
fn taxi_when_next_trip_from_office_is_far_away() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    // Saturday night: the holiday route still has 18:00, but that is hours away
    assert_eq!(
        advisor.best_trip_from_office_text(at("13.08.2016 01:00")),
        format!("{TAXI}{MONETIZATION_MESSAGE}")
    );
}

#[test]
fn departure_at_exact_moment_is_gone() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.recommend(at("12.08.2016 08:20"), Direction::FromOffice),
        Recommendation::TwoTrips {
            direction: Direction::FromOffice,
            first: t("08:50"),
            second: t("20:20"),
        }
    );
}

// To office

#[test]
fn two_best_trips_to_office() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.best_trip_to_office_text(at("12.08.2016 07:00")),
        "Ближайший дежурный рейс от Геологической будет в 07:30. Следующий - в 08:00."
    );
}

#[test]
fn last_trip_to_office() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.best_trip_to_office_text(at("12.08.2016 20:25")),
        "Ближайший дежурный рейс от Геологической будет в 20:30. Это последний на сегодня рейс."
    );
}

#[test]
fn sleep_and_take_tomorrows_first_trips() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    // Friday night: tomorrow is Saturday, so the holiday route is listed
    assert_eq!(
        advisor.best_trip_to_office_text(at("12.08.2016 23:00")),
        format!("{SLEEP}Первые рейсы от Геологической: 10:30.")
    );
}

#[test]
fn sleep_when_next_trip_to_office_is_far_away() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.best_trip_to_office_text(at("10.08.2016 01:00")),
        format!("{SLEEP}Первые рейсы от Геологической: 07:30, 08:00, 20:00.")
    );
}

#[test]
fn morning_trip_count_follows_config() {
    let s = schedule();
    let config = AdvisorConfig::new(180, 1);
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.recommend(at("10.08.2016 01:00"), Direction::ToOffice),
        Recommendation::Sleep {
            morning: vec![t("07:30")]
        }
    );
}

#[test]
fn wider_horizon_reaches_early_morning() {
    let s = schedule();
    let config = AdvisorConfig::new(7 * 60, 3);
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.best_trip_to_office_text(at("10.08.2016 01:00")),
        "Ближайший дежурный рейс от Геологической будет в 07:30. Следующий - в 08:00."
    );
}

#[test]
fn oversized_horizon_does_not_panic() {
    let s = schedule();
    let config = AdvisorConfig::new(i64::MAX, 3);
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.best_trip_from_office_text(at("12.08.2016 07:00")),
        "Ближайший дежурный рейс от офиса будет в 08:20. Следующий - в 08:50."
    );

    let config = AdvisorConfig::new(-60, 3);
    let advisor = Advisor::new(&s, &config);
    assert_eq!(
        advisor.recommend(at("12.08.2016 07:00"), Direction::FromOffice),
        Recommendation::Taxi
    );
}

#[test]
fn sunday_night_lists_monday_trips() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    assert_eq!(
        advisor.recommend(at("14.08.2016 23:00"), Direction::ToOffice),
        Recommendation::Sleep {
            morning: vec![t("07:30"), t("08:00"), t("20:00")]
        }
    );
}

// Full schedules

#[test]
fn full_schedule_to_office() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let texts = Advisor::new(&s, &config).full_to_office_texts();

    assert_eq!(
        texts[0],
        "Дежурные рейсы от Геологической в будни:\n07:30\n08:00\n20:00\n20:30\n"
    );
    assert_eq!(texts[1], "Дежурные рейсы от Геологической в выходные:\n10:30\n");
}

#[test]
fn full_schedule_from_office() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let texts = Advisor::new(&s, &config).full_from_office_texts();

    assert_eq!(
        texts[0],
        "Дежурные рейсы от офиса в будни:\n08:20\n08:50\n20:20\n20:50\n"
    );
    assert_eq!(texts[1], "Дежурные рейсы от офиса в выходные:\n18:00\n");
}

// Empty schedule

#[test]
fn empty_schedule_never_fails() {
    let s = Schedule::default();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);
    let now = at("12.08.2016 07:00");

    assert_eq!(
        advisor.best_trip_from_office_text(now),
        format!("{TAXI}{MONETIZATION_MESSAGE}")
    );
    assert_eq!(
        advisor.best_trip_to_office_text(now),
        SLEEP.trim_end().to_string()
    );
    assert_eq!(
        advisor.full_to_office_texts(),
        [
            "Дежурные рейсы от Геологической в будни:\n".to_string(),
            "Дежурные рейсы от Геологической в выходные:\n".to_string(),
        ]
    );
}

#[test]
fn outcome_names() {
    let s = schedule();
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(&s, &config);

    let outcome = |when: &str, direction| advisor.recommend(at(when), direction).outcome();
    assert_eq!(outcome("12.08.2016 07:00", Direction::FromOffice), "two_trips");
    assert_eq!(outcome("12.08.2016 20:25", Direction::FromOffice), "last_trip");
    assert_eq!(outcome("12.08.2016 23:00", Direction::FromOffice), "taxi");
    assert_eq!(outcome("12.08.2016 23:00", Direction::ToOffice), "sleep");
}

proptest! {
    /// Recommended trips always leave after the moment and within the horizon
    #[test]
    fn recommended_trips_are_upcoming(
        day in 8u32..15,
        hour in 0u32..24,
        minute in 0u32..60,
        to_office in any::<bool>()
    ) {
        let s = schedule();
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&s, &config);
        let now = chrono::NaiveDate::from_ymd_opt(2016, 8, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        let direction = if to_office { Direction::ToOffice } else { Direction::FromOffice };

        match advisor.recommend(now, direction) {
            Recommendation::TwoTrips { first, second, .. } => {
                prop_assert!(first.is_after(now.time()));
                prop_assert!(first.wait_from(now.time()) <= config.horizon());
                prop_assert!(second.is_after(first.time()));
            }
            Recommendation::LastTrip { only, .. } => {
                prop_assert!(only.is_after(now.time()));
                prop_assert!(only.wait_from(now.time()) <= config.horizon());
            }
            Recommendation::Taxi => {
                prop_assert_eq!(direction, Direction::FromOffice);
            }
            Recommendation::Sleep { morning } => {
                prop_assert_eq!(direction, Direction::ToOffice);
                prop_assert!(morning.len() <= config.morning_trips);
            }
        }
    }
}
