//! Reply templates.
//!
//! Every reply the advisor produces is rendered by one of the functions
//! below. The wording is fixed Russian text.

use crate::domain::{DayClass, DepartureTime, Direction, Route};

/// Sponsor line appended to replies that send people to a taxi.
pub const MONETIZATION_MESSAGE: &str =
    "Кстати, по промокоду SHUTTLE первая поездка на такси партнёра - со скидкой.";

/// "From <origin>" as used in replies for each direction.
fn origin(direction: Direction) -> &'static str {
    match direction {
        Direction::ToOffice => "от Геологической",
        Direction::FromOffice => "от офиса",
    }
}

/// Nearest departure plus the one after it.
pub fn two_trips(direction: Direction, first: DepartureTime, second: DepartureTime) -> String {
    format!(
        "Ближайший дежурный рейс {} будет в {first}. Следующий - в {second}.",
        origin(direction)
    )
}

/// The only departure left today.
pub fn last_trip(direction: Direction, only: DepartureTime) -> String {
    let head = format!(
        "Ближайший дежурный рейс {} будет в {only}. Это последний на сегодня рейс",
        origin(direction)
    );
    match direction {
        Direction::ToOffice => format!("{head}."),
        Direction::FromOffice => {
            format!("{head}, дальше - только на такси. {MONETIZATION_MESSAGE}")
        }
    }
}

/// Nothing leaves the office soon.
pub fn taxi() -> String {
    format!(
        "В ближайшие несколько часов уехать домой на трансфере не получится :( \
         Придется остаться в офисе или ехать на такси. {MONETIZATION_MESSAGE}"
    )
}

/// Nothing goes to the office soon; list the first trips of the morning.
pub fn sleep(morning: &[DepartureTime]) -> String {
    let mut text = String::from(
        "В ближайшие несколько часов уехать на работу на трансфере не получится. \
         Лучше лечь поспать и поехать с утра.",
    );
    if !morning.is_empty() {
        let list = morning
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        text.push_str(&format!(
            " Первые рейсы {}: {list}.",
            origin(Direction::ToOffice)
        ));
    }
    text
}

/// Header line plus one line per departure.
pub fn full_schedule(direction: Direction, day: DayClass, route: &Route) -> String {
    let days = match day {
        DayClass::WorkDay => "в будни",
        DayClass::Holiday => "в выходные",
    };
    let mut text = format!("Дежурные рейсы {} {days}:\n", origin(direction));
    for departure in route.departures() {
        text.push_str(&departure.to_string());
        text.push('\n');
    }
    text
}
