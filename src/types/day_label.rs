use chrono::Weekday;

/// Relative name of a local date as seen from the viewer's current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Today,
    Yesterday,
    Tomorrow,
    /// Any other day, named by its weekday.
    Weekday(Weekday),
}

impl std::fmt::Display for DayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = match self {
            DayLabel::Today => "Today",
            DayLabel::Yesterday => "Yesterday",
            DayLabel::Tomorrow => "Tomorrow",
            DayLabel::Weekday(day) => match day {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
        };
        f.write_str(label)
    }
}
