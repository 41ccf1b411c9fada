use chrono::{Datelike, NaiveDateTime, Timelike};

/// Hour of day scaled to `[0, 1)`.
pub fn time_of_day(local_time: &NaiveDateTime) -> f64 {
    f64::from(local_time.hour()) / 24.0
}

/// Activity bias by hour and weekday: business hours, evenings and
/// weekdays raise the base of 0.5, capped at 1.
pub fn seasonality(local_time: &NaiveDateTime) -> f64 {
    let hour = local_time.hour();
    let mut factor = 0.5;
    if (9..=17).contains(&hour) {
        factor += 0.3;
    }
    if (19..=22).contains(&hour) {
        factor += 0.2;
    }
    if local_time.weekday().number_from_monday() <= 5 {
        factor += 0.1;
    }
    f64::min(factor, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    #[test]
    fn weekday_business_hours_cap_at_one() {
        // 2024-03-05 is a Tuesday.
        assert!((seasonality(&at(2024, 3, 5, 10)) - 0.9).abs() < 1e-9);
        assert!((seasonality(&at(2024, 3, 5, 20)) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn weekend_night_is_base() {
        // 2024-03-09 is a Saturday.
        assert!((seasonality(&at(2024, 3, 9, 3)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn noon_is_half_day() {
        assert!((time_of_day(&at(2024, 3, 9, 12)) - 0.5).abs() < 1e-9);
    }
}
