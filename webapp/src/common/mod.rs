pub mod storage;
pub mod style;
pub mod theme;

use chrono::NaiveDate;

pub fn publish_date(year: i32, month: u32, day: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => String::from("unknown date"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_date() {
        assert_eq!(publish_date(2024, 1, 1), "January 1, 2024");
    }

    #[test]
    fn rejects_impossible_date() {
        assert_eq!(publish_date(2024, 2, 30), "unknown date");
    }
}
