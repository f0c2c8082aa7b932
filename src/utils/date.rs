use chrono::NaiveDate;

/// Today's calendar day on the local clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
