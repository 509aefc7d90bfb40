use chrono::{DateTime, Duration, Utc};

/// Groups digits in threes, e.g. `51038` -> `51,038`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }

    output
}

pub fn format_distance(km: f64) -> String {
    format!("{km:.2} km")
}

/// "Monday, June 10"
pub fn date_heading(date: DateTime<Utc>) -> String {
    date.format("%A, %B %-d").to_string()
}

/// Short weekday names for the seven days ending on `end_date`.
pub fn weekday_labels(end_date: DateTime<Utc>) -> Vec<String> {
    (0..7)
        .map(|i| {
            let day = end_date - Duration::days(6 - i);
            day.format("%a").to_string()
        })
        .collect()
}
