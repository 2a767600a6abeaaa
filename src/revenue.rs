use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use time::{Date, Duration, Month, OffsetDateTime, Weekday};

/// One revenue bucket for the admin charts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RevenuePoint {
    pub period: String,
    pub amount: Decimal,
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

fn month_label(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Paid amounts of the current week (Monday through Sunday of `today`),
/// grouped by weekday. Rows are (booking date, payment amount) pairs of
/// approved bookings only; the caller filters.
pub fn daily_revenue(rows: &[(OffsetDateTime, Decimal)], today: Date) -> Vec<RevenuePoint> {
    let monday = today - Duration::days(today.weekday().number_days_from_monday() as i64);
    let next_monday = monday + Duration::days(7);

    let mut buckets: BTreeMap<u8, Decimal> = BTreeMap::new();
    for (at, amount) in rows {
        let date = at.date();
        if date >= monday && date < next_monday {
            *buckets
                .entry(date.weekday().number_days_from_monday())
                .or_default() += *amount;
        }
    }

    buckets
        .into_iter()
        .map(|(offset, amount)| RevenuePoint {
            period: weekday_label((monday + Duration::days(offset as i64)).weekday()).to_string(),
            amount,
        })
        .collect()
}

/// Paid amounts of the current month grouped by ISO week number.
pub fn weekly_revenue(rows: &[(OffsetDateTime, Decimal)], today: Date) -> Vec<RevenuePoint> {
    let mut buckets: BTreeMap<u8, Decimal> = BTreeMap::new();
    for (at, amount) in rows {
        let date = at.date();
        if date.year() == today.year() && date.month() == today.month() {
            *buckets.entry(date.iso_week()).or_default() += *amount;
        }
    }

    buckets
        .into_iter()
        .map(|(week, amount)| RevenuePoint {
            period: format!("Week {week}"),
            amount,
        })
        .collect()
}

/// Paid amounts of the current year grouped by month.
pub fn monthly_revenue(rows: &[(OffsetDateTime, Decimal)], today: Date) -> Vec<RevenuePoint> {
    let mut buckets: BTreeMap<u8, Decimal> = BTreeMap::new();
    for (at, amount) in rows {
        let date = at.date();
        if date.year() == today.year() {
            *buckets.entry(u8::from(date.month())).or_default() += *amount;
        }
    }

    buckets
        .into_iter()
        .filter_map(|(month, amount)| {
            let month = Month::try_from(month).ok()?;
            Some(RevenuePoint {
                period: month_label(month).to_string(),
                amount,
            })
        })
        .collect()
}
