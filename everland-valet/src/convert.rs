use chrono::NaiveDate;

use crate::error::ValetError;
use crate::types::{CalendarResponse, Valet};

/// Vendor operation returning the month calendar without reservation status.
const CALENDAR_METHOD: &str = "calendarWoS";
const TOP_MENU_ID: &str = "02";
const VALET_MENU_ID: &str = "02040100000000000001";

/// Formats the month containing `month` as `YYYYMM`.
pub fn format_month(month: NaiveDate) -> String {
    month.format("%Y%m").to_string()
}

/// Builds the form body for the month containing `month`.
///
/// Pairs are joined verbatim; every value is already URL-safe.
pub fn build_form_body(month: NaiveDate) -> String {
    let param_mon = format_month(month);
    [
        ("method", CALENDAR_METHOD),
        ("param_mon", param_mon.as_str()),
        ("s_top_menu_id", TOP_MENU_ID),
        ("chkMenuId", VALET_MENU_ID),
    ]
    .iter()
    .map(|(key, value)| format!("{key}={value}"))
    .collect::<Vec<_>>()
    .join("&")
}

/// Resolves a day-of-month string against a `YYYYMM` month.
pub fn resolve_date(cur_mon: &str, day: &str) -> Result<NaiveDate, ValetError> {
    let value = format!("{cur_mon}{day}");
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValetError::InvalidDate {
            value,
            source: None,
        });
    }
    NaiveDate::parse_from_str(&value, "%Y%m%d").map_err(|e| ValetError::InvalidDate {
        value,
        source: Some(e),
    })
}

/// Turns a raw month grid into the bookable days, in vendor order.
pub fn normalize(response: &CalendarResponse) -> Result<Vec<Valet>, ValetError> {
    response
        .cal_list
        .iter()
        .filter(|entry| !entry.is_placeholder())
        .filter(|entry| entry.capa_fg.is_available())
        .map(|entry| {
            Ok(Valet {
                date: resolve_date(&response.cur_mon, &entry.date)?,
                capability: entry.capa_fg,
            })
        })
        .collect()
}

/// Returns the first valet on `date`, if any.
pub fn find_valet(valets: Vec<Valet>, date: NaiveDate) -> Option<Valet> {
    valets.into_iter().find(|valet| valet.date == date)
}
