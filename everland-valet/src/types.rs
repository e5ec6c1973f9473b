use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation capacity of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CapacityCode")]
pub enum Capability {
    Unavailable,
    Available,
    Full,
}

impl Capability {
    /// Wire order used by index-encoded capacity codes.
    const ORDER: [Capability; 3] = [Self::Unavailable, Self::Available, Self::Full];

    /// Decodes the single-character form (`"0"`, `"1"`, `"2"`).
    pub fn from_char(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::Unavailable),
            "1" => Some(Self::Available),
            "2" => Some(Self::Full),
            _ => None,
        }
    }

    /// Decodes the integer index form (`0`, `1`, `2`).
    pub fn from_index(index: u64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ORDER.get(i).copied())
    }

    pub fn is_available(self) -> bool {
        self != Self::Unavailable
    }
}

/// Raw `capaFg` value as the vendor sends it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CapacityCode {
    Char(String),
    Index(u64),
}

impl TryFrom<CapacityCode> for Capability {
    type Error = String;

    fn try_from(code: CapacityCode) -> Result<Self, Self::Error> {
        match code {
            CapacityCode::Char(c) => {
                Self::from_char(&c).ok_or_else(|| format!("unknown capacity code {c:?}"))
            }
            CapacityCode::Index(i) => {
                Self::from_index(i).ok_or_else(|| format!("unknown capacity index {i}"))
            }
        }
    }
}

/// One cell of the vendor's month grid.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarEntry {
    /// Day of month, empty for padding cells.
    pub date: String,
    #[serde(rename = "capaFg")]
    pub capa_fg: Capability,
}

impl CalendarEntry {
    pub fn is_placeholder(&self) -> bool {
        self.date.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarResponse {
    /// Month context as `YYYYMM`.
    pub cur_mon: String,
    #[serde(rename = "calList")]
    pub cal_list: Vec<CalendarEntry>,
}

/// Top-level body of a `comm.do` reply.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarEnvelope {
    pub result: CalendarResponse,
}

/// A bookable valet day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Valet {
    pub date: NaiveDate,
    pub capability: Capability,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_char_and_index_codes_agree() {
        for (i, c) in ["0", "1", "2"].iter().enumerate() {
            assert_eq!(Capability::from_char(c), Capability::from_index(i as u64));
        }
        assert_eq!(Capability::from_char("1"), Some(Capability::Available));
        assert_eq!(Capability::from_index(2), Some(Capability::Full));
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert_eq!(Capability::from_char("3"), None);
        assert_eq!(Capability::from_char(""), None);
        assert_eq!(Capability::from_index(3), None);
    }

    #[test]
    fn test_entry_deserializes_both_wire_forms() {
        let as_char: CalendarEntry =
            serde_json::from_value(json!({ "date": "05", "capaFg": "2" })).unwrap();
        let as_index: CalendarEntry =
            serde_json::from_value(json!({ "date": "05", "capaFg": 2 })).unwrap();
        assert_eq!(as_char.capa_fg, Capability::Full);
        assert_eq!(as_char.capa_fg, as_index.capa_fg);
    }

    #[test]
    fn test_entry_with_bad_code_fails() {
        let result: Result<CalendarEntry, _> =
            serde_json::from_value(json!({ "date": "05", "capaFg": "9" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_envelope_ignores_extra_fields() {
        let envelope: CalendarEnvelope = serde_json::from_value(json!({
            "result": {
                "cur_mon": "202208",
                "calList": [{ "date": "", "capaFg": "0" }],
                "today": "20220801"
            },
            "resultCode": "0000"
        }))
        .unwrap();
        assert_eq!(envelope.result.cur_mon, "202208");
        assert!(envelope.result.cal_list[0].is_placeholder());
    }

    #[test]
    fn test_valet_serializes_plain_date_and_name() {
        let valet = Valet {
            date: NaiveDate::from_ymd_opt(2022, 8, 5).unwrap(),
            capability: Capability::Available,
        };
        assert_eq!(
            serde_json::to_value(&valet).unwrap(),
            json!({ "date": "2022-08-05", "capability": "Available" })
        );
    }
}
