use std::time::Duration;

use chrono::NaiveDate;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::convert::{build_form_body, find_valet, format_month, normalize};
use crate::error::ValetError;
use crate::types::{CalendarEnvelope, Valet};

pub const DEFAULT_BASE_URL: &str = "https://reservation.everland.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CALENDAR_PATH: &str = "/web/comm.do";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for the Everland reservation calendar.
pub struct EverlandClient {
    http: reqwest::Client,
    base_url: String,
}

impl EverlandClient {
    /// Creates a client against the public site with the default timeout.
    pub fn new() -> Result<Self, ValetError> {
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom base URL and request timeout.
    pub fn with_config(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ValetError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ValetError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the bookable valet days of the month containing `month`.
    #[instrument(skip(self, month), fields(month = %format_month(month)))]
    pub async fn fetch_valets(&self, month: NaiveDate) -> Result<Vec<Valet>, ValetError> {
        let body = build_form_body(month);

        debug!("Sending calendar request");

        let response = self
            .http
            .post(format!("{}{}", self.base_url, CALENDAR_PATH))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ValetError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: CalendarEnvelope = serde_json::from_str(&text)?;
        let valets = normalize(&envelope.result)?;

        debug!(
            entries = envelope.result.cal_list.len(),
            valets = valets.len(),
            "Normalized calendar"
        );

        Ok(valets)
    }

    /// Fetches the valet on a single day, `None` when it is not bookable.
    #[instrument(skip(self))]
    pub async fn fetch_valet(&self, date: NaiveDate) -> Result<Option<Valet>, ValetError> {
        let valets = self.fetch_valets(date).await?;
        Ok(find_valet(valets, date))
    }
}
