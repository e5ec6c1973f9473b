//! Client for the Everland reservation calendar's valet slots.
//!
//! The vendor exposes an ad hoc `comm.do` endpoint that returns a month grid
//! of capacity codes. This crate builds the request, calls the endpoint and
//! turns the grid into a list of bookable days.
//!
//! # Example
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use everland_valet::EverlandClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = EverlandClient::new().unwrap();
//!     let date = NaiveDate::from_ymd_opt(2022, 8, 15).unwrap();
//!
//!     // Whole month
//!     let valets = client.fetch_valets(date).await.unwrap();
//!
//!     // Single day
//!     let valet = client.fetch_valet(date).await.unwrap();
//! }
//! ```

mod client;
mod convert;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, EverlandClient};
pub use convert::{build_form_body, find_valet, format_month, normalize, resolve_date};
pub use error::ValetError;
pub use types::{CalendarEntry, CalendarEnvelope, CalendarResponse, Capability, Valet};
