//! A small client for the Google Sheets values API.

mod client;
mod result;
mod values;

pub use client::{column_letters, encode_path_segment, quote_sheet_name, spreadsheet_id_from_url, Client};
pub use result::{Call, Error, Result};
pub use values::{BatchClear, ValueRange};
