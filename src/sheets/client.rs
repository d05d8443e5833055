use super::{BatchClear, Call, Error, Result, ValueRange};

static API_ROOT_URL: &str = "https://sheets.googleapis.com/v4/";

pub struct Client {
    agent: ureq::Agent,
    api_root: String,
    access_token: String,
}

impl Client {
    pub fn new(access_token: String) -> Client {
        Client::with_api_root(API_ROOT_URL.to_owned(), access_token)
    }

    pub fn with_api_root(api_root: String, access_token: String) -> Client {
        Client {
            agent: ureq::AgentBuilder::new().build(),
            api_root,
            access_token,
        }
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        self.agent
            .request(method, &format!("{}{path}", self.api_root))
            .set("Authorization", &format!("Bearer {}", self.access_token))
    }

    fn values_path(spreadsheet_id: &str, range: &str) -> String {
        format!(
            "spreadsheets/{}/values/{}",
            encode_path_segment(spreadsheet_id),
            encode_path_segment(range)
        )
    }

    pub fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<ValueRange> {
        let call = Call::GetValues;
        let result_json = self
            .request("GET", &Self::values_path(spreadsheet_id, range))
            .call()
            .map_err(|err| Error::http(call, err))?
            .into_string()
            .map_err(|source| Error::Body { call, source })?;

        serde_json::from_str::<ValueRange>(&result_json).map_err(|source| {
            log::debug!(
                "get_values {range} failed to parse JSON response: {source:?} {}",
                &result_json
            );
            Error::Json { call, source }
        })
    }

    /// Writes `values` starting at the top-left of `range`, stored as typed (no formula
    /// or date parsing).
    pub fn update_values(&self, spreadsheet_id: &str, range: &str, values: &ValueRange) -> Result<()> {
        let call = Call::UpdateValues;
        let body = serde_json::to_string(values).map_err(|source| Error::Json { call, source })?;
        self.request("PUT", &Self::values_path(spreadsheet_id, range))
            .query("valueInputOption", "RAW")
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(|err| Error::http(call, err))?;
        Ok(())
    }

    pub fn batch_clear_values(&self, spreadsheet_id: &str, ranges: Vec<String>) -> Result<()> {
        let call = Call::BatchClearValues;
        let body = serde_json::to_string(&BatchClear { ranges })
            .map_err(|source| Error::Json { call, source })?;
        self.request(
            "POST",
            &format!("spreadsheets/{}/values:batchClear", encode_path_segment(spreadsheet_id)),
        )
        .set("Content-Type", "application/json")
        .send_string(&body)
        .map_err(|err| Error::http(call, err))?;
        Ok(())
    }
}

/// A sheet name as it must appear in A1 notation: single-quoted, inner quotes doubled.
pub fn quote_sheet_name(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

/// A1 column letters for a 1-based column number: 1 is `A`, 27 is `AA`.
pub fn column_letters(mut column: usize) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        let rem = (column - 1) % 26;
        letters.push(b'A' + rem as u8);
        column = (column - 1) / 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Percent-encodes everything but RFC 3986 unreserved characters.
pub fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Accepts either a bare spreadsheet ID or a sharing URL like
/// `https://docs.google.com/spreadsheets/d/<id>/edit?usp=sharing`.
pub fn spreadsheet_id_from_url(spreadsheet: &str) -> &str {
    let spreadsheet = spreadsheet.trim();
    match spreadsheet.split_once("/spreadsheets/d/") {
        Some((_, rest)) => rest
            .split(|c: char| c == '/' || c == '?' || c == '#')
            .next()
            .unwrap_or(rest),
        None => spreadsheet,
    }
}
