use strum::Display;
use thiserror::Error;

/// The values API endpoint a request went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Call {
    #[strum(serialize = "values.get")]
    GetValues,
    #[strum(serialize = "values.update")]
    UpdateValues,
    #[strum(serialize = "values.batchClear")]
    BatchClearValues,
}

#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-2xx status.
    #[error("{call} returned HTTP {status}: {body}")]
    Status {
        call: Call,
        status: u16,
        body: String,
    },

    /// No response: DNS, TLS, refused or dropped connection.
    #[error("{call} failed: {source}")]
    Transport {
        call: Call,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{call} response could not be read: {source}")]
    Body {
        call: Call,
        #[source]
        source: std::io::Error,
    },

    #[error("{call} JSON: {source}")]
    Json {
        call: Call,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn http(call: Call, err: ureq::Error) -> Error {
        match err {
            ureq::Error::Status(status, response) => Error::Status {
                call,
                status,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => Error::Transport {
                call,
                source: Box::new(transport),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
