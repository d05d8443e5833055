use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_ENV_VAR: &str = "JOBTRACK_CONFIG_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvFilePath(pub PathBuf);

impl Default for CsvFilePath {
    fn default() -> Self {
        Self(PathBuf::from("applications.csv"))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreConfig {
    Csv {
        #[serde(default)]
        path: CsvFilePath,
    },
    Sheets(SheetsConfig),
    Sqlite {
        path: PathBuf,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Csv {
            path: CsvFilePath::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Spreadsheet ID, or its sharing URL.
    #[serde(alias = "spreadsheet_id")]
    pub spreadsheet: String,
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
    /// OAuth access token with the spreadsheets scope. Obtaining it is up to the user.
    pub access_token: String,
    #[serde(default)]
    pub api_root: Option<String>,
}

fn default_worksheet() -> String {
    "Sheet1".to_owned()
}

impl AppConfig {
    pub fn try_read(file_path: &Path) -> anyhow::Result<AppConfig> {
        let json = &std::fs::read_to_string(file_path)
            .with_context(|| format!("Reading config file {file_path:?}"))?;
        serde_json::from_str::<AppConfig>(json)
            .with_context(|| format!("Parsing JSON config file {file_path:?}"))
    }

    /// Reads the config from `file_path` if given, else from the file named by
    /// `JOBTRACK_CONFIG_FILE`, else falls back to the defaults (a CSV file in the working
    /// directory).
    pub fn locate(file_path: Option<&Path>) -> anyhow::Result<AppConfig> {
        if let Some(file_path) = file_path {
            return Self::try_read(file_path);
        }

        match std::env::var_os(CONFIG_FILE_ENV_VAR) {
            Some(file_path) => Self::try_read(Path::new(&file_path)),
            None => {
                log::debug!("{CONFIG_FILE_ENV_VAR} not set, using the default config");
                Ok(AppConfig::default())
            }
        }
    }
}
