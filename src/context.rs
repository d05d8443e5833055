use crate::config::{AppConfig, StoreConfig};
use crate::sheets;
use crate::store::{ApplicationStore, CsvFileBackend, SheetsBackend, SqliteBackend, TableBackend};

pub struct AppContext {
    pub store: ApplicationStore<Box<dyn TableBackend>>,
}

impl AppContext {
    pub fn open(config: &AppConfig) -> anyhow::Result<AppContext> {
        let backend = open_backend(&config.store)?;
        log::debug!("Using {}", backend.describe());
        Ok(AppContext {
            store: ApplicationStore::new(backend),
        })
    }
}

pub fn open_backend(store: &StoreConfig) -> anyhow::Result<Box<dyn TableBackend>> {
    let backend: Box<dyn TableBackend> = match store {
        StoreConfig::Csv { path } => Box::new(CsvFileBackend::new(&path.0)),
        StoreConfig::Sheets(sheets_config) => {
            let client = match &sheets_config.api_root {
                Some(api_root) => {
                    sheets::Client::with_api_root(api_root.clone(), sheets_config.access_token.clone())
                }
                None => sheets::Client::new(sheets_config.access_token.clone()),
            };
            Box::new(SheetsBackend::new(
                client,
                sheets::spreadsheet_id_from_url(&sheets_config.spreadsheet).to_owned(),
                sheets_config.worksheet.clone(),
            ))
        }
        StoreConfig::Sqlite { path } => Box::new(SqliteBackend::open(path)?),
    };
    Ok(backend)
}
