use std::path::PathBuf;
use crate::api::{self, AppState};
use crate::cli::commands::GlobalArgs;
use crate::config::{self, SmartdoConfig};
use crate::errors::SmartdoError;

/// Read the config file (if any) and apply command-line overrides.
pub async fn load_config(global: &GlobalArgs) -> Result<SmartdoConfig, SmartdoError> {
    let file_config = match &global.config {
        Some(path) => config::parse_config(&PathBuf::from(path)).await?,
        None => SmartdoConfig::default(),
    };
    Ok(file_config.with_overrides(global.provider.clone(), global.model.clone(), global.db.clone()))
}

pub async fn open(global: &GlobalArgs) -> Result<(SmartdoConfig, AppState), SmartdoError> {
    let config = load_config(global).await?;
    let state = api::create_app_state(&config)?;
    Ok((config, state))
}
