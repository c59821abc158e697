use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::{cli::convert::token_manager, config::Settings, error, info, success, warning};

pub async fn token(refresh: bool) {
    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let tokens = token_manager(Client::new(), &settings);
    info!("Credential file: {}", tokens.store().path().display());

    if refresh {
        match tokens.refresh().await {
            Ok(_) => {}
            Err(e) => error!("{}", e),
        }
    }

    let record = match tokens.current().await {
        Ok(record) => record,
        Err(e) => error!("{}", e),
    };

    let expires = DateTime::<Utc>::from_timestamp(record.expires_at, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| record.expires_at.to_string());

    if record.is_expired_at(Utc::now().timestamp()) {
        warning!(
            "Access token expired at {}. It is refreshed on the next conversion.",
            expires
        );
    } else {
        success!("Access token valid until {}", expires);
    }
}
