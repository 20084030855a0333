use crate::utils::error::AppError;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8085;
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "placement_db";

/// Configuração do serviço lida do ambiente (`.env` já carregado pelo main)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("invalid PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let mongodb_uri = lookup("MONGODB_URI")
            .or_else(|| lookup("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string());

        // Nome do banco: path da URI tem prioridade, depois MONGODB_DATABASE
        let database_name = database_from_uri(&mongodb_uri)
            .or_else(|| lookup("MONGODB_DATABASE"))
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(Self {
            host,
            port,
            mongodb_uri,
            database_name,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Extracts the database segment of `mongodb://host:port/<db>?opts`, if any.
fn database_from_uri(uri: &str) -> Option<String> {
    let without_scheme = uri.split_once("://").map(|(_, rest)| rest).unwrap_or(uri);
    let (_, path) = without_scheme.split_once('/')?;
    let name = path.split('?').next().unwrap_or("");
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
