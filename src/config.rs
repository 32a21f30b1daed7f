use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATABASE_PATH: &str = "call_logs.db";

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: HttpSettings,
    pub database: DatabaseSettings,
}

impl ServerConfig {
    /// Defaults, then `config.toml` if present, then `CALL_LOG__*` env vars.
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("server.bind_addr", DEFAULT_BIND_ADDR)?
            .set_default("database.path", DEFAULT_DATABASE_PATH)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CALL_LOG").separator("__"))
            .build()?
            .try_deserialize::<ServerConfig>()?;

        Ok(settings)
    }
}
