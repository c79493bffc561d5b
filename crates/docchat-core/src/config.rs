//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env
//! vars. The two host environment variables the deployment relies on
//! (`OLLAMA_HOST`, `BACKEND_HOST`) are read directly with `localhost`
//! defaults; their ports and the model identifier are fixed.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::env;
use std::path::{Path, PathBuf};

/// Fixed port of the Ollama backend.
pub const OLLAMA_PORT: u16 = 11434;
/// Fixed model identifier used for generation.
pub const LLM_MODEL: &str = "llama3";
/// Fixed port the query service listens on.
pub const SERVICE_PORT: u16 = 8000;
/// Request path of the query endpoint.
pub const SERVICE_PATH: &str = "/perguntar";

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_"));

        Ok(Self { figment })
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Folder holding the source PDF documents.
    pub fn docs_dir(&self) -> PathBuf {
        expand_path(
            self.get::<String>("data.docs_dir")
                .unwrap_or_else(|_| "base".to_string()),
        )
    }

    /// Directory of the persistent LanceDB vector index.
    pub fn index_dir(&self) -> PathBuf {
        expand_path(
            self.get::<String>("data.index_dir")
                .unwrap_or_else(|_| "db".to_string()),
        )
    }

    /// Table name inside the vector index.
    pub fn index_table(&self) -> String {
        self.get::<String>("data.index_table")
            .unwrap_or_else(|_| "chunks".to_string())
    }

    /// Base URL of the Ollama backend, from `OLLAMA_HOST` (default
    /// `localhost`) plus the fixed port.
    pub fn ollama_base_url(&self) -> String {
        let host = env::var("OLLAMA_HOST").unwrap_or_else(|_| "localhost".to_string());
        format!("http://{host}:{OLLAMA_PORT}")
    }

    /// Full query-endpoint URL, from `BACKEND_HOST` (default `localhost`)
    /// plus the fixed port and path.
    pub fn backend_url(&self) -> String {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "localhost".to_string());
        format!("http://{host}:{SERVICE_PORT}{SERVICE_PATH}")
    }

    /// Address the query service binds to.
    pub fn bind_addr(&self) -> String {
        let host = self
            .get::<String>("server.host")
            .unwrap_or_else(|_| "0.0.0.0".to_string());
        format!("{host}:{SERVICE_PORT}")
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after
/// expansion. If `p` is absolute, it's returned as-is.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() {
        p
    } else {
        base.join(p)
    }
}
