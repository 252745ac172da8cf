//! Service Configuration
//!
//! Settings are resolved flag > environment variable > default:
//!
//! | Setting   | Flag       | Env              | Default          |
//! |-----------|------------|------------------|------------------|
//! | bind addr | `--bind`   | `ARTICLES_BIND`  | `127.0.0.1:4000` |
//! | data file | `--db`     | `ARTICLES_DB`    | `db.json`        |
//! | backend   | `--store`  | `ARTICLES_STORE` | `file`           |

use crate::store::{ArticleStore, FileStore, MemoryStore};

use anyhow::{Context, Result, anyhow, bail};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_BIND: &str = "127.0.0.1:4000";
pub const DEFAULT_DB_PATH: &str = "db.json";

/// Flags that consume the next argument as their value.
const VALUE_FLAGS: [&str; 3] = ["--bind", "--db", "--store"];

pub const USAGE: &str = "\
Usage: article_service [--bind <addr:port>] [--db <path>] [--store <file|memory>]

Options:
  --bind <addr:port>      Address to listen on (env ARTICLES_BIND, default 127.0.0.1:4000)
  --db <path>             JSON data file (env ARTICLES_DB, default db.json)
  --store <file|memory>   Storage backend (env ARTICLES_STORE, default file)
  -h, --help              Print this help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow!("Unknown store backend '{}' (expected file or memory)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub backend: StoreBackend,
}

impl Config {
    /// Resolves a config from already collected process arguments and the
    /// process environment.
    pub fn from_args(args: Vec<String>) -> Result<Self> {
        Self::from_sources(args, |key| std::env::var(key).ok())
    }

    /// Resolves a config from explicit arguments (without the program name)
    /// and an environment lookup.
    pub fn from_sources<I, E>(args: I, env: E) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut bind = None;
        let mut db = None;
        let mut store = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "--bind" => &mut bind,
                "--db" => &mut db,
                "--store" => &mut store,
                _ => {
                    tracing::warn!("Ignoring unknown argument: {}", arg);
                    continue;
                }
            };
            let value = args
                .next()
                .filter(|value| !is_flag(value))
                .ok_or_else(|| anyhow!("{} requires a value", arg))?;
            *slot = Some(value);
        }

        let bind = bind
            .or_else(|| env("ARTICLES_BIND"))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let db = db
            .or_else(|| env("ARTICLES_DB"))
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let store = store
            .or_else(|| env("ARTICLES_STORE"))
            .unwrap_or_else(|| "file".to_string());

        if db.trim().is_empty() {
            bail!("Data file path must not be empty");
        }

        Ok(Self {
            bind_addr: bind
                .parse()
                .with_context(|| format!("Invalid bind address '{}'", bind))?,
            db_path: PathBuf::from(db),
            backend: store.parse()?,
        })
    }

    /// Opens the configured backend.
    pub async fn open_store(&self) -> Result<Arc<dyn ArticleStore>> {
        let store: Arc<dyn ArticleStore> = match self.backend {
            StoreBackend::File => Arc::new(
                FileStore::open(&self.db_path)
                    .await
                    .with_context(|| format!("Failed to open {}", self.db_path.display()))?,
            ),
            StoreBackend::Memory => {
                tracing::info!("Using in-memory article store (nothing is persisted)");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(store)
    }
}

/// True when the arguments ask for usage text. A `-h`/`--help` that is the
/// value of another flag does not count.
pub fn wants_help<S: AsRef<str>>(args: &[S]) -> bool {
    let mut args = args.iter().map(|arg| arg.as_ref());
    while let Some(arg) = args.next() {
        match arg {
            "-h" | "--help" => return true,
            flag if VALUE_FLAGS.contains(&flag) => {
                args.next();
            }
            _ => {}
        }
    }
    false
}

fn is_flag(arg: &str) -> bool {
    arg.starts_with("--") || arg == "-h"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_sources(args(&[]), no_env).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND.parse().unwrap());
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(config.backend, StoreBackend::File);
    }

    #[test]
    fn test_flags_override_env() {
        let env: HashMap<&str, &str> = [
            ("ARTICLES_BIND", "0.0.0.0:9000"),
            ("ARTICLES_DB", "/var/lib/articles.json"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_sources(args(&["--bind", "127.0.0.1:5000"]), |key| {
            env.get(key).map(|v| v.to_string())
        })
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.db_path, PathBuf::from("/var/lib/articles.json"));
    }

    #[test]
    fn test_memory_backend() {
        let config = Config::from_sources(args(&["--store", "Memory"]), no_env).unwrap();
        assert_eq!(config.backend, StoreBackend::Memory);
    }

    #[test]
    fn test_unknown_flag_is_ignored() {
        let config = Config::from_sources(args(&["--verbose", "--db", "x.json"]), no_env).unwrap();
        assert_eq!(config.db_path, PathBuf::from("x.json"));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_sources(args(&["--bind", "nope"]), no_env).is_err());
        assert!(Config::from_sources(args(&["--store", "redis"]), no_env).is_err());
        assert!(Config::from_sources(args(&["--db"]), no_env).is_err());
        assert!(Config::from_sources(args(&["--db", " "]), no_env).is_err());
    }

    #[test]
    fn test_wants_help() {
        assert!(wants_help(&["--db", "x", "--help"]));
        assert!(wants_help(&["-h"]));
        assert!(!wants_help(&["--bind", "127.0.0.1:1"]));
    }

    #[test]
    fn test_help_as_flag_value_is_not_help() {
        assert!(!wants_help(&["--db", "--help"]));
        assert!(!wants_help(&["--store", "-h"]));
        assert!(wants_help(&["--db", "x.json", "-h"]));
    }

    #[test]
    fn test_flag_as_value_is_error() {
        let result = Config::from_sources(args(&["--bind", "--db", "x.json"]), no_env);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("--bind requires a value"));

        assert!(Config::from_sources(args(&["--db", "--help"]), no_env).is_err());
    }

    #[test]
    fn test_from_args_uses_given_arguments() {
        let config = Config::from_args(args(&["--store", "memory", "--db", "given.json"])).unwrap();

        assert_eq!(config.backend, StoreBackend::Memory);
        assert_eq!(config.db_path, PathBuf::from("given.json"));
    }

    #[tokio::test]
    async fn test_open_file_store_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        let config = Config {
            bind_addr: DEFAULT_BIND.parse().unwrap(),
            db_path: path.clone(),
            backend: StoreBackend::File,
        };

        let store = config.open_store().await.unwrap();

        assert!(path.exists());
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
