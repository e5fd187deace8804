use crate::core::compliance::BreakLimits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every configuration file is expected to carry.
pub const KNOWN_KEYS: [&str; 7] = [
    "database",
    "company_title",
    "queue_names",
    "queue_summary_names",
    "queue_tabs",
    "break_limits",
    "timestamp_format",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_company_title")]
    pub company_title: String,
    /// Queue code → title used on the queue sheets.
    #[serde(default = "default_queue_names")]
    pub queue_names: BTreeMap<String, String>,
    /// Queue code → row label used on the summary sheet.
    #[serde(default = "default_queue_summary_names")]
    pub queue_summary_names: BTreeMap<String, String>,
    /// Queue code → worksheet tab name.
    #[serde(default = "default_queue_tabs")]
    pub queue_tabs: BTreeMap<String, String>,
    #[serde(default)]
    pub break_limits: BreakLimits,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_company_title() -> String {
    "IPS NUEVA POPAYÁN".to_string()
}

fn default_timestamp_format() -> String {
    "%d/%m/%Y %H:%M".to_string()
}

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn default_queue_names() -> BTreeMap<String, String> {
    map(&[
        ("9001", "IPS — Cola 9001"),
        ("9002", "Particulares — Cola 9002"),
        ("9003", "IPS — Cola 9003"),
        ("9004", "Robot — Cola 9004"),
        ("9007", "HUSJ — Cola 9007"),
        ("9008", "Rehabilitación — Cola 9008"),
        ("9011", "IPS — Cola 9011"),
        ("9014", "PAC — Cola 9014"),
    ])
}

fn default_queue_summary_names() -> BTreeMap<String, String> {
    map(&[
        ("9001", "9001 : Rehabilitar Imágenes"),
        ("9002", "9002 : Particulares"),
        ("9003", "9003 : IPS"),
        ("9004", "9004 : Robot"),
        ("9007", "9007 : Hospital San José"),
        ("9008", "9008 : Call Rehabilitar"),
        ("9011", "9011 : Preferencia Médicos"),
        ("9014", "9014 : PAC"),
    ])
}

fn default_queue_tabs() -> BTreeMap<String, String> {
    map(&[
        ("9001", "IPS-9001"),
        ("9002", "IPS-9002"),
        ("9003", "PARTICULARES-9003"),
        ("9004", "ROBOT-9004"),
        ("9007", "HUSJ-9007"),
        ("9008", "REHAB-9008"),
        ("9011", "IPS-9011"),
        ("9014", "PAC-9014"),
    ])
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    pub fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            company_title: default_company_title(),
            queue_names: default_queue_names(),
            queue_summary_names: default_queue_summary_names(),
            queue_tabs: default_queue_tabs(),
            break_limits: BreakLimits::default(),
            timestamp_format: default_timestamp_format(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".callreport")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("callreport.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("callreport.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))
    }

    /// Keys from `KNOWN_KEYS` absent in the raw YAML text.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;
        let mapping = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a mapping".to_string()))?;

        Ok(KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !mapping.contains_key(*k))
            .collect())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))
    }

    /// Title of a queue sheet; falls back to `Cola <code>`.
    pub fn queue_title(&self, queue: &str) -> String {
        self.queue_names
            .get(queue)
            .cloned()
            .unwrap_or_else(|| format!("Cola {queue}"))
    }

    /// Row label on the summary sheet; falls back to `<code> : Cola <code>`.
    pub fn queue_summary_name(&self, queue: &str) -> String {
        self.queue_summary_names
            .get(queue)
            .cloned()
            .unwrap_or_else(|| format!("{queue} : Cola {queue}"))
    }

    /// Worksheet tab name; falls back to the bare code.
    pub fn queue_tab(&self, queue: &str) -> String {
        self.queue_tabs
            .get(queue)
            .cloned()
            .unwrap_or_else(|| queue.to_string())
    }

    /// Initialize configuration and database files.
    /// Returns the database path written into the configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = Self::with_database(db_path.clone()).to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
