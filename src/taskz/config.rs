use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

pub const DATA_FILE_ENV: &str = "TASKZ_DATA_FILE";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
const DATA_FILE_NAME: &str = "tasks.json";

/// Where the store lives and how the assistant authenticates. Resolved
/// once at startup and threaded explicitly into the store and assistant;
/// nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct TaskzConfig {
    pub data_file: PathBuf,
    pub api_key: Option<String>,
}

impl TaskzConfig {
    /// `TASKZ_DATA_FILE` overrides the platform data directory.
    pub fn from_env() -> Self {
        let data_file = env::var_os(DATA_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_file);
        let api_key = env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());

        Self { data_file, api_key }
    }
}

fn default_data_file() -> PathBuf {
    match ProjectDirs::from("com", "taskz", "taskz") {
        Some(dirs) => dirs.data_dir().join(DATA_FILE_NAME),
        None => PathBuf::from(DATA_FILE_NAME),
    }
}
