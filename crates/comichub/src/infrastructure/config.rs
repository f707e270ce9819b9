use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

pub static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_create_database")]
    pub create_database: bool,
    #[serde(default)]
    pub enable_playground: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: comichub_home().join("config.yml"),
            port: default_port(),
            database_path: default_database_path(),
            create_database: default_create_database(),
            enable_playground: false,
        }
    }
}

fn comichub_home() -> PathBuf {
    match std::env::var("COMICHUB_HOME") {
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs::home_dir()
            .expect("should have home")
            .join(".comichub"),
    }
}

fn default_port() -> u16 {
    8080
}

fn default_database_path() -> String {
    let path = comichub_home();
    if !path.exists() {
        let _ = std::fs::create_dir_all(&path);
    }
    path.join("comichub.db").display().to_string()
}

fn default_create_database() -> bool {
    true
}

impl Config {
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Config, anyhow::Error> {
        let config_path = match path {
            Some(p) => PathBuf::new().join(p),
            None => comichub_home().join("config.yml"),
        };

        match std::fs::File::open(config_path.clone()) {
            Ok(file) => {
                info!("Open config from {:?}", config_path);
                let mut cfg: Self = serde_yml::from_reader(file)?;
                cfg.path = config_path;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Config {
                    path: config_path,
                    ..Default::default()
                };
                cfg.save()?;
                info!("Write default config at {:?}", cfg.path);
                Ok(cfg)
            }
        }
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        std::fs::write(&self.path, serde_yml::to_string(&self)?)?;

        Ok(())
    }
}
