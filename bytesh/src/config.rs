use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "bytesh> ".to_owned()
}

impl Default for Config {
    fn default() -> Config {
        Config {
            prompt: default_prompt(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, anyhow::Error> {
        let dirs = xdg::BaseDirectories::with_prefix("bytesh")?;
        if let Some(file) = dirs.find_config_file("config.ron") {
            log::debug!("reading config from {}", file.display());
            let bytes = std::fs::read(&file)?;
            let s = String::from_utf8(bytes)?;
            Ok(ron::from_str(&s)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Like `load`, but a broken config file only costs a warning.
    pub fn load_or_default() -> Config {
        Config::load().unwrap_or_else(|e| {
            log::warn!("failed loading config file, using defaults: {}", e);
            Config::default()
        })
    }
}
