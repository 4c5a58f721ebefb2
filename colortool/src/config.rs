use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_swatch_size")]
    pub swatch_size: u32,
    #[serde(default = "default_text_box_height")]
    pub text_box_height: u32,
    #[serde(default = "default_text_scale")]
    pub text_scale: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_swatch_size() -> u32 {
    150
}

fn default_text_box_height() -> u32 {
    25
}

fn default_text_scale() -> u32 {
    1
}

fn default_title() -> String {
    "colortool".to_owned()
}

impl Default for Config {
    fn default() -> Config {
        Config {
            swatch_size: default_swatch_size(),
            text_box_height: default_text_box_height(),
            text_scale: default_text_scale(),
            title: default_title(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, anyhow::Error> {
        let dirs = xdg::BaseDirectories::with_prefix("colortool")?;
        if let Some(file) = dirs.find_config_file("config.ron") {
            log::debug!("reading config from {}", file.display());
            let bytes = std::fs::read(&file)?;
            let s = String::from_utf8(bytes)?;
            Ok(ron::from_str(&s)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_or_default() -> Config {
        Config::load().unwrap_or_else(|e| {
            log::warn!("failed loading config file, using defaults: {}", e);
            Config::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: Config = ron::from_str("(swatch_size: 300, title: \"swatch\")").unwrap();
        assert_eq!(config.swatch_size, 300);
        assert_eq!(config.text_box_height, 25);
        assert_eq!(config.text_scale, 1);
        assert_eq!(config.title, "swatch");
    }
}
