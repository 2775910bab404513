use crate::error::{KochbuchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ordner mit den Rezept-Markdowndateien.
    pub recipes_dir: PathBuf,
    /// Pfad der erzeugten Datendatei.
    pub data_path: PathBuf,
    /// Bindewort zwischen Zutaten-Alternativen im gerenderten Text.
    pub connector: String,
    /// Zutaten, die immer als vorhanden gelten.
    pub assumed_ingredients: Vec<String>,
    /// Verzögerung der Filteraktualisierung.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipes_dir: PathBuf::from("recipes"),
            data_path: PathBuf::from("assets/data.json"),
            connector: "oder".to_string(),
            assumed_ingredients: vec!["Salz".to_string(), "Pfeffer".to_string()],
            debounce_ms: 500,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| KochbuchError::Config("Home-Verzeichnis nicht gefunden".into()))?;
        Ok(home.join(".config").join("kochbuch").join("config.json"))
    }

    pub fn set_recipes_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.recipes_dir = dir;
        self.save()
    }
}
