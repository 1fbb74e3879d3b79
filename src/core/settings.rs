use crate::domain::model::{UserSettings, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

pub const SETTINGS_KEY: &str = "UserSettings";

impl Validate for UserSettings {
    fn validate(&self) -> Result<()> {
        validate_range("fontSize", self.font_size, MIN_FONT_SIZE, MAX_FONT_SIZE)
    }
}

pub struct SettingsStore<S: Storage> {
    storage: S,
}

impl<S: Storage> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Never fails: missing or unreadable settings load as defaults.
    pub async fn load(&self) -> UserSettings {
        let data = match self.storage.read(SETTINGS_KEY).await {
            Ok(Some(data)) => data,
            Ok(None) => return UserSettings::default(),
            Err(e) => {
                tracing::debug!("Could not read settings, using defaults: {}", e);
                return UserSettings::default();
            }
        };

        match serde_json::from_slice::<serde_json::Value>(&data) {
            Ok(value) => UserSettings::from_json_value(&value),
            Err(e) => {
                tracing::debug!("Stored settings are not valid JSON, using defaults: {}", e);
                UserSettings::default()
            }
        }
    }

    pub async fn save(&self, settings: &UserSettings) -> Result<()> {
        settings.validate()?;
        let encoded = serde_json::to_vec(settings)?;
        self.storage.write(SETTINGS_KEY, &encoded).await?;
        tracing::info!("💾 Settings saved");
        Ok(())
    }
}
