//! Settings repository implementation

use crate::error::Result;
use crate::models::{NotesSortKey, Settings};
use libsql::Connection;

/// Trait for settings storage operations (async)
#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    /// Load settings from the database
    async fn load(&self) -> Result<Settings>;

    /// Save settings to the database
    async fn save(&self, settings: &Settings) -> Result<()>;
}

/// libSQL implementation of `SettingsRepository`
pub struct LibSqlSettingsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlSettingsRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for LibSqlSettingsRepository<'_> {
    async fn load(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(value) = self.get_setting("dark_theme").await? {
            settings.dark_theme = parse_flag(&value);
        }

        if let Some(value) = self.get_setting("preview_markdown").await? {
            settings.preview_markdown = parse_flag(&value);
        }

        if let Some(value) = self.get_setting("sidebar_visible").await? {
            settings.sidebar_visible = parse_flag(&value);
        }

        if let Some(value) = self.get_setting("notes_sort").await? {
            settings.notes_sort = NotesSortKey::from_key(&value);
        }

        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        self.set_setting("dark_theme", flag(settings.dark_theme))
            .await?;
        self.set_setting("preview_markdown", flag(settings.preview_markdown))
            .await?;
        self.set_setting("sidebar_visible", flag(settings.sidebar_visible))
            .await?;
        self.set_setting("notes_sort", settings.notes_sort.as_key())
            .await?;
        Ok(())
    }
}

const SEEDED_KEY: &str = "seeded";

impl LibSqlSettingsRepository<'_> {
    /// Whether the first-launch notes were already written
    pub async fn is_seeded(&self) -> Result<bool> {
        Ok(self
            .get_setting(SEEDED_KEY)
            .await?
            .is_some_and(|value| parse_flag(&value)))
    }

    /// Record that the first-launch notes were written
    pub async fn mark_seeded(&self) -> Result<()> {
        self.set_setting(SEEDED_KEY, flag(true)).await
    }

    async fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let mut rows = self
            .conn
            .query("SELECT value FROM settings WHERE key = ?", [key])
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)",
                [key, value],
            )
            .await?;
        Ok(())
    }
}

const fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_load_default_settings() {
        let db = setup().await;
        let repo = LibSqlSettingsRepository::new(db.connection());

        let settings = repo.load().await.unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_save_and_load_settings() {
        let db = setup().await;
        let repo = LibSqlSettingsRepository::new(db.connection());

        let settings = Settings {
            dark_theme: true,
            preview_markdown: true,
            sidebar_visible: false,
            notes_sort: NotesSortKey::Title,
        };

        repo.save(&settings).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_seed_marker() {
        let db = setup().await;
        let repo = LibSqlSettingsRepository::new(db.connection());

        assert!(!repo.is_seeded().await.unwrap());
        repo.mark_seeded().await.unwrap();
        assert!(repo.is_seeded().await.unwrap());
        assert_eq!(repo.load().await.unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_flag_accepts_common_truthy_values() {
        for value in ["1", "true", " YES ", "on"] {
            assert!(parse_flag(value));
        }
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
