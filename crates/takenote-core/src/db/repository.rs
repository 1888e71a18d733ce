//! Note and category repositories

use libsql::{params, Connection, Row, Value};

use crate::error::{Error, Result};
use crate::models::{Category, CategoryId, Note};

const NOTE_COLUMNS: &str =
    "id, text, created, last_updated, category, scratchpad, trash, favorite";

/// Trait for note storage operations (async)
#[allow(async_fn_in_trait)]
pub trait NoteRepository {
    /// List every stored note, most recently updated first
    async fn list(&self) -> Result<Vec<Note>>;

    /// Replace the stored notes with `notes`
    async fn replace_all(&self, notes: &[Note]) -> Result<()>;
}

/// Trait for category storage operations (async)
#[allow(async_fn_in_trait)]
pub trait CategoryRepository {
    /// List every stored category in its saved order
    async fn list(&self) -> Result<Vec<Category>>;

    /// Replace the stored categories with `categories`, keeping their order
    async fn replace_all(&self, categories: &[Category]) -> Result<()>;
}

/// libSQL implementation of `NoteRepository`
pub struct LibSqlNoteRepository<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlNoteRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a note from a database row
    fn parse_note(row: &Row) -> Result<Note> {
        let id: String = row.get(0)?;
        let category = match row.get_value(4)? {
            Value::Text(category) => Some(CategoryId::from(category.as_str())),
            _ => None,
        };
        Ok(Note {
            id: id
                .parse()
                .map_err(|_| Error::InvalidInput(format!("Invalid note id: {id}")))?,
            text: row.get(1)?,
            created: row.get(2)?,
            last_updated: row.get(3)?,
            category,
            scratchpad: row.get::<i32>(5)? != 0,
            trash: row.get::<i32>(6)? != 0,
            favorite: row.get::<i32>(7)? != 0,
        })
    }

    async fn insert(&self, note: &Note) -> Result<()> {
        let category = note
            .category
            .as_ref()
            .map_or(Value::Null, |id| Value::Text(id.to_string()));

        self.conn
            .execute(
                &format!("INSERT INTO notes ({NOTE_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"),
                params![
                    note.id.as_str(),
                    note.text.clone(),
                    note.created,
                    note.last_updated,
                    category,
                    i32::from(note.scratchpad),
                    i32::from(note.trash),
                    i32::from(note.favorite)
                ],
            )
            .await?;
        Ok(())
    }
}

impl NoteRepository for LibSqlNoteRepository<'_> {
    async fn list(&self) -> Result<Vec<Note>> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY last_updated DESC"),
                (),
            )
            .await?;

        let mut notes = Vec::new();
        while let Some(row) = rows.next().await? {
            notes.push(Self::parse_note(&row)?);
        }
        Ok(notes)
    }

    async fn replace_all(&self, notes: &[Note]) -> Result<()> {
        self.conn.execute("DELETE FROM notes", ()).await?;
        for note in notes {
            self.insert(note).await?;
        }
        Ok(())
    }
}

/// libSQL implementation of `CategoryRepository`
pub struct LibSqlCategoryRepository<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlCategoryRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for LibSqlCategoryRepository<'_> {
    async fn list(&self) -> Result<Vec<Category>> {
        let mut rows = self
            .conn
            .query("SELECT id, name FROM categories ORDER BY position ASC", ())
            .await?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next().await? {
            let id: String = row.get(0)?;
            categories.push(Category {
                id: CategoryId::from(id.as_str()),
                name: row.get(1)?,
            });
        }
        Ok(categories)
    }

    async fn replace_all(&self, categories: &[Category]) -> Result<()> {
        self.conn.execute("DELETE FROM categories", ()).await?;
        for (position, category) in (0_i64..).zip(categories) {
            self.conn
                .execute(
                    "INSERT INTO categories (id, name, position) VALUES (?, ?, ?)",
                    params![category.id.to_string(), category.name.clone(), position],
                )
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::db::Database;

    async fn setup() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_replace_and_list_notes() {
        let db = setup().await;
        let repo = LibSqlNoteRepository::new(db.connection());

        let mut older = Note::new("older");
        older.last_updated = 1;
        let mut newer = Note::new("newer");
        newer.last_updated = 2;
        newer.favorite = true;
        newer.category = Some(CategoryId::from("work"));

        repo.replace_all(&[older.clone(), newer.clone()]).await.unwrap();

        let notes = repo.list().await.unwrap();
        assert_eq!(notes, vec![newer, older]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_replace_removes_missing_notes() {
        let db = setup().await;
        let repo = LibSqlNoteRepository::new(db.connection());

        let kept = Note::new("kept");
        let removed = Note::new("removed");
        repo.replace_all(&[kept.clone(), removed.clone()]).await.unwrap();
        repo.replace_all(std::slice::from_ref(&kept)).await.unwrap();

        assert_eq!(repo.list().await.unwrap(), vec![kept]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_flags_roundtrip() {
        let db = setup().await;
        let repo = LibSqlNoteRepository::new(db.connection());

        let mut trashed = Note::new_scratchpad("scratch");
        trashed.trash = true;
        repo.replace_all(std::slice::from_ref(&trashed)).await.unwrap();

        let fetched = repo.list().await.unwrap().remove(0);
        assert!(fetched.scratchpad);
        assert!(fetched.trash);
        assert!(!fetched.favorite);
        assert!(fetched.category.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_categories_keep_order() {
        let db = setup().await;
        let repo = LibSqlCategoryRepository::new(db.connection());

        let categories = vec![
            Category::new("Work"),
            Category::new("Personal"),
            Category::new("Archive"),
        ];
        repo.replace_all(&categories).await.unwrap();
        assert_eq!(repo.list().await.unwrap(), categories);

        repo.replace_all(&categories[1..]).await.unwrap();
        assert_eq!(repo.list().await.unwrap(), categories[1..].to_vec());
    }
}
