use crate::model::{Movie, StorageError, WinningRow};
use rusqlite::{params, Connection};
use tracing::info;

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens the database (`:memory:` is accepted) and creates the movies table.
    pub fn new(db_path: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS movies (
                year INTEGER NOT NULL,
                title TEXT NOT NULL,
                studios TEXT NOT NULL,
                producers TEXT NOT NULL,
                winner INTEGER NOT NULL
            );
            ",
        )?;

        Ok(Self { conn })
    }

    /// Replaces the whole award list in one transaction.
    pub fn replace_movies(&mut self, movies: &[Movie]) -> Result<usize, StorageError> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM movies", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO movies (year, title, studios, producers, winner)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for movie in movies {
                stmt.execute(params![
                    movie.year,
                    &movie.title,
                    &movie.studios,
                    &movie.producers,
                    movie.winner,
                ])?;
            }
        }
        tx.commit()?;

        info!("Stored {} movies (replaced {})", movies.len(), removed);
        Ok(movies.len())
    }

    pub fn count_movies(&self) -> Result<usize, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Returns year and raw producer string of every winning movie, in load order.
    pub fn fetch_winning_records(&self) -> Result<Vec<WinningRow>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT year, producers FROM movies WHERE winner = 1 ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(WinningRow {
                year: row.get(0)?,
                recipients: row.get(1)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        Ok(records)
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}
