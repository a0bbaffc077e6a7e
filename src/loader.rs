use crate::model::LoadError;
use crate::parser::{MovieListParser, Parser};
use crate::storage::SqliteStorage;
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads the award list at `path` and replaces the stored movies with it.
/// Returns the number of movies stored.
pub fn load_movie_list(path: &Path, storage: &mut SqliteStorage) -> Result<usize, LoadError> {
    info!("Loading movie list from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let movies = MovieListParser::new().parse(&content)?;
    let winners = movies.iter().filter(|m| m.winner).count();
    storage.replace_movies(&movies)?;
    let stored = storage.count_movies()?;

    info!("Loaded {} movies, {} winners", stored, winners);
    Ok(stored)
}
