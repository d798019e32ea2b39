//! The in-memory film catalog
//!
//! The Catalog owns the authoritative list of films for the lifetime of the
//! process. There is no persistence: the store is seeded with three records
//! at construction and everything else is in-memory mutation.

use chrono::{Datelike, Utc};
use thiserror::Error;

use super::data::{Film, FilmDraft, Format, Genre, PosterId};

/// Year of the first motion picture; nothing in the catalog predates it.
pub const MIN_YEAR: i32 = 1888;

/// Recoverable catalog errors, surfaced to the UI as typed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No record with the requested id exists in the store.
    #[error("no film with id {0}")]
    NotFound(u32),
    /// Release year outside the accepted range (1888 ..= current year + 5).
    #[error("year {0} is outside the accepted range")]
    InvalidYear(i32),
}

/// The catalog store
///
/// Films are kept in insertion order and identified by an id assigned from
/// a monotonically increasing counter owned by the store. The counter is
/// deliberately decoupled from the list length so ids stay unique even if
/// a delete operation is ever added.
#[derive(Debug)]
pub struct Catalog {
    films: Vec<Film>,
    next_id: u32,
}

impl Catalog {
    /// Create a catalog pre-populated with the three seed films.
    pub fn new() -> Self {
        let mut catalog = Catalog {
            films: Vec::new(),
            next_id: 0,
        };
        for draft in seed_films() {
            catalog.insert(draft);
        }
        catalog
    }

    /// All films, in insertion order. Read-only view: callers cannot
    /// mutate the store through it.
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// Number of films in the catalog
    pub fn film_count(&self) -> usize {
        self.films.len()
    }

    /// Look up a film by id.
    pub fn get(&self, id: u32) -> Result<&Film, CatalogError> {
        self.films
            .iter()
            .find(|film| film.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Append a new film and return the stored record with its assigned id.
    pub fn add(&mut self, draft: FilmDraft) -> Result<Film, CatalogError> {
        validate(&draft)?;
        Ok(self.insert(draft))
    }

    /// Replace every mutable field of the film matching `id`.
    ///
    /// The id and the record's position in the list never change. The
    /// replacement is all-or-nothing: the draft is validated up front and
    /// the record is overwritten in a single assignment, so readers never
    /// observe a partially-updated film.
    pub fn update(&mut self, id: u32, draft: FilmDraft) -> Result<Film, CatalogError> {
        validate(&draft)?;
        let film = self
            .films
            .iter_mut()
            .find(|film| film.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        *film = materialize(id, draft);
        Ok(film.clone())
    }

    fn insert(&mut self, draft: FilmDraft) -> Film {
        let id = self.next_id;
        self.next_id += 1;
        let film = materialize(id, draft);
        self.films.push(film.clone());
        film
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn materialize(id: u32, draft: FilmDraft) -> Film {
    Film {
        id,
        title: draft.title,
        director: draft.director,
        year: draft.year,
        genre: draft.genre,
        format: draft.format,
        imdb_url: draft.imdb_url,
        comments: draft.comments,
        poster: draft.poster,
    }
}

fn validate(draft: &FilmDraft) -> Result<(), CatalogError> {
    let max_year = Utc::now().year() + 5;
    if draft.year < MIN_YEAR || draft.year > max_year {
        return Err(CatalogError::InvalidYear(draft.year));
    }
    Ok(())
}

/// The three records every catalog starts with.
fn seed_films() -> [FilmDraft; 3] {
    [
        FilmDraft {
            title: Some("Harry Potter y la piedra filosofal".to_string()),
            director: Some("Chris Columbus".to_string()),
            year: 2001,
            genre: Genre::Action,
            format: Format::Dvd,
            imdb_url: Some("http://www.imdb.com/title/tt0241527".to_string()),
            comments: Some("Una aventura mágica en Hogwarts.".to_string()),
            poster: PosterId(1),
        },
        FilmDraft {
            title: Some("Regreso al futuro".to_string()),
            director: Some("Robert Zemeckis".to_string()),
            year: 1985,
            genre: Genre::SciFi,
            format: Format::Digital,
            imdb_url: Some("http://www.imdb.com/title/tt0088763".to_string()),
            comments: Some("Una aventura de viajes en el tiempo.".to_string()),
            poster: PosterId(2),
        },
        FilmDraft {
            title: Some("El rey león".to_string()),
            director: Some("Roger Allers, Rob Minkoff".to_string()),
            year: 1994,
            genre: Genre::Action,
            format: Format::BluRay,
            imdb_url: Some("http://www.imdb.com/title/tt0110357".to_string()),
            comments: Some("Una historia de crecimiento y responsabilidad.".to_string()),
            poster: PosterId(3),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, year: i32) -> FilmDraft {
        FilmDraft {
            title: Some(title.to_string()),
            director: None,
            year,
            genre: Genre::Drama,
            format: Format::Digital,
            imdb_url: None,
            comments: None,
            poster: PosterId::PLACEHOLDER,
        }
    }

    #[test]
    fn test_seeds_three_films() {
        let catalog = Catalog::new();

        assert_eq!(catalog.film_count(), 3);
        let first = &catalog.films()[0];
        assert_eq!(
            first.title.as_deref(),
            Some("Harry Potter y la piedra filosofal")
        );
        assert_eq!(first.format, Format::Dvd);
        assert_eq!(first.genre, Genre::Action);
    }

    #[test]
    fn test_add_assigns_strictly_increasing_ids() {
        let mut catalog = Catalog::new();

        let mut last_id = None;
        for i in 0..5 {
            let film = catalog.add(draft(&format!("Film {i}"), 2000 + i)).unwrap();
            if let Some(last) = last_id {
                assert!(film.id > last);
            }
            last_id = Some(film.id);
        }
    }

    #[test]
    fn test_get_after_add_returns_equal_record() {
        let mut catalog = Catalog::new();

        let added = catalog.add(draft("X", 1999)).unwrap();
        assert_eq!(added.id, 3);
        assert_eq!(catalog.get(added.id).unwrap(), &added);
    }

    #[test]
    fn test_update_replaces_all_fields_and_keeps_position() {
        let mut catalog = Catalog::new();

        let patch = FilmDraft {
            title: Some("Regreso al futuro II".to_string()),
            director: Some("Robert Zemeckis".to_string()),
            year: 1989,
            genre: Genre::Comedy,
            format: Format::BluRay,
            imdb_url: None,
            comments: None,
            poster: PosterId(2),
        };
        let updated = catalog.update(1, patch.clone()).unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, patch.title);
        assert_eq!(updated.year, 1989);
        assert_eq!(updated.genre, Genre::Comedy);
        assert_eq!(updated.format, Format::BluRay);
        assert_eq!(updated.imdb_url, None);
        assert_eq!(updated.comments, None);

        // Position in the list is unchanged
        assert_eq!(catalog.films()[1].id, 1);
        assert_eq!(catalog.get(1).unwrap(), &updated);
    }

    #[test]
    fn test_update_missing_id_leaves_store_unchanged() {
        let mut catalog = Catalog::new();
        let before = catalog.films().to_vec();

        let result = catalog.update(99, draft("Ghost", 2000));

        assert_eq!(result, Err(CatalogError::NotFound(99)));
        assert_eq!(catalog.films(), &before[..]);
    }

    #[test]
    fn test_get_missing_id_is_not_found() {
        let catalog = Catalog::new();
        assert_eq!(catalog.get(42), Err(CatalogError::NotFound(42)));
    }

    #[test]
    fn test_rejects_out_of_range_year() {
        let mut catalog = Catalog::new();

        assert_eq!(
            catalog.add(draft("Too early", 1800)),
            Err(CatalogError::InvalidYear(1800))
        );
        assert_eq!(
            catalog.update(0, draft("Too late", 9999)),
            Err(CatalogError::InvalidYear(9999))
        );
        assert_eq!(catalog.film_count(), 3);
    }

    #[test]
    fn test_films_keep_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.add(draft("A", 2001)).unwrap();
        catalog.add(draft("B", 2002)).unwrap();

        let ids: Vec<u32> = catalog.films().iter().map(|film| film.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_optional_fields_stay_absent() {
        let mut catalog = Catalog::new();

        let film = catalog
            .add(FilmDraft {
                title: None,
                director: None,
                year: 2020,
                genre: Genre::Horror,
                format: Format::Dvd,
                imdb_url: None,
                comments: None,
                poster: PosterId::PLACEHOLDER,
            })
            .unwrap();

        assert_eq!(film.title, None);
        assert_eq!(film.display_title(), "<Sin título>");
    }
}
