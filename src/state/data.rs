//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the catalog store and the UI layer.

use serde::{Deserialize, Serialize};

/// Opaque handle to a bundled poster asset.
///
/// The store only carries the handle along with the record; how it is
/// rendered (and what asset it maps to) is entirely up to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PosterId(pub u32);

impl PosterId {
    /// Generic placeholder artwork for films added at runtime.
    pub const PLACEHOLDER: PosterId = PosterId(0);
}

/// Film genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    Action,
    Comedy,
    Drama,
    SciFi,
    Horror,
}

impl Genre {
    /// All genres, in picker order.
    pub const ALL: [Genre; 5] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::SciFi,
        Genre::Horror,
    ];
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::SciFi => "Sci-Fi",
            Genre::Horror => "Horror",
        };
        write!(f, "{label}")
    }
}

/// Physical or digital format a film is owned in.
///
/// The original pick list also offered "VHS", but no stored record ever
/// used it; it is deliberately not a valid persisted value here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Format {
    #[default]
    Dvd,
    BluRay,
    Digital,
}

impl Format {
    /// All formats, in picker order.
    pub const ALL: [Format; 3] = [Format::Dvd, Format::BluRay, Format::Digital];
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Format::Dvd => "DVD",
            Format::BluRay => "Blu-ray",
            Format::Digital => "Digital",
        };
        write!(f, "{label}")
    }
}

/// A single film in the catalog
///
/// Optional text fields default to absent ("no value"), which is a valid,
/// displayable state distinct from empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    /// Unique catalog id, assigned by the store at creation time
    pub id: u32,
    /// Film title
    pub title: Option<String>,
    /// Director (or directors, comma separated)
    pub director: Option<String>,
    /// Release year
    pub year: i32,
    /// Genre
    pub genre: Genre,
    /// Owned format
    pub format: Format,
    /// Link to the film's IMDB page
    pub imdb_url: Option<String>,
    /// Free-form notes
    pub comments: Option<String>,
    /// Poster artwork handle
    pub poster: PosterId,
}

impl Film {
    /// Title for display, with a fallback for untitled records.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("<Sin título>")
    }
}

/// All mutable fields of a [`Film`] (everything but the id)
///
/// Drafts are what callers hand to the store: `add` turns a draft into a
/// new record, `update` replaces every mutable field of an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmDraft {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: i32,
    pub genre: Genre,
    pub format: Format,
    pub imdb_url: Option<String>,
    pub comments: Option<String>,
    pub poster: PosterId,
}

impl FilmDraft {
    /// The canned "new film" record appended by the list screen's
    /// "Añadir película" action.
    pub fn placeholder() -> Self {
        use chrono::Datelike;

        Self {
            title: Some("Nueva Película".to_string()),
            director: Some("Desconocido".to_string()),
            year: chrono::Utc::now().year(),
            genre: Genre::Action,
            format: Format::Dvd,
            imdb_url: Some("http://www.imdb.com".to_string()),
            comments: Some("Sin comentarios".to_string()),
            poster: PosterId::PLACEHOLDER,
        }
    }
}
