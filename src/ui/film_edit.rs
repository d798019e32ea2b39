//! The film edit screen and its form buffer

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Element, Length};

use super::poster_glyph;
use crate::state::data::{Film, FilmDraft, Format, Genre, PosterId};
use crate::Message;

/// Editable text buffers and picker selections for one edit session.
///
/// This is component-local presentation state: the store only ever sees a
/// complete [`FilmDraft`] built from it when the user saves.
#[derive(Debug, Clone)]
pub struct FilmForm {
    pub title: String,
    pub director: String,
    pub year: String,
    pub genre: Genre,
    pub format: Format,
    pub imdb_url: String,
    pub comments: String,
    pub poster: PosterId,
}

impl FilmForm {
    /// Fill the buffers from the record being edited.
    pub fn from_film(film: &Film) -> Self {
        Self {
            title: film.title.clone().unwrap_or_default(),
            director: film.director.clone().unwrap_or_default(),
            year: film.year.to_string(),
            genre: film.genre,
            format: film.format,
            imdb_url: film.imdb_url.clone().unwrap_or_default(),
            comments: film.comments.clone().unwrap_or_default(),
            poster: film.poster,
        }
    }

    /// Build the draft the store will be asked to commit.
    ///
    /// Returns `None` when the year buffer does not parse; blank text
    /// fields become absent values, not empty strings.
    pub fn to_draft(&self) -> Option<FilmDraft> {
        let year = self.year.trim().parse().ok()?;
        Some(FilmDraft {
            title: optional(&self.title),
            director: optional(&self.director),
            year,
            genre: self.genre,
            format: self.format,
            imdb_url: optional(&self.imdb_url),
            comments: optional(&self.comments),
            poster: self.poster,
        })
    }
}

fn optional(buffer: &str) -> Option<String> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn view<'a>(form: &'a FilmForm, status: &'a str) -> Element<'a, Message> {
    let fields = column![
        text(poster_glyph(form.poster)).size(80),
        text_input("Título de la película", &form.title)
            .on_input(Message::TitleChanged)
            .padding(10),
        text_input("Director de la película", &form.director)
            .on_input(Message::DirectorChanged)
            .padding(10),
        text_input("Año de estreno", &form.year)
            .on_input(Message::YearChanged)
            .padding(10),
        row![
            text("Género"),
            pick_list(Genre::ALL, Some(form.genre), Message::GenreSelected),
        ]
        .spacing(16),
        row![
            text("Formato"),
            pick_list(Format::ALL, Some(form.format), Message::FormatSelected),
        ]
        .spacing(16),
        text_input("Enlace a IMDB", &form.imdb_url)
            .on_input(Message::ImdbUrlChanged)
            .padding(10),
        text_input("Comentarios", &form.comments)
            .on_input(Message::CommentsChanged)
            .padding(10),
        row![
            button("Guardar").on_press(Message::SaveEdit).padding(10),
            button("Cancelar").on_press(Message::CancelEdit).padding(10),
            button("Volver").on_press(Message::AbandonEdit).padding(10),
        ]
        .spacing(16),
        text(status).size(14),
    ]
    .spacing(12)
    .padding(20);

    container(scrollable(fields))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FilmForm {
        FilmForm {
            title: "  Dune  ".to_string(),
            director: String::new(),
            year: "2021".to_string(),
            genre: Genre::SciFi,
            format: Format::Digital,
            imdb_url: String::new(),
            comments: "   ".to_string(),
            poster: PosterId::PLACEHOLDER,
        }
    }

    #[test]
    fn test_blank_buffers_become_absent_fields() {
        let draft = form().to_draft().unwrap();

        assert_eq!(draft.title.as_deref(), Some("Dune"));
        assert_eq!(draft.director, None);
        assert_eq!(draft.comments, None);
        assert_eq!(draft.year, 2021);
    }

    #[test]
    fn test_unparseable_year_yields_no_draft() {
        let mut bad = form();
        bad.year = "mil novecientos".to_string();
        assert!(bad.to_draft().is_none());
    }
}
