//! The film detail screen

use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

use super::poster_glyph;
use crate::state::data::Film;
use crate::state::edit::EditOutcome;
use crate::Message;

/// Detail view for one film.
///
/// `notice` is the edit outcome consumed on re-entry: a save shows a
/// confirmation, a cancel shows a "not edited" notice, and `Unset` shows
/// nothing at all.
pub fn view(film: &Film, notice: EditOutcome) -> Element<'_, Message> {
    let mut details: Column<Message> = column![
        text(format!("Nombre: {}", film.display_title())),
        text(format!(
            "Director: {}",
            film.director.as_deref().unwrap_or("N/A")
        )),
        text(format!("Año de estreno: {}", film.year)),
        text(format!("Género: {}", film.genre)),
        text(format!("Formato: {}", film.format)),
        text(format!(
            "Notas: {}",
            film.comments.as_deref().unwrap_or("N/A")
        )),
    ]
    .spacing(8);

    match notice {
        EditOutcome::Saved => {
            details = details.push(text("La película ha sido guardada").size(16));
        }
        EditOutcome::Cancelled => {
            details = details.push(text("No se ha editado").size(16));
        }
        EditOutcome::Unset => {}
    }

    let actions = column![
        button("Ver en IMDB")
            .on_press_maybe(film.imdb_url.clone().map(Message::OpenImdb))
            .padding(10),
        button("Editar película")
            .on_press(Message::EditPressed(film.id))
            .padding(10),
        button("Volver a la página principal")
            .on_press(Message::BackToList)
            .padding(10),
    ]
    .spacing(8);

    let content = row![
        text(poster_glyph(film.poster)).size(120),
        column![details, actions].spacing(24),
    ]
    .spacing(24)
    .align_y(Alignment::Start)
    .padding(24);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
