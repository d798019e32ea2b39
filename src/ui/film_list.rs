//! The browsable film list

use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use super::poster_glyph;
use crate::state::data::Film;
use crate::Message;

/// One row per film, plus the "add" and "about" actions and a status line
/// standing in for the original app's toasts.
pub fn view<'a>(films: &'a [Film], status: &'a str) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(8);
    for film in films {
        rows = rows.push(
            button(
                row![
                    text(poster_glyph(film.poster)).size(40),
                    column![
                        text(film.display_title()).size(20),
                        text(format!(
                            "Director: {}",
                            film.director.as_deref().unwrap_or("N/A")
                        ))
                        .size(14),
                    ]
                    .spacing(4),
                ]
                .spacing(16)
                .align_y(Alignment::Center),
            )
            .on_press(Message::FilmPressed(film.id))
            .width(Length::Fill)
            .padding(12)
            .style(button::text),
        );
    }

    let header = row![
        text("Filmoteca").size(28),
        button("Añadir película").on_press(Message::AddFilm).padding(10),
        button("Acerca de").on_press(Message::OpenAbout).padding(10),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let content = column![
        header,
        scrollable(rows).height(Length::Fill),
        text(status).size(14),
    ]
    .spacing(16)
    .padding(20);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
