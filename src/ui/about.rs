//! The about screen

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

pub fn view() -> Element<'static, Message> {
    let content = column![
        text("Acerca de Filmoteca").size(28),
        text("Esta aplicación está creada por Cristian"),
        button("Ir al sitio web").on_press(Message::OpenWebsite).padding(10),
        button("Obtener soporte").on_press(Message::ContactSupport).padding(10),
        button("Volver").on_press(Message::BackToList).padding(10),
    ]
    .spacing(16)
    .padding(40)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
