use iced::{Element, Task, Theme};

// Application modules
mod state;
mod ui;

use state::catalog::Catalog;
use state::data::FilmDraft;
use state::edit::{EditOutcome, EditSession, ResultChannel};
use ui::film_edit::FilmForm;

const WEBSITE_URL: &str = "https://www.campusdigitalfp.es/";
const SUPPORT_EMAIL: &str = "anadon_91@hotmail.com";
const SUPPORT_SUBJECT: &str = "Incidencia con Filmoteca";

/// The screen currently on display. Replaces the original app's
/// navigation host: exactly one screen is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    FilmList,
    /// Detail view; `notice` holds the edit outcome consumed on entry.
    FilmData { id: u32, notice: EditOutcome },
    FilmEdit { id: u32 },
    About,
}

/// Main application state
struct Filmoteca {
    /// The film catalog
    catalog: Catalog,
    /// Relay for edit outcomes across screen changes
    edit_results: ResultChannel,
    /// Token of the in-flight edit session, if any
    edit_session: Option<EditSession>,
    /// Form buffers while the edit screen is up
    form: Option<FilmForm>,
    /// Which screen is showing
    screen: Screen,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A row in the film list was pressed
    FilmPressed(u32),
    /// "Añadir película" was pressed on the list screen
    AddFilm,
    OpenAbout,
    BackToList,
    /// "Editar película" was pressed on the detail screen
    EditPressed(u32),
    // Edit form input
    TitleChanged(String),
    DirectorChanged(String),
    YearChanged(String),
    GenreSelected(state::data::Genre),
    FormatSelected(state::data::Format),
    ImdbUrlChanged(String),
    CommentsChanged(String),
    /// Commit the form and report `Saved`
    SaveEdit,
    /// Discard the form and report `Cancelled`
    CancelEdit,
    /// Leave the edit screen without reporting anything
    AbandonEdit,
    // External intents
    OpenImdb(String),
    OpenWebsite,
    ContactSupport,
}

impl Filmoteca {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let catalog = Catalog::new();
        println!("🎬 Filmoteca initialized with {} films", catalog.film_count());

        let status = format!("{} películas en la filmoteca", catalog.film_count());

        (
            Filmoteca {
                catalog,
                edit_results: ResultChannel::new(),
                edit_session: None,
                form: None,
                screen: Screen::FilmList,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilmPressed(id) => {
                self.screen = Screen::FilmData {
                    id,
                    notice: self.edit_results.consume_outcome(),
                };
            }
            Message::AddFilm => match self.catalog.add(FilmDraft::placeholder()) {
                Ok(film) => {
                    println!("🎬 Added film {}: {}", film.id, film.display_title());
                    self.status = "Película añadida".to_string();
                }
                Err(err) => {
                    self.status = format!("No se pudo añadir la película: {err}");
                }
            },
            Message::OpenAbout => {
                self.screen = Screen::About;
            }
            Message::BackToList => {
                self.screen = Screen::FilmList;
            }
            Message::EditPressed(id) => match self.catalog.get(id) {
                Ok(film) => {
                    self.form = Some(FilmForm::from_film(film));
                    self.edit_session = Some(self.edit_results.begin_edit());
                    self.screen = Screen::FilmEdit { id };
                }
                Err(err) => {
                    self.status = format!("No se pudo editar: {err}");
                }
            },
            Message::TitleChanged(value) => {
                if let Some(form) = &mut self.form {
                    form.title = value;
                }
            }
            Message::DirectorChanged(value) => {
                if let Some(form) = &mut self.form {
                    form.director = value;
                }
            }
            Message::YearChanged(value) => {
                // Numeric-only buffer, like the original's year field
                if let Some(form) = &mut self.form {
                    if value.is_empty() || value.parse::<i32>().is_ok() {
                        form.year = value;
                    }
                }
            }
            Message::GenreSelected(genre) => {
                if let Some(form) = &mut self.form {
                    form.genre = genre;
                }
            }
            Message::FormatSelected(format) => {
                if let Some(form) = &mut self.form {
                    form.format = format;
                }
            }
            Message::ImdbUrlChanged(value) => {
                if let Some(form) = &mut self.form {
                    form.imdb_url = value;
                }
            }
            Message::CommentsChanged(value) => {
                if let Some(form) = &mut self.form {
                    form.comments = value;
                }
            }
            Message::SaveEdit => {
                if let Screen::FilmEdit { id } = self.screen {
                    self.save_edit(id);
                }
            }
            Message::CancelEdit => {
                if let Screen::FilmEdit { id } = self.screen {
                    if let Some(session) = self.edit_session.take() {
                        self.edit_results
                            .complete_edit(session, EditOutcome::Cancelled);
                    }
                    self.return_to_detail(id);
                }
            }
            Message::AbandonEdit => {
                if let Screen::FilmEdit { id } = self.screen {
                    // Dropping the session token leaves the channel Unset.
                    self.edit_session = None;
                    self.return_to_detail(id);
                }
            }
            Message::OpenImdb(url) => {
                if let Err(err) = open_in_browser(&url) {
                    self.status = format!("No se pudo abrir el navegador: {err}");
                }
            }
            Message::OpenWebsite => {
                if let Err(err) = open_in_browser(WEBSITE_URL) {
                    self.status = format!("No se pudo abrir el navegador: {err}");
                }
            }
            Message::ContactSupport => {
                if let Err(err) = compose_email(SUPPORT_EMAIL, SUPPORT_SUBJECT) {
                    self.status = format!("No hay aplicación para mandar el correo: {err}");
                }
            }
        }

        Task::none()
    }

    fn save_edit(&mut self, id: u32) {
        let Some(draft) = self.form.as_ref().and_then(FilmForm::to_draft) else {
            self.status = "El año no es un número válido".to_string();
            return;
        };

        match self.catalog.update(id, draft) {
            Ok(film) => {
                println!("💾 Saved film {}: {}", film.id, film.display_title());
                if let Some(session) = self.edit_session.take() {
                    self.edit_results.complete_edit(session, EditOutcome::Saved);
                }
                self.return_to_detail(id);
            }
            Err(err) => {
                // Stay on the edit screen; the session is still in flight.
                self.status = format!("No se pudo guardar: {err}");
            }
        }
    }

    /// Pop back to the detail screen, consuming whatever outcome the edit
    /// flow left behind.
    fn return_to_detail(&mut self, id: u32) {
        self.form = None;
        self.status.clear();
        self.screen = Screen::FilmData {
            id,
            notice: self.edit_results.consume_outcome(),
        };
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::FilmList => ui::film_list::view(self.catalog.films(), &self.status),
            Screen::FilmData { id, notice } => match self.catalog.get(*id) {
                Ok(film) => ui::film_data::view(film, *notice),
                Err(_) => ui::film_list::view(self.catalog.films(), &self.status),
            },
            Screen::FilmEdit { .. } => match &self.form {
                Some(form) => ui::film_edit::view(form, &self.status),
                None => ui::film_list::view(self.catalog.films(), &self.status),
            },
            Screen::About => ui::about::view(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Filmoteca", Filmoteca::update, Filmoteca::view)
        .theme(Filmoteca::theme)
        .centered()
        .run_with(Filmoteca::new)
}

/// Open a URL with the platform's default handler.
fn open_in_browser(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "windows")]
    let child = std::process::Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn();

    #[cfg(target_os = "macos")]
    let child = std::process::Command::new("open").arg(url).spawn();

    #[cfg(all(unix, not(target_os = "macos")))]
    let child = std::process::Command::new("xdg-open").arg(url).spawn();

    child.map(|_| ())
}

/// Hand a pre-filled message off to the platform mail client.
fn compose_email(address: &str, subject: &str) -> std::io::Result<()> {
    let subject = subject.replace(' ', "%20");
    open_in_browser(&format!("mailto:{address}?subject={subject}"))
}
