//! UI screens
//!
//! Pure presentation: each screen builds an iced element tree from
//! read-only views of the catalog and the consumed edit outcome. All
//! mutation flows back through [`crate::Message`].

pub mod about;
pub mod film_data;
pub mod film_edit;
pub mod film_list;

use crate::state::data::PosterId;

/// Stand-in artwork for a poster handle.
///
/// The bundled drawables of the original app are out of scope, so posters
/// render as an oversized glyph instead of a bitmap.
pub fn poster_glyph(poster: PosterId) -> &'static str {
    match poster.0 {
        1 => "🪄",
        2 => "🕰️",
        3 => "🦁",
        _ => "🎞️",
    }
}
