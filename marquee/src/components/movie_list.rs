// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

use marquee_model::{AppModel, Movie, Tab};
use xilem::core::one_of::Either;
use xilem::style::Style as _;
use xilem::view::{FlexExt, flex_col, flex_row, label, prose, text_button};
use xilem::{FontWeight, WidgetView};

use super::{favorite_button, toggle_details};

const NO_FAVORITES: &str = "No favorites yet. Tap ♡ on the Home tab to add one.";

/// The list of the selected tab.
///
/// Home rows carry the details toggle; Favorites rows are just the title and heart.
pub(crate) fn movie_list(model: &AppModel) -> impl WidgetView<AppModel> + use<> {
    let tab = model.tab();
    let movies = model.visible_movies();
    let empty_message = (tab == Tab::Favorites && movies.is_empty()).then(|| prose(NO_FAVORITES));
    let rows = movies
        .into_iter()
        .map(|movie| match tab {
            Tab::Home => Either::A(movie_row(
                movie,
                model.is_favorite(movie.id),
                model.details_expanded(movie.id),
            )),
            Tab::Favorites => Either::B(favorite_row(movie)),
        })
        .collect::<Vec<_>>();
    flex_col((empty_message, rows))
}

fn title(movie: &Movie) -> impl WidgetView<AppModel> + use<> {
    label(movie.title.clone())
        .text_size(18.)
        .weight(FontWeight::BOLD)
}

fn movie_row(movie: &Movie, is_favorite: bool, expanded: bool) -> impl WidgetView<AppModel> + use<> {
    let id = movie.id;
    let header = flex_row((title(movie).flex(1.), favorite_button(id, is_favorite)));
    let details_label = if expanded { "Hide details" } else { "Show details" };
    let details_button = text_button(details_label, move |model: &mut AppModel| {
        toggle_details(model, id);
    });

    flex_col((
        header,
        prose(movie.subtitle()),
        details_button,
        expanded.then(|| details(movie)),
    ))
    .padding(10.)
}

fn favorite_row(movie: &Movie) -> impl WidgetView<AppModel> + use<> {
    // Only favorites are listed here, so the heart is always filled.
    flex_row((title(movie).flex(1.), favorite_button(movie.id, true))).padding(10.)
}

fn details(movie: &Movie) -> impl WidgetView<AppModel> + use<> {
    flex_col((
        prose(format!("Director: {}", movie.director)),
        prose(format!("Actors: {}", movie.actors)),
        prose(format!("Rating: {:.1}/10", movie.rating)),
        prose(movie.plot.clone()),
    ))
}
