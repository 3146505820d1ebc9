// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

//! The views making up Marquee's window.

use marquee_model::{AppModel, MovieId, Tab};
use xilem::WidgetView;
use xilem::view::{checkbox, flex_row, text_button};

mod movie_list;

pub(crate) use movie_list::movie_list;

/// The heart shown next to each movie; filled for favorites.
pub(crate) fn heart(is_favorite: bool) -> &'static str {
    if is_favorite { "♥" } else { "♡" }
}

/// A heart button which toggles whether `id` is a favorite.
pub(crate) fn favorite_button(
    id: MovieId,
    is_favorite: bool,
) -> impl WidgetView<AppModel> + use<> {
    text_button(heart(is_favorite), move |model: &mut AppModel| {
        toggle_favorite(model, id);
    })
}

/// Toggle a favorite from a tap.
///
/// Every id shown in the UI comes from the catalog, so failure here means the
/// views and the model disagree. We log it rather than bring down the app.
pub(crate) fn toggle_favorite(model: &mut AppModel, id: MovieId) {
    if let Err(err) = model.toggle_favorite(id) {
        tracing::error!("Tapped favorite for a movie the model doesn't know: {err}");
    }
}

/// Expand or collapse a movie's details from a tap.
pub(crate) fn toggle_details(model: &mut AppModel, id: MovieId) {
    if let Err(err) = model.toggle_details(id) {
        tracing::error!("Tapped details for a movie the model doesn't know: {err}");
    }
}

/// The row of tabs along the top of the window.
///
/// Exactly one tab is checked; checking another one selects it, and unchecking
/// the current one leaves it selected.
pub(crate) fn tab_row(current: Tab) -> impl WidgetView<AppModel> + use<> {
    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| {
            // TODO: replace with combo-buttons once Xilem has them
            checkbox(tab.title(), current == tab, move |model: &mut AppModel, _| {
                model.select_tab(tab);
            })
        })
        .collect::<Vec<_>>();
    flex_row(tabs)
}
