// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

//! A small movie browser written in Xilem.
//!
//! Features:
//!
//! - A Home tab listing every movie of the built-in catalog, with expandable details.
//! - A heart on each movie to add it to, or remove it from, the favorites.
//! - A Favorites tab listing only the favorites, in the order they were added.
//!
//! All state lives in a [`marquee_model::AppModel`], which Xilem hands to
//! [`app_logic`] to rebuild the views after every tap.

use marquee_model::{AppModel, FavoriteChange};
use xilem::style::Style as _;
use xilem::view::{FlexExt, flex_col, portal};
use xilem::winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WidgetView, WindowOptions, Xilem};

mod components;

use crate::components::{movie_list, tab_row};

/// Execute the app in the given winit event loop.
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    let mut model = AppModel::default();
    log_favorite_changes(&mut model);
    tracing::info!(
        movies = model.catalog().len(),
        "Starting Marquee with the built-in catalog"
    );

    Xilem::new_simple(model, app_logic, WindowOptions::new("Marquee")).run_in(event_loop)
}

/// Log each change to the favorites.
///
/// The event loop installs Masonry's default subscriber, so these honour `RUST_LOG`.
fn log_favorite_changes(model: &mut AppModel) {
    model
        .favorites_mut()
        .subscribe(|change: &FavoriteChange| {
            tracing::info!(
                id = %change.id,
                is_favorite = change.is_favorite,
                "Favorites changed"
            );
        });
}

/// The root view: the tab row above the scrollable list of the selected tab.
pub fn app_logic(model: &mut AppModel) -> impl WidgetView<AppModel> + use<> {
    flex_col((tab_row(model.tab()), portal(movie_list(model)).flex(1.))).padding(20.)
}
