// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use hashbrown::HashSet;
use tracing::debug;

use crate::{Catalog, FavoritesStore, ModelError, Movie, MovieId, Tab};

/// Everything the app renders: the favorites, the selected tab,
/// and which movie rows have their details expanded.
///
/// This is the single owner of mutable app state. The UI reads it to build each
/// frame and changes it only through these methods.
#[derive(Debug)]
pub struct AppModel {
    favorites: FavoritesStore,
    tab: Tab,
    expanded: HashSet<MovieId>,
}

impl AppModel {
    /// A model over `catalog` with no favorites, showing the [`Tab::Home`] list.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            favorites: FavoritesStore::new(catalog),
            tab: Tab::Home,
            expanded: HashSet::new(),
        }
    }

    /// The catalog being browsed.
    pub fn catalog(&self) -> &Catalog {
        self.favorites.catalog()
    }

    /// The favorites store.
    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// The favorites store, e.g. to [subscribe](FavoritesStore::subscribe) to it.
    pub fn favorites_mut(&mut self) -> &mut FavoritesStore {
        &mut self.favorites
    }

    /// The currently selected tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switch to `tab`.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            debug!(tab = tab.title(), "Selected tab");
            self.tab = tab;
        }
    }

    /// The movies of the selected tab, in display order.
    pub fn visible_movies(&self) -> Vec<&Movie> {
        match self.tab {
            Tab::Home => self.catalog().list_all().iter().collect(),
            Tab::Favorites => self.favorites.list_favorites(),
        }
    }

    /// Whether `id` is currently a favorite.
    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.favorites.is_favorite(id)
    }

    /// See [`FavoritesStore::toggle_favorite`].
    pub fn toggle_favorite(&mut self, id: MovieId) -> Result<bool, ModelError> {
        self.favorites.toggle_favorite(id)
    }

    /// Whether the details of `id` are shown.
    pub fn details_expanded(&self, id: MovieId) -> bool {
        self.expanded.contains(&id)
    }

    /// Show the details of `id` if hidden, otherwise hide them.
    ///
    /// Returns whether the details are shown afterwards.
    pub fn toggle_details(&mut self, id: MovieId) -> Result<bool, ModelError> {
        self.catalog().resolve(id)?;
        let expanded = if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        };
        debug!(%id, expanded, "Toggled movie details");
        Ok(expanded)
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }
}
