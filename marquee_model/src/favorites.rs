// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::Arc;

use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::{Catalog, ModelError, Movie, MovieId};

/// A change to the favorites, as delivered to observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FavoriteChange {
    /// The movie which was toggled.
    pub id: MovieId,
    /// Whether the movie is a favorite now that the toggle has happened.
    pub is_favorite: bool,
}

/// Identifies an observer attached with [`FavoritesStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&FavoriteChange) + Send + Sync>;

/// The set of movies the user has marked as a favorite.
///
/// Favorites are kept in the order they were added, and each refers to a movie
/// of the store's [`Catalog`] by id.
/// The only way to change the set is [`toggle_favorite`](Self::toggle_favorite),
/// which informs every [subscribed](Self::subscribe) observer before it returns.
pub struct FavoritesStore {
    catalog: Arc<Catalog>,
    members: HashSet<MovieId>,
    order: Vec<MovieId>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl FavoritesStore {
    /// An empty store over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            members: HashSet::new(),
            order: Vec::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The catalog favorites are resolved against.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Whether `id` is currently a favorite.
    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.members.contains(&id)
    }

    /// Add `id` to the favorites if it isn't one, otherwise remove it.
    ///
    /// Returns whether the movie is a favorite afterwards.
    /// Observers are notified before this returns.
    ///
    /// Fails with [`ModelError::InvalidMovieReference`] if `id` isn't in the catalog,
    /// in which case nothing changes and no observer is called.
    pub fn toggle_favorite(&mut self, id: MovieId) -> Result<bool, ModelError> {
        if !self.catalog.contains(id) {
            return Err(ModelError::InvalidMovieReference(id));
        }
        let is_favorite = if self.members.remove(&id) {
            self.order.retain(|member| *member != id);
            false
        } else {
            self.members.insert(id);
            self.order.push(id);
            true
        };
        debug!(%id, is_favorite, "Toggled favorite");

        let change = FavoriteChange { id, is_favorite };
        for (subscription, observer) in &mut self.observers {
            trace!(?subscription, "Notifying favorites observer");
            observer(&change);
        }
        Ok(is_favorite)
    }

    /// The favorite movies, oldest addition first.
    pub fn list_favorites(&self) -> Vec<&Movie> {
        self.order
            .iter()
            .filter_map(|&id| self.catalog.get(id))
            .collect()
    }

    /// The ids of the favorite movies, oldest addition first.
    pub fn favorite_ids(&self) -> &[MovieId] {
        &self.order
    }

    /// The number of favorites.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Attach an observer which is called after every successful toggle.
    ///
    /// Observers run in the order they were subscribed.
    /// They must be `Send + Sync` so that the store can live in Xilem's app state.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&FavoriteChange) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let subscription = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Detach an observer.
    ///
    /// Returns `false` if it had already been detached.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("catalog", &self.catalog.len())
            .field("members", &self.members)
            .field("order", &self.order)
            .field("observers", &self.observers.len())
            .field("next_subscription", &self.next_subscription)
            .finish()
    }
}
