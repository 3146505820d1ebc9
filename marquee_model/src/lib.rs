// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

//! The data model behind Marquee, a small movie browser.
//!
//! The model is deliberately independent of any UI toolkit. It has three parts:
//!
//! * A [`Catalog`], the fixed, ordered list of [`Movie`]s which can be browsed.
//! * A [`FavoritesStore`], the mutable set of movies the user has marked as a favorite.
//!   It remembers the order in which favorites were added, and notifies attached
//!   observers synchronously whenever a favorite is toggled.
//! * An [`AppModel`], which owns the favorites store alongside the currently selected [`Tab`],
//!   and is the state a UI layer renders.
//!
//! Movies are identified by their [`MovieId`], never by comparing whole records.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use marquee_model::{Catalog, FavoritesStore, Movie, MovieId};
//!
//! let catalog = Catalog::new([
//!     Movie::new(MovieId::new(1), "Avatar"),
//!     Movie::new(MovieId::new(2), "Up"),
//! ])?;
//! let mut favorites = FavoritesStore::new(Arc::new(catalog));
//!
//! favorites.toggle_favorite(MovieId::new(2))?;
//! favorites.toggle_favorite(MovieId::new(1))?;
//!
//! let titles: Vec<_> = favorites
//!     .list_favorites()
//!     .into_iter()
//!     .map(|movie| movie.title.as_str())
//!     .collect();
//! assert_eq!(titles, ["Up", "Avatar"]);
//! # Ok::<(), marquee_model::ModelError>(())
//! ```

mod app_model;
mod catalog;
mod error;
mod favorites;
mod movie;
mod tab;

pub use app_model::AppModel;
pub use catalog::Catalog;
pub use error::ModelError;
pub use favorites::{FavoriteChange, FavoritesStore, SubscriptionId};
pub use movie::{Movie, MovieId};
pub use tab::Tab;
