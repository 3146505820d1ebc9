// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::MovieId;

/// Errors reported by the movie model.
///
/// A correctly wired UI only ever hands out ids drawn from the catalog,
/// so in practice these indicate a programming error in the caller.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// The id does not name a movie in the catalog.
    #[error("no movie with id {0} exists in the catalog")]
    InvalidMovieReference(MovieId),
    /// Two catalog entries were given the same id.
    #[error("movie id {0} appears more than once in the catalog")]
    DuplicateMovieId(MovieId),
    /// The tab-selection signal named a tab which doesn't exist.
    #[error("there is no tab with index {0}")]
    InvalidTabIndex(usize),
}
