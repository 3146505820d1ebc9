// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// The stable identifier of a [`Movie`] within its [`Catalog`](crate::Catalog).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieId(u32);

impl MovieId {
    /// Create an id from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw value of this id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single entry of the movie catalog.
///
/// Movies are created when the catalog is built and never change afterwards;
/// the catalog only hands out shared references to them.
#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    /// Unique within the catalog this movie belongs to.
    pub id: MovieId,
    /// The display title.
    pub title: String,
    /// Release year, or year range for series (e.g. `2011 - 2018`).
    pub year: String,
    /// Comma separated genres.
    pub genre: String,
    /// Comma separated directors or showrunners.
    pub director: String,
    /// Comma separated lead actors.
    pub actors: String,
    /// A one or two sentence synopsis.
    pub plot: String,
    /// Audience rating out of ten.
    pub rating: f32,
}

impl Movie {
    /// A movie with just an id and a title, and no further details.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: String::new(),
            genre: String::new(),
            director: String::new(),
            actors: String::new(),
            plot: String::new(),
            rating: 0.0,
        }
    }

    /// The short `year · genre` line shown under the title, skipping missing parts.
    pub fn subtitle(&self) -> String {
        match (self.year.is_empty(), self.genre.is_empty()) {
            (false, false) => format!("{} · {}", self.year, self.genre),
            (false, true) => self.year.clone(),
            (true, false) => self.genre.clone(),
            (true, true) => String::new(),
        }
    }
}
