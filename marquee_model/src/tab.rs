// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

use crate::ModelError;

/// Which list is being shown.
///
/// Selecting a tab only chooses how the model is read; it never changes the favorites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Every movie in the catalog.
    #[default]
    Home,
    /// Only the favorite movies.
    Favorites,
}

impl Tab {
    /// All tabs, in the order they are displayed.
    pub const ALL: [Self; 2] = [Self::Home, Self::Favorites];

    /// The position of this tab in the tab row.
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Favorites => 1,
        }
    }

    /// The label shown for this tab.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Favorites => "Favorites",
        }
    }
}

impl TryFrom<usize> for Tab {
    type Error = ModelError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ModelError::InvalidTabIndex(index))
    }
}
