// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::{ModelError, Movie, MovieId};

/// The fixed, ordered list of movies available to browse.
///
/// A catalog never changes after it is built, and is usually shared through an
/// [`Arc`](std::sync::Arc) between the [`FavoritesStore`](crate::FavoritesStore) and the UI.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    index: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Build a catalog from `movies`, keeping their order.
    ///
    /// Returns [`ModelError::DuplicateMovieId`] if two movies share an id.
    pub fn new(movies: impl IntoIterator<Item = Movie>) -> Result<Self, ModelError> {
        let movies: Vec<Movie> = movies.into_iter().collect();
        let mut index = HashMap::with_capacity(movies.len());
        for (position, movie) in movies.iter().enumerate() {
            match index.entry(movie.id) {
                Entry::Occupied(_) => return Err(ModelError::DuplicateMovieId(movie.id)),
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }
        Ok(Self { movies, index })
    }

    /// The catalog embedded in the app.
    ///
    /// Ids are assigned from 1 in display order.
    pub fn builtin() -> Self {
        let movies: Vec<Movie> = (1_u32..)
            .zip(BUILTIN_MOVIES)
            .map(
                |(raw_id, &(title, year, genre, director, actors, plot, rating))| Movie {
                    id: MovieId::new(raw_id),
                    title: title.into(),
                    year: year.into(),
                    genre: genre.into(),
                    director: director.into(),
                    actors: actors.into(),
                    plot: plot.into(),
                    rating,
                },
            )
            .collect();
        let index = movies
            .iter()
            .enumerate()
            .map(|(position, movie)| (movie.id, position))
            .collect();
        Self { movies, index }
    }

    /// All movies, in catalog order.
    pub fn list_all(&self) -> &[Movie] {
        &self.movies
    }

    /// The movie with the given id, if there is one.
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.index.get(&id).map(|&position| &self.movies[position])
    }

    /// The movie with the given id, or [`ModelError::InvalidMovieReference`].
    pub fn resolve(&self, id: MovieId) -> Result<&Movie, ModelError> {
        self.get(id).ok_or(ModelError::InvalidMovieReference(id))
    }

    /// Whether a movie with this id is in the catalog.
    pub fn contains(&self, id: MovieId) -> bool {
        self.index.contains_key(&id)
    }

    /// The number of movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog has no movies at all.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

type MovieRecord = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f32,
);

// (title, year, genre, director, actors, plot, rating)
const BUILTIN_MOVIES: &[MovieRecord] = &[
    (
        "Avatar",
        "2009",
        "Action, Adventure, Fantasy",
        "James Cameron",
        "Sam Worthington, Zoe Saldana, Sigourney Weaver, Stephen Lang",
        "A paraplegic Marine dispatched to the moon Pandora on a unique mission becomes torn between following his orders and protecting the world he feels is his home.",
        7.9,
    ),
    (
        "300",
        "2006",
        "Action, Drama, Fantasy",
        "Zack Snyder",
        "Gerard Butler, Lena Headey, Dominic West, David Wenham",
        "King Leonidas of Sparta and a force of 300 men fight the Persians at Thermopylae in 480 B.C.",
        7.7,
    ),
    (
        "The Avengers",
        "2012",
        "Action, Sci-Fi, Thriller",
        "Joss Whedon",
        "Robert Downey Jr., Chris Evans, Mark Ruffalo, Chris Hemsworth",
        "Earth's mightiest heroes must come together and learn to fight as a team if they are to stop the mischievous Loki and his alien army from enslaving humanity.",
        8.1,
    ),
    (
        "The Wolf of Wall Street",
        "2013",
        "Biography, Comedy, Crime",
        "Martin Scorsese",
        "Leonardo DiCaprio, Jonah Hill, Margot Robbie, Matthew McConaughey",
        "Based on the true story of Jordan Belfort, from his rise to a wealthy stock-broker living the high life to his fall involving crime, corruption and the federal government.",
        8.2,
    ),
    (
        "Interstellar",
        "2014",
        "Adventure, Drama, Sci-Fi",
        "Christopher Nolan",
        "Ellen Burstyn, Matthew McConaughey, Mackenzie Foy, John Lithgow",
        "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        8.6,
    ),
    (
        "Game of Thrones",
        "2011 - 2018",
        "Adventure, Drama, Fantasy",
        "David Benioff, D.B. Weiss",
        "Peter Dinklage, Lena Headey, Emilia Clarke, Kit Harington",
        "While a civil war brews between several noble families in Westeros, the children of the former rulers of the land attempt to rise up to power.",
        9.5,
    ),
    (
        "Vikings",
        "2013 - 2020",
        "Action, Drama, History",
        "Michael Hirst",
        "Travis Fimmel, Clive Standen, Gustaf Skarsgard, Katheryn Winnick",
        "The world of the Vikings is brought to life through the journey of Ragnar Lothbrok, the first Viking to emerge from Norse legend and onto the pages of history.",
        9.5,
    ),
    (
        "Gotham",
        "2014 - 2019",
        "Action, Crime, Drama",
        "Bruno Heller",
        "Ben McKenzie, Donal Logue, David Mazouz, Sean Pertwee",
        "The story behind Detective James Gordon's rise to prominence in Gotham City in the days before Batman's arrival.",
        8.0,
    ),
    (
        "Breaking Bad",
        "2008 - 2013",
        "Crime, Drama, Thriller",
        "Vince Gilligan",
        "Bryan Cranston, Anna Gunn, Aaron Paul, Dean Norris",
        "A high school chemistry teacher diagnosed with inoperable lung cancer turns to manufacturing and selling methamphetamine in order to secure his family's financial future.",
        9.5,
    ),
    (
        "Narcos",
        "2015 - 2017",
        "Biography, Crime, Drama",
        "Carlo Bernard, Chris Brancato",
        "Wagner Moura, Boyd Holbrook, Pedro Pascal, Joann Christie",
        "A chronicled look at the criminal exploits of Colombian drug lord Pablo Escobar.",
        9.0,
    ),
];

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn builtin_ids_follow_display_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_MOVIES.len());
        for (expected, movie) in (1_u32..).zip(catalog.list_all()) {
            assert_eq!(movie.id, MovieId::new(expected));
            assert_eq!(catalog.get(movie.id), Some(movie));
        }
        assert_eq!(catalog.list_all()[0].title, "Avatar");
    }

    #[test]
    fn list_all_is_stable() {
        let catalog = Catalog::builtin();
        let first: Vec<MovieId> = catalog.list_all().iter().map(|movie| movie.id).collect();
        let second: Vec<MovieId> = catalog.list_all().iter().map(|movie| movie.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_catalog_keeps_given_order() {
        let catalog = Catalog::new([
            Movie::new(MovieId::new(20), "Up"),
            Movie::new(MovieId::new(3), "Avatar"),
        ])
        .unwrap();
        let titles: Vec<&str> = catalog
            .list_all()
            .iter()
            .map(|movie| movie.title.as_str())
            .collect();
        assert_eq!(titles, ["Up", "Avatar"]);
        assert!(catalog.contains(MovieId::new(3)));
        assert!(!catalog.contains(MovieId::new(1)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new([
            Movie::new(MovieId::new(1), "Avatar"),
            Movie::new(MovieId::new(2), "Up"),
            Movie::new(MovieId::new(1), "Avatar (Extended)"),
        ]);
        assert_matches!(result, Err(ModelError::DuplicateMovieId(id)) if id == MovieId::new(1));
    }

    #[test]
    fn resolve_unknown_id() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_matches!(
            catalog.resolve(MovieId::new(4)),
            Err(ModelError::InvalidMovieReference(id)) if id == MovieId::new(4)
        );
    }
}
