// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

//! Properties of the favorites store which must hold for every movie of the built-in catalog.

use std::sync::{Arc, Mutex};

use marquee_model::{AppModel, Catalog, FavoriteChange, FavoritesStore, MovieId, Tab};

fn builtin_store() -> FavoritesStore {
    FavoritesStore::new(Arc::new(Catalog::builtin()))
}

fn catalog_ids(catalog: &Catalog) -> Vec<MovieId> {
    catalog.list_all().iter().map(|movie| movie.id).collect()
}

#[test]
fn single_toggle_marks_favorite() {
    let catalog = Arc::new(Catalog::builtin());
    for movie in catalog.list_all() {
        let mut store = FavoritesStore::new(catalog.clone());
        store.toggle_favorite(movie.id).unwrap();
        assert!(store.is_favorite(movie.id), "{} should be a favorite", movie.title);
        assert!(
            store.list_favorites().contains(&movie),
            "{} should be listed",
            movie.title
        );
    }
}

#[test]
fn double_toggle_restores_state() {
    let mut store = builtin_store();
    let ids = catalog_ids(store.catalog());
    // Start from a mixed state so both directions of the toggle are covered.
    for id in ids.iter().step_by(2) {
        store.toggle_favorite(*id).unwrap();
    }
    for &id in &ids {
        let before = store.is_favorite(id);
        let order_before = store.favorite_ids().to_vec();
        store.toggle_favorite(id).unwrap();
        store.toggle_favorite(id).unwrap();
        assert_eq!(store.is_favorite(id), before, "toggling {id} twice");
        if before {
            // A re-added favorite moves to the end of the list.
            assert_eq!(store.favorite_ids().last(), Some(&id));
        } else {
            assert_eq!(store.favorite_ids(), order_before.as_slice());
        }
    }
}

#[test]
fn favorites_are_always_catalog_movies() {
    let mut store = builtin_store();
    let ids = catalog_ids(store.catalog());
    for (step, &id) in ids.iter().cycle().take(ids.len() * 3).enumerate() {
        if step % 3 != 1 {
            store.toggle_favorite(id).unwrap();
        }
        for movie in store.list_favorites() {
            assert!(ids.contains(&movie.id), "{} is not in the catalog", movie.id);
        }
    }
}

#[test]
fn favorites_keep_insertion_order() {
    let mut store = builtin_store();
    let b = MovieId::new(2);
    let a = MovieId::new(1);
    store.toggle_favorite(b).unwrap();
    store.toggle_favorite(a).unwrap();
    let listed: Vec<MovieId> = store.list_favorites().iter().map(|movie| movie.id).collect();
    assert_eq!(listed, [b, a]);
}

#[test]
fn every_toggle_is_observed_before_it_returns() {
    let mut model = AppModel::default();
    let seen = Arc::new(Mutex::new(Vec::<FavoriteChange>::new()));
    let observer_seen = seen.clone();
    model
        .favorites_mut()
        .subscribe(move |change| observer_seen.lock().unwrap().push(*change));

    let ids = catalog_ids(model.catalog());
    for (count, &id) in ids.iter().enumerate() {
        let now_favorite = model.toggle_favorite(id).unwrap();
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), count + 1);
        assert_eq!(
            seen.last(),
            Some(&FavoriteChange {
                id,
                is_favorite: now_favorite
            })
        );
    }
}

#[test]
fn tab_selection_never_mutates_favorites() {
    let mut model = AppModel::default();
    model.toggle_favorite(MovieId::new(4)).unwrap();
    model.toggle_favorite(MovieId::new(9)).unwrap();
    let before = model.favorites().favorite_ids().to_vec();

    for index in [1, 0, 1, 1, 0] {
        model.select_tab(Tab::try_from(index).unwrap());
        assert_eq!(model.favorites().favorite_ids(), before.as_slice());
    }
    assert_eq!(model.tab(), Tab::Home);
}
