//! In-memory collection of captured Pokémon.
//!
//! The store is a cloneable handle over shared state, injected into request
//! handlers through application state rather than living in a process global.
//! Contents are volatile: the collection exists for the process lifetime only.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Pokemon;

/// Ordered, process-lifetime collection of captured Pokémon.
///
/// Records are appended on capture and removed on release; there is no
/// update operation. Lookups are linear scans, and insertion order is part
/// of the contract.
#[derive(Clone, Default)]
pub struct CollectionStore {
    inner: Arc<RwLock<Vec<Pokemon>>>,
}

impl CollectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a captured record.
    pub async fn insert(&self, pokemon: Pokemon) {
        self.inner.write().await.push(pokemon);
    }

    /// Snapshot of the collection in insertion order.
    pub async fn all(&self) -> Vec<Pokemon> {
        self.inner.read().await.clone()
    }

    /// Find a record by its local id.
    pub async fn get(&self, id: Uuid) -> Option<Pokemon> {
        self.inner
            .read()
            .await
            .iter()
            .find(|pokemon| pokemon.id == id)
            .cloned()
    }

    /// Remove a record by its local id, returning it if present.
    ///
    /// Order of the remaining records is preserved. An unknown id leaves
    /// the collection untouched.
    pub async fn remove(&self, id: Uuid) -> Option<Pokemon> {
        let mut records = self.inner.write().await;
        let index = records.iter().position(|pokemon| pokemon.id == id)?;
        Some(records.remove(index))
    }

    /// Number of captured records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// True if nothing has been captured (or everything released).
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{normalize_measure, SpeciesProfile};

    fn profile(species_id: i64, name: &str) -> SpeciesProfile {
        SpeciesProfile {
            species_id,
            name: name.to_string(),
            type_name: "eléctrico".to_string(),
            height: normalize_measure(4),
            weight: normalize_measure(60),
            image: format!("https://img.example/{}.png", species_id),
        }
    }

    #[tokio::test]
    async fn test_insert_appends_one_record() {
        let store = CollectionStore::new();
        store.insert(Pokemon::new(profile(25, "pikachu"))).await;
        assert_eq!(store.len().await, 1);
        let records = store.all().await;
        assert_eq!(records[0].weight, 6.0);
        assert_eq!(records[0].height, 0.4);
    }

    #[tokio::test]
    async fn test_all_preserves_insertion_order() {
        let store = CollectionStore::new();
        store.insert(Pokemon::new(profile(25, "pikachu"))).await;
        store.insert(Pokemon::new(profile(1, "bulbasaur"))).await;
        store.insert(Pokemon::new(profile(7, "squirtle"))).await;

        let names: Vec<String> = store.all().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["pikachu", "bulbasaur", "squirtle"]);
    }

    #[tokio::test]
    async fn test_get_returns_unique_match() {
        let store = CollectionStore::new();
        let pokemon = Pokemon::new(profile(25, "pikachu"));
        let id = pokemon.id;
        store.insert(pokemon).await;
        store.insert(Pokemon::new(profile(1, "bulbasaur"))).await;

        let found = store.get(id).await.unwrap();
        assert_eq!(found.name, "pikachu");
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_preserves_remaining_order() {
        let store = CollectionStore::new();
        store.insert(Pokemon::new(profile(25, "pikachu"))).await;
        let middle = Pokemon::new(profile(1, "bulbasaur"));
        let middle_id = middle.id;
        store.insert(middle).await;
        store.insert(Pokemon::new(profile(7, "squirtle"))).await;

        let removed = store.remove(middle_id).await.unwrap();
        assert_eq!(removed.name, "bulbasaur");

        let names: Vec<String> = store.all().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["pikachu", "squirtle"]);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_leaves_store_unchanged() {
        let store = CollectionStore::new();
        store.insert(Pokemon::new(profile(25, "pikachu"))).await;
        store.insert(Pokemon::new(profile(1, "bulbasaur"))).await;

        assert!(store.remove(Uuid::new_v4()).await.is_none());
        let names: Vec<String> = store.all().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["pikachu", "bulbasaur"]);
    }

    #[tokio::test]
    async fn test_release_then_get_yields_none() {
        let store = CollectionStore::new();
        let pokemon = Pokemon::new(profile(25, "pikachu"));
        let id = pokemon.id;
        store.insert(pokemon).await;

        assert!(store.remove(id).await.is_some());
        assert!(store.get(id).await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_repeat_captures_are_distinct_records() {
        let store = CollectionStore::new();
        let first = Pokemon::new(profile(25, "pikachu"));
        let second = Pokemon::new(profile(25, "pikachu"));
        assert_ne!(first.id, second.id);

        store.insert(first).await;
        store.insert(second).await;
        assert_eq!(store.len().await, 2);
    }
}
