//! In-process document collections
//!
//! Every portal store keeps its records in a single collection keyed by
//! id; views such as the pending/active user partitions or the recycle
//! bin are derived by filtering a snapshot. Mutations take the one write
//! lock per collection, so concurrent writers serialize and the last
//! write wins.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// A record that can live in a [`Collection`]
pub trait Document {
    /// Stable identity of the record
    fn id(&self) -> Uuid;
}

/// Shared in-process collection of documents
///
/// Insertion order is preserved; cloning the collection clones the
/// handle, not the documents.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> Collection<T>
where
    T: Document + Clone,
{
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a collection pre-populated with seed documents
    pub fn seeded(documents: Vec<T>) -> Self {
        info!("Seeding collection with {} documents", documents.len());
        Self {
            inner: Arc::new(RwLock::new(documents)),
        }
    }

    /// Snapshot of all documents in insertion order
    pub async fn all(&self) -> Vec<T> {
        self.inner.read().await.clone()
    }

    /// Find a document by id
    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.inner
            .read()
            .await
            .iter()
            .find(|document| document.id() == id)
            .cloned()
    }

    /// Append a document to the collection
    pub async fn insert(&self, document: T) {
        self.inner.write().await.push(document);
    }

    /// Apply `f` to the document with the given id
    ///
    /// Returns the updated document, or `None` without touching the
    /// collection when the id is absent.
    pub async fn update<F>(&self, id: Uuid, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        self.update_where(id, |_| true, f).await
    }

    /// Apply `f` only when `pred` holds for the current document
    ///
    /// A failed predicate is a no-op, indistinguishable from an absent id.
    pub async fn update_where<P, F>(&self, id: Uuid, pred: P, f: F) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&mut T),
    {
        let mut documents = self.inner.write().await;
        let index = documents.iter().position(|document| document.id() == id)?;
        if !pred(&documents[index]) {
            return None;
        }
        f(&mut documents[index]);
        Some(documents[index].clone())
    }

    /// Remove and return the document with the given id
    pub async fn remove(&self, id: Uuid) -> Option<T> {
        self.remove_where(id, |_| true).await
    }

    /// Remove the document only when `pred` holds for it
    pub async fn remove_where<P>(&self, id: Uuid, pred: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        let mut documents = self.inner.write().await;
        let index = documents.iter().position(|document| document.id() == id)?;
        if !pred(&documents[index]) {
            return None;
        }
        Some(documents.remove(index))
    }

    /// Number of documents in the collection
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether the collection holds no documents
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl<T> Default for Collection<T>
where
    T: Document + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
