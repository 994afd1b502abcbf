use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::core::rating::mean_rating;
use crate::models::{Listing, NewListing, NewReview, Review};

/// Errors that can occur with store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Listing not found: {0}")]
    ListingNotFound(Uuid),
}

#[derive(Default)]
struct StoreInner {
    /// Listing ids in insertion order
    order: Vec<Uuid>,
    listings: HashMap<Uuid, Arc<Mutex<Listing>>>,
}

/// In-memory venue/review store
///
/// The outer lock only guards the index. Each listing has its own mutex, and
/// every mutation of a listing (review append plus rating recompute) happens
/// while holding it, so writers to one listing are serialized and writers to
/// different listings never contend. Contents are lost on restart.
#[derive(Default)]
pub struct ListingStore {
    inner: RwLock<StoreInner>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn entry(&self, id: Uuid) -> Result<Arc<Mutex<Listing>>, StoreError> {
        self.inner
            .read()
            .await
            .listings
            .get(&id)
            .cloned()
            .ok_or(StoreError::ListingNotFound(id))
    }

    async fn insert(&self, listing: Listing) {
        let id = listing.id;
        let mut inner = self.inner.write().await;
        if inner.listings.insert(id, Arc::new(Mutex::new(listing))).is_none() {
            inner.order.push(id);
        }
    }

    /// All listings in insertion order
    pub async fn list(&self) -> Vec<Listing> {
        let entries: Vec<Arc<Mutex<Listing>>> = {
            let inner = self.inner.read().await;
            inner
                .order
                .iter()
                .filter_map(|id| inner.listings.get(id).cloned())
                .collect()
        };

        let mut listings = Vec::with_capacity(entries.len());
        for entry in entries {
            listings.push(entry.lock().await.clone());
        }
        listings
    }

    pub async fn get(&self, id: Uuid) -> Result<Listing, StoreError> {
        let entry = self.entry(id).await?;
        let listing = entry.lock().await.clone();
        Ok(listing)
    }

    /// Create a listing with a fresh id, zero rating and no reviews
    pub async fn create(&self, new: NewListing) -> Listing {
        let listing = Listing {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            category: new.category,
            location: new.location,
            allowed_pets: new.allowed_pets,
            amenities: new.amenities,
            photos: new.photos,
            rating: 0.0,
            reviews: vec![],
            contact_info: new.contact_info,
        };

        self.insert(listing.clone()).await;
        tracing::debug!("Created listing {} ({})", listing.id, listing.name);

        listing
    }

    /// Load a fully formed listing, recomputing its rating from its reviews
    pub async fn restore(&self, mut listing: Listing) {
        listing.rating = mean_rating(&listing.reviews);
        self.insert(listing).await;
    }

    pub async fn reviews(&self, listing_id: Uuid) -> Result<Vec<Review>, StoreError> {
        let entry = self.entry(listing_id).await?;
        let reviews = entry.lock().await.reviews.clone();
        Ok(reviews)
    }

    /// Append a review and recompute the listing's rating as the new mean
    pub async fn add_review(&self, listing_id: Uuid, new: NewReview) -> Result<Review, StoreError> {
        let entry = self.entry(listing_id).await?;

        let review = Review {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            user_name: new.user_name,
            rating: new.rating,
            comment: new.comment,
            date: Utc::now().date_naive(),
        };

        let mut listing = entry.lock().await;
        listing.reviews.push(review.clone());
        listing.rating = mean_rating(&listing.reviews);

        tracing::debug!(
            "Added review {} to listing {} (rating now {:.2} over {} reviews)",
            review.id,
            listing_id,
            listing.rating,
            listing.reviews.len()
        );

        Ok(review)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactInfo;

    fn new_listing(name: &str) -> NewListing {
        NewListing {
            name: name.to_string(),
            description: "A place".to_string(),
            category: "park".to_string(),
            location: "Portland, OR".to_string(),
            allowed_pets: vec!["dogs".to_string()],
            amenities: vec![],
            photos: vec![],
            contact_info: ContactInfo::default(),
        }
    }

    fn new_review(rating: u8) -> NewReview {
        NewReview {
            user_id: "u1".to_string(),
            user_name: "Alex".to_string(),
            rating,
            comment: "Nice".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = ListingStore::new();
        let created = store.create(new_listing("Dog Park")).await;

        assert_eq!(created.rating, 0.0);
        assert!(created.reviews.is_empty());

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.name, "Dog Park");
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = ListingStore::new();
        for name in ["a", "b", "c"] {
            store.create(new_listing(name)).await;
        }

        let names: Vec<String> = store.list().await.into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_unknown_listing() {
        let store = ListingStore::new();
        let id = Uuid::new_v4();

        assert!(matches!(store.get(id).await, Err(StoreError::ListingNotFound(x)) if x == id));
        assert!(store.reviews(id).await.is_err());
        assert!(store.add_review(id, new_review(4)).await.is_err());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_rating_tracks_mean() {
        let store = ListingStore::new();
        let listing = store.create(new_listing("Cafe")).await;

        for rating in [5, 3, 4] {
            store.add_review(listing.id, new_review(rating)).await.unwrap();
        }

        let fetched = store.get(listing.id).await.unwrap();
        assert_eq!(fetched.reviews.len(), 3);
        assert!((fetched.rating - 4.0).abs() < 1e-9);
        assert_eq!(store.reviews(listing.id).await.unwrap().len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reviews_are_not_lost() {
        let store = Arc::new(ListingStore::new());
        let id = store.create(new_listing("Busy Beach")).await.id;

        let handles: Vec<_> = (0..50u8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.add_review(id, new_review(1 + i % 5)).await.unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let fetched = store.get(id).await.unwrap();
        assert_eq!(fetched.reviews.len(), 50);
        // ratings cycle 1..=5 ten times
        assert!((fetched.rating - 3.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_restore_recomputes_rating() {
        let store = ListingStore::new();
        let mut listing = store.create(new_listing("Seeded")).await;
        listing.id = Uuid::new_v4();
        listing.rating = 9.9;

        store.restore(listing.clone()).await;
        assert_eq!(store.get(listing.id).await.unwrap().rating, 0.0);
    }
}
