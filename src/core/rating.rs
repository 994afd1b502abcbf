use crate::models::Review;

/// Arithmetic mean of review ratings, 0 for an empty slice
#[inline]
pub fn mean_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }

    let total: u32 = reviews.iter().map(|r| r.rating as u32).sum();
    total as f64 / reviews.len() as f64
}
