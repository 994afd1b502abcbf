use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{ContactInfo, Listing, Review};
use crate::services::ListingStore;

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn review(user: &str, rating: u8, comment: &str, date: (i32, u32, u32)) -> Review {
    Review {
        id: Uuid::new_v4(),
        user_id: user.to_lowercase().replace(' ', "-"),
        user_name: user.to_string(),
        rating,
        comment: comment.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
    }
}

/// Sample venues used for local runs and demos
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: Uuid::new_v4(),
            name: "Central Bark Park".to_string(),
            description: "Two fenced acres of off-leash space with separate areas for large and small dogs.".to_string(),
            category: "park".to_string(),
            location: "Seattle, WA".to_string(),
            allowed_pets: tags(&["dogs"]),
            amenities: tags(&["water-bowls", "waste-stations", "fenced-area", "shade"]),
            photos: tags(&["/images/central-bark-park.jpg"]),
            rating: 0.0,
            reviews: vec![
                review("Jordan Lee", 5, "My lab never wants to leave.", (2025, 3, 14)),
                review("Priya Nair", 4, "Gets muddy after rain but the small dog area is great.", (2025, 4, 2)),
            ],
            contact_info: ContactInfo {
                phone: "206-555-0134".to_string(),
                email: "hello@centralbark.example".to_string(),
                website: "https://centralbark.example".to_string(),
            },
        },
        Listing {
            id: Uuid::new_v4(),
            name: "Whisker Café".to_string(),
            description: "Neighbourhood coffee shop with a pet menu and a quiet corner for cats in carriers.".to_string(),
            category: "cafe".to_string(),
            location: "Portland, OR".to_string(),
            allowed_pets: tags(&["dogs", "cats"]),
            amenities: tags(&["water-bowls", "pet-menu", "indoor-seating"]),
            photos: tags(&["/images/whisker-cafe.jpg"]),
            rating: 0.0,
            reviews: vec![
                review("Sam Ortiz", 5, "Puppuccinos on the house!", (2025, 2, 20)),
                review("Casey Wu", 4, "Friendly staff, a bit crowded on weekends.", (2025, 5, 11)),
                review("Robin Hale", 3, "Good coffee, small patio.", (2025, 6, 1)),
            ],
            contact_info: ContactInfo {
                phone: "503-555-0199".to_string(),
                email: "meow@whiskercafe.example".to_string(),
                website: "https://whiskercafe.example".to_string(),
            },
        },
        Listing {
            id: Uuid::new_v4(),
            name: "Harbor View Inn".to_string(),
            description: "Waterfront hotel with pet beds in every room and a walking trail next door.".to_string(),
            category: "hotel".to_string(),
            location: "San Diego, CA".to_string(),
            allowed_pets: tags(&["dogs", "cats", "small-mammals"]),
            amenities: tags(&["pet-beds", "walking-trail", "pet-sitting"]),
            photos: tags(&["/images/harbor-view-inn.jpg"]),
            rating: 0.0,
            reviews: vec![review("Alex Rivera", 5, "They had a welcome treat bag waiting.", (2025, 7, 9))],
            contact_info: ContactInfo {
                phone: "619-555-0112".to_string(),
                email: "stay@harborview.example".to_string(),
                website: "https://harborview.example".to_string(),
            },
        },
        Listing {
            id: Uuid::new_v4(),
            name: "Greenway Trailhead".to_string(),
            description: "Shaded multi-use trail along the river, leashed pets welcome.".to_string(),
            category: "trail".to_string(),
            location: "Austin, TX".to_string(),
            allowed_pets: tags(&["dogs"]),
            amenities: tags(&["waste-stations", "shade", "parking"]),
            photos: vec![],
            rating: 0.0,
            reviews: vec![],
            contact_info: ContactInfo::default(),
        },
    ]
}

/// Load the sample venues; returns how many were added
pub async fn seed_store(store: &ListingStore) -> usize {
    let listings = sample_listings();
    let count = listings.len();
    for listing in listings {
        store.restore(listing).await;
    }
    count
}
