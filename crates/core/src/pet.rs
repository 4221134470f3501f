//! The pet record and its default seed collection.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::types::PetId;

/// One adoptable animal, as stored and as served.
///
/// Field bounds (name 2-30 chars, age 1-20, img a well-formed URL, desc
/// 5-100 chars) are enforced by the form controller at submission time
/// only. Seed data and records written through `save_all` bypass them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub age: i64,
    pub img: String,
    pub desc: String,
}

/// Generate an id for a new record.
///
/// Ids are current-time milliseconds; when that collides with an existing
/// id (two submissions inside one millisecond, or a clock step backwards),
/// the candidate is bumped until it is unique.
pub fn fresh_id(existing: &[Pet]) -> PetId {
    let mut candidate = Utc::now().timestamp_millis();
    while existing.iter().any(|p| p.id == candidate) {
        candidate += 1;
    }
    candidate
}

/// The collection seeded into an empty store on first run.
pub fn default_pets() -> Vec<Pet> {
    vec![
        Pet {
            id: 1_678_886_400_001,
            name: "Buddy".to_string(),
            age: 2,
            img: "https://i.pinimg.com/736x/27/13/a0/2713a0b48576c6626ad4c9b4c26619ec.jpg"
                .to_string(),
            desc: "Aime les longues promenades.".to_string(),
        },
        Pet {
            id: 1_678_886_400_002,
            name: "Misty".to_string(),
            age: 1,
            img: "https://cdn2.thecatapi.com/images/531.jpg".to_string(),
            desc: "Expert en siestes.".to_string(),
        },
        Pet {
            id: 1_678_886_400_003,
            name: "Rex".to_string(),
            age: 4,
            img: "https://images.dog.ceo/breeds/boxer/n02108089_11032.jpg".to_string(),
            desc: "Très joueur.".to_string(),
        },
        Pet {
            id: 1_678_886_400_004,
            name: "Whiskers".to_string(),
            age: 3,
            img: "https://apluscostumes.com/wp-content/uploads/2022/08/large-dog-costume-granny.jpg"
                .to_string(),
            desc: "Indépendant et câlin.".to_string(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
