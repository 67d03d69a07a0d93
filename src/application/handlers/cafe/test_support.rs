//! In-memory repository mock shared by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Cafe, CafeDraft, DomainError, ErrorCode, NewCafe};
use crate::ports::CafeRepository;

pub struct MockCafeRepository {
    cafes: Mutex<Vec<Cafe>>,
    fail: bool,
}

impl MockCafeRepository {
    pub fn new() -> Self {
        Self {
            cafes: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn with_cafes(cafes: Vec<Cafe>) -> Self {
        Self {
            cafes: Mutex::new(cafes),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            cafes: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn stored(&self) -> Vec<Cafe> {
        self.cafes.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated store failure",
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CafeRepository for MockCafeRepository {
    async fn list_all(&self) -> Result<Vec<Cafe>, DomainError> {
        self.check()?;
        Ok(self.stored())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Cafe>, DomainError> {
        self.check()?;
        Ok(self
            .cafes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.name() == name)
            .cloned())
    }

    async fn insert(&self, cafe: &NewCafe) -> Result<Cafe, DomainError> {
        self.check()?;
        let mut cafes = self.cafes.lock().unwrap();
        if cafes.iter().any(|c| c.name() == cafe.name) {
            return Err(DomainError::duplicate_name(&cafe.name));
        }
        let id = cafes.iter().map(Cafe::id).max().unwrap_or(0) + 1;
        let created = Cafe::from_new(id, cafe.clone());
        cafes.push(created.clone());
        Ok(created)
    }
}

pub fn sample_cafe(id: i64, name: &str) -> Cafe {
    Cafe::from_new(id, sample_new_cafe(name))
}

pub fn sample_new_cafe(name: &str) -> NewCafe {
    let slug = name.to_lowercase().replace(' ', "-");
    NewCafe::from_draft(CafeDraft {
        name: name.to_string(),
        map_url: format!("https://maps.example.com/{}", slug),
        img_url: format!("https://img.example.com/{}.jpg", slug),
        location: "Hackney".to_string(),
        has_sockets: true,
        has_toilet: true,
        has_wifi: true,
        can_take_calls: false,
        seats: "25".to_string(),
        coffee_price: "£2.90".to_string(),
    })
    .expect("sample draft is valid")
}
