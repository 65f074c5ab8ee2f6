use super::DataStore;
use crate::error::Result;
use crate::model::{DealersDocument, SessionDocument};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    dealers: Option<DealersDocument>,
    session: Option<SessionDocument>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents written so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_dealers(&self) -> Result<DealersDocument> {
        Ok(self.dealers.clone().unwrap_or_default())
    }

    fn save_dealers(&mut self, doc: &DealersDocument) -> Result<()> {
        self.dealers = Some(doc.clone());
        self.saves += 1;
        Ok(())
    }

    fn load_session(&self) -> Result<SessionDocument> {
        Ok(self.session.clone().unwrap_or_default())
    }

    fn save_session(&mut self, doc: &SessionDocument) -> Result<()> {
        self.session = Some(doc.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Car, CarDealer};
    use uuid::Uuid;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds an empty dealer and returns its id alongside the fixture.
        pub fn with_dealer(mut self, name: &str) -> (Self, Uuid) {
            let dealer = CarDealer::new(name.to_string());
            let id = dealer.id;
            let mut doc = self.store.load_dealers().unwrap();
            doc.dealers.push(dealer);
            self.store.save_dealers(&doc).unwrap();
            (self, id)
        }

        pub fn with_car(mut self, dealer_id: Uuid, plate: &str) -> Self {
            self.push_car(dealer_id, sample_car(plate));
            self
        }

        pub fn with_rented_car(mut self, dealer_id: Uuid, plate: &str, user_id: &str) -> Self {
            let mut car = sample_car(plate);
            car.rent_to(user_id.to_string());
            self.push_car(dealer_id, car);
            self
        }

        fn push_car(&mut self, dealer_id: Uuid, car: Car) {
            let mut doc = self.store.load_dealers().unwrap();
            doc.dealer_mut(&dealer_id)
                .expect("fixture dealer must exist")
                .cars
                .push(car);
            self.store.save_dealers(&doc).unwrap();
        }
    }

    pub fn sample_car(plate: &str) -> Car {
        Car::new(
            plate.to_string(),
            "1HGBH41JXMN109186".to_string(),
            "TOYOTA".to_string(),
            "COROLLA".to_string(),
            "2020".to_string(),
            "RED".to_string(),
        )
    }
}
