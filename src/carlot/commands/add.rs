use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarlotError, Result};
use crate::model::Car;
use crate::store::DataStore;
use tracing::{info, warn};
use uuid::Uuid;

use super::helpers::{dealer_mut, normalize_plate, require_plate, require_year};

/// Fields for a car about to be registered, as typed by the operator.
#[derive(Debug, Clone, Default)]
pub struct NewCar {
    pub plate: String,
    pub vin: String,
    pub brand: String,
    pub model: String,
    pub year: String,
    pub color: String,
}

impl NewCar {
    fn normalized(self) -> Self {
        Self {
            plate: normalize_plate(&self.plate),
            vin: self.vin.to_uppercase(),
            brand: self.brand.to_uppercase(),
            model: self.model.to_uppercase(),
            year: self.year.to_uppercase(),
            color: self.color.to_uppercase(),
        }
    }
}

pub fn run<S: DataStore>(store: &mut S, dealer_id: &Uuid, new_car: NewCar) -> Result<CmdResult> {
    let new_car = new_car.normalized();
    require_plate(&new_car.plate)?;
    require_year(&new_car.year)?;

    let mut doc = store.load_dealers()?;
    let dealer = dealer_mut(&mut doc, dealer_id)?;
    if dealer.has_plate(&new_car.plate) {
        warn!(dealer = %dealer_id, plate = %new_car.plate, "duplicate plate rejected");
        return Err(CarlotError::Conflict("Car already exists.".to_string()));
    }

    let car = Car::new(
        new_car.plate,
        new_car.vin,
        new_car.brand,
        new_car.model,
        new_car.year,
        new_car.color,
    );
    dealer.cars.push(car.clone());
    store.save_dealers(&doc)?;
    info!(dealer = %dealer_id, plate = %car.plate, "vehicle added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Vehicle {} successfully registered",
        car.plate
    )));
    Ok(result.with_affected_cars(vec![car]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::fixtures::StoreFixture;

    fn new_car(plate: &str, year: &str) -> NewCar {
        NewCar {
            plate: plate.into(),
            vin: "1hgbh41jxmn109186".into(),
            brand: "toyota".into(),
            model: "corolla".into(),
            year: year.into(),
            color: "red".into(),
        }
    }

    #[test]
    fn adds_car_with_uppercased_fields() {
        let (fixture, dealer_id) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.store;

        let result = run(&mut store, &dealer_id, new_car("abc-123", "2020")).unwrap();
        let car = &result.affected_cars[0];
        assert_eq!(car.plate, "ABC-123");
        assert_eq!(car.vin, "1HGBH41JXMN109186");
        assert_eq!(car.brand, "TOYOTA");
        assert_eq!(car.color, "RED");
        assert!(!car.is_in_use);
        assert!(car.last_users.is_empty());

        let doc = store.load_dealers().unwrap();
        assert_eq!(doc.dealer(&dealer_id).unwrap().cars, vec![car.clone()]);
    }

    #[test]
    fn rejects_bad_plate_and_year_before_touching_store() {
        let (fixture, dealer_id) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.store;
        let saves = store.saves();

        let err = run(&mut store, &dealer_id, new_car("AB-1234", "2020")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        let err = run(&mut store, &dealer_id, new_car("ABC-123", "20")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(store.saves(), saves);
    }

    #[test]
    fn unknown_dealer_is_not_found() {
        let (fixture, _) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.store;
        let err = run(&mut store, &Uuid::new_v4(), new_car("ABC-123", "2020")).unwrap_err();
        assert!(matches!(err, CarlotError::DealerNotFound(_)));
    }

    #[test]
    fn duplicate_plate_conflicts_only_within_a_dealer() {
        let (fixture, acme) = StoreFixture::new().with_dealer("Acme");
        let (fixture, globex) = fixture.with_dealer("Globex");
        let mut store = fixture.store;

        run(&mut store, &acme, new_car("ABC-123", "2020")).unwrap();
        let err = run(&mut store, &acme, new_car("abc-123", "1999")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        run(&mut store, &globex, new_car("ABC-123", "2020")).unwrap();
        let doc = store.load_dealers().unwrap();
        assert_eq!(doc.dealer(&acme).unwrap().cars.len(), 1);
        assert_eq!(doc.dealer(&globex).unwrap().cars.len(), 1);
    }

    #[test]
    fn year_zero_is_accepted() {
        let (fixture, dealer_id) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.store;
        run(&mut store, &dealer_id, new_car("ABC-123", "0000")).unwrap();
    }
}
