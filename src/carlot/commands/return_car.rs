use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarlotError, Result};
use crate::model::RentalStatus;
use crate::store::DataStore;
use tracing::{info, warn};
use uuid::Uuid;

use super::helpers::{car_mut, dealer_mut, normalize_plate};

pub fn run<S: DataStore>(store: &mut S, dealer_id: &Uuid, plate: &str) -> Result<CmdResult> {
    let plate = normalize_plate(plate);

    let mut doc = store.load_dealers()?;
    let car = car_mut(dealer_mut(&mut doc, dealer_id)?, &plate)?;
    if car.status() == RentalStatus::Available {
        warn!(dealer = %dealer_id, plate = %plate, "car is not rented");
        return Err(CarlotError::Conflict(
            "Car is not currently rented.".to_string(),
        ));
    }

    car.release();
    let car = car.clone();
    store.save_dealers(&doc)?;
    info!(dealer = %dealer_id, plate = %plate, "vehicle returned");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Car {} successfully returned!",
        car.plate
    )));
    Ok(result.with_affected_cars(vec![car]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::rent;
    use crate::error::ErrorKind;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn return_clears_renter_but_keeps_history() {
        let (fixture, dealer_id) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.with_car(dealer_id, "ABC-123").store;

        rent::run(&mut store, &dealer_id, "ABC-123", "42").unwrap();
        run(&mut store, &dealer_id, "abc-123").unwrap();

        let doc = store.load_dealers().unwrap();
        let car = doc.dealer(&dealer_id).unwrap().car("ABC-123").unwrap();
        assert!(!car.is_in_use);
        assert_eq!(car.current_user, None);
        assert_eq!(car.last_users.last().map(String::as_str), Some("42"));
    }

    #[test]
    fn returning_an_available_car_conflicts() {
        let (fixture, dealer_id) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.with_car(dealer_id, "ABC-123").store;

        let err = run(&mut store, &dealer_id, "ABC-123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        rent::run(&mut store, &dealer_id, "ABC-123", "1").unwrap();
        run(&mut store, &dealer_id, "ABC-123").unwrap();
        let err = run(&mut store, &dealer_id, "ABC-123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn lookup_misses_are_not_found() {
        let (fixture, dealer_id) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.store;

        let err = run(&mut store, &dealer_id, "ABC-123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = run(&mut store, &Uuid::new_v4(), "ABC-123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
