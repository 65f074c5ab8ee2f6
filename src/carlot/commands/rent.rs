use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarlotError, Result};
use crate::model::RentalStatus;
use crate::store::DataStore;
use crate::validation::is_numeric;
use tracing::{info, warn};
use uuid::Uuid;

use super::helpers::{car_mut, dealer_mut, normalize_plate};

pub fn run<S: DataStore>(
    store: &mut S,
    dealer_id: &Uuid,
    plate: &str,
    user_id: &str,
) -> Result<CmdResult> {
    let plate = normalize_plate(plate);
    let user_id = user_id.trim();
    if !is_numeric(user_id) {
        return Err(CarlotError::InvalidFormat(
            "User ID must contain only numbers.".to_string(),
        ));
    }

    let mut doc = store.load_dealers()?;
    let car = car_mut(dealer_mut(&mut doc, dealer_id)?, &plate)?;
    if car.status() == RentalStatus::Rented {
        warn!(dealer = %dealer_id, plate = %plate, "car already rented");
        return Err(CarlotError::Conflict("Car is already rented.".to_string()));
    }

    car.rent_to(user_id.to_string());
    let car = car.clone();
    store.save_dealers(&doc)?;
    info!(dealer = %dealer_id, plate = %plate, user = %user_id, "vehicle rented");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Car {} successfully rented to user {}!",
        car.plate, user_id
    )));
    Ok(result.with_affected_cars(vec![car]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn renting_records_current_user_and_history() {
        let (fixture, dealer_id) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.with_car(dealer_id, "ABC-123").store;

        run(&mut store, &dealer_id, "abc-123", " 42 ").unwrap();

        let doc = store.load_dealers().unwrap();
        let car = doc.dealer(&dealer_id).unwrap().car("ABC-123").unwrap();
        assert!(car.is_in_use);
        assert_eq!(car.current_user.as_deref(), Some("42"));
        assert_eq!(car.last_users, vec!["42".to_string()]);
    }

    #[test]
    fn second_rent_conflicts() {
        let (fixture, dealer_id) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.with_car(dealer_id, "ABC-123").store;

        run(&mut store, &dealer_id, "ABC-123", "1").unwrap();
        let err = run(&mut store, &dealer_id, "ABC-123", "2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let doc = store.load_dealers().unwrap();
        let car = doc.dealer(&dealer_id).unwrap().car("ABC-123").unwrap();
        assert_eq!(car.current_user.as_deref(), Some("1"));
        assert_eq!(car.last_users.len(), 1);
    }

    #[test]
    fn non_numeric_user_is_invalid() {
        let (fixture, dealer_id) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.with_car(dealer_id, "ABC-123").store;

        for user in ["", "abc", "4 2", "-7"] {
            let err = run(&mut store, &dealer_id, "ABC-123", user).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "{user:?}");
        }
    }

    #[test]
    fn lookup_misses_are_not_found() {
        let (fixture, dealer_id) = StoreFixture::new().with_dealer("Acme");
        let mut store = fixture.store;

        let err = run(&mut store, &dealer_id, "ABC-123", "1").unwrap_err();
        assert!(matches!(err, CarlotError::VehicleNotFound(_)));
        let err = run(&mut store, &Uuid::new_v4(), "ABC-123", "1").unwrap_err();
        assert!(matches!(err, CarlotError::DealerNotFound(_)));
    }
}
