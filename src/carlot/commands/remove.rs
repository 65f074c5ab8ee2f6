use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarlotError, Result};
use crate::store::DataStore;
use tracing::info;
use uuid::Uuid;

use super::helpers::{dealer_mut, normalize_plate};

pub fn run<S: DataStore>(store: &mut S, dealer_id: &Uuid, plate: &str) -> Result<CmdResult> {
    let plate = normalize_plate(plate);

    let mut doc = store.load_dealers()?;
    let dealer = dealer_mut(&mut doc, dealer_id)?;
    let position = dealer
        .cars
        .iter()
        .position(|c| c.plate == plate)
        .ok_or_else(|| CarlotError::VehicleNotFound(plate.clone()))?;
    let car = dealer.cars.remove(position);
    store.save_dealers(&doc)?;
    info!(dealer = %dealer_id, plate = %plate, "vehicle removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Vehicle {} successfully removed",
        car.plate
    )));
    Ok(result.with_affected_cars(vec![car]))
}
