use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarlotError, Result};
use crate::model::CarChanges;
use crate::store::DataStore;
use tracing::info;
use uuid::Uuid;

use super::helpers::{car_mut, dealer_mut, normalize_plate, require_plate, require_year};

fn normalized(changes: CarChanges) -> CarChanges {
    CarChanges {
        plate: changes.plate.map(|p| normalize_plate(&p)),
        brand: changes.brand.map(|s| s.to_uppercase()),
        model: changes.model.map(|s| s.to_uppercase()),
        year: changes.year.map(|s| s.to_uppercase()),
        color: changes.color.map(|s| s.to_uppercase()),
    }
}

pub fn run<S: DataStore>(
    store: &mut S,
    dealer_id: &Uuid,
    plate: &str,
    changes: CarChanges,
) -> Result<CmdResult> {
    let plate = normalize_plate(plate);
    let changes = normalized(changes);

    if changes.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("Nothing to update."));
        return Ok(result);
    }
    if let Some(new_plate) = &changes.plate {
        require_plate(new_plate)?;
    }
    if let Some(year) = &changes.year {
        require_year(year)?;
    }

    let mut doc = store.load_dealers()?;
    let dealer = dealer_mut(&mut doc, dealer_id)?;
    if let Some(new_plate) = &changes.plate {
        if *new_plate != plate && dealer.has_plate(new_plate) {
            return Err(CarlotError::Conflict(format!(
                "Another car already uses plate {}.",
                new_plate
            )));
        }
    }

    let car = car_mut(dealer, &plate)?;
    car.change_information(changes);
    let car = car.clone();
    store.save_dealers(&doc)?;
    info!(dealer = %dealer_id, plate = %plate, new_plate = %car.plate, "vehicle updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Vehicle {} successfully updated",
        car.plate
    )));
    Ok(result.with_affected_cars(vec![car]))
}
