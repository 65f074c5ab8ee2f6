use crate::error::{CarlotError, Result};
use crate::model::{Car, CarDealer, DealersDocument};
use crate::validation::{is_valid_plate, is_valid_year};
use uuid::Uuid;

/// Plates are matched in their uppercase form.
pub fn normalize_plate(plate: &str) -> String {
    plate.to_uppercase()
}

pub fn require_plate(plate: &str) -> Result<()> {
    if !is_valid_plate(plate) {
        return Err(CarlotError::InvalidFormat(
            "Plate is not valid. (Use format XXX-000)".to_string(),
        ));
    }
    Ok(())
}

pub fn require_year(year: &str) -> Result<()> {
    if !is_valid_year(year) {
        return Err(CarlotError::InvalidFormat(
            "Year must contain 4 digits.".to_string(),
        ));
    }
    Ok(())
}

pub fn dealer<'a>(doc: &'a DealersDocument, id: &Uuid) -> Result<&'a CarDealer> {
    doc.dealer(id)
        .ok_or_else(|| CarlotError::DealerNotFound(id.to_string()))
}

pub fn dealer_mut<'a>(doc: &'a mut DealersDocument, id: &Uuid) -> Result<&'a mut CarDealer> {
    doc.dealer_mut(id)
        .ok_or_else(|| CarlotError::DealerNotFound(id.to_string()))
}

pub fn car<'a>(dealer: &'a CarDealer, plate: &str) -> Result<&'a Car> {
    dealer
        .car(plate)
        .ok_or_else(|| CarlotError::VehicleNotFound(plate.to_string()))
}

pub fn car_mut<'a>(dealer: &'a mut CarDealer, plate: &str) -> Result<&'a mut Car> {
    dealer
        .car_mut(plate)
        .ok_or_else(|| CarlotError::VehicleNotFound(plate.to_string()))
}
