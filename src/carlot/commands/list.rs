use crate::commands::{CmdMessage, CmdResult, VehicleListing};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::dealer;

pub fn run<S: DataStore>(store: &S, dealer_id: &Uuid) -> Result<CmdResult> {
    let doc = store.load_dealers()?;
    let dealer = dealer(&doc, dealer_id)?;
    let listing = VehicleListing::from_cars(&dealer.cars);

    let mut result = CmdResult::default();
    if listing.is_empty() {
        result.add_message(CmdMessage::info("No cars found."));
    }
    Ok(result.with_listing(listing))
}
