use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::{car, dealer, normalize_plate, require_plate};

/// Fetches a single car together with its most recent renters.
pub fn run<S: DataStore>(
    store: &S,
    dealer_id: &Uuid,
    plate: &str,
    history_limit: usize,
) -> Result<CmdResult> {
    let plate = normalize_plate(plate);
    require_plate(&plate)?;

    let doc = store.load_dealers()?;
    let car = car(dealer(&doc, dealer_id)?, &plate)?;
    let recent = car.recent_users(history_limit);

    Ok(CmdResult::default()
        .with_affected_cars(vec![car.clone()])
        .with_recent_users(recent))
}
