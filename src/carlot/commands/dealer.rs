use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarlotError, Result};
use crate::model::CarDealer;
use crate::store::DataStore;
use tracing::info;
use uuid::Uuid;

pub fn find_by_id<S: DataStore>(store: &S, id: &Uuid) -> Result<Option<CarDealer>> {
    let doc = store.load_dealers()?;
    Ok(doc.dealer(id).cloned())
}

pub fn find_by_name<S: DataStore>(store: &S, name: &str) -> Result<Option<CarDealer>> {
    let doc = store.load_dealers()?;
    Ok(doc.dealer_by_name(name.trim()).cloned())
}

pub fn create<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CarlotError::InvalidFormat(
            "Dealer name cannot be empty.".to_string(),
        ));
    }

    let mut doc = store.load_dealers()?;
    if doc.dealer_by_name(name).is_some() {
        return Err(CarlotError::Conflict(format!(
            "Dealer '{}' already exists.",
            name
        )));
    }

    let dealer = CarDealer::new(name.to_string());
    doc.dealers.push(dealer.clone());
    store.save_dealers(&doc)?;
    info!(dealer = %dealer.id, name = %dealer.name, "dealer created");

    let mut result = CmdResult::default().with_dealer(dealer);
    result.add_message(CmdMessage::success(format!(
        "Dealer '{}' created successfully!",
        name
    )));
    Ok(result)
}
