//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every carlot operation, whatever UI drives it.
//!
//! The facade dispatches to the matching command function and returns
//! structured types. It holds no business logic and does no terminal I/O.
//!
//! ## Generic Over DataStore
//!
//! `CarlotApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CarlotApi<FileStore>`
//! - Testing: `CarlotApi<InMemoryStore>`
//!
//! Every operation re-reads the documents it needs from the store; nothing
//! is cached on the facade between calls.

use crate::commands;
use crate::config::CarlotConfig;
use crate::error::Result;
use crate::model::{CarChanges, CarDealer, SessionDocument};
use crate::store::DataStore;
use uuid::Uuid;

pub struct CarlotApi<S: DataStore> {
    store: S,
    paths: commands::CarlotPaths,
}

impl<S: DataStore> CarlotApi<S> {
    pub fn new(store: S, paths: commands::CarlotPaths) -> Self {
        Self { store, paths }
    }

    pub fn find_dealer_by_id(&self, id: &Uuid) -> Result<Option<CarDealer>> {
        commands::dealer::find_by_id(&self.store, id)
    }

    pub fn find_dealer_by_name(&self, name: &str) -> Result<Option<CarDealer>> {
        commands::dealer::find_by_name(&self.store, name)
    }

    pub fn create_dealer(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::dealer::create(&mut self.store, name)
    }

    pub fn add_vehicle(
        &mut self,
        dealer_id: &Uuid,
        new_car: commands::add::NewCar,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, dealer_id, new_car)
    }

    pub fn remove_vehicle(&mut self, plate: &str, dealer_id: &Uuid) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, dealer_id, plate)
    }

    pub fn list_vehicles(&self, dealer_id: &Uuid) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, dealer_id)
    }

    pub fn view_vehicle(&self, dealer_id: &Uuid, plate: &str) -> Result<commands::CmdResult> {
        let config = CarlotConfig::load(&self.paths.data_dir)?;
        commands::view::run(&self.store, dealer_id, plate, config.history_limit)
    }

    pub fn update_vehicle(
        &mut self,
        dealer_id: &Uuid,
        plate: &str,
        changes: CarChanges,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, dealer_id, plate, changes)
    }

    pub fn rent_car(
        &mut self,
        dealer_id: &Uuid,
        plate: &str,
        user_id: &str,
    ) -> Result<commands::CmdResult> {
        commands::rent::run(&mut self.store, dealer_id, plate, user_id)
    }

    pub fn return_car(&mut self, dealer_id: &Uuid, plate: &str) -> Result<commands::CmdResult> {
        commands::return_car::run(&mut self.store, dealer_id, plate)
    }

    pub fn log_in(&mut self, dealer: &CarDealer, presence: bool) -> Result<commands::CmdResult> {
        commands::session::log_in(&mut self.store, dealer, presence)
    }

    pub fn log_out(&mut self) -> Result<commands::CmdResult> {
        commands::session::log_out(&mut self.store)
    }

    pub fn set_presence(&mut self, presence: bool) -> Result<commands::CmdResult> {
        commands::session::set_presence(&mut self.store, presence)
    }

    pub fn active_session(&self) -> Result<Option<SessionDocument>> {
        commands::session::active_session(&self.store)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::session::status(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.store, &self.paths)
    }

    pub fn paths(&self) -> &commands::CarlotPaths {
        &self.paths
    }
}

pub use crate::commands::add::NewCar;
pub use crate::commands::config::ConfigAction;
pub use commands::{CarlotPaths, CmdMessage, CmdResult, MessageLevel, VehicleListing};
