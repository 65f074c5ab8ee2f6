use crate::config::CarlotConfig;
use crate::model::{Car, CarDealer, SessionDocument};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod dealer;
pub mod helpers;
pub mod init;
pub mod list;
pub mod remove;
pub mod rent;
pub mod return_car;
pub mod session;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct CarlotPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A dealer's cars split by rental status, each half in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleListing {
    pub available: Vec<Car>,
    pub rented: Vec<Car>,
}

impl VehicleListing {
    pub fn from_cars(cars: &[Car]) -> Self {
        let (rented, available): (Vec<Car>, Vec<Car>) =
            cars.iter().cloned().partition(|c| c.is_in_use);
        Self { available, rented }
    }

    /// True when the dealer has no cars at all.
    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.rented.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cars: Vec<Car>,
    pub listing: Option<VehicleListing>,
    pub dealer: Option<CarDealer>,
    pub session: Option<SessionDocument>,
    pub recent_users: Vec<String>,
    pub config: Option<CarlotConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cars(mut self, cars: Vec<Car>) -> Self {
        self.affected_cars = cars;
        self
    }

    pub fn with_listing(mut self, listing: VehicleListing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_dealer(mut self, dealer: CarDealer) -> Self {
        self.dealer = Some(dealer);
        self
    }

    pub fn with_session(mut self, session: SessionDocument) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_recent_users(mut self, users: Vec<String>) -> Self {
        self.recent_users = users;
        self
    }

    pub fn with_config(mut self, config: CarlotConfig) -> Self {
        self.config = Some(config);
        self
    }
}
