use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rental state of a car. Derived from `is_in_use`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalStatus {
    Available,
    Rented,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Car {
    pub id: Uuid,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub vin: String,
    pub is_in_use: bool,
    // Set only while `is_in_use` is true
    pub current_user: Option<String>,
    #[serde(default)]
    pub last_users: Vec<String>,
}

impl Car {
    pub fn new(
        plate: String,
        vin: String,
        brand: String,
        model: String,
        year: String,
        color: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            plate,
            brand,
            model,
            year,
            color,
            vin,
            is_in_use: false,
            current_user: None,
            last_users: Vec::new(),
        }
    }

    pub fn status(&self) -> RentalStatus {
        if self.is_in_use {
            RentalStatus::Rented
        } else {
            RentalStatus::Available
        }
    }

    /// Marks the car as rented to `user_id` and records it in the history.
    /// Callers check the current status first.
    pub fn rent_to(&mut self, user_id: String) {
        self.is_in_use = true;
        self.current_user = Some(user_id.clone());
        self.last_users.push(user_id);
    }

    /// Clears the current renter. The history is left untouched.
    pub fn release(&mut self) {
        self.is_in_use = false;
        self.current_user = None;
    }

    /// Overwrites the descriptive fields that were provided, keeping the rest.
    pub fn change_information(&mut self, changes: CarChanges) {
        if let Some(plate) = changes.plate {
            self.plate = plate;
        }
        if let Some(brand) = changes.brand {
            self.brand = brand;
        }
        if let Some(model) = changes.model {
            self.model = model;
        }
        if let Some(year) = changes.year {
            self.year = year;
        }
        if let Some(color) = changes.color {
            self.color = color;
        }
    }

    /// The last `limit` renters, most recent first.
    pub fn recent_users(&self, limit: usize) -> Vec<String> {
        self.last_users.iter().rev().take(limit).cloned().collect()
    }
}

/// Optional replacements for a car's descriptive fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarChanges {
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub color: Option<String>,
}

impl CarChanges {
    pub fn is_empty(&self) -> bool {
        self.plate.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.color.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CarDealer {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub cars: Vec<Car>,
}

impl CarDealer {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            cars: Vec::new(),
        }
    }

    pub fn car(&self, plate: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.plate == plate)
    }

    pub fn car_mut(&mut self, plate: &str) -> Option<&mut Car> {
        self.cars.iter_mut().find(|c| c.plate == plate)
    }

    pub fn has_plate(&self, plate: &str) -> bool {
        self.car(plate).is_some()
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// The whole fleet: every dealer and its cars, stored as one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DealersDocument {
    #[serde(rename = "Type")]
    pub doc_type: String,
    pub description: String,
    #[serde(default)]
    pub dealers: Vec<CarDealer>,
}

impl Default for DealersDocument {
    fn default() -> Self {
        Self {
            doc_type: "Dealers".to_string(),
            description: "Dealers list".to_string(),
            dealers: Vec::new(),
        }
    }
}

impl DealersDocument {
    pub fn dealer(&self, id: &Uuid) -> Option<&CarDealer> {
        self.dealers.iter().find(|d| d.id == *id)
    }

    pub fn dealer_mut(&mut self, id: &Uuid) -> Option<&mut CarDealer> {
        self.dealers.iter_mut().find(|d| d.id == *id)
    }

    pub fn dealer_by_name(&self, name: &str) -> Option<&CarDealer> {
        self.dealers.iter().find(|d| d.name_matches(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionDocument {
    #[serde(rename = "Type")]
    pub doc_type: String,
    pub description: String,
    pub dealer_id: Option<Uuid>,
    #[serde(default)]
    pub presence: bool,
}

impl Default for SessionDocument {
    fn default() -> Self {
        Self {
            doc_type: "Session".to_string(),
            description: "Session config".to_string(),
            dealer_id: None,
            presence: false,
        }
    }
}

impl SessionDocument {
    pub fn for_dealer(dealer_id: Uuid, presence: bool) -> Self {
        Self {
            dealer_id: Some(dealer_id),
            presence,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.dealer_id.is_some()
    }
}
