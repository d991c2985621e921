//! Customer details collected at checkout.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Delivery details the checkout form hands over.
///
/// The presentation layer collects these as plain text; validation here
/// is the contract, not the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerInfo {
    /// Customer name.
    pub name: String,
    /// Grade (e.g., "10").
    pub grade: String,
    /// Meet location (e.g., "Main Quad").
    pub pickup_location: String,
    /// Delivery time slot (e.g., "High School Lunch").
    pub time_slot: Option<String>,
    /// Free-form delivery notes.
    pub notes: Option<String>,
}

impl CustomerInfo {
    /// Create customer info with the required fields.
    pub fn new(
        name: impl Into<String>,
        grade: impl Into<String>,
        pickup_location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
            pickup_location: pickup_location.into(),
            time_slot: None,
            notes: None,
        }
    }

    /// Set the time slot.
    pub fn with_time_slot(mut self, slot: impl Into<String>) -> Self {
        self.time_slot = Some(slot.into());
        self
    }

    /// Set delivery notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check the required fields are present.
    ///
    /// Blank (all-whitespace) values count as missing; the first missing
    /// field is reported by name.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::MissingField("name"));
        }
        if self.grade.trim().is_empty() {
            return Err(CommerceError::MissingField("grade"));
        }
        if self.pickup_location.trim().is_empty() {
            return Err(CommerceError::MissingField("pickup location"));
        }
        Ok(())
    }
}
