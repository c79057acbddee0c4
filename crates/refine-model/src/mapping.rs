//! User-chosen mapping from source CSV columns to canonical contact fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mapping from logical target field to a chosen source column name.
///
/// `None` means the user left the field unmapped. Supplied once per batch
/// and validated before any inference call is made.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl ColumnMapping {
    /// Enforce the batch invariant: phone must be mapped, and name must be
    /// reachable either as a full-name column or as first + last columns.
    pub fn validate(&self) -> Result<(), MappingError> {
        if self.phone.is_none() {
            return Err(MappingError::PhoneUnmapped);
        }
        let has_full = self.full_name.is_some();
        let has_split = self.first_name.is_some() && self.last_name.is_some();
        if !has_full && !has_split {
            return Err(MappingError::NameUnmapped);
        }
        Ok(())
    }
}

/// Errors from column-mapping validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// No source column was chosen for the phone field.
    #[error("חובה לבחור עמודה עבור טלפון")]
    PhoneUnmapped,
    /// Neither a full-name column nor first+last columns were chosen.
    #[error("חובה לבחור שם מלא או שם פרטי ושם משפחה")]
    NameUnmapped,
}
