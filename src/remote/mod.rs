//! Remote store client: the spreadsheet-backed system of record.
//!
//! Two operations only:
//! - `load()` reads all four collections
//! - `save()` appends one record to a sheet
//!
//! The trait is the injection seam; `SheetsClient` talks HTTP and
//! `MockRemoteStore` scripts responses for tests.

pub mod mock;
pub mod sheets;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Appointment, Collection, Department, Doctor, Patient, WriteAction};

pub use mock::MockRemoteStore;
pub use sheets::SheetsClient;

/// Errors from the remote store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoteError {
    #[error("Remote store not configured")]
    NotConfigured,

    #[error("Cannot reach remote store at {0}")]
    Connection(String),

    #[error("Remote store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response from remote store: {0}")]
    ResponseParsing(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Capability set of the remote store.
pub trait RemoteStore: Send + Sync {
    /// Read every collection. Collections missing from the response are `None`.
    fn load(&self) -> Result<RemoteSnapshot, RemoteError>;

    /// Write one record; `Ok(false)` means the store answered but refused.
    fn save(&self, request: &WriteRequest) -> Result<bool, RemoteError>;
}

/// Body of a write request: `{ sheet, action, data }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteRequest {
    pub sheet: String,
    pub action: WriteAction,
    pub data: Value,
}

impl WriteRequest {
    pub fn add(collection: Collection, data: Value) -> Self {
        Self {
            sheet: collection.sheet_name().to_string(),
            action: WriteAction::Add,
            data,
        }
    }
}

/// Collections returned by a load. Each is replaced wholesale when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteSnapshot {
    pub patients: Option<Vec<Patient>>,
    pub doctors: Option<Vec<Doctor>>,
    pub appointments: Option<Vec<Appointment>>,
    pub departments: Option<Vec<Department>>,
}

impl RemoteSnapshot {
    pub fn is_empty(&self) -> bool {
        self.patients.is_none()
            && self.doctors.is_none()
            && self.appointments.is_none()
            && self.departments.is_none()
    }

    /// Decode a load response.
    ///
    /// Each collection may arrive as an array of objects, or as a
    /// row-oriented sheet dump whose first row holds the column names.
    pub fn from_json(value: Value) -> Result<Self, RemoteError> {
        let Value::Object(mut root) = value else {
            return Err(RemoteError::ResponseParsing(
                "expected a JSON object".into(),
            ));
        };

        Ok(Self {
            patients: take_collection(&mut root, Collection::Patients)?,
            doctors: take_collection(&mut root, Collection::Doctors)?,
            appointments: take_collection(&mut root, Collection::Appointments)?,
            departments: take_collection(&mut root, Collection::Departments)?,
        })
    }
}

fn take_collection<T: serde::de::DeserializeOwned>(
    root: &mut Map<String, Value>,
    collection: Collection,
) -> Result<Option<Vec<T>>, RemoteError> {
    let value = root
        .remove(collection.as_str())
        .or_else(|| root.remove(collection.sheet_name()));

    let rows = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(rows)) => rows,
        Some(_) => {
            return Err(RemoteError::ResponseParsing(format!(
                "{collection} is not an array"
            )))
        }
    };

    let records = if rows.first().is_some_and(Value::is_array) {
        rows_to_records(rows)
    } else {
        rows
    };

    serde_json::from_value(Value::Array(records))
        .map(Some)
        .map_err(|e| RemoteError::ResponseParsing(format!("{collection}: {e}")))
}

/// Turn `[[header...], [cell...], ...]` into `[{header: cell, ...}, ...]`.
fn rows_to_records(rows: Vec<Value>) -> Vec<Value> {
    let mut iter = rows.into_iter();
    let header: Vec<String> = match iter.next() {
        Some(Value::Array(cells)) => cells
            .into_iter()
            .map(|c| match c {
                Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .collect(),
        _ => return Vec::new(),
    };

    iter.filter_map(|row| match row {
        Value::Array(cells) => Some(Value::Object(
            header.iter().cloned().zip(cells).collect::<Map<_, _>>(),
        )),
        _ => None,
    })
    .collect()
}
