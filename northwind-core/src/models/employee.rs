use super::{Entity, Payload, calendar_date};
use serde::{Deserialize, Serialize};
use time::Date;

/// An employee. `reports_to` points at another employee's id.
///
/// Birth and hire dates are stored as full timestamps; only the calendar date
/// survives a read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Generated identity
    #[serde(default)]
    pub employee_id: i64,
    /// Family name
    pub last_name: Option<String>,
    /// Given name
    pub first_name: Option<String>,
    /// Job title
    pub title: Option<String>,
    /// Mr., Ms., Dr. and so on
    pub title_of_courtesy: Option<String>,
    /// Date of birth
    #[serde(default, with = "calendar_date::option")]
    pub birth_date: Option<Date>,
    /// First day of employment
    #[serde(default, with = "calendar_date::option")]
    pub hire_date: Option<Date>,
    /// Street address
    pub address: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or province
    pub region: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
    /// Country
    pub country: Option<String>,
    /// Home phone number
    pub home_phone: Option<String>,
    /// Office phone extension
    pub extension: Option<String>,
    /// Raw image bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Employee id of the manager
    pub reports_to: Option<i64>,
    /// URL of the photo
    pub photo_path: Option<String>,
    /// The employee `reports_to` refers to; populated by a keyed read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<Box<Employee>>,
}

impl Payload for Employee {}

impl Entity for Employee {
    type Key = i64;
    const NAME: &'static str = "Employee";

    fn key(&self) -> i64 {
        self.employee_id
    }
}
