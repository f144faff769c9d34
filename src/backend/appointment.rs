//! Confirmed appointments.
use chrono::NaiveDate;

/// A patient's reserved slot with a caregiver on a given date for a given vaccine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    id: i64,
    caregiver: String,
    patient: String,
    date: NaiveDate,
    vaccine: String,
}
impl Appointment {
    /// Create an [Appointment] from its fields.
    pub fn from_fields(
        id: i64,
        caregiver: String,
        patient: String,
        date: NaiveDate,
        vaccine: String,
    ) -> Self {
        Self {
            id,
            caregiver,
            patient,
            date,
            vaccine,
        }
    }

    /// Get the `id` of this [Appointment].
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Get the username of the caregiver assigned to this [Appointment].
    pub fn caregiver(&self) -> &str {
        &self.caregiver
    }

    /// Get the username of the patient who reserved this [Appointment].
    pub fn patient(&self) -> &str {
        &self.patient
    }

    /// Get the `date` of this [Appointment].
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the name of the vaccine for this [Appointment].
    pub fn vaccine(&self) -> &str {
        &self.vaccine
    }
}

/// The result of a caregiver schedule search: who is free on a date, and what is in stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// The searched date.
    pub date: NaiveDate,
    /// Usernames of caregivers with availability on `date`, in ascending order.
    pub caregivers: Vec<String>,
    /// The full vaccine inventory, ordered by name.
    pub inventory: Vec<super::vaccine::Vaccine>,
}
