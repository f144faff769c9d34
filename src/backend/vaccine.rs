//! Vaccine inventory entries.

/// A named vaccine product and how many doses of it are left.
///
/// The count is signed: adding a negative number of doses is allowed, so the stored value can in
/// principle drop below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vaccine {
    name: String,
    doses: i64,
}
impl Vaccine {
    /// Create a [Vaccine] from its fields.
    pub fn from_fields(name: String, doses: i64) -> Self {
        Self { name, doses }
    }

    /// Get the `name` of this [Vaccine].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the remaining `doses` of this [Vaccine].
    pub fn doses(&self) -> i64 {
        self.doses
    }

    /// Whether at least one dose can be handed out.
    pub fn in_stock(&self) -> bool {
        self.doses > 0
    }
}
