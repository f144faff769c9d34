pub const CREATE_PATIENTS: &str = "
CREATE TABLE IF NOT EXISTS patients (
    username TEXT PRIMARY KEY,
    salt TEXT NOT NULL,
    hash TEXT NOT NULL
)
";

pub const CREATE_CAREGIVERS: &str = "
CREATE TABLE IF NOT EXISTS caregivers (
    username TEXT PRIMARY KEY,
    salt TEXT NOT NULL,
    hash TEXT NOT NULL
)
";

pub const CREATE_AVAILABILITIES: &str = "
CREATE TABLE IF NOT EXISTS availabilities (
    time DATE NOT NULL,
    username TEXT NOT NULL,
    FOREIGN KEY (username)
        REFERENCES caregivers(username)
)
";

pub const CREATE_VACCINES: &str = "
CREATE TABLE IF NOT EXISTS vaccines (
    name TEXT PRIMARY KEY,
    doses INTEGER NOT NULL
)
";

pub const CREATE_APPOINTMENTS: &str = "
CREATE TABLE IF NOT EXISTS appointments (
    appointment_id INTEGER PRIMARY KEY,
    caregiver TEXT NOT NULL,
    patient TEXT NOT NULL,
    time DATE NOT NULL,
    vaccine TEXT NOT NULL,
    FOREIGN KEY (caregiver)
        REFERENCES caregivers(username),
    FOREIGN KEY (patient)
        REFERENCES patients(username),
    FOREIGN KEY (vaccine)
        REFERENCES vaccines(name)
)
";
