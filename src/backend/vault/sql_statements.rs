pub const SELECT_PATIENT: &str = "
    SELECT username, salt, hash
    FROM patients
    WHERE
        username = ?1
";

pub const SELECT_CAREGIVER: &str = "
    SELECT username, salt, hash
    FROM caregivers
    WHERE
        username = ?1
";

pub const INSERT_PATIENT: &str = "
    INSERT INTO patients (username, salt, hash)
    VALUES (?1, ?2, ?3)
";

pub const INSERT_CAREGIVER: &str = "
    INSERT INTO caregivers (username, salt, hash)
    VALUES (?1, ?2, ?3)
";

pub const INSERT_AVAILABILITY: &str = "
    INSERT INTO availabilities (username, time)
    VALUES (?1, ?2)
";

pub const SELECT_AVAILABLE_CAREGIVERS: &str = "
    SELECT DISTINCT username
    FROM availabilities
    WHERE
        time = ?1
    ORDER BY username
";

pub const SELECT_FIRST_AVAILABLE_CAREGIVER: &str = "
    SELECT username
    FROM availabilities
    WHERE
        time = ?1
    ORDER BY username
    LIMIT 1
";

pub const SELECT_VACCINE: &str = "
    SELECT name, doses
    FROM vaccines
    WHERE
        name = ?1
";

pub const SELECT_ALL_VACCINES: &str = "
    SELECT name, doses
    FROM vaccines
    ORDER BY name
";

pub const INSERT_VACCINE: &str = "
    INSERT INTO vaccines (name, doses)
    VALUES (?1, ?2)
";

pub const UPDATE_VACCINE_SET_DOSES: &str = "
    UPDATE vaccines
    SET doses = ?2
    WHERE name = ?1
";

pub const UPDATE_VACCINE_TAKE_DOSE: &str = "
    UPDATE vaccines
    SET doses = doses - 1
    WHERE
        name = ?1
        AND doses > 0
";

pub const SELECT_NEXT_APPOINTMENT_ID: &str = "
    SELECT COALESCE(MAX(appointment_id), 0) + 1
    FROM appointments
";

pub const INSERT_APPOINTMENT: &str = "
    INSERT INTO appointments (appointment_id, caregiver, patient, time, vaccine)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

pub const SELECT_PATIENT_APPOINTMENTS: &str = "
    SELECT appointment_id, caregiver, patient, time, vaccine
    FROM appointments
    WHERE
        patient = ?1
    ORDER BY appointment_id
";

pub const SELECT_CAREGIVER_APPOINTMENTS: &str = "
    SELECT appointment_id, caregiver, patient, time, vaccine
    FROM appointments
    WHERE
        caregiver = ?1
    ORDER BY appointment_id
";

pub const SELECT_APPOINTMENT: &str = "
    SELECT appointment_id, caregiver, patient, time, vaccine
    FROM appointments
    WHERE
        appointment_id = ?1
";
