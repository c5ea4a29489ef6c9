pub mod analytics;
pub mod appointment;
pub mod department;
pub mod doctor;
pub mod enums;
pub mod filters;
pub(crate) mod lenient;
pub mod patient;

pub use analytics::{AgeDistribution, Analytics, MonthlyRevenue, WeeklyAppointments};
pub use appointment::{Appointment, PENDING_STATUS};
pub use department::Department;
pub use doctor::Doctor;
pub use enums::{
    Collection, Gender, NotificationKind, ParseEnumError, SortOrder, View,
    WriteAction,
};
pub use filters::{AppointmentFilter, PatientFilter};
pub use patient::{Patient, NEW_PATIENT_STATUS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_decodes_sheet_row() {
        let patient: Patient = serde_json::from_str(
            r#"{
                "patient_id": "3",
                "first_name": "Asha",
                "last_name": "Rao",
                "age": "67",
                "gender": "F",
                "phone": "555-0199",
                "address": "12 Lake Rd",
                "blood_group": "O+",
                "status": "Admitted"
            }"#,
        )
        .unwrap();
        assert_eq!(patient.patient_id, 3);
        assert_eq!(patient.age, 67);
        assert_eq!(patient.gender, Gender::Female);
        assert_eq!(patient.full_name(), "Asha Rao");
    }

    #[test]
    fn missing_fields_decode_to_blanks() {
        let patient: Patient = serde_json::from_str(r#"{"patient_id": 9}"#).unwrap();
        assert_eq!(patient.first_name, "");
        assert_eq!(patient.gender, Gender::Other);
        assert_eq!(patient.age, 0);
    }

    #[test]
    fn doctor_reads_specialist_column() {
        let doctor: Doctor = serde_json::from_str(
            r#"{"doctor_id": 1, "name": "Dr. Mehta", "department": "Cardiology",
                "specialist": "Cardiologist", "phone": "555", "available": "TRUE"}"#,
        )
        .unwrap();
        assert_eq!(doctor.specialization, "Cardiologist");
        assert!(doctor.available);
        assert_eq!(doctor.surname(), "Mehta");

        let json = serde_json::to_value(&doctor).unwrap();
        assert_eq!(json["specialist"], "Cardiologist");
    }

    #[test]
    fn single_word_doctor_name_is_its_own_surname() {
        let doctor: Doctor = serde_json::from_str(r#"{"doctor_id": 2, "name": "House"}"#).unwrap();
        assert_eq!(doctor.surname(), "House");
    }

    #[test]
    fn appointment_notes_are_optional() {
        let appt: Appointment = serde_json::from_str(
            r#"{"appt_id": 1, "patient_id": 2, "doctor_id": 3, "date": "2026-10-18",
                "time": "09:00", "treatment": "Checkup", "status": "Pending"}"#,
        )
        .unwrap();
        assert_eq!(appt.notes, None);
        assert_eq!(appt.status, PENDING_STATUS);
    }

    #[test]
    fn default_analytics_has_six_weekday_placeholders() {
        let analytics = Analytics::default();
        let days: Vec<&str> = analytics
            .weekly_appointments
            .iter()
            .map(|w| w.day.as_str())
            .collect();
        assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
        assert!(analytics.monthly_revenue.is_empty());
        assert_eq!(analytics.patient_age_distribution.total(), 0);
    }
}
