use chrono::NaiveDate;
use mockall::mock;

use crate::models::DbAppointment;

// Mock repository for testing
mock! {
    pub AppointmentRepo {
        pub async fn list_appointments(&self) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn get_appointment_by_id(
            &self,
            id: i32,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn create_appointment(
            &self,
            nome: String,
            data: NaiveDate,
            hora: String,
            descricao: Option<String>,
        ) -> eyre::Result<DbAppointment>;

        pub async fn update_appointment(
            &self,
            id: i32,
            nome: Option<String>,
            data: Option<NaiveDate>,
            hora: Option<String>,
            descricao: Option<String>,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn delete_appointment(
            &self,
            id: i32,
        ) -> eyre::Result<bool>;
    }
}
