mod appointments;
mod categories;
mod financial;
mod general;
mod medical_records;
mod pets;
mod reviews;
mod services;
mod users;

pub use appointments::{AppointmentVisible, AvailableSlots};
pub use categories::{CategoryVisible, CategoryWithSubcategories};
pub use financial::{
    AdminFinancialSummary, DailyActivity, PatientInfo, RevenueByService, TopClient,
    VeterinarianStats,
};
pub use general::{ErrorResponse, SuccessResponse, INTERNAL_SERVER_ERROR_MESSAGE};
pub use medical_records::MedicalRecordVisible;
pub use pets::{PetVisible, PetWithOwner};
pub use reviews::ReviewVisible;
pub use services::ServiceVisible;
pub use users::{AuthResponse, TwoFactorChallenge, UserVisible};
