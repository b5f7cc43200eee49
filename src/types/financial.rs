use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct AdminFinancialSummary {
    pub daily_revenue: f64,
    pub daily_appointments: u64,
    pub monthly_revenue: f64,
    pub monthly_growth_percentage: f64,
    pub average_appointment_cost: f64,
    pub yearly_growth_percentage: f64,
    pub daily_revenue_data: Vec<DailyActivity>,
    pub revenue_by_service: Vec<RevenueByService>,
    pub top_clients: Vec<TopClient>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VeterinarianStats {
    pub today_appointments: u64,
    pub monthly_appointments: u64,
    pub monthly_revenue: f64,
    pub average_appointment_cost: f64,
    pub total_patients: u64,
    pub recent_patients: Vec<PatientInfo>,
    pub average_rating: f64,
    pub review_count: u64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DailyActivity {
    pub date: chrono::NaiveDate,
    pub appointments: u64,
    pub revenue: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RevenueByService {
    pub service_name: String,
    pub revenue: f64,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct TopClient {
    pub name: String,
    pub total_spent: f64,
    pub appointment_count: u64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PatientInfo {
    pub name: String,
    pub species: String,
    pub last_visit: chrono::NaiveDate,
    pub owner: String,
}
