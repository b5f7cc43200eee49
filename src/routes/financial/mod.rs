mod admin_summary;
mod revenue_by_service;
mod veterinarian_daily;
mod veterinarian_stats;
mod veterinarian_top_services;

use actix_web::web::{scope, ServiceConfig};
use admin_summary::admin_financial_summary;
use revenue_by_service::admin_revenue_by_services;
use veterinarian_daily::veterinarian_daily_appointments;

pub fn financial_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/financial")
            .service(admin_financial_summary)
            .service(admin_revenue_by_services)
            .service(veterinarian_stats::veterinarian_stats)
            .service(veterinarian_daily_appointments)
            .service(veterinarian_top_services::veterinarian_top_services),
    );
}
