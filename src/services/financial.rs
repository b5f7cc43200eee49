use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Duration, Months, NaiveDate};
use sea_orm::{entity::prelude::*, PaginatorTrait};

use crate::{
    entities::{
        appointment, pet,
        sea_orm_active_enums::{AppointmentStatus, PetStatus},
        review, service, user,
    },
    types::{
        AdminFinancialSummary, DailyActivity, PatientInfo, RevenueByService, TopClient,
        VeterinarianStats,
    },
};

/// Revenue is the actual cost of Completed appointments. The callers pass
/// `today` in so period boundaries stay deterministic under test.
pub struct FinancialQuery;

impl FinancialQuery {
    async fn completed_with_cost(
        db: &DbConn,
        veterinarian_id: Option<Uuid>,
    ) -> Result<Vec<appointment::Model>, DbErr> {
        let mut query = appointment::Entity::find()
            .filter(appointment::Column::Status.eq(AppointmentStatus::Completed))
            .filter(appointment::Column::ActualCost.is_not_null());
        if let Some(veterinarian_id) = veterinarian_id {
            query = query.filter(appointment::Column::VeterinarianId.eq(veterinarian_id));
        }
        query.all(db).await
    }

    pub async fn admin_summary(
        db: &DbConn,
        today: NaiveDate,
    ) -> Result<AdminFinancialSummary, DbErr> {
        let this_month = today.with_day(1).unwrap();
        let last_month = this_month.checked_sub_months(Months::new(1)).unwrap();
        let this_year = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap();
        let last_year = NaiveDate::from_ymd_opt(today.year() - 1, 1, 1).unwrap();

        let completed = Self::completed_with_cost(db, None).await?;
        let revenue_between = |from: NaiveDate, until: Option<NaiveDate>| -> f64 {
            completed
                .iter()
                .filter(|a| a.date >= from && until.map_or(true, |until| a.date < until))
                .filter_map(|a| a.actual_cost)
                .sum()
        };

        let daily_revenue: f64 = completed
            .iter()
            .filter(|a| a.date == today)
            .filter_map(|a| a.actual_cost)
            .sum();
        let daily_appointments = appointment::Entity::find()
            .filter(appointment::Column::Date.eq(today))
            .count(db)
            .await?;

        let monthly_revenue = revenue_between(this_month, None);
        let last_month_revenue = revenue_between(last_month, Some(this_month));
        let monthly_growth_percentage = growth_percentage(monthly_revenue, last_month_revenue);

        let yearly_revenue = revenue_between(this_year, None);
        let last_year_revenue = revenue_between(last_year, Some(this_year));
        let yearly_growth_percentage = growth_percentage(yearly_revenue, last_year_revenue);

        let average_appointment_cost = average_cost(&completed);

        let daily_revenue_data = (0..60)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset);
                DailyActivity {
                    date,
                    appointments: completed.iter().filter(|a| a.date == date).count() as u64,
                    revenue: completed
                        .iter()
                        .filter(|a| a.date == date)
                        .filter_map(|a| a.actual_cost)
                        .sum(),
                }
            })
            .collect();

        let mut revenue_by_service = Self::group_by_service(db, &completed).await?;
        revenue_by_service.truncate(10);

        let top_clients = Self::top_clients(db, &completed, 10).await?;

        Ok(AdminFinancialSummary {
            daily_revenue,
            daily_appointments,
            monthly_revenue,
            monthly_growth_percentage,
            average_appointment_cost,
            yearly_growth_percentage,
            daily_revenue_data,
            revenue_by_service,
            top_clients,
        })
    }

    pub async fn veterinarian_stats(
        db: &DbConn,
        veterinarian_id: Uuid,
        today: NaiveDate,
    ) -> Result<VeterinarianStats, DbErr> {
        let this_month = today.with_day(1).unwrap();

        let today_appointments = appointment::Entity::find()
            .filter(appointment::Column::VeterinarianId.eq(veterinarian_id))
            .filter(appointment::Column::Date.eq(today))
            .count(db)
            .await?;
        let monthly_appointments = appointment::Entity::find()
            .filter(appointment::Column::VeterinarianId.eq(veterinarian_id))
            .filter(appointment::Column::Date.gte(this_month))
            .count(db)
            .await?;

        let completed = Self::completed_with_cost(db, Some(veterinarian_id)).await?;
        let monthly_revenue: f64 = completed
            .iter()
            .filter(|a| a.date >= this_month)
            .filter_map(|a| a.actual_cost)
            .sum();
        let average_appointment_cost = average_cost(&completed);

        let all_appointments = appointment::Entity::find()
            .filter(appointment::Column::VeterinarianId.eq(veterinarian_id))
            .all(db)
            .await?;
        let seen_pet_ids: HashSet<Uuid> = all_appointments.iter().map(|a| a.pet_id).collect();
        let pets: HashMap<Uuid, pet::Model> = pet::Entity::find()
            .filter(pet::Column::Id.is_in(seen_pet_ids.iter().copied().collect::<Vec<_>>()))
            .all(db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        let total_patients = pets
            .values()
            .filter(|p| p.status == PetStatus::Active)
            .count() as u64;

        let owner_ids: Vec<Uuid> = pets.values().map(|p| p.owner_id).collect();
        let owners: HashMap<Uuid, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(owner_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut recent = all_appointments;
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        let recent_patients = recent
            .iter()
            .filter_map(|a| {
                let pet = pets.get(&a.pet_id)?;
                let owner = owners.get(&pet.owner_id)?;
                Some(PatientInfo {
                    name: pet.name.clone(),
                    species: pet.species.clone(),
                    last_visit: a.date,
                    owner: owner.full_name(),
                })
            })
            .take(3)
            .collect();

        let ratings = review::Entity::find()
            .filter(review::Column::VeterinarianId.eq(veterinarian_id))
            .filter(review::Column::IsApproved.eq(true))
            .all(db)
            .await?;
        let review_count = ratings.len() as u64;
        let average_rating = if ratings.is_empty() {
            0.0
        } else {
            let sum: i64 = ratings.iter().map(|r| r.rating as i64).sum();
            ((sum as f64 / ratings.len() as f64) * 10.0).round() / 10.0
        };

        Ok(VeterinarianStats {
            today_appointments,
            monthly_appointments,
            monthly_revenue,
            average_appointment_cost,
            total_patients,
            recent_patients,
            average_rating,
            review_count,
        })
    }

    /// Per-day appointment count and completed revenue for the last 7 days.
    pub async fn veterinarian_daily(
        db: &DbConn,
        veterinarian_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<DailyActivity>, DbErr> {
        let window_start = today - Duration::days(6);
        let appointments = appointment::Entity::find()
            .filter(appointment::Column::VeterinarianId.eq(veterinarian_id))
            .filter(appointment::Column::Date.gte(window_start))
            .filter(appointment::Column::Date.lte(today))
            .all(db)
            .await?;

        Ok((0..7)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset);
                let on_day: Vec<&appointment::Model> =
                    appointments.iter().filter(|a| a.date == date).collect();
                DailyActivity {
                    date,
                    appointments: on_day.len() as u64,
                    revenue: on_day
                        .iter()
                        .filter(|a| a.status == AppointmentStatus::Completed)
                        .filter_map(|a| a.actual_cost)
                        .sum(),
                }
            })
            .collect())
    }

    pub async fn revenue_by_service(
        db: &DbConn,
        veterinarian_id: Option<Uuid>,
    ) -> Result<Vec<RevenueByService>, DbErr> {
        let completed = Self::completed_with_cost(db, veterinarian_id).await?;
        Self::group_by_service(db, &completed).await
    }

    async fn group_by_service(
        db: &DbConn,
        completed: &[appointment::Model],
    ) -> Result<Vec<RevenueByService>, DbErr> {
        let mut grouped: HashMap<Uuid, (f64, u64)> = HashMap::new();
        for appointment in completed {
            if let (Some(service_id), Some(cost)) = (appointment.service_id, appointment.actual_cost)
            {
                let entry = grouped.entry(service_id).or_insert((0.0, 0));
                entry.0 += cost;
                entry.1 += 1;
            }
        }

        let services: HashMap<Uuid, service::Model> = service::Entity::find()
            .filter(service::Column::Id.is_in(grouped.keys().copied().collect::<Vec<_>>()))
            .all(db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let mut rows: Vec<RevenueByService> = grouped
            .into_iter()
            .filter_map(|(service_id, (revenue, count))| {
                services.get(&service_id).map(|service| RevenueByService {
                    service_name: service.name.clone(),
                    revenue,
                    count,
                })
            })
            .collect();
        rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
        Ok(rows)
    }

    async fn top_clients(
        db: &DbConn,
        completed: &[appointment::Model],
        limit: usize,
    ) -> Result<Vec<TopClient>, DbErr> {
        let pet_ids: Vec<Uuid> = completed.iter().map(|a| a.pet_id).collect();
        let pets: HashMap<Uuid, pet::Model> = pet::Entity::find()
            .filter(pet::Column::Id.is_in(pet_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        let owner_ids: Vec<Uuid> = pets.values().map(|p| p.owner_id).collect();
        let owners: HashMap<Uuid, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(owner_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut grouped: HashMap<Uuid, (f64, u64)> = HashMap::new();
        for appointment in completed {
            if let (Some(pet), Some(cost)) = (pets.get(&appointment.pet_id), appointment.actual_cost)
            {
                let entry = grouped.entry(pet.owner_id).or_insert((0.0, 0));
                entry.0 += cost;
                entry.1 += 1;
            }
        }

        let mut rows: Vec<TopClient> = grouped
            .into_iter()
            .filter_map(|(owner_id, (total_spent, appointment_count))| {
                owners.get(&owner_id).map(|owner| TopClient {
                    name: owner.full_name(),
                    total_spent,
                    appointment_count,
                })
            })
            .collect();
        rows.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));
        rows.truncate(limit);
        Ok(rows)
    }
}

fn growth_percentage(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}

fn average_cost(completed: &[appointment::Model]) -> f64 {
    if completed.is_empty() {
        return 0.0;
    }
    completed.iter().filter_map(|a| a.actual_cost).sum::<f64>() / completed.len() as f64
}
