use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{
    entity::prelude::*, Condition, JoinType::InnerJoin, QueryOrder, QuerySelect, Set,
};

use super::schedule;
use crate::{
    entities::{
        appointment, pet,
        sea_orm_active_enums::{AppointmentStatus, AppointmentType},
        service, user,
    },
    types::AppointmentVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize, Clone)]
pub struct NewAppointment {
    pub pet_id: Uuid,
    pub veterinarian_id: Uuid,
    pub service_id: Option<Uuid>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub appointment_type: AppointmentType,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub estimated_cost: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentChanges {
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub appointment_type: Option<AppointmentType>,
    pub status: Option<AppointmentStatus>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
}

pub struct AppointmentQuery;

impl AppointmentQuery {
    pub async fn find_by_id(db: &DbConn, id: Uuid) -> Result<Option<appointment::Model>, DbErr> {
        appointment::Entity::find_by_id(id).one(db).await
    }

    /// Non-cancelled appointments of a veterinarian crossing the given window.
    pub async fn find_overlapping(
        db: &DbConn,
        veterinarian_id: Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Vec<appointment::Model>, DbErr> {
        appointment::Entity::find()
            .filter(appointment::Column::VeterinarianId.eq(veterinarian_id))
            .filter(appointment::Column::Date.eq(date))
            .filter(appointment::Column::Status.ne(AppointmentStatus::Cancelled))
            .filter(appointment::Column::StartTime.lt(end_time))
            .filter(appointment::Column::EndTime.gt(start_time))
            .all(db)
            .await
    }

    pub async fn find_on_date(
        db: &DbConn,
        veterinarian_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<appointment::Model>, DbErr> {
        appointment::Entity::find()
            .filter(appointment::Column::VeterinarianId.eq(veterinarian_id))
            .filter(appointment::Column::Date.eq(date))
            .filter(appointment::Column::Status.ne(AppointmentStatus::Cancelled))
            .order_by_asc(appointment::Column::StartTime)
            .all(db)
            .await
    }

    /// Newest first; capped at 50 rows like the dashboard expects.
    pub async fn list_recent(
        db: &DbConn,
        veterinarian_id: Option<Uuid>,
    ) -> Result<Vec<appointment::Model>, DbErr> {
        let mut query = appointment::Entity::find();
        if let Some(veterinarian_id) = veterinarian_id {
            query = query.filter(appointment::Column::VeterinarianId.eq(veterinarian_id));
        }
        query
            .order_by_desc(appointment::Column::Date)
            .limit(50)
            .all(db)
            .await
    }

    pub async fn list_by_veterinarian(
        db: &DbConn,
        veterinarian_id: Uuid,
    ) -> Result<Vec<appointment::Model>, DbErr> {
        appointment::Entity::find()
            .filter(appointment::Column::VeterinarianId.eq(veterinarian_id))
            .order_by_desc(appointment::Column::Date)
            .all(db)
            .await
    }

    pub async fn list_by_owner(
        db: &DbConn,
        owner_id: Uuid,
    ) -> Result<Vec<appointment::Model>, DbErr> {
        appointment::Entity::find()
            .join(InnerJoin, appointment::Relation::Pet.def())
            .filter(pet::Column::OwnerId.eq(owner_id))
            .order_by_desc(appointment::Column::Date)
            .all(db)
            .await
    }

    pub async fn list_by_pet(db: &DbConn, pet_id: Uuid) -> Result<Vec<appointment::Model>, DbErr> {
        appointment::Entity::find()
            .filter(appointment::Column::PetId.eq(pet_id))
            .order_by_desc(appointment::Column::Date)
            .all(db)
            .await
    }

    /// True when one of the owner's pets has seen this veterinarian: a
    /// completed, paid, or already-past appointment counts as a visit.
    pub async fn owner_visited_veterinarian(
        db: &DbConn,
        owner_id: Uuid,
        veterinarian_id: Uuid,
        today: NaiveDate,
    ) -> Result<bool, DbErr> {
        let visited = appointment::Entity::find()
            .join(InnerJoin, appointment::Relation::Pet.def())
            .filter(pet::Column::OwnerId.eq(owner_id))
            .filter(appointment::Column::VeterinarianId.eq(veterinarian_id))
            .filter(
                Condition::any()
                    .add(appointment::Column::Status.eq(AppointmentStatus::Completed))
                    .add(appointment::Column::IsPaid.eq(true))
                    .add(appointment::Column::Date.lt(today)),
            )
            .one(db)
            .await?;
        Ok(visited.is_some())
    }

    /// Resolves the display names clients render next to each row.
    pub async fn with_display(
        db: &DbConn,
        appointments: Vec<appointment::Model>,
    ) -> Result<Vec<AppointmentVisible>, DbErr> {
        let pet_ids: Vec<Uuid> = appointments.iter().map(|a| a.pet_id).collect();
        let pets: HashMap<Uuid, pet::Model> = pet::Entity::find()
            .filter(pet::Column::Id.is_in(pet_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut user_ids: Vec<Uuid> = appointments.iter().map(|a| a.veterinarian_id).collect();
        user_ids.extend(pets.values().map(|p| p.owner_id));
        let users: HashMap<Uuid, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(user_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let service_ids: Vec<Uuid> = appointments.iter().filter_map(|a| a.service_id).collect();
        let services: HashMap<Uuid, service::Model> = service::Entity::find()
            .filter(service::Column::Id.is_in(service_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        Ok(appointments
            .into_iter()
            .map(|appointment| {
                let pet = pets.get(&appointment.pet_id);
                let owner = pet.and_then(|p| users.get(&p.owner_id));
                let veterinarian = users.get(&appointment.veterinarian_id);
                let service = appointment.service_id.and_then(|id| services.get(&id));
                AppointmentVisible {
                    id: appointment.id,
                    appointment_number: appointment.appointment_number,
                    pet_id: appointment.pet_id,
                    veterinarian_id: appointment.veterinarian_id,
                    service_id: appointment.service_id,
                    date: appointment.date,
                    start_time: schedule::format_time(appointment.start_time),
                    end_time: schedule::format_time(appointment.end_time),
                    appointment_type: appointment.appointment_type,
                    status: appointment.status,
                    pet_name: pet.map(|p| p.name.clone()).unwrap_or_default(),
                    owner_name: owner.map(|o| o.full_name()).unwrap_or_default(),
                    veterinarian_name: veterinarian.map(|v| v.full_name()).unwrap_or_default(),
                    service_name: service.map(|s| s.name.clone()),
                    reason: appointment.reason,
                    notes: appointment.notes,
                    estimated_cost: appointment.estimated_cost,
                    actual_cost: appointment.actual_cost,
                    is_paid: appointment.is_paid,
                    paid_at: appointment.paid_at,
                    payment_method: appointment.payment_method,
                    payment_transaction_id: appointment.payment_transaction_id,
                    created_at: appointment.created_at,
                }
            })
            .collect())
    }
}

pub struct AppointmentMutation;

impl AppointmentMutation {
    pub async fn create(
        db: &DbConn,
        form_data: NewAppointment,
    ) -> Result<appointment::Model, DbErr> {
        let mut estimated_cost = form_data.estimated_cost;
        if estimated_cost.is_none() {
            if let Some(service_id) = form_data.service_id {
                if let Some(service) = service::Entity::find_by_id(service_id).one(db).await? {
                    if service.price > 0.0 {
                        estimated_cost = Some(service.price);
                    }
                }
            }
        }

        let now = Utc::now();
        appointment::ActiveModel {
            id: Set(Uuid::new_v4()),
            appointment_number: Set(schedule::generate_appointment_number(form_data.date)),
            pet_id: Set(form_data.pet_id),
            veterinarian_id: Set(form_data.veterinarian_id),
            service_id: Set(form_data.service_id),
            date: Set(form_data.date),
            start_time: Set(form_data.start_time),
            end_time: Set(form_data.end_time),
            appointment_type: Set(form_data.appointment_type),
            status: Set(AppointmentStatus::Scheduled),
            reason: Set(form_data.reason),
            notes: Set(form_data.notes),
            estimated_cost: Set(estimated_cost),
            actual_cost: Set(None),
            is_paid: Set(false),
            paid_at: Set(None),
            payment_method: Set(None),
            payment_transaction_id: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DbConn,
        appointment: appointment::Model,
        changes: AppointmentChanges,
    ) -> Result<appointment::Model, DbErr> {
        let mut appointment: appointment::ActiveModel = appointment.into();
        if let Some(date) = changes.date {
            appointment.date = Set(date);
        }
        if let Some(start_time) = changes.start_time {
            appointment.start_time = Set(start_time);
        }
        if let Some(end_time) = changes.end_time {
            appointment.end_time = Set(end_time);
        }
        if let Some(appointment_type) = changes.appointment_type {
            appointment.appointment_type = Set(appointment_type);
        }
        if let Some(status) = changes.status {
            appointment.status = Set(status);
        }
        if let Some(reason) = changes.reason {
            appointment.reason = Set(Some(reason));
        }
        if let Some(notes) = changes.notes {
            appointment.notes = Set(Some(notes));
        }
        if let Some(estimated_cost) = changes.estimated_cost {
            appointment.estimated_cost = Set(Some(estimated_cost));
        }
        if let Some(actual_cost) = changes.actual_cost {
            appointment.actual_cost = Set(Some(actual_cost));
        }
        appointment.updated_at = Set(Utc::now().into());
        appointment.update(db).await
    }

    pub async fn complete(
        db: &DbConn,
        appointment: appointment::Model,
        actual_cost: f64,
        notes: Option<String>,
    ) -> Result<appointment::Model, DbErr> {
        let mut appointment: appointment::ActiveModel = appointment.into();
        appointment.status = Set(AppointmentStatus::Completed);
        appointment.actual_cost = Set(Some(actual_cost));
        if let Some(notes) = notes {
            appointment.notes = Set(Some(notes));
        }
        appointment.updated_at = Set(Utc::now().into());
        appointment.update(db).await
    }

    pub async fn cancel(
        db: &DbConn,
        appointment: appointment::Model,
    ) -> Result<appointment::Model, DbErr> {
        let mut appointment: appointment::ActiveModel = appointment.into();
        appointment.status = Set(AppointmentStatus::Cancelled);
        appointment.updated_at = Set(Utc::now().into());
        appointment.update(db).await
    }

    /// Marks the appointment paid and completed, backfilling the actual cost
    /// from the payment amount, the service price, or the estimate.
    pub async fn mark_paid(
        db: &DbConn,
        appointment: appointment::Model,
        payment_method: Option<String>,
        payment_transaction_id: Option<String>,
        amount: Option<f64>,
    ) -> Result<appointment::Model, DbErr> {
        let mut actual_cost = appointment.actual_cost;
        if actual_cost.is_none() {
            if let Some(amount) = amount {
                actual_cost = Some(amount);
            } else if let Some(service_id) = appointment.service_id {
                if let Some(service) = service::Entity::find_by_id(service_id).one(db).await? {
                    if service.price > 0.0 {
                        actual_cost = Some(service.price);
                    }
                }
            }
            if actual_cost.is_none() {
                actual_cost = appointment.estimated_cost;
            }
        }

        let mut appointment: appointment::ActiveModel = appointment.into();
        appointment.is_paid = Set(true);
        appointment.paid_at = Set(Some(Utc::now().into()));
        appointment.payment_method =
            Set(Some(payment_method.unwrap_or_else(|| "Stripe".to_string())));
        appointment.payment_transaction_id = Set(payment_transaction_id);
        appointment.status = Set(AppointmentStatus::Completed);
        appointment.actual_cost = Set(actual_cost);
        appointment.updated_at = Set(Utc::now().into());
        appointment.update(db).await
    }
}
