use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::Set;

use crate::entities::{
    appointment,
    sea_orm_active_enums::{AppointmentStatus, AppointmentType},
};

pub fn appointment(pet_id: uuid::Uuid, veterinarian_id: uuid::Uuid) -> appointment::ActiveModel {
    let now = Utc::now();
    appointment::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        appointment_number: Set(format!("APT-TEST-{}", uuid::Uuid::new_v4())),
        pet_id: Set(pet_id),
        veterinarian_id: Set(veterinarian_id),
        service_id: Set(None),
        date: Set(now.date_naive()),
        start_time: Set(NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
        end_time: Set(NaiveTime::from_hms_opt(10, 30, 0).unwrap()),
        appointment_type: Set(AppointmentType::Checkup),
        status: Set(AppointmentStatus::Scheduled),
        reason: Set(None),
        notes: Set(None),
        estimated_cost: Set(None),
        actual_cost: Set(None),
        is_paid: Set(false),
        paid_at: Set(None),
        payment_method: Set(None),
        payment_transaction_id: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait AppointmentFactory {
    fn on_date(self, date: NaiveDate) -> appointment::ActiveModel;
    fn between(self, start: NaiveTime, end: NaiveTime) -> appointment::ActiveModel;
    fn status(self, status: AppointmentStatus) -> appointment::ActiveModel;
    fn actual_cost(self, cost: f64) -> appointment::ActiveModel;
    fn estimated_cost(self, cost: f64) -> appointment::ActiveModel;
    fn service(self, service_id: uuid::Uuid) -> appointment::ActiveModel;
    fn paid(self) -> appointment::ActiveModel;
}

impl AppointmentFactory for appointment::ActiveModel {
    fn on_date(mut self, date: NaiveDate) -> appointment::ActiveModel {
        self.date = Set(date);
        self
    }

    fn between(mut self, start: NaiveTime, end: NaiveTime) -> appointment::ActiveModel {
        self.start_time = Set(start);
        self.end_time = Set(end);
        self
    }

    fn status(mut self, status: AppointmentStatus) -> appointment::ActiveModel {
        self.status = Set(status);
        self
    }

    fn actual_cost(mut self, cost: f64) -> appointment::ActiveModel {
        self.actual_cost = Set(Some(cost));
        self
    }

    fn estimated_cost(mut self, cost: f64) -> appointment::ActiveModel {
        self.estimated_cost = Set(Some(cost));
        self
    }

    fn service(mut self, service_id: uuid::Uuid) -> appointment::ActiveModel {
        self.service_id = Set(Some(service_id));
        self
    }

    fn paid(mut self) -> appointment::ActiveModel {
        self.is_paid = Set(true);
        self.paid_at = Set(Some(Utc::now().into()));
        self
    }
}
