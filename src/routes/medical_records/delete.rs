use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::medical_record::{MedicalRecordMutation, MedicalRecordQuery},
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    record_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a medical record", skip(data, user, path_param))]
#[delete("/{record_id}")]
pub async fn delete_medical_record(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Admin]) {
        return forbidden;
    }
    let record = match MedicalRecordQuery::find_by_id(&data.conn, path_param.record_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return response_404("Medical record not found."),
        Err(e) => return response_500(e),
    };
    match MedicalRecordMutation::delete(&data.conn, record).await {
        Ok(_) => HttpResponse::NoContent().into(),
        Err(e) => response_500(e),
    }
}
