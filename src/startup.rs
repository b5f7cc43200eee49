use actix_web::{dev::Server, web::Data, App, HttpServer};
use sea_orm::{Database, DatabaseConnection};
use std::env;

use crate::{notifications, utils::auth::auth_middleware::AuthenticateUser};

pub struct Application {
    port: u16,
    server: Server,
}

#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
    pub notifier: notifications::Notifier,
}

impl Application {
    pub async fn build(settings: crate::settings::Settings) -> Result<Self, std::io::Error> {
        let db = get_database_connection().await;
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, db).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub async fn get_database_connection() -> DatabaseConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    Database::connect(&database_url)
        .await
        .expect("Failed to open DB connection.")
}

async fn run(
    listener: std::net::TcpListener,
    db: DatabaseConnection,
) -> Result<Server, std::io::Error> {
    let notifier = notifications::start_dispatcher(db.clone());
    let state = AppState { conn: db, notifier };

    let server = HttpServer::new(move || {
        App::new()
            .wrap(AuthenticateUser)
            .service(crate::routes::api_routes())
            .app_data(Data::new(state.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
