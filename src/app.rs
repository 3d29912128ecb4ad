use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::controller::{contact, newsletter, resources};
use crate::repo::SubmissionStore;
use crate::telemetry::EnvelopeRootSpanBuilder;

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("I am alive")
}

/// Run the application on a specified TCP listener
pub fn run(listener: TcpListener, store: Arc<dyn SubmissionStore>) -> anyhow::Result<Server> {
    // Every worker shares the one store instance
    let store: web::Data<dyn SubmissionStore> = web::Data::from(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<EnvelopeRootSpanBuilder>::new())
            .app_data(store.clone())
            .service(health_check)
            .service(
                web::scope("/api")
                    .service(contact::scope())
                    .service(newsletter::scope())
                    .service(resources::scope()),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
