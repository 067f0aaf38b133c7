#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use actix_web::{get, web, App, HttpResponse, HttpServer};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::Settings;
use crate::domain::{AppState, CounterTable};
use crate::generator::Generator;
use crate::metrics::Metrics;

#[get("/metrics")]
pub async fn scrape_metrics(data: web::Data<AppState>) -> HttpResponse {
    match data.metrics.encode_text() {
        Ok(buf) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(buf),
        Err(e) => {
            error!(error=%format!("{e:#}"), "encode metrics failed");
            HttpResponse::InternalServerError().body("encode metrics failed")
        }
    }
}

pub async fn serve(settings: Settings, bind: &str) -> std::io::Result<()> {
    let metrics = Metrics::new().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::Other, format!("metrics init: {e:#}"))
    })?;
    let counters = CounterTable::new(&settings.teams);
    info!(
        server = %settings.server_name,
        teams = settings.teams.len(),
        "starting generator"
    );
    let generator = Generator::new(
        settings,
        counters,
        metrics.clone(),
        CancellationToken::new(),
    );
    tokio::spawn(generator.run());
    let state = AppState { metrics };
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(scrape_metrics)
    })
    .bind(bind)?
    .run()
    .await
}
