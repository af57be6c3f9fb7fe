use actix_web::{web::route, App, HttpServer};
use dotenvy::dotenv;
use lazy_static::lazy_static;

mod apis;
mod form;
mod pages;
mod types;

lazy_static! {
    static ref LIQUID_PARSER: liquid::Parser = liquid::ParserBuilder::with_stdlib()
        .build()
        .unwrap();
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    let port = std::env::var("PORT")
        .expect("Environment variable $PORT is not set")
        .parse::<u16>()
        .expect("Environment variable $PORT must be a `u16`");

    HttpServer::new(|| {
        App::new()
            .service(pages::style::service)
            .service(pages::index::service)
            .service(pages::submitted::service)
            .service(apis::user::service)
            .default_service(route().to(pages::not_found::service))
    })
    .bind(("0.0.0.0", port))
    .expect("Failed to bind to socket")
    .run()
    .await
    .expect("Failed to run the server");
}
