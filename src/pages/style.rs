use actix_web::{get, HttpResponse};

#[get("/style.css")]
pub async fn service() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css")
        .body(include_str!("../../style.css"))
}
