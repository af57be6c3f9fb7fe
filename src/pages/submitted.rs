use crate::LIQUID_PARSER;
use actix_web::{get, web::Query, HttpResponse};
use lazy_static::lazy_static;
use liquid::Template;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Request {
    pub first_name: String,
    pub last_name: String,
}

#[get("/submitted")]
pub async fn service(Query(query): Query<Request>) -> HttpResponse {
    lazy_static! {
        static ref TEMPLATE: Template = {
            let template = include_str!("../../templates/submitted.html");

            LIQUID_PARSER.parse(template).unwrap()
        };
    }

    let globals = liquid::object!({
        "first_name": query.first_name,
        "last_name": query.last_name,
    });

    let s = TEMPLATE.render(&globals).unwrap();

    HttpResponse::Ok().body(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn shows_first_and_last_name() {
        let app = test::init_service(App::new().service(service)).await;

        let req = test::TestRequest::get()
            .uri("/submitted?first_name=%E5%B1%B1%E7%94%B0&last_name=%E5%A4%AA%E9%83%8E")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.contains("山田"));
        assert!(body.contains("太郎"));
    }

    #[actix_web::test]
    async fn missing_names_are_rejected() {
        let app = test::init_service(App::new().service(service)).await;

        let req = test::TestRequest::get().uri("/submitted").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
