use crate::form::Field;
use crate::LIQUID_PARSER;
use actix_web::{get, web::Query, HttpResponse};
use lazy_static::lazy_static;
use liquid::Template;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Request {
    pub full_name: Option<String>,
}

#[get("/")]
pub async fn service(Query(query): Query<Request>) -> HttpResponse {
    lazy_static! {
        static ref TEMPLATE: Template = {
            let template = include_str!("../../templates/index.html");

            LIQUID_PARSER.parse(template).unwrap()
        };
    }

    // A value in the query means a submit bounced the field back
    let field = match query.full_name {
        Some(full_name) => Field::touched(full_name),
        None => Field::pristine(),
    };

    let globals = liquid::object!({
        "full_name": field.value(),
        "error": field.error().map(|error| error.to_string()),
    });

    let s = TEMPLATE.render(&globals).unwrap();

    HttpResponse::Ok().body(s)
}
