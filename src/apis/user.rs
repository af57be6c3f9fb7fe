use crate::form::FormValues;
use crate::types::{full_name::FullName, user::User};
use actix_web::{
    http::{header, StatusCode},
    post,
    web::Form,
    HttpResponse, ResponseError,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("Invalid full name")]
    InvalidFullName { full_name: String },
}

#[post("/api/user")]
pub async fn service(Form(values): Form<FormValues>) -> Result<HttpResponse, Error> {
    let full_name = FullName::parse(values.full_name.clone()).map_err(|_| {
        Error::InvalidFullName {
            full_name: values.full_name,
        }
    })?;

    let user = User::from_full_name(&full_name);

    info!(
        first_name = %user.first_name,
        last_name = %user.last_name,
        "user submitted"
    );

    let location = format!(
        "/submitted?first_name={}&last_name={}",
        urlencoding::encode(&user.first_name),
        urlencoding::encode(&user.last_name),
    );

    let response = HttpResponse::SeeOther()
        .append_header((header::LOCATION, location))
        .finish();

    Ok(response)
}

impl Error {
    // Bounce the rejected value back so the form can re-render it
    pub fn as_location(&self) -> String {
        match self {
            Self::InvalidFullName { full_name } => {
                format!("/?full_name={}", urlencoding::encode(full_name))
            }
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code())
            .append_header((header::LOCATION, self.as_location()))
            .finish()
    }
}
