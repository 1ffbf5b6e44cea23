use std::{collections::HashMap, convert::Infallible};

use async_trait::async_trait;
use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::{Map, Value};

use crate::capture::domain::model::value_objects::submitted_credentials::SubmittedCredentials;

#[derive(Clone, Debug, Default)]
pub struct LoginRequestResource {
    fields: HashMap<String, String>,
}

impl LoginRequestResource {
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn from_json_object(object: Map<String, Value>) -> Self {
        let fields = object
            .into_iter()
            .filter_map(|(name, value)| json_field_value(value).map(|value| (name, value)))
            .collect();

        Self { fields }
    }

    pub fn into_credentials(mut self) -> SubmittedCredentials {
        SubmittedCredentials::new(self.fields.remove("username"), self.fields.remove("password"))
    }
}

#[async_trait]
impl<S> FromRequest<S> for LoginRequestResource
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json_request(&request) {
            return Ok(match Json::<Map<String, Value>>::from_request(request, state).await {
                Ok(Json(object)) => Self::from_json_object(object),
                Err(_) => Self::default(),
            });
        }

        Ok(
            match Form::<HashMap<String, String>>::from_request(request, state).await {
                Ok(Form(fields)) => Self::from_fields(fields),
                Err(_) => Self::default(),
            },
        )
    }
}

fn is_json_request(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let mime = value
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn json_field_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
