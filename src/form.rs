//! Request field extraction.
//!
//! Fields are gathered from the query string first and the body second, so a
//! body field wins over a query parameter of the same name.

use std::{collections::HashMap, convert::Infallible};

use axum::body::Bytes;
use futures::stream;
use serde_json::Value;

use crate::error::IngestFailure;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const APPLICATION_JSON: &str = "application/json";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormDict(HashMap<String, String>);

impl FormDict {
    pub async fn from_parts(
        query: Option<&str>,
        content_type: &str,
        body: Bytes,
    ) -> Result<Self, IngestFailure> {
        let mut fields = HashMap::new();

        if let Some(query) = query {
            let pairs: Vec<(String, String)> =
                serde_urlencoded::from_str(query).map_err(IngestFailure::MalformedForm)?;
            fields.extend(pairs);
        }

        match media_type(content_type).as_str() {
            FORM_URLENCODED => {
                let pairs: Vec<(String, String)> =
                    serde_urlencoded::from_bytes(&body).map_err(IngestFailure::MalformedForm)?;
                fields.extend(pairs);
            }
            APPLICATION_JSON if !body.trim_ascii().is_empty() => {
                let value: Value =
                    serde_json::from_slice(&body).map_err(IngestFailure::MalformedJsonBody)?;
                let Value::Object(object) = value else {
                    return Err(IngestFailure::BodyNotAnObject);
                };

                for (key, value) in object {
                    match value {
                        Value::Null => {}
                        Value::String(s) => {
                            fields.insert(key, s);
                        }
                        // nested values are handed on as JSON text
                        other => {
                            fields.insert(key, other.to_string());
                        }
                    }
                }
            }
            MULTIPART_FORM_DATA => {
                fields.extend(multipart_fields(content_type, body).await?);
            }
            _ => {}
        }

        Ok(Self(fields))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

// uploaded files are not form fields
async fn multipart_fields(
    content_type: &str,
    body: Bytes,
) -> Result<Vec<(String, String)>, IngestFailure> {
    let boundary =
        multer::parse_boundary(content_type).map_err(IngestFailure::MalformedMultipart)?;
    let mut multipart = multer::Multipart::new(
        stream::once(async move { Ok::<_, Infallible>(body) }),
        boundary,
    );

    let mut fields = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(IngestFailure::MalformedMultipart)?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let text = field.text().await.map_err(IngestFailure::MalformedMultipart)?;
        fields.push((name, text));
    }

    Ok(fields)
}

fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
