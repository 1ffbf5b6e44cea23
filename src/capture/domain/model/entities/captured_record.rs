use chrono::{DateTime, SecondsFormat, Utc};

use crate::capture::domain::model::{
    commands::capture_request_command::CaptureRequestCommand,
    enums::capture_kind::CaptureKind,
    value_objects::{
        captured_headers::CapturedHeaders, client_address::ClientAddress,
        record_location::RecordLocation, submitted_credentials::SubmittedCredentials,
    },
};

#[derive(Clone, Debug)]
pub struct CapturedRecord {
    kind: CaptureKind,
    captured_at: DateTime<Utc>,
    method: String,
    path: String,
    credentials: SubmittedCredentials,
    client: ClientAddress,
    headers: CapturedHeaders,
    browser: String,
    location: RecordLocation,
}

impl CapturedRecord {
    pub fn build(
        command: CaptureRequestCommand,
        location: RecordLocation,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind: command.kind(),
            captured_at,
            method: command.method().to_string(),
            path: command.path().to_string(),
            credentials: command.credentials().clone(),
            client: command.client().clone(),
            browser: command.headers().user_agent().to_string(),
            headers: command.headers().clone(),
            location,
        }
    }

    pub fn kind(&self) -> CaptureKind {
        self.kind
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn timestamp(&self) -> String {
        self.captured_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    pub fn password(&self) -> &str {
        self.credentials.password()
    }

    pub fn client(&self) -> &ClientAddress {
        &self.client
    }

    pub fn headers(&self) -> &CapturedHeaders {
        &self.headers
    }

    pub fn browser(&self) -> &str {
        &self.browser
    }

    pub fn location(&self) -> &RecordLocation {
        &self.location
    }
}
