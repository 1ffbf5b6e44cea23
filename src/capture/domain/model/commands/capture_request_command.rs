use crate::capture::domain::model::{
    enums::capture_kind::CaptureKind,
    value_objects::{
        captured_headers::CapturedHeaders, client_address::ClientAddress,
        submitted_credentials::SubmittedCredentials,
    },
};

#[derive(Clone, Debug)]
pub struct CaptureRequestCommand {
    kind: CaptureKind,
    method: String,
    path: String,
    headers: CapturedHeaders,
    credentials: SubmittedCredentials,
    client: ClientAddress,
}

impl CaptureRequestCommand {
    pub fn login_attempt(
        method: impl Into<String>,
        path: impl Into<String>,
        headers: CapturedHeaders,
        credentials: SubmittedCredentials,
        client: ClientAddress,
    ) -> Self {
        Self {
            kind: CaptureKind::LoginAttempt,
            method: method.into(),
            path: path.into(),
            headers,
            credentials,
            client,
        }
    }

    pub fn probe(
        method: impl Into<String>,
        path: impl Into<String>,
        headers: CapturedHeaders,
        client: ClientAddress,
    ) -> Self {
        Self {
            kind: CaptureKind::Probe,
            method: method.into(),
            path: path.into(),
            headers,
            credentials: SubmittedCredentials::empty(),
            client,
        }
    }

    pub fn kind(&self) -> CaptureKind {
        self.kind
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &CapturedHeaders {
        &self.headers
    }

    pub fn credentials(&self) -> &SubmittedCredentials {
        &self.credentials
    }

    pub fn client(&self) -> &ClientAddress {
        &self.client
    }
}
