#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaptureKind {
    LoginAttempt,
    Probe,
}

impl CaptureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoginAttempt => "login_attempt",
            Self::Probe => "probe",
        }
    }
}
