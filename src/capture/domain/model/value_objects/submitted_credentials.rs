#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubmittedCredentials {
    username: String,
    password: String,
}

impl SubmittedCredentials {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self {
            username: username.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
