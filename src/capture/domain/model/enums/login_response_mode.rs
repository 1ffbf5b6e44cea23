use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoginResponseMode {
    #[default]
    RedirectToBank,
    InvalidCredentials,
}

impl FromStr for LoginResponseMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redirect" | "bank" => Ok(Self::RedirectToBank),
            "invalid-credentials" | "invalid_credentials" | "invalid" => {
                Ok(Self::InvalidCredentials)
            }
            other => Err(format!("unknown login response mode '{other}'")),
        }
    }
}
