#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BaitPage {
    Login,
    InvalidCredentials,
    Bank,
    NotFound,
}

impl BaitPage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::InvalidCredentials => "invalid_credentials",
            Self::Bank => "bank",
            Self::NotFound => "not_found",
        }
    }

    pub fn static_file_name(&self) -> Option<&'static str> {
        match self {
            Self::Login => Some("login.html"),
            Self::Bank => Some("bank.html"),
            Self::InvalidCredentials | Self::NotFound => None,
        }
    }

    pub fn inline_html(&self) -> &'static str {
        match self {
            Self::Login => LOGIN_HTML,
            Self::InvalidCredentials => INVALID_CREDENTIALS_HTML,
            Self::Bank => BANK_HTML,
            Self::NotFound => NOT_FOUND_HTML,
        }
    }
}

const LOGIN_HTML: &str = r#"
    <html>
      <head><title>Login</title></head>
      <body>
        <h2>Sign In</h2>
        <form method="POST" action="/login">
          <label>Username:</label>
          <input type="text" name="username" required /><br><br>
          <label>Password:</label>
          <input type="password" name="password" required /><br><br>
          <button type="submit">Sign In</button>
        </form>
      </body>
    </html>
  "#;

const INVALID_CREDENTIALS_HTML: &str = "<h3>Invalid username or password. Try again.</h3>";

const BANK_HTML: &str = r#"
    <html>
      <head><title>Online Banking - Account Overview</title></head>
      <body>
        <h2>Welcome back</h2>
        <p>Last sign-in: today</p>
        <table border="1" cellpadding="6">
          <tr><th>Account</th><th>Number</th><th>Available balance</th></tr>
          <tr><td>Everyday Checking</td><td>****4821</td><td>$12,480.33</td></tr>
          <tr><td>High Yield Savings</td><td>****9037</td><td>$84,215.90</td></tr>
          <tr><td>Platinum Credit Card</td><td>****1156</td><td>-$1,932.47</td></tr>
        </table>
        <h3>Recent transactions</h3>
        <ul>
          <li>Payroll deposit +$4,250.00</li>
          <li>Wire transfer to ACME Holdings -$2,000.00</li>
          <li>Utilities autopay -$186.21</li>
        </ul>
        <a href="/transfer">Transfer funds</a> | <a href="/statements">Statements</a> | <a href="/logout">Sign out</a>
      </body>
    </html>
  "#;

const NOT_FOUND_HTML: &str = "<h3>404 Not Found</h3>";
