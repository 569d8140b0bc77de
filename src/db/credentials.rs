use std::fmt;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection parameters for a `RelationalStore`. Immutable once built.
///
/// With the SQLite engine `database` is the path of the database file;
/// host, port and user identify the target in log lines only.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    host: String,
    port: u16,
    user: String,
    password: String,
    database: String,
    timeout: Duration,
}

impl Credentials {
    pub fn new(host: &str, port: u16, user: &str, password: &str, database: &str) -> Self {
        Self {
            host: host.to_string(),
            port,
            user: user.to_string(),
            password: password.to_string(),
            database: database.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Credentials for a local database file on the default port.
    pub fn local(database: &str) -> Self {
        Self::new("localhost", DEFAULT_PORT, "", "", database)
    }

    /// Bound on how long a connect or a query waits for a locked database.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `user@host:port/database`, safe to log.
    pub fn target(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("timeout", &self.timeout)
            .finish()
    }
}
