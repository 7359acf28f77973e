use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the forecast backends the dashboard can talk to.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// The public Open-Meteo service.
    #[default]
    Production,
    /// A local stub of the forecast API, for development.
    Local,
}

impl Environment {
    /// Reads the environment from `DASHBOARD_ENVIRONMENT`, falling back to production.
    pub fn from_env() -> Self {
        std::env::var("DASHBOARD_ENVIRONMENT")
            .unwrap_or_default()
            .parse::<Environment>()
            .unwrap_or_default()
    }

    /// Returns the forecast service base URL associated with the environment.
    pub fn forecast_url(&self) -> String {
        match self {
            Environment::Production => "https://api.open-meteo.com".to_string(),
            Environment::Local => "http://localhost:8080".to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "local" => Ok(Environment::Local),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Local => write!(f, "Local"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.forecast_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("PROD".parse::<Environment>(), Ok(Environment::Production));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_production_is_default() {
        assert_eq!(Environment::default(), Environment::Production);
        assert_eq!(
            Environment::default().forecast_url(),
            "https://api.open-meteo.com"
        );
    }
}
