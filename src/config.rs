#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://filmoteka.db?mode=rwc".to_string());

        Ok(Self { database_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_bundled_sqlite() {
        let config = Config::from_env().unwrap();
        let expected = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://filmoteka.db?mode=rwc".to_string());
        assert_eq!(config.database_url, expected);
    }
}
