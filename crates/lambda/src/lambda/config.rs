#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("REGION is not set")]
    RegionNotSet,
    #[error("TABLE_NAME is not set")]
    TableNameNotSet,
}

// Read once at startup, immutable for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct Config {
    pub region: String,
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            region: std::env::var("REGION").map_err(|_| Error::RegionNotSet)?,
            table_name: std::env::var("TABLE_NAME").map_err(|_| Error::TableNameNotSet)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env() {
        std::env::remove_var("REGION");
        std::env::remove_var("TABLE_NAME");
        assert!(matches!(Config::from_env(), Err(Error::RegionNotSet)));
        std::env::set_var("REGION", "eu-west-1");
        assert!(matches!(Config::from_env(), Err(Error::TableNameNotSet)));
        std::env::set_var("TABLE_NAME", "movies");
        let config = Config::from_env().expect("config to be read");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.table_name, "movies");
        std::env::remove_var("REGION");
        std::env::remove_var("TABLE_NAME");
    }
}
