use std::env::var;

use dotenvy::dotenv;

pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        let port = match var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            Err(_) => 3000,
        };

        Ok(Config {
            port,
            database_url: var("DATABASE_URL").ok(),
        })
    }
}
