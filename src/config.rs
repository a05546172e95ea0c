use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub storage_dir: String,
    pub public_base_url: String,
    pub jwt_secret: String,
    pub page_size: u32,
    pub max_upload_size: usize,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let page_size: u32 = env::var("PAGE_SIZE")
            .unwrap_or_else(|_| "6".to_string())
            .parse()?;
        if page_size == 0 {
            anyhow::bail!("PAGE_SIZE must be at least 1");
        }

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgresql://localhost/game_vault".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            storage_dir: env::var("STORAGE_DIR")
                .unwrap_or_else(|_| "./storage/game-assets".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key".to_string()),
            page_size,
            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .unwrap_or_else(|_| "52428800".to_string()) // 50MB
                .parse()?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/game_vault".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            storage_dir: "./storage/game-assets".to_string(),
            public_base_url: "http://localhost:3000".to_string(),
            jwt_secret: "your-secret-key".to_string(),
            page_size: 6,
            max_upload_size: 52_428_800,
            cors_origins: vec!["*".to_string()],
        }
    }
}
