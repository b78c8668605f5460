use super::parsing::{
    env_optional, env_or_default, parse_bool, parse_cors_origins, parse_environment, parse_f32,
    parse_provider, parse_u16, parse_u32, parse_u64,
};
use super::types::{
    AdminSettings, AiProvider, AiSettings, ApiSettings, AzureOpenAiSettings, ConfigError, CorsSettings, DatabaseSettings,
    GenerationSettings, RedisSettings, RuntimeSettings, ServerHost, ServerPort, ServerSettings,
    Settings, TelemetrySettings,
};

impl Settings {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let host = env_or_default("PORTAL_HOST", "0.0.0.0");
        let port = env_or_default("PORTAL_PORT", "5000");

        let environment =
            parse_environment(env_optional("PORTAL_ENV").or_else(|| env_optional("ENVIRONMENT")));
        let strict_config =
            env_optional("PORTAL_STRICT_CONFIG").map(|value| parse_bool(&value)).unwrap_or(false)
                || environment.is_production();

        let project_name = env_or_default("PROJECT_NAME", "Scholarship Portal API");
        let version = env_or_default("VERSION", env!("CARGO_PKG_VERSION"));

        let cors_origins = parse_cors_origins(env_optional("BACKEND_CORS_ORIGINS"))?;

        let postgres_server = env_or_default("POSTGRES_SERVER", "localhost");
        let postgres_port = parse_u16("POSTGRES_PORT", env_or_default("POSTGRES_PORT", "5432"))?;
        let postgres_user = env_or_default("POSTGRES_USER", "portal");
        let postgres_password = env_or_default("POSTGRES_PASSWORD", "");
        let postgres_db = env_or_default("POSTGRES_DB", "portal_db");
        let database_url = env_optional("DATABASE_URL");

        let redis_host = env_or_default("REDIS_HOST", "localhost");
        let redis_port = parse_u16("REDIS_PORT", env_or_default("REDIS_PORT", "6379"))?;
        let redis_db = parse_u16("REDIS_DB", env_or_default("REDIS_DB", "0"))?;
        let redis_password = env_or_default("REDIS_PASSWORD", "");

        let provider = parse_provider(env_optional("AI_PROVIDER"))?;
        let openai_api_key = env_or_default("OPENAI_API_KEY", "");
        let openai_base_url = env_or_default("OPENAI_BASE_URL", "https://api.openai.com/v1");
        let ai_model = env_or_default("AI_MODEL", "gpt-4o-mini");
        let ai_request_timeout =
            parse_u64("AI_REQUEST_TIMEOUT", env_or_default("AI_REQUEST_TIMEOUT", "60"))?;
        let temperature = parse_f32("AI_TEMPERATURE", env_or_default("AI_TEMPERATURE", "0.7"))?;
        let azure = AzureOpenAiSettings {
            endpoint: env_or_default("AZURE_OPENAI_ENDPOINT", ""),
            deployment: env_or_default("AZURE_OPENAI_DEPLOYMENT", ""),
            api_version: env_or_default("AZURE_OPENAI_API_VERSION", ""),
            api_key: env_or_default("AZURE_OPENAI_API_KEY", ""),
        };

        let max_attempts = parse_u32(
            "GENERATION_MAX_ATTEMPTS",
            env_or_default("GENERATION_MAX_ATTEMPTS", "3"),
        )?;
        let default_question_count =
            parse_u32("QUESTION_COUNT_DEFAULT", env_or_default("QUESTION_COUNT_DEFAULT", "10"))?;
        let min_question_count =
            parse_u32("QUESTION_COUNT_MIN", env_or_default("QUESTION_COUNT_MIN", "5"))?;
        let max_question_count =
            parse_u32("QUESTION_COUNT_MAX", env_or_default("QUESTION_COUNT_MAX", "50"))?;

        let first_admin_email = env_or_default("FIRST_ADMIN_EMAIL", "");
        let first_admin_password = env_or_default("FIRST_ADMIN_PASSWORD", "");
        let first_admin_college_id = env_or_default("FIRST_ADMIN_COLLEGE_ID", "");

        let log_level = env_or_default("PORTAL_LOG_LEVEL", "info");
        let json = env_optional("PORTAL_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);
        let prometheus_enabled =
            env_optional("PROMETHEUS_ENABLED").map(|value| parse_bool(&value)).unwrap_or(false);

        let settings = Self {
            server: ServerSettings {
                host: ServerHost::parse(host)?,
                port: ServerPort::parse(port)?,
            },
            runtime: RuntimeSettings { environment, strict_config },
            api: ApiSettings { project_name, version },
            cors: CorsSettings { origins: cors_origins },
            database: DatabaseSettings {
                postgres_server,
                postgres_port,
                postgres_user,
                postgres_password,
                postgres_db,
                database_url,
            },
            redis: RedisSettings {
                host: redis_host,
                port: redis_port,
                db: redis_db,
                password: redis_password,
            },
            ai: AiSettings {
                provider,
                openai_api_key,
                openai_base_url,
                ai_model,
                ai_request_timeout,
                temperature,
                azure,
            },
            generation: GenerationSettings {
                max_attempts,
                default_question_count,
                min_question_count,
                max_question_count,
            },
            admin: AdminSettings {
                first_admin_email,
                first_admin_password,
                first_admin_college_id,
            },
            telemetry: TelemetrySettings { log_level, json, prometheus_enabled },
        };

        settings.validate()?;
        Ok(settings)
    }

    pub(crate) fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host.0, self.server.port.0)
    }

    pub(crate) fn server_host(&self) -> &str {
        &self.server.host.0
    }

    pub(crate) fn server_port(&self) -> u16 {
        self.server.port.0
    }

    pub(crate) fn api(&self) -> &ApiSettings {
        &self.api
    }

    pub(crate) fn cors(&self) -> &CorsSettings {
        &self.cors
    }

    pub(crate) fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    pub(crate) fn redis(&self) -> &RedisSettings {
        &self.redis
    }

    pub(crate) fn ai(&self) -> &AiSettings {
        &self.ai
    }

    pub(crate) fn generation(&self) -> &GenerationSettings {
        &self.generation
    }

    pub(crate) fn admin(&self) -> &AdminSettings {
        &self.admin
    }

    pub(crate) fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    pub(crate) fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "GENERATION_MAX_ATTEMPTS",
                value: "0".to_string(),
            });
        }

        if self.generation.min_question_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "QUESTION_COUNT_MIN",
                value: "0".to_string(),
            });
        }

        if self.generation.max_question_count < self.generation.min_question_count {
            return Err(ConfigError::InvalidValue {
                field: "QUESTION_COUNT_MAX",
                value: self.generation.max_question_count.to_string(),
            });
        }

        let default_count = self.generation.default_question_count;
        if default_count < self.generation.min_question_count
            || default_count > self.generation.max_question_count
        {
            return Err(ConfigError::InvalidValue {
                field: "QUESTION_COUNT_DEFAULT",
                value: default_count.to_string(),
            });
        }

        if !(0.0..=2.0).contains(&self.ai.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "AI_TEMPERATURE",
                value: self.ai.temperature.to_string(),
            });
        }

        if !(self.runtime.strict_config || self.runtime.environment.is_production()) {
            return Ok(());
        }

        if self.database.database_url.is_none() && self.database.postgres_password.is_empty() {
            return Err(ConfigError::MissingSecret("POSTGRES_PASSWORD"));
        }
        match self.ai.provider {
            AiProvider::OpenAi => {
                if self.ai.openai_api_key.is_empty() {
                    return Err(ConfigError::MissingSecret("OPENAI_API_KEY"));
                }
                if self.ai.openai_base_url.is_empty() {
                    return Err(ConfigError::MissingSecret("OPENAI_BASE_URL"));
                }
            }
            AiProvider::Azure => {
                if let Some(missing) = self.ai.azure.missing_fields().first() {
                    return Err(ConfigError::MissingSecret(*missing));
                }
            }
        }
        if self.admin.first_admin_password.is_empty() {
            return Err(ConfigError::MissingSecret("FIRST_ADMIN_PASSWORD"));
        }

        Ok(())
    }
}
