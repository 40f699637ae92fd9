use shared::PayloadSchema;

pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs: Trunk proxies /api/ to the fixture service in
        // development and the reverse proxy does the same in production.
        "".to_string()
    }

    /// Schema of the default dashboard, chosen at build time through
    /// `INSIGHTS_PAYLOAD_SCHEMA` (`analysis` or `legacy`).
    pub fn payload_schema() -> PayloadSchema {
        Self::schema_from(option_env!("INSIGHTS_PAYLOAD_SCHEMA"))
    }

    pub fn schema_from(value: Option<&str>) -> PayloadSchema {
        match value.map(str::parse::<PayloadSchema>) {
            Some(Ok(schema)) => schema,
            Some(Err(e)) => {
                log::warn!("{}, falling back to the analysis schema", e);
                PayloadSchema::default()
            }
            None => PayloadSchema::default(),
        }
    }

    pub fn analysis_path(schema: PayloadSchema) -> &'static str {
        schema.default_path()
    }

    /// Upper bound for the single analysis request.
    pub fn request_timeout_ms() -> u32 {
        15_000
    }

    pub fn chart_width() -> u32 {
        640
    }

    pub fn chart_height() -> u32 {
        360
    }
}
