pub mod header {
    pub const HOST: &str = "Host";
    pub const X_FORWARDED_HOST: &str = "X-Forwarded-Host";
    pub const ORIGIN: &str = "Origin";
    pub const REFERER: &str = "Referer";
}

pub mod parameter {
    pub const EXCLUSION_PATHS: &str = "exclusion-paths";
}

pub mod response {
    pub const FORBIDDEN_STATUS: u16 = 403;
    /// Body sent for every rejection, whatever the cause.
    pub const FORBIDDEN_MESSAGE: &str = "Forbidden";
}
