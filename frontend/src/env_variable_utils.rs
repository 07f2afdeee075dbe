use lazy_static::lazy_static;
use web_sys::window;

pub const DEFAULT_APP_NAME: &str = "Video Library";
pub const DEFAULT_LOAD_DELAY_MS: u32 = 1500;

lazy_static! {
    pub static ref APP_NAME: String = get_app_name();
    pub static ref LOAD_DELAY_MS: u32 = get_load_delay_ms();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - using default configuration");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn get_load_delay_ms() -> u32 {
    parse_load_delay(get_env_var("LOAD_DELAY_MS").as_deref())
}

pub fn is_debug_mode() -> bool {
    parse_debug_mode(get_env_var("DEBUG_MODE").as_deref())
}

fn parse_load_delay(raw: Option<&str>) -> u32 {
    match raw.map(|s| s.trim().parse::<u32>()) {
        Some(Ok(delay)) => delay,
        Some(Err(e)) => {
            log::warn!("Invalid LOAD_DELAY_MS, falling back to {DEFAULT_LOAD_DELAY_MS}: {e}");
            DEFAULT_LOAD_DELAY_MS
        }
        None => DEFAULT_LOAD_DELAY_MS,
    }
}

fn parse_debug_mode(raw: Option<&str>) -> bool {
    raw.map(|s| s.trim().to_ascii_lowercase())
        .and_then(|s| s.parse().ok())
        .unwrap_or(false)
}
