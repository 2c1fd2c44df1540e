use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets" // Development static file root
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "" // Production serves assets from the site root
}

pub fn asset(name: &str) -> String {
    format!("{}/{}", get_asset_base(), name.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_joins_without_double_slash() {
        let expected = format!("{}/aerial.jpg", get_asset_base());
        assert_eq!(asset("aerial.jpg"), expected);
        assert_eq!(asset("/aerial.jpg"), expected);
    }
}
