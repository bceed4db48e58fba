use log::Level;

pub const BRAND: &str = "Justene Automation";

/// Distance kept between the viewport top and a section after in-page navigation.
pub const NAV_SCROLL_OFFSET: f64 = 80.0;

// Active section is picked from a band between 20% and 30% down the viewport.
pub const OBSERVER_ROOT_MARGIN: &str = "-20% 0px -70% 0px";
pub const OBSERVER_THRESHOLD: f64 = 0.0;

pub const SCROLLED_THRESHOLD: f64 = 20.0;

pub const ERROR_RESET_MS: u32 = 3_000;
pub const SUBMIT_DELAY_MS: u32 = 1_500;

pub const CONTACT_EMAIL: &str = "hello@justeneautomation.com";
pub const WHATSAPP_PHONE: &str = "639638296973";
pub const WHATSAPP_MESSAGE: &str =
    "Hi Justene, I'm interested in automating my business systems. Let's talk!";

pub fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

// api.whatsapp.com instead of wa.me, the short host trips some local certificate setups
pub fn whatsapp_url() -> String {
    format!(
        "https://api.whatsapp.com/send?phone={}&text={}",
        WHATSAPP_PHONE,
        urlencoding::encode(WHATSAPP_MESSAGE)
    )
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_url_encodes_message() {
        let url = whatsapp_url();
        assert!(url.starts_with("https://api.whatsapp.com/send?phone=639638296973&text="));
        assert!(url.contains("Hi%20Justene%2C%20I%27m%20interested"));
        assert!(!url.contains(' '));
        assert!(url.ends_with("talk%21"));
    }

    #[test]
    fn mailto_points_at_contact_email() {
        assert_eq!(mailto(), "mailto:hello@justeneautomation.com");
    }
}
