//! Client configuration
//!
//! Endpoint URLs default to the public CLARIN deployment; every one of them
//! can be overridden, which is how tests point the client at a mock server
//! and how self-hosted installations are reached.

use serde::{Deserialize, Serialize};

/// Configuration for the BAS web services client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasConfig {
    /// URL for the MAUSBasic service
    #[serde(default = "default_maus_basic_url")]
    pub maus_basic_url: String,

    /// URL for the G2P service
    #[serde(default = "default_g2p_url")]
    pub g2p_url: String,

    /// URL for the MAUS service
    #[serde(default = "default_maus_url")]
    pub maus_url: String,

    /// URL for the Pho2Syl service
    #[serde(default = "default_pho2syl_url")]
    pub pho2syl_url: String,

    /// URL for the MaryTTS service
    #[serde(default = "default_tts_url")]
    pub tts_url: String,

    /// URL for the TextAlign service
    #[serde(default = "default_text_align_url")]
    pub text_align_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_maus_basic_url() -> String {
    "https://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runMAUSBasic".to_string()
}

fn default_g2p_url() -> String {
    "https://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runG2P".to_string()
}

fn default_maus_url() -> String {
    "https://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runMAUS".to_string()
}

fn default_pho2syl_url() -> String {
    "http://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runPho2Syl".to_string()
}

fn default_tts_url() -> String {
    "https://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runTTSFile".to_string()
}

fn default_text_align_url() -> String {
    "http://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runTextAlign".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for BasConfig {
    fn default() -> Self {
        Self {
            maus_basic_url: default_maus_basic_url(),
            g2p_url: default_g2p_url(),
            maus_url: default_maus_url(),
            pho2syl_url: default_pho2syl_url(),
            tts_url: default_tts_url(),
            text_align_url: default_text_align_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BasConfig {
    /// Point every service at a single base URL
    ///
    /// Appends the standard `run…` service paths to `base`. Useful for
    /// self-hosted deployments and for tests running against a mock server.
    #[must_use]
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            maus_basic_url: format!("{base}/runMAUSBasic"),
            g2p_url: format!("{base}/runG2P"),
            maus_url: format!("{base}/runMAUS"),
            pho2syl_url: format!("{base}/runPho2Syl"),
            tts_url: format!("{base}/runTTSFile"),
            text_align_url: format!("{base}/runTextAlign"),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if a URL is empty or the timeout is zero.
    pub fn validate(&self) -> Result<(), String> {
        let urls = [
            ("maus_basic_url", &self.maus_basic_url),
            ("g2p_url", &self.g2p_url),
            ("maus_url", &self.maus_url),
            ("pho2syl_url", &self.pho2syl_url),
            ("tts_url", &self.tts_url),
            ("text_align_url", &self.text_align_url),
        ];
        for (name, url) in urls {
            if url.is_empty() {
                return Err(format!("{name} must not be empty"));
            }
        }
        if self.timeout_secs == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_the_public_services() {
        let config = BasConfig::default();

        assert_eq!(
            config.maus_basic_url,
            "https://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runMAUSBasic"
        );
        assert_eq!(
            config.g2p_url,
            "https://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runG2P"
        );
        assert_eq!(
            config.maus_url,
            "https://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runMAUS"
        );
        assert_eq!(
            config.pho2syl_url,
            "http://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runPho2Syl"
        );
        assert_eq!(
            config.tts_url,
            "https://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runTTSFile"
        );
        assert_eq!(
            config.text_align_url,
            "http://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runTextAlign"
        );
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn with_base_url_builds_all_service_urls() {
        let config = BasConfig::with_base_url("http://localhost:8080/");

        assert_eq!(config.maus_basic_url, "http://localhost:8080/runMAUSBasic");
        assert_eq!(config.g2p_url, "http://localhost:8080/runG2P");
        assert_eq!(config.maus_url, "http://localhost:8080/runMAUS");
        assert_eq!(config.pho2syl_url, "http://localhost:8080/runPho2Syl");
        assert_eq!(config.tts_url, "http://localhost:8080/runTTSFile");
        assert_eq!(config.text_align_url, "http://localhost:8080/runTextAlign");
    }

    #[test]
    fn validate_accepts_the_defaults() {
        assert!(BasConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_urls() {
        let mut config = BasConfig::default();
        config.g2p_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = BasConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            maus_url = "http://bas.example.com/runMAUS"
            timeout_secs = 120
        "#;

        let config: BasConfig = toml::from_str(toml).expect("config should deserialize");

        assert_eq!(config.maus_url, "http://bas.example.com/runMAUS");
        assert_eq!(config.timeout_secs, 120);
        // unspecified fields keep their defaults
        assert_eq!(
            config.g2p_url,
            "https://clarin.phonetik.uni-muenchen.de/BASWebServices/services/runG2P"
        );
    }
}
