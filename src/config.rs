use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend used when the page is served from a development host or a local file.
    pub local_base_url: String,
    pub submit_path: String,
    pub success_hide_after: Duration,
    pub max_text_length: usize,
    pub submit_label: String,
    pub submitting_label: String,
    pub loading_message: String,
    pub default_success_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            local_base_url: "http://localhost:5000".to_string(),
            submit_path: "/submit".to_string(),
            success_hide_after: Duration::from_secs(5),
            max_text_length: 1000,
            submit_label: "Submit Request".to_string(),
            submitting_label: "Submitting...".to_string(),
            loading_message: "Submitting your AI solution request...".to_string(),
            default_success_message: "AI Solution request submitted successfully!".to_string(),
        }
    }
}

impl Config {
    pub fn submit_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.submit_path)
    }
}
