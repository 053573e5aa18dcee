
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:5000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const ROI_CALCULATE_PATH: &str = "/api/roi/calculate";
pub const QUICK_ANALYSIS_PATH: &str = "/api/contact/quick-analysis";

pub fn endpoint(path: &str) -> String {
    format!("{}{}", get_backend_url(), path)
}
