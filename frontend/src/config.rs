
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where the contact form posts its fields.
pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

// Page boot
pub const OVERLAY_DELAY_MS: u32 = 2_000;
pub const OVERLAY_FADE_MS: u32 = 1_000;

// Chat
pub const BOT_REPLY_DELAY_MS: u32 = 1_000;

// Toasts, same timings as the bootstrap defaults
pub const TOAST_AUTOHIDE_MS: u32 = 5_000;
pub const TOAST_FADE_MS: u32 = 150;

/// Scroll offset (px) below which the navbar always stays visible.
pub const NAVBAR_HIDE_THRESHOLD: f64 = 100.0;
