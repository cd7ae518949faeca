use chrono::Local;

/// Wall-clock date in the `DD/MM/YYYY` shape stored on posts.
pub fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

/// Wall-clock `HH:MM` stamp stored on messages.
pub fn clock() -> String {
    Local::now().format("%H:%M").to_string()
}
