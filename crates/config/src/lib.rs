// Application settings
// Loaded from ~/.config/remitcert/settings.json

pub mod settings;

pub use settings::Settings;
