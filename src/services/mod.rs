// StreamHub services
// Services provide ambient functionality around the shell: configuration.

pub mod settings_engine;
