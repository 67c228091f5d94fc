use crate::constants::DEBUG_ENV_VAR;
use chrono::Local;
use colored::*;

#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
    pub debug_enabled: bool,
}

impl Logger {
    pub fn new(name: impl Into<String>, info_color: Color) -> Self {
        let debug_enabled = std::env::var(DEBUG_ENV_VAR)
            .map(|value| !value.is_empty())
            .unwrap_or(false);
        Self {
            name: name.into().to_uppercase(),
            info_color,
            debug_enabled,
        }
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            format!("[{}][INFO][{}]", Self::timestamp(), self.name)
                .bold()
                .color(self.info_color),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn debug(&self, msg: impl AsRef<str>) {
        if !self.debug_enabled {
            return;
        }
        println!(
            "{} {} {}",
            format!("[{}][DEBUG][{}]", Self::timestamp(), self.name).dimmed(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            format!("[{}][WARN][{}]", Self::timestamp(), self.name)
                .bold()
                .yellow(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!(
            "{} {} {}",
            format!("[{}][ERROR][{}]", Self::timestamp(), self.name)
                .bold()
                .bright_red(),
            "→".dimmed(),
            msg.as_ref()
        );
    }
}
