//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use boxing_domain::{Boxer, BoxerId, LeaderboardEntry};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of boxers.
    pub fn format_boxers(&self, boxers: &[Boxer]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = boxers.iter().map(boxer_json).collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => Ok(self.format_boxers_table(boxers)),
            OutputFormat::Quiet => Ok(boxers
                .iter()
                .map(|b| b.id().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a single boxer.
    pub fn format_boxer(&self, boxer: &Boxer) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&boxer_json(boxer))?),
            _ => self.format_boxers(std::slice::from_ref(boxer)),
        }
    }

    fn format_boxers_table(&self, boxers: &[Boxer]) -> String {
        if boxers.is_empty() {
            return self.colorize("No boxers found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Weight", "Height", "Reach", "Age", "Class", "Fights", "Wins"]);

        for boxer in boxers {
            builder.push_record([
                boxer.id().to_string(),
                boxer.name().to_string(),
                boxer.weight().to_string(),
                boxer.height().to_string(),
                boxer.reach().to_string(),
                boxer.age().to_string(),
                boxer.weight_class().to_string(),
                boxer.fights().to_string(),
                boxer.wins().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format leaderboard entries in rank order.
    pub fn format_leaderboard(&self, entries: &[LeaderboardEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = entries
                    .iter()
                    .map(|e| {
                        let mut value = boxer_json(&e.boxer);
                        value["win_pct"] = serde_json::json!(e.win_pct);
                        value
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|e| e.boxer.id().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok(self.colorize("No boxers have fought yet.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Rank", "ID", "Name", "Class", "Fights", "Wins", "Win %"]);
                for (rank, entry) in entries.iter().enumerate() {
                    builder.push_record([
                        (rank + 1).to_string(),
                        entry.boxer.id().to_string(),
                        entry.boxer.name().to_string(),
                        entry.boxer.weight_class().to_string(),
                        entry.boxer.fights().to_string(),
                        entry.boxer.wins().to_string(),
                        format!("{:.1}", entry.win_pct),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format the result of registering a boxer.
    pub fn boxer_created(&self, id: BoxerId, name: &str) -> String {
        match self.format {
            OutputFormat::Quiet => id.to_string(),
            _ => self.success(&format!("Boxer created: {} (id {})", name, id)),
        }
    }

    /// Format the winner of a bout.
    pub fn fight_result(&self, winner: &str) -> String {
        match self.format {
            OutputFormat::Quiet => winner.to_string(),
            OutputFormat::Json => serde_json::json!({ "winner": winner }).to_string(),
            OutputFormat::Table => self.colorize(&format!("🥊 {} wins the bout!", winner), "magenta"),
        }
    }

    /// Format a boxer's fighting skill.
    pub fn skill(&self, boxer: &Boxer, skill: f64) -> String {
        match self.format {
            OutputFormat::Quiet => skill.to_string(),
            OutputFormat::Json => serde_json::json!({
                "id": boxer.id().value(),
                "name": boxer.name(),
                "skill": skill,
            })
            .to_string(),
            OutputFormat::Table => self.colorize(&format!("{}: skill {}", boxer.name(), skill), "cyan"),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn boxer_json(boxer: &Boxer) -> serde_json::Value {
    serde_json::json!({
        "id": boxer.id().value(),
        "name": boxer.name(),
        "weight": boxer.weight(),
        "height": boxer.height(),
        "reach": boxer.reach(),
        "age": boxer.age(),
        "weight_class": boxer.weight_class().as_str(),
        "fights": boxer.fights(),
        "wins": boxer.wins(),
    })
}
