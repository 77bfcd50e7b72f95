//! Command handlers for the tzs CLI.
//!
//! Each handler builds its output as a string and hands it to the
//! [`TerminalRenderer`]: reports as markdown, timestamps and JSON as values. This module is also where the fallback display
//! policy lives: the core formatter reports errors, and the CLI decides to
//! echo the raw input instead.

use std::fmt::Write as _;

use anyhow::{bail, Context, Result};
use log::{info, warn};
use tzstamp_core::{
    can_access, format_in, Instant, OperationStatus, PreferenceStore, Role, ZoneDetector, ZoneId,
    ZonePreference, ZoneSource, ZonedDisplay,
};

use crate::{
    args::{AccessArgs, FormatArgs, ListZonesArgs, SetZoneArgs, ZoneCommands},
    renderer::TerminalRenderer,
};

/// CLI handler owning the display zone preference and the renderer.
pub struct Cli<S, D> {
    preference: ZonePreference<S, D>,
    renderer: TerminalRenderer,
}

impl<S: PreferenceStore, D: ZoneDetector> Cli<S, D> {
    pub fn new(preference: ZonePreference<S, D>, renderer: TerminalRenderer) -> Self {
        Self {
            preference,
            renderer,
        }
    }

    /// Formats instants and prints one unstyled line per instant.
    pub fn format_instants(&self, args: FormatArgs) -> Result<()> {
        let output = self.format_output(&args)?;
        self.renderer.render_values(&output)
    }

    pub fn handle_zone_command(&mut self, command: ZoneCommands) -> Result<()> {
        match command {
            ZoneCommands::Show => {
                let output = self.show_zone_output()?;
                self.renderer.render(&output)
            }
            ZoneCommands::Set(args) => {
                let output = self.set_zone(args)?;
                self.renderer.render(&output)
            }
            ZoneCommands::Clear => {
                let output = self.clear_zone()?;
                self.renderer.render(&output)
            }
            ZoneCommands::List(args) => {
                let json = args.json;
                let output = self.list_zones_output(args)?;
                if json {
                    self.renderer.render_values(&output)
                } else {
                    self.renderer.render(&output)
                }
            }
        }
    }

    /// Renders the access decision, failing when access is denied.
    pub fn check_access(&self, args: AccessArgs) -> Result<()> {
        let role = args.role.map(Role::from);
        let required = Role::from(args.required);
        let (allowed, output) = access_output(role, required);
        self.renderer.render(&output)?;
        if !allowed {
            bail!("access to {required} views denied");
        }
        Ok(())
    }

    fn format_output(&self, args: &FormatArgs) -> Result<String> {
        let zone = match &args.zone {
            Some(zone) => ZoneId::new(zone).context("Invalid --zone")?,
            None => self.preference.resolve(),
        };

        let mut output = String::new();
        for raw in &args.instants {
            let shown = match format_in(raw, &zone) {
                Ok(shown) => shown.into_string(),
                Err(e) if e.is_format_error() && !args.strict => {
                    warn!("Showing raw value for '{raw}': {e}");
                    raw.clone()
                }
                Err(e) => return Err(e).with_context(|| format!("Failed to format '{raw}'")),
            };
            writeln!(output, "{shown}")?;
        }
        Ok(output)
    }

    fn show_zone_output(&self) -> Result<String> {
        let resolved = self.preference.resolve_with_source();
        let mut output = format!("# Display zone\n\n{resolved}");

        if resolved.source == ZoneSource::Stored {
            if let Some(saved) = self
                .preference
                .stored_at()
                .context("Failed to read preference timestamp")?
            {
                let saved = Instant::from(saved);
                writeln!(output, "**Saved**: {}", ZonedDisplay::new(&saved, &resolved.zone))?;
            }
        }
        Ok(output)
    }

    fn set_zone(&mut self, args: SetZoneArgs) -> Result<String> {
        let zone = ZoneId::new(&args.zone).context("Invalid zone")?;
        self.preference
            .store(&zone)
            .context("Failed to save display zone")?;
        info!("Display zone set to {zone}");
        Ok(OperationStatus::success(format!("Display zone set to {zone}")).to_string())
    }

    fn clear_zone(&mut self) -> Result<String> {
        let removed = self
            .preference
            .clear()
            .context("Failed to clear display zone")?;
        let message = if removed {
            "Display zone cleared"
        } else {
            "No display zone was saved"
        };
        Ok(OperationStatus::success(message.to_string()).to_string())
    }

    fn list_zones_output(&self, args: ListZonesArgs) -> Result<String> {
        let mut choices = self.preference.choices();
        if let Some(filter) = &args.filter {
            choices = choices.filtered(filter);
        }

        if args.json {
            serde_json::to_string_pretty(&choices).context("Failed to serialize zone list")
        } else {
            Ok(choices.to_string())
        }
    }
}

fn access_output(role: Option<Role>, required: Role) -> (bool, String) {
    let who = role.map_or("anonymous", |role| role.as_str());
    let allowed = can_access(role, required);
    let status = if allowed {
        OperationStatus::success(format!("{who} may access {required} views"))
    } else {
        OperationStatus::failure(format!("{who} may not access {required} views"))
    };
    (allowed, status.to_string())
}

#[cfg(test)]
mod tests {
    use tzstamp_core::{MemoryStore, StaticZoneDetector};

    use super::*;

    fn test_cli() -> Cli<MemoryStore, StaticZoneDetector> {
        let detector = StaticZoneDetector::default()
            .with_detected(ZoneId::new("Asia/Tokyo").unwrap())
            .with_zones(["America/New_York", "Asia/Tokyo", "Europe/London", "UTC"]);
        Cli::new(
            ZonePreference::new(MemoryStore::new(), detector),
            TerminalRenderer::new(false),
        )
    }

    fn format_args(instants: &[&str], zone: Option<&str>, strict: bool) -> FormatArgs {
        FormatArgs {
            instants: instants.iter().map(|s| s.to_string()).collect(),
            zone: zone.map(String::from),
            strict,
        }
    }

    #[test]
    fn test_format_with_explicit_zone() {
        let cli = test_cli();
        let args = format_args(
            &["2024-01-01T12:00:00Z", "2024-07-01T12:00:00Z"],
            Some("America/New_York"),
            false,
        );
        assert_eq!(
            cli.format_output(&args).unwrap(),
            "2024-01-01 07:00\n2024-07-01 08:00\n"
        );
    }

    #[test]
    fn test_format_uses_resolved_zone() {
        let cli = test_cli();
        let args = format_args(&["2024-01-01T12:00:00Z"], None, false);
        assert_eq!(cli.format_output(&args).unwrap(), "2024-01-01 21:00\n");
    }

    #[test]
    fn test_format_falls_back_to_raw_input() {
        let cli = test_cli();
        let args = format_args(&["not-a-date", "2024-01-01T00:30:00Z"], Some("UTC"), false);
        assert_eq!(
            cli.format_output(&args).unwrap(),
            "not-a-date\n2024-01-01 00:30\n"
        );
    }

    #[test]
    fn test_strict_format_fails() {
        let cli = test_cli();
        let args = format_args(&["not-a-date"], Some("UTC"), true);
        assert!(cli.format_output(&args).is_err());
    }

    #[test]
    fn test_invalid_zone_is_an_error() {
        let cli = test_cli();
        let args = format_args(&["2024-01-01T12:00:00Z"], Some("Mars/Phobos"), false);
        assert!(cli.format_output(&args).is_err());
    }

    #[test]
    fn test_set_show_and_clear_zone() {
        let mut cli = test_cli();

        let output = cli
            .set_zone(SetZoneArgs {
                zone: "europe/london".to_string(),
            })
            .unwrap();
        assert!(output.contains("Display zone set to Europe/London"));

        let shown = cli.show_zone_output().unwrap();
        assert!(shown.contains("**Zone**: Europe/London"));
        assert!(shown.contains("**Source**: stored"));

        assert!(cli.clear_zone().unwrap().contains("Display zone cleared"));
        let shown = cli.show_zone_output().unwrap();
        assert!(shown.contains("**Zone**: Asia/Tokyo"));
        assert!(shown.contains("**Source**: detected"));
        assert!(cli.clear_zone().unwrap().contains("No display zone was saved"));
    }

    #[test]
    fn test_set_rejects_unknown_zone() {
        let mut cli = test_cli();
        assert!(cli
            .set_zone(SetZoneArgs {
                zone: "Mars/Phobos".to_string(),
            })
            .is_err());
    }

    #[test]
    fn test_list_zones_marks_selected() {
        let cli = test_cli();
        let output = cli
            .list_zones_output(ListZonesArgs {
                filter: None,
                json: false,
            })
            .unwrap();
        assert!(output.contains("* **Asia/Tokyo** (selected)"));
        assert!(output.contains("* Europe/London"));
    }

    #[test]
    fn test_list_zones_json() {
        let cli = test_cli();
        let output = cli
            .list_zones_output(ListZonesArgs {
                filter: Some("york".to_string()),
                json: true,
            })
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["selected"], "Asia/Tokyo");
        assert_eq!(
            value["zones"],
            serde_json::json!(["America/New_York", "Asia/Tokyo"])
        );
        assert_eq!(value["complete"], true);
    }

    #[test]
    fn test_access_output() {
        let (allowed, output) = access_output(Some(Role::Admin), Role::Admin);
        assert!(allowed);
        assert!(output.contains("admin may access admin views"));

        let (allowed, output) = access_output(Some(Role::User), Role::Admin);
        assert!(!allowed);
        assert!(output.starts_with("Error:"));

        let (allowed, _) = access_output(None, Role::User);
        assert!(!allowed);
    }
}
