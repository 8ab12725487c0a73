use std::io::{BufRead, Write};

use clap::{Parser, ValueEnum};
use portfolio_dice::{links::LINK_FEEDBACK_MS, prelude::*};
use serde::Serialize;

type Host = Controller<MemorySurface, Roller>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Triggers to run in order, e.g. "open dice" "roll d20" "bulk".
    /// Read one per line from stdin when none are given.
    triggers: Vec<String>,

    /// Random seed for reproducibility
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    /// How to print the result region after each trigger
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,

    /// Simulate clicking these outbound links before running triggers
    #[arg(long = "check-link", value_name = "URL")]
    check_links: Vec<String>,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    trigger: &'a str,
    state: ModalState,
    modal_visible: bool,
    results: Option<&'a Markup>,
}

fn print_snapshot(
    out: &mut impl Write,
    controller: &Host,
    trigger: &str,
    format: Format,
) -> anyhow::Result<()> {
    let results = controller.results();
    match format {
        Format::Json => {
            let snapshot = Snapshot {
                trigger,
                state: controller.state(),
                modal_visible: controller.surface().modal_visible,
                results,
            };
            writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
        }
        Format::Text => {
            writeln!(out, "== {} [{}]", trigger, controller.state())?;
            if let Some(results) = results {
                write!(out, "{results}")?;
            }
        }
        Format::Html => {
            writeln!(out, "<!-- {} [{}] -->", trigger, controller.state())?;
            if let Some(body) = controller.surface().modal_body() {
                write!(out, "{}", body.to_html())?;
            }
        }
    }
    Ok(())
}

/// Runs positional triggers. Any parse or dispatch error aborts.
fn run_triggers(
    controller: &mut Host,
    triggers: &[String],
    out: &mut impl Write,
    format: Format,
) -> anyhow::Result<()> {
    for line in triggers {
        let trigger: Trigger = line.parse()?;
        controller.dispatch(trigger)?;
        print_snapshot(out, controller, line.trim(), format)?;
    }
    Ok(())
}

/// Runs one trigger per line. Lines that don't parse are skipped with a
/// warning; dispatch errors abort.
fn run_lines(
    controller: &mut Host,
    reader: impl BufRead,
    out: &mut impl Write,
    format: Format,
) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Trigger>() {
            Ok(trigger) => {
                controller.dispatch(trigger)?;
                print_snapshot(out, controller, line.trim(), format)?;
            }
            Err(e) => log::warn!("Skipping {:?}: {}", line.trim(), e),
        }
    }
    Ok(())
}

fn check_links(urls: &[String]) {
    let mut validator = LinkValidator::new();
    for url in urls {
        validator.on_click(url, url);
    }
    let settle = chrono::Duration::milliseconds(LINK_FEEDBACK_MS);
    for check in validator.advance(settle) {
        log::info!("Link {} valid: {}", check.url, check.valid);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(args.log_level)
        .init();
    log::debug!("Starting with args: {:?}", args);

    if !args.check_links.is_empty() {
        check_links(&args.check_links);
    }

    let roller = match args.seed {
        Some(seed) => Roller::from_seed(seed),
        None => Roller::new(),
    };
    let mut controller = Controller::new(MemorySurface::new(), roller);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.triggers.is_empty() {
        log::info!("Reading triggers from stdin");
        run_lines(&mut controller, std::io::stdin().lock(), &mut out, args.format)
    } else {
        run_triggers(&mut controller, &args.triggers, &mut out, args.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> Host {
        Controller::new(MemorySurface::new(), Roller::from_seed(7))
    }

    fn lines(script: &str, format: Format) -> (anyhow::Result<()>, String) {
        let mut controller = host();
        let mut out = Vec::new();
        let res = run_lines(&mut controller, script.as_bytes(), &mut out, format);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_unparsable_line_is_skipped() {
        let (res, out) = lines("open dice\ndance\n\nroll d6\n", Format::Text);
        res.unwrap();
        assert!(out.starts_with("== open dice [Open]\n"));
        assert!(out.contains("== roll d6 [Open]\n"));
        assert!(!out.contains("dance"));
        assert!(out.contains("Dice Roll Result:"));
    }

    #[test]
    fn test_roll_before_open_aborts() {
        let (res, out) = lines("roll d20\nopen dice\n", Format::Text);
        let err = res.unwrap_err();
        assert_eq!(
            err.downcast_ref::<PresentationError>(),
            Some(&PresentationError::MissingResultRegion)
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_snapshot() {
        let (res, out) = lines("open dice\n", Format::Json);
        res.unwrap();
        let snapshot: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(snapshot["trigger"], "open dice");
        assert_eq!(snapshot["state"], "Open");
        assert_eq!(snapshot["modal_visible"], true);
        assert_eq!(
            snapshot["results"][0]["Strong"],
            "Ready to test dice rolling API"
        );

        let (res, out) = lines("close\n", Format::Json);
        res.unwrap();
        let snapshot: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(snapshot["state"], "Closed");
        assert!(snapshot["results"].is_null());
    }

    #[test]
    fn test_html_snapshot() {
        let (res, out) = lines("open dice\n", Format::Html);
        res.unwrap();
        assert!(out.starts_with("<!-- open dice [Open] -->\n"));
        assert!(out.contains("<div class=\"test-results\">"));
    }

    #[test]
    fn test_positional_errors_abort() {
        let mut controller = host();
        let mut out = Vec::new();
        let triggers = ["open dice", "dance", "bulk"].map(String::from);
        let err = run_triggers(&mut controller, &triggers, &mut out, Format::Text).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TriggerError>(),
            Some(TriggerError::Unknown(name)) if name == "dance"
        ));
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("== ").count(), 1);

        let mut out = Vec::new();
        let triggers = ["custom 4000000000d6".to_string()];
        let err = run_triggers(&mut controller, &triggers, &mut out, Format::Text).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TriggerError>(),
            Some(TriggerError::Dice(DiceError::TooManyDice { .. }))
        ));
    }
}
