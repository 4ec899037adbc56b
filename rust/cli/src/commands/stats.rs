//! Statistics aggregation over JSONL round records.
//!
//! Accepts a single file (`.jsonl` or `.jsonl.zst`) or a directory searched
//! recursively for such files. A truncated final line, as left behind by an
//! interrupted `sim --output`, is discarded; any other unparsable line is
//! counted as corrupted and skipped.

use crate::error::CliError;
use crate::io_utils::{find_record_files, read_text_auto};
use crate::tally::Tally;
use crate::ui;
use blackjack_engine::logger::RoundRecord;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default)]
struct StatsState {
    rounds: u64,
    overall: Tally,
    by_strategy: BTreeMap<String, Tally>,
    skipped: u64,
    corrupted: u64,
}

impl StatsState {
    fn consume(&mut self, content: &str) {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            match serde_json::from_str::<RoundRecord>(line) {
                Ok(rec) => {
                    self.rounds += 1;
                    self.overall.record(rec.outcome);
                    self.by_strategy
                        .entry(rec.strategy)
                        .or_default()
                        .record(rec.outcome);
                }
                Err(_) if i == lines.len() - 1 && !has_trailing_nl => self.skipped += 1,
                Err(_) => self.corrupted += 1,
            }
        }
    }
}

/// Aggregates round records and prints a JSON summary.
///
/// # Output
///
/// ```json
/// {
///   "rounds": 3,
///   "overall": { "wins": 1, "losses": 1, "pushes": 1 },
///   "strategies": {
///     "always-stand": { "wins": 1, "losses": 1, "pushes": 1 }
///   }
/// }
/// ```
///
/// A single file that yields no valid record but had bad lines is an error.
pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(input);
    let mut state = StatsState::default();

    if path.is_dir() {
        for file in find_record_files(path) {
            match read_text_auto(&file.to_string_lossy()) {
                Ok(content) => state.consume(&content),
                Err(e) => {
                    ui::display_warning(err, &format!("Failed to read {}: {}", file.display(), e))?;
                    state.corrupted += 1;
                }
            }
        }
    } else {
        match read_text_auto(input) {
            Ok(content) => state.consume(&content),
            Err(e) => {
                return Err(CliError::InvalidInput(format!(
                    "Failed to read {}: {}",
                    input, e
                )));
            }
        }
    }

    if state.corrupted > 0 {
        ui::display_warning(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.rounds == 0 && (state.corrupted > 0 || state.skipped > 0) {
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    tracing::debug!(rounds = state.rounds, corrupted = state.corrupted, "stats aggregated");

    let summary = serde_json::json!({
        "rounds": state.rounds,
        "overall": state.overall,
        "strategies": state.by_strategy,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAND_WIN: &str = concat!(
        r#"{"round_id":"20250101-000001","seed":1,"strategy":"always-stand","#,
        r#""player":[],"dealer":[],"#,
        r#""player_value":20,"dealer_value":18,"#,
        r#""decisions":["STAND"],"outcome":"player_wins","ts":"2025-01-01T00:00:00Z"}"#
    );
    const STAND_PUSH: &str = concat!(
        r#"{"round_id":"20250101-000002","seed":2,"strategy":"always-stand","#,
        r#""player":[],"dealer":[],"#,
        r#""player_value":19,"dealer_value":19,"#,
        r#""decisions":["STAND"],"outcome":"push"}"#
    );
    const HIT_LOSS: &str = concat!(
        r#"{"round_id":"20250101-000003","seed":3,"strategy":"always-hit","#,
        r#""player":[],"dealer":[],"#,
        r#""player_value":25,"dealer_value":10,"#,
        r#""decisions":["HIT"],"outcome":"dealer_wins"}"#
    );

    fn run_on(content: &str) -> (Result<(), CliError>, String, String) {
        let mut temp = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut temp, content.as_bytes()).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command(temp.path().to_str().unwrap(), &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_stats_empty_file() {
        let (result, out, _) = run_on("");
        assert!(result.is_ok());
        assert!(out.contains("\"rounds\": 0"));
    }

    #[test]
    fn test_stats_groups_by_strategy() {
        let (result, out, err) = run_on(&format!("{}\n{}\n{}\n", STAND_WIN, STAND_PUSH, HIT_LOSS));
        assert!(result.is_ok());
        assert!(err.is_empty());

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["rounds"], 3);
        assert_eq!(json["overall"]["wins"], 1);
        assert_eq!(json["overall"]["losses"], 1);
        assert_eq!(json["strategies"]["always-stand"]["pushes"], 1);
        assert_eq!(json["strategies"]["always-hit"]["losses"], 1);
    }

    #[test]
    fn test_stats_counts_corrupted_lines() {
        let (result, out, err) =
            run_on(&format!("{}\n{{invalid json}}\n{}\n", STAND_WIN, HIT_LOSS));
        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["rounds"], 2);
        assert!(err.contains("Skipped 1 corrupted record(s)"));
    }

    #[test]
    fn test_stats_discards_truncated_last_line() {
        let truncated = &HIT_LOSS[..40];
        let (result, out, err) = run_on(&format!("{}\n{}", STAND_WIN, truncated));
        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["rounds"], 1);
        assert!(err.contains("incomplete final line"));
    }

    #[test]
    fn test_stats_only_garbage_is_an_error() {
        let (result, _, _) = run_on("not json\n");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_stats_nonexistent_file() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command("/nonexistent/path/rounds.jsonl", &mut out, &mut err);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
