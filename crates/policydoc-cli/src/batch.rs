use std::{
    collections::HashSet,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use policydoc_config::Config;
use policydoc_engine::{ConvertError, MetadataOptions, PolicyDocument, build_policy};
use thiserror::Error;

use crate::cli::Args;

const GLOB_CHARS: [char; 3] = ['*', '?', '['];

/// Failure converting a single draft. Never aborts the batch.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("failed to read draft: {0}")]
    Read(#[source] io::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{} was already written by an earlier draft in this batch", path.display())]
    AlreadyWritten { path: PathBuf },
}

/// Effective options after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub metadata: MetadataOptions,
    pub stdout: bool,
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Flags win over the config file, which wins over built-in defaults.
    pub fn resolve(args: &Args, config: Option<Config>) -> Self {
        let config = config.unwrap_or_default();
        Self {
            metadata: MetadataOptions {
                version: args.version.clone().unwrap_or(config.version),
                locale: args.locale.clone().unwrap_or(config.locale),
            },
            stdout: args.stdout,
            output_dir: args.output_dir.clone().or(config.output_dir),
        }
    }
}

/// What happened to one draft.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Written,
    Printed,
    Failed,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub printed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Written => self.written += 1,
            Outcome::Printed => self.printed += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Expands arguments containing glob metacharacters.
///
/// A pattern that is invalid or matches nothing is kept as written so the
/// batch reports it as a missing file.
pub fn expand_drafts(patterns: &[String]) -> Vec<PathBuf> {
    let mut drafts = vec![];
    for pattern in patterns {
        if !pattern.contains(GLOB_CHARS) {
            drafts.push(PathBuf::from(pattern));
            continue;
        }
        let matches: Vec<PathBuf> = match glob::glob(pattern) {
            Ok(paths) => paths.filter_map(Result::ok).collect(),
            Err(e) => {
                log::warn!("invalid glob pattern {pattern:?}: {e}");
                vec![]
            }
        };
        if matches.is_empty() {
            drafts.push(PathBuf::from(pattern));
        } else {
            drafts.extend(matches);
        }
    }
    drafts
}

/// Converts every draft in order, reporting each result as it completes.
///
/// Written paths and JSON go to `out`; skips and errors go to `err`.
pub fn run_batch(
    drafts: &[PathBuf],
    settings: &Settings,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut written = HashSet::new();

    for draft in drafts {
        let outcome = if !draft.exists() {
            writeln!(err, "[skip] File not found: {}", draft.display())?;
            Outcome::Skipped
        } else {
            match process_draft(draft, settings, &mut written) {
                Ok(Processed::Json(json)) => {
                    out.write_all(json.as_bytes())?;
                    Outcome::Printed
                }
                Ok(Processed::Written(path)) => {
                    writeln!(out, "[ok] Wrote {}", path.display())?;
                    Outcome::Written
                }
                Err(e) => {
                    log::debug!("{}: {e:?}", draft.display());
                    writeln!(err, "[error] {}: {e}", draft.display())?;
                    Outcome::Failed
                }
            }
        };
        summary.record(&outcome);
    }

    Ok(summary)
}

enum Processed {
    Json(String),
    Written(PathBuf),
}

/// Converts one draft and writes it unless `written` already holds its
/// output path.
///
/// With an output directory, files go to `<dir>/<appId>/<date>.json`;
/// otherwise to `<date>.json` beside the draft.
fn process_draft(
    draft: &Path,
    settings: &Settings,
    written: &mut HashSet<PathBuf>,
) -> Result<Processed, DraftError> {
    let text = fs::read_to_string(draft).map_err(DraftError::Read)?;
    let resolved = fs::canonicalize(draft).unwrap_or_else(|_| draft.to_path_buf());
    let doc = build_policy(&text, &resolved, &settings.metadata)?;
    let json = render_json(&doc)?;

    if settings.stdout {
        return Ok(Processed::Json(json));
    }

    let dir = match &settings.output_dir {
        Some(dir) => dir.join(&doc.app_id),
        None => draft.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    let path = dir.join(doc.output_file_name());
    if !written.insert(path.clone()) {
        return Err(DraftError::AlreadyWritten { path });
    }

    if settings.output_dir.is_some() {
        fs::create_dir_all(&dir).map_err(|source| DraftError::Write {
            path: dir.clone(),
            source,
        })?;
    }
    fs::write(&path, json).map_err(|source| DraftError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(Processed::Written(path))
}

/// Pretty JSON with a trailing newline. Non-ASCII text is written as-is.
fn render_json(doc: &PolicyDocument) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(doc)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const DRAFT: &str = "# Privacy Policy (Trail Pacing)\n\nLast Updated: 01/02/2025\n\n## Data\n\nWe keep **nothing** – not even “logs”.\n";

    fn settings() -> Settings {
        Settings {
            metadata: MetadataOptions::default(),
            stdout: false,
            output_dir: None,
        }
    }

    fn run(drafts: &[PathBuf], settings: &Settings) -> (Summary, String, String) {
        let mut out = vec![];
        let mut err = vec![];
        let summary = run_batch(drafts, settings, &mut out, &mut err).unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("policydoc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn writes_dated_json_next_to_draft() {
        let temp_dir = TempDir::new().unwrap();
        let draft = temp_dir.path().join("draft.md");
        fs::write(&draft, DRAFT).unwrap();

        let (summary, out, err) = run(&[draft], &settings());

        let expected = temp_dir.path().join("2025-02-01.json");
        assert_eq!(summary.written, 1);
        assert_eq!(out, format!("[ok] Wrote {}\n", expected.display()));
        assert_eq!(err, "");

        let json = fs::read_to_string(&expected).unwrap();
        assert!(json.ends_with("}\n"));
        assert!(json.contains("\n  \"appId\": \"trail-pacing\","));
        assert!(json.contains("“logs”"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metadata"]["lastUpdated"], "2025-02-01");
        assert_eq!(value["metadata"]["locale"], "en-GB");
    }

    #[test]
    fn stdout_mode_prints_json_and_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let draft = temp_dir.path().join("draft.md");
        fs::write(&draft, DRAFT).unwrap();
        let settings = Settings {
            stdout: true,
            ..settings()
        };

        let (summary, out, _) = run(&[draft], &settings);

        assert_eq!(summary.printed, 1);
        assert!(out.starts_with("{\n  \"appId\""));
        assert!(!temp_dir.path().join("2025-02-01.json").exists());
    }

    #[test]
    fn output_dir_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let draft = temp_dir.path().join("draft.md");
        fs::write(&draft, DRAFT).unwrap();
        let out_dir = temp_dir.path().join("out").join("json");
        let settings = Settings {
            output_dir: Some(out_dir.clone()),
            ..settings()
        };

        let (summary, _, _) = run(&[draft], &settings);

        assert_eq!(summary.written, 1);
        assert!(out_dir.join("trail-pacing").join("2025-02-01.json").exists());
    }

    #[test]
    fn output_dir_keeps_same_dated_apps_apart() {
        let temp_dir = TempDir::new().unwrap();
        let mut drafts = vec![];
        for app in ["Alpha", "Beta"] {
            let draft = temp_dir.path().join(app.to_lowercase()).join("draft.md");
            fs::create_dir_all(draft.parent().unwrap()).unwrap();
            fs::write(
                &draft,
                format!("# Privacy Policy ({app})
Last Updated: 01/02/2025
"),
            )
            .unwrap();
            drafts.push(draft);
        }
        let out_dir = temp_dir.path().join("out");
        let settings = Settings {
            output_dir: Some(out_dir.clone()),
            ..settings()
        };

        let (summary, out, err) = run(&drafts, &settings);

        assert_eq!(summary.written, 2);
        assert_eq!(err, "");
        assert_eq!(out.lines().count(), 2);
        for app in ["alpha", "beta"] {
            let json = fs::read_to_string(out_dir.join(app).join("2025-02-01.json")).unwrap();
            assert!(json.contains(&format!("\"appId\": \"{app}\"")));
        }
    }

    #[test]
    fn second_draft_with_same_output_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("draft.md");
        let second = temp_dir.path().join("copy.md");
        fs::write(&first, DRAFT).unwrap();
        fs::write(&second, DRAFT.replace("**nothing**", "*little*")).unwrap();

        let (summary, _, err) = run(&[first, second.clone()], &settings());

        assert_eq!(summary.written, 1);
        assert_eq!(summary.failed, 1);
        assert!(err.starts_with(&format!("[error] {}: ", second.display())));
        assert!(err.contains("already written by an earlier draft"));
        let json = fs::read_to_string(temp_dir.path().join("2025-02-01.json")).unwrap();
        assert!(json.contains("<strong>nothing</strong>"));
    }

    #[test]
    fn app_id_falls_back_to_resolved_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let app_dir = temp_dir.path().join("moon-tracker");
        fs::create_dir_all(app_dir.join("sub")).unwrap();
        fs::write(app_dir.join("draft.md"), "# Privacy Policy
Updated: 03/04/2025
").unwrap();
        // Unresolved, this path's parent ends in `..` and has no name.
        let draft = app_dir.join("sub").join("..").join("draft.md");
        let settings = Settings {
            stdout: true,
            ..settings()
        };

        let (_, out, _) = run(&[draft], &settings);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["appId"], "moon-tracker");
    }

    #[test]
    fn failures_are_isolated_per_draft() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.md");
        let undated = temp_dir.path().join("undated").join("draft.md");
        fs::create_dir_all(undated.parent().unwrap()).unwrap();
        fs::write(&undated, "# Policy\n\n## A\ntext\n").unwrap();
        let good = temp_dir.path().join("good").join("draft.md");
        fs::create_dir_all(good.parent().unwrap()).unwrap();
        fs::write(&good, DRAFT).unwrap();

        let (summary, out, err) = run(&[missing.clone(), undated.clone(), good], &settings());

        assert_eq!(
            summary,
            Summary {
                written: 1,
                printed: 0,
                skipped: 1,
                failed: 1,
            }
        );
        assert!(summary.has_failures());
        assert!(out.starts_with("[ok] Wrote "));
        let lines: Vec<&str> = err.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("[skip] File not found: {}", missing.display()));
        assert!(lines[1].starts_with(&format!("[error] {}: could not find", undated.display())));
    }

    #[test]
    fn invalid_date_is_reported_with_raw_text() {
        let temp_dir = TempDir::new().unwrap();
        let draft = temp_dir.path().join("draft.md");
        fs::write(&draft, "# Policy\nLast Updated: 32/13/2025\n").unwrap();

        let (summary, _, err) = run(&[draft], &settings());

        assert_eq!(summary.failed, 1);
        assert!(err.contains("\"32/13/2025\" is not a valid calendar date"));
    }

    #[test]
    fn flags_override_config_which_overrides_defaults() {
        let config = Config {
            version: "3.0.0".to_string(),
            locale: "en-IE".to_string(),
            output_dir: Some(PathBuf::from("/srv/out")),
        };

        let settings = Settings::resolve(&args(&["--locale", "cy-GB", "d.md"]), Some(config));

        assert_eq!(settings.metadata.version, "3.0.0");
        assert_eq!(settings.metadata.locale, "cy-GB");
        assert_eq!(settings.output_dir, Some(PathBuf::from("/srv/out")));
    }

    #[test]
    fn defaults_without_config() {
        let settings = Settings::resolve(&args(&["d.md"]), None);
        assert_eq!(settings.metadata, MetadataOptions::default());
        assert_eq!(settings.output_dir, None);
        assert!(!settings.stdout);
    }

    #[test]
    fn glob_patterns_expand_in_order() {
        let temp_dir = TempDir::new().unwrap();
        for app in ["b", "a"] {
            let dir = temp_dir.path().join("apps").join(app);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("draft.md"), DRAFT).unwrap();
        }
        let pattern = format!("{}/apps/*/draft.md", temp_dir.path().display());

        let drafts = expand_drafts(&[pattern]);

        assert_eq!(
            drafts,
            vec![
                temp_dir.path().join("apps/a/draft.md"),
                temp_dir.path().join("apps/b/draft.md"),
            ]
        );
    }

    #[test]
    fn unmatched_pattern_and_plain_paths_are_kept() {
        let drafts = expand_drafts(&["nowhere/*.md".to_string(), "plain.md".to_string()]);
        assert_eq!(
            drafts,
            vec![PathBuf::from("nowhere/*.md"), PathBuf::from("plain.md")]
        );
    }
}
