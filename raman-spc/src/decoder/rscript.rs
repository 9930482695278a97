use super::{DecodeError, DecodeOptions, SpcDecoder};
use crate::attribute::AttributeList;
use crate::config::EngineConfig;
use parking_lot::Mutex;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Prints the attribute tree of one SPC file as JSON
const READ_SPC: &str = include_str!("read_spc.R");

/// Exit status the package probe uses for a missing package
const MISSING_PACKAGE_STATUS: i32 = 3;

/// Decoder backed by `Rscript` and the `hyperSpec` package
///
/// One R process is started per file. The package probe runs once, on the
/// first decode; calls are serialised. After [`shutdown`](Self::shutdown)
/// every decode fails with [`DecodeError::EngineClosed`].
#[derive(Debug)]
pub struct RscriptEngine {
    config: EngineConfig,
    ready: OnceLock<()>,
    calls: Mutex<()>,
    closed: AtomicBool,
}

impl RscriptEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ready: OnceLock::new(),
            calls: Mutex::new(()),
            closed: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Stop accepting work; waits for an in-flight decode to finish
    pub fn shutdown(&self) {
        let _guard = self.calls.lock();
        if !self.closed.swap(true, Ordering::SeqCst) {
            info!(program = %self.config.program.display(), "SPC decoder engine shut down");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Arguments after the configured ones for decoding `path`
    pub(crate) fn script_args(path: &Path, options: DecodeOptions) -> Vec<OsString> {
        vec![
            OsString::from("-e"),
            OsString::from(READ_SPC),
            path.as_os_str().to_owned(),
            OsString::from(r_bool(options.hdr2data)),
            OsString::from(r_bool(options.log2data)),
        ]
    }

    fn probe_args(&self) -> Vec<OsString> {
        let probe = format!(
            "for (p in c('{}', 'jsonlite')) if (!requireNamespace(p, quietly = TRUE)) {{ message(p); quit(status = {}) }}",
            self.config.package, MISSING_PACKAGE_STATUS
        );
        vec![OsString::from("-e"), OsString::from(probe)]
    }

    fn run(&self, args: &[OsString]) -> Result<Output, DecodeError> {
        Command::new(&self.config.program)
            .args(&self.config.args)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| DecodeError::Spawn {
                program: self.config.program.clone(),
                source,
            })
    }

    /// Verify the package loads; only a success is remembered
    fn ensure_ready(&self) -> Result<(), DecodeError> {
        if self.ready.get().is_some() {
            return Ok(());
        }

        let output = self.run(&self.probe_args())?;
        if !output.status.success() {
            return Err(DecodeError::Unavailable {
                package: self.config.package.clone(),
                detail: stderr_text(&output),
            });
        }

        debug!(package = %self.config.package, "SPC decoder engine ready");
        let _ = self.ready.set(());
        Ok(())
    }
}

impl SpcDecoder for RscriptEngine {
    fn decode(&self, path: &Path, options: DecodeOptions) -> Result<AttributeList, DecodeError> {
        let _guard = self.calls.lock();
        if self.is_closed() {
            return Err(DecodeError::EngineClosed);
        }
        self.ensure_ready()?;

        debug!(path = %path.display(), ?options, "Decoding SPC file");
        let output = self.run(&Self::script_args(path, options))?;
        if !output.status.success() {
            return Err(DecodeError::Engine {
                status: output.status.to_string(),
                stderr: stderr_text(&output),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| DecodeError::Shape(format!("output is not UTF-8: {e}")))?;
        AttributeList::from_json(&stdout).map_err(|e| DecodeError::Shape(e.to_string()))
    }
}

fn r_bool(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeValue;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn engine(program: &str, args: &[&str]) -> RscriptEngine {
        RscriptEngine::new(EngineConfig {
            program: PathBuf::from(program),
            args: args.iter().map(|a| a.to_string()).collect(),
            package: "hyperSpec".to_string(),
        })
    }

    #[test]
    fn test_script_args() {
        let options = DecodeOptions {
            hdr2data: true,
            log2data: false,
        };
        let args = RscriptEngine::script_args(Path::new("/tmp/a.spc"), options);
        assert_eq!(args.len(), 5);
        assert_eq!(args[0], "-e");
        assert!(args[1].to_string_lossy().contains("read.spc("));
        assert_eq!(args[2], "/tmp/a.spc");
        assert_eq!(args[3], "TRUE");
        assert_eq!(args[4], "FALSE");
    }

    #[test]
    fn test_decode_after_shutdown() {
        let engine = engine("Rscript", &["--vanilla"]);
        engine.shutdown();
        engine.shutdown();
        assert!(engine.is_closed());

        let err = engine
            .decode(Path::new("/tmp/a.spc"), DecodeOptions::default())
            .unwrap_err();
        assert!(matches!(err, DecodeError::EngineClosed));
    }

    #[test]
    fn test_missing_program() {
        let engine = engine("/nonexistent/raman-spc/Rscript", &[]);
        let err = engine
            .decode(Path::new("/tmp/a.spc"), DecodeOptions::default())
            .unwrap_err();
        assert!(matches!(err, DecodeError::Spawn { .. }), "got {err:?}");
    }

    // `sh -c <script> sh -e <expr> [file hdr log]`: the probe passes two
    // positional arguments, a decode passes five.

    #[cfg(unix)]
    #[test]
    fn test_decodes_engine_output() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("tree.json");
        std::fs::write(
            &json,
            r#"{"type":"list","entries":[{"name":"fexper","value":{"type":"double","values":[1]}}]}"#,
        )
        .unwrap();

        let script = format!("[ $# -lt 3 ] && exit 0; cat '{}'", json.display());
        let engine = engine("sh", &["-c", script.as_str(), "sh"]);
        let tree = engine
            .decode(Path::new("/tmp/a.spc"), DecodeOptions::default())
            .unwrap();
        assert_eq!(tree.get("fexper"), Some(&AttributeValue::doubles(vec![1.0])));
    }

    #[cfg(unix)]
    #[test]
    fn test_engine_failure_keeps_stderr() {
        let script = "[ $# -lt 3 ] && exit 0; echo 'cannot read file' >&2; exit 2";
        let engine = engine("sh", &["-c", script, "sh"]);
        let err = engine
            .decode(Path::new("/tmp/a.spc"), DecodeOptions::default())
            .unwrap_err();
        match err {
            DecodeError::Engine { stderr, .. } => assert_eq!(stderr, "cannot read file"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_package() {
        let engine = engine("sh", &["-c", "echo hyperSpec >&2; exit 3", "sh"]);
        let err = engine
            .decode(Path::new("/tmp/a.spc"), DecodeOptions::default())
            .unwrap_err();
        assert!(matches!(err, DecodeError::Unavailable { .. }), "got {err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn test_garbage_output_is_a_shape_error() {
        let engine = engine("sh", &["-c", "echo 'not json'", "sh"]);
        let err = engine
            .decode(Path::new("/tmp/a.spc"), DecodeOptions::default())
            .unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)), "got {err:?}");
    }
}
