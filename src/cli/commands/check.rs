//! Check command implementation.
//!
//! The `pinlock check` command compares each manifest against the installed
//! packages and reports mismatches. Exit code 1 means at least one manifest
//! is out of sync; errors surface to the binary, which exits with 2.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::CheckArgs;
use crate::config::{load_config, InstalledSource, PinlockConfig};
use crate::error::Result;
use crate::installed::{InstalledPackages, PipList, SitePackages, DEFAULT_PYTHON};
use crate::report::{
    check_manifest, CheckOutcome, HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Manifest checked when neither the command line nor the config names one.
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }

    /// Manifests to check, as (path to read, label shown in messages).
    fn manifests(&self, config: &PinlockConfig) -> Vec<(PathBuf, String)> {
        let chosen = if !self.args.manifests.is_empty() {
            self.args.manifests.clone()
        } else if !config.manifests.is_empty() {
            config.manifests.clone()
        } else {
            vec![PathBuf::from(DEFAULT_MANIFEST)]
        };

        chosen
            .into_iter()
            .map(|m| (self.project_root.join(&m), m.display().to_string()))
            .collect()
    }

    fn installed_source(&self, config: &PinlockConfig) -> Result<Box<dyn InstalledPackages>> {
        let source = self.args.source.or(config.source).unwrap_or_default();

        match source {
            InstalledSource::Pip => {
                let python = self
                    .args
                    .python
                    .clone()
                    .or_else(|| config.python.clone())
                    .unwrap_or_else(|| DEFAULT_PYTHON.to_string());
                Ok(Box::new(PipList::new(python)))
            }
            InstalledSource::SitePackages => {
                if !self.args.site_packages.is_empty() {
                    return Ok(Box::new(SitePackages::new(self.args.site_packages.clone())));
                }
                if !config.site_packages.is_empty() {
                    let dirs = config
                        .site_packages
                        .iter()
                        .map(|d| self.project_root.join(d))
                        .collect();
                    return Ok(Box::new(SitePackages::new(dirs)));
                }
                Ok(Box::new(SitePackages::from_env()?))
            }
        }
    }

    fn report(&self, outcomes: &[CheckOutcome], ui: &mut dyn UserInterface) -> Result<()> {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Json => {
                JsonFormatter::new().format(outcomes, &mut output)?;
                ui.message(String::from_utf8_lossy(&output).trim_end());
            }
            OutputFormat::Human => {
                HumanFormatter::new(ui.use_color()).format(outcomes, &mut output)?;
                for line in String::from_utf8_lossy(&output).lines() {
                    ui.error(line);
                }
                for outcome in outcomes.iter().filter(|o| o.is_clean()) {
                    ui.success(&format!("{} matches installed packages", outcome.manifest()));
                }
            }
        }

        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let installed = self.installed_source(&config)?;
        debug!("Reading installed packages from {}", installed.describe());

        let post_text = self.args.post_text.as_deref().or(config.post_text.as_deref());

        let mut outcomes = Vec::new();
        for (path, label) in self.manifests(&config) {
            outcomes.push(check_manifest(&path, &label, post_text, installed.as_ref())?);
        }

        self.report(&outcomes, ui)?;

        if outcomes.iter().all(CheckOutcome::is_clean) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PinlockError;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(requirements: &str, installed: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("site-packages");
        fs::create_dir_all(&site).unwrap();
        for (name, version) in installed {
            let info = site.join(format!("{}-{}.dist-info", name, version));
            fs::create_dir_all(&info).unwrap();
            fs::write(
                info.join("METADATA"),
                format!("Metadata-Version: 2.1\nName: {}\nVersion: {}\n", name, version),
            )
            .unwrap();
        }
        fs::write(temp.path().join("requirements.txt"), requirements).unwrap();
        temp
    }

    fn args_for(temp: &TempDir) -> CheckArgs {
        CheckArgs {
            site_packages: vec![temp.path().join("site-packages")],
            ..Default::default()
        }
    }

    #[test]
    fn clean_manifest_is_silent() {
        let temp = setup_project("Django==4.2.1\n", &[("django", "4.2.1")]);
        let cmd = CheckCommand::new(temp.path(), None, args_for(&temp));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.is_silent());
    }

    #[test]
    fn verbose_reports_clean_manifest() {
        let temp = setup_project("Django==4.2.1\n", &[("django", "4.2.1")]);
        let cmd = CheckCommand::new(temp.path(), None, args_for(&temp));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_success("requirements.txt matches installed packages"));
    }

    #[test]
    fn mismatches_fail_with_exit_code_1() {
        let temp = setup_project("package1==1.1\npackage2==1.0\n", &[("package1", "1.0")]);
        let args = CheckArgs {
            post_text: Some("Run make deps".into()),
            ..args_for(&temp)
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.errors(),
            &[
                "There are requirement mismatches with requirements.txt".to_string(),
                "    * Package package1 has version 1.1 but you have version 1.0 installed."
                    .to_string(),
                "    * Package package2 is in requirements.txt but not in virtualenv".to_string(),
                "Run make deps".to_string(),
            ]
        );
    }

    #[test]
    fn json_format_writes_to_stdout() {
        let temp = setup_project("pkg==2.0\n", &[("pkg", "1.0")]);
        let args = CheckArgs {
            format: OutputFormat::Json,
            ..args_for(&temp)
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors().is_empty());
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["summary"]["mismatches"], 1);
        assert_eq!(value["results"][0]["mismatches"][0]["actual"], "1.0");
    }

    #[test]
    fn checks_every_manifest() {
        let temp = setup_project("pkg==1.0\n", &[("pkg", "1.0")]);
        fs::write(temp.path().join("dev.txt"), "pytest==8.0\n").unwrap();
        let args = CheckArgs {
            manifests: vec![PathBuf::from("requirements.txt"), PathBuf::from("dev.txt")],
            ..args_for(&temp)
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("mismatches with dev.txt"));
        assert!(!ui.has_error("mismatches with requirements.txt"));
    }

    #[test]
    fn config_supplies_manifests_and_post_text() {
        let temp = setup_project("", &[]);
        fs::write(temp.path().join("base.txt"), "pkg==1.0\n").unwrap();
        fs::write(
            temp.path().join(".pinlock.yml"),
            "manifests: [base.txt]\npost_text: Run make deps\nsite_packages: [site-packages]\n",
        )
        .unwrap();

        let cmd = CheckCommand::new(temp.path(), None, CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Package pkg is in base.txt but not in virtualenv"));
        assert!(ui.has_error("Run make deps"));
    }

    #[test]
    fn cli_post_text_overrides_config() {
        let temp = setup_project("pkg==1.0\n", &[]);
        fs::write(temp.path().join(".pinlock.yml"), "post_text: from config\n").unwrap();
        let args = CheckArgs {
            post_text: Some("from flag".into()),
            ..args_for(&temp)
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_error("from flag"));
        assert!(!ui.has_error("from config"));
    }

    #[test]
    fn missing_manifest_is_error() {
        let temp = setup_project("pkg==1.0\n", &[]);
        let args = CheckArgs {
            manifests: vec![PathBuf::from("nope.txt")],
            ..args_for(&temp)
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        assert!(matches!(
            cmd.execute(&mut ui),
            Err(PinlockError::ManifestNotFound { .. })
        ));
    }

    #[test]
    fn malformed_line_is_error() {
        let temp = setup_project("pkg>=1.0\n", &[]);
        let cmd = CheckCommand::new(temp.path(), None, args_for(&temp));
        let mut ui = MockUI::new();

        assert!(matches!(
            cmd.execute(&mut ui),
            Err(PinlockError::MalformedPinLine { .. })
        ));
    }

    #[test]
    fn marker_only_equality_is_error() {
        let temp = setup_project(
            "django>=4.2 ; python_version == \"3.8\"\n",
            &[("django", "4.2.1")],
        );
        let cmd = CheckCommand::new(temp.path(), None, args_for(&temp));
        let mut ui = MockUI::new();

        assert!(matches!(
            cmd.execute(&mut ui),
            Err(PinlockError::MalformedPinLine { .. })
        ));
    }

    #[test]
    fn explicit_config_override_must_exist() {
        let temp = setup_project("pkg==1.0\n", &[("pkg", "1.0")]);
        let cmd = CheckCommand::new(
            temp.path(),
            Some(temp.path().join("custom.yml")),
            args_for(&temp),
        );
        let mut ui = MockUI::new();

        assert!(matches!(
            cmd.execute(&mut ui),
            Err(PinlockError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn pip_source_uses_configured_python() {
        let temp = setup_project("pkg==1.0\n", &[]);
        fs::write(
            temp.path().join(".pinlock.yml"),
            "source: pip\npython: /opt/custom/python\n",
        )
        .unwrap();
        let cmd = CheckCommand::new(temp.path(), None, CheckArgs::default());
        let config = load_config(temp.path(), None).unwrap();

        let source = cmd.installed_source(&config).unwrap();
        assert_eq!(source.describe(), "/opt/custom/python -m pip list");
    }

    #[test]
    fn manifest_labels_keep_typed_path() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), None, CheckArgs::default());

        let manifests = cmd.manifests(&PinlockConfig::default());
        assert_eq!(manifests.len(), 1);
        assert_eq!(manifests[0].0, temp.path().join(DEFAULT_MANIFEST));
        assert_eq!(manifests[0].1, DEFAULT_MANIFEST);
    }
}
