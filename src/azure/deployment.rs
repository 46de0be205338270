// src/azure/deployment.rs
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

use super::{
    outputs_from_response, require_non_empty, to_args, AzError, AzureCli, CommandRunner,
    DeploymentOutputs,
};
use crate::deployment::DeploymentParameters;

/// Resource group deployment operations (`az group deployment ...`)
pub struct DeploymentCli<'a, R: CommandRunner> {
    pub(super) az: &'a AzureCli<R>,
}

impl<R: CommandRunner> DeploymentCli<'_, R> {
    /// Deploy an ARM template into a resource group.
    ///
    /// Non-empty `parameters` are written to `<deployment_name>_params.json`
    /// in the params directory for the duration of the call and passed with
    /// `--parameters @file`. The file is removed whether or not the command
    /// succeeds.
    ///
    /// A deployment that reports no outputs block returns an empty map.
    pub fn create(
        &self,
        resource_group: &str,
        deployment_name: &str,
        template_file: &Path,
        parameters: Option<&DeploymentParameters>,
    ) -> Result<DeploymentOutputs, AzError> {
        const OPERATION: &str = "create_group_deployment";
        require_non_empty(OPERATION, "resource group", resource_group)?;
        require_non_empty(OPERATION, "deployment name", deployment_name)?;
        if template_file.as_os_str().is_empty() {
            return Err(AzError::EmptyArgument {
                operation: OPERATION,
                argument: "template file",
            });
        }
        if !template_file.is_file() {
            return Err(AzError::TemplateNotFound {
                operation: OPERATION,
                path: template_file.to_path_buf(),
            });
        }

        let mut args = to_args(&[
            "group",
            "deployment",
            "create",
            "-n",
            deployment_name,
            "-g",
            resource_group,
            "--template-file",
        ]);
        args.push(template_file.to_string_lossy().into_owned());

        let params_file = match parameters.filter(|p| !p.is_empty()) {
            Some(params) => {
                let file = ParamsFile::write(self.az.params_dir(), deployment_name, params)?;
                args.push("--parameters".to_string());
                args.push(format!("@{}", file.path().display()));
                Some(file)
            }
            None => None,
        };

        tracing::info!(
            group = resource_group,
            deployment = deployment_name,
            template = %template_file.display(),
            "starting deployment"
        );
        let result = self.az.run_json(&args);
        drop(params_file);

        let response = result?;
        Ok(outputs_from_response(&response).unwrap_or_default())
    }

    /// Names of every deployment in the resource group.
    ///
    /// `None` when the response is not a JSON array.
    pub fn list(&self, resource_group: &str) -> Result<Option<Vec<String>>, AzError> {
        require_non_empty("get_group_deployments", "resource group", resource_group)?;

        let response = self.az.run_json(&to_args(&[
            "group",
            "deployment",
            "list",
            "-g",
            resource_group,
        ]))?;

        let names = response.as_array().map(|deployments| {
            deployments
                .iter()
                .filter_map(|d| d.get("name").and_then(|n| n.as_str()))
                .map(str::to_string)
                .collect()
        });
        Ok(names)
    }

    /// Outputs of an existing deployment.
    ///
    /// `None` when the deployment reports no outputs block; `Some` of an
    /// empty map when the block is present but declares nothing.
    pub fn outputs(
        &self,
        resource_group: &str,
        deployment_name: &str,
    ) -> Result<Option<DeploymentOutputs>, AzError> {
        const OPERATION: &str = "get_group_deployment_output";
        require_non_empty(OPERATION, "resource group", resource_group)?;
        require_non_empty(OPERATION, "deployment name", deployment_name)?;

        let response = self.az.run_json(&to_args(&[
            "group",
            "deployment",
            "show",
            "-g",
            resource_group,
            "-n",
            deployment_name,
        ]))?;

        Ok(outputs_from_response(&response))
    }
}

/// Transient parameters file, removed on drop
struct ParamsFile {
    path: PathBuf,
}

impl ParamsFile {
    fn write(
        dir: &Path,
        deployment_name: &str,
        params: &DeploymentParameters,
    ) -> Result<Self, AzError> {
        let file = Self {
            path: dir.join(format!("{}_params.json", deployment_name)),
        };

        let mut content = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut content, PrettyFormatter::with_indent(b"    "));
        params
            .serialize(&mut serializer)
            .map_err(|e| AzError::ParamsFile {
                path: file.path.clone(),
                source: e.into(),
            })?;

        std::fs::write(&file.path, content).map_err(|source| AzError::ParamsFile {
            path: file.path.clone(),
            source,
        })?;
        tracing::debug!(path = %file.path.display(), "wrote deployment parameters");

        Ok(file)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ParamsFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not remove deployment parameters file"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fake::FakeRunner;
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
        template: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let template = dir.path().join("template.json");
            std::fs::write(&template, r#"{"resources": []}"#).unwrap();
            Self { dir, template }
        }

        fn az(&self, runner: FakeRunner) -> AzureCli<FakeRunner> {
            AzureCli::with_runner(runner).with_params_dir(self.dir.path())
        }

        fn params_path(&self, deployment: &str) -> PathBuf {
            self.dir.path().join(format!("{deployment}_params.json"))
        }
    }

    #[test]
    fn test_create_unwraps_outputs() {
        let fx = Fixture::new();
        let az = fx.az(FakeRunner::new([
            r#"{"properties": {"outputs": {"x": {"type": "Int", "value": 5}}}}"#,
        ]));

        let outputs = az
            .deployment()
            .create("rg", "dep", &fx.template, None)
            .unwrap();

        let mut expected = DeploymentOutputs::new();
        expected.insert("x".to_string(), json!(5));
        assert_eq!(outputs, expected);
    }

    #[test]
    fn test_create_without_parameters_has_no_file_or_flag() {
        let fx = Fixture::new();
        let az = fx.az(FakeRunner::new(["{}", "{}"]));
        let empty = DeploymentParameters::new();

        az.deployment()
            .create("rg", "dep", &fx.template, Some(&empty))
            .unwrap();
        az.deployment()
            .create("rg", "dep", &fx.template, None)
            .unwrap();

        let template = fx.template.to_string_lossy().into_owned();
        let expected = [
            "group",
            "deployment",
            "create",
            "-n",
            "dep",
            "-g",
            "rg",
            "--template-file",
            template.as_str(),
        ];
        assert_eq!(az.runner().calls(), [expected, expected]);
        assert!(az.runner().attached_files().iter().all(Option::is_none));
        assert!(!fx.params_path("dep").exists());
    }

    #[test]
    fn test_create_writes_and_removes_params_file() {
        let fx = Fixture::new();
        let az = fx.az(FakeRunner::new(["{}"]));
        let params = DeploymentParameters::new()
            .with_parameter("name", "svc")
            .with_parameter("sku", "S1");

        let outputs = az
            .deployment()
            .create("rg", "dep", &fx.template, Some(&params))
            .unwrap();
        assert!(outputs.is_empty());

        let calls = az.runner().calls();
        let args = &calls[0];
        assert_eq!(args[args.len() - 2], "--parameters");
        assert_eq!(
            args[args.len() - 1],
            format!("@{}", fx.params_path("dep").display())
        );

        let written = az.runner().attached_files()[0].clone().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            parsed,
            json!({"name": {"value": "svc"}, "sku": {"value": "S1"}})
        );
        assert!(written.contains("\n    \"name\""));
        assert!(!fx.params_path("dep").exists());
    }

    #[test]
    fn test_create_removes_params_file_on_failure() {
        let fx = Fixture::new();
        let az = fx.az(FakeRunner::failing());
        let params = DeploymentParameters::new().with_parameter("name", "svc");

        let err = az
            .deployment()
            .create("rg", "dep", &fx.template, Some(&params))
            .unwrap_err();

        assert!(err.is_command_failure());
        assert!(az.runner().attached_files()[0].is_some());
        assert!(!fx.params_path("dep").exists());
    }

    #[test]
    fn test_create_removes_params_file_on_panic() {
        let fx = Fixture::new();
        // No canned responses: the runner panics on the deployment call.
        let az = fx.az(FakeRunner::new(Vec::<String>::new()));
        let params = DeploymentParameters::new().with_parameter("name", "svc");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            az.deployment()
                .create("rg", "dep", &fx.template, Some(&params))
        }));

        assert!(result.is_err());
        assert!(az.runner().attached_files()[0].is_some());
        assert!(!fx.params_path("dep").exists());
    }

    #[test]
    fn test_create_preconditions() {
        let fx = Fixture::new();
        let az = fx.az(FakeRunner::new(Vec::<String>::new()));
        let missing = fx.dir.path().join("missing.json");

        assert!(matches!(
            az.deployment().create("", "dep", &fx.template, None),
            Err(AzError::EmptyArgument { argument: "resource group", .. })
        ));
        assert!(matches!(
            az.deployment().create("rg", "", &fx.template, None),
            Err(AzError::EmptyArgument { argument: "deployment name", .. })
        ));
        assert!(matches!(
            az.deployment().create("rg", "dep", Path::new(""), None),
            Err(AzError::EmptyArgument { argument: "template file", .. })
        ));
        assert!(matches!(
            az.deployment().create("rg", "dep", &missing, None),
            Err(AzError::TemplateNotFound { .. })
        ));
        assert!(matches!(
            az.deployment().create("rg", "dep", fx.dir.path(), None),
            Err(AzError::TemplateNotFound { .. })
        ));
        assert!(az.runner().calls().is_empty());
    }

    #[test]
    fn test_list_names() {
        let az = AzureCli::with_runner(FakeRunner::new([
            r#"[{"name": "first"}, {"id": "no-name"}, {"name": "second"}]"#,
        ]));
        let names = az.deployment().list("rg").unwrap();
        assert_eq!(names, Some(vec!["first".to_string(), "second".to_string()]));
        assert_eq!(
            az.runner().calls(),
            [["group", "deployment", "list", "-g", "rg"]]
        );
    }

    #[test]
    fn test_list_not_a_list() {
        let az = AzureCli::with_runner(FakeRunner::new([r#"{"name": "first"}"#]));
        assert_eq!(az.deployment().list("rg").unwrap(), None);
    }

    #[test]
    fn test_list_empty() {
        let az = AzureCli::with_runner(FakeRunner::new(["[]"]));
        assert_eq!(az.deployment().list("rg").unwrap(), Some(vec![]));
    }

    #[test]
    fn test_outputs_show_args() {
        let az = AzureCli::with_runner(FakeRunner::new([
            r#"{"properties": {"outputs": {"endpoint": {"type": "String", "value": "https://x"}}}}"#,
        ]));
        let outputs = az.deployment().outputs("rg", "dep").unwrap().unwrap();
        assert_eq!(outputs["endpoint"], json!("https://x"));
        assert_eq!(
            az.runner().calls(),
            [["group", "deployment", "show", "-g", "rg", "-n", "dep"]]
        );
    }

    #[test]
    fn test_outputs_absent_is_none() {
        let az = AzureCli::with_runner(FakeRunner::new([
            r#"{"properties": {"provisioningState": "Succeeded"}}"#,
            r#"{"properties": {"outputs": {}}}"#,
        ]));
        assert_eq!(az.deployment().outputs("rg", "dep").unwrap(), None);
        assert_eq!(
            az.deployment().outputs("rg", "dep").unwrap(),
            Some(DeploymentOutputs::new())
        );
    }

    #[test]
    fn test_outputs_preconditions() {
        let az = AzureCli::with_runner(FakeRunner::new(Vec::<String>::new()));
        assert!(az.deployment().outputs("", "dep").is_err());
        assert!(az.deployment().outputs("rg", "").is_err());
        assert!(az.deployment().list("").is_err());
        assert!(az.runner().calls().is_empty());
    }
}
