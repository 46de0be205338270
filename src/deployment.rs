// src/deployment.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// SKU used when a cognitive service deployment does not name one
pub const DEFAULT_SKU: &str = "S1";

/// Cognitive service variants the ARM template knows how to deploy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum CognitiveService {
    ComputerVision,
    TextAnalytics,
}

impl CognitiveService {
    /// Literal passed to the template's `svcKind` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            CognitiveService::ComputerVision => "ComputerVision",
            CognitiveService::TextAnalytics => "TextAnalytics",
        }
    }
}

impl fmt::Display for CognitiveService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for an ARM template deployment.
///
/// Each value is wrapped as `{"value": ...}`, which is the shape the
/// `--parameters @file` flag expects. Insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeploymentParameters {
    parameters: Map<String, Value>,
}

impl DeploymentParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter
    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let mut wrapped = Map::new();
        wrapped.insert("value".to_string(), value.into());
        self.parameters.insert(name.into(), Value::Object(wrapped));
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_parameter(name, value);
        self
    }

    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }
}

/// Parameter set for the cognitive services template
#[derive(Debug, Clone, PartialEq)]
pub struct CognitiveServiceDeployment {
    parameters: DeploymentParameters,
}

impl CognitiveServiceDeployment {
    pub fn new(kind: CognitiveService, service_name: &str, region: &str) -> Self {
        Self::with_sku(kind, service_name, region, DEFAULT_SKU)
    }

    pub fn with_sku(kind: CognitiveService, service_name: &str, region: &str, sku: &str) -> Self {
        let parameters = DeploymentParameters::new()
            .with_parameter("name", service_name)
            .with_parameter("location", region)
            .with_parameter("svcKind", kind.as_str())
            .with_parameter("sku", sku);
        Self { parameters }
    }

    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.parameters.add_parameter(name, value);
    }

    pub fn parameters(&self) -> &DeploymentParameters {
        &self.parameters
    }

    pub fn into_parameters(self) -> DeploymentParameters {
        self.parameters
    }
}
