//! Deployment manifest model.
//!
//! A manifest is the already-parsed form of a deployment template: a list of
//! resources, each naming its type, its (possibly templated) name, an optional
//! explicit id and the raw dependency expressions it declares. Only these fields are
//! read; everything else in the template (parameters, variables, properties) is
//! ignored by the deserializer.
//!
//! ```json
//! {
//!   "resources": [
//!     { "type": "Microsoft.Storage/storageAccounts", "name": "[parameters('storageName')]" },
//!     {
//!       "type": "Microsoft.Web/sites",
//!       "name": "app",
//!       "dependsOn": ["[resourceId('Microsoft.Storage/storageAccounts', parameters('storageName'))]"]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::ArmGraphError;

/// A single declared resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Provider-qualified category, e.g. `Microsoft.Storage/storageAccounts`.
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Declared name; may be a template expression rather than a literal.
    #[serde(rename = "name")]
    pub declared_name: String,

    /// Explicit identifier other resources may use instead of name and type.
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub explicit_id: Option<String>,

    /// Raw dependency expressions, in declaration order.
    #[serde(rename = "dependsOn", default, skip_serializing_if = "Vec::is_empty")]
    pub dependency_expressions: Vec<String>,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, declared_name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            declared_name: declared_name.into(),
            explicit_id: None,
            dependency_expressions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.explicit_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn depends_on(mut self, expression: impl Into<String>) -> Self {
        self.dependency_expressions.push(expression.into());
        self
    }

    /// A resource with no dependency expressions is a primary resource.
    pub fn declares_dependencies(&self) -> bool {
        !self.dependency_expressions.is_empty()
    }
}

/// A parsed manifest: the unit of processing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub resources: Vec<Resource>,
}

impl Manifest {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            resources,
        }
    }

    /// Decode a manifest from template JSON.
    ///
    /// `label` names the manifest in the returned error.
    pub fn from_json(label: &str, content: &str) -> Result<Self, ArmGraphError> {
        serde_json::from_str(content).map_err(|e| ArmGraphError::ManifestParseError {
            source_label: label.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// A manifest together with the label it is reported and rendered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledManifest {
    /// File path for documents, `"<timestamp>+<run-id>"` for run-log rows.
    pub label: String,
    pub manifest: Manifest,
}
