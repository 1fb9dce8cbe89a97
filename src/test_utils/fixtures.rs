//! Sample templates and run logs.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::Manifest;

/// A deployment template on disk or in memory.
#[derive(Clone, Debug)]
pub struct TemplateFixture {
    pub content: String,
    pub name: String,
}

impl TemplateFixture {
    /// Storage account, app service plan and a site depending on both.
    ///
    /// The site references the plan by explicit id and the storage account through a
    /// `resourceId(...)` expression.
    pub fn web_app() -> Self {
        Self {
            name: "web_app".to_string(),
            content: r#"{
  "$schema": "https://schema.management.azure.com/schemas/2019-04-01/deploymentTemplate.json#",
  "parameters": { "storageName": { "type": "string" } },
  "resources": [
    {
      "type": "Microsoft.Storage/storageAccounts",
      "name": "[parameters('storageName')]",
      "apiVersion": "2021-04-01"
    },
    {
      "type": "Microsoft.Web/serverfarms",
      "name": "plan",
      "id": "planId"
    },
    {
      "type": "Microsoft.Web/sites",
      "name": "app",
      "dependsOn": [
        "planId",
        "[resourceId('Microsoft.Storage/storageAccounts', parameters('storageName'))]"
      ]
    }
  ]
}"#
            .to_string(),
        }
    }

    /// Every resource declares a dependency, one of them on an undeclared resource.
    pub fn no_primary_resource() -> Self {
        Self {
            name: "no_primary_resource".to_string(),
            content: r#"{
  "resources": [
    {
      "type": "Microsoft.Network/virtualNetworks",
      "name": "vnet",
      "dependsOn": ["Microsoft.Network/networkSecurityGroups/nsg"]
    },
    {
      "type": "Microsoft.Network/networkSecurityGroups",
      "name": "nsg",
      "dependsOn": ["Microsoft.Network/publicIPAddresses/missing-ip"]
    }
  ]
}"#
            .to_string(),
        }
    }

    /// A role assignment on a service principal, for type filtering.
    pub fn with_principal() -> Self {
        Self {
            name: "with_principal".to_string(),
            content: r#"{
  "resources": [
    { "type": "Microsoft.ManagedIdentity/servicePrincipal", "name": "sp" },
    {
      "type": "Microsoft.Authorization/roleAssignments",
      "name": "ra",
      "dependsOn": ["Microsoft.ManagedIdentity/servicePrincipal/sp"]
    },
    { "type": "Microsoft.KeyVault/vaults", "name": "kv" }
  ]
}"#
            .to_string(),
        }
    }

    /// Not JSON at all.
    pub fn invalid() -> Self {
        Self {
            name: "invalid".to_string(),
            content: "{ \"resources\": [".to_string(),
        }
    }

    /// Parse the fixture.
    ///
    /// # Panics
    ///
    /// Panics if the fixture is not a valid manifest.
    pub fn manifest(&self) -> Manifest {
        Manifest::from_json(&self.name, &self.content)
            .unwrap_or_else(|e| panic!("fixture {} is not a manifest: {e}", self.name))
    }

    /// Write to `<dir>/<name>.json` and return the path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!("{}.json", self.name));
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write fixture to {}", path.display()))?;
        Ok(path)
    }
}

/// A CSV run log built row by row.
#[derive(Clone, Debug, Default)]
pub struct RunLogFixture {
    rows: Vec<String>,
}

impl RunLogFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `timestamp, run id, template` row, quoting the template.
    #[must_use]
    pub fn row(mut self, timestamp: &str, run_id: &str, template: &TemplateFixture) -> Self {
        let compact = template.content.replace('\n', " ");
        self.rows.push(format!("{timestamp},{run_id},\"{}\"", compact.replace('"', "\"\"")));
        self
    }

    /// Append a raw line as-is.
    #[must_use]
    pub fn raw(mut self, line: &str) -> Self {
        self.rows.push(line.to_string());
        self
    }

    pub fn content(&self) -> String {
        let mut content = self.rows.join("\n");
        content.push('\n');
        content
    }

    /// Write to `<dir>/<file_name>` and return the path.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        let path = dir.join(file_name);
        fs::write(&path, self.content())
            .with_context(|| format!("Failed to write run log to {}", path.display()))?;
        Ok(path)
    }
}
