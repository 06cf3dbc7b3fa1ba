use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::options::ViewerOptions;
use crate::theme::{PaletteOverrides, ThemePreference};

/// Project configuration loaded from `.flexdoc.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlexDocConfig {
    /// Document to load when no input is given on the command line.
    pub input: Option<String>,
    pub theme: ThemePreference,
    pub palette: PaletteOverrides,
    pub options: ViewerOptions,
    pub shell: ShellConfig,
}

/// Frame drawn around the viewer in HTML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub site_name: String,
    pub links: Vec<NavLink>,
    pub footer: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        let link = |label: &str, href: &str| NavLink {
            label: label.to_string(),
            href: href.to_string(),
        };
        Self {
            site_name: "Portfolio".to_string(),
            links: vec![
                link("Home", "/"),
                link("About", "/about"),
                link("Experience", "/experience"),
                link("Work", "/work"),
                link("Contact", "/contact"),
                link("FlexDoc", "/flexdoc"),
            ],
            footer: "Built with FlexDoc".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".flexdoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<FlexDocConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config = serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r##"# flexdoc configuration
# input: openapi.yaml
theme: auto            # light | dark | auto (auto renders dark)

palette: {}
  # primary: "#3b82f6"
  # secondary: "#10b981"

options:
  # title: My API Documentation
  filter: true                    # show the search line in the sidebar
  hide_hostname: false            # omit server host in code examples
  display_operation_id: false
  doc_expansion: none             # none | list | full
  sort_tags_alphabetically: false
  operations_sorter: none         # none | alpha | method
  # max_displayed_tags: 10
  schema_preview: placeholder     # placeholder | declared

shell:
  site_name: Portfolio
  footer: Built with FlexDoc
  links:
    - { label: Home, href: / }
    - { label: About, href: /about }
    - { label: Experience, href: /experience }
    - { label: Work, href: /work }
    - { label: Contact, href: /contact }
    - { label: FlexDoc, href: /flexdoc }
"##
}
