use crate::config::share_url::DEFAULT_SHARE_BASE;
use crate::core::catalog::{Catalog, ComparisonItem};
use crate::core::report::OutputFormat;
use crate::domain::model::ParameterOverrides;
use crate::domain::ports::ParameterSource;
use crate::utils::error::{MeetingCostError, Result};
use crate::utils::validation::{validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub meeting: Option<ParameterOverrides>,
    pub share: Option<ShareConfig>,
    pub output: Option<OutputConfig>,
    /// Replaces the standard comparison catalog when present.
    pub comparisons: Option<Vec<ComparisonItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShareConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MeetingCostError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MeetingCostError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHARE_BASE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MeetingCostError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn share_base_url(&self) -> &str {
        self.share
            .as_ref()
            .map(|s| s.base_url.as_str())
            .unwrap_or(DEFAULT_SHARE_BASE)
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn catalog(&self) -> Result<Catalog> {
        match &self.comparisons {
            Some(items) => Catalog::new(items.clone()),
            None => Ok(Catalog::standard()),
        }
    }
}

impl ParameterSource for TomlConfig {
    fn source_name(&self) -> &str {
        "config file"
    }

    fn overrides(&self) -> Result<ParameterOverrides> {
        Ok(self.meeting.unwrap_or_default())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(meeting) = &self.meeting {
            meeting.resolve()?;
        }

        validate_url("share.base_url", self.share_base_url())?;

        if let Some(items) = &self.comparisons {
            if items.is_empty() {
                return Err(MeetingCostError::ConfigValidationError {
                    field: "comparisons".to_string(),
                    message: "remove the section to use the standard catalog".to_string(),
                });
            }
            self.catalog()?;
        }

        Ok(())
    }
}
