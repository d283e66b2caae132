use crate::error::ExplorerError;
use crate::params::ApiParameter;
use indexmap::IndexMap;
use serde::Deserialize;

pub const PUBLIC_HOST: &str = "https://api.steampowered.com/";
pub const PARTNER_HOST: &str = "https://partner.steam-api.com/";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub enum HttpVerb {
    #[default]
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
}

impl HttpVerb {
    /// POST mutates remote state; GET is read-only.
    #[inline]
    pub fn is_mutating(self) -> bool {
        matches!(self, HttpVerb::Post)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
        }
    }
}

/// Schema `_type` tag. Publisher-only methods are served from the partner
/// host and require a publisher key.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    PublisherOnly,
    Undocumented,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiMethod {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(rename = "httpmethod", default)]
    pub verb: HttpVerb,
    #[serde(default)]
    pub parameters: Vec<ApiParameter>,
    #[serde(rename = "_type", default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the last serialization produced the hybrid
    /// query-plus-`input_json` form; drives transport choice downstream.
    #[serde(skip)]
    pub has_arrays: bool,
    #[serde(skip)]
    pub is_favorite: bool,
}

fn default_version() -> u32 {
    1
}

impl ApiMethod {
    /// Bare GET method, used by tests and callers assembling schemas in code.
    pub fn with_parameters(parameters: Vec<ApiParameter>) -> Self {
        Self {
            version: default_version(),
            verb: HttpVerb::default(),
            parameters,
            visibility: Visibility::default(),
            description: None,
            has_arrays: false,
            is_favorite: false,
        }
    }
}

/// Method table of one interface, in document order.
pub type ApiInterface = IndexMap<String, ApiMethod>;

#[derive(Clone, Debug, Default)]
pub struct Schema {
    pub interfaces: IndexMap<String, ApiInterface>,
}

impl Schema {
    /// Parses the schema document and runs the one-time normalization pass:
    /// array base names are computed here, once, so later extraction and
    /// cloning never re-parse the bracket convention.
    pub fn load(json: &str) -> Result<Self, ExplorerError> {
        let mut interfaces: IndexMap<String, ApiInterface> =
            serde_json::from_str(json).map_err(ExplorerError::SchemaParse)?;
        for methods in interfaces.values_mut() {
            for method in methods.values_mut() {
                for param in &mut method.parameters {
                    param.normalize();
                }
            }
        }
        Ok(Self { interfaces })
    }

    pub fn method(&self, interface: &str, method: &str) -> Option<&ApiMethod> {
        self.interfaces.get(interface)?.get(method)
    }

    pub fn method_mut(&mut self, interface: &str, method: &str) -> Option<&mut ApiMethod> {
        self.interfaces.get_mut(interface)?.get_mut(method)
    }

    /// Pre-fills every untouched top-level parameter whose name mentions
    /// `steamid` with the user's id.
    pub fn fill_steamid(&mut self, steamid: &str) {
        if steamid.is_empty() {
            return;
        }
        for methods in self.interfaces.values_mut() {
            for method in methods.values_mut() {
                for param in &mut method.parameters {
                    if param.value.is_empty() && param.name.contains("steamid") {
                        param.value = steamid.to_owned();
                    }
                }
            }
        }
    }
}
