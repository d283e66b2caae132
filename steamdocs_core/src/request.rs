use crate::error::ExplorerError;
use crate::schema::{ApiMethod, PARTNER_HOST, PUBLIC_HOST, Visibility};
use crate::serialize::query_string;
use crate::token::SecretString;
use url::form_urlencoded;

/// Credentials attached to a rendered request. A present access token wins
/// over the key.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub webapi_key: Option<SecretString>,
    pub access_token: Option<SecretString>,
}

impl Credentials {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<SecretString>) -> Self {
        Self {
            webapi_key: Some(key.into()),
            access_token: None,
        }
    }

    pub fn with_token(token: impl Into<SecretString>) -> Self {
        Self {
            webapi_key: None,
            access_token: Some(token.into()),
        }
    }

    pub fn has_any(&self) -> bool {
        self.access_token.is_some() || self.webapi_key.is_some()
    }

    /// `access_token=…` or `key=…` query part; empty when anonymous.
    pub fn query_part(&self) -> String {
        let mut enc = form_urlencoded::Serializer::new(String::new());
        if let Some(token) = &self.access_token {
            enc.append_pair("access_token", token.expose());
        } else if let Some(key) = &self.webapi_key {
            enc.append_pair("key", key.expose());
        }
        enc.finish()
    }
}

/// `https://…/IInterface/Method/vN/`. Publisher-only methods go through the
/// partner host.
pub fn method_uri(interface: &str, method_name: &str, method: &ApiMethod) -> String {
    let host = match method.visibility {
        Visibility::PublisherOnly => PARTNER_HOST,
        _ => PUBLIC_HOST,
    };
    format!("{host}{interface}/{method_name}/v{}/", method.version)
}

/// Full request line: URI, credential part, then the serialized parameters.
/// The first query part present takes the `?`; the rest chain with `&`.
pub fn render_request(
    interface: &str,
    method_name: &str,
    method: &mut ApiMethod,
    creds: &Credentials,
    format: &str,
) -> Result<String, ExplorerError> {
    let mut out = method_uri(interface, method_name, method);
    let key_part = creds.query_part();
    let params = query_string(method, format)?;

    if !key_part.is_empty() {
        out.push('?');
        out.push_str(&key_part);
    }
    if !params.is_empty() {
        out.push(if key_part.is_empty() { '?' } else { '&' });
        out.push_str(&params);
    }
    Ok(out)
}
