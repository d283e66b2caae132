use crate::error::TokenError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use core::fmt;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Credential wrapper that never reveals its contents in Debug/Display.
#[derive(Clone, Default)]
pub struct SecretString(String);

impl SecretString {
    #[inline]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Explicit escape hatch used where the raw credential must reach the
    /// wire (query rendering, preference persistence).
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<secret>")
    }
}
impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<secret>")
    }
}

impl<T: Into<String>> From<T> for SecretString {
    #[inline]
    fn from(v: T) -> Self {
        Self::new(v)
    }
}

/// Claims of a web API access token (a JWT). The signature is never
/// verified; the explorer only needs the claims for display, expiry checks
/// and pre-filling the steamid field.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessToken {
    /// Expiry, seconds since the Unix epoch.
    pub exp: u64,
    #[serde(default)]
    pub aud: Vec<String>,
    #[serde(default)]
    pub sub: Option<String>,
}

impl AccessToken {
    #[inline]
    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        self.exp <= now_secs
    }

    pub fn is_expired(&self) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.is_expired_at(now)
    }
}

/// Token endpoints hand out `{"data":{"webapi_token":"…"}}`; pasting that
/// envelope instead of the bare token is accepted and unwrapped.
pub fn unwrap_token_envelope(raw: &str) -> Option<String> {
    if raw.len() <= 2 || !raw.starts_with('{') || !raw.ends_with('}') {
        return None;
    }
    #[derive(Deserialize)]
    struct Envelope {
        data: EnvelopeData,
    }
    #[derive(Deserialize)]
    struct EnvelopeData {
        webapi_token: String,
    }
    serde_json::from_str::<Envelope>(raw)
        .ok()
        .map(|e| e.data.webapi_token)
}

/// Decodes the payload segment of a JWT access token.
pub fn parse_access_token(raw: &str) -> Result<AccessToken, TokenError> {
    let mut segments = raw.split('.');
    let (Some(header), Some(payload), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::NotAJwt);
    };
    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return Err(TokenError::NotAJwt);
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Web API key shape: 32 hex characters.
pub fn is_valid_webapi_key(key: &str) -> bool {
    key.len() == 32 && key.bytes().all(|b| b.is_ascii_hexdigit())
}

/// SteamID64 shape: exactly 17 decimal digits.
pub fn is_valid_steamid(id: &str) -> bool {
    id.len() == 17 && id.bytes().all(|b| b.is_ascii_digit())
}

/// Unsigned token assembled from raw claims, for tests.
#[cfg(test)]
pub(crate) fn make_jwt(claims: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"EdDSA","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.as_bytes());
    format!("{header}.{payload}.sig")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_claims_from_jwt_payload() {
        let jwt = make_jwt(
            r#"{"exp":1924992000,"aud":["web:community"],"sub":"76561197960287930"}"#,
        );
        let token = parse_access_token(&jwt).unwrap();
        assert_eq!(token.exp, 1924992000);
        assert_eq!(token.aud, ["web:community"]);
        assert_eq!(token.sub.as_deref(), Some("76561197960287930"));
        assert!(!token.is_expired_at(1924991999));
        assert!(token.is_expired_at(1924992000));
    }

    #[test]
    fn rejects_non_jwt_shapes() {
        assert!(matches!(parse_access_token(""), Err(TokenError::NotAJwt)));
        assert!(matches!(parse_access_token("a.b"), Err(TokenError::NotAJwt)));
        assert!(matches!(
            parse_access_token("a.b.c.d"),
            Err(TokenError::NotAJwt)
        ));
        assert!(matches!(
            parse_access_token("a.!!!.c"),
            Err(TokenError::PayloadEncoding(_))
        ));
    }

    #[test]
    fn unwraps_token_endpoint_envelope() {
        assert_eq!(
            unwrap_token_envelope(r#"{"data":{"webapi_token":"abc.def.ghi"}}"#).as_deref(),
            Some("abc.def.ghi")
        );
        assert_eq!(unwrap_token_envelope("abc.def.ghi"), None);
        assert_eq!(unwrap_token_envelope("{}"), None);
    }

    #[test]
    fn key_and_steamid_shapes() {
        assert!(is_valid_webapi_key("0123456789abcdef0123456789ABCDEF"));
        assert!(!is_valid_webapi_key("0123456789abcdef"));
        assert!(!is_valid_webapi_key("0123456789abcdef0123456789ABCDEG"));

        assert!(is_valid_steamid("76561197960287930"));
        assert!(!is_valid_steamid("7656119796028793"));
        assert!(!is_valid_steamid("76561197960287930a"));
    }

    #[test]
    fn secret_never_leaks_via_debug_or_display() {
        let s = SecretString::new("0123456789abcdef0123456789abcdef");
        assert_eq!(format!("{s:?}"), "<secret>");
        assert_eq!(format!("{s}"), "<secret>");
        assert_eq!(s.expose(), "0123456789abcdef0123456789abcdef");
    }
}
