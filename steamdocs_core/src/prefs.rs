use crate::error::TokenError;
use crate::request::Credentials;
use crate::schema::Schema;
use crate::serialize::DEFAULT_FORMAT;
use crate::token::{
    AccessToken, SecretString, is_valid_steamid, is_valid_webapi_key, parse_access_token,
    unwrap_token_envelope,
};
use indexmap::IndexSet;
use std::collections::HashMap;

const KEY_FORMAT: &str = "format";
const KEY_STEAMID: &str = "steamid";
const KEY_WEBAPI_KEY: &str = "webapi_key";
const KEY_ACCESS_TOKEN: &str = "access_token";
const KEY_FAVORITES: &str = "favorites";

/// Durable key-value storage for user preferences. The browser original
/// keeps these in `localStorage`; tests and the demo use `MemoryStore`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Per-user state surviving page loads: credentials, response format and
/// favorite methods (`Interface/Method` strings, insertion-ordered).
#[derive(Clone, Debug)]
pub struct UserData {
    pub format: String,
    pub steamid: String,
    pub webapi_key: SecretString,
    pub access_token: SecretString,
    pub favorites: IndexSet<String>,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_owned(),
            steamid: String::new(),
            webapi_key: SecretString::default(),
            access_token: SecretString::default(),
            favorites: IndexSet::new(),
        }
    }
}

impl UserData {
    /// Restores preferences. Favorites naming methods the schema no longer
    /// declares are dropped; the surviving ones are flagged on the schema.
    pub fn load(store: &dyn PreferenceStore, schema: &mut Schema) -> Self {
        let mut favorites = IndexSet::new();
        if let Some(raw) = store.get(KEY_FAVORITES) {
            let stored: Vec<String> = serde_json::from_str(&raw).unwrap_or_default();
            for favorite in stored {
                let Some((interface, method)) = favorite.split_once('/') else {
                    continue;
                };
                if let Some(m) = schema.method_mut(interface, method) {
                    m.is_favorite = true;
                    favorites.insert(favorite);
                }
            }
        }

        Self {
            format: store
                .get(KEY_FORMAT)
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_FORMAT.to_owned()),
            steamid: store.get(KEY_STEAMID).unwrap_or_default(),
            webapi_key: store.get(KEY_WEBAPI_KEY).unwrap_or_default().into(),
            access_token: store.get(KEY_ACCESS_TOKEN).unwrap_or_default().into(),
            favorites,
        }
    }

    pub fn store_format(&self, store: &mut dyn PreferenceStore) {
        store.set(KEY_FORMAT, &self.format);
    }

    /// Credential-shaped fields persist only while valid; an invalid value
    /// clears the stored copy instead.
    pub fn store_steamid(&self, store: &mut dyn PreferenceStore) {
        if is_valid_steamid(&self.steamid) {
            store.set(KEY_STEAMID, &self.steamid);
        } else {
            store.remove(KEY_STEAMID);
        }
    }

    pub fn store_webapi_key(&self, store: &mut dyn PreferenceStore) {
        if is_valid_webapi_key(self.webapi_key.expose()) {
            store.set(KEY_WEBAPI_KEY, self.webapi_key.expose());
        } else {
            store.remove(KEY_WEBAPI_KEY);
        }
    }

    pub fn store_access_token(&self, store: &mut dyn PreferenceStore) {
        let valid = parse_access_token(self.access_token.expose())
            .map(|t| !t.is_expired())
            .unwrap_or(false);
        if valid {
            store.set(KEY_ACCESS_TOKEN, self.access_token.expose());
        } else {
            store.remove(KEY_ACCESS_TOKEN);
        }
    }

    /// Accepts a pasted token (bare JWT or the token-endpoint envelope),
    /// records it and pre-fills the steamid from the `sub` claim when the
    /// field is still empty.
    pub fn apply_access_token(&mut self, raw: &str) -> Result<AccessToken, TokenError> {
        let bare = unwrap_token_envelope(raw).unwrap_or_else(|| raw.to_owned());
        let token = parse_access_token(&bare)?;
        self.access_token = SecretString::new(bare);
        if self.steamid.is_empty() {
            if let Some(sub) = &token.sub {
                self.steamid = sub.clone();
            }
        }
        Ok(token)
    }

    /// Flips the favorite state of one method, keeping the schema flag and
    /// the stored list in sync. Returns the new state.
    pub fn toggle_favorite(
        &mut self,
        schema: &mut Schema,
        interface: &str,
        method_name: &str,
        store: &mut dyn PreferenceStore,
    ) -> bool {
        let Some(method) = schema.method_mut(interface, method_name) else {
            return false;
        };
        method.is_favorite = !method.is_favorite;
        let name = format!("{interface}/{method_name}");
        if method.is_favorite {
            self.favorites.insert(name);
        } else {
            self.favorites.shift_remove(&name);
        }
        let is_favorite = method.is_favorite;
        self.store_favorites(store);
        is_favorite
    }

    pub fn store_favorites(&self, store: &mut dyn PreferenceStore) {
        let encoded = serde_json::to_string(&self.favorites).unwrap_or_else(|_| "[]".to_owned());
        store.set(KEY_FAVORITES, &encoded);
    }

    /// Credentials for request rendering: a live access token wins, a
    /// well-formed key is second, anonymous otherwise.
    pub fn credentials(&self) -> Credentials {
        if let Ok(token) = parse_access_token(self.access_token.expose()) {
            if !token.is_expired() {
                return Credentials::with_token(self.access_token.clone());
            }
        }
        if is_valid_webapi_key(self.webapi_key.expose()) {
            return Credentials::with_key(self.webapi_key.clone());
        }
        Credentials::anonymous()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn schema() -> Schema {
        Schema::load(
            r#"{"IStoreService":{"GetTagList":{"parameters":[]},"UpdateTags":{"parameters":[]}}}"#,
        )
        .unwrap()
    }

    #[test]
    fn defaults_when_store_is_empty() {
        let store = MemoryStore::default();
        let mut s = schema();
        let data = UserData::load(&store, &mut s);
        assert_eq!(data.format, "json");
        assert!(data.steamid.is_empty());
        assert!(data.favorites.is_empty());
        assert!(!data.credentials().has_any());
    }

    #[test]
    fn favorites_round_trip_and_drop_unknown_methods() {
        let mut store = MemoryStore::default();
        let mut s = schema();
        let mut data = UserData::load(&store, &mut s);

        assert!(data.toggle_favorite(&mut s, "IStoreService", "GetTagList", &mut store));
        assert!(s.method("IStoreService", "GetTagList").unwrap().is_favorite);

        // A stale favorite survives in the store but not past a reload.
        store.set(
            "favorites",
            r#"["IStoreService/GetTagList","IGone/Method"]"#,
        );
        let mut s2 = schema();
        let reloaded = UserData::load(&store, &mut s2);
        assert_eq!(
            reloaded.favorites.iter().map(|f| f.as_str()).collect::<Vec<_>>(),
            ["IStoreService/GetTagList"]
        );
        assert!(s2.method("IStoreService", "GetTagList").unwrap().is_favorite);

        assert!(!data.toggle_favorite(&mut s, "IStoreService", "GetTagList", &mut store));
        assert_eq!(store.get("favorites").as_deref(), Some("[]"));
    }

    #[test]
    fn invalid_credentials_clear_their_stored_copy() {
        let mut store = MemoryStore::default();
        store.set("webapi_key", "whatever");

        let mut data = UserData::default();
        data.webapi_key = "not hex".into();
        data.store_webapi_key(&mut store);
        assert_eq!(store.get("webapi_key"), None);

        data.webapi_key = "0123456789abcdef0123456789abcdef".into();
        data.store_webapi_key(&mut store);
        assert_eq!(
            store.get("webapi_key").as_deref(),
            Some("0123456789abcdef0123456789abcdef")
        );

        data.steamid = "76561197960287930".into();
        data.store_steamid(&mut store);
        assert_eq!(store.get("steamid").as_deref(), Some("76561197960287930"));
    }

    #[test]
    fn applied_token_prefills_empty_steamid() {
        let mut data = UserData::default();
        let jwt = crate::token::make_jwt(
            r#"{"exp":99999999999,"aud":["web:community"],"sub":"76561197960287930"}"#,
        );
        let wrapped = format!(r#"{{"data":{{"webapi_token":"{jwt}"}}}}"#);

        let token = data.apply_access_token(&wrapped).unwrap();
        assert_eq!(token.sub.as_deref(), Some("76561197960287930"));
        assert_eq!(data.steamid, "76561197960287930");
        assert_eq!(data.access_token.expose(), jwt);
        assert!(data.credentials().has_any());

        data.steamid = "11111111111111111".into();
        data.apply_access_token(&jwt).unwrap();
        assert_eq!(data.steamid, "11111111111111111");
    }
}
