pub mod error;
mod extract;
mod groups;
mod params;
mod prefs;
mod request;
mod schema;
mod search;
mod serialize;
mod token;
mod value;

pub mod prelude {
    pub use crate::error::{ExplorerError, TokenError};
    pub use crate::extract::extract;
    pub use crate::groups::{SidebarGroup, group_interfaces, interface_appid};
    pub use crate::params::{ARRAY_MARKER, ApiParameter, add_array_element, array_base_of};
    pub use crate::prefs::{MemoryStore, PreferenceStore, UserData};
    pub use crate::request::{Credentials, method_uri, render_request};
    pub use crate::schema::{
        ApiInterface, ApiMethod, HttpVerb, PARTNER_HOST, PUBLIC_HOST, Schema, Visibility,
    };
    pub use crate::search::{ApiSearcher, SearchHit};
    pub use crate::serialize::{DEFAULT_FORMAT, INPUT_JSON_FIELD, query_pairs, query_string};
    pub use crate::token::{
        AccessToken, SecretString, is_valid_steamid, is_valid_webapi_key, parse_access_token,
        unwrap_token_envelope,
    };
    pub use crate::value::Value;
}
