use steamdocs_core::prelude::*;

/// Hand-trimmed slice of the real schema document: one flat method, one
/// hybrid POST with an array-of-object parameter, one publisher-only method
/// and one game-scoped interface.
pub const SAMPLE_SCHEMA: &str = r#"{
    "ISteamApps": {
        "GetAppList": {
            "version": 2,
            "httpmethod": "GET",
            "parameters": []
        },
        "UpToDateCheck": {
            "version": 1,
            "httpmethod": "GET",
            "parameters": [
                { "name": "appid", "type": "uint32", "optional": false },
                { "name": "version", "type": "uint32", "optional": false }
            ]
        }
    },
    "IPublishedFileService": {
        "QueryFiles": {
            "version": 1,
            "httpmethod": "GET",
            "parameters": [
                { "name": "query_type", "type": "uint32", "optional": true },
                { "name": "numperpage", "type": "uint32", "optional": true },
                {
                    "name": "required_kv_tags",
                    "type": "{message}",
                    "optional": true,
                    "extra": [
                        { "name": "key", "type": "string", "optional": true },
                        { "name": "value", "type": "string", "optional": true }
                    ]
                },
                { "name": "return_details", "type": "bool", "optional": true }
            ]
        },
        "SetDeveloperMetadata": {
            "version": 1,
            "httpmethod": "POST",
            "_type": "publisher_only",
            "parameters": [
                { "name": "publishedfileid", "type": "uint64", "optional": false },
                { "name": "metadata", "type": "string", "optional": false }
            ]
        }
    },
    "IStoreService": {
        "UpdateTags": {
            "version": 1,
            "httpmethod": "POST",
            "parameters": [
                {
                    "name": "tags[0]",
                    "type": "{message}[]",
                    "optional": true,
                    "extra": [
                        { "name": "tagid", "type": "uint32", "optional": true },
                        { "name": "remove", "type": "bool", "optional": true }
                    ]
                }
            ]
        }
    },
    "IGCVersion_570": {
        "GetServerVersion": {
            "version": 1,
            "httpmethod": "GET",
            "parameters": []
        }
    }
}"#;

pub fn sample_schema() -> Schema {
    Schema::load(SAMPLE_SCHEMA).expect("sample schema parses")
}
