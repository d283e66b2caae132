use steamdocs_core::prelude::*;
use steamdocs_examples::sample_schema;

#[test]
fn game_interfaces_split_off_the_steam_group() {
    let schema = sample_schema();
    let groups = group_interfaces(&schema);

    assert_eq!(
        groups[&0].interfaces,
        ["ISteamApps", "IPublishedFileService", "IStoreService"]
    );
    assert_eq!(groups[&570].interfaces, ["IGCVersion_570"]);
    assert_eq!(groups[&570].name, "Dota 2");
}

#[test]
fn search_ranks_the_obvious_method_first() {
    let schema = sample_schema();
    let searcher = ApiSearcher::new(&schema);

    let hits = searcher.search("applist");
    assert!(!hits.is_empty());
    assert_eq!(hits[0].interface, "ISteamApps");
    assert_eq!(hits[0].method, "GetAppList");

    assert!(searcher.search("nosuchthing").is_empty());
}

#[test]
fn search_indices_line_up_for_highlighting() {
    let schema = sample_schema();
    let searcher = ApiSearcher::new(&schema);

    let hits = searcher.search("QueryFiles");
    assert_eq!(hits[0].method, "QueryFiles");
    let haystack = "IPublishedFileService/QueryFiles".to_lowercase();
    let matched: String = hits[0]
        .indices
        .iter()
        .map(|&i| haystack.as_bytes()[i] as char)
        .collect();
    assert_eq!(matched, "queryfiles");
}
