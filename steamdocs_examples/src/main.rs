use steamdocs_core::prelude::*;
use steamdocs_examples::sample_schema;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut schema = sample_schema();

    let mut store = MemoryStore::default();
    let mut user = UserData::load(&store, &mut schema);
    user.steamid = "76561197960287930".to_owned();
    user.webapi_key = "0123456789abcdef0123456789abcdef".into();
    user.store_steamid(&mut store);
    user.store_webapi_key(&mut store);
    schema.fill_steamid(&user.steamid);

    let searcher = ApiSearcher::new(&schema);
    println!("search 'tags':");
    for hit in searcher.search("tags") {
        println!("  {}/{} (score {})", hit.interface, hit.method, hit.score);
    }

    println!("sidebar:");
    for (appid, group) in group_interfaces(&schema) {
        if !group.interfaces.is_empty() {
            println!("  [{}] {}: {:?}", appid, group.name, group.interfaces);
        }
    }

    // Grow the UpdateTags array group by one element and fill both in.
    {
        let method = schema
            .method_mut("IStoreService", "UpdateTags")
            .ok_or("missing method")?;
        let template = &mut method.parameters[0];
        template.children.as_mut().expect("composite template")[0].value = "7".into();
        let clone = add_array_element(&mut method.parameters, 0);
        let kids = method.parameters[clone].children.as_mut().expect("clone children");
        kids[0].value = "9".into();
        kids[1].manually_toggled = true;
    }

    let creds = user.credentials();
    for (interface, method_name) in [
        ("ISteamApps", "GetAppList"),
        ("IStoreService", "UpdateTags"),
        ("IPublishedFileService", "SetDeveloperMetadata"),
    ] {
        let method = schema
            .method_mut(interface, method_name)
            .ok_or("missing method")?;
        let url = render_request(interface, method_name, method, &creds, &user.format)?;
        println!("{} {} (hybrid={})", method.verb.as_str(), url, method.has_arrays);
    }

    Ok(())
}
