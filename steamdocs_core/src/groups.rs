use crate::schema::Schema;
use indexmap::IndexMap;

/// One collapsible sidebar group. Appid 0 is the base Steam group; every
/// game-scoped interface hangs off the appid its name ends with.
#[derive(Clone, Debug)]
pub struct SidebarGroup {
    pub name: String,
    pub icon: String,
    pub open: bool,
    pub interfaces: Vec<String>,
}

impl SidebarGroup {
    fn known(name: &str, icon: &str, open: bool) -> Self {
        Self {
            name: name.to_owned(),
            icon: icon.to_owned(),
            open,
            interfaces: Vec::new(),
        }
    }
}

// Declaration order here is the sidebar order.
const KNOWN_APPS: &[(u32, &str, &str, bool)] = &[
    (0, "Steam", "steam.jpg", true),
    (730, "Counter-Strike 2", "cs2.jpg", true),
    (570, "Dota 2", "dota.jpg", true),
    (440, "Team Fortress 2", "tf.jpg", true),
    (1422450, "Deadlock", "deadlock.jpg", true),
    (620, "Portal 2", "portal2.jpg", false),
    (1046930, "Dota Underlords", "underlords.jpg", false),
    (583950, "Artifact Classic", "artifact.jpg", false),
    (1269260, "Artifact Foundry", "artifact.jpg", false),
    // Beta apps
    (247040, "Dota 2 Experimental", "dota.jpg", false),
    (2305270, "Dota 2 Staging", "dota.jpg", false),
    (3488080, "Deadlock Experimental", "deadlock.jpg", false),
    (3781850, "Deadlock Unknown", "deadlock.jpg", false),
];

/// Trailing `_<appid>` of an interface name, e.g. `IGCVersion_570`.
pub fn interface_appid(name: &str) -> Option<u32> {
    let (_, digits) = name.rsplit_once('_')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Buckets every interface into its sidebar group, creating closed `App N`
/// groups for appids outside the known table.
pub fn group_interfaces(schema: &Schema) -> IndexMap<u32, SidebarGroup> {
    let mut groups: IndexMap<u32, SidebarGroup> = KNOWN_APPS
        .iter()
        .map(|&(appid, name, icon, open)| (appid, SidebarGroup::known(name, icon, open)))
        .collect();

    for name in schema.interfaces.keys() {
        let appid = interface_appid(name).unwrap_or(0);
        let group = groups.entry(appid).or_insert_with(|| SidebarGroup {
            name: format!("App {appid}"),
            icon: "steam.jpg".to_owned(),
            open: false,
            interfaces: Vec::new(),
        });
        group.interfaces.push(name.clone());
    }
    groups
}
