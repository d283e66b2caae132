use serde::Deserialize;

/// Two-character suffix declaring that a parameter is one element of a
/// repeated field (`tags[]`). Clones grown at runtime carry a numeric index
/// instead (`tags[1]`), and some schemas declare the first element with an
/// explicit `[0]`.
pub const ARRAY_MARKER: &str = "[]";

/// One node of a method's parameter tree. Leaves hold a scalar value;
/// composite nodes own an ordered list of children (the schema document
/// calls that field `extra`).
#[derive(Clone, Debug, Deserialize)]
pub struct ApiParameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "extra", default)]
    pub children: Option<Vec<ApiParameter>>,

    /// Current scalar value; empty means "unset" unless `manually_toggled`.
    #[serde(skip)]
    pub value: String,
    /// Forces a falsy boolean into the output where an empty value would
    /// otherwise be elided.
    #[serde(skip)]
    pub manually_toggled: bool,
    /// Clone index counter, owned by the template node. 0 means "never
    /// cloned"; only `add_array_element` writes it.
    #[serde(skip)]
    pub array_counter: u32,
    /// Emission name with the array suffix stripped; `Some` iff this node is
    /// an array element. Computed once when the schema loads so extraction
    /// never re-parses the naming convention.
    #[serde(skip)]
    pub array_base: Option<String>,
}

/// Splits a declared name at its trailing bracket group: `tags[]` and
/// `tags[0]` both yield `tags`. A name that is exactly the marker yields an
/// empty base, which is kept as-is rather than rejected.
pub fn array_base_of(name: &str) -> Option<&str> {
    if let Some(base) = name.strip_suffix(ARRAY_MARKER) {
        return Some(base);
    }
    let body = name.strip_suffix(']')?;
    let open = body.rfind('[')?;
    if !body[open + 1..].bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(&name[..open])
}

impl ApiParameter {
    /// Bare leaf with everything unset; the array base is computed from the
    /// name, as the schema load pass would.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let array_base = array_base_of(&name).map(str::to_owned);
        Self {
            name,
            kind: None,
            optional: false,
            description: None,
            children: None,
            value: String::new(),
            manually_toggled: false,
            array_counter: 0,
            array_base,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn children(mut self, children: Vec<ApiParameter>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.array_base.is_some()
    }

    /// Field name used when this node is aggregated with its same-named
    /// siblings; the literal name for non-array nodes.
    #[inline]
    pub fn emitted_name(&self) -> &str {
        self.array_base.as_deref().unwrap_or(&self.name)
    }

    /// "Never touched, not a forced boolean": elided from every output.
    #[inline]
    pub fn is_unset(&self) -> bool {
        self.value.is_empty() && !self.manually_toggled
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        self.kind.as_deref() == Some("bool")
    }

    pub(crate) fn normalize(&mut self) {
        self.array_base = array_base_of(&self.name).map(str::to_owned);
        if let Some(children) = &mut self.children {
            for child in children {
                child.normalize();
            }
        }
    }
}

/// Grows the array group rooted at `list[template]` by one clone and inserts
/// it right after the clones produced so far, keeping the group contiguous
/// and ordered by creation. Returns the index of the inserted node.
///
/// Clone indices are monotonic per template and never reused; clones are
/// always optional, carry no value and no counter of their own, and their
/// children (to arbitrary depth) are fresh unset copies of the template's.
pub fn add_array_element(list: &mut Vec<ApiParameter>, template: usize) -> usize {
    list[template].array_counter += 1;

    let t = &list[template];
    let counter = t.array_counter;
    let base = t.array_base.clone().unwrap_or_else(|| t.name.clone());
    let clone = ApiParameter {
        name: format!("{base}[{counter}]"),
        kind: t.kind.clone(),
        optional: true,
        description: None,
        children: t
            .children
            .as_ref()
            .map(|cs| cs.iter().map(clone_template_child).collect()),
        value: String::new(),
        manually_toggled: false,
        array_counter: 0,
        array_base: Some(base),
    };

    let at = (template + counter as usize).min(list.len());
    list.insert(at, clone);
    at
}

fn clone_template_child(p: &ApiParameter) -> ApiParameter {
    ApiParameter {
        name: p.name.clone(),
        kind: p.kind.clone(),
        optional: true,
        description: None,
        children: p
            .children
            .as_ref()
            .map(|cs| cs.iter().map(clone_template_child).collect()),
        value: String::new(),
        manually_toggled: false,
        array_counter: 0,
        array_base: p.array_base.clone(),
    }
}
