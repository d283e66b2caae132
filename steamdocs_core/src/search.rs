use crate::schema::Schema;

/// Free-text lookup over `Interface/Method` names: ordered, case-insensitive
/// subsequence match, greedy left to right.
pub struct ApiSearcher {
    entries: Vec<SearchEntry>,
}

struct SearchEntry {
    interface: String,
    method: String,
    haystack: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub interface: String,
    pub method: String,
    pub score: i32,
    /// Byte positions of the matched characters within
    /// `interface/method`, for highlighting.
    pub indices: Vec<usize>,
}

impl ApiSearcher {
    pub fn new(schema: &Schema) -> Self {
        let mut entries = Vec::new();
        for (interface, methods) in &schema.interfaces {
            for method in methods.keys() {
                entries.push(SearchEntry {
                    interface: interface.clone(),
                    method: method.clone(),
                    haystack: format!("{interface}/{method}").to_lowercase(),
                });
            }
        }
        Self { entries }
    }

    /// Hits sorted by score, best first; ties keep schema declaration order.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let (score, indices) = match_subsequence(&entry.haystack, &needle)?;
                Some(SearchHit {
                    interface: entry.interface.clone(),
                    method: entry.method.clone(),
                    score,
                    indices,
                })
            })
            .collect();
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }
}

/// Consecutive characters and matches right after a separator score higher;
/// every skipped character costs a little. `None` when the query is not a
/// subsequence of the candidate.
fn match_subsequence(haystack: &str, needle: &str) -> Option<(i32, Vec<usize>)> {
    let hay = haystack.as_bytes();
    let mut indices: Vec<usize> = Vec::with_capacity(needle.len());
    let mut score = 0i32;
    let mut pos = 0usize;

    for &byte in needle.as_bytes() {
        let found = hay[pos..].iter().position(|&b| b == byte)? + pos;
        match indices.last() {
            Some(&prev) if found == prev + 1 => score += 5,
            Some(&prev) => score -= ((found - prev - 1).min(10)) as i32,
            None => score -= (found.min(10)) as i32,
        }
        if found == 0 || matches!(hay[found - 1], b'/' | b'_' | b'.') {
            score += 3;
        }
        indices.push(found);
        pos = found + 1;
    }
    Some((score, indices))
}
