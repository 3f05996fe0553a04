use serde::{Deserialize, Serialize};

pub const DEFAULT_IMPORTANCE: f64 = 0.5;

/// One knowledge point of a learning path.
///
/// Numeric fields keep whatever the upstream payload carried; the layout reads
/// them through [`KnowledgeItem::level`] and [`KnowledgeItem::importance`],
/// which apply the fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawKnowledgeItem")]
pub struct KnowledgeItem {
    pub keypoint_id: String,
    pub path_level: Option<f64>,
    pub importance: Option<f64>,
    pub milestone: bool,
    pub name: Option<String>,
}

impl KnowledgeItem {
    pub fn new(keypoint_id: impl Into<String>, path_level: f64) -> Self {
        Self {
            keypoint_id: keypoint_id.into(),
            path_level: Some(path_level),
            importance: None,
            milestone: false,
            name: None,
        }
    }

    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_milestone(mut self, milestone: bool) -> Self {
        self.milestone = milestone;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Trimmed id, or `None` when the item cannot be positioned.
    pub fn node_id(&self) -> Option<&str> {
        non_blank(&self.keypoint_id)
    }

    pub fn level(&self) -> u32 {
        normalize_level(self.path_level)
    }

    pub fn importance(&self) -> f64 {
        match self.importance {
            Some(value) if value.is_finite() => value,
            _ => DEFAULT_IMPORTANCE,
        }
    }
}

/// Prerequisite edge: `from_id` must be learned before `to_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawEdge")]
pub struct Edge {
    pub from_id: String,
    pub to_id: String,
}

impl Edge {
    pub fn new(from_id: impl Into<String>, to_id: impl Into<String>) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
        }
    }

    /// Both trimmed endpoints, or `None` if either is blank.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        Some((non_blank(&self.from_id)?, non_blank(&self.to_id)?))
    }
}

/// Rounds to the nearest level; negative, missing and non-finite values are level 0.
pub fn normalize_level(raw: Option<f64>) -> u32 {
    match raw {
        Some(value) if value.is_finite() => {
            let rounded = value.round();
            if rounded <= 0.0 { 0 } else { rounded as u32 }
        }
        _ => 0,
    }
}

fn non_blank(id: &str) -> Option<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(val) => Some(*val),
            Scalar::Text(val) => val.trim().parse::<f64>().ok(),
            Scalar::Bool(_) => None,
        }
    }

    fn as_flag(&self) -> bool {
        match self {
            Scalar::Bool(val) => *val,
            Scalar::Number(val) => *val != 0.0 && !val.is_nan(),
            Scalar::Text(val) => matches!(
                val.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "yes"
            ),
        }
    }

    fn into_text(self) -> String {
        match self {
            Scalar::Number(val) => format!("{}", val),
            Scalar::Bool(val) => val.to_string(),
            Scalar::Text(val) => val,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawKnowledgeItem {
    #[serde(default)]
    keypoint_id: Option<Scalar>,
    #[serde(default)]
    path_level: Option<Scalar>,
    #[serde(default)]
    importance: Option<Scalar>,
    #[serde(default)]
    milestone: Option<Scalar>,
    #[serde(default)]
    name: Option<Scalar>,
}

impl From<RawKnowledgeItem> for KnowledgeItem {
    fn from(raw: RawKnowledgeItem) -> Self {
        Self {
            keypoint_id: raw.keypoint_id.map(Scalar::into_text).unwrap_or_default(),
            path_level: raw.path_level.as_ref().and_then(Scalar::as_f64),
            importance: raw.importance.as_ref().and_then(Scalar::as_f64),
            milestone: raw.milestone.as_ref().is_some_and(Scalar::as_flag),
            name: raw.name.map(Scalar::into_text),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    #[serde(default, alias = "from")]
    from_id: Option<Scalar>,
    #[serde(default, alias = "to")]
    to_id: Option<Scalar>,
}

impl From<RawEdge> for Edge {
    fn from(raw: RawEdge) -> Self {
        Self {
            from_id: raw.from_id.map(Scalar::into_text).unwrap_or_default(),
            to_id: raw.to_id.map(Scalar::into_text).unwrap_or_default(),
        }
    }
}
