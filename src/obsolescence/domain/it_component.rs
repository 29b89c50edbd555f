use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Name of the lifecycle phase whose start date is the obsolescence date
pub const END_OF_LIFE_PHASE: &str = "endOfLife";

/// IT component fact sheet as returned by the catalog.
///
/// Fields the report does not interpret are kept in `extra` and carried
/// through to the obsolete component untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItComponent {
    /// Opaque identifier; numeric ids are kept in their decimal form
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub lifecycle: Option<Lifecycle>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lifecycle of a fact sheet: the current phase and the phase timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    #[serde(rename = "lifecyclePhase", default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_phase: Option<String>,
    #[serde(default)]
    pub phases: Vec<LifecyclePhase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecyclePhase {
    pub phase: String,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
}

impl ItComponent {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            lifecycle: None,
            extra: Map::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    /// Raw start date of the `endOfLife` phase, if the component has one.
    ///
    /// Only an empty string counts as missing; anything else is left to the
    /// date parser.
    pub fn end_of_life_date(&self) -> Option<&str> {
        self.lifecycle
            .as_ref()?
            .phase(END_OF_LIFE_PHASE)?
            .start_date
            .as_deref()
            .filter(|date| !date.is_empty())
    }
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(de::Error::custom(format!(
            "IT component id must be a string or a number, got {}",
            other
        ))),
    }
}

impl Lifecycle {
    pub fn new(phases: Vec<LifecyclePhase>) -> Self {
        Self {
            lifecycle_phase: None,
            phases,
        }
    }

    /// Finds the record for a phase name; a component has at most one per phase
    pub fn phase(&self, name: &str) -> Option<&LifecyclePhase> {
        self.phases.iter().find(|p| p.phase == name)
    }
}

impl LifecyclePhase {
    pub fn new(phase: impl Into<String>, start_date: Option<&str>) -> Self {
        Self {
            phase: phase.into(),
            start_date: start_date.map(str::to_string),
        }
    }
}
