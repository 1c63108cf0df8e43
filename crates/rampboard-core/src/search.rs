use serde::{
  Deserialize,
  Serialize
};

/// Searchable text of a task card.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct CardText {
  #[serde(default)]
  pub title:       Option<String>,
  #[serde(default)]
  pub subtitle:    Option<String>,
  #[serde(default)]
  pub flight_code: Option<String>,
  #[serde(default)]
  pub flight_dest: Option<String>
}

impl CardText {
  fn fields(
    &self
  ) -> impl Iterator<Item = &str> {
    [
      &self.title,
      &self.subtitle,
      &self.flight_code,
      &self.flight_dest
    ]
    .into_iter()
    .map(|field| {
      field.as_deref().unwrap_or("")
    })
  }
}

/// Lowercased, trimmed search box
/// contents.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct SearchQuery(String);

impl SearchQuery {
  pub fn parse(raw: &str) -> Self {
    Self(raw.trim().to_lowercase())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// An empty query matches every card.
  pub fn matches(
    &self,
    text: &CardText
  ) -> bool {
    if self.is_empty() {
      return true;
    }
    text.fields().any(|field| {
      field
        .to_lowercase()
        .contains(&self.0)
    })
  }
}
