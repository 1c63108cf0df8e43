use serde::{
  Deserialize,
  Serialize
};
use tracing::debug;

use crate::nav::DEFAULT_NAV_TARGET;

/// Runtime settings. Every key is
/// optional; an empty document yields
/// the defaults.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct Config {
  pub log: LogConfig,
  pub nav: NavConfig,
  pub dom: DomSelectors
}

impl Config {
  #[tracing::instrument(skip(text))]
  pub fn parse(
    text: &str
  ) -> crate::error::Result<Self> {
    let cfg: Config = toml::from_str(text)?;
    debug!(
      log_level = %cfg.log.level,
      default_nav = %cfg.nav.default_target,
      "config parsed"
    );
    Ok(cfg)
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct LogConfig {
  pub level: String
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: "warn".to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct NavConfig {
  pub default_target: String
}

impl Default for NavConfig {
  fn default() -> Self {
    Self {
      default_target: DEFAULT_NAV_TARGET
        .to_string()
    }
  }
}

/// CSS selectors and state classes the
/// frontend binds to.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct DomSelectors {
  pub task_card:      String,
  pub title:          String,
  pub subtitle:       String,
  pub flight_code:    String,
  pub flight_dest:    String,
  pub etd_row:        String,
  pub etd_old:        String,
  pub etd_new:        String,
  pub rt_row:         String,
  pub rt_old:         String,
  pub rt_new:         String,
  pub rt_side:        String,
  pub side_group:     String,
  pub side_old:       String,
  pub side_new:       String,
  pub accept_button:  String,
  pub filter_tab:     String,
  pub badge:          String,
  pub nav_item:       String,
  pub nav_add_class:  String,
  pub sos_button:     String,
  pub search_input:   String,
  pub active_class:   String,
  pub hidden_class:   String,
  pub accepted_class: String,
  pub updated_class:  String
}

impl Default for DomSelectors {
  fn default() -> Self {
    let s = str::to_string;
    Self {
      task_card:      s(".task-card"),
      title:          s(".task-title"),
      subtitle:       s(".task-subtitle"),
      flight_code:    s(
        ".task-flight-code"
      ),
      flight_dest:    s(
        ".task-flight-dest"
      ),
      etd_row:        s(".task-etd"),
      etd_old:        s(".task-etd-old"),
      etd_new:        s(".task-etd-new"),
      rt_row:         s(".task-rt"),
      rt_old:         s(".task-rt-old"),
      rt_new:         s(".task-rt-new"),
      rt_side:        s(
        "[data-rt-from-etd=\"true\"]"
      ),
      side_group:     s(
        ".task-side-group[data-old][data-new]"
      ),
      side_old:       s(".task-side-old"),
      side_new:       s(".task-side-new"),
      accept_button:  s(".accept-btn"),
      filter_tab:     s(".filter-tab"),
      badge:          s(".badge"),
      nav_item:       s(".nav-item"),
      nav_add_class:  s("nav-add"),
      sos_button:     s(".sos-btn"),
      search_input:   s(".search-input"),
      active_class:   s("active"),
      hidden_class:   s("hidden"),
      accepted_class: s("accepted"),
      updated_class:  s("updated")
    }
  }
}
