//! Stage marker configuration.
//!
//! Which raw trace columns become stages, and how they are labelled, is
//! driven by three regular expressions. The defaults match ROS2 tracepoint
//! column names as produced for a path's response-time records:
//!
//! ```json
//! {
//!   "response_time_start": "_min$",
//!   "response_time_label": "[worst - best] response time",
//!   "publish": "rclcpp_publish",
//!   "callback_start": "callback_start"
//! }
//! ```
//!
//! Every field is optional in a markers file.

use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RESPONSE_TIME_LABEL: &str = "[worst - best] response time";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StageMarkers {
    /// Columns holding the start of the response-time window.
    pub response_time_start: String,
    /// Fixed label given to the response-time start stage.
    pub response_time_label: String,
    /// Columns recording a topic publish.
    pub publish: String,
    /// Columns recording a node's callback start.
    pub callback_start: String,
}

impl Default for StageMarkers {
    fn default() -> Self {
        Self {
            response_time_start: "_min$".to_string(),
            response_time_label: DEFAULT_RESPONSE_TIME_LABEL.to_string(),
            publish: "rclcpp_publish".to_string(),
            callback_start: "callback_start".to_string(),
        }
    }
}

impl StageMarkers {
    pub fn compile(&self) -> Result<StageRules> {
        fn pattern(field: &'static str, re: &str) -> Result<Regex> {
            Regex::new(re).map_err(|source| Error::Pattern { field, source })
        }

        Ok(StageRules {
            response_time_start: pattern("response_time_start", &self.response_time_start)?,
            response_time_label: self.response_time_label.clone(),
            publish: pattern("publish", &self.publish)?,
            callback_start: pattern("callback_start", &self.callback_start)?,
        })
    }
}

/// What a raw column was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    ResponseTimeStart,
    Publish,
    CallbackStart,
}

/// Compiled [`StageMarkers`].
#[derive(Debug, Clone)]
pub struct StageRules {
    response_time_start: Regex,
    response_time_label: String,
    publish: Regex,
    callback_start: Regex,
}

impl StageRules {
    pub fn defaults() -> Result<Self> {
        StageMarkers::default().compile()
    }

    /// First matching rule for `column`, in rule order.
    pub fn kind_of(&self, column: &str) -> Option<StageKind> {
        if self.response_time_start.is_match(column) {
            Some(StageKind::ResponseTimeStart)
        } else if self.publish.is_match(column) {
            Some(StageKind::Publish)
        } else if self.callback_start.is_match(column) {
            Some(StageKind::CallbackStart)
        } else {
            None
        }
    }

    pub fn response_time_label(&self) -> &str {
        &self.response_time_label
    }
}
