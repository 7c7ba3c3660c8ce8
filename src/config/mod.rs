// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "tabseek";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// JSON snapshot of tabs, bookmarks and history to search.
    pub items_file: String,
    /// Directory holding `public/logo.png`, used as the fallback icon.
    pub asset_dir: Option<String>,
    pub log_file: String,
    pub log_level: String,
    pub min_query_len: usize,
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            items_file: "items.json".to_string(),
            asset_dir: None,
            log_file: "tabseek.log".to_string(),
            log_level: "info".to_string(),
            min_query_len: 1,
            tick_rate_ms: 100,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"items_file": "/tmp/snapshot.json"}"#).unwrap();
        assert_eq!(config.items_file, "/tmp/snapshot.json");
        assert_eq!(config.min_query_len, 1);
        assert_eq!(config.asset_dir, None);
    }
}
