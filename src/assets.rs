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

//! Icon sources for the terminal.
//!
//! A terminal cannot draw the images behind an icon URL, so "loading" an icon
//! means checking that its source is available without going to the network
//! and picking a glyph for it. Remote sources always fail to load, which sends
//! them down the results list fallback chain.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    components::results_list::{IconResolver, icon::FALLBACK_ICON},
    render::icons::{ICON_EMBEDDED, ICON_FILE, ICON_INLINE},
};

const FILE_SCHEME: &str = "file://";
const DATA_SCHEME: &str = "data:image/";

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum IconLoadError {
    #[error("Icon has no source")]
    Empty,

    #[error("Icon file '{0}' does not exist")]
    Missing(PathBuf),

    #[error("Icon source '{0}' cannot be loaded offline")]
    Remote(String),
}

#[derive(Debug, Default)]
pub(crate) struct IconLoader;

impl IconLoader {
    pub(crate) fn load(&self, src: &str) -> Result<&'static str, IconLoadError> {
        if src.is_empty() {
            return Err(IconLoadError::Empty);
        }

        if src == FALLBACK_ICON {
            return Ok(ICON_EMBEDDED);
        }

        if src.starts_with(DATA_SCHEME) {
            return Ok(ICON_INLINE);
        }

        if let Some(path) = src.strip_prefix(FILE_SCHEME) {
            let path = Path::new(path);
            return if path.is_file() {
                Ok(ICON_FILE)
            } else {
                Err(IconLoadError::Missing(path.to_path_buf()))
            };
        }

        Err(IconLoadError::Remote(src.to_string()))
    }
}

/// Resolves host resources against the application's asset directory.
pub(crate) struct AssetResolver {
    asset_dir: PathBuf,
}

impl AssetResolver {
    pub(crate) fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
        }
    }
}

impl IconResolver for AssetResolver {
    fn resolve(&self, resource: &str) -> Option<String> {
        let path = self.asset_dir.join(resource);
        Some(format!("{FILE_SCHEME}{}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn embedded_icon_always_loads() {
        assert_eq!(IconLoader.load(FALLBACK_ICON), Ok(ICON_EMBEDDED));
        assert_eq!(IconLoader.load("data:image/png;base64,AAAA"), Ok(ICON_INLINE));
    }

    #[test]
    fn remote_and_empty_sources_fail() {
        assert_eq!(IconLoader.load(""), Err(IconLoadError::Empty));
        assert!(matches!(IconLoader.load("https://example.com/favicon.ico"), Err(IconLoadError::Remote(_))));
    }

    #[test]
    fn file_sources_need_the_file() {
        let missing = IconLoader.load("file:///no/such/icon.png");
        assert_eq!(missing, Err(IconLoadError::Missing(PathBuf::from("/no/such/icon.png"))));

        let exe = env::current_exe().unwrap();
        assert_eq!(IconLoader.load(&format!("file://{}", exe.display())), Ok(ICON_FILE));
    }

    #[test]
    fn resolver_joins_asset_dir() {
        let resolver = AssetResolver::new("/opt/tabseek");
        assert_eq!(
            resolver.resolve("public/logo.png").as_deref(),
            Some("file:///opt/tabseek/public/logo.png")
        );
    }
}
