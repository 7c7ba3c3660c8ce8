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

//! Browser snapshot loading.
//!
//! Items are read from a JSON array of tagged entries, see
//! [`SearchItem`] for the accepted shape.

use std::{fs, path::{Path, PathBuf}};

use log::debug;
use thiserror::Error;

use crate::model::SearchItem;

#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("Failed to read items file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Items file '{path}' is not valid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) fn load_items(path: &Path) -> Result<Vec<SearchItem>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_items(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} items from {}", items.len(), path.display());

    Ok(items)
}

pub(crate) fn parse_items(contents: &str) -> Result<Vec<SearchItem>, serde_json::Error> {
    serde_json::from_str(contents)
}
