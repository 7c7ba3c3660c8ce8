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

//! Fallback chain for item icons that fail to load.
//!
//! A failing icon first falls back to the application logo supplied by the
//! host, then to an embedded image that needs neither network nor host. Each
//! failure moves at most one step down the chain, and a failure of the
//! embedded image itself stops the chain.

use log::debug;

/// Embedded star icon.
pub(crate) const FALLBACK_ICON: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMjQiIGhlaWdodD0iMjQiIHZpZXdCb3g9IjAgMCAyNCAyNCIgZmlsbD0ibm9uZSIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj4KPHBhdGggZD0iTTEyIDJMMTMuMDkgOC4yNkwyMCA5TDEzLjA5IDE1Ljc0TDEyIDIyTDEwLjkxIDE1Ljc0TDQgOUwxMC45MSA4LjI2TDEyIDJaIiBzdHJva2U9IiM5Q0EzQUYiIHN0cm9rZS13aWR0aD0iMiIgc3Ryb2tlLWxpbmVjYXA9InJvdW5kIiBzdHJva2UtbGluZWpvaW49InJvdW5kIi8+Cjwvc3ZnPgo=";

/// Host resource used as the first fallback.
pub(crate) const HOST_ICON_RESOURCE: &str = "public/logo.png";

/// Turns a host resource path into a loadable icon source.
pub(crate) trait IconResolver {
    fn resolve(&self, resource: &str) -> Option<String>;
}

/// The icon slot of one rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IconElement {
    pub(crate) src: String,
    /// Set once `src` has been loaded successfully.
    pub(crate) loaded: Option<&'static str>,
    /// Set when the embedded icon itself failed.
    pub(crate) broken: bool,
}

impl IconElement {
    pub(crate) fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            loaded: None,
            broken: false,
        }
    }

    /// Whether the host should try to load `src`.
    pub(crate) fn needs_load(&self) -> bool {
        self.loaded.is_none() && !self.broken
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FallbackStep {
    HostIcon,
    Embedded,
    Exhausted,
}

pub(crate) fn handle_image_error(element: &mut IconElement, resolver: Option<&dyn IconResolver>) -> FallbackStep {
    if element.src == FALLBACK_ICON {
        element.broken = true;
        return FallbackStep::Exhausted;
    }

    let host_icon = resolver.and_then(|resolver| resolver.resolve(HOST_ICON_RESOURCE));
    let step = match host_icon {
        Some(host_icon) if element.src != host_icon => {
            element.src = host_icon;
            FallbackStep::HostIcon
        }
        _ => {
            element.src = FALLBACK_ICON.to_string();
            FallbackStep::Embedded
        }
    };

    element.loaded = None;
    debug!("Icon failed to load, fell back to {:?}", step);

    step
}
