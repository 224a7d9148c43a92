// SPDX-License-Identifier: MPL-2.0
//! Navigable address of the application.
//!
//! The window has no address bar, so the address lives in [`Router`], an
//! explicit history of [`Location`]s. It renders the same strings a browser
//! would show (`/`, `/p/3?photoId=3`) so a location can be copied, shared and
//! passed back with `--location`.

use crate::error::LocationError;
use std::fmt;
use std::str::FromStr;

const PHOTO_PREFIX: &str = "/p/";
const PHOTO_QUERY: &str = "photoId";

/// A single address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    /// Base path `/`, the gallery grid.
    #[default]
    Home,
    /// `/p/<index>?photoId=<index>`.
    Photo(usize),
}

impl Location {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Location::Home => "/".to_string(),
            Location::Photo(index) => format!("{PHOTO_PREFIX}{index}"),
        }
    }

    #[must_use]
    pub fn photo_id(&self) -> Option<usize> {
        match self {
            Location::Home => None,
            Location::Photo(index) => Some(*index),
        }
    }

    /// Path plus query.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Location::Home => self.path(),
            Location::Photo(index) => format!("{}?{PHOTO_QUERY}={index}", self.path()),
        }
    }

    /// Parses `/`, `/p/<n>`, `/?photoId=<n>` and `/p/<n>?photoId=<n>`.
    ///
    /// When both the path and the query carry an index the query wins.
    /// Unknown query parameters are ignored.
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (input, None),
        };

        let from_path = match path.trim_end_matches('/') {
            "" => None,
            rest => {
                let raw = rest
                    .strip_prefix(PHOTO_PREFIX.trim_end_matches('/'))
                    .and_then(|r| r.strip_prefix('/'))
                    .ok_or_else(|| LocationError::UnknownPath(path.to_string()))?;
                Some(parse_index(raw)?)
            }
        };

        let from_query = match query {
            Some(query) => query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(key, _)| *key == PHOTO_QUERY)
                .map(|(_, value)| parse_index(value))
                .transpose()?,
            None => None,
        };

        Ok(match from_query.or(from_path) {
            Some(index) => Location::Photo(index),
            None => Location::Home,
        })
    }
}

fn parse_index(raw: &str) -> Result<usize, LocationError> {
    raw.parse::<usize>()
        .map_err(|_| LocationError::InvalidIndex(raw.to_string()))
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Entries kept by [`Router`]; the oldest ones are dropped first.
pub const MAX_HISTORY: usize = 64;

/// History of visited locations. The last entry is the current address.
///
/// Nothing navigates back through it yet, so only the most recent
/// [`MAX_HISTORY`] entries are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    history: Vec<Location>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Location::Home)
    }
}

impl Router {
    #[must_use]
    pub fn new(initial: Location) -> Self {
        Self {
            history: vec![initial],
        }
    }

    #[must_use]
    pub fn current(&self) -> Location {
        self.history.last().copied().unwrap_or_default()
    }

    /// Navigates to `location`, adding a history entry.
    pub fn push(&mut self, location: Location) {
        log::debug!("router push {}", location.href());
        if self.history.len() >= MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(location);
    }

    /// Shallow update: swaps the current entry without growing the history.
    pub fn replace(&mut self, location: Location) {
        log::trace!("router replace {}", location.href());
        match self.history.last_mut() {
            Some(current) => *current = location,
            None => self.history.push(location),
        }
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Photo index of the current address if it is valid for a gallery of `len` images.
    #[must_use]
    pub fn photo_index(&self, len: usize) -> Option<usize> {
        self.current().photo_id().filter(|index| *index < len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_location_renders_path_and_query() {
        let location = Location::Photo(4);
        assert_eq!(location.path(), "/p/4");
        assert_eq!(location.href(), "/p/4?photoId=4");
        assert_eq!(location.to_string(), "/p/4?photoId=4");
        assert_eq!(Location::Home.href(), "/");
    }

    #[test]
    fn parse_accepts_known_shapes() {
        assert_eq!(Location::parse("/").unwrap(), Location::Home);
        assert_eq!(Location::parse("").unwrap(), Location::Home);
        assert_eq!(Location::parse("/p/2").unwrap(), Location::Photo(2));
        assert_eq!(Location::parse("/p/2/").unwrap(), Location::Photo(2));
        assert_eq!(Location::parse("/?photoId=7").unwrap(), Location::Photo(7));
        assert_eq!(
            Location::parse("/p/3?photoId=3").unwrap(),
            Location::Photo(3)
        );
    }

    #[test]
    fn query_wins_over_path() {
        assert_eq!(
            Location::parse("/p/1?photoId=5").unwrap(),
            Location::Photo(5)
        );
    }

    #[test]
    fn unrelated_query_parameters_are_ignored() {
        assert_eq!(
            Location::parse("/p/1?utm=share&photoId=2").unwrap(),
            Location::Photo(2)
        );
        assert_eq!(Location::parse("/?utm=share").unwrap(), Location::Home);
    }

    #[test]
    fn parse_rejects_unknown_paths_and_bad_indices() {
        assert_eq!(
            Location::parse("/albums/1"),
            Err(LocationError::UnknownPath("/albums/1".to_string()))
        );
        assert_eq!(
            Location::parse("/p/-1"),
            Err(LocationError::InvalidIndex("-1".to_string()))
        );
        assert_eq!(
            "/?photoId=abc".parse::<Location>(),
            Err(LocationError::InvalidIndex("abc".to_string()))
        );
    }

    #[test]
    fn display_output_parses_back() {
        let location = Location::Photo(12);
        assert_eq!(location.to_string().parse::<Location>().unwrap(), location);
    }

    #[test]
    fn replace_is_shallow_and_push_grows_history() {
        let mut router = Router::default();
        router.push(Location::Photo(0));
        assert_eq!(router.history_len(), 2);

        router.replace(Location::Photo(1));
        router.replace(Location::Photo(2));
        assert_eq!(router.history_len(), 2);
        assert_eq!(router.current(), Location::Photo(2));

        router.push(Location::Home);
        assert_eq!(router.history_len(), 3);
        assert_eq!(router.current(), Location::Home);
    }

    #[test]
    fn history_is_capped_at_most_recent_entries() {
        let mut router = Router::default();
        for index in 0..MAX_HISTORY * 2 {
            router.push(Location::Photo(index));
        }

        assert_eq!(router.history_len(), MAX_HISTORY);
        assert_eq!(router.current(), Location::Photo(MAX_HISTORY * 2 - 1));

        router.push(Location::Home);
        assert_eq!(router.history_len(), MAX_HISTORY);
        assert_eq!(router.current(), Location::Home);
    }

    #[test]
    fn photo_index_is_bounded_by_gallery_length() {
        let router = Router::new(Location::Photo(3));
        assert_eq!(router.photo_index(4), Some(3));
        assert_eq!(router.photo_index(3), None);
        assert_eq!(Router::default().photo_index(10), None);
    }
}
