//! Where batch subject names come from.

use crate::CharacterAnalyzer;
use async_trait::async_trait;
use hamartia_error::{HamartiaResult, NameSourceError, NameSourceErrorKind};
use hamartia_interface::{CompletionDriver, NameSource};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Parse a name list: one name per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
///
/// ```
/// use hamartia_analysis::parse_name_list;
///
/// let names = parse_name_list("# heroes\nHamlet\n\n  Medea  \n");
/// assert_eq!(names, vec!["Hamlet", "Medea"]);
/// ```
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// A fixed list of names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticNames(pub Vec<String>);

impl<S: Into<String>> FromIterator<S> for StaticNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl NameSource for StaticNames {
    async fn names(&self) -> HamartiaResult<Vec<String>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("{} static names", self.0.len())
    }
}

/// Names read from a text file in the [`parse_name_list`] format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameSource {
    path: PathBuf,
}

impl FileNameSource {
    /// Source reading `path` each time names are requested.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl NameSource for FileNameSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn names(&self) -> HamartiaResult<Vec<String>> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            NameSourceError::new(NameSourceErrorKind::FileRead {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        let names = parse_name_list(&text);
        debug!(count = names.len(), "Loaded names from file");
        Ok(names)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Sample name lists compiled into the binary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BundledList {
    /// Characters from novels, plays and myth
    Literature,
    /// Film characters
    Movies,
    /// Television characters
    Series,
    /// Painters, sculptors and musicians
    Artists,
}

impl BundledList {
    /// Look a list up by name.
    ///
    /// ```
    /// use hamartia_analysis::BundledList;
    ///
    /// assert_eq!(BundledList::parse("Movies").unwrap(), BundledList::Movies);
    /// assert!(BundledList::parse("operas").is_err());
    /// ```
    pub fn parse(name: &str) -> HamartiaResult<Self> {
        Self::from_str(name).map_err(|_| {
            NameSourceError::new(NameSourceErrorKind::UnknownList(name.to_string())).into()
        })
    }

    /// Raw list text.
    pub fn text(self) -> &'static str {
        match self {
            Self::Literature => include_str!("../data/literature.txt"),
            Self::Movies => include_str!("../data/movies.txt"),
            Self::Series => include_str!("../data/series.txt"),
            Self::Artists => include_str!("../data/artists.txt"),
        }
    }

    /// Parsed names, in file order.
    pub fn entries(self) -> Vec<String> {
        parse_name_list(self.text())
    }
}

#[async_trait]
impl NameSource for BundledList {
    async fn names(&self) -> HamartiaResult<Vec<String>> {
        Ok(self.entries())
    }

    fn describe(&self) -> String {
        format!("bundled {} list", self)
    }
}

/// Names the model suggests for a theme.
pub struct SuggestedNames<'a, D> {
    analyzer: &'a CharacterAnalyzer<D>,
    theme: String,
    count: usize,
}

impl<'a, D: CompletionDriver> SuggestedNames<'a, D> {
    /// Ask `analyzer` for `count` names matching `theme`.
    pub fn new(analyzer: &'a CharacterAnalyzer<D>, theme: impl Into<String>, count: usize) -> Self {
        Self {
            analyzer,
            theme: theme.into(),
            count,
        }
    }
}

#[async_trait]
impl<D: CompletionDriver> NameSource for SuggestedNames<'_, D> {
    /// Unlike [`CharacterAnalyzer::suggest`], a failed request is returned as an error.
    async fn names(&self) -> HamartiaResult<Vec<String>> {
        self.analyzer.try_suggest(&self.theme, self.count).await
    }

    fn describe(&self) -> String {
        format!("{} suggestions for \"{}\"", self.count, self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_bundled_list_has_names() {
        for list in BundledList::iter() {
            let names = list.entries();
            assert!(!names.is_empty(), "{} is empty", list);
            assert!(names.iter().all(|n| !n.starts_with('#')));
        }
    }

    #[test]
    fn bundled_lists_are_case_insensitive() {
        assert_eq!(BundledList::parse("SERIES").unwrap(), BundledList::Series);
        assert_eq!(BundledList::Artists.to_string(), "artists");
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let names = parse_name_list("\n# header\n  \nOedipus\n#Creon\nAntigone\n");
        assert_eq!(names, vec!["Oedipus", "Antigone"]);
    }
}
