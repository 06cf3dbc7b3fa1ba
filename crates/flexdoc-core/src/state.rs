//! Ephemeral navigation state: what is selected, what is expanded, and the
//! current search term. Created empty for each session and never persisted.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ActionError;
use crate::options::DocExpansion;
use crate::project::{DocumentView, EndpointId, OperationEntry};

/// A collapsible region. Sidebar groups live in their own namespace so a tag
/// named `responses` never aliases the detail pane's responses block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Group(String),
    RequestBody,
    Responses,
    CodeExamples,
}

impl FromStr for SectionId {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(name) = s.strip_prefix("group:") {
            if name.is_empty() {
                return Err(ActionError::UnknownSection(s.to_string()));
            }
            return Ok(SectionId::Group(name.to_string()));
        }
        match s {
            "request-body" => Ok(SectionId::RequestBody),
            "responses" => Ok(SectionId::Responses),
            "code-examples" => Ok(SectionId::CodeExamples),
            _ => Err(ActionError::UnknownSection(s.to_string())),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionId::Group(name) => write!(f, "group:{name}"),
            SectionId::RequestBody => f.write_str("request-body"),
            SectionId::Responses => f.write_str("responses"),
            SectionId::CodeExamples => f.write_str("code-examples"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Overview,
    EndpointDetail(EndpointId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    search_term: String,
    selected: Option<EndpointId>,
    expanded: HashSet<SectionId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state seeded from the `doc_expansion` option.
    pub fn with_expansion<'g>(expansion: DocExpansion, groups: impl IntoIterator<Item = &'g str>) -> Self {
        let mut state = Self::new();
        if matches!(expansion, DocExpansion::List | DocExpansion::Full) {
            state
                .expanded
                .extend(groups.into_iter().map(|g| SectionId::Group(g.to_string())));
        }
        if expansion == DocExpansion::Full {
            state.expanded.insert(SectionId::RequestBody);
            state.expanded.insert(SectionId::Responses);
        }
        state
    }

    pub fn mode(&self) -> ViewMode {
        match &self.selected {
            Some(id) => ViewMode::EndpointDetail(id.clone()),
            None => ViewMode::Overview,
        }
    }

    pub fn selected(&self) -> Option<&EndpointId> {
        self.selected.as_ref()
    }

    /// Returns false when `id` was already selected.
    pub fn select_endpoint(&mut self, id: EndpointId) -> bool {
        if self.selected.as_ref() == Some(&id) {
            return false;
        }
        log::debug!("select {id}");
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        if let Some(id) = self.selected.take() {
            log::debug!("clear selection {id}");
        }
    }

    /// Flip membership of `section`; returns whether it is now expanded.
    pub fn toggle_section(&mut self, section: SectionId) -> bool {
        if self.expanded.remove(&section) {
            false
        } else {
            self.expanded.insert(section);
            true
        }
    }

    pub fn is_expanded(&self, section: &SectionId) -> bool {
        self.expanded.contains(section)
    }

    pub fn is_group_expanded(&self, group: &str) -> bool {
        self.expanded.contains(&SectionId::Group(group.to_string()))
    }

    pub fn expanded(&self) -> impl Iterator<Item = &SectionId> {
        self.expanded.iter()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The selected operation in `view`. A selection that no longer exists
    /// in the view yields `None`, so callers fall back to the overview.
    pub fn selected_entry<'v, 'a>(&self, view: &'v DocumentView<'a>) -> Option<&'v OperationEntry<'a>> {
        let id = self.selected.as_ref()?;
        let entry = view.find(id);
        if entry.is_none() {
            log::warn!("selected endpoint {id} is not in the document; showing overview");
        }
        entry
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Select(id) => {
                self.select_endpoint(id);
            }
            Action::Clear => self.clear_selection(),
            Action::Toggle(section) => {
                self.toggle_section(section);
            }
            Action::Search(term) => self.set_search_term(term),
        }
    }
}

/// A user action against [`SelectionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select(EndpointId),
    Clear,
    Toggle(SectionId),
    Search(String),
}

impl FromStr for Action {
    type Err = ActionError;

    /// `select GET-/pets`, `clear`, `toggle group:Pets`, `search term...`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match command {
            "select" => Ok(Action::Select(EndpointId::parse(rest)?)),
            "clear" => Ok(Action::Clear),
            "toggle" => Ok(Action::Toggle(rest.parse()?)),
            "search" => Ok(Action::Search(rest.to_string())),
            other => Err(ActionError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_round_trip_through_display() {
        for raw in ["group:Orders", "responses", "request-body", "code-examples"] {
            let section: SectionId = raw.parse().unwrap();
            assert_eq!(section.to_string(), raw);
        }
        assert!("group:".parse::<SectionId>().is_err());
        assert!("codeExamples".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_group_named_responses_does_not_collide() {
        let mut state = SelectionState::new();
        state.toggle_section(SectionId::Group("responses".into()));
        assert!(state.is_group_expanded("responses"));
        assert!(!state.is_expanded(&SectionId::Responses));
    }

    #[test]
    fn test_select_same_id_is_noop() {
        let mut state = SelectionState::new();
        let id = EndpointId::parse("GET-/pets").unwrap();
        assert!(state.select_endpoint(id.clone()));
        assert!(!state.select_endpoint(id));
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            "select post-/products".parse::<Action>().unwrap(),
            Action::Select(EndpointId::parse("POST-/products").unwrap())
        );
        assert_eq!("clear".parse::<Action>().unwrap(), Action::Clear);
        assert_eq!(
            "toggle group:Products".parse::<Action>().unwrap(),
            Action::Toggle(SectionId::Group("Products".into()))
        );
        assert_eq!(
            "search  wireless headphones ".parse::<Action>().unwrap(),
            Action::Search("wireless headphones".into())
        );
        assert_eq!("search".parse::<Action>().unwrap(), Action::Search(String::new()));
        assert!(matches!(
            "jump /x".parse::<Action>(),
            Err(ActionError::UnknownCommand(c)) if c == "jump"
        ));
    }

    #[test]
    fn test_full_expansion_seeds_detail_sections() {
        let state = SelectionState::with_expansion(DocExpansion::Full, ["A", "B"]);
        assert!(state.is_group_expanded("A"));
        assert!(state.is_group_expanded("B"));
        assert!(state.is_expanded(&SectionId::Responses));
        assert!(state.is_expanded(&SectionId::RequestBody));
        assert!(!state.is_expanded(&SectionId::CodeExamples));

        let state = SelectionState::with_expansion(DocExpansion::List, ["A"]);
        assert!(state.is_group_expanded("A"));
        assert!(!state.is_expanded(&SectionId::Responses));

        let state = SelectionState::with_expansion(DocExpansion::Collapsed, ["A"]);
        assert_eq!(state.expanded().count(), 0);
    }
}
