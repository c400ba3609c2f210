//! Style registry for one serialization pass.
//!
//! The registry is keyed by [`StyleId`], never by name. The first time a style
//! is met it receives a name (its explicit one, or a generated `P1`, `T1`, ...)
//! and its definition is materialized; every later encounter only returns the
//! cached name. Default styles are recorded like any other style but are never
//! referenced by name.
//!
//! Clones of a style share its id, so a later encounter is checked against the
//! style as it was first registered: a different name, default flag or set of
//! properties is an error instead of a silently ignored change.

use super::element::XmlElement;
use super::emit::NamespaceSet;
use super::style::{Style, StyleFamily, StyleId};
use crate::common::{Error, Result};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
struct RegisteredStyle {
    name: String,
    /// The style as first registered
    style: Style,
    definition: Option<XmlElement>,
}

impl RegisteredStyle {
    fn is_default(&self) -> bool {
        self.style.is_default()
    }

    /// Check a later encounter of the same id against what was emitted
    fn check(&self, style: &Style) -> Result<()> {
        if let Some(current) = style.name()
            && current != self.name
        {
            return Err(Error::StaleStyle {
                id: self.style.id(),
                emitted: self.name.clone(),
                current: current.to_string(),
            });
        }
        if style.is_default() != self.style.is_default()
            || style.paragraph_properties() != self.style.paragraph_properties()
            || style.text_properties() != self.style.text_properties()
        {
            return Err(Error::ModifiedStyle {
                id: self.style.id(),
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Tracks which styles have been emitted and under which names.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    entries: Vec<RegisteredStyle>,
    by_id: HashMap<StyleId, usize>,
    /// Every name claimed so far, explicit or generated, with its owning style
    reserved: HashMap<String, StyleId>,
    default_families: HashSet<StyleFamily>,
    paragraph_counter: u32,
    text_counter: u32,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the explicit name of `style`, if it has one.
    ///
    /// Fails when a different style already claimed the same name.
    pub fn reserve(&mut self, style: &Style) -> Result<()> {
        let Some(name) = style.name() else {
            return Ok(());
        };
        match self.reserved.get(name) {
            Some(owner) if *owner != style.id() => Err(Error::DuplicateStyleName(name.to_string())),
            Some(_) => Ok(()),
            None => {
                self.reserved.insert(name.to_string(), style.id());
                Ok(())
            },
        }
    }

    /// Register `style`, materializing its definition on first sight.
    ///
    /// Returns the name elements must reference, or `None` for a default style.
    pub fn register(&mut self, style: &Style, ns: &mut NamespaceSet) -> Result<Option<String>> {
        if let Some(&index) = self.by_id.get(&style.id()) {
            let entry = &self.entries[index];
            entry.check(style)?;
            return Ok((!entry.is_default()).then(|| entry.name.clone()));
        }

        self.reserve(style)?;
        let name = match style.name() {
            Some(name) => name.to_string(),
            None => {
                let name = self.generate_name(style.family());
                self.reserved.insert(name.clone(), style.id());
                name
            },
        };

        let definition = if style.is_default() && !self.default_families.insert(style.family()) {
            warn!(
                "a default {} style is already defined; ignoring style {}",
                style.family().as_str(),
                style.id()
            );
            None
        } else {
            Some(style.to_definition(&name, ns))
        };

        debug!("registered style {} as '{}'", style.id(), name);
        self.by_id.insert(style.id(), self.entries.len());
        self.entries.push(RegisteredStyle {
            name: name.clone(),
            style: style.clone(),
            definition,
        });

        Ok((!style.is_default()).then_some(name))
    }

    fn generate_name(&mut self, family: StyleFamily) -> String {
        let counter = match family {
            StyleFamily::Paragraph => &mut self.paragraph_counter,
            StyleFamily::Text => &mut self.text_counter,
        };
        let mut buffer = itoa::Buffer::new();
        loop {
            *counter += 1;
            let candidate = format!("{}{}", family.name_prefix(), buffer.format(*counter));
            if !self.reserved.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    /// Name a registered style was emitted under
    pub fn name_of(&self, id: StyleId) -> Option<&str> {
        self.by_id
            .get(&id)
            .map(|&index| self.entries[index].name.as_str())
    }

    /// Number of distinct styles registered
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definitions of default styles, in registration order
    pub fn default_definitions(&self) -> impl Iterator<Item = &XmlElement> {
        self.entries
            .iter()
            .filter(|entry| entry.is_default())
            .filter_map(|entry| entry.definition.as_ref())
    }

    /// Definitions of named styles, in registration order
    pub fn named_definitions(&self) -> impl Iterator<Item = &XmlElement> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_default())
            .filter_map(|entry| entry.definition.as_ref())
    }
}
