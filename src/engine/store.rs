use crate::{
    engine::token::{Token, TokenKind},
    error::RuntimeError,
};

/// Named variable bindings, each holding a tokenized expression.
///
/// Bindings keep insertion order. Variables may reference other variables,
/// including ones bound later, but every write is verified to keep the whole
/// store acyclic; a write that would introduce a cycle is rolled back and
/// leaves the store exactly as it was.
///
/// # Example
/// ```
/// use mexpr::{engine::lexer, VariableStore};
///
/// let mut store = VariableStore::new();
/// store.set("radius", lexer::tokenize("2 + 1").unwrap()).unwrap();
/// assert!(store.contains("radius"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    bindings: Vec<(String, Vec<Token>)>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable to a tokenized expression, replacing any previous
    /// binding of the same name.
    ///
    /// # Errors
    /// - [`RuntimeError::InvalidVariableName`] when the name is not an ASCII
    ///   letter followed by ASCII letters and digits.
    /// - [`RuntimeError::CircularReference`] when the binding would make any
    ///   resolution chain in the store revisit a variable. The store is left
    ///   unchanged in that case.
    pub fn set(&mut self, name: &str, tokens: Vec<Token>) -> Result<(), RuntimeError> {
        if !is_valid_name(name) {
            return Err(RuntimeError::InvalidVariableName { name: name.to_string() });
        }

        // Tentative write, undone if the store turns cyclic.
        let previous = match self.bindings.iter_mut().find(|(bound, _)| bound == name) {
            Some((_, value)) => Some(std::mem::replace(value, tokens)),
            None => {
                self.bindings.push((name.to_string(), tokens));
                None
            },
        };

        if let Some(cyclic) = self.find_cycle() {
            match previous {
                Some(value) => {
                    if let Some((_, slot)) =
                        self.bindings.iter_mut().find(|(bound, _)| bound == name)
                    {
                        *slot = value;
                    }
                },
                None => {
                    self.bindings.pop();
                },
            }
            return Err(RuntimeError::CircularReference { name: cyclic });
        }

        Ok(())
    }

    /// Returns a copy of the tokens bound to a variable.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownVariable`] when the name is not bound.
    pub fn get(&self, name: &str) -> Result<Vec<Token>, RuntimeError> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, tokens)| tokens.clone())
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Removes a binding, reporting whether it existed. Removing a name
    /// other bindings still reference is allowed; the gap surfaces as
    /// [`RuntimeError::UnknownVariable`] at evaluation time.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|(bound, _)| bound != name);
        before != self.bindings.len()
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Whether a variable is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.iter().any(|(bound, _)| bound == name)
    }

    /// The number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the store holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Token])> {
        self.bindings
            .iter()
            .map(|(name, tokens)| (name.as_str(), tokens.as_slice()))
    }

    /// Searches the whole store for a resolution cycle, returning the first
    /// variable found on one.
    ///
    /// Walks variable references depth-first from every binding, carrying
    /// the path of names currently being expanded. References to unbound
    /// names are skipped; they are not cycles.
    fn find_cycle(&self) -> Option<String> {
        let mut path = Vec::new();

        for (name, _) in &self.bindings {
            if self.revisits(name, &mut path) {
                return Some(name.clone());
            }
        }

        None
    }

    fn revisits(&self, name: &str, path: &mut Vec<String>) -> bool {
        if path.iter().any(|seen| seen == name) {
            return true;
        }

        let Ok(tokens) = self.get(name) else {
            return false;
        };

        path.push(name.to_string());
        let found = tokens.iter()
                          .filter(|token| token.kind() == TokenKind::Variable)
                          .any(|token| self.revisits(token.value(), path));
        path.pop();

        found
    }
}

/// A valid name starts with an ASCII letter and continues with ASCII
/// letters and digits.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
