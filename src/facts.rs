use std::collections::HashMap;

use crate::value::Value;

/// A flat record of named scalar values.
pub type Fact = HashMap<String, Value>;

/// Evaluation input: one fact, or an ordered sequence of facts.
///
/// Comparisons always read a single fact. Against [`Facts::Many`] they only
/// see a fact once a `where` clause has bound one.
#[derive(Debug, Clone, PartialEq)]
pub enum Facts {
    Single(Fact),
    Many(Vec<Fact>),
}

impl Facts {
    pub fn len(&self) -> usize {
        match self {
            Facts::Single(_) => 1,
            Facts::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Fact> for Facts {
    fn from(fact: Fact) -> Self {
        Facts::Single(fact)
    }
}

impl From<Vec<Fact>> for Facts {
    fn from(records: Vec<Fact>) -> Self {
        Facts::Many(records)
    }
}

/// Builds a [`Fact`] from `(name, value)` pairs.
///
/// # Examples
///
/// ```
/// use factql::{fact, Value};
///
/// let f = fact([("a", Value::Integer(1)), ("b", Value::from("x"))]);
/// assert_eq!(f.get("a"), Some(&Value::Integer(1)));
/// ```
pub fn fact<K, V, I>(pairs: I) -> Fact
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
