//! The hobbit registry domain.
//!
//! A hobbit record has a database id, a first name and a last name. Each
//! field is checked against its own expression and the outcomes are folded
//! with a [`Chain`], so a bad record reports every rejected field at once.

use std::fmt;

use serde::Serialize;
use setwise_core::{Chain, Exclusion, Expr, Rejection, Rule, RuleError};

/// Names no hobbit may carry.
pub const VILLAINS: [&str; 4] = ["Sauron", "Saruman", "Gollum", "Smeagol"];

/// Exclusive upper bound for database ids.
pub const MAX_DB_ID: i64 = 2_000_000;

/// Rules and expressions for hobbit records.
#[derive(Debug, Clone)]
pub struct HobbitRules {
    pub db_id: Expr<i64>,
    pub name: Rule<String>,
    pub bad_name: Rule<String>,
    pub scottish_last_name: Rule<String>,
    pub jewish_last_name: Rule<String>,
    /// `Name & ~BadName`
    pub first_name: Expr<String>,
    /// `FirstName & (ScottishLastName | JewishLastName)`
    pub last_name: Expr<String>,
}

impl HobbitRules {
    /// Declare the domain.
    ///
    /// # Errors
    ///
    /// Fails only if one of the built-in patterns does not compile.
    pub fn new() -> Result<Self, RuleError> {
        let db_id = Rule::range("DbId", 0..MAX_DB_ID);
        let name = Rule::matching("Name", "^[A-Z][A-Za-z]+$")?;
        let bad_name: Rule<String> = Rule::one_of("BadName", VILLAINS);
        let scottish_last_name = Rule::matching("ScottishLastName", "^Ma?c[A-Z]")?;
        let jewish_last_name = Rule::matching("JewishLastName", "(berg|stein|man)$")?;

        let first_name = &name & !&bad_name;
        let last_name = &first_name & (&scottish_last_name | &jewish_last_name);

        Ok(Self {
            db_id: db_id.into(),
            name,
            bad_name,
            scottish_last_name,
            jewish_last_name,
            first_name,
            last_name,
        })
    }

    /// Every named rule and expression with its textual form.
    pub fn listing(&self) -> Vec<(&'static str, String)> {
        vec![
            ("DbId", self.db_id.describe()),
            ("Name", self.name.to_string()),
            ("BadName", self.bad_name.to_string()),
            ("ScottishLastName", self.scottish_last_name.to_string()),
            ("JewishLastName", self.jewish_last_name.to_string()),
            ("FirstName", self.first_name.describe()),
            ("LastName", self.last_name.describe()),
        ]
    }
}

/// A hobbit whose every field passed its check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hobbit {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Hobbit {
    /// Check all three fields and build the record.
    ///
    /// # Errors
    ///
    /// Returns every rejected field, in field order.
    pub fn validate(
        rules: &HobbitRules,
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, Vec<HobbitError>> {
        Chain::start(rules.db_id.might_describe(id).map_err(HobbitError::from))
            .then(rules.first_name.might_describe(first_name.into()))
            .then(rules.last_name.might_describe(last_name.into()))
            .map(|(id, first_name, last_name)| Self {
                id: id.into_inner(),
                first_name: first_name.into_inner(),
                last_name: last_name.into_inner(),
            })
    }
}

impl fmt::Display for Hobbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}", self.id, self.first_name, self.last_name)
    }
}

/// A rejected hobbit field.
#[derive(Debug, Clone, PartialEq)]
pub enum HobbitError {
    /// The database id was rejected.
    Id(Exclusion<i64>),
    /// A first or last name was rejected.
    Name(Exclusion<String>),
}

impl From<Exclusion<i64>> for HobbitError {
    fn from(exclusion: Exclusion<i64>) -> Self {
        Self::Id(exclusion)
    }
}

impl From<Exclusion<String>> for HobbitError {
    fn from(exclusion: Exclusion<String>) -> Self {
        Self::Name(exclusion)
    }
}

impl HobbitError {
    /// Record field the rejected value was supplied for.
    pub fn field(&self, rules: &HobbitRules) -> &'static str {
        match self {
            Self::Id(_) => "id",
            Self::Name(exclusion) if exclusion.expression() == &rules.last_name => "last_name",
            Self::Name(_) => "first_name",
        }
    }

    /// Human-readable explanation.
    pub fn message(&self, rules: &HobbitRules) -> String {
        match self {
            Self::Id(exclusion) => format!(
                "{} is not a database id (expected 0 to {})",
                exclusion.value(),
                MAX_DB_ID - 1
            ),
            Self::Name(exclusion) => {
                let value = exclusion.value();
                let failing: Vec<&str> = exclusion
                    .failing_rules()
                    .into_iter()
                    .map(Rule::id)
                    .collect();
                if failing.contains(&rules.bad_name.id()) {
                    format!("{value} is a villain, not a hobbit")
                } else if failing.contains(&rules.name.id()) {
                    format!("{value:?} is not a capitalised name")
                } else if exclusion.expression() == &rules.last_name {
                    format!("{value} is neither a Scottish nor a Jewish last name")
                } else {
                    format!("{value} is not an acceptable first name")
                }
            }
        }
    }

    /// Flatten for reporting, labelled with the field name.
    pub fn to_rejection(&self, rules: &HobbitRules) -> Rejection {
        let rejection = match self {
            Self::Id(exclusion) => Rejection::from(exclusion),
            Self::Name(exclusion) => Rejection::from(exclusion),
        };
        rejection.for_field(self.field(rules))
    }
}
