//! Filter compiler for conference search.
//!
//! Turns user-supplied `(field, operator, value)` triples into a validated
//! [`QueryPlan`]. Fields and operators come from a fixed allow-list. At most
//! one field may carry inequality operators, and when one does the results
//! are ordered by that field before the name.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use super::Conference;

/// Errors raised while compiling a filter list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Filter contains invalid field or operator.")]
    InvalidFieldOrOperator,

    #[error("Inequality filter is allowed on only one field.")]
    MultipleInequalityFields,

    #[error("Filter value '{value}' for {field} must be an integer.")]
    InvalidValue { field: String, value: String },
}

/// Searchable conference properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    City,
    Topic,
    Month,
    MaxAttendees,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::City,
        FilterField::Topic,
        FilterField::Month,
        FilterField::MaxAttendees,
    ];

    /// Stored property name the field maps to.
    pub fn property(&self) -> &'static str {
        match self {
            FilterField::City => "city",
            FilterField::Topic => "topics",
            FilterField::Month => "month",
            FilterField::MaxAttendees => "maxAttendees",
        }
    }

    /// Wire name accepted from clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::City => "CITY",
            FilterField::Topic => "TOPIC",
            FilterField::Month => "MONTH",
            FilterField::MaxAttendees => "MAX_ATTENDEES",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FilterField::Month | FilterField::MaxAttendees)
    }
}

impl FromStr for FilterField {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(FilterError::InvalidFieldOrOperator)
    }
}

/// Comparison operators accepted in filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Eq,
    Gt,
    Gteq,
    Lt,
    Lteq,
    Ne,
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 6] = [
        FilterOperator::Eq,
        FilterOperator::Gt,
        FilterOperator::Gteq,
        FilterOperator::Lt,
        FilterOperator::Lteq,
        FilterOperator::Ne,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "EQ",
            FilterOperator::Gt => "GT",
            FilterOperator::Gteq => "GTEQ",
            FilterOperator::Lt => "LT",
            FilterOperator::Lteq => "LTEQ",
            FilterOperator::Ne => "NE",
        }
    }

    /// SQL comparison symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Gt => ">",
            FilterOperator::Gteq => ">=",
            FilterOperator::Lt => "<",
            FilterOperator::Lteq => "<=",
            FilterOperator::Ne => "!=",
        }
    }

    pub fn is_inequality(&self) -> bool {
        !matches!(self, FilterOperator::Eq)
    }

    /// Evaluates `lhs <op> rhs`.
    pub fn compare<T: Ord + ?Sized>(&self, lhs: &T, rhs: &T) -> bool {
        let ord = lhs.cmp(rhs);
        match self {
            FilterOperator::Eq => ord == Ordering::Equal,
            FilterOperator::Gt => ord == Ordering::Greater,
            FilterOperator::Gteq => ord != Ordering::Less,
            FilterOperator::Lt => ord == Ordering::Less,
            FilterOperator::Lteq => ord != Ordering::Greater,
            FilterOperator::Ne => ord != Ordering::Equal,
        }
    }
}

impl FromStr for FilterOperator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or(FilterError::InvalidFieldOrOperator)
    }
}

/// Typed right-hand side of a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Integer(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub field: FilterField,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl FilterClause {
    /// Builds a clause from raw wire strings.
    ///
    /// Numeric fields must carry an integer value.
    pub fn parse(field: &str, operator: &str, value: &str) -> Result<Self, FilterError> {
        let field = FilterField::from_str(field)?;
        let operator = FilterOperator::from_str(operator)?;
        let value = if field.is_numeric() {
            value
                .trim()
                .parse::<i64>()
                .map(FilterValue::Integer)
                .map_err(|_| FilterError::InvalidValue {
                    field: field.property().to_string(),
                    value: value.to_string(),
                })?
        } else {
            FilterValue::Text(value.to_string())
        };
        Ok(Self {
            field,
            operator,
            value,
        })
    }

    pub fn matches(&self, conference: &Conference) -> bool {
        let op = self.operator;
        match (&self.field, &self.value) {
            (FilterField::City, FilterValue::Text(v)) => {
                op.compare(conference.city.as_str(), v.as_str())
            }
            (FilterField::Topic, FilterValue::Text(v)) => conference
                .topics
                .iter()
                .any(|topic| op.compare(topic.as_str(), v.as_str())),
            (FilterField::Month, FilterValue::Integer(v)) => {
                op.compare(&(conference.month as i64), v)
            }
            (FilterField::MaxAttendees, FilterValue::Integer(v)) => {
                op.compare(&(conference.max_attendees as i64), v)
            }
            // `parse` never pairs a field with the other value kind.
            _ => false,
        }
    }
}

/// Validated, ordered conference query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPlan {
    clauses: Vec<FilterClause>,
    inequality_field: Option<FilterField>,
}

impl QueryPlan {
    /// Plan with no filters: every conference, ordered by name.
    pub fn all() -> Self {
        Self::default()
    }

    /// Compiles raw `(field, operator, value)` triples in order.
    ///
    /// The first failing clause decides the error.
    pub fn compile<'a, I>(filters: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut plan = Self::default();
        for (field, operator, value) in filters {
            plan.push(FilterClause::parse(field, operator, value)?)?;
        }
        Ok(plan)
    }

    /// Adds an already-parsed clause, enforcing the single inequality field rule.
    pub fn push(&mut self, clause: FilterClause) -> Result<(), FilterError> {
        if clause.operator.is_inequality() {
            match self.inequality_field {
                Some(existing) if existing != clause.field => {
                    return Err(FilterError::MultipleInequalityFields)
                }
                _ => self.inequality_field = Some(clause.field),
            }
        }
        self.clauses.push(clause);
        Ok(())
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    /// The field carrying inequality operators, if any. Results sort on it first.
    pub fn inequality_field(&self) -> Option<FilterField> {
        self.inequality_field
    }

    pub fn matches(&self, conference: &Conference) -> bool {
        self.clauses.iter().all(|clause| clause.matches(conference))
    }

    /// Orders by the inequality field (if any), then by name.
    pub fn sort(&self, conferences: &mut [Conference]) {
        let primary = self.inequality_field;
        conferences.sort_by(|a, b| {
            let by_field = match primary {
                Some(field) => compare_on(field, a, b),
                None => Ordering::Equal,
            };
            by_field.then_with(|| a.name.cmp(&b.name))
        });
    }
}

fn compare_on(field: FilterField, a: &Conference, b: &Conference) -> Ordering {
    match field {
        FilterField::City => a.city.cmp(&b.city),
        // Repeated properties sort ascending on their smallest element.
        FilterField::Topic => a.topics.iter().min().cmp(&b.topics.iter().min()),
        FilterField::Month => a.month.cmp(&b.month),
        FilterField::MaxAttendees => a.max_attendees.cmp(&b.max_attendees),
    }
}
