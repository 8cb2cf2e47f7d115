use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Operators that may appear in a filter string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    Equals,
    NotEquals,
    Like,
    IsNull,
    IsNotNull,
    In,
    And,
    Or,
    Not,
}

impl Operator {
    pub const ALL: [Operator; 13] = [
        Operator::LessThan,
        Operator::GreaterThan,
        Operator::LessThanOrEqual,
        Operator::GreaterThanOrEqual,
        Operator::Equals,
        Operator::NotEquals,
        Operator::Like,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::In,
        Operator::And,
        Operator::Or,
        Operator::Not,
    ];

    /// Maps an `o<n>` code.
    pub fn from_comparison_code(code: i32) -> Option<Operator> {
        match code {
            1 => Some(Operator::LessThan),
            2 => Some(Operator::GreaterThan),
            3 => Some(Operator::LessThanOrEqual),
            4 => Some(Operator::GreaterThanOrEqual),
            5 => Some(Operator::Equals),
            6 => Some(Operator::NotEquals),
            7 => Some(Operator::Like),
            8 => Some(Operator::IsNull),
            9 => Some(Operator::IsNotNull),
            10 => Some(Operator::In),
            _ => None,
        }
    }

    /// Maps an `l<n>` code.
    pub fn from_logical_code(code: i32) -> Option<Operator> {
        match code {
            0 => Some(Operator::And),
            1 => Some(Operator::Or),
            2 => Some(Operator::Not),
            _ => None,
        }
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::And | Operator::Or | Operator::Not)
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::IsNull | Operator::IsNotNull | Operator::Not)
    }

    /// The operator obtained by swapping the two operands.
    pub fn positional_inverse(&self) -> Operator {
        match self {
            Operator::LessThan => Operator::GreaterThan,
            Operator::GreaterThan => Operator::LessThan,
            Operator::LessThanOrEqual => Operator::GreaterThanOrEqual,
            Operator::GreaterThanOrEqual => Operator::LessThanOrEqual,
            other => *other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::LessThan => "LESS_THAN",
            Operator::GreaterThan => "GREATER_THAN",
            Operator::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            Operator::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            Operator::Equals => "EQUALS",
            Operator::NotEquals => "NOT_EQUALS",
            Operator::Like => "LIKE",
            Operator::IsNull => "IS_NULL",
            Operator::IsNotNull => "IS_NOT_NULL",
            Operator::In => "IN",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        }
    }

    pub fn flag(&self) -> OperatorSet {
        match self {
            Operator::LessThan => OperatorSet::LESS_THAN,
            Operator::GreaterThan => OperatorSet::GREATER_THAN,
            Operator::LessThanOrEqual => OperatorSet::LESS_THAN_OR_EQUAL,
            Operator::GreaterThanOrEqual => OperatorSet::GREATER_THAN_OR_EQUAL,
            Operator::Equals => OperatorSet::EQUALS,
            Operator::NotEquals => OperatorSet::NOT_EQUALS,
            Operator::Like => OperatorSet::LIKE,
            Operator::IsNull => OperatorSet::IS_NULL,
            Operator::IsNotNull => OperatorSet::IS_NOT_NULL,
            Operator::In => OperatorSet::IN,
            Operator::And => OperatorSet::AND,
            Operator::Or => OperatorSet::OR,
            Operator::Not => OperatorSet::NOT,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Equals => "=",
            Operator::NotEquals => "<>",
            Operator::Like => "LIKE",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::In => "IN",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        };
        f.write_str(symbol)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OperatorSet: u16 {
        const LESS_THAN             = 1 << 0;
        const GREATER_THAN          = 1 << 1;
        const LESS_THAN_OR_EQUAL    = 1 << 2;
        const GREATER_THAN_OR_EQUAL = 1 << 3;
        const EQUALS                = 1 << 4;
        const NOT_EQUALS            = 1 << 5;
        const LIKE                  = 1 << 6;
        const IS_NULL               = 1 << 7;
        const IS_NOT_NULL           = 1 << 8;
        const IN                    = 1 << 9;
        const AND                   = 1 << 10;
        const OR                    = 1 << 11;
        const NOT                   = 1 << 12;
    }
}

impl OperatorSet {
    /// `<`, `>`, `<=`, `>=`, `=` and `<>`.
    pub const fn comparisons() -> Self {
        Self::LESS_THAN
            .union(Self::GREATER_THAN)
            .union(Self::LESS_THAN_OR_EQUAL)
            .union(Self::GREATER_THAN_OR_EQUAL)
            .union(Self::EQUALS)
            .union(Self::NOT_EQUALS)
    }

    pub const fn logical() -> Self {
        Self::AND.union(Self::OR).union(Self::NOT)
    }

    pub const fn null_checks() -> Self {
        Self::IS_NULL.union(Self::IS_NOT_NULL)
    }

    pub fn contains_operator(&self, operator: Operator) -> bool {
        self.contains(operator.flag())
    }

    pub fn operators(&self) -> impl Iterator<Item = Operator> + '_ {
        Operator::ALL
            .into_iter()
            .filter(move |operator| self.contains_operator(*operator))
    }
}

impl FromIterator<Operator> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
        iter.into_iter()
            .fold(OperatorSet::empty(), |set, operator| set | operator.flag())
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.operators().map(|operator| operator.name()).collect();
        write!(f, "{}", names.join(" | "))
    }
}

impl Serialize for OperatorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.operators())
    }
}

impl<'de> Deserialize<'de> for OperatorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let operators = Vec::<Operator>::deserialize(deserializer)?;
        Ok(operators.into_iter().collect())
    }
}
