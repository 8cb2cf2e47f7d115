use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Less,
    LessOrEqual,
    Equal,
    NotEqual,
    GreaterOrEqual,
    Greater,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompareOp::Less => "LESS",
            CompareOp::LessOrEqual => "LESS_OR_EQUAL",
            CompareOp::Equal => "EQUAL",
            CompareOp::NotEqual => "NOT_EQUAL",
            CompareOp::GreaterOrEqual => "GREATER_OR_EQUAL",
            CompareOp::Greater => "GREATER",
        };
        f.write_str(name)
    }
}

/// How a cell value is compared with the constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparator {
    /// Lexicographic byte comparison.
    Binary(Vec<u8>),
    Integer(i64),
    Float(f32),
    Double(f64),
    Null,
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Binary(bytes) => write!(f, "binary:{}", String::from_utf8_lossy(bytes)),
            Comparator::Integer(value) => write!(f, "integer:{value}"),
            Comparator::Float(value) => write!(f, "float:{value:?}"),
            Comparator::Double(value) => write!(f, "double:{value:?}"),
            Comparator::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    MustPassAll,
    MustPassOne,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanFilter {
    SingleColumnValue {
        family: String,
        qualifier: String,
        op: CompareOp,
        comparator: Comparator,
    },
    RowKey {
        op: CompareOp,
        comparator: Comparator,
    },
    List {
        kind: ListKind,
        filters: Vec<ScanFilter>,
    },
}

impl fmt::Display for ScanFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanFilter::SingleColumnValue {
                family,
                qualifier,
                op,
                comparator,
            } => write!(f, "{family}:{qualifier} {op} {comparator}"),
            ScanFilter::RowKey { op, comparator } => write!(f, "ROW {op} {comparator}"),
            ScanFilter::List { kind, filters } => {
                let join = match kind {
                    ListKind::MustPassAll => " AND ",
                    ListKind::MustPassOne => " OR ",
                };
                let filters = filters.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "({})", filters.join(join))
            }
        }
    }
}

/// Row key bounds of a scan. A missing bound leaves that end open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRange {
    start_key: Option<Vec<u8>>,
    end_key: Option<Vec<u8>>,
}

impl ScanRange {
    /// Inclusive lower bound.
    pub fn start_key(&self) -> Option<&[u8]> {
        self.start_key.as_deref()
    }

    /// Exclusive upper bound.
    pub fn end_key(&self) -> Option<&[u8]> {
        self.end_key.as_deref()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_key.is_none() && self.end_key.is_none()
    }

    /// Only the first assignment is kept.
    pub(crate) fn set_start(&mut self, key: Vec<u8>) {
        self.start_key.get_or_insert(key);
    }

    /// Only the first assignment is kept.
    pub(crate) fn set_end(&mut self, key: Vec<u8>) {
        self.end_key.get_or_insert(key);
    }
}

/// Server-side filter plus the row range to scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPlan {
    pub filter: Option<ScanFilter>,
    pub range: ScanRange,
}
