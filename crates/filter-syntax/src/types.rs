use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// PostgreSQL type OIDs that may appear in a filter string or a column descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Boolean,
    Bytea,
    Bigint,
    Smallint,
    Integer,
    Text,
    Json,
    Real,
    Float8,
    BoolArray,
    ByteaArray,
    Int2Array,
    Int4Array,
    TextArray,
    BpcharArray,
    VarcharArray,
    Int8Array,
    Float4Array,
    Float8Array,
    Bpchar,
    Varchar,
    Date,
    Time,
    Timestamp,
    TimestampArray,
    DateArray,
    TimestampWithTimeZone,
    NumericArray,
    Numeric,
    Uuid,
    UuidArray,
    Jsonb,
    Unsupported,
}

/// Integer width a numeric constant must fit at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Int16,
    Int32,
    Int64,
}

impl NumericKind {
    pub fn accepts(&self, literal: &str) -> bool {
        match self {
            NumericKind::Int16 => literal.parse::<i16>().is_ok(),
            NumericKind::Int32 => literal.parse::<i32>().is_ok(),
            NumericKind::Int64 => literal.parse::<i64>().is_ok(),
        }
    }
}

lazy_static! {
    static ref OID_MAP: HashMap<i32, DataType> = DataType::KNOWN
        .iter()
        .map(|data_type| (data_type.oid(), *data_type))
        .collect();
}

impl DataType {
    /// Every catalogued type, `Unsupported` excluded.
    pub const KNOWN: [DataType; 32] = [
        DataType::Boolean,
        DataType::Bytea,
        DataType::Bigint,
        DataType::Smallint,
        DataType::Integer,
        DataType::Text,
        DataType::Json,
        DataType::Real,
        DataType::Float8,
        DataType::BoolArray,
        DataType::ByteaArray,
        DataType::Int2Array,
        DataType::Int4Array,
        DataType::TextArray,
        DataType::BpcharArray,
        DataType::VarcharArray,
        DataType::Int8Array,
        DataType::Float4Array,
        DataType::Float8Array,
        DataType::Bpchar,
        DataType::Varchar,
        DataType::Date,
        DataType::Time,
        DataType::Timestamp,
        DataType::TimestampArray,
        DataType::DateArray,
        DataType::TimestampWithTimeZone,
        DataType::NumericArray,
        DataType::Numeric,
        DataType::Uuid,
        DataType::UuidArray,
        DataType::Jsonb,
    ];

    pub fn from_oid(oid: i32) -> Option<DataType> {
        OID_MAP.get(&oid).copied()
    }

    pub fn from_oid_or_unsupported(oid: i32) -> DataType {
        Self::from_oid(oid).unwrap_or(DataType::Unsupported)
    }

    /// The type OID. `Unsupported` reports -1.
    pub fn oid(&self) -> i32 {
        match self {
            DataType::Boolean => 16,
            DataType::Bytea => 17,
            DataType::Bigint => 20,
            DataType::Smallint => 21,
            DataType::Integer => 23,
            DataType::Text => 25,
            DataType::Json => 114,
            DataType::Real => 700,
            DataType::Float8 => 701,
            DataType::BoolArray => 1000,
            DataType::ByteaArray => 1001,
            DataType::Int2Array => 1005,
            DataType::Int4Array => 1007,
            DataType::TextArray => 1009,
            DataType::BpcharArray => 1014,
            DataType::VarcharArray => 1015,
            DataType::Int8Array => 1016,
            DataType::Float4Array => 1021,
            DataType::Float8Array => 1022,
            DataType::Bpchar => 1042,
            DataType::Varchar => 1043,
            DataType::Date => 1082,
            DataType::Time => 1083,
            DataType::Timestamp => 1114,
            DataType::TimestampArray => 1115,
            DataType::DateArray => 1182,
            DataType::TimestampWithTimeZone => 1184,
            DataType::NumericArray => 1231,
            DataType::Numeric => 1700,
            DataType::Uuid => 2950,
            DataType::UuidArray => 2951,
            DataType::Jsonb => 3802,
            DataType::Unsupported => -1,
        }
    }

    pub fn is_array(&self) -> bool {
        self.element_type().is_some()
    }

    pub fn element_type(&self) -> Option<DataType> {
        match self {
            DataType::BoolArray => Some(DataType::Boolean),
            DataType::ByteaArray => Some(DataType::Bytea),
            DataType::Int2Array => Some(DataType::Smallint),
            DataType::Int4Array => Some(DataType::Integer),
            DataType::TextArray => Some(DataType::Text),
            DataType::BpcharArray => Some(DataType::Bpchar),
            DataType::VarcharArray => Some(DataType::Varchar),
            DataType::Int8Array => Some(DataType::Bigint),
            DataType::Float4Array => Some(DataType::Real),
            DataType::Float8Array => Some(DataType::Float8),
            DataType::TimestampArray => Some(DataType::Timestamp),
            DataType::DateArray => Some(DataType::Date),
            DataType::NumericArray => Some(DataType::Numeric),
            DataType::UuidArray => Some(DataType::Uuid),
            _ => None,
        }
    }

    /// Parse-time check applied to constants of this type, if any.
    pub fn numeric_kind(&self) -> Option<NumericKind> {
        match self {
            DataType::Smallint => Some(NumericKind::Int16),
            DataType::Integer => Some(NumericKind::Int32),
            DataType::Bigint => Some(NumericKind::Int64),
            _ => None,
        }
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, DataType::Text | DataType::Varchar | DataType::Bpchar)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Boolean => "BOOLEAN",
            DataType::Bytea => "BYTEA",
            DataType::Bigint => "BIGINT",
            DataType::Smallint => "SMALLINT",
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
            DataType::Json => "JSON",
            DataType::Real => "REAL",
            DataType::Float8 => "FLOAT8",
            DataType::BoolArray => "BOOL_ARRAY",
            DataType::ByteaArray => "BYTEA_ARRAY",
            DataType::Int2Array => "INT2_ARRAY",
            DataType::Int4Array => "INT4_ARRAY",
            DataType::TextArray => "TEXT_ARRAY",
            DataType::BpcharArray => "BPCHAR_ARRAY",
            DataType::VarcharArray => "VARCHAR_ARRAY",
            DataType::Int8Array => "INT8_ARRAY",
            DataType::Float4Array => "FLOAT4_ARRAY",
            DataType::Float8Array => "FLOAT8_ARRAY",
            DataType::Bpchar => "BPCHAR",
            DataType::Varchar => "VARCHAR",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::Timestamp => "TIMESTAMP",
            DataType::TimestampArray => "TIMESTAMP_ARRAY",
            DataType::DateArray => "DATE_ARRAY",
            DataType::TimestampWithTimeZone => "TIMESTAMP_WITH_TIME_ZONE",
            DataType::NumericArray => "NUMERIC_ARRAY",
            DataType::Numeric => "NUMERIC",
            DataType::Uuid => "UUID",
            DataType::UuidArray => "UUID_ARRAY",
            DataType::Jsonb => "JSONB",
            DataType::Unsupported => "UNSUPPORTED",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
