//! Postfix filter-string parser.
//!
//! The filter string is a sequence of tokens read left to right:
//!
//! * `a<n>` column reference (zero-based)
//! * `c<oid>s<len>d<bytes>` typed constant
//! * `m<oid>s<len>d<bytes>[s<len>d<bytes>...]` list constant
//! * `o<n>` comparison operator, `l<n>` logical operator
//!
//! Operands are pushed on a stack and operators pop their arguments. A
//! well-formed string leaves exactly one result on the stack.

pub mod builder;


use crate::{
    ast::{CollectionOperand, ColumnIndexOperand, Node, Operand, Operator, ScalarOperand},
    error::{FilterError, FilterSyntaxError},
    types::DataType,
};
use builder::{FilterBuilder, Term, TreeBuilder};
use tracing::debug;

pub fn parse(filter: &str) -> Result<Node, FilterSyntaxError> {
    FilterParser::new(filter).parse()
}

/// Single-use parser state for one filter string.
#[derive(Debug)]
pub struct FilterParser<'a> {
    filter: &'a str,
    bytes: &'a [u8],
    index: usize,
}

impl<'a> FilterParser<'a> {
    pub fn new(filter: &'a str) -> Self {
        Self {
            filter,
            bytes: filter.as_bytes(),
            index: 0,
        }
    }

    pub fn parse(self) -> Result<Node, FilterSyntaxError> {
        let filter = self.filter;
        match self.parse_with(&mut TreeBuilder) {
            Ok(node) => Ok(node),
            Err(FilterError::Syntax(err)) => Err(err),
            Err(FilterError::Build(err)) => Err(FilterSyntaxError::new(err.to_string(), None, filter)),
        }
    }

    /// Runs the grammar, reducing each operator through `builder`.
    pub fn parse_with<B: FilterBuilder>(mut self, builder: &mut B) -> Result<B::Output, FilterError> {
        match self.run(builder) {
            Ok(output) => {
                debug!(filter = self.filter, "Parsed filter string");
                Ok(output)
            }
            Err(err) => {
                if let FilterError::Syntax(syntax) = &err {
                    debug!(index = ?syntax.index(), "Failed to parse {}", syntax.with_context());
                } else {
                    debug!(filter = self.filter, "Builder rejected filter string: {err}");
                }
                Err(err)
            }
        }
    }

    fn run<B: FilterBuilder>(&mut self, builder: &mut B) -> Result<B::Output, FilterError> {
        let mut stack: Vec<Term<B::Output>> = Vec::new();
        let mut reduced = false;

        while let Some(opcode) = self.peek() {
            let start = self.index;
            self.index += 1;
            match opcode {
                b'a' => {
                    let column = self.parse_column()?;
                    stack.push(Term::Operand(Operand::Column(column)));
                }
                b'c' => {
                    let scalar = self.parse_scalar()?;
                    stack.push(Term::Operand(Operand::Scalar(scalar)));
                }
                b'm' => {
                    let list = self.parse_list()?;
                    stack.push(Term::Operand(Operand::List(list)));
                }
                b'o' => {
                    let code = self.parse_int()?;
                    let operator = Operator::from_comparison_code(code)
                        .ok_or_else(|| self.error_at("unknown op ending at", self.index))?;
                    let built = self.reduce(operator, &mut stack, builder)?;
                    stack.push(Term::Built(built));
                    reduced = true;
                }
                b'l' => {
                    let code = self.parse_int()?;
                    let operator = Operator::from_logical_code(code)
                        .ok_or_else(|| self.error_at("unknown op ending at", self.index))?;
                    let built = self.reduce(operator, &mut stack, builder)?;
                    stack.push(Term::Built(built));
                    reduced = true;
                }
                other => {
                    let opcode = self
                        .filter
                        .get(start..)
                        .and_then(|rest| rest.chars().next())
                        .unwrap_or(char::from(other));
                    let message = format!("unknown opcode {opcode}({}) at", u32::from(opcode));
                    return Err(self.error_at(&message, start).into());
                }
            }
        }

        if stack.is_empty() {
            return Err(self.error("filter parsing ended with no result", None).into());
        }
        if stack.len() > 1 {
            return Err(self.error("Stack not empty, missing operators?", None).into());
        }
        match stack.pop() {
            Some(Term::Built(output)) if reduced => Ok(output),
            _ => Err(self.error("filter parsing failed, missing operators?", None).into()),
        }
    }

    fn reduce<B: FilterBuilder>(
        &self,
        operator: Operator,
        stack: &mut Vec<Term<B::Output>>,
        builder: &mut B,
    ) -> Result<B::Output, FilterError> {
        if operator.is_unary() {
            let operand = stack.pop().ok_or_else(|| self.missing_operands(operator))?;
            return Ok(builder.build_unary(operator, operand)?);
        }

        if stack.len() < 2 {
            return Err(self.missing_operands(operator).into());
        }
        let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
            return Err(self.missing_operands(operator).into());
        };

        // Canonical form keeps the column on the left.
        let (operator, left, right) = if right.is_column() && !left.is_column() {
            (operator.positional_inverse(), right, left)
        } else {
            (operator, left, right)
        };
        Ok(builder.build_binary(operator, left, right)?)
    }

    fn parse_column(&mut self) -> Result<ColumnIndexOperand, FilterSyntaxError> {
        let index = self.parse_int()?;
        ColumnIndexOperand::new(index).ok_or_else(|| {
            self.error_at(&format!("column index {index} is negative ending at"), self.index)
        })
    }

    fn parse_scalar(&mut self) -> Result<ScalarOperand, FilterSyntaxError> {
        let data_type = self.parse_data_type()?;

        self.expect_byte(b's', "data length delimiter 's' expected at")?;
        let length = self.parse_length()?;
        self.check_remaining(length)?;
        self.expect_byte(b'd', "data delimiter 'd' expected at")?;
        self.check_remaining(length)?;

        let start = self.index;
        let value = self.take_payload(length)?;
        if let Some(kind) = data_type.numeric_kind() {
            if !kind.accepts(&value) {
                return Err(self.error_at("failed to parse number data type starting at", start));
            }
        }
        Ok(ScalarOperand::new(data_type, value))
    }

    fn parse_list(&mut self) -> Result<CollectionOperand, FilterSyntaxError> {
        let data_type = self.parse_data_type()?;
        if !data_type.is_array() {
            return Err(self.error(
                format!(
                    "expected non-scalar datatype, but got datatype with oid = {}",
                    data_type.oid()
                ),
                Some(self.index),
            ));
        }
        if self.peek() != Some(b's') {
            return Err(self.error_at("data length delimiter 's' expected at", self.index));
        }

        let mut values = Vec::new();
        while self.peek() == Some(b's') {
            self.index += 1;
            if self.peek().is_none() {
                return Err(self.shorter_than_expected());
            }
            let length = self.parse_length()?;
            match self.peek() {
                Some(b'd') => self.index += 1,
                Some(_) => return Err(self.error_at("data delimiter 'd' expected at", self.index)),
                None => return Err(self.shorter_than_expected()),
            }
            if self.index + length > self.bytes.len() {
                return Err(self.shorter_than_expected());
            }
            values.push(self.take_payload(length)?);
        }

        CollectionOperand::new(data_type, values)
            .ok_or_else(|| self.error_at("invalid DataType OID at", self.index))
    }

    fn parse_data_type(&mut self) -> Result<DataType, FilterSyntaxError> {
        let oid = self.parse_int()?;
        let last = self.index.saturating_sub(1);
        DataType::from_oid(oid).ok_or_else(|| self.error_at("invalid DataType OID at", last))
    }

    fn parse_length(&mut self) -> Result<usize, FilterSyntaxError> {
        let length = self.parse_int()?;
        usize::try_from(length).map_err(|_| {
            self.error_at(&format!("data length {length} is negative ending at"), self.index)
        })
    }

    /// Reads `-?[0-9]+` and narrows it to `i32`.
    fn parse_int(&mut self) -> Result<i32, FilterSyntaxError> {
        let start = self.index;
        let mut end = start;
        if self.bytes.get(end) == Some(&b'-') {
            end += 1;
        }
        let digits = end;
        while self.bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end == digits {
            return Err(self.error_at("numeric argument expected at", digits));
        }

        let literal = String::from_utf8_lossy(&self.bytes[start..end]);
        let value: i64 = literal.parse().map_err(|_| {
            self.error(format!("invalid numeric argument {literal}"), Some(start))
        })?;
        self.index = end;

        i32::try_from(value).map_err(|_| {
            self.error(
                format!("value {literal} larger than intmax ending at {end}"),
                Some(end),
            )
        })
    }

    fn take_payload(&mut self, length: usize) -> Result<String, FilterSyntaxError> {
        let start = self.index;
        let end = start + length;
        let payload = self
            .bytes
            .get(start..end)
            .ok_or_else(|| self.shorter_than_expected())?;
        let value = std::str::from_utf8(payload)
            .map_err(|_| self.error_at("data is not valid UTF-8 starting at", start))?
            .to_string();
        self.index = end;
        Ok(value)
    }

    fn check_remaining(&self, length: usize) -> Result<(), FilterSyntaxError> {
        if self.index + length > self.bytes.len() {
            return Err(self.error_at("data size larger than filter string starting at", self.index));
        }
        Ok(())
    }

    fn expect_byte(&mut self, expected: u8, message: &str) -> Result<(), FilterSyntaxError> {
        if self.peek() != Some(expected) {
            return Err(self.error_at(message, self.index));
        }
        self.index += 1;
        Ok(())
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.index).copied()
    }

    fn missing_operands(&self, operator: Operator) -> FilterSyntaxError {
        self.error_at(
            &format!("missing operands for op {} at", operator.name()),
            self.index,
        )
    }

    fn shorter_than_expected(&self) -> FilterSyntaxError {
        self.error("filter string is shorter than expected", Some(self.index))
    }

    fn error_at(&self, message: &str, index: usize) -> FilterSyntaxError {
        self.error(format!("{message} {index}"), Some(index))
    }

    fn error(&self, message: impl Into<String>, index: Option<usize>) -> FilterSyntaxError {
        FilterSyntaxError::new(message, index, self.filter)
    }
}
