//! Line tokenizer for the positional model file

use std::io::BufRead;
use std::str::FromStr;

use crate::error::ParseError;

/// Tabs and commas separate fields like spaces; `!` starts a comment.
pub(crate) fn strip_comment(line: &str) -> String {
    let content = match line.find('!') {
        Some(index) => &line[..index],
        None => line,
    };
    content.replace(['\t', ','], " ")
}

/// One non-blank line split into fields
#[derive(Debug)]
pub(crate) struct Record {
    line: usize,
    name: &'static str,
    fields: Vec<String>,
}

impl Record {
    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    pub(crate) fn field(&self, index: usize) -> Result<&str, ParseError> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(ParseError::MissingField {
                line: self.line,
                record: self.name,
                index,
            })
    }

    /// Parse a field as any numeric type
    pub(crate) fn number<T: FromStr>(&self, index: usize) -> Result<T, ParseError> {
        let token = self.field(index)?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            line: self.line,
            record: self.name,
            index,
            token: token.to_string(),
        })
    }

    /// Parse `N` consecutive fields starting at `first`
    pub(crate) fn numbers<T: FromStr + Copy + Default, const N: usize>(
        &self,
        first: usize,
    ) -> Result<[T; N], ParseError> {
        let mut values = [T::default(); N];
        for (offset, value) in values.iter_mut().enumerate() {
            *value = self.number(first + offset)?;
        }
        Ok(values)
    }
}

/// Yields the significant lines of a model file as records
pub(crate) struct RecordReader<R> {
    input: R,
    line: usize,
    buffer: String,
}

impl<R: BufRead> RecordReader<R> {
    pub(crate) fn new(input: R) -> Self {
        Self {
            input,
            line: 0,
            buffer: String::new(),
        }
    }

    /// Next line with at least one field, labelled for error reporting
    pub(crate) fn next_record(&mut self, name: &'static str) -> Result<Record, ParseError> {
        loop {
            self.buffer.clear();
            let read = self
                .input
                .read_line(&mut self.buffer)
                .map_err(|_| ParseError::InvalidText { line: self.line + 1 })?;
            if read == 0 {
                return Err(ParseError::UnexpectedEof { record: name });
            }
            self.line += 1;

            let fields: Vec<String> = strip_comment(&self.buffer)
                .split_whitespace()
                .map(str::to_string)
                .collect();
            if !fields.is_empty() {
                return Ok(Record {
                    line: self.line,
                    name,
                    fields,
                });
            }
        }
    }
}
